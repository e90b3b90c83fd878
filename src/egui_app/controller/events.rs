use crate::api::{ApiError, SecurityEvent};

use super::*;

impl Controller {
    pub fn refresh_events(&mut self) {
        self.jobs.begin_events_load(self.client.clone());
    }

    pub(super) fn apply_events(&mut self, result: Result<Vec<SecurityEvent>, ApiError>) {
        match result {
            Ok(rows) => self.ui.events.rows = rows,
            Err(error) => self.report_load_failure("events", &error),
        }
    }
}
