use crate::api::{ApiError, Threat};

use super::*;

impl Controller {
    pub fn refresh_threats(&mut self) {
        let stage = self.ui.threats.stage_filter.clone();
        self.jobs.begin_threats_load(self.client.clone(), stage);
    }

    /// Applies a lifecycle stage filter and reloads. `None` means all stages.
    pub fn set_stage_filter(&mut self, stage: Option<String>) {
        self.ui.threats.stage_filter = stage;
        self.refresh_threats();
    }

    pub(super) fn apply_threats(&mut self, result: Result<Vec<Threat>, ApiError>) {
        match result {
            Ok(rows) => self.ui.threats.rows = rows,
            Err(error) => self.report_load_failure("threats", &error),
        }
    }
}
