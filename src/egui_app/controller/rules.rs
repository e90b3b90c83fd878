use crate::api::{ApiError, Rule};

use super::*;

impl Controller {
    pub fn refresh_rules(&mut self) {
        self.jobs.begin_rules_load(self.client.clone());
    }

    pub(super) fn apply_rules(&mut self, result: Result<Vec<Rule>, ApiError>) {
        match result {
            Ok(rows) => self.ui.rules.rows = rows,
            Err(error) => self.report_load_failure("rules", &error),
        }
    }
}
