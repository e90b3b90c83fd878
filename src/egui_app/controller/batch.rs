use crate::api::{ApiError, BatchResponse};

use super::*;

#[derive(Debug, thiserror::Error)]
pub(crate) enum BatchInputError {
    #[error("Enter assessment data first")]
    Empty,
    #[error("Invalid JSON: {0}")]
    Parse(serde_json::Error),
    #[error("Input must be a JSON array of data objects")]
    NotAnArray,
}

impl BatchInputError {
    fn severity(&self) -> Severity {
        match self {
            BatchInputError::Empty => Severity::Warning,
            BatchInputError::Parse(_) | BatchInputError::NotAnArray => Severity::Danger,
        }
    }
}

/// Validates operator input for the batch workflow. The checks run in a
/// fixed order so the operator always sees the most specific complaint:
/// blank input, then malformed JSON, then valid JSON of the wrong shape.
pub(crate) fn parse_batch_input(input: &str) -> Result<Vec<serde_json::Value>, BatchInputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(BatchInputError::Empty);
    }
    let value: serde_json::Value =
        serde_json::from_str(trimmed).map_err(BatchInputError::Parse)?;
    match value {
        serde_json::Value::Array(objects) => Ok(objects),
        _ => Err(BatchInputError::NotAnArray),
    }
}

impl Controller {
    pub fn run_batch_assessment(&mut self) {
        if self.jobs.batch_in_progress {
            return;
        }
        match parse_batch_input(&self.ui.batch.input) {
            Ok(objects) => {
                self.jobs.begin_batch_assessment(self.client.clone(), objects);
            }
            Err(error) => {
                let severity = error.severity();
                self.notify(error.to_string(), severity);
            }
        }
    }

    pub(super) fn apply_batch_assessed(&mut self, result: Result<BatchResponse, ApiError>) {
        self.jobs.batch_in_progress = false;
        match result {
            Ok(response) => {
                self.ui.batch.results = response.results;
                self.notify(response.message, Severity::Success);
            }
            Err(error) => {
                self.notify(format!("Assessment failed: {error}"), Severity::Danger);
            }
        }
    }
}
