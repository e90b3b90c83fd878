use crate::api::{ApiError, MessageResponse, WeightConfig, WeightUpdate};
use crate::egui_app::state::{Indicator, WeightRow};

use super::*;

/// How far the weight sum may drift from 1.0 before saving is refused.
pub(crate) const WEIGHT_SUM_TOLERANCE: f32 = 0.01;

impl Controller {
    pub fn refresh_weights(&mut self) {
        self.jobs.begin_weights_load(self.client.clone());
    }

    pub(super) fn apply_weights(&mut self, result: Result<Vec<WeightConfig>, ApiError>) {
        match result {
            Ok(configs) => self.ui.weights.rows = weight_rows(&configs),
            Err(error) => self.report_load_failure("weights", &error),
        }
    }

    /// Stores a slider or numeric edit, clamped to the valid range.
    pub fn set_weight(&mut self, indicator: Indicator, value: f32) {
        if let Some(row) = self
            .ui
            .weights
            .rows
            .iter_mut()
            .find(|row| row.indicator == indicator)
        {
            row.value = value.clamp(0.0, 1.0);
        }
    }

    pub fn save_weights(&mut self) {
        if self.jobs.weights_save_in_progress {
            return;
        }
        match weight_submission(&self.ui.weights.rows) {
            Ok(updates) => {
                self.jobs.begin_weights_save(self.client.clone(), updates);
            }
            Err(sum) => {
                self.notify(
                    format!("Weights must sum to 1.0; current sum is {sum:.2}"),
                    Severity::Warning,
                );
            }
        }
    }

    pub(super) fn apply_weights_saved(&mut self, result: Result<MessageResponse, ApiError>) {
        self.jobs.weights_save_in_progress = false;
        match result {
            Ok(response) => {
                self.notify(response.message, Severity::Success);
                self.refresh_weights();
            }
            Err(error) => {
                self.notify(format!("Save failed: {error}"), Severity::Danger);
            }
        }
    }
}

/// Builds editor rows in canonical indicator order, keeping whatever the
/// backend reported for indicators it knows about.
fn weight_rows(configs: &[WeightConfig]) -> Vec<WeightRow> {
    Indicator::ALL
        .iter()
        .map(|&indicator| {
            let config = configs
                .iter()
                .find(|config| config.indicator_name == indicator.code());
            WeightRow {
                indicator,
                value: config.map(|c| c.weight as f32).unwrap_or(0.0),
                calculation_method: config
                    .map(|c| c.calculation_method.clone())
                    .unwrap_or_default(),
            }
        })
        .collect()
}

/// Validates the edited rows and turns them into the save payload.
/// Returns the off-tolerance sum on failure so the caller can report it.
pub(crate) fn weight_submission(rows: &[WeightRow]) -> Result<Vec<WeightUpdate>, f32> {
    let sum: f32 = rows.iter().map(|row| row.value).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
        return Err(sum);
    }
    Ok(rows
        .iter()
        .map(|row| WeightUpdate {
            indicator_name: row.indicator.code().to_string(),
            weight: f64::from(row.value),
        })
        .collect())
}
