use crate::api::{ApiError, DashboardSummary};
use crate::egui_app::state::{ChartSlot, lifecycle_chart, security_level_chart, threat_chart};

use super::*;

impl Controller {
    pub fn refresh_dashboard(&mut self) {
        self.ui.dashboard.loading = true;
        self.jobs.begin_dashboard_load(self.client.clone());
    }

    pub(super) fn apply_dashboard(&mut self, result: Result<DashboardSummary, ApiError>) {
        self.ui.dashboard.loading = false;
        match result {
            Ok(summary) => {
                self.charts
                    .upsert(ChartSlot::SecurityLevels, security_level_chart(&summary));
                self.charts
                    .upsert(ChartSlot::LifecycleStages, lifecycle_chart(&summary));
                self.charts
                    .upsert(ChartSlot::ThreatStatistics, threat_chart(&summary));
                self.ui.dashboard.summary = Some(summary);
            }
            Err(error) => self.report_load_failure("dashboard", &error),
        }
    }
}
