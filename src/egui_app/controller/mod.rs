//! Controller bridging backend state to the egui renderer.
//!
//! One concern per file; every fallible path ends in a user-visible notice
//! and previously applied view state is never cleared on failure.

mod background_jobs;
mod batch;
mod dashboard;
mod events;
mod jobs;
mod objects;
mod rules;
mod sections;
mod threats;
mod weights;

use crate::api::{ApiClient, ApiError};
use crate::config::Settings;
use crate::egui_app::state::*;

use jobs::ControllerJobs;

/// Maintains desk state and bridges the API gateway to the egui UI.
pub struct Controller {
    /// View model consumed by the renderer.
    pub ui: UiState,
    charts: ChartRegistry,
    client: ApiClient,
    jobs: ControllerJobs,
}

impl Controller {
    /// Build a controller for the configured backend.
    pub fn new(settings: &Settings) -> Result<Self, ApiError> {
        let client = ApiClient::new(&settings.backend_url)?;
        Ok(Self {
            ui: UiState::default(),
            charts: ChartRegistry::default(),
            client,
            jobs: ControllerJobs::new(),
        })
    }

    /// Live chart models for the renderer.
    pub fn charts(&self) -> &ChartRegistry {
        &self.charts
    }

    /// Kick off the initial load for every view.
    pub fn load_initial(&mut self) {
        self.refresh_dashboard();
        self.refresh_objects();
        self.refresh_threats();
        self.refresh_weights();
        self.refresh_rules();
        self.refresh_events();
    }

    /// True while any background call is outstanding or notices are live.
    pub fn has_pending_work(&self) -> bool {
        self.jobs.in_flight() > 0 || !self.ui.notices.is_empty()
    }

    /// Push an operator-visible notice.
    pub(crate) fn notify(&mut self, message: impl Into<String>, severity: Severity) {
        let message = message.into();
        tracing::debug!(?severity, "{message}");
        self.ui.notices.push(message, severity);
    }

    /// Uniform failure path for loaders: log, notify once, keep prior state.
    pub(crate) fn report_load_failure(&mut self, what: &str, error: &ApiError) {
        tracing::warn!("Failed to load {what}: {error}");
        self.notify(format!("Request failed: {error}"), Severity::Danger);
    }
}
