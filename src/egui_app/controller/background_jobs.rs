use std::time::Instant;

use super::jobs::JobMessage;
use super::*;

impl Controller {
    /// Drains completed background work and applies it to the UI state.
    /// Call once per frame before rendering.
    pub fn poll_jobs(&mut self) {
        loop {
            let message = match self.jobs.try_recv_message() {
                Ok(message) => message,
                Err(_) => break,
            };
            self.jobs.note_message_received();
            self.apply_job_message(message);
        }
        self.ui.notices.prune(Instant::now());
    }

    fn apply_job_message(&mut self, message: JobMessage) {
        match message {
            JobMessage::DashboardLoaded { request_id, result } => {
                if request_id != self.jobs.latest_dashboard {
                    tracing::debug!(request_id, "discarding stale dashboard result");
                    return;
                }
                self.apply_dashboard(result);
            }
            JobMessage::ObjectsLoaded { request_id, result } => {
                if request_id != self.jobs.latest_objects {
                    tracing::debug!(request_id, "discarding stale data object result");
                    return;
                }
                self.apply_objects(result);
            }
            JobMessage::ThreatsLoaded { request_id, result } => {
                if request_id != self.jobs.latest_threats {
                    tracing::debug!(request_id, "discarding stale threat result");
                    return;
                }
                self.apply_threats(result);
            }
            JobMessage::WeightsLoaded { request_id, result } => {
                if request_id != self.jobs.latest_weights {
                    tracing::debug!(request_id, "discarding stale weight result");
                    return;
                }
                self.apply_weights(result);
            }
            JobMessage::RulesLoaded { request_id, result } => {
                if request_id != self.jobs.latest_rules {
                    tracing::debug!(request_id, "discarding stale rule result");
                    return;
                }
                self.apply_rules(result);
            }
            JobMessage::EventsLoaded { request_id, result } => {
                if request_id != self.jobs.latest_events {
                    tracing::debug!(request_id, "discarding stale event result");
                    return;
                }
                self.apply_events(result);
            }
            JobMessage::ObjectCreated(result) => self.apply_object_created(result),
            JobMessage::ObjectDeleted(result) => self.apply_object_deleted(result),
            JobMessage::WeightsSaved(result) => self.apply_weights_saved(result),
            JobMessage::BatchAssessed(result) => self.apply_batch_assessed(result),
        }
    }
}
