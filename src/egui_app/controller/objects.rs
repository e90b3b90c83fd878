use crate::api::{ApiError, CreateObjectResponse, DataObject, MessageResponse};
use crate::egui_app::state::PendingDelete;

use super::*;

impl Controller {
    pub fn refresh_objects(&mut self) {
        self.jobs.begin_objects_load(self.client.clone());
    }

    pub(super) fn apply_objects(&mut self, result: Result<Vec<DataObject>, ApiError>) {
        match result {
            Ok(rows) => self.ui.objects.rows = rows,
            Err(error) => self.report_load_failure("data objects", &error),
        }
    }

    pub fn open_add_object(&mut self) {
        self.ui.objects.add_open = true;
    }

    pub fn cancel_add_object(&mut self) {
        self.ui.objects.add_open = false;
        self.ui.objects.add_form.reset();
    }

    /// Sends the add form to the backend. An empty name gets a warning but
    /// the request is still sent; the server applies its own defaults.
    pub fn submit_add_object(&mut self) {
        if self.jobs.create_in_progress {
            return;
        }
        let request = self.ui.objects.add_form.to_request();
        if request.name.is_empty() {
            self.notify("Object name is empty; the server will assign a default", Severity::Warning);
        }
        self.jobs.begin_object_create(self.client.clone(), request);
    }

    pub(super) fn apply_object_created(&mut self, result: Result<CreateObjectResponse, ApiError>) {
        self.jobs.create_in_progress = false;
        match result {
            Ok(response) => {
                self.notify(response.message, Severity::Success);
                if !response.executed_actions.is_empty() {
                    self.notify(
                        format!("Rules executed: {}", response.executed_actions.len()),
                        Severity::Info,
                    );
                }
                self.ui.objects.add_open = false;
                self.ui.objects.add_form.reset();
                self.refresh_objects();
            }
            Err(error) => {
                self.notify(format!("Create failed: {error}"), Severity::Danger);
            }
        }
    }

    pub fn request_delete_object(&mut self, id: i64, name: String) {
        self.ui.objects.pending_delete = Some(PendingDelete { id, name });
    }

    pub fn cancel_delete_object(&mut self) {
        self.ui.objects.pending_delete = None;
    }

    pub fn confirm_delete_object(&mut self) {
        if self.jobs.delete_in_progress {
            return;
        }
        if let Some(pending) = self.ui.objects.pending_delete.take() {
            self.jobs.begin_object_delete(self.client.clone(), pending.id);
        }
    }

    pub(super) fn apply_object_deleted(&mut self, result: Result<MessageResponse, ApiError>) {
        self.jobs.delete_in_progress = false;
        match result {
            Ok(response) => {
                self.notify(response.message, Severity::Success);
                self.refresh_objects();
            }
            Err(error) => {
                self.notify(format!("Delete failed: {error}"), Severity::Danger);
            }
        }
    }
}
