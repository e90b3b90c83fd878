//! Background job plumbing: worker threads feeding one mpsc channel that the
//! controller drains at the top of every frame.
//!
//! Each loader stamps its requests with a monotonically increasing id; the
//! drain side discards results whose id is no longer the loader's latest, so
//! a superseded fetch can never overwrite a newer render.

use std::sync::mpsc::{Receiver, Sender, TryRecvError, channel};
use std::thread;

use crate::api::{
    ApiClient, ApiError, BatchResponse, CreateObjectResponse, DashboardSummary, DataObject,
    MessageResponse, NewDataObject, Rule, SecurityEvent, Threat, WeightConfig, WeightUpdate,
};

pub(crate) enum JobMessage {
    DashboardLoaded {
        request_id: u64,
        result: Result<DashboardSummary, ApiError>,
    },
    ObjectsLoaded {
        request_id: u64,
        result: Result<Vec<DataObject>, ApiError>,
    },
    ThreatsLoaded {
        request_id: u64,
        result: Result<Vec<Threat>, ApiError>,
    },
    WeightsLoaded {
        request_id: u64,
        result: Result<Vec<WeightConfig>, ApiError>,
    },
    RulesLoaded {
        request_id: u64,
        result: Result<Vec<Rule>, ApiError>,
    },
    EventsLoaded {
        request_id: u64,
        result: Result<Vec<SecurityEvent>, ApiError>,
    },
    ObjectCreated(Result<CreateObjectResponse, ApiError>),
    ObjectDeleted(Result<MessageResponse, ApiError>),
    WeightsSaved(Result<MessageResponse, ApiError>),
    BatchAssessed(Result<BatchResponse, ApiError>),
}

pub(crate) struct ControllerJobs {
    message_tx: Sender<JobMessage>,
    message_rx: Receiver<JobMessage>,
    next_request_id: u64,
    in_flight: usize,
    pub(super) latest_dashboard: u64,
    pub(super) latest_objects: u64,
    pub(super) latest_threats: u64,
    pub(super) latest_weights: u64,
    pub(super) latest_rules: u64,
    pub(super) latest_events: u64,
    pub(super) create_in_progress: bool,
    pub(super) delete_in_progress: bool,
    pub(super) weights_save_in_progress: bool,
    pub(super) batch_in_progress: bool,
}

impl ControllerJobs {
    pub(super) fn new() -> Self {
        let (message_tx, message_rx) = channel::<JobMessage>();
        Self {
            message_tx,
            message_rx,
            next_request_id: 0,
            in_flight: 0,
            latest_dashboard: 0,
            latest_objects: 0,
            latest_threats: 0,
            latest_weights: 0,
            latest_rules: 0,
            latest_events: 0,
            create_in_progress: false,
            delete_in_progress: false,
            weights_save_in_progress: false,
            batch_in_progress: false,
        }
    }

    pub(super) fn try_recv_message(&self) -> Result<JobMessage, TryRecvError> {
        self.message_rx.try_recv()
    }

    #[cfg(test)]
    pub(super) fn message_sender(&self) -> Sender<JobMessage> {
        self.message_tx.clone()
    }

    pub(super) fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub(super) fn note_message_received(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    fn next_request_id(&mut self) -> u64 {
        self.next_request_id = self.next_request_id.wrapping_add(1).max(1);
        self.next_request_id
    }

    pub(super) fn begin_dashboard_load(&mut self, client: ApiClient) {
        let request_id = self.next_request_id();
        self.latest_dashboard = request_id;
        self.spawn(move |tx| {
            let result = client.dashboard();
            let _ = tx.send(JobMessage::DashboardLoaded { request_id, result });
        });
    }

    pub(super) fn begin_objects_load(&mut self, client: ApiClient) {
        let request_id = self.next_request_id();
        self.latest_objects = request_id;
        self.spawn(move |tx| {
            let result = client.data_objects();
            let _ = tx.send(JobMessage::ObjectsLoaded { request_id, result });
        });
    }

    pub(super) fn begin_threats_load(&mut self, client: ApiClient, stage: Option<String>) {
        let request_id = self.next_request_id();
        self.latest_threats = request_id;
        self.spawn(move |tx| {
            let result = client.threats(stage.as_deref());
            let _ = tx.send(JobMessage::ThreatsLoaded { request_id, result });
        });
    }

    pub(super) fn begin_weights_load(&mut self, client: ApiClient) {
        let request_id = self.next_request_id();
        self.latest_weights = request_id;
        self.spawn(move |tx| {
            let result = client.weights();
            let _ = tx.send(JobMessage::WeightsLoaded { request_id, result });
        });
    }

    pub(super) fn begin_rules_load(&mut self, client: ApiClient) {
        let request_id = self.next_request_id();
        self.latest_rules = request_id;
        self.spawn(move |tx| {
            let result = client.rules();
            let _ = tx.send(JobMessage::RulesLoaded { request_id, result });
        });
    }

    pub(super) fn begin_events_load(&mut self, client: ApiClient) {
        let request_id = self.next_request_id();
        self.latest_events = request_id;
        self.spawn(move |tx| {
            let result = client.events();
            let _ = tx.send(JobMessage::EventsLoaded { request_id, result });
        });
    }

    pub(super) fn begin_object_create(&mut self, client: ApiClient, object: NewDataObject) {
        self.create_in_progress = true;
        self.spawn(move |tx| {
            let result = client.create_data_object(&object);
            let _ = tx.send(JobMessage::ObjectCreated(result));
        });
    }

    pub(super) fn begin_object_delete(&mut self, client: ApiClient, id: i64) {
        self.delete_in_progress = true;
        self.spawn(move |tx| {
            let result = client.delete_data_object(id);
            let _ = tx.send(JobMessage::ObjectDeleted(result));
        });
    }

    pub(super) fn begin_weights_save(&mut self, client: ApiClient, updates: Vec<WeightUpdate>) {
        self.weights_save_in_progress = true;
        self.spawn(move |tx| {
            let result = client.replace_weights(&updates);
            let _ = tx.send(JobMessage::WeightsSaved(result));
        });
    }

    pub(super) fn begin_batch_assessment(
        &mut self,
        client: ApiClient,
        objects: Vec<serde_json::Value>,
    ) {
        self.batch_in_progress = true;
        self.spawn(move |tx| {
            let result = client.batch_assessment(&objects);
            let _ = tx.send(JobMessage::BatchAssessed(result));
        });
    }

    fn spawn(&mut self, job: impl FnOnce(Sender<JobMessage>) + Send + 'static) {
        self.in_flight += 1;
        let tx = self.message_tx.clone();
        thread::spawn(move || job(tx));
    }
}
