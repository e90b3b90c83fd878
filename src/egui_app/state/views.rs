//! Per-section view states and the fixed indicator set.

use crate::api::{
    BatchResultRow, DashboardSummary, DataObject, NewDataObject, Rule, SecurityEvent, Threat,
};

/// Lifecycle stage labels offered by form controls. The backend treats
/// stages as opaque strings; this list only seeds the choice widgets.
pub const LIFECYCLE_STAGES: [&str; 5] = ["creation", "storage", "usage", "sharing", "destruction"];

/// Fixed scoring indicators, in submission order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    S,
    P,
    C,
    F,
    H,
}

impl Indicator {
    /// All five indicators in the order the backend expects on save.
    pub const ALL: [Indicator; 5] = [
        Indicator::S,
        Indicator::P,
        Indicator::C,
        Indicator::F,
        Indicator::H,
    ];

    /// Wire code for the indicator.
    pub fn code(self) -> &'static str {
        match self {
            Indicator::S => "S",
            Indicator::P => "P",
            Indicator::C => "C",
            Indicator::F => "F",
            Indicator::H => "H",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Indicator::S => "Spatial scale",
            Indicator::P => "Positional precision",
            Indicator::C => "Content sensitivity",
            Indicator::F => "Flow exposure",
            Indicator::H => "Historical risk",
        }
    }

    /// Resolve a wire code.
    pub fn from_code(code: &str) -> Option<Indicator> {
        Indicator::ALL
            .into_iter()
            .find(|indicator| indicator.code() == code)
    }
}

/// Dashboard view: a wholesale-replaced snapshot.
#[derive(Debug, Default)]
pub struct DashboardState {
    pub summary: Option<DashboardSummary>,
    pub loading: bool,
}

/// Data object list plus the add/delete interactions.
#[derive(Debug, Default)]
pub struct ObjectsState {
    pub rows: Vec<DataObject>,
    pub add_open: bool,
    pub add_form: AddObjectForm,
    /// Armed delete awaiting operator confirmation.
    pub pending_delete: Option<PendingDelete>,
}

/// Delete confirmation target.
#[derive(Clone, Debug)]
pub struct PendingDelete {
    pub id: i64,
    pub name: String,
}

/// In-progress, unsaved create-object form.
#[derive(Clone, Debug)]
pub struct AddObjectForm {
    pub name: String,
    pub data_type: String,
    pub lifecycle_stage: String,
    pub spatial_scale: f32,
    pub position_accuracy: f32,
    pub content_sensitivity: f32,
    pub data_flow: f32,
    pub historical_risk: f32,
}

impl Default for AddObjectForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            data_type: String::new(),
            lifecycle_stage: LIFECYCLE_STAGES[0].to_string(),
            spatial_scale: 0.0,
            position_accuracy: 0.0,
            content_sensitivity: 0.0,
            data_flow: 0.0,
            historical_risk: 0.0,
        }
    }
}

impl AddObjectForm {
    /// Build the wire payload from the current field values.
    pub fn to_request(&self) -> NewDataObject {
        NewDataObject {
            name: self.name.trim().to_string(),
            data_type: self.data_type.trim().to_string(),
            lifecycle_stage: self.lifecycle_stage.clone(),
            spatial_scale: f64::from(self.spatial_scale),
            position_accuracy: f64::from(self.position_accuracy),
            content_sensitivity: f64::from(self.content_sensitivity),
            data_flow: f64::from(self.data_flow),
            historical_risk: f64::from(self.historical_risk),
        }
    }

    /// Clear every field back to its default.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Threat list with the optional server-side stage filter.
#[derive(Debug, Default)]
pub struct ThreatsState {
    pub rows: Vec<Threat>,
    /// `None` means all stages.
    pub stage_filter: Option<String>,
}

/// One editable weight: a single authoritative value with two presentation
/// bindings (slider and numeric field).
#[derive(Clone, Debug)]
pub struct WeightRow {
    pub indicator: Indicator,
    pub value: f32,
    pub calculation_method: String,
}

/// Weight editor rows in submission order.
#[derive(Debug, Default)]
pub struct WeightsState {
    pub rows: Vec<WeightRow>,
}

/// Rule list.
#[derive(Debug, Default)]
pub struct RulesState {
    pub rows: Vec<Rule>,
}

/// Audit event list.
#[derive(Debug, Default)]
pub struct EventsState {
    pub rows: Vec<SecurityEvent>,
}

/// Batch assessment buffer and its latest results.
#[derive(Debug, Default)]
pub struct BatchState {
    /// Free-form operator input, expected to parse as a JSON array.
    pub input: String,
    /// Results of the last successful run, replaced wholesale.
    pub results: Vec<BatchResultRow>,
}
