//! Shared state types for the egui UI.

mod charts;
mod notices;
mod section;
mod views;

pub use charts::*;
pub use notices::*;
pub use section::*;
pub use views::*;

/// Top-level UI model consumed by the egui renderer.
#[derive(Debug, Default)]
pub struct UiState {
    /// Currently visible section.
    pub section: Section,
    /// Transient operator-visible notices.
    pub notices: NoticeStack,
    pub dashboard: DashboardState,
    pub objects: ObjectsState,
    pub threats: ThreatsState,
    pub weights: WeightsState,
    pub rules: RulesState,
    pub events: EventsState,
    pub batch: BatchState,
}
