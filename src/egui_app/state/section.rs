//! Explicit finite-state model of the active view.

/// Mutually exclusive views of the desk; exactly one is active at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Section {
    /// Summary charts and totals; the initial view.
    #[default]
    Dashboard,
    DataObjects,
    Threats,
    Weights,
    Rules,
    Events,
    /// Ad-hoc batch assessment; has no loader of its own.
    Assessment,
}

impl Section {
    /// Every section in nav order.
    pub const ALL: [Section; 7] = [
        Section::Dashboard,
        Section::DataObjects,
        Section::Threats,
        Section::Weights,
        Section::Rules,
        Section::Events,
        Section::Assessment,
    ];

    /// Stable id used by nav surfaces.
    pub fn id(self) -> &'static str {
        match self {
            Section::Dashboard => "dashboard",
            Section::DataObjects => "data-objects",
            Section::Threats => "threats",
            Section::Weights => "weights",
            Section::Rules => "rules",
            Section::Events => "events",
            Section::Assessment => "assessment",
        }
    }

    /// Human-readable nav label.
    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "Dashboard",
            Section::DataObjects => "Data objects",
            Section::Threats => "Threats",
            Section::Weights => "Weights",
            Section::Rules => "Rules",
            Section::Events => "Events",
            Section::Assessment => "Assessment",
        }
    }

    /// Resolve a nav id; unknown ids yield `None` and callers no-op.
    pub fn from_id(id: &str) -> Option<Section> {
        Section::ALL.into_iter().find(|section| section.id() == id)
    }
}
