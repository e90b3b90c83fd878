//! Owned chart models keyed by slot.
//!
//! The registry guarantees at most one live model per slot: `upsert` always
//! drops the previous occupant before installing the replacement, so repeated
//! dashboard refreshes never accumulate stale widgets.

use std::collections::HashMap;

use crate::api::DashboardSummary;

/// Named chart positions on the dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChartSlot {
    SecurityLevels,
    LifecycleStages,
    ThreatStatistics,
}

/// How a model is rendered.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChartKind {
    Doughnut,
    Bars,
}

/// Render-ready chart data derived from one dashboard snapshot.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartModel {
    pub kind: ChartKind,
    /// Category labels, order-preserving from the source distribution.
    pub labels: Vec<String>,
    /// Primary values, 1:1 with `labels`.
    pub values: Vec<f64>,
    /// Optional 0.0-1.0 series drawn on an independent right-hand scale
    /// without gridlines.
    pub secondary: Option<Vec<f64>>,
}

/// Slot-keyed owner of live chart models.
#[derive(Debug, Default)]
pub struct ChartRegistry {
    slots: HashMap<ChartSlot, ChartModel>,
}

impl ChartRegistry {
    /// Replace whatever occupies `slot` with `model`.
    pub fn upsert(&mut self, slot: ChartSlot, model: ChartModel) {
        self.slots.remove(&slot);
        self.slots.insert(slot, model);
    }

    /// The live model for a slot, if any.
    pub fn get(&self, slot: ChartSlot) -> Option<&ChartModel> {
        self.slots.get(&slot)
    }

    /// Drop every live model.
    pub fn destroy_all(&mut self) {
        self.slots.clear();
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

/// Doughnut of data objects per security level.
pub fn security_level_chart(summary: &DashboardSummary) -> ChartModel {
    ChartModel {
        kind: ChartKind::Doughnut,
        labels: summary
            .security_level_distribution
            .iter()
            .map(|item| item.level.clone())
            .collect(),
        values: summary
            .security_level_distribution
            .iter()
            .map(|item| item.count as f64)
            .collect(),
        secondary: None,
    }
}

/// Bars of data objects per lifecycle stage.
pub fn lifecycle_chart(summary: &DashboardSummary) -> ChartModel {
    ChartModel {
        kind: ChartKind::Bars,
        labels: summary
            .lifecycle_stage_distribution
            .iter()
            .map(|item| item.stage.clone())
            .collect(),
        values: summary
            .lifecycle_stage_distribution
            .iter()
            .map(|item| item.count as f64)
            .collect(),
        secondary: None,
    }
}

/// Bars of threat volume per stage with an average-risk overlay.
pub fn threat_chart(summary: &DashboardSummary) -> ChartModel {
    ChartModel {
        kind: ChartKind::Bars,
        labels: summary
            .threat_statistics
            .iter()
            .map(|item| item.stage.clone())
            .collect(),
        values: summary
            .threat_statistics
            .iter()
            .map(|item| item.count as f64)
            .collect(),
        secondary: Some(
            summary
                .threat_statistics
                .iter()
                .map(|item| item.avg_risk)
                .collect(),
        ),
    }
}
