//! Wire types for the backend's JSON payloads.
//!
//! Shapes are backend-owned contracts; the client deserializes what it
//! renders and tolerates extra fields.

use serde::{Deserialize, Serialize};

/// A classified data object as stored by the backend.
#[derive(Clone, Debug, Deserialize)]
pub struct DataObject {
    /// Server-assigned identifier.
    pub id: i64,
    pub name: String,
    pub data_type: String,
    /// Backend-defined lifecycle phase label.
    pub lifecycle_stage: String,
    /// Always in [0, 1]; computed by the backend, displayed as-is.
    pub security_score: f64,
    /// Categorical label derived from the score by the backend.
    pub security_level: String,
    pub updated_at: String,
}

/// A known threat scoped to a lifecycle stage.
#[derive(Clone, Debug, Deserialize)]
pub struct Threat {
    pub threat_id: String,
    pub threat_type: String,
    pub stage: String,
    /// Displayed with one decimal.
    pub risk_level: f64,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub impact_scope: String,
}

/// One scoring-weight entry.
#[derive(Clone, Debug, Deserialize)]
pub struct WeightConfig {
    /// One of the fixed indicator codes S, P, C, F, H.
    pub indicator_name: String,
    pub weight: f64,
    #[serde(default)]
    pub calculation_method: String,
}

/// Weight value submitted on save.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeightUpdate {
    /// Indicator code the value belongs to.
    pub indicator_name: String,
    pub weight: f64,
}

/// A backend-evaluated condition/action rule.
#[derive(Clone, Debug, Deserialize)]
pub struct Rule {
    pub rule_id: String,
    pub condition_type: String,
    /// Opaque JSON document; pretty-printed with raw-text fallback.
    pub condition_json: String,
    /// Opaque JSON document; pretty-printed with raw-text fallback.
    pub action_json: String,
    pub priority: i64,
    pub is_active: bool,
}

/// An audit event recorded by the rule engine.
#[derive(Clone, Debug, Deserialize)]
pub struct SecurityEvent {
    /// UUID-shaped; displayed truncated to its first 8 characters.
    pub event_id: String,
    pub trigger_condition: String,
    pub executed_strategy: String,
    pub result: String,
    pub event_time: String,
}

/// Count of data objects at one security level.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct LevelCount {
    pub level: String,
    pub count: i64,
}

/// Count of data objects in one lifecycle stage.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct StageCount {
    pub stage: String,
    pub count: i64,
}

/// Threat volume and average risk for one lifecycle stage.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct ThreatStageStat {
    pub stage: String,
    pub count: i64,
    pub avg_risk: f64,
}

/// Event excerpt shown on the dashboard.
#[derive(Clone, Debug, Deserialize)]
pub struct RecentEvent {
    pub event_id: String,
    pub trigger_condition: String,
    pub result: String,
    pub event_time: String,
}

/// Read-only dashboard snapshot, replaced wholesale on every refresh.
#[derive(Clone, Debug, Deserialize)]
pub struct DashboardSummary {
    pub total_data_objects: i64,
    pub total_threats: i64,
    /// Active rules only, per the backend.
    pub total_rules: i64,
    #[serde(default)]
    pub security_level_distribution: Vec<LevelCount>,
    #[serde(default)]
    pub lifecycle_stage_distribution: Vec<StageCount>,
    #[serde(default)]
    pub threat_statistics: Vec<ThreatStageStat>,
    #[serde(default)]
    pub recent_events: Vec<RecentEvent>,
}

/// Form payload for creating a data object.
#[derive(Clone, Debug, Default, Serialize)]
pub struct NewDataObject {
    pub name: String,
    pub data_type: String,
    pub lifecycle_stage: String,
    pub spatial_scale: f64,
    pub position_accuracy: f64,
    pub content_sensitivity: f64,
    pub data_flow: f64,
    pub historical_risk: f64,
}

/// Response to creating a data object.
#[derive(Clone, Debug, Deserialize)]
pub struct CreateObjectResponse {
    pub message: String,
    /// Actions fired by the rule engine, if any.
    #[serde(default)]
    pub executed_actions: Vec<serde_json::Value>,
}

/// Generic acknowledgement carrying a human-readable message.
#[derive(Clone, Debug, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// One row of a batch assessment result.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct BatchResultRow {
    #[serde(default)]
    pub name: String,
    pub security_score: f64,
    pub security_level: String,
}

/// Response to a batch assessment request.
#[derive(Clone, Debug, Deserialize)]
pub struct BatchResponse {
    pub message: String,
    #[serde(default)]
    pub results: Vec<BatchResultRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dashboard_summary_tolerates_missing_distributions() {
        let body = r#"{"total_data_objects":3,"total_threats":2,"total_rules":1}"#;
        let summary: DashboardSummary = serde_json::from_str(body).unwrap();
        assert_eq!(summary.total_data_objects, 3);
        assert!(summary.security_level_distribution.is_empty());
        assert!(summary.recent_events.is_empty());
    }

    #[test]
    fn data_object_ignores_extra_backend_fields() {
        let body = r#"{
            "id": 7,
            "name": "survey",
            "data_type": "document",
            "lifecycle_stage": "storage",
            "security_score": 0.42,
            "security_level": "important",
            "updated_at": "2024-05-01T10:00:00",
            "spatial_scale": 0.3,
            "created_at": "2024-04-30T09:00:00"
        }"#;
        let object: DataObject = serde_json::from_str(body).unwrap();
        assert_eq!(object.id, 7);
        assert_eq!(object.security_level, "important");
    }

    #[test]
    fn batch_row_defaults_missing_name() {
        let body = r#"{"security_score":0.5,"security_level":"general"}"#;
        let row: BatchResultRow = serde_json::from_str(body).unwrap();
        assert!(row.name.is_empty());
    }

    #[test]
    fn weight_update_serializes_code_and_value() {
        let update = WeightUpdate {
            indicator_name: "S".to_string(),
            weight: 0.25,
        };
        let json = serde_json::to_string(&update).unwrap();
        assert_eq!(json, r#"{"indicator_name":"S","weight":0.25}"#);
    }
}
