mod support;

use support::StubServer;

use riskdesk::api::{ApiClient, ApiError, NewDataObject, WeightUpdate};

fn client(server: &StubServer) -> ApiClient {
    ApiClient::new(server.base_url()).expect("valid base url")
}

#[test]
fn dashboard_fetch_hits_the_analytics_endpoint() {
    let server = StubServer::with_json(
        r#"{
            "total_data_objects": 3,
            "total_threats": 2,
            "total_rules": 1,
            "security_level_distribution": [{"level": "core", "count": 3}],
            "lifecycle_stage_distribution": [{"stage": "storage", "count": 3}],
            "threat_statistics": [{"stage": "storage", "count": 2, "avg_risk": 0.55}],
            "recent_events": []
        }"#,
    );
    let summary = client(&server).dashboard().expect("dashboard");
    assert_eq!(summary.total_data_objects, 3);
    assert_eq!(summary.threat_statistics[0].avg_risk, 0.55);

    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, "GET");
    assert_eq!(requests[0].target, "/api/analytics/dashboard");
}

#[test]
fn create_object_posts_the_form_payload() {
    let server = StubServer::with_json(
        r#"{"message": "Data object created", "executed_actions": [{"action": "alert"}]}"#,
    );
    let object = NewDataObject {
        name: "trajectory-7".to_string(),
        data_type: "trajectory".to_string(),
        lifecycle_stage: "creation".to_string(),
        spatial_scale: 0.8,
        position_accuracy: 0.6,
        content_sensitivity: 0.4,
        data_flow: 0.2,
        historical_risk: 0.1,
    };
    let response = client(&server)
        .create_data_object(&object)
        .expect("create object");
    assert_eq!(response.message, "Data object created");
    assert_eq!(response.executed_actions.len(), 1);

    let requests = server.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].target, "/api/data-objects");
    let sent: serde_json::Value = serde_json::from_str(&requests[0].body).expect("json body");
    assert_eq!(sent["name"], "trajectory-7");
    assert_eq!(sent["spatial_scale"], 0.8);
}

#[test]
fn delete_targets_the_object_id() {
    let server = StubServer::with_json(r#"{"message": "Deleted"}"#);
    client(&server).delete_data_object(42).expect("delete");

    let requests = server.requests();
    assert_eq!(requests[0].method, "DELETE");
    assert_eq!(requests[0].target, "/api/data-objects/42");
}

#[test]
fn threat_stage_filter_becomes_a_query_parameter() {
    let server = StubServer::with_json("[]");
    let client = client(&server);
    client.threats(None).expect("unfiltered");
    client.threats(Some("storage")).expect("filtered");

    let requests = server.requests();
    assert_eq!(requests[0].target, "/api/threats");
    assert_eq!(requests[1].target, "/api/threats?stage=storage");
}

#[test]
fn weight_save_puts_the_full_set() {
    let server = StubServer::with_json(r#"{"message": "Weights updated"}"#);
    let updates = vec![
        WeightUpdate {
            indicator_name: "S".to_string(),
            weight: 0.3,
        },
        WeightUpdate {
            indicator_name: "P".to_string(),
            weight: 0.7,
        },
    ];
    client(&server).replace_weights(&updates).expect("save");

    let requests = server.requests();
    assert_eq!(requests[0].method, "PUT");
    assert_eq!(requests[0].target, "/api/weights");
    let sent: serde_json::Value = serde_json::from_str(&requests[0].body).expect("json body");
    assert_eq!(sent.as_array().map(Vec::len), Some(2));
    assert_eq!(sent[0]["indicator_name"], "S");
}

#[test]
fn batch_assessment_wraps_objects_in_the_envelope() {
    let server = StubServer::with_json(
        r#"{
            "message": "Assessed 1 objects",
            "results": [{"name": "a", "security_score": 0.61, "security_level": "important"}]
        }"#,
    );
    let objects = vec![serde_json::json!({"name": "a", "spatial_scale": 0.9})];
    let response = client(&server).batch_assessment(&objects).expect("batch");
    assert_eq!(response.results.len(), 1);
    assert_eq!(response.results[0].security_level, "important");

    let requests = server.requests();
    assert_eq!(requests[0].target, "/api/batch-assessment");
    let sent: serde_json::Value = serde_json::from_str(&requests[0].body).expect("json body");
    assert!(sent["data_objects"].is_array());
}

#[test]
fn error_status_carries_the_backend_body() {
    let server = StubServer::start(|_| (404, r#"{"error": "Data object not found"}"#.to_string()));
    let err = client(&server).delete_data_object(9).unwrap_err();
    match err {
        ApiError::Status { code, body } => {
            assert_eq!(code, 404);
            assert!(body.contains("not found"));
        }
        other => panic!("expected status error, got {other}"),
    }
}

#[test]
fn empty_success_body_is_a_decode_error() {
    let server = StubServer::with_json("");
    let err = client(&server).rules().unwrap_err();
    assert!(matches!(err, ApiError::Json(_)));
}
