mod support;

use std::time::{Duration, Instant};

use support::{RecordedRequest, StubServer};

use riskdesk::config::Settings;
use riskdesk::egui_app::controller::Controller;
use riskdesk::egui_app::state::Severity;

fn controller_for(server: &StubServer) -> Controller {
    let settings = Settings {
        backend_url: server.base_url().to_string(),
    };
    Controller::new(&settings).expect("controller")
}

/// Polls background jobs until `done` holds, failing after two seconds.
fn wait_until(controller: &mut Controller, done: impl Fn(&Controller) -> bool) {
    let deadline = Instant::now() + Duration::from_secs(2);
    loop {
        controller.poll_jobs();
        if done(controller) {
            return;
        }
        assert!(Instant::now() < deadline, "timed out waiting for background work");
        std::thread::sleep(Duration::from_millis(5));
    }
}

fn path(request: &RecordedRequest) -> &str {
    request.target.split('?').next().unwrap_or(&request.target)
}

fn objects_body() -> String {
    r#"[{
        "id": 1,
        "name": "trajectory-7",
        "data_type": "trajectory",
        "lifecycle_stage": "storage",
        "security_score": 0.62,
        "security_level": "important",
        "updated_at": "2024-03-05T09:30:00"
    }]"#
    .to_string()
}

fn route(request: &RecordedRequest) -> (u16, String) {
    match (request.method.as_str(), path(request)) {
        ("GET", "/api/data-objects") => (200, objects_body()),
        ("DELETE", "/api/data-objects/1") => (200, r#"{"message": "Deleted"}"#.to_string()),
        ("GET", "/api/threats") => (
            200,
            r#"[{
                "threat_id": "t-1",
                "threat_type": "unauthorized_access",
                "stage": "storage",
                "risk_level": 0.8,
                "description": "exposed bucket",
                "impact_scope": "org"
            }]"#
            .to_string(),
        ),
        ("GET", "/api/weights") => (
            200,
            r#"[
                {"indicator_name": "S", "weight": 0.3, "calculation_method": "weighted_sum"},
                {"indicator_name": "P", "weight": 0.2, "calculation_method": "weighted_sum"},
                {"indicator_name": "C", "weight": 0.2, "calculation_method": "weighted_sum"},
                {"indicator_name": "F", "weight": 0.2, "calculation_method": "weighted_sum"},
                {"indicator_name": "H", "weight": 0.1, "calculation_method": "weighted_sum"}
            ]"#
            .to_string(),
        ),
        ("PUT", "/api/weights") => (200, r#"{"message": "Weights updated"}"#.to_string()),
        ("POST", "/api/batch-assessment") => (
            200,
            r#"{
                "message": "Assessed 2 objects",
                "results": [
                    {"name": "a", "security_score": 0.41, "security_level": "internal"},
                    {"name": "b", "security_score": 0.83, "security_level": "core"}
                ]
            }"#
            .to_string(),
        ),
        _ => (404, r#"{"error": "not found"}"#.to_string()),
    }
}

#[test]
fn object_load_populates_rows() {
    let server = StubServer::start(route);
    let mut controller = controller_for(&server);
    controller.refresh_objects();
    wait_until(&mut controller, |c| !c.ui.objects.rows.is_empty());
    assert_eq!(controller.ui.objects.rows[0].name, "trajectory-7");
    assert_eq!(controller.ui.objects.rows[0].security_level, "important");
}

#[test]
fn confirmed_delete_sends_one_delete_then_reloads_once() {
    let server = StubServer::start(route);
    let mut controller = controller_for(&server);
    controller.refresh_objects();
    wait_until(&mut controller, |c| !c.ui.objects.rows.is_empty());

    controller.request_delete_object(1, "trajectory-7".to_string());
    controller.confirm_delete_object();
    wait_until(&mut controller, |c| {
        c.ui.notices.iter().any(|n| n.severity == Severity::Success)
    });
    // The reload triggered by the delete must land before counting.
    wait_until(&mut controller, |_| {
        server
            .requests()
            .iter()
            .filter(|r| r.method == "GET" && path(r) == "/api/data-objects")
            .count()
            == 2
    });

    let deletes = server
        .requests()
        .iter()
        .filter(|r| r.method == "DELETE")
        .count();
    assert_eq!(deletes, 1);
}

#[test]
fn threat_filter_round_trips_to_the_backend() {
    let server = StubServer::start(route);
    let mut controller = controller_for(&server);
    controller.set_stage_filter(Some("storage".to_string()));
    wait_until(&mut controller, |c| !c.ui.threats.rows.is_empty());
    assert_eq!(controller.ui.threats.rows[0].threat_type, "unauthorized_access");
    assert!(
        server
            .requests()
            .iter()
            .any(|r| r.target == "/api/threats?stage=storage")
    );
}

#[test]
fn weight_save_round_trip_reloads_the_editor() {
    let server = StubServer::start(route);
    let mut controller = controller_for(&server);
    controller.refresh_weights();
    wait_until(&mut controller, |c| !c.ui.weights.rows.is_empty());
    assert_eq!(controller.ui.weights.rows.len(), 5);

    controller.save_weights();
    wait_until(&mut controller, |c| {
        c.ui.notices.iter().any(|n| n.message == "Weights updated")
    });
    let puts = server
        .requests()
        .iter()
        .filter(|r| r.method == "PUT")
        .count();
    assert_eq!(puts, 1);
}

#[test]
fn batch_run_replaces_results_and_reports_success() {
    let server = StubServer::start(route);
    let mut controller = controller_for(&server);
    controller.ui.batch.input = r#"[{"name": "a"}, {"name": "b"}]"#.to_string();
    controller.run_batch_assessment();
    wait_until(&mut controller, |c| !c.ui.batch.results.is_empty());
    assert_eq!(controller.ui.batch.results.len(), 2);
    assert_eq!(controller.ui.batch.results[1].security_level, "core");
    assert!(
        controller
            .ui
            .notices
            .iter()
            .any(|n| n.message == "Assessed 2 objects")
    );
}

#[test]
fn failed_load_raises_a_danger_notice_and_keeps_state() {
    let server = StubServer::start(|_| (500, r#"{"error": "boom"}"#.to_string()));
    let mut controller = controller_for(&server);
    controller.refresh_rules();
    wait_until(&mut controller, |c| !c.ui.notices.is_empty());
    let notice = controller.ui.notices.iter().next().expect("notice");
    assert_eq!(notice.severity, Severity::Danger);
    assert!(notice.message.contains("HTTP 500"));
    assert!(controller.ui.rules.rows.is_empty());
}
