mod common;

use std::time::Duration;

use common::*;
use nxg_status::{
    Aggregator, ClientProfile, DisplayModel, EndpointKind, EndpointResult, EndpointSpec,
    HttpTransport, Reachability, StatusLevel, TransportError,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn unreachable() -> TransportError {
    TransportError::Unreachable("connection refused".to_string())
}

#[tokio::test]
async fn test_site_profile_over_http() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(root_payload()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(degraded_health_payload()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/workflows"))
        .respond_with(ResponseTemplate::new(200).set_body_json(workflows_payload()))
        .mount(&server)
        .await;

    let aggregator = Aggregator::new(HttpTransport::new(config_for(&server)).unwrap());
    let results = aggregator.load_all(&ClientProfile::Site.endpoints()).await;

    assert_eq!(results.len(), 3);
    assert_eq!(results.ok_count(), 3);

    let status = results.get("status").unwrap().model().unwrap();
    let status = status.as_system_status().unwrap();
    assert_eq!(status.status, "operational");
    assert_eq!(status.architecture_label(), "G V2 NovaBase");

    let health = results.get("health").unwrap().model().unwrap();
    let health = health.as_health().unwrap();
    assert_eq!(health.level(), StatusLevel::Degraded);
    assert_eq!(health.component("db").unwrap().level, StatusLevel::Healthy);
    let cache = health.component("cache").unwrap();
    assert_eq!(cache.level, StatusLevel::Error);
    assert_eq!(cache.message.as_deref(), Some("timeout"));

    let workflows = results.get("workflows").unwrap().model().unwrap();
    let workflows = workflows.as_workflows().unwrap();
    assert_eq!(workflows.len(), 2);
    assert_eq!(workflows[0].node_count, 2);
    assert_eq!(workflows[1].name, "Untitled Workflow");
}

#[tokio::test]
async fn test_health_scenario() {
    let transport = ScriptedTransport::new().respond("/health", health_payload());
    let results = Aggregator::new(transport)
        .load_all(&[EndpointSpec::health_status()])
        .await;

    let model = results.get("status").unwrap().model().unwrap();
    let status = model.as_system_status().unwrap();
    assert_eq!(status.status, "healthy");
    assert_eq!(status.version, "6.0.0");
    assert_eq!(status.reachability, Reachability::Reachable);
}

#[tokio::test]
async fn test_empty_workflow_list_is_ok() {
    let transport = ScriptedTransport::new().respond("/api/v1/workflows", json!([]));
    let results = Aggregator::new(transport)
        .load_all(&[EndpointSpec::workflows()])
        .await;

    assert_eq!(
        results.get("workflows"),
        Some(&EndpointResult::Ok(DisplayModel::Workflows(vec![])))
    );
}

#[tokio::test]
async fn test_flows_failure_leaves_health_untouched() {
    let transport = ScriptedTransport::new()
        .respond("/health", health_payload())
        .fail("/flows", unreachable());
    let results = Aggregator::new(transport)
        .load_all(&ClientProfile::Spa.endpoints())
        .await;

    assert_eq!(results.len(), 2);
    assert_eq!(
        results.get("flows").unwrap().error(),
        Some(&unreachable())
    );

    let status = results.get("status").unwrap().model().unwrap();
    assert_eq!(status.as_system_status().unwrap().status, "healthy");
}

#[tokio::test]
async fn test_http_failure_is_isolated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(health_payload()))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/flows"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let aggregator = Aggregator::new(HttpTransport::new(config_for(&server)).unwrap());
    let results = aggregator.load_all(&ClientProfile::Spa.endpoints()).await;

    assert!(results.get("status").unwrap().is_ok());
    assert!(matches!(
        results.get("flows").unwrap().error(),
        Some(TransportError::Status { status: 500, .. })
    ));
}

#[tokio::test]
async fn test_exactly_one_failure_whichever_endpoint_fails() {
    let endpoints = ClientProfile::Full.endpoints();

    for failing in &endpoints {
        let mut transport = ScriptedTransport::new();
        for endpoint in &endpoints {
            transport = if endpoint.id == failing.id {
                transport.fail(&endpoint.path, unreachable())
            } else {
                transport.respond(&endpoint.path, json!({"status": "healthy"}))
            };
        }

        let results = Aggregator::new(transport).load_all(&endpoints).await;

        assert_eq!(results.len(), endpoints.len());
        assert_eq!(results.failed_count(), 1, "failing {}", failing.id);
        assert_eq!(results.ok_count(), endpoints.len() - 1);
        assert!(results.get(&failing.id).unwrap().is_failed());
    }
}

#[tokio::test]
async fn test_unreachable_backend_yields_placeholders() {
    let aggregator = Aggregator::new(HttpTransport::new(unreachable_config()).unwrap());
    let endpoints = ClientProfile::Site.endpoints();
    let results = aggregator.load_all(&endpoints).await;

    assert_eq!(results.failed_count(), 3);

    for (endpoint, result) in results.iter() {
        match result.display(endpoint.kind) {
            DisplayModel::SystemStatus(status) => {
                assert_eq!(status.reachability, Reachability::Unreachable);
                assert_eq!(status.status, "connecting");
            }
            DisplayModel::Health(report) => {
                assert_eq!(report.reachability, Reachability::Unreachable);
                assert_eq!(report.version, "6.0.0");
            }
            DisplayModel::Workflows(list) => assert!(list.is_empty()),
        }
    }
}

#[tokio::test]
async fn test_duplicate_ids_load_once() {
    let transport = ScriptedTransport::new()
        .respond("/health", health_payload())
        .respond("/status", json!({"components": {}}));
    let endpoints = vec![
        EndpointSpec::health(),
        EndpointSpec::new("health", "/status", EndpointKind::Health),
    ];

    let results = Aggregator::new(transport.clone()).load_all(&endpoints).await;

    assert_eq!(results.len(), 1);
    assert_eq!(transport.calls(), 1);
}

#[tokio::test]
async fn test_no_endpoints() {
    let aggregator = Aggregator::new(ScriptedTransport::new());
    assert!(aggregator.load_all(&[]).await.is_empty());

    let mut load = aggregator.spawn(&[]);
    assert!(load.is_complete());
    assert!(load.next_update().await.is_none());
}

#[tokio::test]
async fn test_updates_arrive_as_each_endpoint_resolves() {
    let transport = ScriptedTransport::new()
        .respond_after("/", Duration::from_millis(400), root_payload())
        .respond_after("/health", Duration::from_millis(10), health_payload())
        .fail_after(
            "/api/v1/workflows",
            Duration::from_millis(100),
            unreachable(),
        );

    let aggregator = Aggregator::new(transport);
    let mut load = aggregator.spawn(&[
        EndpointSpec::system_status(),
        EndpointSpec::health(),
        EndpointSpec::workflows(),
    ]);

    assert!(load.current("status").unwrap().is_pending());

    let first = load.next_update().await.unwrap();
    assert_eq!(first.endpoint.id, "health");
    assert!(first.result.is_ok());
    // The slow root endpoint has not held anything back
    assert!(load.current("status").unwrap().is_pending());

    let second = load.next_update().await.unwrap();
    assert_eq!(second.endpoint.id, "workflows");
    assert!(second.result.is_failed());
    assert!(load.current("health").unwrap().is_ok());

    let third = load.next_update().await.unwrap();
    assert_eq!(third.endpoint.id, "status");
    assert!(load.next_update().await.is_none());
    assert!(load.is_complete());

    let snapshot = load.snapshot();
    assert_eq!(snapshot.ok_count(), 2);
    assert_eq!(snapshot.failed_count(), 1);
}

#[tokio::test]
async fn test_subscribe_sees_transition() {
    let transport = ScriptedTransport::new().respond_after(
        "/health",
        Duration::from_millis(20),
        degraded_health_payload(),
    );
    let load = Aggregator::new(transport).spawn(&[EndpointSpec::health()]);

    let mut rx = load.subscribe("health").unwrap();
    assert!(rx.borrow().is_pending());

    rx.changed().await.unwrap();
    let result = rx.borrow().clone();
    let report = result.model().unwrap().as_health().unwrap().clone();
    assert_eq!(report.status, "degraded");

    assert!(load.subscribe("flows").is_none());
}

#[tokio::test]
async fn test_wait_collects_every_result() {
    let transport = ScriptedTransport::new()
        .respond_after("/health", Duration::from_millis(30), health_payload())
        .respond("/flows", workflows_payload());
    let results = Aggregator::new(transport)
        .spawn(&ClientProfile::Spa.endpoints())
        .wait()
        .await;

    assert_eq!(results.len(), 2);
    assert_eq!(results.ok_count(), 2);
    assert_eq!(results.pending_count(), 0);
}

#[tokio::test]
async fn test_dropped_load_discards_results() {
    let transport = ScriptedTransport::new()
        .respond_after("/health", Duration::from_millis(100), health_payload())
        .respond_after("/flows", Duration::from_millis(100), workflows_payload());
    let aggregator = Aggregator::new(transport.clone());

    let load = aggregator.spawn(&ClientProfile::Spa.endpoints());
    tokio::time::sleep(Duration::from_millis(20)).await;
    drop(load);

    tokio::time::sleep(Duration::from_millis(250)).await;
    assert_eq!(transport.calls(), 2);
    assert_eq!(transport.completed(), 0);
}

#[tokio::test]
async fn test_cancel_leaves_unresolved_slots_pending() {
    let transport = ScriptedTransport::new()
        .respond("/health", health_payload())
        .respond_after("/flows", Duration::from_secs(5), workflows_payload());
    let mut load = Aggregator::new(transport).spawn(&ClientProfile::Spa.endpoints());

    let update = load.next_update().await.unwrap();
    assert_eq!(update.endpoint.id, "status");

    let results = load.cancel();
    assert!(results.get("status").unwrap().is_ok());
    assert!(results.get("flows").unwrap().is_pending());
}

#[tokio::test]
async fn test_reload_produces_fresh_results() {
    let transport = ScriptedTransport::new().fail("/health", TransportError::Timeout);
    let aggregator = Aggregator::new(transport.clone());

    let first = aggregator.spawn(&[EndpointSpec::health()]);
    let second = aggregator.spawn(&[EndpointSpec::health()]);
    assert_ne!(first.load_id(), second.load_id());

    let first = first.wait().await;
    let second = second.wait().await;
    assert!(first.get("health").unwrap().is_failed());
    assert!(second.get("health").unwrap().is_failed());
    assert_eq!(transport.calls(), 2);
}
