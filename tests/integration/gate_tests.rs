//! Gate behavior over HTTP: loading transitions and stale-result discard

use crate::common::{gate, grant_body};
use permgate::GateState;
use std::sync::Arc;
use std::time::Duration;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn gate_transitions_from_loading_to_resolved() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/permissions/role/employee"))
        .respond_with(ResponseTemplate::new(200).set_body_json(grant_body(&["task_view"])))
        .mount(&server)
        .await;

    let (_, gate) = gate(&server);
    let mut receiver = gate.subscribe();

    assert_eq!(gate.state(), GateState {
        loading: true,
        allowed: false
    });

    let allowed = gate.check(Some("employee"), "task_view").await;
    assert_eq!(allowed, Some(true));

    receiver.changed().await.expect("gate still alive");
    let state = *receiver.borrow();
    assert!(!state.loading);
    assert!(state.allowed);
}

#[tokio::test]
async fn gate_fails_closed_on_backend_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/permissions/role/employee"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (_, gate) = gate(&server);

    assert_eq!(gate.check(Some("employee"), "task_view").await, Some(false));
    assert_eq!(gate.state(), GateState {
        loading: false,
        allowed: false
    });
}

#[tokio::test]
async fn newer_check_wins_over_slow_stale_resolution() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/permissions/role/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(grant_body(&["task_delete"]))
                .set_delay(Duration::from_millis(300)),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/permissions/role/fast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(grant_body(&["task_view"])))
        .mount(&server)
        .await;

    let (_, gate) = gate(&server);
    let gate = Arc::new(gate);

    let stalled = {
        let gate = Arc::clone(&gate);
        tokio::spawn(async move { gate.check(Some("slow"), "task_delete").await })
    };
    // Let the slow check reach its fetch before superseding it.
    tokio::time::sleep(Duration::from_millis(50)).await;

    assert_eq!(gate.check(Some("fast"), "task_view").await, Some(true));

    let stale = stalled.await.expect("task completes");
    assert_eq!(stale, None);
    assert_eq!(gate.state(), GateState {
        loading: false,
        allowed: true
    });
}
