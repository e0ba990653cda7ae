//! Unit tests for the bootstrap sequence

use std::sync::{Arc, Mutex};

use crate::bootstrap::{
    connect_document_store, run_sequence, validate_relational, BootstrapError, RelationalStatus,
};
use crate::InfrastructureError;

use super::log_capture::capture;
use super::mocks::{CallLog, MockConnector, MockProbe};

fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

#[tokio::test]
async fn test_sequence_connects_document_store_first() {
    let calls = call_log();
    let connector = MockConnector::new(calls.clone(), false);
    let probe = MockProbe::new(calls.clone(), false);

    let databases = run_sequence(&connector, probe).await.unwrap();

    assert_eq!(*calls.lock().unwrap(), vec!["document", "relational"]);
    assert_eq!(databases.document, "mock-document-store");
    assert_eq!(databases.relational_status, RelationalStatus::Connected);
}

#[tokio::test]
async fn test_sequence_log_order() {
    let (logs, _guard) = capture();
    let calls = call_log();

    run_sequence(
        &MockConnector::new(calls.clone(), false),
        MockProbe::new(calls, false),
    )
    .await
    .unwrap();

    let mongo = logs.position("MongoDB connected").expect("document store log");
    let mysql = logs.position("MySQL connected").expect("relational log");
    assert!(mongo < mysql, "unexpected log order:\n{}", logs.contents());
}

#[tokio::test]
async fn test_document_store_failure_is_fatal_and_skips_relational() {
    let (logs, _guard) = capture();
    let calls = call_log();

    let result = run_sequence(
        &MockConnector::new(calls.clone(), true),
        MockProbe::new(calls.clone(), false),
    )
    .await;

    assert!(matches!(
        result,
        Err(BootstrapError::DocumentStore(InfrastructureError::Timeout(_)))
    ));
    assert_eq!(*calls.lock().unwrap(), vec!["document"]);

    let output = logs.contents();
    assert!(output.contains("ERROR"));
    assert!(output.contains("MongoDB connection error: timed out after 5ms"));
    assert!(!output.contains("MySQL"));
}

#[tokio::test]
async fn test_relational_failure_is_a_warning() {
    let (logs, _guard) = capture();
    let calls = call_log();

    let databases = run_sequence(
        &MockConnector::new(calls.clone(), false),
        MockProbe::new(calls.clone(), true),
    )
    .await
    .unwrap();

    let warning = databases.relational_status.warning().expect("degraded status");
    assert_eq!(warning.endpoint, "mock:3306/app");
    assert_eq!(warning.reason, "timed out after 5ms");
    assert_eq!(warning.to_string(), "MySQL connection error: timed out after 5ms");
    assert!(!databases.relational_status.is_connected());

    let output = logs.contents();
    assert!(output.contains("WARN"));
    assert!(output.contains("MySQL connection error"));
}

#[tokio::test]
async fn test_connect_document_store_returns_handle() {
    let connector = MockConnector::new(call_log(), false);
    let store = connect_document_store(&connector).await.unwrap();
    assert_eq!(store, "mock-document-store");
}

#[tokio::test]
async fn test_validate_relational_can_run_repeatedly() {
    let calls = call_log();
    let probe = MockProbe::new(calls.clone(), false);

    assert!(validate_relational(&probe).await.is_connected());
    assert!(validate_relational(&probe).await.is_connected());
    assert_eq!(calls.lock().unwrap().len(), 2);
}

#[test]
fn test_bootstrap_error_display() {
    let err = BootstrapError::DocumentStore(InfrastructureError::Timeout(
        std::time::Duration::from_secs(30),
    ));
    assert_eq!(err.to_string(), "MongoDB connection error: timed out after 30s");
}
