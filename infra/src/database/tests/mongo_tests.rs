//! Unit tests for the MongoDB client handle

use crate::config::DocumentStoreConfig;
use crate::database::mongo::DocumentStore;
use crate::InfrastructureError;

#[tokio::test]
async fn test_connect_rejects_malformed_uri() {
    let config = DocumentStoreConfig::new("http://localhost:27017");

    let result = DocumentStore::connect(&config).await;
    assert!(matches!(result, Err(InfrastructureError::DocumentStore(_))));
}

#[tokio::test]
async fn test_connect_unreachable_deployment() {
    let config =
        DocumentStoreConfig::new("mongodb://127.0.0.1:1/shop").with_server_selection_timeout_ms(200);

    let err = DocumentStore::connect(&config).await.unwrap_err();
    assert!(!err.to_string().is_empty());
}

#[tokio::test]
#[ignore] // Requires MongoDB server
async fn test_connect_and_default_database() {
    let uri = std::env::var("MONGO_URI")
        .unwrap_or_else(|_| "mongodb://localhost:27017/dualstore_test".to_string());

    let store = DocumentStore::connect(&DocumentStoreConfig::new(uri)).await.unwrap();
    assert!(!store.hosts().is_empty());
    assert!(store.database("admin").list_collection_names(None).await.is_ok());
}
