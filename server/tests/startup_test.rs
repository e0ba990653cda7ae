//! Process-level startup tests
//!
//! These run the compiled binary, so exit codes and log output are observed
//! exactly as an operator would see them.

use std::process::{Command, Output};

use ds_server::app;
use ds_shared::config::{DatabaseSettings, DocumentStoreConfig, RelationalConfig};
use ds_shared::Environment;

const DATABASE_VARS: [&str; 5] = [
    "MONGO_URI",
    "SQL_HOST",
    "SQL_USER",
    "SQL_PASSWORD",
    "SQL_DATABASE",
];

fn run_server(vars: &[(&str, &str)]) -> Output {
    let mut command = Command::new(env!("CARGO_BIN_EXE_ds_server"));
    // Keep dotenvy from picking up a developer's .env
    command.current_dir(std::env::temp_dir());
    for name in DATABASE_VARS {
        command.env_remove(name);
    }
    command
        .env_remove("RUST_LOG")
        .env("ENVIRONMENT", "production")
        .env("LOG_FORMAT", "compact")
        .env("SQL_PORT", "1")
        .env("SQL_CONNECT_TIMEOUT_SECS", "1");
    for (name, value) in vars {
        command.env(name, value);
    }
    command.output().expect("failed to run ds_server")
}

fn combined(output: &Output) -> String {
    format!(
        "{}{}",
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn test_exits_with_status_1_when_document_store_fails() {
    let output = run_server(&[
        ("MONGO_URI", "not-a-mongo-uri"),
        ("SQL_HOST", "127.0.0.1"),
        ("SQL_USER", "nobody"),
        ("SQL_PASSWORD", "nothing"),
        ("SQL_DATABASE", "missing"),
    ]);

    assert_eq!(output.status.code(), Some(1));
    let logs = combined(&output);
    assert_eq!(
        logs.matches("MongoDB connection error").count(),
        1,
        "logs were:\n{}",
        logs
    );
    assert!(logs.contains("database bootstrap failed; exiting"));
    assert!(!logs.contains("MySQL connected"));
    // LOG_FORMAT=compact overrides the production json profile
    assert!(!logs.trim_start().starts_with('{'), "logs were:\n{}", logs);
}

#[test]
fn test_exits_with_status_1_when_configuration_is_missing() {
    let output = run_server(&[("MONGO_URI", "mongodb://127.0.0.1:1/app")]);

    assert_eq!(output.status.code(), Some(1));
    let logs = combined(&output);
    assert!(logs.contains("missing required environment variable SQL_HOST"), "logs were:\n{}", logs);
}

#[tokio::test]
async fn test_start_with_unreachable_document_store() {
    let settings = DatabaseSettings {
        environment: Environment::Development,
        document: DocumentStoreConfig::new("mongodb://127.0.0.1:1/app")
            .with_server_selection_timeout_ms(200),
        relational: RelationalConfig::new("127.0.0.1", "nobody", "nothing", "missing")
            .with_port(1)
            .with_connect_timeout_secs(1),
    };

    let err = app::start(&settings).await.err().expect("bootstrap must fail");
    let chain = format!("{:#}", err);
    assert!(chain.starts_with("database bootstrap failed"));
    assert!(chain.contains("MongoDB connection error"));
}
