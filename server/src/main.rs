use ds_server::{app, telemetry};
use ds_shared::{DatabaseSettings, Environment};
use tracing::{error, info, warn};

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();

    let environment = Environment::from_env();
    let (logging, logging_error) =
        telemetry::logging_config(environment, &|name: &str| std::env::var(name).ok());

    if let Err(e) = telemetry::init_tracing(&logging) {
        eprintln!("failed to initialise logging: {}", e);
    }
    if let Some(e) = logging_error {
        warn!("{}; using the {} logging profile", e, environment);
    }

    let settings = match DatabaseSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            error!("Failed to load database configuration: {}", e);
            std::process::exit(1);
        }
    };

    let databases = match app::start(&settings).await {
        Ok(databases) => databases,
        Err(e) => {
            // Only the context; the bootstrap logged the driver error
            error!("{}; exiting", e);
            std::process::exit(1);
        }
    };

    info!(
        pool = %databases.relational.statistics(),
        "Ready; press Ctrl-C to stop"
    );

    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
    }
    info!("Shutting down");
}
