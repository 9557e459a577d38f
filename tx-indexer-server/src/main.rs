use blockscout_service_launcher::{database, launcher::ConfigSettings};
use migration::Migrator;
use tokio_util::sync::CancellationToken;
use tx_indexer_server::{run_indexer, Settings};

const SERVICE_NAME: &str = "tx_indexer";

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let settings = Settings::build().expect("failed to read config");

    blockscout_service_launcher::tracing::init_logs(
        SERVICE_NAME,
        &settings.tracing,
        &settings.jaeger,
    )?;

    let db_connection = database::initialize_postgres::<Migrator>(&settings.database).await?;

    let shutdown = CancellationToken::new();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("received shutdown signal"),
                Err(err) => tracing::error!(error = ?err, "failed to listen for shutdown signal"),
            }
            shutdown.cancel();
        }
    });

    run_indexer(settings, db_connection, shutdown).await
}
