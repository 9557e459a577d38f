use anyhow::Context;
use sea_orm::DatabaseConnection;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tx_indexer_logic::{
    node::HttpNodeProvider, repository::PostgresTxRepository, Reconciler, TxParser,
};

use crate::Settings;

/// Runs the reconciler until `shutdown` is cancelled.
pub async fn run(
    settings: Settings,
    db_connection: DatabaseConnection,
    shutdown: CancellationToken,
) -> Result<(), anyhow::Error> {
    let indexer_settings = settings.indexer;

    let parser =
        TxParser::new(&indexer_settings.address).context("invalid address prefix settings")?;
    let nodes = Arc::new(HttpNodeProvider::new(indexer_settings.node.clone()));
    let repo = Arc::new(PostgresTxRepository::new(Arc::new(db_connection)));

    let reconciler = Reconciler::new(parser, nodes, repo, indexer_settings);
    reconciler.run(shutdown).await;
    Ok(())
}
