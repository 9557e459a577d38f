#[macro_use]
extern crate lazy_static;

pub mod codec;
pub mod error;
pub mod msgs;
pub mod node;
pub mod parser;
pub mod reconciler;
pub mod repository;
pub mod resolver;
pub mod settings;
pub mod types;

#[cfg(test)]
pub mod test_utils;
#[cfg(test)]
mod tests;

pub use error::{AddressError, DecodeError, NodeError, ReconcileError};
pub use parser::TxParser;
pub use reconciler::{Reconciler, ScanSummary};
pub use settings::IndexerSettings;
pub use tx_indexer_entity::sea_orm_active_enums::TxStatus;
