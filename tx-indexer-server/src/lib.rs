mod indexer;
mod settings;

pub use indexer::run as run_indexer;
pub use settings::Settings;
