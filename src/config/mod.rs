mod defaults;
mod loader;
mod types;
mod validation;

pub use loader::{load_config, parse_config};
pub use types::{TocConfig, TocConfigLayer};
pub use validation::validate_config;
