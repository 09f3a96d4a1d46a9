//! Optional `relstat.hcl` configuration.
//!
//! Every key has a default, so running without a file is the normal case.
//! Command line flags are applied on top of whatever is loaded here.

mod error;
mod loader;
mod model;


pub use error::ConfigError;
pub use loader::{CONFIG_FILE_NAME, load_config, load_config_file};
pub use model::{ProgressConfig, RelstatConfig};
