pub mod analyze;
pub mod conf;

pub use analyze::{AnalyzeArgs, run_analyze};
pub use conf::ConfigCmd;
