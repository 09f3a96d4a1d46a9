pub mod analyze;
pub mod cli;
pub mod conf;
pub mod event;
pub mod identity;
pub mod logging;
pub mod report;
pub mod stats;
pub mod topk;
