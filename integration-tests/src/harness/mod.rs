mod fixture;
pub mod tracing;

pub use fixture::{EventLog, record};
pub use tracing::{CapturedEvent, init_test_tracing};
