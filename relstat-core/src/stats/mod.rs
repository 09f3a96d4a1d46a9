//! Per-entity check statistics.
//!
//! Every entity gets four independent counters, one per combination of
//! role (outer / inner) and outcome (positive / negative). Everything the
//! report shows is derived from those four.

mod aggregation;
mod counter;

#[cfg(test)]
mod tests;

pub use aggregation::{StatsAggregator, StatsTable};
pub use counter::{Counter, EntityStats};
