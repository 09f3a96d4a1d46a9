//! Stream driver.
//!
//! One pass over the event log, one line at a time:
//!
//! input file / stdin
//! open_source (gzip sniffing)
//! classify (strip delimiter, length check, decode)
//! Analyzer::fold
//!   TopK<Event>       slowest checks
//!   StatsAggregator   per-entity counters
//! Analysis
//!
//! Malformed lines are logged and skipped. Failing to open or read an input
//! aborts the run.

mod analyzer;
pub mod constants;
mod error;
mod progress;
mod run;
mod source;

#[cfg(test)]
mod tests;

pub use analyzer::{Analysis, AnalyzeOptions, Analyzer, LineCounts};
pub use error::AnalyzeError;
pub use progress::{DotProgress, NoProgress, Progress};
pub use run::{run, run_lines};
pub use source::{Input, LineSource, discover, expand_inputs, open_source};
