//! Ranked reports over a finished [`Analysis`](crate::analyze::Analysis).
//!
//! Entity identities become canonical URLs here and nowhere earlier. Each
//! [`Metric`] is ranked by the same function; the renderers only lay out
//! what [`Report::build`] produced.

mod metric;
mod rank;
mod render;
mod types;

#[cfg(test)]
mod tests;

use clap::ValueEnum;

pub use metric::Metric;
pub use rank::{RankedEntity, Ranking, bottom, top};
pub use render::{render_json, render_text, render_yaml};
pub use types::{MetricRanking, Report, SlowCheck};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}
