use crate::analyze::{Analysis, LineCounts};
use crate::event::Event;
use crate::report::rank::{RankedEntity, Ranking, bottom, top};
use crate::report::Metric;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SlowCheck {
    pub function: String,
    pub part: String,
    pub check: String,
    pub inner: String,
    pub outer: String,
    pub duration_ns: u64,
}

impl SlowCheck {
    fn from_event(event: &Event, base_url: &str) -> Self {
        Self {
            function: event.function.clone(),
            part: event.part.clone(),
            check: event.check.clone(),
            inner: event.inner.url(base_url),
            outer: event.outer.url(base_url),
            duration_ns: event.duration_ns,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetricRanking {
    pub metric: Metric,
    pub title: &'static str,
    pub unit: &'static str,
    pub most: Vec<RankedEntity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fewest: Option<Vec<RankedEntity>>,
}

/// Everything the renderers print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    pub n: usize,
    pub lines: LineCounts,
    pub entities: usize,
    pub slowest: Vec<SlowCheck>,
    pub rankings: Vec<MetricRanking>,
}

impl Report {
    pub fn build(analysis: &Analysis, n: usize, base_url: &str) -> Self {
        let ranking = Ranking::new(&analysis.stats, base_url);

        let rankings = Metric::ALL
            .iter()
            .map(|&metric| {
                let ranked = ranking.rank(metric);
                MetricRanking {
                    metric,
                    title: metric.title(),
                    unit: metric.unit(),
                    most: top(&ranked, n),
                    fewest: metric.shows_bottom().then(|| bottom(&ranked, n)),
                }
            })
            .collect();

        Self {
            n,
            lines: analysis.lines,
            entities: ranking.len(),
            slowest: analysis
                .slowest
                .iter()
                .map(|e| SlowCheck::from_event(e, base_url))
                .collect(),
            rankings,
        }
    }
}
