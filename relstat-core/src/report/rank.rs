use crate::report::Metric;
use crate::stats::{EntityStats, StatsTable};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RankedEntity {
    pub key: String,
    pub value: u64,
}

/// Entities with their canonical keys, rendered once and ranked per metric.
pub struct Ranking {
    entries: Vec<(String, EntityStats)>,
}

impl Ranking {
    pub fn new(stats: &StatsTable, base_url: &str) -> Self {
        let mut entries: Vec<_> = stats
            .iter()
            .map(|(identity, s)| (identity.url(base_url), *s))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entities, largest `metric` first. Ties keep key order.
    pub fn rank(&self, metric: Metric) -> Vec<RankedEntity> {
        let mut ranked: Vec<RankedEntity> = self
            .entries
            .iter()
            .map(|(key, s)| RankedEntity {
                key: key.clone(),
                value: metric.extract(s),
            })
            .collect();
        // stable: equal values stay sorted by key
        ranked.sort_by(|a, b| b.value.cmp(&a.value));
        ranked
    }
}

/// First `n` of a descending ranking.
pub fn top(ranked: &[RankedEntity], n: usize) -> Vec<RankedEntity> {
    ranked.iter().take(n).cloned().collect()
}

/// Last `n` of a descending ranking, smallest first.
pub fn bottom(ranked: &[RankedEntity], n: usize) -> Vec<RankedEntity> {
    ranked.iter().rev().take(n).cloned().collect()
}
