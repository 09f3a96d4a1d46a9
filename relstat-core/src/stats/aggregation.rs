use crate::event::Event;
use crate::identity::EntityIdentity;
use crate::stats::EntityStats;
use ahash::AHashMap;

pub type StatsTable = AHashMap<EntityIdentity, EntityStats>;

/// Folds events into per-entity statistics.
///
/// Entries are created zeroed on first reference. Outer and inner are
/// independent slots, so an event whose outer and inner resolve to the same
/// entity updates both slots of the one record.
#[derive(Debug, Default)]
pub struct StatsAggregator {
    table: StatsTable,
}

impl StatsAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn offer(&mut self, event: &Event) {
        // Only clone the identity when the entity is new.
        match self.table.get_mut(&event.inner) {
            Some(stats) => stats.record_inner(event.result, event.duration_ns),
            None => self
                .table
                .entry(event.inner.clone())
                .or_default()
                .record_inner(event.result, event.duration_ns),
        }

        match self.table.get_mut(&event.outer) {
            Some(stats) => stats.record_outer(event.result, event.duration_ns),
            None => self
                .table
                .entry(event.outer.clone())
                .or_default()
                .record_outer(event.result, event.duration_ns),
        }
    }

    pub fn get(&self, identity: &EntityIdentity) -> Option<&EntityStats> {
        self.table.get(identity)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// Hands over the table. The aggregator is left empty.
    pub fn snapshot(&mut self) -> StatsTable {
        std::mem::take(&mut self.table)
    }
}
