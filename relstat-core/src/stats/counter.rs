use serde::Serialize;
use std::ops::Add;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Counter {
    pub count: u64,
    pub total_duration_ns: u64,
}

impl Counter {
    pub const fn new(count: u64, total_duration_ns: u64) -> Self {
        Self {
            count,
            total_duration_ns,
        }
    }

    pub fn record(&mut self, duration_ns: u64) {
        self.count = self.count.saturating_add(1);
        self.total_duration_ns = self.total_duration_ns.saturating_add(duration_ns);
    }
}

impl Add for Counter {
    type Output = Counter;

    fn add(self, rhs: Counter) -> Counter {
        Counter {
            count: self.count.saturating_add(rhs.count),
            total_duration_ns: self.total_duration_ns.saturating_add(rhs.total_duration_ns),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EntityStats {
    pub outer_positive: Counter,
    pub outer_negative: Counter,
    pub inner_positive: Counter,
    pub inner_negative: Counter,
}

impl EntityStats {
    pub(crate) fn record_outer(&mut self, result: bool, duration_ns: u64) {
        if result {
            self.outer_positive.record(duration_ns);
        } else {
            self.outer_negative.record(duration_ns);
        }
    }

    pub(crate) fn record_inner(&mut self, result: bool, duration_ns: u64) {
        if result {
            self.inner_positive.record(duration_ns);
        } else {
            self.inner_negative.record(duration_ns);
        }
    }

    pub fn outer_total(&self) -> Counter {
        self.outer_positive + self.outer_negative
    }

    pub fn inner_total(&self) -> Counter {
        self.inner_positive + self.inner_negative
    }

    pub fn grand_total(&self) -> Counter {
        self.outer_total() + self.inner_total()
    }

    pub fn grand_total_count(&self) -> u64 {
        self.grand_total().count
    }

    pub fn grand_total_time(&self) -> u64 {
        self.grand_total().total_duration_ns
    }

    pub fn total_positive_count(&self) -> u64 {
        self.outer_positive
            .count
            .saturating_add(self.inner_positive.count)
    }

    pub fn total_negative_count(&self) -> u64 {
        self.outer_negative
            .count
            .saturating_add(self.inner_negative.count)
    }
}
