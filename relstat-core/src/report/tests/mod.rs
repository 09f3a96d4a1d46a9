mod rank_tests;
mod render_tests;

use crate::analyze::{Analysis, LineCounts};
use crate::event::Event;
use crate::identity::EntityIdentity;
use crate::stats::StatsAggregator;
use crate::topk::TopK;

pub(crate) fn event(outer: EntityIdentity, inner: EntityIdentity, d: u64, result: bool) -> Event {
    Event {
        function: "relations".to_string(),
        part: "contains".to_string(),
        check: "full".to_string(),
        outer,
        inner,
        duration_ns: d,
        result,
    }
}

/// Small analysis: Way/1 and Way/4 as outers, Relation/2 and Relation/3 as inners.
pub(crate) fn analysis(top_k: usize) -> Analysis {
    let events = [
        event(EntityIdentity::way(1), EntityIdentity::relation(2), 50, true),
        event(EntityIdentity::way(1), EntityIdentity::relation(3), 200, false),
        event(EntityIdentity::way(4), EntityIdentity::relation(2), 10, true),
    ];

    let mut stats = StatsAggregator::new();
    let mut slowest = TopK::new(top_k);
    for e in events {
        stats.offer(&e);
        slowest.offer(e);
    }

    Analysis {
        slowest: slowest.snapshot(),
        stats: stats.snapshot(),
        lines: LineCounts {
            processed: 3,
            malformed: 1,
            skipped: 0,
        },
    }
}
