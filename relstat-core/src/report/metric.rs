use crate::stats::EntityStats;
use serde::Serialize;

/// Every per-entity figure the report ranks by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    OuterCount,
    OuterTime,
    OuterPositive,
    OuterNegative,
    InnerCount,
    InnerTime,
    InnerPositive,
    InnerNegative,
    TotalCount,
    TotalTime,
    TotalPositive,
    TotalNegative,
}

impl Metric {
    /// Report order.
    pub const ALL: [Metric; 12] = [
        Metric::OuterCount,
        Metric::OuterTime,
        Metric::OuterPositive,
        Metric::OuterNegative,
        Metric::InnerCount,
        Metric::InnerTime,
        Metric::InnerPositive,
        Metric::InnerNegative,
        Metric::TotalCount,
        Metric::TotalTime,
        Metric::TotalPositive,
        Metric::TotalNegative,
    ];

    pub fn extract(self, stats: &EntityStats) -> u64 {
        match self {
            Self::OuterCount => stats.outer_total().count,
            Self::OuterTime => stats.outer_total().total_duration_ns,
            Self::OuterPositive => stats.outer_positive.count,
            Self::OuterNegative => stats.outer_negative.count,
            Self::InnerCount => stats.inner_total().count,
            Self::InnerTime => stats.inner_total().total_duration_ns,
            Self::InnerPositive => stats.inner_positive.count,
            Self::InnerNegative => stats.inner_negative.count,
            Self::TotalCount => stats.grand_total_count(),
            Self::TotalTime => stats.grand_total_time(),
            Self::TotalPositive => stats.total_positive_count(),
            Self::TotalNegative => stats.total_negative_count(),
        }
    }

    /// Completes "N most ..." / "N fewest ...".
    pub fn title(self) -> &'static str {
        match self {
            Self::OuterCount => "checks against",
            Self::OuterTime => "time against",
            Self::OuterPositive => "positive results against",
            Self::OuterNegative => "negative results against",
            Self::InnerCount => "checks triggered",
            Self::InnerTime => "time triggered",
            Self::InnerPositive => "positive results triggered",
            Self::InnerNegative => "negative results triggered",
            Self::TotalCount => "checks total",
            Self::TotalTime => "time total",
            Self::TotalPositive => "positive results total",
            Self::TotalNegative => "negative results total",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::OuterTime | Self::InnerTime | Self::TotalTime => "ns",
            _ => "",
        }
    }

    /// Outcome counts also list the entities with the fewest results.
    pub fn shows_bottom(self) -> bool {
        matches!(
            self,
            Self::OuterPositive
                | Self::OuterNegative
                | Self::InnerPositive
                | Self::InnerNegative
                | Self::TotalPositive
                | Self::TotalNegative
        )
    }
}
