use crate::analyze::AnalyzeOptions;
use crate::analyze::constants::{
    CHANNEL_CAPACITY, MIN_LINE_LEN, PROGRESS_MILESTONE_EVERY, PROGRESS_TICK_EVERY,
};
use crate::conf::ConfigError;
use crate::identity::DEFAULT_BASE_URL;
use crate::topk::DEFAULT_CAPACITY;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RelstatConfig {
    /// How many slowest checks to keep.
    pub top_k: usize,

    /// Entries per ranked list.
    pub report_n: usize,

    /// Prefix of the canonical entity URLs.
    pub base_url: String,

    /// Records shorter than this are skipped without parsing.
    pub min_line_len: usize,

    /// Decode on a reader thread.
    pub threaded: bool,

    /// Decoded batches buffered between reader thread and fold loop.
    pub channel_capacity: usize,

    pub progress: ProgressConfig,
}

impl Default for RelstatConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_CAPACITY,
            report_n: DEFAULT_CAPACITY,
            base_url: DEFAULT_BASE_URL.to_string(),
            min_line_len: MIN_LINE_LEN,
            threaded: false,
            channel_capacity: CHANNEL_CAPACITY,
            progress: ProgressConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProgressConfig {
    pub enabled: bool,
    pub tick_every: u64,
    pub milestone_every: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            tick_every: PROGRESS_TICK_EVERY,
            milestone_every: PROGRESS_MILESTONE_EVERY,
        }
    }
}

impl RelstatConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::invalid(
                "base_url",
                format!("'{}' is not an http(s) URL", self.base_url),
            ));
        }
        if self.channel_capacity == 0 {
            return Err(ConfigError::invalid("channel_capacity", "must be greater than zero"));
        }
        if self.progress.tick_every == 0 || self.progress.milestone_every == 0 {
            return Err(ConfigError::invalid(
                "progress",
                "tick_every and milestone_every must be greater than zero",
            ));
        }
        Ok(())
    }

    pub fn analyze_options(&self) -> AnalyzeOptions {
        let (tick, milestone) = if self.progress.enabled {
            (self.progress.tick_every, self.progress.milestone_every)
        } else {
            (0, 0)
        };

        AnalyzeOptions {
            top_k: self.top_k,
            min_line_len: self.min_line_len,
            progress_tick_every: tick,
            progress_milestone_every: milestone,
            channel_capacity: self.channel_capacity,
        }
    }
}
