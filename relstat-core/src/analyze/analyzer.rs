use crate::analyze::constants::{
    CHANNEL_CAPACITY, MIN_LINE_LEN, PROGRESS_MILESTONE_EVERY, PROGRESS_TICK_EVERY,
};
use crate::analyze::progress::Progress;
use crate::event::{DecodeError, Event, decode, strip_delimiter};
use crate::identity::EntityIdentity;
use crate::stats::{StatsAggregator, StatsTable};
use crate::topk::{DEFAULT_CAPACITY, TopK};
use ahash::AHashSet;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnalyzeOptions {
    pub top_k: usize,
    pub min_line_len: usize,
    pub progress_tick_every: u64,
    pub progress_milestone_every: u64,
    pub channel_capacity: usize,
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_CAPACITY,
            min_line_len: MIN_LINE_LEN,
            progress_tick_every: PROGRESS_TICK_EVERY,
            progress_milestone_every: PROGRESS_MILESTONE_EVERY,
            channel_capacity: CHANNEL_CAPACITY,
        }
    }
}

/// What happened to every line read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct LineCounts {
    /// Decoded and folded into the results.
    pub processed: u64,
    /// Failed to parse; logged and skipped.
    pub malformed: u64,
    /// Too short to hold a record.
    pub skipped: u64,
}

impl LineCounts {
    pub fn total(&self) -> u64 {
        self.processed + self.malformed + self.skipped
    }
}

/// Final state of one run.
#[derive(Debug)]
pub struct Analysis {
    /// Slowest checks, longest first.
    pub slowest: Vec<Event>,
    pub stats: StatsTable,
    pub lines: LineCounts,
}

pub(crate) enum LineOutcome {
    Event(Event),
    Malformed,
    TooShort,
}

/// Decodes one raw line. Malformed lines are logged here, with the raw
/// bytes, so both driver variants report them the same way.
pub(crate) fn classify(raw: &[u8], line_number: u64, min_line_len: usize) -> LineOutcome {
    let record = strip_delimiter(raw);
    if record.len() < min_line_len {
        return LineOutcome::TooShort;
    }

    match decode(record) {
        Ok(event) => LineOutcome::Event(event),
        Err(DecodeError::MalformedRecord { source }) => {
            tracing::warn!(
                line_number,
                error = %source,
                raw = %String::from_utf8_lossy(record),
                "skipping malformed record"
            );
            LineOutcome::Malformed
        }
    }
}

/// Owns the top-K tracker and the statistics table for one run and is
/// their only writer.
pub struct Analyzer<'p> {
    options: AnalyzeOptions,
    slowest: TopK<Event>,
    stats: StatsAggregator,
    lines: LineCounts,
    opaque_kinds: AHashSet<String>,
    progress: &'p mut dyn Progress,
}

impl<'p> Analyzer<'p> {
    pub fn new(options: AnalyzeOptions, progress: &'p mut dyn Progress) -> Self {
        Self {
            slowest: TopK::new(options.top_k),
            stats: StatsAggregator::new(),
            lines: LineCounts::default(),
            opaque_kinds: AHashSet::new(),
            options,
            progress,
        }
    }

    pub fn options(&self) -> &AnalyzeOptions {
        &self.options
    }

    pub fn lines(&self) -> LineCounts {
        self.lines
    }

    pub(crate) fn record(&mut self, outcome: LineOutcome) {
        match outcome {
            LineOutcome::Event(event) => self.fold(event),
            LineOutcome::Malformed => self.lines.malformed += 1,
            LineOutcome::TooShort => self.lines.skipped += 1,
        }
    }

    /// Folds one decoded event into both structures.
    pub fn fold(&mut self, event: Event) {
        self.note_opaque(&event.outer);
        self.note_opaque(&event.inner);

        self.stats.offer(&event);
        self.slowest.offer(event);

        self.lines.processed += 1;
        let processed = self.lines.processed;
        if every(processed, self.options.progress_tick_every) {
            self.progress.tick(processed);
        }
        if every(processed, self.options.progress_milestone_every) {
            self.progress.milestone(processed);
        }
    }

    fn note_opaque(&mut self, identity: &EntityIdentity) {
        if identity.kind.is_canonical() || self.opaque_kinds.contains(identity.kind.as_str()) {
            return;
        }
        tracing::debug!(kind = %identity.kind, "unrecognized entity type, keeping as opaque kind");
        self.opaque_kinds.insert(identity.kind.as_str().to_string());
    }

    pub fn finish(mut self) -> Analysis {
        self.progress.finish(&self.lines);
        tracing::info!(
            processed = self.lines.processed,
            malformed = self.lines.malformed,
            skipped = self.lines.skipped,
            entities = self.stats.len(),
            "analysis complete"
        );

        Analysis {
            slowest: self.slowest.snapshot(),
            stats: self.stats.snapshot(),
            lines: self.lines,
        }
    }
}

fn every(n: u64, period: u64) -> bool {
    period != 0 && n % period == 0
}
