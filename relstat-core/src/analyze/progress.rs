use crate::analyze::LineCounts;
use std::io::Write;

/// Progress sink for the stream driver. Every method defaults to a no-op,
/// and nothing written here feeds back into the results.
pub trait Progress {
    /// Called every `progress_tick_every` processed lines.
    fn tick(&mut self, _processed: u64) {}

    /// Called every `progress_milestone_every` processed lines.
    fn milestone(&mut self, _processed: u64) {}

    /// Called once when all inputs are exhausted.
    fn finish(&mut self, _counts: &LineCounts) {}
}

pub struct NoProgress;

impl Progress for NoProgress {}

/// Prints a dot per tick and the running line count per milestone, like
/// `.......... read      3000000 lines`.
pub struct DotProgress<W: Write> {
    out: W,
}

impl<W: Write> DotProgress<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Progress for DotProgress<W> {
    fn tick(&mut self, _processed: u64) {
        let _ = self.out.write_all(b".");
        let _ = self.out.flush();
    }

    fn milestone(&mut self, processed: u64) {
        let _ = writeln!(self.out, " read {processed:>12} lines");
        tracing::info!(processed, "milestone");
    }

    fn finish(&mut self, counts: &LineCounts) {
        let _ = writeln!(self.out, " read {:>12} lines", counts.processed);
        let _ = self.out.flush();
    }
}
