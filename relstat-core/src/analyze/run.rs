use crate::analyze::analyzer::{Analysis, AnalyzeOptions, Analyzer, LineOutcome, classify};
use crate::analyze::constants::BATCH_SIZE;
use crate::analyze::error::AnalyzeError;
use crate::analyze::progress::Progress;
use crate::analyze::source::{Input, LineSource, open_source};
use std::io::BufRead;
use std::sync::mpsc;
use std::thread;

type Batch = Result<Vec<LineOutcome>, AnalyzeError>;

impl Analyzer<'_> {
    /// Reads `reader` to the end on the calling thread.
    pub fn consume<R: BufRead>(&mut self, mut reader: R, input: &str) -> Result<(), AnalyzeError> {
        let min_line_len = self.options().min_line_len;
        let mut line_number = self.lines().total();
        let mut buf = Vec::with_capacity(1024);

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(|e| AnalyzeError::read(input, e))?;
            if n == 0 {
                return Ok(());
            }
            line_number += 1;
            self.record(classify(&buf, line_number, min_line_len));
        }
    }

    /// Like [`Analyzer::consume`], but reading, decompression and decoding
    /// run on a reader thread. Decoded lines come back in order over a
    /// bounded channel and are folded here, so this thread stays the only
    /// writer of the results.
    pub fn consume_threaded(&mut self, reader: LineSource, input: &str) -> Result<(), AnalyzeError> {
        let (tx, rx) = mpsc::sync_channel::<Batch>(self.options().channel_capacity.max(1));
        let min_line_len = self.options().min_line_len;
        let first_line = self.lines().total();
        let input_name = input.to_string();

        let reader_handle = thread::spawn(move || {
            read_batches(reader, &input_name, first_line, min_line_len, &tx);
            // tx is dropped here, which will disconnect rx.
        });

        let mut failure = None;
        for batch in rx {
            match batch {
                Ok(outcomes) => outcomes.into_iter().for_each(|o| self.record(o)),
                Err(e) => {
                    failure = Some(e);
                    break;
                }
            }
        }

        reader_handle
            .join()
            .map_err(|_| AnalyzeError::ReaderPanicked)?;

        match failure {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

fn read_batches(
    mut reader: LineSource,
    input: &str,
    mut line_number: u64,
    min_line_len: usize,
    tx: &mpsc::SyncSender<Batch>,
) {
    let mut buf = Vec::with_capacity(1024);
    let mut batch = Vec::with_capacity(BATCH_SIZE);

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                line_number += 1;
                batch.push(classify(&buf, line_number, min_line_len));
                if batch.len() == BATCH_SIZE {
                    let full = std::mem::replace(&mut batch, Vec::with_capacity(BATCH_SIZE));
                    // If receiver is gone, stop early.
                    if tx.send(Ok(full)).is_err() {
                        return;
                    }
                }
            }
            Err(e) => {
                let _ = tx.send(Err(AnalyzeError::read(input, e)));
                return;
            }
        }
    }

    if !batch.is_empty() {
        let _ = tx.send(Ok(batch));
    }
}

/// Runs one analysis over all `inputs`, in order, as a single pass.
///
/// Any open or read failure aborts the run; malformed lines never do.
pub fn run(
    inputs: &[Input],
    options: AnalyzeOptions,
    threaded: bool,
    progress: &mut dyn Progress,
) -> Result<Analysis, AnalyzeError> {
    let mut analyzer = Analyzer::new(options, progress);

    for input in inputs {
        let name = input.to_string();
        tracing::info!(input = %name, threaded, "reading input");

        let source = open_source(input)?;
        if threaded {
            analyzer.consume_threaded(source, &name)?;
        } else {
            analyzer.consume(source, &name)?;
        }
    }

    Ok(analyzer.finish())
}

/// Runs one analysis over an in-memory or caller-provided line source.
pub fn run_lines<R: BufRead>(
    reader: R,
    options: AnalyzeOptions,
    progress: &mut dyn Progress,
) -> Result<Analysis, AnalyzeError> {
    let mut analyzer = Analyzer::new(options, progress);
    analyzer.consume(reader, "<lines>")?;
    Ok(analyzer.finish())
}
