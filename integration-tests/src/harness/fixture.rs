use flate2::Compression;
use flate2::write::GzEncoder;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// One log line in the pipeline's wire format.
pub fn record(outer: (i64, &str), inner: (i64, &str), duration_ns: u64, result: bool) -> String {
    format!(
        r#"{{"function":"relations","part":"contains","check":"full","outer_id":{},"outer_type":"{}","inner_id":{},"inner_type":"{}","duration_ns":{},"result":{}}}"#,
        outer.0, outer.1, inner.0, inner.1, duration_ns, result
    )
}

/// Builder for an event log file on disk.
#[derive(Default)]
pub struct EventLog {
    lines: Vec<String>,
    separator: &'static str,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terminate every record with `,` before the newline.
    pub fn with_separator(mut self) -> Self {
        self.separator = ",";
        self
    }

    pub fn event(mut self, outer: (i64, &str), inner: (i64, &str), d: u64, result: bool) -> Self {
        self.lines.push(record(outer, inner, d, result));
        self
    }

    pub fn raw(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    pub fn contents(&self) -> String {
        self.lines
            .iter()
            .map(|l| format!("{l}{}\n", self.separator))
            .collect()
    }

    pub fn write_plain(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, self.contents()).expect("failed to write fixture");
        path
    }

    pub fn write_gzip(&self, dir: &Path, name: &str) -> PathBuf {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::fast());
        encoder
            .write_all(self.contents().as_bytes())
            .expect("failed to compress fixture");
        let path = dir.join(name);
        fs::write(&path, encoder.finish().expect("failed to finish gzip"))
            .expect("failed to write fixture");
        path
    }
}
