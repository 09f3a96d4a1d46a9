use std::path::PathBuf;
use thiserror::Error;

/// Run-level failures. Any of these aborts the run without partial results.
#[derive(Debug, Error)]
pub enum AnalyzeError {
    #[error("failed to open input {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read input {input}: {source}")]
    Read {
        input: String,
        #[source]
        source: std::io::Error,
    },

    #[error("glob pattern error: {pattern}: {source}")]
    Glob {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    #[error("no input matches {pattern}")]
    NoInput { pattern: String },

    #[error("reader thread panicked")]
    ReaderPanicked,
}

impl AnalyzeError {
    pub fn open(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Open {
            path: path.into(),
            source,
        }
    }

    pub fn read(input: impl Into<String>, source: std::io::Error) -> Self {
        Self::Read {
            input: input.into(),
            source,
        }
    }
}
