use crate::analyze::AnalyzeError;
use flate2::read::MultiGzDecoder;
use glob::glob;
use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];
const READ_BUFFER: usize = 256 * 1024;

pub type LineSource = Box<dyn BufRead + Send>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    Path(PathBuf),
}

impl fmt::Display for Input {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Stdin => f.write_str("<stdin>"),
            Self::Path(p) => write!(f, "{}", p.display()),
        }
    }
}

/// Expands the command line inputs.
///
/// `-` is stdin, an existing path is taken as is, anything else is treated
/// as a glob pattern. A pattern with no matches is an error.
pub fn expand_inputs(patterns: &[String]) -> Result<Vec<Input>, AnalyzeError> {
    let mut inputs = Vec::new();

    for pattern in patterns {
        if pattern == "-" {
            inputs.push(Input::Stdin);
            continue;
        }

        let path = Path::new(pattern);
        if path.exists() {
            inputs.push(Input::Path(path.to_path_buf()));
            continue;
        }

        let matches = discover(pattern)?;
        if matches.is_empty() {
            return Err(AnalyzeError::NoInput {
                pattern: pattern.clone(),
            });
        }
        inputs.extend(matches.into_iter().map(Input::Path));
    }

    Ok(inputs)
}

/// Files matching a glob pattern, sorted. Unreadable entries are skipped.
pub fn discover(pattern: &str) -> Result<Vec<PathBuf>, AnalyzeError> {
    let mut paths: Vec<_> = glob(pattern)
        .map_err(|e| AnalyzeError::Glob {
            pattern: pattern.to_string(),
            source: e,
        })?
        .filter_map(Result::ok)
        .filter(|p| p.is_file())
        .collect();

    paths.sort();
    Ok(paths)
}

/// Opens an input as a buffered line source, transparently decompressing
/// gzip (detected by magic bytes, not by extension).
pub fn open_source(input: &Input) -> Result<LineSource, AnalyzeError> {
    match input {
        Input::Stdin => wrap(BufReader::with_capacity(READ_BUFFER, io::stdin()), input),
        Input::Path(path) => {
            let file = File::open(path).map_err(|e| AnalyzeError::open(path, e))?;
            wrap(BufReader::with_capacity(READ_BUFFER, file), input)
        }
    }
}

fn wrap<R>(mut reader: BufReader<R>, input: &Input) -> Result<LineSource, AnalyzeError>
where
    R: io::Read + Send + 'static,
{
    let head = reader
        .fill_buf()
        .map_err(|e| AnalyzeError::read(input.to_string(), e))?;

    if head.starts_with(&GZIP_MAGIC) {
        tracing::debug!(%input, "gzip input detected");
        Ok(Box::new(BufReader::with_capacity(
            READ_BUFFER,
            MultiGzDecoder::new(reader),
        )))
    } else {
        Ok(Box::new(reader))
    }
}
