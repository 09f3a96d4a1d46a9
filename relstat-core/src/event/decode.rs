use crate::event::{DecodeError, Event};
use crate::identity::resolve;
use serde::Deserialize;

/// Wire shape of one log line. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct RawRecord {
    function: String,
    part: String,
    check: String,
    outer_id: i64,
    outer_type: String,
    inner_id: i64,
    inner_type: String,
    duration_ns: u64,
    result: bool,
}

/// Removes the line terminator (`\n` or `\r\n`) and then at most one
/// trailing `,` record separator.
pub fn strip_delimiter(line: &[u8]) -> &[u8] {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    line.strip_suffix(b",").unwrap_or(line)
}

/// Parses one record. `line` must already have its delimiter stripped.
pub fn decode(line: &[u8]) -> Result<Event, DecodeError> {
    let raw: RawRecord = serde_json::from_slice(line).map_err(DecodeError::malformed)?;

    Ok(Event {
        outer: resolve(raw.outer_id, &raw.outer_type),
        inner: resolve(raw.inner_id, &raw.inner_type),
        function: raw.function,
        part: raw.part,
        check: raw.check,
        duration_ns: raw.duration_ns,
        result: raw.result,
    })
}
