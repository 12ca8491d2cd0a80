//! Line codec for the NDJSON record log.

use context_core::errors::{ContextResult, StorageError};
use context_core::Measurement;

/// Result of decoding a log buffer.
#[derive(Debug, Default)]
pub struct DecodedLog {
    /// Valid records, in file order.
    pub measurements: Vec<Measurement>,
    /// 1-based line numbers that could not be decoded.
    pub skipped_lines: Vec<usize>,
}

/// Encode one measurement as a single newline-terminated line.
pub fn encode_line(measurement: &Measurement) -> ContextResult<Vec<u8>> {
    let mut line = serde_json::to_vec(measurement)
        .map_err(|source| StorageError::Serialize { source })?;
    line.push(b'\n');
    Ok(line)
}

/// Decode a whole log buffer. Blank lines are ignored; lines that are not a
/// valid measurement (e.g. a torn final write) are reported and skipped.
pub fn decode_log(bytes: &[u8]) -> DecodedLog {
    let mut decoded = DecodedLog::default();
    for (idx, raw) in bytes.split(|b| *b == b'\n').enumerate() {
        if raw.iter().all(u8::is_ascii_whitespace) {
            continue;
        }
        match serde_json::from_slice::<Measurement>(raw) {
            Ok(m) => decoded.measurements.push(m),
            Err(_) => decoded.skipped_lines.push(idx + 1),
        }
    }
    decoded
}
