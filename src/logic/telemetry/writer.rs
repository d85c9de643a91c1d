//! Dataset Writer
//!
//! Persists generated telemetry as CSV (header row, UTF-8). Overwrites any
//! existing file at the target path.

use std::path::Path;

use crate::logic::error::SentinelError;

use super::record::TelemetryRecord;

/// Write records to `path` as CSV, returning the number of rows written.
pub fn write_csv<P: AsRef<Path>>(
    path: P,
    records: &[TelemetryRecord],
) -> Result<usize, SentinelError> {
    let mut writer = csv::Writer::from_path(path)?;

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(records.len())
}

/// Render the first `count` rows for the console preview.
pub fn preview(records: &[TelemetryRecord], count: usize) -> String {
    let mut out = String::from("timestamp | machineId | temperature | vibration | is_anomaly");
    for record in records.iter().take(count) {
        out.push_str(&format!(
            "\n{} | {} | {:.4} | {:.4} | {}",
            record.timestamp.to_rfc3339(),
            record.machine_id,
            record.temperature,
            record.vibration,
            record.is_anomaly
        ));
    }
    out
}
