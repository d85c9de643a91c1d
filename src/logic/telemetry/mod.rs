//! Telemetry Data Structures & Dataset Output

pub mod record;
pub mod writer;

pub use record::{TelemetryPayload, TelemetryRecord};
pub use writer::write_csv;
