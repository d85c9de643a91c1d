//! Machine Sentinel - Predictive Maintenance Toolkit
//!
//! Two halves: synthetic telemetry generation for offline training, and a
//! realtime inference client that bridges broker telemetry to console alerts.

pub mod constants;
pub mod logic;

pub use logic::error::SentinelError;
