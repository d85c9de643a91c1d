//! Telemetry Record Types
//!
//! Two shapes of the same reading: the labeled historical record written to
//! the training dataset, and the unlabeled live payload arriving over MQTT.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One labeled row of the generated historical dataset.
///
/// Field order matches the CSV column order expected by the training
/// pipeline: `timestamp,machineId,temperature,vibration,is_anomaly`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryRecord {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "machineId")]
    pub machine_id: String,
    pub temperature: f64,
    pub vibration: f64,
    /// Ground-truth label: 0 = normal, 1 = anomaly
    pub is_anomaly: u8,
}

/// One live reading as published on the telemetry topic.
///
/// Only `temperature` and `vibration` are required for inference; everything
/// else the machine publishes is passed through or ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TelemetryPayload {
    pub temperature: f64,
    pub vibration: f64,
    #[serde(rename = "machineId", skip_serializing_if = "Option::is_none")]
    pub machine_id: Option<String>,
    /// Unix timestamp (seconds) stamped by the publisher
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<i64>,
}
