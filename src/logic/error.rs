//! Crate Error Type
//!
//! Fatal/startup failures only. Per-message failures never reach this type;
//! they are logged and dropped at the session boundary.

use thiserror::Error;

use crate::logic::model::InferenceError;

#[derive(Debug, Error)]
pub enum SentinelError {
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    #[error("inference error: {0}")]
    Inference(#[from] InferenceError),

    #[error("mqtt client error: {0}")]
    Mqtt(#[from] rumqttc::ClientError),

    #[error("mqtt connection error: {0}")]
    Connection(#[from] rumqttc::ConnectionError),

    #[error("timestamp rounding error: {0}")]
    Time(#[from] chrono::RoundingError),

    #[error("generator error: {0}")]
    Generator(String),
}
