//! Inference Session
//!
//! Owns the loaded classifier and turns raw broker payloads into alert lines.
//! Every failure inside `handle_message` is logged and swallowed: a bad
//! message is dropped, never allowed to take down the processing loop.

use crate::logic::alert;
use crate::logic::features::feature_row;
use crate::logic::model::Classifier;
use crate::logic::telemetry::TelemetryPayload;

pub struct InferenceSession {
    classifier: Box<dyn Classifier>,
}

impl InferenceSession {
    /// The classifier is passed by construction; callbacks never reach for
    /// ambient state.
    pub fn new(classifier: Box<dyn Classifier>) -> Self {
        Self { classifier }
    }

    /// Handle one inbound message. Returns the rendered alert line, or `None`
    /// when the message was dropped (decode, parse, or prediction failure).
    pub fn handle_message(&mut self, topic: &str, payload: &[u8]) -> Option<String> {
        let text = match std::str::from_utf8(payload) {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Failed to decode payload on '{}': {}", topic, e);
                return None;
            }
        };

        let reading: TelemetryPayload = match serde_json::from_str(text) {
            Ok(reading) => reading,
            Err(e) => {
                log::warn!("Missing or invalid fields on '{}': {} ({})", topic, text, e);
                return None;
            }
        };

        let row = feature_row(reading.temperature, reading.vibration);
        let raw = match self.classifier.predict(&row) {
            Ok(raw) => raw,
            Err(e) => {
                log::error!("Model prediction failed: {}", e);
                return None;
            }
        };

        Some(alert::render(
            Self::classify(raw),
            reading.temperature,
            reading.vibration,
        ))
    }

    /// Binary interpretation of the raw model output: round to the nearest
    /// integer; exactly 1 is the only anomaly condition.
    pub fn classify(raw: f32) -> bool {
        raw.round() as i64 == 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::features::FeatureRow;
    use crate::logic::model::InferenceError;

    struct StubClassifier(f32);

    impl Classifier for StubClassifier {
        fn predict(&mut self, _row: &FeatureRow) -> Result<f32, InferenceError> {
            Ok(self.0)
        }
    }

    struct FailingClassifier;

    impl Classifier for FailingClassifier {
        fn predict(&mut self, _row: &FeatureRow) -> Result<f32, InferenceError> {
            Err(InferenceError::Predict("engine unavailable".to_string()))
        }
    }

    #[test]
    fn test_anomaly_payload_produces_alert() {
        let mut session = InferenceSession::new(Box::new(StubClassifier(1.0)));
        let line = session
            .handle_message("factory/telemetry", br#"{"temperature": 95.0, "vibration": 4.2}"#)
            .unwrap();

        assert!(line.contains("[ALERT]"));
        assert!(line.contains("95.00"));
        assert!(line.contains("4.20"));
    }

    #[test]
    fn test_normal_payload_produces_normal_line() {
        let mut session = InferenceSession::new(Box::new(StubClassifier(0.0)));
        let line = session
            .handle_message("factory/telemetry", br#"{"temperature": 68.0, "vibration": 1.8}"#)
            .unwrap();

        assert!(line.contains("[NORMAL]"));
        assert!(line.contains("68.00"));
        assert!(line.contains("1.80"));
    }

    #[test]
    fn test_non_json_payload_is_dropped() {
        let mut session = InferenceSession::new(Box::new(StubClassifier(1.0)));
        assert!(session
            .handle_message("factory/telemetry", &[0xff, 0xfe, 0x00])
            .is_none());
        assert!(session
            .handle_message("factory/telemetry", b"not json at all")
            .is_none());

        // The session keeps working after drops.
        assert!(session
            .handle_message("factory/telemetry", br#"{"temperature": 90.0, "vibration": 4.0}"#)
            .is_some());
    }

    #[test]
    fn test_missing_field_is_dropped() {
        let mut session = InferenceSession::new(Box::new(StubClassifier(1.0)));
        assert!(session
            .handle_message("factory/telemetry", br#"{"temperature": 95.0}"#)
            .is_none());
        assert!(session
            .handle_message("factory/telemetry", br#"{"temperature": "hot", "vibration": 4.2}"#)
            .is_none());
    }

    #[test]
    fn test_prediction_failure_is_dropped_not_fatal() {
        let mut session = InferenceSession::new(Box::new(FailingClassifier));
        assert!(session
            .handle_message("factory/telemetry", br#"{"temperature": 95.0, "vibration": 4.2}"#)
            .is_none());
    }

    #[test]
    fn test_raw_output_rounding() {
        assert!(InferenceSession::classify(1.0));
        assert!(InferenceSession::classify(0.6));
        assert!(InferenceSession::classify(1.4));
        assert!(!InferenceSession::classify(0.0));
        assert!(!InferenceSession::classify(0.4));
        assert!(!InferenceSession::classify(2.0));
        assert!(!InferenceSession::classify(f32::NAN));
    }
}
