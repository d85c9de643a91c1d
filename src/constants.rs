//! Central Configuration Constants
//!
//! Single source of truth for all configuration defaults.
//! Broker endpoint, certificate paths and model path can be overridden via
//! environment variables; everything else is fixed.

/// Default AWS IoT Core device data endpoint
pub const DEFAULT_ENDPOINT: &str = "a1bc8ob2maqsyv-ats.iot.us-east-1.amazonaws.com";

/// MQTT over TLS port
pub const MQTT_PORT: u16 = 8883;

/// Client identifier for the inference client
pub const DEFAULT_CLIENT_ID: &str = "inference_client";

/// Telemetry topic (QoS 1 on both publish and subscribe)
pub const TOPIC_TELEMETRY: &str = "factory/telemetry";

/// Default PEM paths (root CA, device certificate, private key)
pub const DEFAULT_ROOT_CA_PATH: &str = "./certs/AmazonRootCA1.pem";
pub const DEFAULT_CERT_PATH: &str = "./certs/certificate.pem.crt";
pub const DEFAULT_KEY_PATH: &str = "./certs/private.pem.key";

/// Default path of the trained classifier artifact
pub const DEFAULT_MODEL_PATH: &str = "predictive_maintenance_model.onnx";

/// Simulated machine identifier
pub const MACHINE_ID: &str = "NC_Machine_AC";

// ============================================
// Generator parameters (historical dataset)
// ============================================

/// Rows in the generated dataset
pub const GENERATOR_ROWS: usize = 10_000;

/// Fraction of rows labeled anomalous
pub const ANOMALY_FRACTION: f64 = 0.05;

/// Spacing between consecutive timestamps (minutes)
pub const SAMPLE_INTERVAL_MINUTES: i64 = 1;

/// Normal-operation temperature distribution (degrees C)
pub const TEMP_MEAN: f64 = 68.0;
pub const TEMP_STD_DEV: f64 = 3.0;

/// Normal-operation vibration distribution (mm/s)
pub const VIBRATION_MEAN: f64 = 1.8;
pub const VIBRATION_STD_DEV: f64 = 0.3;

/// Anomalous temperature range (uniform)
pub const ANOMALY_TEMP_RANGE: (f64, f64) = (80.0, 100.0);

/// Anomalous vibration range (uniform)
pub const ANOMALY_VIBRATION_RANGE: (f64, f64) = (3.0, 5.0);

/// Output file written to the current working directory
pub const OUTPUT_CSV_NAME: &str = "historical_telemetry_data.csv";

// ============================================
// Simulator parameters (live telemetry feed)
// ============================================

/// Seconds between published readings
pub const SIMULATOR_PUBLISH_INTERVAL_SECS: u64 = 1;

/// Probability a published reading is anomalous
pub const SIMULATOR_ANOMALY_PROBABILITY: f64 = 0.10;

/// Normal operating bands for the simulator (uniform)
pub const SIMULATOR_TEMP_RANGE: (f64, f64) = (65.0, 70.0);
pub const SIMULATOR_VIBRATION_RANGE: (f64, f64) = (1.2, 1.5);

/// Maximum anomaly deltas added on top of a normal reading
pub const SIMULATOR_ANOMALY_TEMP_DELTA: f64 = 15.0;
pub const SIMULATOR_ANOMALY_VIBRATION_DELTA: f64 = 2.0;

// ============================================
// Helper functions to read from env with fallback
// ============================================

/// Get the broker endpoint from environment or use default
pub fn get_endpoint() -> String {
    std::env::var("AWS_IOT_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string())
}

/// Get the root CA PEM path from environment or use default
pub fn get_root_ca_path() -> String {
    std::env::var("AWS_IOT_ROOT_CA").unwrap_or_else(|_| DEFAULT_ROOT_CA_PATH.to_string())
}

/// Get the device certificate PEM path from environment or use default
pub fn get_cert_path() -> String {
    std::env::var("AWS_IOT_CERT").unwrap_or_else(|_| DEFAULT_CERT_PATH.to_string())
}

/// Get the private key PEM path from environment or use default
pub fn get_key_path() -> String {
    std::env::var("AWS_IOT_PRIVATE_KEY").unwrap_or_else(|_| DEFAULT_KEY_PATH.to_string())
}

/// Get the classifier artifact path from environment or use default
pub fn get_model_path() -> String {
    std::env::var("SENTINEL_MODEL_PATH").unwrap_or_else(|_| DEFAULT_MODEL_PATH.to_string())
}

/// Get an explicit generator seed from environment, if any.
/// Unset means entropy-seeded, non-reproducible output.
pub fn get_generator_seed() -> Option<u64> {
    std::env::var("SENTINEL_SEED").ok().and_then(|s| s.parse().ok())
}
