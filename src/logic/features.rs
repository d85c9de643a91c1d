//! Feature Vector Layout
//!
//! The classifier was trained on exactly two features in this column order.
//! Keep in sync with the training pipeline schema.

/// Number of input features
pub const FEATURE_COUNT: usize = 2;

/// One input row: `[temperature, vibration]`
pub type FeatureRow = [f32; FEATURE_COUNT];

/// Build a feature row in the fixed training column order.
pub fn feature_row(temperature: f64, vibration: f64) -> FeatureRow {
    [temperature as f32, vibration as f32]
}
