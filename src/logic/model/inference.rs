//! Inference Engine - ONNX Runtime Integration
//!
//! Loads the externally trained classifier and runs single-row predictions.
//! The artifact is read-only once loaded; its internals are owned by the
//! serialization format, not by this crate.

use ndarray::Array2;
use ort::session::{builder::GraphOptimizationLevel, Session};
use ort::value::Value;
use thiserror::Error;

use crate::logic::features::{FeatureRow, FEATURE_COUNT};

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("model not found: {0}")]
    ModelNotFound(String),

    #[error("failed to load model: {0}")]
    Load(String),

    #[error("prediction failed: {0}")]
    Predict(String),
}

// ============================================================================
// CLASSIFIER TRAIT
// ============================================================================

/// Prediction seam. Returns the model's raw scalar output for one feature
/// row; callers own the binary interpretation.
pub trait Classifier: Send {
    fn predict(&mut self, row: &FeatureRow) -> Result<f32, InferenceError>;
}

// ============================================================================
// ONNX IMPLEMENTATION
// ============================================================================

/// Classifier backed by an ONNX Runtime session.
#[derive(Debug)]
pub struct OnnxClassifier {
    session: Session,
    output_name: String,
    model_path: String,
}

impl OnnxClassifier {
    /// Load the serialized classifier from disk. Missing or corrupt artifacts
    /// are fatal to the caller; there is no fallback model.
    pub fn load(model_path: &str) -> Result<Self, InferenceError> {
        log::info!("Loading model from: {}", model_path);

        if !std::path::Path::new(model_path).exists() {
            return Err(InferenceError::ModelNotFound(model_path.to_string()));
        }

        let session = Session::builder()
            .map_err(|e| InferenceError::Load(format!("session builder: {}", e)))?
            .with_optimization_level(GraphOptimizationLevel::Level3)
            .map_err(|e| InferenceError::Load(format!("optimization level: {}", e)))?
            .commit_from_file(model_path)
            .map_err(|e| InferenceError::Load(e.to_string()))?;

        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| InferenceError::Load("model defines no output".to_string()))?;

        log::info!("Model loaded successfully ({} outputs)", session.outputs().len());

        Ok(Self {
            session,
            output_name,
            model_path: model_path.to_string(),
        })
    }

    pub fn model_path(&self) -> &str {
        &self.model_path
    }
}

impl Classifier for OnnxClassifier {
    fn predict(&mut self, row: &FeatureRow) -> Result<f32, InferenceError> {
        let input = Array2::<f32>::from_shape_vec((1, FEATURE_COUNT), row.to_vec())
            .map_err(|e| InferenceError::Predict(format!("shape error: {}", e)))?;

        let tensor = Value::from_array(input)
            .map_err(|e| InferenceError::Predict(format!("tensor error: {}", e)))?;

        let outputs = self
            .session
            .run(ort::inputs![tensor])
            .map_err(|e| InferenceError::Predict(e.to_string()))?;

        let output = outputs
            .get(&self.output_name)
            .ok_or_else(|| InferenceError::Predict("no output tensor".to_string()))?;

        // Label output is int64 for tree ensembles exported from sklearn,
        // float for most others. Accept both.
        if let Ok((_, data)) = output.try_extract_tensor::<f32>() {
            return data
                .first()
                .copied()
                .ok_or_else(|| InferenceError::Predict("empty output tensor".to_string()));
        }

        let (_, data) = output
            .try_extract_tensor::<i64>()
            .map_err(|e| InferenceError::Predict(format!("extract error: {}", e)))?;

        data.first()
            .map(|&v| v as f32)
            .ok_or_else(|| InferenceError::Predict("empty output tensor".to_string()))
    }
}
