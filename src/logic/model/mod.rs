//! Model Module - Classifier Loading & Prediction
//!
//! The trained artifact is opaque: load once, query many. The `Classifier`
//! trait is the seam for swapping engines (and for stubbing in tests).

pub mod inference;

pub use inference::{Classifier, InferenceError, OnnxClassifier};
