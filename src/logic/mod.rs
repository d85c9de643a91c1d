//! Core Logic Modules

pub mod alert;
pub mod error;
pub mod features;
pub mod generator;
pub mod model;
pub mod net;
pub mod session;
pub mod telemetry;
