//! Sensor drivers

pub mod probe;

pub use probe::{SamplingReport, SamplingTask, SmoothedTemperatureProbe};
