//! Temperature sensing logic

pub mod thermistor;
pub mod window;

pub use thermistor::{celsius_to_fahrenheit, round_to, Thermistor, KELVIN_OFFSET};
pub use window::SlidingMean;
