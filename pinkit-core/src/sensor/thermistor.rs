//! NTC thermistor conversion
//!
//! Converts a raw 16-bit ADC sample into degrees Celsius with the
//! Steinhart-Hart equation:
//!
//! ```text
//! R    = R_series * (65536 / (65535 - raw) - 1)
//! 1/T  = a + b*ln(R) + c*ln(R)^3          (T in kelvin)
//! ```

use crate::config::ThermistorConfig;
use crate::error::SensorError;

/// Offset between kelvin and degrees Celsius
pub const KELVIN_OFFSET: f32 = 273.15;

/// Full-scale divisor for a 16-bit sample
const FULL_SCALE: f32 = 65536.0;

/// Steinhart-Hart thermistor model
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Thermistor {
    config: ThermistorConfig,
}

impl Thermistor {
    /// Create a model from explicit parameters
    pub fn new(config: ThermistorConfig) -> Self {
        Self { config }
    }

    /// Model parameters
    pub fn config(&self) -> &ThermistorConfig {
        &self.config
    }

    /// Convert a raw sample to thermistor resistance in ohms
    pub fn resistance(&self, raw: u16) -> Result<f32, SensorError> {
        let headroom = u16::MAX - raw;
        if headroom == 0 {
            // Divider output at the rail: thermistor is disconnected
            return Err(SensorError::OpenCircuit);
        }
        Ok(self.config.series_ohms * (FULL_SCALE / headroom as f32 - 1.0))
    }

    /// Convert a raw sample to degrees Celsius
    pub fn celsius(&self, raw: u16) -> Result<f32, SensorError> {
        let ln_r = libm::logf(self.resistance(raw)?);
        let c = &self.config;
        let kelvin = 1.0 / (c.a + c.b * ln_r + c.c * ln_r * ln_r * ln_r);
        let celsius = kelvin - KELVIN_OFFSET;

        if celsius.is_finite() {
            Ok(celsius)
        } else {
            Err(SensorError::OutOfRange)
        }
    }
}

/// Convert degrees Celsius to degrees Fahrenheit
pub fn celsius_to_fahrenheit(celsius: f32) -> f32 {
    celsius * 9.0 / 5.0 + 32.0
}

/// Round to a number of decimal places
///
/// When `digits` is beyond what an `f32` can scale to, `value` is returned
/// unchanged.
pub fn round_to(value: f32, digits: u8) -> f32 {
    let factor = libm::powf(10.0, digits as f32);
    let scaled = value * factor;
    if !scaled.is_finite() {
        return value;
    }
    libm::roundf(scaled) / factor
}
