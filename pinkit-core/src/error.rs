//! Driver error types
//!
//! Every error is raised at the call site before any hardware write, so a
//! rejected call never leaves a line half-updated.

use core::fmt;

/// Errors that can occur with temperature sensing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Sample at full scale: thermistor disconnected (infinite resistance)
    OpenCircuit,
    /// Conversion produced a non-finite temperature
    OutOfRange,
}

/// Errors returned by the peripheral drivers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DriverError {
    /// Brightness, color component or timing value out of range
    InvalidArgument,
    /// Fractional brightness requested while the light is in binary mode
    UnsupportedOperation,
    /// Malformed `#RRGGBB` color string
    InvalidFormat,
    /// Stable temperature read while the sampling loop is not running
    PreconditionViolation,
    /// A bounded listener list is full
    CapacityExceeded,
    /// Sensor fault
    Sensor(SensorError),
}

impl From<SensorError> for DriverError {
    fn from(err: SensorError) -> Self {
        DriverError::Sensor(err)
    }
}

impl fmt::Display for SensorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SensorError::OpenCircuit => f.write_str("thermistor open circuit"),
            SensorError::OutOfRange => f.write_str("temperature out of range"),
        }
    }
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::InvalidArgument => f.write_str("argument out of range"),
            DriverError::UnsupportedOperation => {
                f.write_str("enable PWM for brightness control")
            }
            DriverError::InvalidFormat => f.write_str("not a valid #RRGGBB color string"),
            DriverError::PreconditionViolation => {
                f.write_str("start measuring before reading the stable temperature")
            }
            DriverError::CapacityExceeded => f.write_str("listener capacity exceeded"),
            DriverError::Sensor(err) => write!(f, "sensor fault: {}", err),
        }
    }
}
