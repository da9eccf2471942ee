//! Configuration type definitions

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum synchronous click listeners per button
pub const MAX_CLICK_LISTENERS: usize = 8;

/// Maximum deferred (task) click listeners per button
pub const MAX_DEFERRED_LISTENERS: usize = 4;

/// Default upper bound for the probe's averaging window
pub const MAX_MEAN_COUNT: usize = 64;

/// Default PWM frequency for light channels (Hz)
pub const DEFAULT_PWM_FREQUENCY_HZ: u32 = 1000;

/// Default delay between ramp steps (ms)
pub const DEFAULT_STEP_MS: u32 = 10;

/// Default debounce window (ms)
pub const DEFAULT_DEBOUNCE_MS: u32 = 50;

/// Single light channel configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LightConfig {
    /// Start in PWM mode (brightness control) instead of binary mode
    pub pwm: bool,
    /// PWM frequency used when PWM mode is enabled
    pub pwm_frequency_hz: u32,
    /// Default delay between ramp steps
    pub step_ms: u32,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            pwm: false,
            pwm_frequency_hz: DEFAULT_PWM_FREQUENCY_HZ,
            step_ms: DEFAULT_STEP_MS,
        }
    }
}

impl LightConfig {
    /// Configuration for a light that starts in PWM mode
    pub fn dimmable() -> Self {
        Self {
            pwm: true,
            ..Self::default()
        }
    }
}

/// Push-button configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ButtonConfig {
    /// Minimum quiet time before a press is accepted
    pub debounce_ms: u32,
    /// Button pulls the line low when pressed (pull-up wiring)
    pub active_low: bool,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            active_low: true,
        }
    }
}

impl ButtonConfig {
    /// Translate a raw line level into a pressed/released state
    pub fn is_pressed_level(&self, line_high: bool) -> bool {
        line_high != self.active_low
    }
}

/// Temperature sampling loop configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SamplingConfig {
    /// Time between two samples
    pub interval_ms: u32,
    /// Number of most recent samples averaged into the stable value
    pub mean_count: usize,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            interval_ms: 1000,
            mean_count: 15,
        }
    }
}

impl SamplingConfig {
    /// Build a configuration from an interval in (fractional) seconds
    ///
    /// Negative or NaN intervals become zero.
    pub fn from_secs(interval_s: f32, mean_count: usize) -> Self {
        let interval_ms = libm::roundf(interval_s * 1000.0);
        Self {
            interval_ms: if interval_ms > 0.0 {
                interval_ms as u32
            } else {
                0
            },
            mean_count,
        }
    }
}

/// Thermistor conversion parameters
///
/// Circuit: VCC -- series resistor -- ADC_PIN -- NTC -- GND, sampled on a
/// 16-bit scale. Coefficients are Steinhart-Hart `a`, `b`, `c` for
/// `1/T = a + b*ln(R) + c*ln(R)^3`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ThermistorConfig {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    /// Series resistor value in ohms
    pub series_ohms: f32,
}

impl Default for ThermistorConfig {
    /// Common 10K NTC with a 10K series resistor
    fn default() -> Self {
        Self {
            a: 0.001_129_148,
            b: 0.000_234_125,
            c: 0.000_000_087_674_1,
            series_ohms: 10_000.0,
        }
    }
}
