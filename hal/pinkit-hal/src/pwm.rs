//! PWM output abstractions

use crate::gpio::OutputPin;

/// Duty-cycle output on a PWM slice/channel
pub trait PwmOutput {
    /// Attach the PWM peripheral to the line and start it at `frequency_hz`
    fn init(&mut self, frequency_hz: u32);

    /// Detach the PWM peripheral from the line
    fn deinit(&mut self);

    /// Raw duty value that corresponds to 100% on-time
    fn max_duty(&self) -> u16;

    /// Write a raw duty value in `0..=max_duty()`
    fn set_duty(&mut self, duty: u16);

    /// Write a duty fraction in `0.0..=1.0`
    ///
    /// The fraction is scaled onto the hardware duty range and truncated,
    /// so `1.0` is exactly `max_duty()`. Values outside the range saturate;
    /// callers are expected to validate before writing.
    fn set_duty_fraction(&mut self, fraction: f32) {
        let max = self.max_duty();
        let duty = (max as f32 * fraction) as u16;
        self.set_duty(duty.min(max));
    }
}

/// A line that can be driven either as a digital output or through PWM
pub trait PwmPin: OutputPin + PwmOutput {}

// Blanket implementation for types that implement both traits
impl<T: OutputPin + PwmOutput> PwmPin for T {}
