//! Single-channel light with brightness ramps
//!
//! The light runs in one of two modes:
//! - Binary: the line is a plain digital output, only full-on and off exist
//! - PWM: brightness is a duty fraction in `0.0..=1.0`
//!
//! Ramps (`fade_in`, `fade_out`, `fade_blink`) are async and sleep between
//! steps through an `embedded_hal_async` delay, so other tasks run while a
//! light fades. A ramp borrows the light mutably, which rules out two ramps
//! interleaving their writes on the same light. Dropping a ramp future
//! cancels it at the next step; the light keeps the last level it wrote.
//!
//! # Usage
//!
//! ```ignore
//! let mut led = DimmableLight::new(pin, LightConfig::dimmable());
//! led.on(0.25)?;
//! led.fade_in(&mut Delay, 500, 1.0).await?;
//! led.fade_out(&mut Delay, 500).await?;
//! ```

use embedded_hal_async::delay::DelayNs;
use pinkit_core::config::LightConfig;
use pinkit_core::light::{check_brightness, Ramp};
use pinkit_core::DriverError;
use pinkit_hal::PwmPin;

/// Dimmable light on a PWM-capable line
pub struct DimmableLight<P> {
    pin: P,
    config: LightConfig,
    pwm_enabled: bool,
    /// Last committed level (0.0 - 1.0)
    brightness: f32,
}

impl<P: PwmPin> DimmableLight<P> {
    /// Create a new light, initially off
    ///
    /// The line starts as a digital output and switches to PWM when
    /// `config.pwm` is set.
    pub fn new(pin: P, config: LightConfig) -> Self {
        let mut light = Self {
            pin,
            config,
            pwm_enabled: false,
            brightness: 0.0,
        };
        light.pin.init_output();
        light.pin.set_low();

        if config.pwm {
            light.enable_pwm(config.pwm_frequency_hz);
        }
        light
    }

    /// Get the configuration
    pub fn config(&self) -> &LightConfig {
        &self.config
    }

    /// Last committed brightness
    pub fn brightness(&self) -> f32 {
        self.brightness
    }

    /// Check if brightness control is available
    pub fn is_pwm_enabled(&self) -> bool {
        self.pwm_enabled
    }

    /// Check if the light is emitting at all
    pub fn is_on(&self) -> bool {
        self.brightness > 0.0
    }

    /// Give the line back
    pub fn release(self) -> P {
        self.pin
    }

    /// Turn on at `brightness`
    ///
    /// In binary mode only `1.0` is accepted.
    pub fn on(&mut self, brightness: f32) -> Result<(), DriverError> {
        check_brightness(brightness, self.pwm_enabled)?;
        self.commit(brightness);
        Ok(())
    }

    /// Turn on at full brightness (valid in both modes)
    pub fn on_full(&mut self) {
        self.commit(1.0);
    }

    /// Turn off
    pub fn off(&mut self) {
        self.brightness = 0.0;
        if self.pwm_enabled {
            self.pin.set_duty(0);
        } else {
            self.pin.set_low();
        }
    }

    /// Switch to PWM mode and re-apply the last brightness
    pub fn enable_pwm(&mut self, frequency_hz: u32) {
        self.pin.init(frequency_hz);
        self.pwm_enabled = true;
        self.config.pwm_frequency_hz = frequency_hz;
        self.commit(self.brightness);

        #[cfg(feature = "defmt")]
        defmt::debug!("light: PWM enabled at {} Hz", frequency_hz);
    }

    /// Switch back to binary mode; the light ends up off
    pub fn disable_pwm(&mut self) {
        if self.pwm_enabled {
            self.pin.deinit();
            self.pwm_enabled = false;
        }
        self.pin.init_output();
        self.off();
    }

    /// Turn on for `duration_ms`, then off
    ///
    /// Runs to completion once started.
    pub async fn blink<D: DelayNs>(
        &mut self,
        delay: &mut D,
        duration_ms: u32,
        brightness: f32,
    ) -> Result<(), DriverError> {
        self.on(brightness)?;
        delay.delay_ms(duration_ms).await;
        self.off();
        Ok(())
    }

    /// Ramp from dark up to `brightness` over `duration_ms`
    ///
    /// Uses the configured step length.
    pub async fn fade_in<D: DelayNs>(
        &mut self,
        delay: &mut D,
        duration_ms: u32,
        brightness: f32,
    ) -> Result<(), DriverError> {
        let step_ms = self.config.step_ms;
        self.fade_in_with_step(delay, duration_ms, brightness, step_ms)
            .await
    }

    /// Ramp from dark up to `brightness` in `duration_ms / step_ms` steps
    ///
    /// Step `i` (1-based) writes `brightness / steps * i` and then sleeps
    /// `step_ms`; the last step writes exactly `brightness`. A duration
    /// shorter than one step jumps straight to `brightness`.
    pub async fn fade_in_with_step<D: DelayNs>(
        &mut self,
        delay: &mut D,
        duration_ms: u32,
        brightness: f32,
        step_ms: u32,
    ) -> Result<(), DriverError> {
        let ramp = Ramp::up(brightness, duration_ms, step_ms)?;
        ramp.validate(self.pwm_enabled)?;

        if ramp.is_empty() {
            self.commit(brightness);
        } else {
            self.run_ramp(delay, &ramp).await;
        }
        Ok(())
    }

    /// Ramp from the current brightness down to off over `duration_ms`
    ///
    /// Uses the configured step length.
    pub async fn fade_out<D: DelayNs>(
        &mut self,
        delay: &mut D,
        duration_ms: u32,
    ) -> Result<(), DriverError> {
        let step_ms = self.config.step_ms;
        self.fade_out_with_step(delay, duration_ms, step_ms).await
    }

    /// Ramp from the current brightness down to zero, then turn off
    pub async fn fade_out_with_step<D: DelayNs>(
        &mut self,
        delay: &mut D,
        duration_ms: u32,
        step_ms: u32,
    ) -> Result<(), DriverError> {
        let ramp = Ramp::down(self.brightness, duration_ms, step_ms)?;
        ramp.validate(self.pwm_enabled)?;

        self.run_ramp(delay, &ramp).await;
        self.off();
        Ok(())
    }

    /// Fade in, hold at `brightness`, fade out
    ///
    /// Uses the configured step length.
    pub async fn fade_blink<D: DelayNs>(
        &mut self,
        delay: &mut D,
        fade_in_ms: u32,
        hold_ms: u32,
        fade_out_ms: u32,
        brightness: f32,
    ) -> Result<(), DriverError> {
        let step_ms = self.config.step_ms;
        self.fade_blink_with_step(delay, fade_in_ms, hold_ms, fade_out_ms, brightness, step_ms)
            .await
    }

    /// Fade in, hold, fade out; each phase completes before the next
    ///
    /// Both ramps are validated before the first write.
    pub async fn fade_blink_with_step<D: DelayNs>(
        &mut self,
        delay: &mut D,
        fade_in_ms: u32,
        hold_ms: u32,
        fade_out_ms: u32,
        brightness: f32,
        step_ms: u32,
    ) -> Result<(), DriverError> {
        Ramp::up(brightness, fade_in_ms, step_ms)?.validate(self.pwm_enabled)?;
        Ramp::down(brightness, fade_out_ms, step_ms)?.validate(self.pwm_enabled)?;

        self.fade_in_with_step(delay, fade_in_ms, brightness, step_ms)
            .await?;
        delay.delay_ms(hold_ms).await;
        self.fade_out_with_step(delay, fade_out_ms, step_ms).await
    }

    async fn run_ramp<D: DelayNs>(&mut self, delay: &mut D, ramp: &Ramp) {
        for level in ramp.levels() {
            self.commit(level);
            delay.delay_ms(ramp.step_ms()).await;
        }
    }

    /// Write an already validated level
    fn commit(&mut self, level: f32) {
        self.brightness = level;
        if self.pwm_enabled {
            self.pin.set_duty_fraction(level);
        } else {
            self.pin.set_state(level > 0.0);
        }
    }
}
