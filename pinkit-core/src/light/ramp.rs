//! Brightness ramp planning
//!
//! A ramp splits a duration into `duration_ms / step_ms` discrete brightness
//! levels (integer division). The driver writes one level, sleeps `step_ms`,
//! and moves on. Planning is separated from execution so the whole ramp can
//! be validated before the first hardware write.

use crate::error::DriverError;

/// Ramp direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RampDirection {
    /// From dark towards the target level
    Up,
    /// From the start level towards zero
    Down,
}

/// Planned brightness ramp
///
/// ```text
/// Up   (target 1.0, 100ms / 10ms):  0.1  0.2  ...  0.9  1.0
/// Down (start 1.0,  100ms / 10ms):  0.9  0.8  ...  0.1  0.0   then off
/// ```
///
/// The up ramp ends exactly on the target. A duration shorter than one step
/// plans zero levels; the driver then jumps straight to the end state.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Ramp {
    direction: RampDirection,
    /// Target level for Up, start level for Down
    level: f32,
    steps: u32,
    step_ms: u32,
}

impl Ramp {
    /// Plan a ramp from dark up to `target`
    pub fn up(target: f32, duration_ms: u32, step_ms: u32) -> Result<Self, DriverError> {
        Self::new(RampDirection::Up, target, duration_ms, step_ms)
    }

    /// Plan a ramp from `start` down to zero
    pub fn down(start: f32, duration_ms: u32, step_ms: u32) -> Result<Self, DriverError> {
        Self::new(RampDirection::Down, start, duration_ms, step_ms)
    }

    fn new(
        direction: RampDirection,
        level: f32,
        duration_ms: u32,
        step_ms: u32,
    ) -> Result<Self, DriverError> {
        if step_ms == 0 {
            return Err(DriverError::InvalidArgument);
        }

        Ok(Self {
            direction,
            level,
            steps: duration_ms / step_ms,
            step_ms,
        })
    }

    /// Ramp direction
    pub fn direction(&self) -> RampDirection {
        self.direction
    }

    /// Number of planned levels
    pub fn steps(&self) -> u32 {
        self.steps
    }

    /// Delay after each level
    pub fn step_ms(&self) -> u32 {
        self.step_ms
    }

    /// Check if the ramp has no intermediate levels
    pub fn is_empty(&self) -> bool {
        self.steps == 0
    }

    /// Level written at position `index` (`0..steps`)
    ///
    /// Indices past the last step give the ramp's end level.
    pub fn level_at(&self, index: u32) -> f32 {
        if index >= self.steps {
            return match self.direction {
                RampDirection::Up => self.level,
                RampDirection::Down => 0.0,
            };
        }

        let per_step = self.level / self.steps as f32;
        match self.direction {
            RampDirection::Up => {
                let k = index + 1;
                if k >= self.steps {
                    // Land exactly on the target, not on an accumulated product
                    self.level
                } else {
                    per_step * k as f32
                }
            }
            RampDirection::Down => per_step * (self.steps - 1 - index) as f32,
        }
    }

    /// Iterate the planned levels in write order
    pub fn levels(&self) -> impl Iterator<Item = f32> {
        let ramp = *self;
        (0..self.steps).map(move |i| ramp.level_at(i))
    }

    /// Check every planned level against the light's mode
    pub fn validate(&self, pwm: bool) -> Result<(), DriverError> {
        if self.direction == RampDirection::Up {
            check_brightness(self.level, pwm)?;
        }
        self.levels().try_for_each(|level| check_brightness(level, pwm))
    }
}

/// Validate a brightness request
///
/// In PWM mode any level in `0.0..=1.0` is accepted; anything else
/// (including NaN) is rejected rather than clamped. In binary mode only
/// full brightness can be requested.
pub fn check_brightness(level: f32, pwm: bool) -> Result<(), DriverError> {
    if pwm {
        if (0.0..=1.0).contains(&level) {
            Ok(())
        } else {
            Err(DriverError::InvalidArgument)
        }
    } else if level == 1.0 {
        Ok(())
    } else {
        Err(DriverError::UnsupportedOperation)
    }
}
