//! Digital lines
//!
//! LEDs drive an [`OutputPin`]; buttons read an [`InputPin`], and an
//! [`EdgeInput`] when the board can deliver level changes asynchronously.

use core::future::Future;

/// Line driven by the MCU
pub trait OutputPin {
    /// (Re)configure the line as a plain push-pull output
    ///
    /// Called when a line leaves PWM mode. The level after this call is
    /// unspecified; callers drive it explicitly.
    fn init_output(&mut self);

    /// Drive the line to logic 1
    fn set_high(&mut self);

    /// Drive the line to logic 0
    fn set_low(&mut self);

    /// Drive the line to `high`
    fn set_state(&mut self, high: bool) {
        if high {
            self.set_high();
        } else {
            self.set_low();
        }
    }

    /// Level last driven onto the line
    fn is_set_high(&self) -> bool;

    /// Inverse of [`is_set_high`](Self::is_set_high)
    fn is_set_low(&self) -> bool {
        !self.is_set_high()
    }
}

/// Line sampled by the MCU
pub trait InputPin {
    /// Current level is logic 1
    fn is_high(&self) -> bool;

    /// Current level is logic 0
    fn is_low(&self) -> bool {
        !self.is_high()
    }
}

/// Input line that can wait for a level change
///
/// The future completes on the next rising *or* falling edge. On embassy
/// HALs this maps onto `Input::wait_for_any_edge`, which arms the GPIO
/// interrupt and wakes the waiting task from the interrupt handler.
pub trait EdgeInput: InputPin {
    /// Wait for the next level transition in either direction
    fn wait_for_any_edge(&mut self) -> impl Future<Output = ()>;
}
