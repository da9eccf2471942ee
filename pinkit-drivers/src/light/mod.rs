//! Light drivers
//!
//! - [`DimmableLight`]: one channel, binary or PWM, with brightness ramps
//! - [`TriColorLight`]: three PWM channels driven as one RGB color

pub mod dimmable;
pub mod tricolor;

pub use dimmable::DimmableLight;
pub use tricolor::TriColorLight;
