//! Peripheral drivers
//!
//! Drivers built on the traits of `pinkit-hal`, with the pure logic living
//! in `pinkit-core`:
//!
//! - Lights: single-channel dimmable LED with brightness ramps, RGB LED
//! - Inputs: debounced push-button with click listeners
//! - Sensors: thermistor probe with a sliding-window stable reading
//!
//! Anything that waits (ramps, blink holds, periodic sampling) is an async
//! fn taking an `embedded_hal_async::delay::DelayNs`, so it runs on any
//! executor. Shared driver state is guarded by `embassy_sync` blocking
//! mutexes; pick `CriticalSectionRawMutex` for state also touched from
//! interrupts and `NoopRawMutex` for single-executor use.

#![no_std]
#![deny(unsafe_code)]

pub mod input;
pub mod light;
pub mod sensor;

#[cfg(test)]
mod mock;

pub use input::{ClickEvent, DebouncedButton};
pub use light::{DimmableLight, TriColorLight};
pub use sensor::{SamplingReport, SamplingTask, SmoothedTemperatureProbe};
