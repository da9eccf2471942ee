//! Pinkit Hardware Abstraction Layer
//!
//! This crate defines the hardware traits the Pinkit drivers are written
//! against. A board support crate implements them for its chip; tests
//! implement them with in-memory mocks.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (board firmware)           │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinkit-drivers (lights, button, probe) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  pinkit-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  chip HAL     │       │  test mocks   │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`], [`gpio::EdgeInput`] - Digital I/O
//! - [`pwm::PwmOutput`], [`pwm::PwmPin`] - Duty-cycle output
//! - [`adc::AnalogInput`] - Raw analog samples
//! - [`time::Clock`] - Monotonic millisecond clock
//!
//! Cooperative sleeping is not defined here; drivers use
//! `embedded_hal_async::delay::DelayNs`.

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod pwm;
pub mod time;

// Re-export key traits at crate root for convenience
pub use adc::AnalogInput;
pub use gpio::{EdgeInput, InputPin, OutputPin};
pub use pwm::{PwmOutput, PwmPin};
pub use time::{ticks_diff, Clock};

#[cfg(feature = "embassy-time")]
pub use time::EmbassyClock;
