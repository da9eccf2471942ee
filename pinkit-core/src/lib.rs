//! Board-agnostic core logic for the Pinkit peripheral drivers
//!
//! This crate contains all driver logic that does not touch hardware:
//!
//! - Error taxonomy shared by every driver
//! - Configuration type definitions
//! - Brightness validation, ramp planning and color math
//! - Push-button debounce state machine
//! - Thermistor conversion and sliding-window averaging

#![no_std]
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod input;
pub mod light;
pub mod sensor;

pub use error::{DriverError, SensorError};
