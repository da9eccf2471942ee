//! Light logic: brightness validation, ramps and color math

pub mod color;
pub mod ramp;

pub use color::{hsv_to_rgb, parse_hex_color, scale_channel};
pub use ramp::{check_brightness, Ramp, RampDirection};
