//! Color parsing and conversion
//!
//! Colors are 8 bits per channel ([`RGB8`]). Conversions are pure functions
//! so they can be checked on the host without any PWM hardware.

use rgb::RGB8;

use crate::error::DriverError;

/// Parse a `#RRGGBB` color string
///
/// The leading `#` is required and exactly six hex digits must follow.
/// Both upper and lower case digits are accepted.
pub fn parse_hex_color(s: &str) -> Result<RGB8, DriverError> {
    let digits = s.strip_prefix('#').ok_or(DriverError::InvalidFormat)?;

    // from_str_radix would also accept a sign, so check digits first
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(DriverError::InvalidFormat);
    }

    let channel = |range: core::ops::Range<usize>| {
        u8::from_str_radix(&digits[range], 16).map_err(|_| DriverError::InvalidFormat)
    };

    Ok(RGB8 {
        r: channel(0..2)?,
        g: channel(2..4)?,
        b: channel(4..6)?,
    })
}

/// Convert HSV (each component `0.0..=1.0`) to 8-bit RGB
///
/// Uses the six-sector decomposition: sector `floor(h * 6) mod 6` selects
/// which channel is at full value, which is falling and which is rising.
/// Channel values are truncated, not rounded.
pub fn hsv_to_rgb(h: f32, s: f32, v: f32) -> Result<RGB8, DriverError> {
    let unit = 0.0..=1.0;
    if !unit.contains(&h) || !unit.contains(&s) || !unit.contains(&v) {
        return Err(DriverError::InvalidArgument);
    }

    let sector = libm::floorf(h * 6.0);
    let f = h * 6.0 - sector;

    let p = (255.0 * v * (1.0 - s)) as u8;
    let q = (255.0 * v * (1.0 - f * s)) as u8;
    let t = (255.0 * v * (1.0 - (1.0 - f) * s)) as u8;
    let v = (255.0 * v) as u8;

    let (r, g, b) = match sector as u32 % 6 {
        0 => (v, t, p),
        1 => (q, v, p),
        2 => (p, v, t),
        3 => (p, q, v),
        4 => (t, p, v),
        _ => (v, p, q),
    };

    Ok(RGB8 { r, g, b })
}

/// Scale an 8-bit channel intensity onto a PWM duty range
pub fn scale_channel(value: u8, max_duty: u16) -> u16 {
    (value as u32 * max_duty as u32 / 255) as u16
}
