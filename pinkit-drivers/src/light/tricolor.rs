//! RGB light on three PWM channels
//!
//! Each channel holds an 8-bit intensity that is scaled onto its own duty
//! range. Channels are written one after the other (red, green, blue), so a
//! color change may show a brief intermediate color.

use pinkit_core::light::{hsv_to_rgb, parse_hex_color, scale_channel};
use pinkit_core::DriverError;
use pinkit_hal::PwmOutput;
use rgb::RGB8;

/// Three-channel color light
pub struct TriColorLight<P> {
    red: P,
    green: P,
    blue: P,
    color: RGB8,
}

impl<P: PwmOutput> TriColorLight<P> {
    /// Create a new light and start all three channels at `frequency_hz`
    ///
    /// The light starts dark.
    pub fn new(red: P, green: P, blue: P, frequency_hz: u32) -> Self {
        let mut light = Self {
            red,
            green,
            blue,
            color: RGB8::default(),
        };
        light.red.init(frequency_hz);
        light.green.init(frequency_hz);
        light.blue.init(frequency_hz);
        light.off();
        light
    }

    /// Last committed color
    pub fn color(&self) -> RGB8 {
        self.color
    }

    /// Give the channels back as `(red, green, blue)`
    pub fn release(self) -> (P, P, P) {
        (self.red, self.green, self.blue)
    }

    /// Full white
    pub fn on(&mut self) {
        self.set_color_rgb(255, 255, 255);
    }

    /// All channels dark
    pub fn off(&mut self) {
        self.set_color_rgb(0, 0, 0);
    }

    /// Set each channel's 8-bit intensity
    ///
    /// The `u8` components make the `0..=255` range a type guarantee.
    pub fn set_color_rgb(&mut self, r: u8, g: u8, b: u8) {
        self.set_rgb(RGB8 { r, g, b });
    }

    /// Set the color from an [`RGB8`] value
    pub fn set_rgb(&mut self, color: RGB8) {
        let duty = scale_channel(color.r, self.red.max_duty());
        self.red.set_duty(duty);
        let duty = scale_channel(color.g, self.green.max_duty());
        self.green.set_duty(duty);
        let duty = scale_channel(color.b, self.blue.max_duty());
        self.blue.set_duty(duty);
        self.color = color;
    }

    /// Set the color from a `#RRGGBB` string
    pub fn set_color(&mut self, hex: &str) -> Result<(), DriverError> {
        let color = parse_hex_color(hex)?;
        self.set_rgb(color);
        Ok(())
    }

    /// Set the color from hue, saturation and value (each `0.0..=1.0`)
    pub fn set_color_hsv(&mut self, h: f32, s: f32, v: f32) -> Result<(), DriverError> {
        let color = hsv_to_rgb(h, s, v)?;
        self.set_rgb(color);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::MockChannel;

    fn light() -> TriColorLight<MockChannel> {
        TriColorLight::new(
            MockChannel::new(65535),
            MockChannel::new(65535),
            MockChannel::new(65535),
            1000,
        )
    }

    fn duties(light: TriColorLight<MockChannel>) -> (u16, u16, u16) {
        let (r, g, b) = light.release();
        (r.duty, g.duty, b.duty)
    }

    #[test]
    fn test_starts_dark() {
        let light = light();
        assert_eq!(light.color(), RGB8::default());

        let (r, g, b) = light.release();
        assert_eq!(r.frequency_hz, Some(1000));
        assert_eq!(g.frequency_hz, Some(1000));
        assert_eq!(b.frequency_hz, Some(1000));
        assert_eq!((r.duty, g.duty, b.duty), (0, 0, 0));
    }

    #[test]
    fn test_hex_red() {
        let mut light = light();
        light.set_color("#FF0000").unwrap();
        assert_eq!(light.color(), RGB8 { r: 255, g: 0, b: 0 });
        assert_eq!(duties(light), (65535, 0, 0));
    }

    #[test]
    fn test_hex_rejected_keeps_color() {
        let mut light = light();
        light.set_color("#102030").unwrap();

        assert_eq!(light.set_color("#ZZZZZZ"), Err(DriverError::InvalidFormat));
        assert_eq!(light.set_color("#12345"), Err(DriverError::InvalidFormat));
        assert_eq!(
            light.color(),
            RGB8 {
                r: 0x10,
                g: 0x20,
                b: 0x30
            }
        );
    }

    #[test]
    fn test_hsv() {
        let mut light = light();
        light.set_color_hsv(0.0, 1.0, 1.0).unwrap();
        assert_eq!(light.color(), RGB8 { r: 255, g: 0, b: 0 });

        light.set_color_hsv(1.0 / 3.0, 1.0, 1.0).unwrap();
        let green = light.color();
        assert!(green.r <= 1 && green.b <= 1);
        assert_eq!(green.g, 255);

        assert_eq!(
            light.set_color_hsv(0.5, 2.0, 1.0),
            Err(DriverError::InvalidArgument)
        );
        assert_eq!(light.color(), green);
    }

    #[test]
    fn test_on_off() {
        let mut light = light();
        light.on();
        assert_eq!(
            light.color(),
            RGB8 {
                r: 255,
                g: 255,
                b: 255
            }
        );

        light.off();
        assert_eq!(duties(light), (0, 0, 0));
    }

    #[test]
    fn test_scales_to_channel_range() {
        let mut light = TriColorLight::new(
            MockChannel::new(1000),
            MockChannel::new(255),
            MockChannel::new(65535),
            500,
        );
        light.set_color_rgb(255, 128, 1);
        assert_eq!(duties(light), (1000, 128, 257));
    }
}
