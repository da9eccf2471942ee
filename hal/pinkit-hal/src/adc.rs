//! Analog input abstraction

/// Analog input channel
///
/// Samples are reported on a full 16-bit scale (`0..=65535`) regardless of
/// the converter's native resolution. A 12-bit ADC shifts its result left
/// by four bits before returning it.
pub trait AnalogInput {
    /// Take one conversion
    ///
    /// Takes `&mut self` because ADC reads typically require mutable access.
    fn read_raw(&mut self) -> u16;
}
