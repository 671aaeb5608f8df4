pub mod digital;
pub mod legacy;
pub mod pwm;

/// Intensity from which a line without PWM is driven high, like `analogWrite` on a plain pin.
pub const ANALOG_HIGH_THRESHOLD: u8 = 128;
