#![deny(unsafe_code)]

use embedded_hal::digital::PinState;

#[cfg(test)]
use mockall::automock;

/// One hardware output line together with the primitives the beacon drives it with.
///
/// Implementations own the line, so handing a line to a [`Beacon`](crate::services::beacon::Beacon)
/// is what selects the pin it drives.
#[cfg_attr(test, automock(type Error = ();))]
pub trait OutputLine {
    type Error;

    /// Puts the line into output mode. Must not change the driven level when already an output.
    fn configure_output(&mut self) -> Result<(), Self::Error>;
    fn write_digital(&mut self, state: PinState) -> Result<(), Self::Error>;
    /// State the line is currently driven to.
    fn read_digital(&mut self) -> Result<PinState, Self::Error>;
    /// PWM intensity, 0 is off and 255 fully on.
    fn write_analog(&mut self, intensity: u8) -> Result<(), Self::Error>;
}
