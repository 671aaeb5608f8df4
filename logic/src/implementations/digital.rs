#![deny(unsafe_code)]

use embedded_hal::digital::{PinState, StatefulOutputPin};
use crate::hal_ext::output_line::OutputLine;
use crate::implementations::ANALOG_HIGH_THRESHOLD;

/// Plain GPIO output. Intensities are thresholded since the pin has no PWM.
pub struct DigitalLine<P> {
    pin: P,
}

impl<P: StatefulOutputPin> DigitalLine<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> OutputLine for DigitalLine<P> {
    type Error = P::Error;

    // already an output, the pin type guarantees it
    #[inline(always)]
    fn configure_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    #[inline(always)]
    fn write_digital(&mut self, state: PinState) -> Result<(), Self::Error> {
        self.pin.set_state(state)
    }

    #[inline(always)]
    fn read_digital(&mut self) -> Result<PinState, Self::Error> {
        self.pin.is_set_high().map(PinState::from)
    }

    fn write_analog(&mut self, intensity: u8) -> Result<(), Self::Error> {
        self.write_digital(PinState::from(intensity >= ANALOG_HIGH_THRESHOLD))
    }
}
