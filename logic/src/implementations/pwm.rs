#![deny(unsafe_code)]

use embedded_hal::digital::PinState;
use embedded_hal::pwm::SetDutyCycle;
use crate::hal_ext::output_line::OutputLine;
use crate::implementations::ANALOG_HIGH_THRESHOLD;

/**
PWM channel used as a dimmable line. Digital levels map to fully on / fully off and
reading back reports the level last commanded, since a PWM channel can't be sampled.
 */
pub struct PwmLine<P> {
    channel: P,
    intensity: u8,
}

impl<P: SetDutyCycle> PwmLine<P> {
    pub fn new(channel: P) -> Self {
        Self { channel, intensity: 0 }
    }

    #[inline(always)]
    pub fn intensity(&self) -> u8 {
        self.intensity
    }

    pub fn release(self) -> P {
        self.channel
    }
}

impl<P: SetDutyCycle> OutputLine for PwmLine<P> {
    type Error = P::Error;

    #[inline(always)]
    fn configure_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_digital(&mut self, state: PinState) -> Result<(), Self::Error> {
        self.intensity = match state {
            PinState::High => {
                self.channel.set_duty_cycle_fully_on()?;
                u8::MAX
            }
            PinState::Low => {
                self.channel.set_duty_cycle_fully_off()?;
                0
            }
        };
        Ok(())
    }

    fn read_digital(&mut self) -> Result<PinState, Self::Error> {
        Ok(PinState::from(self.intensity >= ANALOG_HIGH_THRESHOLD))
    }

    fn write_analog(&mut self, intensity: u8) -> Result<(), Self::Error> {
        self.channel.set_duty_cycle_fraction(u16::from(intensity), u16::from(u8::MAX))?;
        self.intensity = intensity;
        Ok(())
    }
}
