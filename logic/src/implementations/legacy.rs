#![deny(unsafe_code)]

use core::convert::Infallible;

use embedded_hal::digital::PinState;
use embedded_hal_02::digital::v2::{OutputPin, StatefulOutputPin};
use embedded_hal_02::PwmPin;
use crate::hal_ext::output_line::OutputLine;
use crate::implementations::ANALOG_HIGH_THRESHOLD;

/// [`DigitalLine`](crate::implementations::digital::DigitalLine) for HALs still on embedded-hal 0.2.
pub struct LegacyDigitalLine<P> {
    pin: P,
}

impl<P: StatefulOutputPin> LegacyDigitalLine<P> {
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: StatefulOutputPin> OutputLine for LegacyDigitalLine<P> {
    type Error = <P as OutputPin>::Error;

    #[inline(always)]
    fn configure_output(&mut self) -> Result<(), Self::Error> {
        Ok(())
    }

    fn write_digital(&mut self, state: PinState) -> Result<(), Self::Error> {
        match state {
            PinState::High => self.pin.set_high(),
            PinState::Low => self.pin.set_low(),
        }
    }

    #[inline(always)]
    fn read_digital(&mut self) -> Result<PinState, Self::Error> {
        self.pin.is_set_high().map(PinState::from)
    }

    fn write_analog(&mut self, intensity: u8) -> Result<(), Self::Error> {
        self.write_digital(PinState::from(intensity >= ANALOG_HIGH_THRESHOLD))
    }
}

/// embedded-hal 0.2 PWM channel, enabled when the beacon configures it. Like
/// [`PwmLine`](crate::implementations::pwm::PwmLine) it reads back the last commanded
/// intensity, not the duty the channel rounded it to.
pub struct LegacyPwmLine<P> {
    channel: P,
    intensity: u8,
}

impl<P: PwmPin<Duty = u16>> LegacyPwmLine<P> {
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

impl<P: PwmPin<Duty = u16>> OutputLine for LegacyPwmLine<P> {
    type Error = Infallible;

    fn configure_output(&mut self) -> Result<(), Self::Error> {
        self.channel.enable();
        Ok(())
    }

    fn write_digital(&mut self, state: PinState) -> Result<(), Self::Error> {
        let (duty, intensity) = match state {
            PinState::High => (self.channel.get_max_duty(), u8::MAX),
            PinState::Low => (0, 0),
        };
        self.channel.set_duty(duty);
        self.intensity = intensity;
        Ok(())
    }

    #[inline(always)]
    fn read_digital(&mut self) -> Result<PinState, Self::Error> {
        Ok(PinState::from(self.intensity >= ANALOG_HIGH_THRESHOLD))
    }

    fn write_analog(&mut self, intensity: u8) -> Result<(), Self::Error> {
        let max = u32::from(self.channel.get_max_duty());
        let duty = max * u32::from(intensity) / u32::from(u8::MAX);
        self.channel.set_duty(duty as u16);
        self.intensity = intensity;
        Ok(())
    }
}
