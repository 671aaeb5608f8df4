#![deny(unsafe_code)]

use core::mem;

use embedded_hal::digital::PinState;

use crate::errors::LineRejected;
use crate::hal_ext::millis::{Millis, MillisClock};
use crate::hal_ext::output_line::OutputLine;

pub mod waveform;

pub use waveform::{Cursor, Direction, Waveform, DEFAULT_WAVEFORM};


/// What a beacon does with its line on every step.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Pattern<'a> {
    /// Invert the line every `cadence` ms.
    Flash { cadence: u32 },
    /// Write the waveform entry under `cursor` as PWM intensity every `step` ms.
    Fade { waveform: Waveform<'a>, step: u32, cursor: Cursor },
}

impl<'a> Pattern<'a> {
    fn fade(waveform: Waveform<'a>, half_cycle_ms: u32) -> Self {
        Pattern::Fade { waveform, step: waveform.step_interval(half_cycle_ms), cursor: Cursor::new() }
    }

    #[inline(always)]
    pub fn step_interval(&self) -> u32 {
        match self {
            Pattern::Flash { cadence } => *cadence,
            Pattern::Fade { step, .. } => *step,
        }
    }
}

/**
Heartbeat LED driven from a polling loop.

A beacon either blinks its line or fades it up and down through a [`Waveform`]. It never
blocks: [`Beacon::update`] has to be called from the main loop, more often than the step
interval, and performs at most one step per call. Steps missed because the loop was late
are dropped, not replayed.
 */
pub struct Beacon<'a, L, C>
    where
        L: OutputLine,
        C: MillisClock,
{
    line: L,
    clock: C,
    pattern: Pattern<'a>,
    next_deadline: Option<Millis>,
}

impl<'a, L, C> Beacon<'a, L, C>
    where
        L: OutputLine,
        C: MillisClock,
{
    /// Blinks `line`, inverting it every `cadence` ms.
    pub fn flash(line: L, clock: C, cadence: u32) -> Result<Self, L::Error> {
        Self::new(line, clock, Pattern::Flash { cadence })
    }

    /**
    Fades `line` through the caller's `table`, one pass up or down taking `half_cycle_ms`.
    The table is borrowed for the lifetime of the beacon, it is not copied.
     */
    pub fn fade(line: L, clock: C, table: &'a [u8], half_cycle_ms: u32) -> Result<Self, L::Error> {
        Self::with_waveform(line, clock, Waveform::new(table), half_cycle_ms)
    }

    pub fn with_waveform(line: L, clock: C, waveform: Waveform<'a>, half_cycle_ms: u32) -> Result<Self, L::Error> {
        Self::new(line, clock, Pattern::fade(waveform, half_cycle_ms))
    }

    fn new(line: L, clock: C, pattern: Pattern<'a>) -> Result<Self, L::Error> {
        let mut beacon = Self {
            line,
            clock,
            pattern,
            next_deadline: None,
        };
        beacon.start()?;
        Ok(beacon)
    }

    /// (Re)configures the line as output and restarts the pattern from its first step.
    pub fn start(&mut self) -> Result<(), L::Error> {
        self.line.configure_output()?;
        self.rewind();
        Ok(())
    }

    /// Drives the line low and suspends updates until the next [`Beacon::start`].
    pub fn stop(&mut self) -> Result<(), L::Error> {
        self.next_deadline = None;
        #[cfg(feature = "defmt")]
        defmt::debug!("beacon stopped");
        self.line.write_digital(PinState::Low)
    }

    /**
    Changes the step interval. A fading beacon spreads `half_cycle_ms` over its table,
    a flashing one uses it as its new cadence. The step already scheduled keeps its deadline.
     */
    pub fn change_duration(&mut self, half_cycle_ms: u32) {
        match &mut self.pattern {
            Pattern::Flash { cadence } => *cadence = half_cycle_ms,
            Pattern::Fade { waveform, step, .. } => *step = waveform.step_interval(half_cycle_ms),
        }
        #[cfg(feature = "defmt")]
        defmt::debug!("beacon step interval changed to {=u32} ms", self.pattern.step_interval());
    }

    /**
    Moves the beacon onto `line` and restarts it there. The previous line is handed back
    as it is, still at the level it was last driven to.

    If `line` fails to configure the beacon keeps running on its current line and the
    rejected one is returned along with the error.
     */
    pub fn change_output_pin(&mut self, mut line: L) -> Result<L, LineRejected<L, L::Error>> {
        if let Err(error) = line.configure_output() {
            return Err(LineRejected { line, error });
        }
        let previous = mem::replace(&mut self.line, line);
        self.rewind();
        Ok(previous)
    }

    /// Performs the pending step when its deadline has been reached, otherwise does nothing.
    pub fn update(&mut self) -> Result<(), L::Error> {
        let Some(deadline) = self.next_deadline else {
            return Ok(());
        };
        let now = self.clock.now();
        if !now.has_reached(deadline) {
            return Ok(());
        }

        match &mut self.pattern {
            Pattern::Flash { .. } => {
                let state = !self.line.read_digital()?;
                self.line.write_digital(state)?;
                #[cfg(feature = "defmt")]
                defmt::trace!("beacon toggled to {}", state);
            }
            Pattern::Fade { waveform, cursor, .. } => {
                if let Some(intensity) = waveform.get(cursor.index()) {
                    self.line.write_analog(intensity)?;
                    #[cfg(feature = "defmt")]
                    defmt::trace!("beacon intensity {=u8} at {=usize}", intensity, cursor.index());
                }
                cursor.advance(waveform.len());
            }
        }

        self.next_deadline = Some(now + self.pattern.step_interval());
        Ok(())
    }

    #[inline(always)]
    pub fn is_running(&self) -> bool {
        self.next_deadline.is_some()
    }

    #[inline(always)]
    pub fn next_deadline(&self) -> Option<Millis> {
        self.next_deadline
    }

    #[inline(always)]
    pub fn step_interval(&self) -> u32 {
        self.pattern.step_interval()
    }

    #[inline(always)]
    pub fn pattern(&self) -> &Pattern<'a> {
        &self.pattern
    }

    /// Fade position, `None` for a flashing beacon.
    pub fn cursor(&self) -> Option<Cursor> {
        match self.pattern {
            Pattern::Flash { .. } => None,
            Pattern::Fade { cursor, .. } => Some(cursor),
        }
    }

    #[inline(always)]
    pub fn line(&self) -> &L {
        &self.line
    }

    pub fn release(self) -> L {
        self.line
    }

    fn rewind(&mut self) {
        if let Pattern::Fade { cursor, .. } = &mut self.pattern {
            *cursor = Cursor::new();
        }
        let step = self.pattern.step_interval();
        let deadline = self.clock.now() + step;
        self.next_deadline = Some(deadline);
        #[cfg(feature = "defmt")]
        defmt::debug!("beacon started, step {=u32} ms, first step at {}", step, deadline);
    }
}

impl<L, C> Beacon<'static, L, C>
    where
        L: OutputLine,
        C: MillisClock,
{
    /// Fades `line` through [`DEFAULT_WAVEFORM`], one pass up or down taking `half_cycle_ms`.
    pub fn fade_default(line: L, clock: C, half_cycle_ms: u32) -> Result<Self, L::Error> {
        Self::with_waveform(line, clock, Waveform::default_curve(), half_cycle_ms)
    }
}
