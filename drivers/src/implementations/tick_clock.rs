#![deny(unsafe_code)]

use core::sync::atomic::{AtomicU32, Ordering};
use logic::hal_ext::millis::{Millis, MillisClock};

/**
Millisecond counter advanced from a periodic timer interrupt (SysTick or any timer update
event) and read from the main loop.

Meant to live in a `static` so that the interrupt handler and every beacon can reach it:

```
use drivers::implementations::tick_clock::TickClock;
use logic::hal_ext::millis::MillisClock;

static CLOCK: TickClock = TickClock::new();

// in the SysTick handler
CLOCK.tick();

assert_eq!(1, CLOCK.now().value());
```

The counter wraps at `u32::MAX`, matching the wrap-around rule of [`Millis`].
 */
pub struct TickClock {
    millis: AtomicU32,
    period_ms: u32,
}

impl TickClock {

    /// Clock for a 1 kHz tick.
    pub const fn new() -> Self {
        Self::with_period(1)
    }

    /// Clock for a tick firing every `period_ms` milliseconds.
    pub const fn with_period(period_ms: u32) -> Self {
        Self { millis: AtomicU32::new(0), period_ms }
    }

    #[inline(always)]
    pub fn tick(&self) {
        self.advance(self.period_ms);
    }

    #[inline(always)]
    pub fn advance(&self, millis: u32) {
        // fetch_add wraps on overflow
        self.millis.fetch_add(millis, Ordering::Relaxed);
    }

    pub fn set(&self, now: Millis) {
        self.millis.store(now.value(), Ordering::Relaxed);
        #[cfg(feature = "defmt")]
        defmt::debug!("tick clock set to {}", now);
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MillisClock for TickClock {
    #[inline(always)]
    fn now(&self) -> Millis {
        Millis::new(self.millis.load(Ordering::Relaxed))
    }
}
