#![deny(unsafe_code)]

use core::ops::Add;

const HALF_RANGE: u32 = 1 << 31;
const MILLIS_PER_SECOND: u32 = 1_000;

/// Millisecond timestamp of a free running `u32` counter.
///
/// The counter wraps after ~49.7 days, so timestamps are only comparable when
/// they are less than half of the range apart.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Millis(u32);

impl Millis {

    #[inline(always)]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    #[inline(always)]
    pub const fn from_secs(seconds: u32) -> Self {
        Self(seconds.wrapping_mul(MILLIS_PER_SECOND))
    }

    #[inline(always)]
    pub fn value(&self) -> u32 {
        self.0
    }

    #[inline(always)]
    pub fn whole_seconds(&self) -> u32 {
        self.0 / MILLIS_PER_SECOND
    }

    #[inline(always)]
    pub fn wrapping_add(self, duration: u32) -> Self {
        Self(self.0.wrapping_add(duration))
    }

    #[inline(always)]
    pub fn wrapping_since(self, earlier: Millis) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }

    /**
    True when `self` is at or past `deadline`, tolerating one wrap of the counter between them.
     */
    #[inline(always)]
    pub fn has_reached(self, deadline: Millis) -> bool {
        self.wrapping_since(deadline) < HALF_RANGE
    }
}

impl Add<u32> for Millis {
    type Output = Millis;

    #[inline(always)]
    fn add(self, duration: u32) -> Self::Output {
        self.wrapping_add(duration)
    }
}

/// Monotonic millisecond time source.
pub trait MillisClock {
    fn now(&self) -> Millis;
}

impl<C: MillisClock + ?Sized> MillisClock for &C {
    #[inline(always)]
    fn now(&self) -> Millis {
        (**self).now()
    }
}
