#![deny(unsafe_code)]


#[derive(Debug, PartialEq, Copy, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Errors {
    /// Fade table with fewer than two entries, holds the offending length.
    WaveformTooShort(usize),
}

/// A line the beacon refused to switch to, handed back with the error it failed with.
#[derive(Debug, PartialEq)]
pub struct LineRejected<L, E> {
    pub line: L,
    pub error: E,
}

impl <L, E> LineRejected<L, E> {
    #[inline(always)]
    pub fn decompose(self) -> (L, E) {
        (self.line, self.error)
    }
}
