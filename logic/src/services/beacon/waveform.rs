#![deny(unsafe_code)]

use crate::errors::Errors;

pub const DEFAULT_WAVEFORM_LEN: usize = 45;

/// Ease-in/ease-out ramp used by every fading beacon that brings no table of its own.
pub static DEFAULT_WAVEFORM: [u8; DEFAULT_WAVEFORM_LEN] = [
      1,   6,  12,  23,  34,  45,  55,  65,  75,  85,
     94, 103, 112, 120, 129, 137, 145, 153, 160, 167,
    174, 181, 187, 193, 199, 205, 210, 215, 220, 225,
    229, 233, 237, 241, 243, 245, 246, 247, 248, 249,
    250, 251, 252, 253, 254,
];

/// Read-only view of one half cycle of a fade, from dim to bright.
///
/// The table is borrowed, never copied: it has to outlive the beacon using it and
/// stays frozen for as long as the beacon holds the view.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Waveform<'a> {
    table: &'a [u8],
}

impl<'a> Waveform<'a> {

    /// Wraps `table` as is. Tables shorter than two entries are accepted and degrade
    /// to a constant (one entry) or silent (empty) fade.
    #[inline(always)]
    pub const fn new(table: &'a [u8]) -> Self {
        Self { table }
    }

    pub fn checked(table: &'a [u8]) -> Result<Self, Errors> {
        if table.len() < 2 {
            return Err(Errors::WaveformTooShort(table.len()));
        }
        Ok(Self { table })
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.table.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    #[inline(always)]
    pub fn get(&self, index: usize) -> Option<u8> {
        self.table.get(index).copied()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &'a [u8] {
        self.table
    }

    /**
    Time between two table steps so that one pass over the table lasts `half_cycle_ms`.
    Rounds down, an empty table yields 0.
     */
    pub fn step_interval(&self, half_cycle_ms: u32) -> u32 {
        u32::try_from(self.table.len())
            .ok()
            .and_then(|len| half_cycle_ms.checked_div(len))
            .unwrap_or(0)
    }
}

impl Waveform<'static> {
    #[inline(always)]
    pub fn default_curve() -> Self {
        Self { table: &DEFAULT_WAVEFORM }
    }
}

impl Default for Waveform<'static> {
    fn default() -> Self {
        Self::default_curve()
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Ascending,
    Descending,
}

/// Position in a waveform table. Walks the table up and down, so consecutive
/// positions form a triangle: `0, 1, .., len-1, len-2, .., 0, 1, ..`
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    index: usize,
    direction: Direction,
}

impl Cursor {

    #[inline(always)]
    pub const fn new() -> Self {
        Self { index: 0, direction: Direction::Ascending }
    }

    #[inline(always)]
    pub fn index(&self) -> usize {
        self.index
    }

    #[inline(always)]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /**
    Moves one entry along a table of `len` entries, turning around at both ends.
    Tables of zero or one entry keep the cursor at 0.
     */
    pub fn advance(&mut self, len: usize) {
        let last = len.saturating_sub(1);
        if last == 0 {
            self.index = 0;
            return;
        }
        match self.direction {
            Direction::Ascending => {
                self.index = (self.index + 1).min(last);
                if self.index == last {
                    self.direction = Direction::Descending;
                }
            }
            Direction::Descending => {
                self.index = self.index.saturating_sub(1);
                if self.index == 0 {
                    self.direction = Direction::Ascending;
                }
            }
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}


#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;
    use super::*;

    #[test]
    fn test_default_waveform_is_monotonic_ramp() {
        assert_eq!(45, Waveform::default_curve().len());
        for pair in DEFAULT_WAVEFORM.windows(2) {
            assert!(pair[0] < pair[1], "{} >= {}", pair[0], pair[1]);
        }
        assert!(DEFAULT_WAVEFORM[0] < 10);
        assert!(DEFAULT_WAVEFORM[DEFAULT_WAVEFORM_LEN - 1] > 245);
    }

    #[test]
    fn test_default_waveform_is_shared() {
        let a = Waveform::default();
        let b = Waveform::default_curve();
        assert!(core::ptr::eq(a.as_slice(), b.as_slice()));
        assert!(core::ptr::eq(a.as_slice(), DEFAULT_WAVEFORM.as_slice()));
    }

    #[test]
    fn test_step_interval() {
        assert_eq!(100, Waveform::default_curve().step_interval(4_500));
        assert_eq!(3, Waveform::new(&[0, 1, 2]).step_interval(10));
        assert_eq!(0, Waveform::new(&[0, 1, 2]).step_interval(0));
        assert_eq!(0, Waveform::new(&[]).step_interval(1_000));
    }

    #[test]
    fn test_checked_rejects_short_tables() {
        assert_eq!(Err(Errors::WaveformTooShort(0)), Waveform::checked(&[]));
        assert_eq!(Err(Errors::WaveformTooShort(1)), Waveform::checked(&[7]));
        let table = [1_u8, 2];
        assert_eq!(Ok(Waveform::new(&table)), Waveform::checked(&table));
    }

    #[test]
    fn test_cursor_walks_triangle() {
        let mut cursor = Cursor::new();
        let mut visited = [0_usize; 9];
        for slot in visited.iter_mut() {
            *slot = cursor.index();
            cursor.advance(4);
        }
        assert_eq!([0, 1, 2, 3, 2, 1, 0, 1, 2], visited);
    }

    #[test]
    fn test_cursor_turns_exactly_at_bounds() {
        let mut cursor = Cursor::new();
        cursor.advance(3);
        assert_eq!((1, Direction::Ascending), (cursor.index(), cursor.direction()));
        cursor.advance(3);
        assert_eq!((2, Direction::Descending), (cursor.index(), cursor.direction()));
        cursor.advance(3);
        assert_eq!((1, Direction::Descending), (cursor.index(), cursor.direction()));
        cursor.advance(3);
        assert_eq!((0, Direction::Ascending), (cursor.index(), cursor.direction()));
    }

    #[test]
    fn test_cursor_on_degenerate_tables() {
        for len in [0_usize, 1] {
            let mut cursor = Cursor::new();
            for _ in 0..5 {
                cursor.advance(len);
                assert_eq!(0, cursor.index());
            }
        }
    }

    #[quickcheck]
    fn test_cursor_stays_in_bounds(len: u8, steps: u16) -> bool {
        let len = len as usize;
        let mut cursor = Cursor::new();
        (0..steps).all(|_| {
            cursor.advance(len);
            cursor.index() < len.max(1)
        })
    }

    #[quickcheck]
    fn test_cursor_moves_by_one_each_step(len: u8, steps: u16) -> bool {
        let len = len as usize + 2;
        let mut cursor = Cursor::new();
        (0..steps).all(|_| {
            let before = cursor.index();
            cursor.advance(len);
            before.abs_diff(cursor.index()) == 1
        })
    }
}
