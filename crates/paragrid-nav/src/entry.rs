//! Where a traveller lands when entering a referenced grid.
//!
//! Entry always happens on the edge facing the direction of travel:
//! heading east lands in column 0, heading north lands in the last row,
//! and so on. What varies is the offset along that edge:
//!
//! - [`EntryMode::Midpoint`] always uses the middle (`len / 2`).
//! - [`EntryMode::PreserveFraction`] carries the fractional offset at which
//!   the traveller last left a grid, lifted into each ancestor on the way
//!   out and lowered into each child on the way in. Leaving row 4 of a
//!   5-row grid and entering a 3-row neighbour lands in row 2, not row 1.
//!
//! Fractions are exact rationals so that repeated lifting and lowering
//! never drifts.

use paragrid_core::{Direction, Grid};

/// How the offset along the entry edge is chosen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum EntryMode {
    /// Middle of the entry edge.
    #[default]
    Midpoint,
    /// Continue the offset at which the traveller last left a grid, when
    /// the entered grid shares that edge; otherwise the middle.
    PreserveFraction,
}

/// `(row, col)` in `grid` on the edge faced when travelling `direction`,
/// at `offset` along that edge.
pub fn entry_cell(grid: &Grid, direction: Direction, offset: usize) -> (usize, usize) {
    match direction {
        Direction::E => (offset, 0),
        Direction::W => (offset, grid.cols() - 1),
        Direction::S => (0, offset),
        Direction::N => (grid.rows() - 1, offset),
    }
}

/// Midpoint entry: the default convention.
pub fn midpoint_entry(grid: &Grid, direction: Direction) -> (usize, usize) {
    let len = grid.cross_len(direction.axis());
    entry_cell(grid, direction, len / 2)
}

/// An exact fraction in `[0, 1]` locating a point along a grid edge.
///
/// `0` is the first cell's centre (row 0 or column 0), `1` the last
/// cell's centre. Arithmetic is checked; operations that would overflow
/// return `None` and callers fall back to the midpoint.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EdgeFraction {
    num: u64,
    den: u64,
}

impl EdgeFraction {
    /// One half: the fraction of the sole cell on a length-1 edge.
    pub const HALF: Self = Self { num: 1, den: 2 };

    fn reduced(num: u64, den: u64) -> Self {
        let g = gcd(num, den).max(1);
        Self {
            num: num / g,
            den: den / g,
        }
    }

    /// Fraction of cell `offset` on an edge of `len` cells.
    ///
    /// `offset / (len - 1)`, or one half when `len == 1`.
    pub fn at_offset(offset: usize, len: usize) -> Self {
        if len <= 1 {
            return Self::HALF;
        }
        let last = (len - 1) as u64;
        Self::reduced((offset as u64).min(last), last)
    }

    /// Numerator in lowest terms.
    pub fn numer(self) -> u64 {
        self.num
    }

    /// Denominator in lowest terms.
    pub fn denom(self) -> u64 {
        self.den
    }

    /// Re-express in the coordinates of the parent grid, where the child
    /// occupies cell `index` of an edge `len` cells long.
    ///
    /// `(f + index) / len`.
    pub fn lift(self, index: usize, len: usize) -> Option<Self> {
        let num = (index as u64).checked_mul(self.den)?.checked_add(self.num)?;
        let den = self.den.checked_mul(len as u64)?;
        Some(Self::reduced(num, den))
    }

    /// Re-express in the coordinates of the child grid occupying cell
    /// `index` of a `len`-cell edge. Inverse of [`lift`](Self::lift).
    ///
    /// `f * len - index`, or `None` if that falls outside `[0, 1]`.
    pub fn lower(self, index: usize, len: usize) -> Option<Self> {
        let scaled = self.num.checked_mul(len as u64)?;
        let base = (index as u64).checked_mul(self.den)?;
        let num = scaled.checked_sub(base)?;
        (num <= self.den).then(|| Self::reduced(num, self.den))
    }

    /// Nearest cell on an edge of `len` cells, rounding halves up.
    pub fn to_index(self, len: usize) -> Option<usize> {
        let last = (len.max(1) - 1) as u64;
        let twice = self.num.checked_mul(last)?.checked_mul(2)?;
        let index = twice.checked_add(self.den)? / self.den.checked_mul(2)?;
        usize::try_from(index).ok()
    }
}

fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}
