//! Compass directions and the axis of travel.

use std::fmt;

/// One of the four cardinal directions of travel.
///
/// Rows grow southward and columns grow eastward, so `N` decreases the
/// row index and `E` increases the column index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Up, decreasing row.
    N,
    /// Down, increasing row.
    S,
    /// Right, increasing column.
    E,
    /// Left, decreasing column.
    W,
}

/// Axis along which a [`Direction`] moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    /// East/west travel: the column varies, the row is fixed.
    Horizontal,
    /// North/south travel: the row varies, the column is fixed.
    Vertical,
}

impl Direction {
    /// All four directions in `N, S, E, W` order.
    pub const ALL: [Direction; 4] = [Direction::N, Direction::S, Direction::E, Direction::W];

    /// The reverse direction.
    pub fn flip(self) -> Self {
        match self {
            Self::N => Self::S,
            Self::S => Self::N,
            Self::E => Self::W,
            Self::W => Self::E,
        }
    }

    /// The axis this direction travels along.
    pub fn axis(self) -> Axis {
        match self {
            Self::N | Self::S => Axis::Vertical,
            Self::E | Self::W => Axis::Horizontal,
        }
    }

    /// `(row_delta, col_delta)` for one step.
    pub fn delta(self) -> (isize, isize) {
        match self {
            Self::N => (-1, 0),
            Self::S => (1, 0),
            Self::E => (0, 1),
            Self::W => (0, -1),
        }
    }

    /// Step from `(row, col)` inside a `rows x cols` grid.
    ///
    /// Returns `None` when the step leaves the grid.
    pub fn step(self, row: usize, col: usize, rows: usize, cols: usize) -> Option<(usize, usize)> {
        let (dr, dc) = self.delta();
        let r = row.checked_add_signed(dr)?;
        let c = col.checked_add_signed(dc)?;
        (r < rows && c < cols).then_some((r, c))
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::N => "N",
            Self::S => "S",
            Self::E => "E",
            Self::W => "W",
        };
        f.write_str(s)
    }
}

impl Axis {
    /// The coordinate that stays fixed while travelling along this axis.
    ///
    /// This is the offset along the edge a traveller crosses when leaving
    /// or entering a grid.
    pub fn cross(self, row: usize, col: usize) -> usize {
        match self {
            Self::Horizontal => row,
            Self::Vertical => col,
        }
    }

    /// Length of a `rows x cols` grid's edge perpendicular to this axis.
    pub fn cross_len(self, rows: usize, cols: usize) -> usize {
        match self {
            Self::Horizontal => rows,
            Self::Vertical => cols,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_direction() -> impl Strategy<Value = Direction> {
        prop_oneof![
            Just(Direction::N),
            Just(Direction::S),
            Just(Direction::E),
            Just(Direction::W),
        ]
    }

    #[test]
    fn deltas_follow_row_major_layout() {
        assert_eq!(Direction::N.delta(), (-1, 0));
        assert_eq!(Direction::S.delta(), (1, 0));
        assert_eq!(Direction::E.delta(), (0, 1));
        assert_eq!(Direction::W.delta(), (0, -1));
    }

    #[test]
    fn step_stops_at_edges() {
        assert_eq!(Direction::N.step(0, 1, 3, 3), None);
        assert_eq!(Direction::W.step(1, 0, 3, 3), None);
        assert_eq!(Direction::S.step(2, 1, 3, 3), None);
        assert_eq!(Direction::E.step(1, 2, 3, 3), None);
        assert_eq!(Direction::E.step(1, 1, 3, 3), Some((1, 2)));
    }

    #[test]
    fn axes() {
        assert_eq!(Direction::E.axis(), Axis::Horizontal);
        assert_eq!(Direction::N.axis(), Axis::Vertical);
        assert_eq!(Axis::Horizontal.cross(3, 5), 3);
        assert_eq!(Axis::Vertical.cross_len(2, 7), 7);
    }

    proptest! {
        #[test]
        fn flip_is_involution(d in arb_direction()) {
            prop_assert_eq!(d.flip().flip(), d);
            prop_assert_ne!(d.flip(), d);
            prop_assert_eq!(d.flip().axis(), d.axis());
        }

        #[test]
        fn step_then_flip_returns(
            d in arb_direction(),
            rows in 1usize..8,
            cols in 1usize..8,
            r in 0usize..8,
            c in 0usize..8,
        ) {
            prop_assume!(r < rows && c < cols);
            if let Some((nr, nc)) = d.step(r, c, rows, cols) {
                prop_assert_eq!(d.flip().step(nr, nc, rows, cols), Some((r, c)));
            }
        }
    }
}
