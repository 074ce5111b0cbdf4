//! Why a navigation step did not complete.

use std::error::Error;
use std::fmt;

use paragrid_core::{CellPosition, Direction, GridId};

/// Reasons a [`Navigator`](crate::Navigator) step or entry fails.
///
/// On failure the navigator stays where it was before the attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum NavFailure {
    /// Left a grid that has no primary reference: the edge of a root grid.
    EdgeReached {
        /// The last in-bounds position.
        at: CellPosition,
    },
    /// An exit chain crossed the same `(grid, direction)` boundary twice.
    ExitCycle {
        /// The grid whose boundary repeated.
        grid: GridId,
        /// Direction of travel.
        direction: Direction,
    },
    /// Consecutive enters reached a grid already entered in this step.
    EntryCycle {
        /// The grid entered twice.
        grid: GridId,
    },
    /// The current cell cannot be entered: it is not a reference, or its
    /// target grid is missing from the store.
    NotEnterable {
        /// The cell that was to be entered.
        at: CellPosition,
    },
}

impl NavFailure {
    /// Whether this failure is one of the cycle classes rather than a
    /// plain dead end.
    pub fn is_cycle(&self) -> bool {
        matches!(self, Self::ExitCycle { .. } | Self::EntryCycle { .. })
    }
}

impl fmt::Display for NavFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EdgeReached { at } => write!(f, "edge reached at {at} with no exit"),
            Self::ExitCycle { grid, direction } => {
                write!(f, "exit cycle through grid '{grid}' heading {direction}")
            }
            Self::EntryCycle { grid } => write!(f, "entry cycle re-entering grid '{grid}'"),
            Self::NotEnterable { at } => write!(f, "cell at {at} cannot be entered"),
        }
    }
}

impl Error for NavFailure {}
