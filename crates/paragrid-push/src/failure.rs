//! Why a push or pull did not happen.

use std::error::Error;
use std::fmt;

use paragrid_core::CellPosition;
use paragrid_nav::NavFailure;

/// The closed set of push failure reasons.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PushFailureReason {
    /// Consecutive entries revisited a grid without moving.
    EnterCycle,
    /// An exit chain revisited a grid boundary.
    ExitCycle,
    /// The line of cells runs into the edge of a root grid, either straight
    /// from the initiating cell or after moving some cells as solid objects.
    Blocked,
    /// A stop-tagged cell would have to move, or initiated the push.
    StopTag,
    /// The chain came back to a cell it already holds, other than the start.
    PathCycle,
    /// Every strategy at every decision point was inapplicable.
    NoStrategy,
    /// A chain-length or backtracking limit was exceeded.
    MaxDepth,
}

impl fmt::Display for PushFailureReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::EnterCycle => "enter cycle",
            Self::ExitCycle => "exit cycle",
            Self::Blocked => "blocked",
            Self::StopTag => "stop tag",
            Self::PathCycle => "path cycle",
            Self::NoStrategy => "no strategy",
            Self::MaxDepth => "max depth",
        };
        f.write_str(s)
    }
}

/// A failed push or pull: what went wrong and where it was determined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PushFailure {
    /// Why the operation failed.
    pub reason: PushFailureReason,
    /// Where the failure was determined.
    pub position: CellPosition,
    /// Optional human-readable context.
    pub details: Option<String>,
}

impl PushFailure {
    /// A failure with no details.
    pub fn new(reason: PushFailureReason, position: CellPosition) -> Self {
        Self {
            reason,
            position,
            details: None,
        }
    }

    /// Attach details, builder style.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Translate a navigator failure into a push failure at `position`.
    ///
    /// Returns `None` for an unenterable cell, which the engine treats as an
    /// inapplicable strategy rather than a failure.
    pub(crate) fn from_nav(failure: &NavFailure, position: &CellPosition) -> Option<Self> {
        let reason = match failure {
            NavFailure::EdgeReached { .. } => PushFailureReason::Blocked,
            NavFailure::ExitCycle { .. } => PushFailureReason::ExitCycle,
            NavFailure::EntryCycle { .. } => PushFailureReason::EnterCycle,
            NavFailure::NotEnterable { .. } => return None,
        };
        Some(Self::new(reason, position.clone()).with_details(failure.to_string()))
    }
}

impl fmt::Display for PushFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "push failed ({}) at {}", self.reason, self.position)?;
        if let Some(details) = &self.details {
            write!(f, ": {details}")?;
        }
        Ok(())
    }
}

impl Error for PushFailure {}

#[cfg(test)]
mod tests {
    use super::*;
    use paragrid_core::{Direction, GridId};

    #[test]
    fn display_includes_details() {
        let f = PushFailure::new(PushFailureReason::StopTag, CellPosition::new("inner", 0, 0));
        assert_eq!(f.to_string(), "push failed (stop tag) at inner[0,0]");
        let f = f.with_details("cell '9'");
        assert_eq!(f.to_string(), "push failed (stop tag) at inner[0,0]: cell '9'");
    }

    #[test]
    fn only_unenterable_cells_are_not_failures() {
        let at = CellPosition::new("main", 0, 0);
        let closed = NavFailure::NotEnterable { at: at.clone() };
        assert_eq!(PushFailure::from_nav(&closed, &at), None);

        let target = CellPosition::new("main", 0, 1);
        let edge = NavFailure::EdgeReached { at: at.clone() };
        let f = PushFailure::from_nav(&edge, &target).unwrap();
        assert_eq!(f.reason, PushFailureReason::Blocked);
        assert_eq!(f.position, target);

        let cycle = NavFailure::ExitCycle {
            grid: GridId::from("a"),
            direction: Direction::E,
        };
        let f = PushFailure::from_nav(&cycle, &at).unwrap();
        assert_eq!(f.reason, PushFailureReason::ExitCycle);
        assert_eq!(f.position, at);
    }
}
