//! Cell contents.

use std::fmt;

use crate::id::GridId;

/// The content of a single grid cell.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    /// Nothing here; absorbs a push.
    Empty,
    /// An opaque placeable object.
    Concrete(String),
    /// A reference to another grid (possibly the containing one).
    Ref {
        /// The referenced grid.
        grid: GridId,
        /// Explicit primary designation. `None` means auto-determine.
        primary: Option<bool>,
    },
}

impl Cell {
    /// A concrete object with the given id.
    pub fn concrete(id: impl Into<String>) -> Self {
        Self::Concrete(id.into())
    }

    /// A reference whose primary status is auto-determined.
    pub fn auto_ref(grid: impl Into<GridId>) -> Self {
        Self::Ref {
            grid: grid.into(),
            primary: None,
        }
    }

    /// A reference explicitly marked primary.
    pub fn primary_ref(grid: impl Into<GridId>) -> Self {
        Self::Ref {
            grid: grid.into(),
            primary: Some(true),
        }
    }

    /// A reference explicitly marked secondary.
    pub fn secondary_ref(grid: impl Into<GridId>) -> Self {
        Self::Ref {
            grid: grid.into(),
            primary: Some(false),
        }
    }

    /// Whether this cell is [`Cell::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    /// Whether this cell is a reference.
    pub fn is_ref(&self) -> bool {
        matches!(self, Self::Ref { .. })
    }

    /// The referenced grid, if this cell is a reference.
    pub fn ref_target(&self) -> Option<&GridId> {
        match self {
            Self::Ref { grid, .. } => Some(grid),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("_"),
            Self::Concrete(id) => f.write_str(id),
            Self::Ref { grid, primary } => match primary {
                Some(true) => write!(f, "*{grid}"),
                Some(false) => write!(f, "~{grid}"),
                None => write!(f, "{grid}"),
            },
        }
    }
}
