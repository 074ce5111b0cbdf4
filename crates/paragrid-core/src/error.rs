//! Error types for grid construction and lookup.

use std::error::Error;
use std::fmt;

use crate::id::GridId;
use crate::position::CellPosition;

/// Errors arising from grid construction, store assembly, or checked lookups.
///
/// These describe a malformed [`GridStore`](crate::GridStore). Traversal and
/// push code treats them as programmer errors and panics through the
/// unchecked accessors; the checked `try_*` accessors surface them instead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A grid was built with zero rows or zero columns.
    EmptyGrid {
        /// The grid being built.
        id: GridId,
    },
    /// A row's length differs from the first row's.
    RaggedRow {
        /// The grid being built.
        id: GridId,
        /// Index of the offending row.
        row: usize,
        /// Column count of the first row.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
    /// Two grids in one store share an id.
    DuplicateGrid {
        /// The repeated id.
        id: GridId,
    },
    /// A lookup named a grid the store does not hold.
    UnknownGrid {
        /// The missing id.
        id: GridId,
    },
    /// A `Ref` cell targets a grid the store does not hold.
    DanglingRef {
        /// Where the reference sits.
        at: CellPosition,
        /// The missing target.
        target: GridId,
    },
    /// A position lies outside its grid.
    OutOfBounds {
        /// The offending position.
        position: CellPosition,
        /// Row count of the grid.
        rows: usize,
        /// Column count of the grid.
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGrid { id } => {
                write!(f, "grid '{id}' must have at least one row and one column")
            }
            Self::RaggedRow {
                id,
                row,
                expected,
                found,
            } => write!(
                f,
                "grid '{id}' row {row} has {found} cells, expected {expected}"
            ),
            Self::DuplicateGrid { id } => write!(f, "grid '{id}' defined more than once"),
            Self::UnknownGrid { id } => write!(f, "grid '{id}' not in store"),
            Self::DanglingRef { at, target } => {
                write!(f, "reference at {at} targets missing grid '{target}'")
            }
            Self::OutOfBounds {
                position,
                rows,
                cols,
            } => write!(f, "position {position} outside {rows}x{cols} grid"),
        }
    }
}

impl Error for GridError {}
