//! Cell locator across the grid collection.

use std::fmt;

use crate::id::GridId;

/// A cell address: grid id plus row and column.
///
/// Compared by value, so two positions naming the same cell are equal
/// regardless of how they were reached.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellPosition {
    /// Grid holding the cell.
    pub grid: GridId,
    /// Zero-based row.
    pub row: usize,
    /// Zero-based column.
    pub col: usize,
}

impl CellPosition {
    /// Build a position from a grid id and coordinates.
    pub fn new(grid: impl Into<GridId>, row: usize, col: usize) -> Self {
        Self {
            grid: grid.into(),
            row,
            col,
        }
    }

    /// Same grid, different coordinates.
    pub fn moved_to(&self, row: usize, col: usize) -> Self {
        Self {
            grid: self.grid.clone(),
            row,
            col,
        }
    }
}

impl fmt::Display for CellPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}[{},{}]", self.grid, self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_equality() {
        let a = CellPosition::new("main", 0, 1);
        let b = CellPosition::new(GridId::from("main"), 0, 1);
        assert_eq!(a, b);
        assert_ne!(a, a.moved_to(1, 0));
        assert_eq!(a.to_string(), "main[0,1]");
    }
}
