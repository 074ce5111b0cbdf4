//! Rectangular grid of cells.

use crate::cell::Cell;
use crate::direction::Axis;
use crate::error::GridError;
use crate::id::GridId;

/// An immutable rectangular grid.
///
/// Cells are stored row-major in a single buffer. Construction rejects
/// empty and ragged input, so every grid has `rows >= 1` and `cols >= 1`
/// and every row has exactly `cols` cells.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    id: GridId,
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Build a grid from its rows.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if there are no rows or the
    /// first row is empty, and `Err(GridError::RaggedRow)` if any row's
    /// length differs from the first.
    ///
    /// # Examples
    ///
    /// ```
    /// use paragrid_core::{Cell, Grid};
    ///
    /// let grid = Grid::new("main", vec![
    ///     vec![Cell::concrete("1"), Cell::auto_ref("inner")],
    /// ]).unwrap();
    /// assert_eq!((grid.rows(), grid.cols()), (1, 2));
    /// assert!(grid.cell(0, 1).is_ref());
    /// ```
    pub fn new(id: impl Into<GridId>, rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let id = id.into();
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::EmptyGrid { id });
        }
        let row_count = rows.len();
        let mut cells = Vec::with_capacity(row_count * cols);
        for (r, row) in rows.into_iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    id,
                    row: r,
                    expected: cols,
                    found: row.len(),
                });
            }
            cells.extend(row);
        }
        Ok(Self {
            id,
            rows: row_count,
            cols,
            cells,
        })
    }

    /// A `rows x cols` grid of [`Cell::Empty`].
    pub fn empty(id: impl Into<GridId>, rows: usize, cols: usize) -> Result<Self, GridError> {
        let id = id.into();
        if rows == 0 || cols == 0 {
            return Err(GridError::EmptyGrid { id });
        }
        Ok(Self {
            id,
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        })
    }

    /// This grid's id.
    pub fn id(&self) -> &GridId {
        &self.id
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Length of the edge crossed when travelling along `axis`.
    pub fn cross_len(&self, axis: Axis) -> usize {
        axis.cross_len(self.rows, self.cols)
    }

    /// Whether `(row, col)` lies inside this grid.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        if self.contains(row, col) {
            self.cells.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// The cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` is outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        match self.get(row, col) {
            Some(cell) => cell,
            None => panic!(
                "({row}, {col}) outside {}x{} grid '{}'",
                self.rows, self.cols, self.id
            ),
        }
    }

    /// Iterate rows as slices.
    pub fn row_slices(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// Iterate `(row, col, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &Cell)> {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, cell)| (i / cols, i % cols, cell))
    }

    /// A copy of this grid with some cells replaced.
    ///
    /// # Panics
    ///
    /// Panics if any `(row, col)` is outside the grid.
    pub fn with_cells(&self, updates: impl IntoIterator<Item = (usize, usize, Cell)>) -> Self {
        let mut cells = self.cells.clone();
        for (row, col, cell) in updates {
            assert!(
                self.contains(row, col),
                "({row}, {col}) outside {}x{} grid '{}'",
                self.rows,
                self.cols,
                self.id
            );
            cells[row * self.cols + col] = cell;
        }
        Self {
            id: self.id.clone(),
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn c(id: &str) -> Cell {
        Cell::concrete(id)
    }

    #[test]
    fn new_rejects_empty() {
        assert!(matches!(
            Grid::new("g", vec![]),
            Err(GridError::EmptyGrid { .. })
        ));
        assert!(matches!(
            Grid::new("g", vec![vec![]]),
            Err(GridError::EmptyGrid { .. })
        ));
        assert!(matches!(
            Grid::empty("g", 0, 3),
            Err(GridError::EmptyGrid { .. })
        ));
    }

    #[test]
    fn new_rejects_ragged_rows() {
        let err = Grid::new("g", vec![vec![c("1"), c("2")], vec![c("3")]]).unwrap_err();
        assert_eq!(
            err,
            GridError::RaggedRow {
                id: GridId::from("g"),
                row: 1,
                expected: 2,
                found: 1,
            }
        );
    }

    #[test]
    fn lookup_is_row_major() {
        let g = Grid::new("g", vec![vec![c("1"), c("2")], vec![c("3"), c("4")]]).unwrap();
        assert_eq!(g.cell(1, 0), &c("3"));
        assert_eq!(g.get(2, 0), None);
        assert_eq!(g.get(0, 2), None);
        let flat: Vec<_> = g.iter().map(|(r, col, _)| (r, col)).collect();
        assert_eq!(flat, vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
        assert_eq!(g.row_slices().count(), 2);
    }

    #[test]
    #[should_panic(expected = "outside 1x1 grid 'g'")]
    fn cell_panics_outside() {
        let g = Grid::empty("g", 1, 1).unwrap();
        let _ = g.cell(0, 1);
    }

    #[test]
    fn with_cells_leaves_original() {
        let g = Grid::empty("g", 1, 2).unwrap();
        let h = g.with_cells([(0, 1, c("5"))]);
        assert!(g.cell(0, 1).is_empty());
        assert_eq!(h.cell(0, 1), &c("5"));
        assert_eq!(h.id(), g.id());
    }

    #[test]
    fn cross_len_follows_axis() {
        let g = Grid::empty("g", 2, 5).unwrap();
        assert_eq!(g.cross_len(Axis::Horizontal), 2);
        assert_eq!(g.cross_len(Axis::Vertical), 5);
    }

    proptest! {
        #[test]
        fn empty_grid_has_rows_times_cols_cells(rows in 1usize..12, cols in 1usize..12) {
            let g = Grid::empty("g", rows, cols).unwrap();
            prop_assert_eq!(g.iter().count(), rows * cols);
            prop_assert!(g.iter().all(|(_, _, cell)| cell.is_empty()));
            prop_assert!(g.contains(rows - 1, cols - 1));
            prop_assert!(!g.contains(rows, 0));
        }
    }
}
