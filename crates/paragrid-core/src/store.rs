//! The grid collection and primary-reference resolution.

use std::collections::HashMap;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::cell::Cell;
use crate::error::GridError;
use crate::grid::Grid;
use crate::id::GridId;
use crate::position::CellPosition;

/// An immutable, id-keyed collection of grids.
///
/// Grids are held behind [`Arc`], so cloning a store or deriving a new one
/// with [`with_updates`](GridStore::with_updates) never copies the contents
/// of grids that did not change. Callers may rely on pointer equality of
/// untouched grids (see [`shared`](GridStore::shared)).
///
/// Enumeration order is insertion order. It decides which reference wins
/// when resolving a grid's primary reference.
#[derive(Clone, Debug, Default)]
pub struct GridStore {
    grids: IndexMap<GridId, Arc<Grid>>,
    primaries: Arc<HashMap<GridId, CellPosition>>,
}

impl GridStore {
    /// Assemble a store from grids, keeping their order.
    ///
    /// Returns `Err(GridError::DuplicateGrid)` if two grids share an id.
    /// References to grids absent from the store are accepted here; see
    /// [`validate_refs`](GridStore::validate_refs).
    pub fn new(grids: impl IntoIterator<Item = Grid>) -> Result<Self, GridError> {
        let mut map = IndexMap::new();
        for grid in grids {
            let id = grid.id().clone();
            if map.insert(id.clone(), Arc::new(grid)).is_some() {
                return Err(GridError::DuplicateGrid { id });
            }
        }
        Ok(Self::from_map(map))
    }

    fn from_map(grids: IndexMap<GridId, Arc<Grid>>) -> Self {
        let primaries = Arc::new(resolve_primaries(&grids));
        Self { grids, primaries }
    }

    /// Number of grids.
    pub fn len(&self) -> usize {
        self.grids.len()
    }

    /// Whether the store holds no grids.
    pub fn is_empty(&self) -> bool {
        self.grids.is_empty()
    }

    /// Whether a grid with this id exists.
    pub fn contains(&self, id: &str) -> bool {
        self.grids.contains_key(id)
    }

    /// The grid with this id, if present.
    pub fn get(&self, id: &str) -> Option<&Grid> {
        self.grids.get(id).map(Arc::as_ref)
    }

    /// The shared handle to a grid, for pointer-equality checks.
    pub fn shared(&self, id: &str) -> Option<&Arc<Grid>> {
        self.grids.get(id)
    }

    /// The grid with this id.
    ///
    /// # Panics
    ///
    /// Panics if the store has no such grid.
    pub fn grid(&self, id: &str) -> &Grid {
        match self.get(id) {
            Some(grid) => grid,
            None => panic!("grid '{id}' not in store"),
        }
    }

    /// The cell at `pos`, or an error naming what is wrong with `pos`.
    pub fn try_cell(&self, pos: &CellPosition) -> Result<&Cell, GridError> {
        let grid = self.get(pos.grid.as_str()).ok_or_else(|| GridError::UnknownGrid {
            id: pos.grid.clone(),
        })?;
        grid.get(pos.row, pos.col).ok_or_else(|| GridError::OutOfBounds {
            position: pos.clone(),
            rows: grid.rows(),
            cols: grid.cols(),
        })
    }

    /// The cell at `pos`.
    ///
    /// # Panics
    ///
    /// Panics if the grid is missing or `pos` is outside it.
    pub fn cell(&self, pos: &CellPosition) -> &Cell {
        match self.try_cell(pos) {
            Ok(cell) => cell,
            Err(err) => panic!("{err}"),
        }
    }

    /// Grids in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = &Grid> {
        self.grids.values().map(Arc::as_ref)
    }

    /// Grid ids in enumeration order.
    pub fn ids(&self) -> impl Iterator<Item = &GridId> {
        self.grids.keys()
    }

    /// Position of the primary reference to `id`: its logical parent slot.
    ///
    /// `None` for a root grid that nothing refers to.
    pub fn primary_ref(&self, id: &str) -> Option<&CellPosition> {
        self.primaries.get(id)
    }

    /// Report the first `Ref` whose target is missing from the store.
    pub fn validate_refs(&self) -> Result<(), GridError> {
        for grid in self.iter() {
            for (row, col, cell) in grid.iter() {
                if let Some(target) = cell.ref_target() {
                    if !self.contains(target.as_str()) {
                        return Err(GridError::DanglingRef {
                            at: CellPosition::new(grid.id().clone(), row, col),
                            target: target.clone(),
                        });
                    }
                }
            }
        }
        Ok(())
    }

    /// A new store with the given grids replaced (or appended, for new ids).
    ///
    /// Every grid not named in `grids` keeps its existing [`Arc`], so it
    /// stays pointer-equal across the two stores. `self` is unchanged.
    pub fn with_updates(&self, grids: impl IntoIterator<Item = Grid>) -> Self {
        let mut map = self.grids.clone();
        for grid in grids {
            map.insert(grid.id().clone(), Arc::new(grid));
        }
        Self::from_map(map)
    }
}

impl PartialEq for GridStore {
    fn eq(&self, other: &Self) -> bool {
        self.grids == other.grids
    }
}

impl Eq for GridStore {}

/// Resolve each referenced grid's primary reference.
///
/// An explicit `primary: Some(true)` wins; otherwise the first reference in
/// store, row, column order. When several references claim primary status
/// for the same grid, the first one encountered in that order wins.
fn resolve_primaries(grids: &IndexMap<GridId, Arc<Grid>>) -> HashMap<GridId, CellPosition> {
    let mut explicit: HashMap<GridId, CellPosition> = HashMap::new();
    let mut first_seen: HashMap<GridId, CellPosition> = HashMap::new();
    for (id, grid) in grids {
        for (row, col, cell) in grid.iter() {
            if let Cell::Ref { grid: target, primary } = cell {
                let here = || CellPosition::new(id.clone(), row, col);
                if *primary == Some(true) {
                    explicit.entry(target.clone()).or_insert_with(here);
                }
                first_seen.entry(target.clone()).or_insert_with(here);
            }
        }
    }
    for (target, pos) in explicit {
        first_seen.insert(target, pos);
    }
    first_seen
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(cells: Vec<Cell>) -> Vec<Vec<Cell>> {
        vec![cells]
    }

    fn store(grids: Vec<(&str, Vec<Vec<Cell>>)>) -> GridStore {
        GridStore::new(grids.into_iter().map(|(id, rows)| Grid::new(id, rows).unwrap())).unwrap()
    }

    #[test]
    fn duplicate_ids_rejected() {
        let a = Grid::empty("a", 1, 1).unwrap();
        let err = GridStore::new([a.clone(), a]).unwrap_err();
        assert_eq!(err, GridError::DuplicateGrid { id: GridId::from("a") });
    }

    #[test]
    fn root_has_no_primary() {
        let s = store(vec![
            ("main", row(vec![Cell::concrete("1"), Cell::auto_ref("inner")])),
            ("inner", row(vec![Cell::Empty])),
        ]);
        assert_eq!(s.primary_ref("main"), None);
        assert_eq!(s.primary_ref("inner"), Some(&CellPosition::new("main", 0, 1)));
    }

    #[test]
    fn explicit_primary_beats_enumeration_order() {
        let s = store(vec![
            ("main", row(vec![Cell::auto_ref("a"), Cell::primary_ref("a")])),
            ("a", row(vec![Cell::Empty])),
        ]);
        assert_eq!(s.primary_ref("a"), Some(&CellPosition::new("main", 0, 1)));
    }

    #[test]
    fn first_explicit_primary_wins() {
        let s = store(vec![
            ("x", row(vec![Cell::primary_ref("a")])),
            ("y", row(vec![Cell::primary_ref("a")])),
            ("a", row(vec![Cell::Empty])),
        ]);
        assert_eq!(s.primary_ref("a"), Some(&CellPosition::new("x", 0, 0)));
    }

    #[test]
    fn secondary_refs_fall_back_when_no_other() {
        let s = store(vec![
            ("main", row(vec![Cell::secondary_ref("a")])),
            ("a", row(vec![Cell::Empty])),
        ]);
        assert_eq!(s.primary_ref("a"), Some(&CellPosition::new("main", 0, 0)));
    }

    #[test]
    fn self_reference_is_its_own_parent() {
        let s = store(vec![(
            "main",
            row(vec![Cell::primary_ref("main"), Cell::concrete("1")]),
        )]);
        assert_eq!(s.primary_ref("main"), Some(&CellPosition::new("main", 0, 0)));
    }

    #[test]
    fn try_cell_reports_problems() {
        let s = store(vec![("main", row(vec![Cell::Empty]))]);
        assert!(matches!(
            s.try_cell(&CellPosition::new("nope", 0, 0)),
            Err(GridError::UnknownGrid { .. })
        ));
        assert!(matches!(
            s.try_cell(&CellPosition::new("main", 0, 1)),
            Err(GridError::OutOfBounds { rows: 1, cols: 1, .. })
        ));
        assert_eq!(s.cell(&CellPosition::new("main", 0, 0)), &Cell::Empty);
    }

    #[test]
    #[should_panic(expected = "grid 'nope' not in store")]
    fn grid_panics_on_unknown() {
        let s = GridStore::default();
        let _ = s.grid("nope");
    }

    #[test]
    fn validate_refs_finds_dangling() {
        let s = store(vec![("main", row(vec![Cell::Empty, Cell::auto_ref("ghost")]))]);
        assert_eq!(
            s.validate_refs(),
            Err(GridError::DanglingRef {
                at: CellPosition::new("main", 0, 1),
                target: GridId::from("ghost"),
            })
        );
    }

    #[test]
    fn with_updates_shares_untouched_grids() {
        let s = store(vec![
            ("main", row(vec![Cell::auto_ref("a"), Cell::Empty])),
            ("a", row(vec![Cell::Empty])),
            ("b", row(vec![Cell::Empty])),
        ]);
        let new_a = s.grid("a").with_cells([(0, 0, Cell::concrete("1"))]);
        let t = s.with_updates([new_a]);

        assert!(Arc::ptr_eq(s.shared("main").unwrap(), t.shared("main").unwrap()));
        assert!(Arc::ptr_eq(s.shared("b").unwrap(), t.shared("b").unwrap()));
        assert!(!Arc::ptr_eq(s.shared("a").unwrap(), t.shared("a").unwrap()));
        assert!(s.grid("a").cell(0, 0).is_empty());
        assert_eq!(t.grid("a").cell(0, 0), &Cell::concrete("1"));
        let order: Vec<_> = t.ids().map(GridId::as_str).collect();
        assert_eq!(order, vec!["main", "a", "b"]);
    }

    #[test]
    fn primaries_follow_moved_refs() {
        let s = store(vec![
            ("main", row(vec![Cell::auto_ref("a"), Cell::Empty])),
            ("a", row(vec![Cell::Empty])),
        ]);
        let moved = s
            .grid("main")
            .with_cells([(0, 0, Cell::Empty), (0, 1, Cell::auto_ref("a"))]);
        let t = s.with_updates([moved]);
        assert_eq!(t.primary_ref("a"), Some(&CellPosition::new("main", 0, 1)));
        assert_eq!(s.primary_ref("a"), Some(&CellPosition::new("main", 0, 0)));
    }
}
