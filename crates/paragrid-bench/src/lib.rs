//! Benchmark stores for the Paragrid push engine.
//!
//! - [`corridor`]: one long row, full except for its last cell
//! - [`nested_chain`]: a tower of grids each referencing the next
//! - [`random_store`]: seeded random cells and references

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use paragrid_core::{Cell, Grid, GridError, GridStore};
use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// A single `1 x len` grid `main` of concrete cells with an empty last cell.
pub fn corridor(len: usize) -> Result<GridStore, GridError> {
    let row = (0..len)
        .map(|i| {
            if i + 1 == len {
                Cell::Empty
            } else {
                Cell::concrete(i.to_string())
            }
        })
        .collect();
    GridStore::new([Grid::new("main", vec![row])?])
}

/// `depth + 1` grids `g0..=g{depth}`, each `1 x width`, where `g{i}` holds
/// a reference to `g{i+1}` in its middle column.
///
/// The remaining cells are concrete or empty, drawn from `seed`.
pub fn nested_chain(depth: usize, width: usize, seed: u64) -> Result<GridStore, GridError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let grids = (0..=depth)
        .map(|level| {
            let row = (0..width)
                .map(|col| {
                    if level < depth && col == width / 2 {
                        Cell::auto_ref(format!("g{}", level + 1))
                    } else if rng.next_u32() % 3 == 0 {
                        Cell::Empty
                    } else {
                        Cell::concrete(format!("{level}.{col}"))
                    }
                })
                .collect();
            Grid::new(format!("g{level}"), vec![row])
        })
        .collect::<Result<Vec<_>, _>>()?;
    GridStore::new(grids)
}

/// `count` square grids `g0..g{count-1}` of side `size` with seeded cells:
/// roughly 40% empty, 45% concrete, 15% references to a random grid.
pub fn random_store(count: usize, size: usize, seed: u64) -> Result<GridStore, GridError> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let grids = (0..count)
        .map(|g| {
            let rows = (0..size)
                .map(|r| {
                    (0..size)
                        .map(|c| match rng.next_u32() % 100 {
                            0..=39 => Cell::Empty,
                            40..=84 => Cell::concrete(format!("{g}.{r}.{c}")),
                            _ => Cell::auto_ref(format!("g{}", rng.next_u32() as usize % count)),
                        })
                        .collect()
                })
                .collect();
            Grid::new(format!("g{g}"), rows)
        })
        .collect::<Result<Vec<_>, _>>()?;
    GridStore::new(grids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use paragrid_core::CellPosition;

    #[test]
    fn corridor_shape() {
        let store = corridor(5).unwrap();
        let main = store.grid("main");
        assert_eq!((main.rows(), main.cols()), (1, 5));
        assert!(main.cell(0, 4).is_empty());
        assert!(!main.cell(0, 3).is_empty());
    }

    #[test]
    fn nested_chain_links_levels() {
        let store = nested_chain(3, 5, 7).unwrap();
        assert_eq!(store.len(), 4);
        assert_eq!(
            store.cell(&CellPosition::new("g0", 0, 2)),
            &Cell::auto_ref("g1")
        );
        assert_eq!(
            store.primary_ref("g3"),
            Some(&CellPosition::new("g2", 0, 2))
        );
        store.validate_refs().unwrap();
    }

    #[test]
    fn random_store_is_deterministic() {
        let a = random_store(4, 6, 42).unwrap();
        let b = random_store(4, 6, 42).unwrap();
        assert_eq!(a, b);
        a.validate_refs().unwrap();
    }
}
