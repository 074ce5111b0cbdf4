//! Copy-on-write rotation of chain contents.

use indexmap::IndexMap;
use log::trace;

use paragrid_core::{Cell, GridId, GridStore};

use crate::chain::PushChain;

/// Which way contents move along a chain.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Rotation {
    /// Push: `[c0, c1, ..., cn] -> [cn, c0, ..., c(n-1)]`.
    Forward,
    /// Pull: `[c0, c1, ..., cn] -> [c1, ..., cn, c0]`.
    Backward,
}

/// Rotate the chain's recorded contents and write them into a new store.
///
/// One new grid is built per affected grid id; every other grid is shared
/// with `store`. Chains shorter than two entries leave everything shared.
///
/// # Panics
///
/// Panics if a chain position is not in `store`.
pub fn rotate(store: &GridStore, chain: &PushChain, rotation: Rotation) -> GridStore {
    let n = chain.len();
    if n < 2 {
        return store.clone();
    }
    let mut updates: IndexMap<GridId, Vec<(usize, usize, Cell)>> = IndexMap::new();
    for (i, entry) in chain.iter().enumerate() {
        let source = match rotation {
            Rotation::Forward => (i + n - 1) % n,
            Rotation::Backward => (i + 1) % n,
        };
        updates
            .entry(entry.position.grid.clone())
            .or_default()
            .push((entry.position.row, entry.position.col, chain[source].cell.clone()));
    }
    trace!(
        "rotating {n} cells {rotation:?} across {} grid(s)",
        updates.len()
    );
    let grids: Vec<_> = updates
        .into_iter()
        .map(|(id, cells)| store.grid(id.as_str()).with_cells(cells))
        .collect();
    store.with_updates(grids)
}
