//! Compact grid fixtures.
//!
//! Test stores are written one string per grid: rows separated by `|`,
//! cells by whitespace.
//!
//! - `_` is empty
//! - a leading digit is a concrete cell (`7x` stays `7x`)
//! - `*name` is a primary reference, `~name` a secondary one
//! - any other name is a reference with auto-determined primary status
//!
//! Malformed fixtures panic: they are bugs in the test, not inputs.

use paragrid_core::{Cell, CellPosition, Grid, GridStore};

/// Decode one fixture cell.
pub fn cell(token: &str) -> Cell {
    let Some(first) = token.chars().next() else {
        panic!("empty fixture cell");
    };
    match first {
        '_' if token == "_" => Cell::Empty,
        '0'..='9' => Cell::concrete(token),
        '*' => Cell::primary_ref(&token[1..]),
        '~' => Cell::secondary_ref(&token[1..]),
        c if c.is_alphabetic() => Cell::auto_ref(token),
        _ => panic!("bad fixture cell {token:?}"),
    }
}

/// Decode one grid.
pub fn grid(id: &str, text: &str) -> Grid {
    let rows = text
        .split('|')
        .map(|row| row.split_whitespace().map(cell).collect::<Vec<_>>())
        .collect();
    match Grid::new(id, rows) {
        Ok(grid) => grid,
        Err(err) => panic!("bad fixture grid: {err}"),
    }
}

/// Build a store from `(id, text)` pairs, keeping their order.
///
/// References to grids not listed are allowed.
pub fn grid_store(defs: &[(&str, &str)]) -> GridStore {
    match GridStore::new(defs.iter().map(|(id, text)| grid(id, text))) {
        Ok(store) => store,
        Err(err) => panic!("bad fixture store: {err}"),
    }
}

/// Shorthand for [`CellPosition::new`].
pub fn pos(grid: &str, row: usize, col: usize) -> CellPosition {
    CellPosition::new(grid, row, col)
}

/// Render a grid back into fixture notation, for assertions.
pub fn render(store: &GridStore, id: &str) -> String {
    store
        .grid(id)
        .row_slices()
        .map(|row| {
            row.iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("|")
}
