//! The record of cells touched by one push or pull.

use std::ops::Index;

use paragrid_core::{Cell, CellPosition, GridStore};
use paragrid_nav::Transition;

/// One cell in a [`PushChain`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChainEntry {
    /// Where the cell is.
    pub position: CellPosition,
    /// Its content before the operation.
    pub cell: Cell,
    /// How the chain reached it; `None` for the initiating cell.
    pub transition: Option<Transition>,
}

/// Ordered cells affected by one operation, with their original contents.
///
/// Rotation reads contents from here rather than from the live store, and
/// animation collaborators read the transitions to tell slides from
/// boundary crossings.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PushChain {
    entries: Vec<ChainEntry>,
}

impl PushChain {
    /// A chain holding just the initiating cell.
    pub fn start(position: CellPosition, cell: Cell) -> Self {
        Self {
            entries: vec![ChainEntry {
                position,
                cell,
                transition: None,
            }],
        }
    }

    pub(crate) fn push(&mut self, position: CellPosition, cell: Cell, transition: Option<Transition>) {
        self.entries.push(ChainEntry {
            position,
            cell,
            transition,
        });
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether there are no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The initiating entry.
    pub fn first(&self) -> Option<&ChainEntry> {
        self.entries.first()
    }

    /// The most recent entry.
    pub fn last(&self) -> Option<&ChainEntry> {
        self.entries.last()
    }

    /// Entries in chain order.
    pub fn iter(&self) -> std::slice::Iter<'_, ChainEntry> {
        self.entries.iter()
    }

    /// Positions in chain order.
    pub fn positions(&self) -> impl Iterator<Item = &CellPosition> {
        self.entries.iter().map(|e| &e.position)
    }

    /// The same positions and transitions with contents re-read from
    /// `store`, e.g. to rotate a result back.
    ///
    /// # Panics
    ///
    /// Panics if a position is not in `store`.
    pub fn reread(&self, store: &GridStore) -> Self {
        let entries = self
            .entries
            .iter()
            .map(|e| ChainEntry {
                position: e.position.clone(),
                cell: store.cell(&e.position).clone(),
                transition: e.transition,
            })
            .collect();
        Self { entries }
    }
}

impl Index<usize> for PushChain {
    type Output = ChainEntry;

    fn index(&self, index: usize) -> &ChainEntry {
        &self.entries[index]
    }
}

impl<'a> IntoIterator for &'a PushChain {
    type Item = &'a ChainEntry;
    type IntoIter = std::slice::Iter<'a, ChainEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
