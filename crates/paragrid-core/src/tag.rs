//! Caller-supplied cell classification.
//!
//! The core has no tagging policy of its own. Callers classify cells by
//! implementing [`Tagger`] (closures `Fn(&Cell) -> TagSet` do so already);
//! only the [`STOP_TAG`] is consulted by traversal and push code.

use std::borrow::Cow;

use smallvec::SmallVec;

use crate::cell::Cell;
use crate::position::CellPosition;
use crate::store::GridStore;

/// Tag marking a cell that can neither be displaced nor initiate a push.
pub const STOP_TAG: &str = "stop";

/// A small set of string tags attached to a cell.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TagSet(SmallVec<[Cow<'static, str>; 2]>);

impl TagSet {
    /// No tags.
    pub fn new() -> Self {
        Self(SmallVec::new())
    }

    /// Just the [`STOP_TAG`].
    pub fn stop() -> Self {
        Self::new().with(STOP_TAG)
    }

    /// Add a tag, builder style.
    pub fn with(mut self, tag: impl Into<Cow<'static, str>>) -> Self {
        self.insert(tag);
        self
    }

    /// Add a tag if not already present.
    pub fn insert(&mut self, tag: impl Into<Cow<'static, str>>) {
        let tag = tag.into();
        if !self.contains(&tag) {
            self.0.push(tag);
        }
    }

    /// Whether `tag` is present.
    pub fn contains(&self, tag: &str) -> bool {
        self.0.iter().any(|t| t == tag)
    }

    /// Whether there are no tags.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate tags.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|t| t.as_ref())
    }
}

impl<T: Into<Cow<'static, str>>> FromIterator<T> for TagSet {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = Self::new();
        for tag in iter {
            set.insert(tag);
        }
        set
    }
}

/// Classifies cells into tag sets.
pub trait Tagger {
    /// Tags for `cell`.
    fn tags(&self, cell: &Cell) -> TagSet;

    /// Whether `cell` carries `tag`.
    fn has_tag(&self, cell: &Cell, tag: &str) -> bool {
        self.tags(cell).contains(tag)
    }

    /// Whether `cell` carries the [`STOP_TAG`].
    fn is_stop(&self, cell: &Cell) -> bool {
        self.has_tag(cell, STOP_TAG)
    }
}

impl<F> Tagger for F
where
    F: Fn(&Cell) -> TagSet,
{
    fn tags(&self, cell: &Cell) -> TagSet {
        self(cell)
    }
}

/// A [`Tagger`] that tags nothing.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoTags;

impl Tagger for NoTags {
    fn tags(&self, _cell: &Cell) -> TagSet {
        TagSet::new()
    }

    fn has_tag(&self, _cell: &Cell, _tag: &str) -> bool {
        false
    }
}

/// First cell carrying `tag`, in store, row, column order.
pub fn find_tagged_cell<T: Tagger + ?Sized>(
    store: &GridStore,
    tag: &str,
    tagger: &T,
) -> Option<CellPosition> {
    store.iter().find_map(|grid| {
        grid.iter()
            .find(|(_, _, cell)| tagger.has_tag(cell, tag))
            .map(|(row, col, _)| CellPosition::new(grid.id().clone(), row, col))
    })
}
