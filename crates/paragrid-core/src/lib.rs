//! Core grid model for Paragrid recursive grid worlds.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! immutable value types the navigator and push engine operate on:
//!
//! - [`Cell`], [`Grid`], and the copy-on-write [`GridStore`]
//! - [`Direction`], [`Axis`], and the [`CellPosition`] locator
//! - the [`Tagger`] seam for caller-supplied cell classification
//!
//! Grids may reference each other, and themselves, through [`Cell::Ref`].
//! The reference graph is an id-keyed map, never a pointer graph, so
//! cycles are representable without any special handling here.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod direction;
pub mod error;
pub mod grid;
pub mod id;
pub mod position;
pub mod store;
pub mod tag;

pub use cell::Cell;
pub use direction::{Axis, Direction};
pub use error::GridError;
pub use grid::Grid;
pub use id::GridId;
pub use position::CellPosition;
pub use store::GridStore;
pub use tag::{find_tagged_cell, NoTags, TagSet, Tagger, STOP_TAG};
