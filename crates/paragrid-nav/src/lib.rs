//! Traversal through nested and cyclic Paragrid grids.
//!
//! This crate defines the [`Navigator`], the state machine that moves a
//! position one cell at a time across grid boundaries:
//!
//! - stepping off a grid's edge exits through the grid's primary reference
//!   and continues in the parent, cascading through ancestors;
//! - entering a reference cell lands on the facing edge of the referenced
//!   grid, at the midpoint or at a carried edge offset ([`EntryMode`]);
//! - repeated boundaries within one step are reported as exit or entry
//!   cycles instead of looping.
//!
//! [`Traversal`] wraps a navigator into an iterator that also detects path
//! cycles across steps.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod entry;
pub mod error;
pub mod navigator;
pub mod traversal;

pub use entry::{EdgeFraction, EntryMode};
pub use error::NavFailure;
pub use navigator::{NavOptions, Navigator, Transition};
pub use traversal::{Termination, Traversal};
