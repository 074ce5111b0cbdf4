//! Test utilities for Paragrid development.
//!
//! Provides compact store fixtures ([`grid_store`], [`render`]), a
//! [`StopOn`] tagger for stop-tag scenarios, and [`init_logging`] for
//! tests that want engine trace output.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use paragrid_core::{Cell, TagSet, Tagger};

pub use fixtures::{cell, grid, grid_store, pos, render};

/// Tags the listed concrete ids with the stop tag.
#[derive(Clone, Debug, Default)]
pub struct StopOn {
    ids: Vec<String>,
}

impl StopOn {
    pub fn new(ids: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            ids: ids.into_iter().map(Into::into).collect(),
        }
    }
}

impl Tagger for StopOn {
    fn tags(&self, cell: &Cell) -> TagSet {
        match cell {
            Cell::Concrete(id) if self.ids.iter().any(|s| s == id) => TagSet::stop(),
            _ => TagSet::new(),
        }
    }
}

pub fn stop_on(ids: &[&str]) -> StopOn {
    StopOn::new(ids.iter().copied())
}

/// Install `env_logger` for the current test binary. Safe to call from
/// every test; only the first call takes effect.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
    log::debug!("test logging initialised");
}
