//! Paragrid: recursive grid worlds for block-pushing puzzles.
//!
//! Grids hold concrete cells, empty cells, and references to other grids
//! (including themselves). Pushing a line of cells can leave a grid through
//! its primary reference, enter a referenced grid, or carry a cell into a
//! reference it bumps into. This is the facade crate re-exporting the
//! sub-crates; most users only need the [`prelude`].
//!
//! # Quick start
//!
//! ```rust
//! use paragrid::prelude::*;
//!
//! // main: [1, ->inner, _]    inner: [2, 3]
//! let store = GridStore::new([
//!     Grid::new(
//!         "main",
//!         vec![vec![Cell::concrete("1"), Cell::auto_ref("inner"), Cell::Empty]],
//!     )
//!     .unwrap(),
//!     Grid::new("inner", vec![vec![Cell::concrete("2"), Cell::concrete("3")]]).unwrap(),
//! ])
//! .unwrap();
//!
//! let outcome = push(
//!     &store,
//!     &CellPosition::new("main", 0, 0),
//!     Direction::E,
//!     &RuleSet::try_enter_first(),
//!     &NoTags,
//! )
//! .unwrap();
//!
//! // 1 went into inner, 2 and 3 shifted along, 3 came out the far side.
//! assert_eq!(outcome.store.cell(&CellPosition::new("inner", 0, 0)), &Cell::concrete("1"));
//! assert_eq!(outcome.store.cell(&CellPosition::new("main", 0, 2)), &Cell::concrete("3"));
//! // The input store is untouched.
//! assert_eq!(store.cell(&CellPosition::new("main", 0, 0)), &Cell::concrete("1"));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`model`] | `paragrid-core` | Cells, grids, the store, directions, tags |
//! | [`nav`] | `paragrid-nav` | Navigator, entry modes, traversal |
//! | [`push`] | `paragrid-push` | Push and pull engine, rule sets, failures |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid model (`paragrid-core`).
///
/// [`model::GridStore`] is the immutable, copy-on-write collection every
/// operation reads and returns.
pub use paragrid_core as model;

/// Navigation (`paragrid-nav`).
///
/// [`nav::Navigator`] steps across grid boundaries; [`nav::Traversal`]
/// iterates a whole walk.
pub use paragrid_nav as nav;

/// Push and pull (`paragrid-push`).
///
/// [`push::PushEngine`] for configured limits, or the free functions
/// [`push::push`], [`push::push_simple`] and [`push::pull`].
pub use paragrid_push as push;

/// Common imports for typical Paragrid usage.
///
/// ```rust
/// use paragrid::prelude::*;
/// ```
pub mod prelude {
    // Model
    pub use paragrid_core::{
        Cell, CellPosition, Direction, Grid, GridError, GridId, GridStore, NoTags, TagSet, Tagger,
        STOP_TAG,
    };

    // Navigation
    pub use paragrid_nav::{EntryMode, NavFailure, NavOptions, Navigator, Transition};

    // Operations
    pub use paragrid_push::{
        pull, push, push_simple, PushConfig, PushEngine, PushFailure, PushFailureReason,
        PushOutcome, RefStrategy, RuleSet,
    };
}
