//! Push and pull operations over Paragrid recursive grids.
//!
//! A push moves the contents of a line of cells one step in a direction,
//! crossing grid boundaries and references as it goes. Each reference met
//! on the way is handled by a strategy (`Portal`, `Solid` or `Swallow`)
//! chosen from a [`RuleSet`]; the [`PushEngine`] backtracks over those
//! choices until a chain works. Successful operations return a new
//! [`GridStore`](paragrid_core::GridStore) that shares every untouched grid
//! with the input; failures return a [`PushFailure`] and no store.
//!
//! The free functions here run a default-configured engine.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chain;
pub mod config;
pub mod engine;
pub mod failure;
pub mod pull;
pub mod rotate;
pub mod rules;

pub use chain::{ChainEntry, PushChain};
pub use config::{ConfigError, PushConfig};
pub use engine::{PushEngine, PushOutcome};
pub use failure::{PushFailure, PushFailureReason};
pub use rotate::{rotate, Rotation};
pub use rules::{RefStrategy, RuleSet};

use paragrid_core::{CellPosition, Direction, GridStore, Tagger};

/// [`PushEngine::push`] with the default configuration.
pub fn push<T: Tagger + ?Sized>(
    store: &GridStore,
    start: &CellPosition,
    direction: Direction,
    rules: &RuleSet,
    tagger: &T,
) -> Result<PushOutcome, PushFailure> {
    PushEngine::default().push(store, start, direction, rules, tagger)
}

/// [`PushEngine::push_simple`] with the default configuration.
pub fn push_simple<T: Tagger + ?Sized>(
    store: &GridStore,
    start: &CellPosition,
    direction: Direction,
    rules: &RuleSet,
    tagger: &T,
) -> Result<GridStore, PushFailure> {
    PushEngine::default().push_simple(store, start, direction, rules, tagger)
}

/// [`PushEngine::pull`] with the default configuration.
pub fn pull<T: Tagger + ?Sized>(
    store: &GridStore,
    start: &CellPosition,
    direction: Direction,
    rules: &RuleSet,
    tagger: &T,
) -> Result<PushOutcome, PushFailure> {
    PushEngine::default().pull(store, start, direction, rules, tagger)
}
