//! Push chain construction with backtracking over reference strategies.
//!
//! A push starts at a cell and repeatedly looks at the next cell in the
//! direction of travel (the *target*). Empty targets end the chain; so does
//! coming back round to the start. Anything else opens a decision: the
//! strategies that apply there, in [`RuleSet`] order:
//!
//! - `Solid` always applies: the target joins the chain and the navigator
//!   steps past it.
//! - `Portal` applies when the target is a reference: the navigator enters
//!   it and the target is not moved.
//! - `Swallow` applies when the last chain cell is a reference: the target
//!   joins the chain and is carried back into that reference's grid, and
//!   the push continues there in the reversed direction.
//!
//! Decisions live on an explicit stack. A strategy that tries to enter an
//! unenterable cell is skipped. Any other failure, including a step into a
//! root edge, is remembered and the search backtracks to the next
//! alternative. When every alternative is spent, the first failure recorded
//! is reported; a wall is only reported when nothing else went wrong.

use std::collections::HashSet;

use log::{debug, trace};
use smallvec::SmallVec;

use paragrid_core::{Cell, CellPosition, Direction, GridStore, Tagger};
use paragrid_nav::{NavOptions, Navigator};

use crate::chain::PushChain;
use crate::config::{ConfigError, PushConfig};
use crate::failure::{PushFailure, PushFailureReason};
use crate::rotate::{rotate, Rotation};
use crate::rules::{RefStrategy, RuleSet};

/// A successful push or pull.
#[derive(Clone, Debug)]
pub struct PushOutcome {
    /// The new store. Grids the operation did not touch are shared with
    /// the input store.
    pub store: GridStore,
    /// The cells moved, with their original contents.
    pub chain: PushChain,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Mode {
    Backtracking,
    Simple,
}

// ── PushEngine ─────────────────────────────────────────────────────

/// Runs pushes and pulls under a validated [`PushConfig`].
///
/// The engine holds no state between calls; every operation is a pure
/// function of its inputs and returns a new [`GridStore`].
#[derive(Clone, Debug, Default)]
pub struct PushEngine {
    config: PushConfig,
}

impl PushEngine {
    /// Create an engine, validating `config`.
    pub fn new(config: PushConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration in effect.
    pub fn config(&self) -> &PushConfig {
        &self.config
    }

    pub(crate) fn nav_options(&self) -> NavOptions {
        NavOptions {
            auto_enter: false,
            ..self.config.nav
        }
    }

    /// Push the cell at `start` one step in `direction`, backtracking over
    /// strategy choices until a chain works or every choice is spent.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a position in `store`.
    pub fn push<T: Tagger + ?Sized>(
        &self,
        store: &GridStore,
        start: &CellPosition,
        direction: Direction,
        rules: &RuleSet,
        tagger: &T,
    ) -> Result<PushOutcome, PushFailure> {
        let chain = self.build_chain(store, start, direction, rules, tagger, Mode::Backtracking)?;
        let store = rotate(store, &chain, Rotation::Forward);
        Ok(PushOutcome { store, chain })
    }

    /// Push without backtracking: at each decision the first strategy
    /// that applies is committed to, and the first failure is final.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a position in `store`.
    pub fn push_simple<T: Tagger + ?Sized>(
        &self,
        store: &GridStore,
        start: &CellPosition,
        direction: Direction,
        rules: &RuleSet,
        tagger: &T,
    ) -> Result<GridStore, PushFailure> {
        let chain = self.build_chain(store, start, direction, rules, tagger, Mode::Simple)?;
        Ok(rotate(store, &chain, Rotation::Forward))
    }

    fn build_chain<T: Tagger + ?Sized>(
        &self,
        store: &GridStore,
        start: &CellPosition,
        direction: Direction,
        rules: &RuleSet,
        tagger: &T,
        mode: Mode,
    ) -> Result<PushChain, PushFailure> {
        let result = self.search(store, start, direction, rules, tagger, mode);
        match &result {
            Ok(chain) => debug!(
                "push {direction} from {start}: {} cell chain ({mode:?})",
                chain.len()
            ),
            Err(failure) => debug!("push {direction} from {start}: {failure} ({mode:?})"),
        }
        result
    }

    fn search<T: Tagger + ?Sized>(
        &self,
        store: &GridStore,
        start: &CellPosition,
        direction: Direction,
        rules: &RuleSet,
        tagger: &T,
        mode: Mode,
    ) -> Result<PushChain, PushFailure> {
        let start_cell = store.cell(start);
        if tagger.is_stop(start_cell) {
            return Err(PushFailure::new(PushFailureReason::StopTag, start.clone())
                .with_details("initiating cell is stop-tagged"));
        }

        let mut nav = Navigator::with_options(store, start.clone(), direction, self.nav_options());
        if let Err(failure) = nav.advance() {
            return Err(PushFailure::from_nav(&failure, start)
                .unwrap_or_else(|| PushFailure::new(PushFailureReason::Blocked, start.clone())));
        }

        let search = Search {
            start,
            rules,
            tagger,
            config: &self.config,
        };
        let chain = PushChain::start(start.clone(), start_cell.clone());
        let visited = HashSet::from([start.clone()]);
        match search.evaluate(chain, visited, nav) {
            Evaluation::Done(chain) => Ok(chain),
            Evaluation::Failed(failure) => Err(failure),
            Evaluation::Decide(root) => search.run(root, mode),
        }
    }
}

// ── Search ─────────────────────────────────────────────────────────

/// One open decision: a navigator parked on the target cell, the chain
/// and visited set up to (not including) it, and the strategies left.
struct Decision<'s> {
    chain: PushChain,
    visited: HashSet<CellPosition>,
    nav: Navigator<'s>,
    pending: SmallVec<[RefStrategy; 3]>,
}

impl Decision<'_> {
    fn next_strategy(&mut self) -> Option<RefStrategy> {
        if self.pending.is_empty() {
            None
        } else {
            Some(self.pending.remove(0))
        }
    }
}

enum Evaluation<'s> {
    Done(PushChain),
    Failed(PushFailure),
    Decide(Decision<'s>),
}

enum Attempt<'s> {
    Applied {
        chain: PushChain,
        visited: HashSet<CellPosition>,
        nav: Navigator<'s>,
    },
    Inapplicable,
    Failed(PushFailure),
}

struct Search<'a, T: ?Sized> {
    start: &'a CellPosition,
    rules: &'a RuleSet,
    tagger: &'a T,
    config: &'a PushConfig,
}

impl<T: Tagger + ?Sized> Search<'_, T> {
    /// Classify the cell under `nav`: chain end, failure, or a decision.
    fn evaluate<'s>(
        &self,
        mut chain: PushChain,
        visited: HashSet<CellPosition>,
        nav: Navigator<'s>,
    ) -> Evaluation<'s> {
        let target = nav.current();
        if target == self.start {
            trace!("chain closed back at {target}");
            return Evaluation::Done(chain);
        }
        if visited.contains(target) {
            return Evaluation::Failed(
                PushFailure::new(PushFailureReason::PathCycle, target.clone())
                    .with_details("chain revisits a cell other than the start"),
            );
        }
        let cell = nav.current_cell();
        if cell.is_empty() {
            chain.push(target.clone(), Cell::Empty, nav.transition());
            return Evaluation::Done(chain);
        }
        if self.tagger.is_stop(cell) {
            return Evaluation::Failed(
                PushFailure::new(PushFailureReason::StopTag, target.clone())
                    .with_details(format!("cell '{cell}' cannot be displaced")),
            );
        }
        if chain.len() >= self.config.max_chain_len {
            return Evaluation::Failed(
                PushFailure::new(PushFailureReason::MaxDepth, target.clone()).with_details(
                    format!("chain longer than {} cells", self.config.max_chain_len),
                ),
            );
        }

        let source_is_ref = chain.last().is_some_and(|e| e.cell.is_ref());
        let pending: SmallVec<[RefStrategy; 3]> = self
            .rules
            .order()
            .iter()
            .copied()
            .filter(|strategy| match strategy {
                RefStrategy::Solid => true,
                RefStrategy::Portal => cell.is_ref(),
                RefStrategy::Swallow => source_is_ref,
            })
            .collect();
        if pending.is_empty() {
            return Evaluation::Failed(PushFailure::new(
                PushFailureReason::NoStrategy,
                target.clone(),
            ));
        }
        Evaluation::Decide(Decision {
            chain,
            visited,
            nav,
            pending,
        })
    }

    /// Try `strategy` from `from`, leaving `from` untouched.
    fn apply<'s>(&self, strategy: RefStrategy, from: &Decision<'s>) -> Attempt<'s> {
        let mut nav = from.nav.clone();
        let mut chain = from.chain.clone();
        let mut visited = from.visited.clone();
        let target = nav.current().clone();
        let arrived = nav.transition();

        let moved = match strategy {
            RefStrategy::Solid => {
                chain.push(target.clone(), nav.current_cell().clone(), arrived);
                visited.insert(target.clone());
                nav.advance().map(drop)
            }
            RefStrategy::Portal => nav.enter(),
            RefStrategy::Swallow => {
                let Some(container) = from.chain.last().map(|e| e.position.clone()) else {
                    return Attempt::Inapplicable;
                };
                chain.push(target.clone(), nav.current_cell().clone(), arrived);
                visited.insert(target.clone());
                nav.flip();
                if nav.advance().is_err() || nav.current() != &container {
                    return Attempt::Inapplicable;
                }
                nav.enter()
            }
        };

        match moved {
            Ok(()) => Attempt::Applied {
                chain,
                visited,
                nav,
            },
            Err(failure) => match PushFailure::from_nav(&failure, &target) {
                Some(failure) => Attempt::Failed(failure),
                None => {
                    trace!("{strategy} inapplicable at {target}: {failure}");
                    Attempt::Inapplicable
                }
            },
        }
    }

    /// Depth-first search over the decision stack rooted at `root`.
    ///
    /// Every time the search resumes an earlier decision after a failed
    /// branch counts as one backtrack; going past `max_decisions` of them
    /// is `MaxDepth`. Simple mode never backtracks.
    fn run<'s>(&self, root: Decision<'s>, mode: Mode) -> Result<PushChain, PushFailure> {
        let mut stack = vec![root];
        let mut first_failure: Option<PushFailure> = None;
        let mut first_blocked: Option<PushFailure> = None;
        let mut exhausted_at: Option<CellPosition> = None;
        let mut backtracks = 0usize;
        let mut retreating = false;

        while let Some(top) = stack.last_mut() {
            let Some(strategy) = top.next_strategy() else {
                if let Some(spent) = stack.pop() {
                    trace!("decision at {} exhausted", spent.nav.current());
                    exhausted_at.get_or_insert_with(|| spent.nav.current().clone());
                }
                if mode == Mode::Simple {
                    break;
                }
                continue;
            };
            if retreating && mode == Mode::Backtracking {
                backtracks += 1;
                if backtracks > self.config.max_decisions {
                    return Err(PushFailure::new(
                        PushFailureReason::MaxDepth,
                        top.nav.current().clone(),
                    )
                    .with_details(format!(
                        "more than {} backtracks",
                        self.config.max_decisions
                    )));
                }
                trace!("backtrack {backtracks} to {}", top.nav.current());
            }
            retreating = false;
            trace!("trying {strategy} at {}", top.nav.current());

            let evaluation = match self.apply(strategy, top) {
                Attempt::Inapplicable => continue,
                Attempt::Failed(failure) => Evaluation::Failed(failure),
                Attempt::Applied {
                    chain,
                    visited,
                    nav,
                } => self.evaluate(chain, visited, nav),
            };

            match evaluation {
                Evaluation::Done(chain) => return Ok(chain),
                Evaluation::Failed(failure) => {
                    trace!("{strategy} failed: {failure}");
                    if mode == Mode::Simple {
                        return Err(failure);
                    }
                    let slot = if failure.reason == PushFailureReason::Blocked {
                        &mut first_blocked
                    } else {
                        &mut first_failure
                    };
                    slot.get_or_insert(failure);
                    retreating = true;
                }
                Evaluation::Decide(next) => stack.push(next),
            }
        }

        Err(first_failure.or(first_blocked).unwrap_or_else(|| {
            let at = exhausted_at.unwrap_or_else(|| self.start.clone());
            PushFailure::new(PushFailureReason::NoStrategy, at)
                .with_details("no strategy applies at any decision point")
        }))
    }
}
