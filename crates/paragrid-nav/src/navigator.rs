//! The traversal state machine.
//!
//! A [`Navigator`] walks one cell at a time through a [`GridStore`],
//! leaving grids through their primary reference and (optionally)
//! entering reference cells it lands on. States are positions; each
//! successful step records whether it was a plain [`Transition::Move`],
//! or crossed a boundary via [`Transition::Exit`] or [`Transition::Enter`].
//!
//! Cycle safety:
//! - an exit chain that crosses the same grid boundary twice in one step is
//!   an [`NavFailure::ExitCycle`];
//! - consecutive enters with no move or exit in between that reach a grid
//!   already entered are an [`NavFailure::EntryCycle`].
//!
//! Path cycles span many steps and are tracked by the caller (see
//! [`Traversal`](crate::Traversal) and the push engine).

use log::trace;
use smallvec::SmallVec;

use paragrid_core::{Axis, Cell, CellPosition, Direction, GridId, GridStore};

use crate::entry::{entry_cell, midpoint_entry, EdgeFraction, EntryMode};
use crate::error::NavFailure;
use crate::traversal::Traversal;

/// How the navigator arrived at its current position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Stepped to a neighbour in the same grid.
    Move,
    /// Entered a referenced grid.
    Enter,
    /// Left a grid through its primary reference.
    Exit,
}

/// Behaviour switches for a [`Navigator`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavOptions {
    /// Enter every reference cell landed on by [`Navigator::advance`],
    /// repeatedly, until reaching a non-reference cell. Default: `false`.
    pub auto_enter: bool,
    /// Offset convention for entry positions. Default: midpoint.
    pub entry: EntryMode,
}

/// Offset along the last crossed edge, in the coordinates of `grid`.
#[derive(Clone, Debug)]
struct EdgeTrace {
    fraction: EdgeFraction,
    grid: GridId,
    axis: Axis,
}

/// Single-cell stepping through nested and cyclic grids.
///
/// Cheap to clone; the push engine clones a navigator at each decision
/// point so that alternatives can be explored independently.
#[derive(Clone, Debug)]
pub struct Navigator<'s> {
    store: &'s GridStore,
    current: CellPosition,
    direction: Direction,
    options: NavOptions,
    transition: Option<Transition>,
    failure: Option<NavFailure>,
    /// Grids entered since the last move or exit.
    entered: SmallVec<[GridId; 4]>,
    trace: Option<EdgeTrace>,
}

impl<'s> Navigator<'s> {
    /// A navigator at `start` heading `direction`, with default options.
    pub fn new(store: &'s GridStore, start: CellPosition, direction: Direction) -> Self {
        Self::with_options(store, start, direction, NavOptions::default())
    }

    /// A navigator with explicit options.
    pub fn with_options(
        store: &'s GridStore,
        start: CellPosition,
        direction: Direction,
        options: NavOptions,
    ) -> Self {
        Self {
            store,
            current: start,
            direction,
            options,
            transition: None,
            failure: None,
            entered: SmallVec::new(),
            trace: None,
        }
    }

    /// The store being walked.
    pub fn store(&self) -> &'s GridStore {
        self.store
    }

    /// Current position.
    pub fn current(&self) -> &CellPosition {
        &self.current
    }

    /// The cell at the current position.
    ///
    /// # Panics
    ///
    /// Panics if the current position is not in the store.
    pub fn current_cell(&self) -> &'s Cell {
        self.store.cell(&self.current)
    }

    /// Direction of travel.
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Options in effect.
    pub fn options(&self) -> NavOptions {
        self.options
    }

    /// How the current position was reached; `None` before any step.
    pub fn transition(&self) -> Option<Transition> {
        self.transition
    }

    /// Why the most recent step or entry failed, if it did.
    pub fn failure(&self) -> Option<&NavFailure> {
        self.failure.as_ref()
    }

    /// Reverse the direction of travel.
    ///
    /// Forgets any carried edge offset: a reversed traveller is no longer
    /// continuing across the edge it last crossed.
    pub fn flip(&mut self) {
        self.direction = self.direction.flip();
        self.trace = None;
    }

    /// Walk from here, yielding each landed position until termination.
    pub fn traverse<'t, T>(self, tagger: &'t T, max_steps: usize) -> Traversal<'s, 't, T>
    where
        T: paragrid_core::Tagger + ?Sized,
    {
        Traversal::new(self, tagger, max_steps)
    }

    /// Attempt one step; `true` on success.
    ///
    /// On failure, [`failure`](Self::failure) says why and the position is
    /// unchanged.
    pub fn try_advance(&mut self) -> bool {
        self.advance().is_ok()
    }

    /// Attempt one step, reporting how it crossed or why it failed.
    ///
    /// # Panics
    ///
    /// Panics if the walk reaches a grid missing from the store through
    /// an exit, which means the store is malformed.
    pub fn advance(&mut self) -> Result<Transition, NavFailure> {
        let result = self.step();
        self.record(&result.as_ref().map(|t| *t));
        result
    }

    /// Attempt to enter the reference cell at the current position; `true`
    /// on success.
    pub fn try_enter(&mut self) -> bool {
        self.enter().is_ok()
    }

    /// Enter the reference cell at the current position.
    ///
    /// Fails with [`NavFailure::NotEnterable`] if the current cell is not a
    /// reference to a grid in the store, and with [`NavFailure::EntryCycle`]
    /// if its target was already entered since the last move or exit.
    pub fn enter(&mut self) -> Result<(), NavFailure> {
        let result = self.enter_once();
        self.record(&result.as_ref().map(|_| Transition::Enter));
        result
    }

    fn record(&mut self, result: &Result<Transition, &NavFailure>) {
        match result {
            Ok(transition) => {
                self.transition = Some(*transition);
                self.failure = None;
            }
            Err(failure) => self.failure = Some((*failure).clone()),
        }
    }

    fn enter_once(&mut self) -> Result<(), NavFailure> {
        let store = self.store;
        let target = match store.cell(&self.current).ref_target() {
            Some(target) if store.contains(target.as_str()) => target,
            _ => {
                return Err(NavFailure::NotEnterable {
                    at: self.current.clone(),
                })
            }
        };
        if self.entered.contains(target) {
            trace!("entry cycle: '{target}' entered twice from {}", self.current);
            return Err(NavFailure::EntryCycle {
                grid: target.clone(),
            });
        }
        let (pos, trace) = self.entry_into(&self.current, target, self.trace.as_ref());
        self.entered.push(target.clone());
        self.current = pos;
        self.trace = trace;
        Ok(())
    }

    fn step(&mut self) -> Result<Transition, NavFailure> {
        let store = self.store;
        let axis = self.direction.axis();
        let carry = self.options.entry == EntryMode::PreserveFraction;

        let mut pos = self.current.clone();
        let mut transition = Transition::Move;
        // Direction is fixed within one step, so grid ids alone key the
        // crossed boundaries.
        let mut exited: SmallVec<[GridId; 4]> = SmallVec::new();
        let mut fraction: Option<EdgeFraction> = None;

        loop {
            let grid = store.grid(pos.grid.as_str());
            if let Some((row, col)) = self.direction.step(pos.row, pos.col, grid.rows(), grid.cols())
            {
                pos = pos.moved_to(row, col);
                break;
            }
            if exited.contains(&pos.grid) {
                trace!(
                    "exit cycle: boundary of '{}' heading {} crossed twice",
                    pos.grid,
                    self.direction
                );
                return Err(NavFailure::ExitCycle {
                    grid: pos.grid,
                    direction: self.direction,
                });
            }
            let Some(parent) = store.primary_ref(pos.grid.as_str()) else {
                return Err(NavFailure::EdgeReached {
                    at: self.current.clone(),
                });
            };
            if carry {
                let here = if transition == Transition::Move {
                    Some(EdgeFraction::at_offset(
                        axis.cross(pos.row, pos.col),
                        grid.cross_len(axis),
                    ))
                } else {
                    fraction
                };
                let parent_len = store.grid(parent.grid.as_str()).cross_len(axis);
                fraction = here.and_then(|f| f.lift(axis.cross(parent.row, parent.col), parent_len));
            }
            exited.push(pos.grid.clone());
            pos = parent.clone();
            transition = Transition::Exit;
        }

        let mut trace = match (transition, fraction) {
            (Transition::Exit, Some(fraction)) => Some(EdgeTrace {
                fraction,
                grid: pos.grid.clone(),
                axis,
            }),
            _ => None,
        };
        let mut entered: SmallVec<[GridId; 4]> = SmallVec::new();

        if self.options.auto_enter {
            while let Some(target) = store.cell(&pos).ref_target() {
                if !store.contains(target.as_str()) {
                    break;
                }
                if entered.contains(target) {
                    trace!("entry cycle: '{target}' re-entered while auto-entering");
                    return Err(NavFailure::EntryCycle {
                        grid: target.clone(),
                    });
                }
                entered.push(target.clone());
                (pos, trace) = self.entry_into(&pos, target, trace.as_ref());
                transition = Transition::Enter;
            }
        }

        self.current = pos;
        self.entered = entered;
        self.trace = trace;
        Ok(transition)
    }

    /// Entry position inside `target` for the reference at `at`, plus the
    /// edge trace to carry into it.
    fn entry_into(
        &self,
        at: &CellPosition,
        target: &GridId,
        trace: Option<&EdgeTrace>,
    ) -> (CellPosition, Option<EdgeTrace>) {
        let axis = self.direction.axis();
        let grid = self.store.grid(target.as_str());
        let len = grid.cross_len(axis);

        let carried = trace
            .filter(|t| t.axis == axis && t.grid == at.grid)
            .and_then(|t| {
                let parent_len = self.store.grid(at.grid.as_str()).cross_len(axis);
                t.fraction.lower(axis.cross(at.row, at.col), parent_len)
            });
        let (row, col) = match carried.and_then(|f| f.to_index(len)) {
            Some(offset) => entry_cell(grid, self.direction, offset.min(len - 1)),
            None => midpoint_entry(grid, self.direction),
        };
        let next = carried.map(|fraction| EdgeTrace {
            fraction,
            grid: target.clone(),
            axis,
        });
        (CellPosition::new(target.clone(), row, col), next)
    }
}
