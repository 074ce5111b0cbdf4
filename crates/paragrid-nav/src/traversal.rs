//! Multi-step walks with path-cycle detection.

use std::collections::HashSet;

use paragrid_core::{CellPosition, Tagger};

use crate::error::NavFailure;
use crate::navigator::Navigator;

/// Why a [`Traversal`] stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Termination {
    /// Hit the edge of a root grid.
    EdgeReached,
    /// Auto-entry re-entered a grid without progress.
    EntryCycle,
    /// An exit chain repeated a boundary.
    ExitCycle,
    /// Landed on a position already yielded by this walk.
    PathCycle,
    /// Landed on a cell tagged stop; it is not yielded.
    StopTag,
    /// The step budget ran out.
    MaxSteps,
}

/// Iterator over the positions a [`Navigator`] visits.
///
/// Yields the start position first, then each landed position. After the
/// iterator returns `None`, [`termination`](Traversal::termination) says
/// why.
#[derive(Debug)]
pub struct Traversal<'s, 't, T: ?Sized> {
    nav: Navigator<'s>,
    tagger: &'t T,
    max_steps: usize,
    steps: usize,
    started: bool,
    visited: HashSet<CellPosition>,
    termination: Option<Termination>,
}

impl<'s, 't, T: Tagger + ?Sized> Traversal<'s, 't, T> {
    pub(crate) fn new(nav: Navigator<'s>, tagger: &'t T, max_steps: usize) -> Self {
        Self {
            nav,
            tagger,
            max_steps,
            steps: 0,
            started: false,
            visited: HashSet::new(),
            termination: None,
        }
    }

    /// Why the walk ended; `None` while it is still running.
    pub fn termination(&self) -> Option<Termination> {
        self.termination
    }

    /// The navigator driving this walk.
    pub fn navigator(&self) -> &Navigator<'s> {
        &self.nav
    }

    fn stop(&mut self, reason: Termination) -> Option<CellPosition> {
        self.termination = Some(reason);
        None
    }
}

impl<T: Tagger + ?Sized> Iterator for Traversal<'_, '_, T> {
    type Item = CellPosition;

    fn next(&mut self) -> Option<CellPosition> {
        if self.termination.is_some() {
            return None;
        }
        if !self.started {
            self.started = true;
            let start = self.nav.current().clone();
            self.visited.insert(start.clone());
            return Some(start);
        }
        if self.steps >= self.max_steps {
            return self.stop(Termination::MaxSteps);
        }
        match self.nav.advance() {
            Ok(_) => {}
            Err(NavFailure::EdgeReached { .. } | NavFailure::NotEnterable { .. }) => {
                return self.stop(Termination::EdgeReached)
            }
            Err(NavFailure::ExitCycle { .. }) => return self.stop(Termination::ExitCycle),
            Err(NavFailure::EntryCycle { .. }) => return self.stop(Termination::EntryCycle),
        }
        self.steps += 1;
        let pos = self.nav.current().clone();
        if self.tagger.is_stop(self.nav.current_cell()) {
            return self.stop(Termination::StopTag);
        }
        if !self.visited.insert(pos.clone()) {
            return self.stop(Termination::PathCycle);
        }
        Some(pos)
    }
}
