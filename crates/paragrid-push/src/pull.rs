//! Pull: draw a line of cells into an empty cell.

use std::collections::HashSet;

use log::debug;

use paragrid_core::{CellPosition, Direction, GridStore, Tagger};
use paragrid_nav::Navigator;

use crate::chain::PushChain;
use crate::engine::{PushEngine, PushOutcome};
use crate::failure::{PushFailure, PushFailureReason};
use crate::rotate::{rotate, Rotation};
use crate::rules::{RefStrategy, RuleSet};

enum PullStep {
    Entered,
    Include,
    Stop,
}

impl PushEngine {
    /// Pull the cells lying in `direction` from an empty `start` one step
    /// back towards it.
    ///
    /// Cells are gathered while they are non-empty, not stop-tagged and
    /// not already gathered, up to `max_chain_len` of them. At a reference
    /// the first strategy in `rules` that applies decides: `Portal` enters
    /// and keeps gathering inside, `Solid` gathers the reference itself.
    /// `Swallow` never applies to a pull.
    ///
    /// A non-empty start, or nothing to gather, is not an error: the store
    /// comes back unchanged with a one-entry chain.
    ///
    /// # Panics
    ///
    /// Panics if `start` is not a position in `store`.
    pub fn pull<T: Tagger + ?Sized>(
        &self,
        store: &GridStore,
        start: &CellPosition,
        direction: Direction,
        rules: &RuleSet,
        tagger: &T,
    ) -> Result<PushOutcome, PushFailure> {
        let start_cell = store.cell(start);
        if tagger.is_stop(start_cell) {
            return Err(PushFailure::new(PushFailureReason::StopTag, start.clone())
                .with_details("initiating cell is stop-tagged"));
        }
        let mut chain = PushChain::start(start.clone(), start_cell.clone());
        if !start_cell.is_empty() {
            debug!("pull {direction} from {start}: start is occupied");
            return Ok(PushOutcome {
                store: store.clone(),
                chain,
            });
        }

        let mut visited = HashSet::from([start.clone()]);
        let mut nav = Navigator::with_options(store, start.clone(), direction, self.nav_options());
        let mut moving = nav.advance().is_ok();
        while moving && chain.len() <= self.config().max_chain_len {
            let here = nav.current().clone();
            let cell = nav.current_cell();
            if cell.is_empty() || tagger.is_stop(cell) || visited.contains(&here) {
                break;
            }
            if cell.is_ref() {
                match pull_step(rules, &mut nav) {
                    PullStep::Entered => continue,
                    PullStep::Stop => break,
                    PullStep::Include => {}
                }
            }
            chain.push(here.clone(), cell.clone(), nav.transition());
            visited.insert(here);
            moving = nav.advance().is_ok();
        }

        debug!("pull {direction} from {start}: {} cell chain", chain.len());
        let store = rotate(store, &chain, Rotation::Backward);
        Ok(PushOutcome { store, chain })
    }
}

/// Decide what to do at a reference during a pull.
fn pull_step(rules: &RuleSet, nav: &mut Navigator<'_>) -> PullStep {
    for strategy in rules.order() {
        match strategy {
            RefStrategy::Portal => match nav.enter() {
                Ok(()) => return PullStep::Entered,
                Err(failure) if failure.is_cycle() => return PullStep::Stop,
                Err(_) => {}
            },
            RefStrategy::Solid => return PullStep::Include,
            RefStrategy::Swallow => {}
        }
    }
    PullStep::Stop
}

#[cfg(test)]
mod tests {
    use super::*;
    use paragrid_core::NoTags;
    use paragrid_test_utils::{grid_store, pos, render, stop_on};

    fn pull_east(store: &GridStore, rules: &RuleSet) -> PushOutcome {
        PushEngine::default()
            .pull(store, &pos("main", 0, 0), Direction::E, rules, &NoTags)
            .unwrap()
    }

    #[test]
    fn gathers_until_edge() {
        let store = grid_store(&[("main", "_ 1 2")]);
        let out = pull_east(&store, &RuleSet::default());
        assert_eq!(render(&out.store, "main"), "1 2 _");
        assert_eq!(out.chain.len(), 3);
    }

    #[test]
    fn stops_at_empty_and_stop_tag() {
        let store = grid_store(&[("main", "_ 1 _ 2")]);
        let out = pull_east(&store, &RuleSet::default());
        assert_eq!(render(&out.store, "main"), "1 _ _ 2");

        let store = grid_store(&[("main", "_ 1 9 2")]);
        let out = PushEngine::default()
            .pull(&store, &pos("main", 0, 0), Direction::E, &RuleSet::default(), &stop_on(&["9"]))
            .unwrap();
        assert_eq!(render(&out.store, "main"), "1 _ 9 2");
    }

    #[test]
    fn occupied_start_is_a_no_op() {
        let store = grid_store(&[("main", "1 2 _")]);
        let out = pull_east(&store, &RuleSet::default());
        assert_eq!(out.store, store);
        assert_eq!(out.chain.len(), 1);
    }

    #[test]
    fn stop_tagged_start_fails() {
        let store = grid_store(&[("main", "9 2 _")]);
        let err = PushEngine::default()
            .pull(&store, &pos("main", 0, 0), Direction::E, &RuleSet::default(), &stop_on(&["9"]))
            .unwrap_err();
        assert_eq!(err.reason, PushFailureReason::StopTag);
    }

    #[test]
    fn reference_handling_follows_rule_order() {
        let store = grid_store(&[("main", "_ inner 1"), ("inner", "2 3")]);

        let solid = pull_east(&store, &RuleSet::push_first());
        assert_eq!(render(&solid.store, "main"), "inner 1 _");

        let portal = pull_east(&store, &RuleSet::try_enter_first());
        assert_eq!(render(&portal.store, "main"), "2 inner _");
        assert_eq!(render(&portal.store, "inner"), "3 1");
    }
}
