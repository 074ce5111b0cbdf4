//! Walks over arbitrary reference graphs always terminate.

use paragrid_core::{Cell, CellPosition, Direction, Grid, GridStore, NoTags};
use paragrid_nav::{EntryMode, NavFailure, NavOptions, Navigator, Termination};
use paragrid_test_utils::{grid_store, pos};
use proptest::prelude::*;

#[test]
fn single_cell_self_reference_never_hangs() {
    let store = grid_store(&[("a", "a")]);
    for direction in Direction::ALL {
        let mut nav = Navigator::new(&store, pos("a", 0, 0), direction);
        assert!(matches!(nav.advance(), Err(NavFailure::ExitCycle { .. })));
        assert_eq!(nav.current(), &pos("a", 0, 0));
    }
}

#[test]
fn mutual_references_never_hang() {
    let store = grid_store(&[("a", "b"), ("b", "a")]);
    for direction in Direction::ALL {
        let mut nav = Navigator::new(&store, pos("a", 0, 0), direction);
        assert!(!nav.try_advance());
        assert!(nav.failure().is_some_and(NavFailure::is_cycle));

        let mut nav = Navigator::new(&store, pos("a", 0, 0), direction);
        assert!(nav.try_enter());
        assert!(nav.try_enter());
        assert!(matches!(nav.enter(), Err(NavFailure::EntryCycle { .. })));
    }
}

// ── Random stores ──────────────────────────────────────────────────

/// Cell kinds before grid ids are known: `Ref(k)` points at grid `k % n`.
#[derive(Clone, Debug)]
enum Seed {
    Empty,
    Concrete,
    Ref(usize),
}

fn arb_seed() -> impl Strategy<Value = Seed> {
    prop_oneof![
        2 => Just(Seed::Empty),
        2 => Just(Seed::Concrete),
        3 => (0usize..4).prop_map(Seed::Ref),
    ]
}

fn arb_store() -> impl Strategy<Value = GridStore> {
    prop::collection::vec((1usize..4, 1usize..4), 1..5)
        .prop_flat_map(|shapes| {
            let n = shapes.len();
            let grids: Vec<_> = shapes
                .into_iter()
                .map(|(rows, cols)| prop::collection::vec(prop::collection::vec(arb_seed(), cols), rows))
                .collect();
            (Just(n), grids)
        })
        .prop_map(|(n, grids)| {
            let grids = grids.into_iter().enumerate().map(|(g, rows)| {
                let rows = rows
                    .into_iter()
                    .enumerate()
                    .map(|(r, row)| {
                        row.into_iter()
                            .enumerate()
                            .map(|(c, seed)| match seed {
                                Seed::Empty => Cell::Empty,
                                Seed::Concrete => Cell::concrete(format!("{g}{r}{c}")),
                                Seed::Ref(k) => Cell::auto_ref(format!("g{}", k % n)),
                            })
                            .collect()
                    })
                    .collect();
                Grid::new(format!("g{g}"), rows).unwrap()
            });
            GridStore::new(grids).unwrap()
        })
}

fn every_position(store: &GridStore) -> Vec<CellPosition> {
    store
        .iter()
        .flat_map(|grid| {
            grid.iter()
                .map(|(r, c, _)| CellPosition::new(grid.id().clone(), r, c))
                .collect::<Vec<_>>()
        })
        .collect()
}

proptest! {
    #[test]
    fn walks_end_before_revisiting(
        store in arb_store(),
        auto_enter in any::<bool>(),
        carry in any::<bool>(),
    ) {
        let total: usize = store.iter().map(|g| g.rows() * g.cols()).sum();
        let options = NavOptions {
            auto_enter,
            entry: if carry { EntryMode::PreserveFraction } else { EntryMode::Midpoint },
        };
        for start in every_position(&store) {
            for direction in Direction::ALL {
                let mut walk = Navigator::with_options(&store, start.clone(), direction, options)
                    .traverse(&NoTags, 10_000);
                let seen = walk.by_ref().count();
                prop_assert!(seen <= total);
                prop_assert!(walk.termination().is_some());
                prop_assert_ne!(walk.termination(), Some(Termination::MaxSteps));
            }
        }
    }

    #[test]
    fn failed_steps_leave_position_unchanged(store in arb_store()) {
        for start in every_position(&store) {
            for direction in Direction::ALL {
                let mut nav = Navigator::new(&store, start.clone(), direction);
                if nav.advance().is_err() {
                    prop_assert_eq!(nav.current(), &start);
                }
                let mut nav = Navigator::new(&store, start.clone(), direction);
                if nav.enter().is_err() {
                    prop_assert_eq!(nav.current(), &start);
                }
            }
        }
    }
}
