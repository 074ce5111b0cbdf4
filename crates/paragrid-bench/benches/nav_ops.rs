//! Criterion micro-benchmarks for navigation.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, Criterion};
use paragrid_bench::random_store;
use paragrid_core::{Cell, CellPosition, Direction, Grid, GridStore, NoTags};
use paragrid_nav::{NavOptions, Navigator};

/// Walk east from every row start of every grid in a random store,
/// entering references as they are met.
fn bench_traverse_random(c: &mut Criterion) {
    let store = random_store(16, 12, 7).unwrap();
    let starts: Vec<CellPosition> = store
        .ids()
        .flat_map(|id| (0..12).map(move |r| CellPosition::new(id.clone(), r, 0)))
        .collect();
    let options = NavOptions {
        auto_enter: true,
        ..NavOptions::default()
    };

    c.bench_function("traverse_random_16x12x12", |b| {
        b.iter(|| {
            let mut steps = 0usize;
            for start in &starts {
                let nav = Navigator::with_options(&store, start.clone(), Direction::E, options);
                steps += nav.traverse(&NoTags, 10_000).count();
            }
            black_box(steps);
        });
    });
}

/// Single-step advances around a self-referencing ring.
fn bench_advance_self_loop(c: &mut Criterion) {
    let row = std::iter::once(Cell::primary_ref("main"))
        .chain((1..64).map(|i| Cell::concrete(i.to_string())))
        .collect();
    let store = GridStore::new([Grid::new("main", vec![row]).unwrap()]).unwrap();

    c.bench_function("advance_self_loop_1k", |b| {
        b.iter(|| {
            let mut nav = Navigator::new(&store, CellPosition::new("main", 0, 1), Direction::E);
            for _ in 0..1000 {
                black_box(nav.advance().is_ok());
            }
        });
    });
}

criterion_group!(benches, bench_traverse_random, bench_advance_self_loop);
criterion_main!(benches);
