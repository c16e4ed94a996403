// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, black_box, criterion_group, criterion_main};
use kurbo::Size;
use marquee_arena::{Button, ElementArena, ElementId};
use marquee_layout::{LayoutEngine, Spacing, Viewport, construct_menu};
use marquee_menu::{BuildReport, CatalogEntry, classify};

fn gen_elements(categories: usize) -> (ElementArena, Vec<ElementId>) {
    let mut arena = ElementArena::new();
    let mut ids = Vec::with_capacity(categories);
    for c in 0..categories {
        let group = format!("Category{c}");
        ids.push(arena.insert(Button::new(group, Size::new(40.0, 32.0))));
    }
    (arena, ids)
}

fn gen_catalog(categories: usize, per_category: usize) -> Vec<CatalogEntry> {
    let mut out = Vec::with_capacity(categories * per_category);
    for c in 0..categories {
        for i in 0..per_category {
            out.push(CatalogEntry::new(
                format!("item_{c}_{i}"),
                format!("Category{c}"),
            ));
        }
    }
    out
}

fn bench_construct(c: &mut Criterion) {
    let mut g = c.benchmark_group("construct");
    for (categories, per_category) in [(8, 16), (16, 64)] {
        let catalog = gen_catalog(categories, per_category);
        g.bench_function(format!("{categories}x{per_category}"), |b| {
            b.iter_batched(
                || gen_elements(categories),
                |(mut arena, ids)| {
                    let (groups, report) = construct_menu(
                        &mut arena,
                        &ids,
                        &catalog,
                        Viewport::new(1920.0, 1080.0),
                        Spacing::default(),
                    );
                    black_box((groups, report));
                },
                BatchSize::SmallInput,
            );
        });
    }
    g.finish();
}

fn bench_arrange(c: &mut Criterion) {
    let (mut arena, ids) = gen_elements(16);
    let mut report = BuildReport::default();
    let groups = classify(&arena, &ids, &mut report);
    let engine = LayoutEngine::new(Viewport::new(1920.0, 1080.0), Spacing::default());
    c.bench_function("arrange/16", |b| {
        b.iter(|| {
            engine.arrange(&mut arena, black_box(&groups));
        });
    });
}

criterion_group!(benches, bench_construct, bench_arrange);
criterion_main!(benches);
