// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal menu construction example.
//!
//! Run:
//! - `cargo run -p marquee_demos --example menu_basics`

use kurbo::Size;
use marquee_arena::{Button, ElementArena};
use marquee_layout::{Spacing, Viewport, construct_menu};
use marquee_menu::CatalogEntry;

fn main() {
    let mut arena = ElementArena::new();
    let ids: Vec<_> = [
        ("Roads", 40.0, 32.0),
        ("Roads_sub", 32.0, 32.0),
        ("Residential", 60.0, 32.0),
        ("Water", 40.0, 32.0),
    ]
    .iter()
    .map(|(group, w, h)| arena.insert(Button::new(*group, Size::new(*w, *h))))
    .collect();

    let catalog = [
        CatalogEntry::new("road_straight", "Roads"),
        CatalogEntry::new("road_curve", "Roads"),
        CatalogEntry::new("house_small", "Residential"),
    ];

    let (groups, report) = construct_menu(
        &mut arena,
        &ids,
        &catalog,
        Viewport::new(800.0, 600.0),
        Spacing::default(),
    );

    println!("issues: {:?}", report.issues);
    for id in &groups.main {
        let button = arena.get(id).unwrap();
        println!(
            "{:<12} at {:?} action={:?}",
            button.group_id(),
            button.rect.origin(),
            button.action.id()
        );
    }
    for (key, group) in &groups.sub {
        println!("sub-group {key}: {} members", group.count());
    }
}
