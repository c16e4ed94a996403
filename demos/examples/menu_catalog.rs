// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog binding and visibility toggling example.
//!
//! Run:
//! - `cargo run -p marquee_demos --example menu_catalog`

use kurbo::Size;
use marquee_arena::{Button, ElementArena};
use marquee_layout::{Spacing, Viewport, construct_menu};
use marquee_menu::{CatalogEntry, toggle_group_visibility};

fn main() {
    let mut arena = ElementArena::new();
    let ids: Vec<_> = [("Roads", 40.0, 32.0), ("Water", 40.0, 32.0)]
        .iter()
        .map(|(group, w, h)| arena.insert(Button::new(*group, Size::new(*w, *h))))
        .collect();

    let catalog: Vec<CatalogEntry> = (0..5)
        .map(|i| CatalogEntry::new(format!("road_{i}"), "Roads"))
        .collect();

    let (groups, report) = construct_menu(
        &mut arena,
        &ids,
        &catalog,
        Viewport::new(800.0, 600.0),
        Spacing::default(),
    );
    assert!(report.is_clean());

    // Simulate a few clicks on the Roads category button.
    for click in 0..3 {
        toggle_group_visibility(&mut arena, &groups, "Roads");
        let visible = groups.visible_elements(&arena);
        println!("after click {click}: {} elements visible", visible.len());
        for id in &visible {
            let button = arena.get(*id).unwrap();
            println!("  {:?} at {:?}", button.action.parameter(), button.rect.origin());
        }
    }
}
