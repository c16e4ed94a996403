// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end menu construction: classify, bind, arrange.

use marquee_arena::{ElementArena, ElementId};
use marquee_menu::{BuildReport, Catalog, MenuGroups, bind_catalog, bind_toggles, classify};

use crate::config::{Spacing, Viewport};
use crate::engine::LayoutEngine;

/// Build a complete menu from a flat element sequence and a catalog.
///
/// Runs the whole pipeline synchronously on the calling thread: classify the
/// elements in `ids`, synthesize catalog buttons, wire visibility toggles,
/// and arrange everything for the given viewport. Skipped items are collected
/// in the returned [`BuildReport`]; nothing aborts construction.
pub fn construct_menu(
    arena: &mut ElementArena,
    ids: &[ElementId],
    catalog: &(impl Catalog + ?Sized),
    viewport: Viewport,
    spacing: Spacing,
) -> (MenuGroups, BuildReport) {
    let mut report = BuildReport::default();
    let mut groups = classify(arena, ids, &mut report);
    bind_catalog(arena, &mut groups, catalog, &mut report);
    bind_toggles(arena, &groups);
    LayoutEngine::new(viewport, spacing).arrange(arena, &groups);
    (groups, report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::Size;
    use marquee_arena::Button;
    use marquee_menu::{BuildIssue, CatalogEntry, toggle_group_visibility};

    #[test]
    fn full_pipeline_classifies_binds_and_arranges() {
        let mut arena = ElementArena::new();
        let ids: Vec<_> = [("Roads", 40.0, 32.0), ("Water", 60.0, 48.0)]
            .iter()
            .map(|(g, w, h)| arena.insert(Button::new(*g, Size::new(*w, *h))))
            .collect();
        let catalog = [
            CatalogEntry::new("road_straight", "Roads"),
            CatalogEntry::new("pond", "Water"),
            CatalogEntry::new("oak", "Trees"), // no such category
        ];

        let (groups, report) = construct_menu(
            &mut arena,
            &ids,
            &catalog,
            Viewport::new(800.0, 600.0),
            Spacing::default(),
        );

        // One skipped entry, everything else built.
        assert_eq!(
            report.issues,
            alloc::vec![BuildIssue::MissingCategory {
                entry: "oak".into(),
                category: "Trees".into(),
            }]
        );
        assert_eq!(groups.main.count(), 2);
        assert_eq!(groups.sub_group("Roads").unwrap().count(), 1);
        assert_eq!(groups.sub_group("Water").unwrap().count(), 1);

        // Toggles bound on both category buttons.
        for &id in &ids {
            assert_eq!(
                arena.get(id).unwrap().action.id(),
                Some("ToggleVisibilityOfGroup")
            );
        }

        // Main row arranged per the centered-row arithmetic.
        assert_eq!(
            arena.get(ids[0]).unwrap().rect.origin(),
            kurbo::Point::new(356.0, 552.0)
        );

        // Toggling reveals the synthesized button; only the main row draws before.
        assert_eq!(groups.visible_elements(&arena).len(), 2);
        assert!(toggle_group_visibility(&mut arena, &groups, "Roads"));
        assert_eq!(groups.visible_elements(&arena).len(), 3);
    }

    #[test]
    fn construction_with_empty_inputs_is_clean() {
        let mut arena = ElementArena::new();
        let catalog: Vec<CatalogEntry> = Vec::new();
        let (groups, report) = construct_menu(
            &mut arena,
            &[],
            &catalog,
            Viewport::new(800.0, 600.0),
            Spacing::default(),
        );
        assert!(report.is_clean());
        assert!(groups.main.is_empty());
        assert!(groups.sub.is_empty());
    }
}
