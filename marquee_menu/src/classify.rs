// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Partition a flat element sequence into a main row and named sub-groups.

use alloc::string::String;

use marquee_arena::{ElementArena, ElementId};
use tracing::error;

use crate::group::MenuGroups;
use crate::report::{BuildIssue, BuildReport};

/// Marker substring that tags a group identifier as a sub-group member.
pub const SUB_GROUP_MARKER: &str = "_sub";

/// Strip the first marker occurrence from a marked identifier, yielding the
/// parent category key. Returns `None` for unmarked identifiers.
pub fn parent_key(group_id: &str) -> Option<String> {
    let at = group_id.find(SUB_GROUP_MARKER)?;
    let mut key = String::with_capacity(group_id.len() - SUB_GROUP_MARKER.len());
    key.push_str(&group_id[..at]);
    key.push_str(&group_id[at + SUB_GROUP_MARKER.len()..]);
    Some(key)
}

/// Partition `ids` into a [`MenuGroups`] structure.
///
/// Two passes over the input. The first registers every element with an
/// unmarked, non-empty `group_id` as a top-level category: the element joins
/// the main row and an empty sub-group is created under its identifier. The
/// second places every marked element into the sub-group named by its
/// stripped key, preserving input-relative order. Classification therefore
/// does not care whether a member precedes its category in the input.
///
/// A marked element whose stripped key matches no registered category is
/// skipped and recorded in `report`; elements with an empty `group_id` are
/// ignored entirely. Stale handles are ignored.
pub fn classify(arena: &ElementArena, ids: &[ElementId], report: &mut BuildReport) -> MenuGroups {
    let mut groups = MenuGroups::default();

    // Pass one: register categories so member placement never depends on input order.
    for &id in ids {
        let Some(button) = arena.get(id) else {
            continue;
        };
        let group_id = button.group_id();
        if group_id.is_empty() || group_id.contains(SUB_GROUP_MARKER) {
            continue;
        }
        groups.ensure_sub_group(group_id);
        groups.main.add(id);
    }

    // Pass two: place members.
    for &id in ids {
        let Some(button) = arena.get(id) else {
            continue;
        };
        let group_id = button.group_id();
        if group_id.is_empty() {
            continue;
        }
        let Some(parent) = parent_key(group_id) else {
            continue;
        };
        if let Some(group) = groups.sub.get_mut(&parent) {
            group.add(id);
        } else {
            error!(
                element = group_id,
                group = parent.as_str(),
                "cannot add element to group: the main group does not exist"
            );
            report.push(BuildIssue::MissingParentGroup {
                element: String::from(group_id),
                parent,
            });
        }
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::Size;
    use marquee_arena::Button;

    use crate::group::ButtonGroup;

    fn insert_all(arena: &mut ElementArena, group_ids: &[&str]) -> Vec<ElementId> {
        group_ids
            .iter()
            .map(|g| arena.insert(Button::new(*g, Size::new(40.0, 32.0))))
            .collect()
    }

    #[test]
    fn parent_key_strips_first_marker() {
        assert_eq!(parent_key("Roads_sub").as_deref(), Some("Roads"));
        assert_eq!(parent_key("_subRoads").as_deref(), Some("Roads"));
        assert_eq!(parent_key("Roads"), None);
        assert_eq!(parent_key(""), None);
    }

    #[test]
    fn categories_get_empty_sub_groups_up_front() {
        let mut arena = ElementArena::new();
        let ids = insert_all(&mut arena, &["Roads", "Water"]);
        let mut report = BuildReport::default();
        let groups = classify(&arena, &ids, &mut report);

        assert!(report.is_clean());
        assert_eq!(groups.main.count(), 2);
        assert!(groups.has_sub_group("Roads"));
        assert!(groups.has_sub_group("Water"));
        assert!(groups.sub_group("Roads").is_some_and(ButtonGroup::is_empty));
    }

    #[test]
    fn members_join_their_category_in_input_order() {
        let mut arena = ElementArena::new();
        let ids = insert_all(&mut arena, &["Roads", "Roads_sub", "Roads_sub", "Water"]);
        let mut report = BuildReport::default();
        let groups = classify(&arena, &ids, &mut report);

        assert!(report.is_clean());
        let roads: Vec<_> = groups.sub_group("Roads").unwrap().iter().collect();
        assert_eq!(roads, alloc::vec![ids[1], ids[2]]);
        assert!(groups.sub_group("Water").unwrap().is_empty());
    }

    #[test]
    fn member_before_category_still_classifies() {
        let mut arena = ElementArena::new();
        let ids = insert_all(&mut arena, &["Roads_sub", "Roads"]);
        let mut report = BuildReport::default();
        let groups = classify(&arena, &ids, &mut report);

        assert!(report.is_clean(), "order must not matter");
        let roads: Vec<_> = groups.sub_group("Roads").unwrap().iter().collect();
        assert_eq!(roads, alloc::vec![ids[0]]);
    }

    #[test]
    fn orphan_member_is_skipped_and_reported() {
        let mut arena = ElementArena::new();
        let ids = insert_all(&mut arena, &["Roads", "Water_sub"]);
        let mut report = BuildReport::default();
        let groups = classify(&arena, &ids, &mut report);

        assert_eq!(
            report.issues,
            alloc::vec![BuildIssue::MissingParentGroup {
                element: String::from("Water_sub"),
                parent: String::from("Water"),
            }]
        );
        // The orphan appears nowhere.
        assert!(!groups.has_sub_group("Water"));
        assert_eq!(groups.main.count(), 1);
        for group in groups.sub.values() {
            assert!(!group.iter().any(|id| id == ids[1]));
        }
    }

    #[test]
    fn empty_group_id_is_ignored_entirely() {
        let mut arena = ElementArena::new();
        let ids = insert_all(&mut arena, &["", "Roads", ""]);
        let mut report = BuildReport::default();
        let groups = classify(&arena, &ids, &mut report);

        assert!(report.is_clean());
        assert_eq!(groups.main.count(), 1);
        let all: Vec<_> = groups
            .main
            .iter()
            .chain(groups.sub.values().flat_map(|g| g.iter()))
            .collect();
        assert!(!all.contains(&ids[0]));
        assert!(!all.contains(&ids[2]));
    }
}
