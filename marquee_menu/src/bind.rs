// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Catalog synthesis and action wiring over classified groups.

use alloc::string::String;

use marquee_arena::{Action, Button, ElementArena};
use tracing::{debug, error, info};

use crate::catalog::Catalog;
use crate::group::MenuGroups;
use crate::report::{BuildIssue, BuildReport};

/// Synthesize one toggle button per catalog entry under its category.
///
/// Entries are visited in catalog order; each entry whose `category` names a
/// registered sub-group yields a hidden [`Button::catalog_item`] appended to
/// that sub-group (after any statically classified members). Entries with an
/// unknown category are skipped and recorded in `report`. Existing group
/// members are never removed or reordered.
pub fn bind_catalog(
    arena: &mut ElementArena,
    groups: &mut MenuGroups,
    catalog: &(impl Catalog + ?Sized),
    report: &mut BuildReport,
) {
    for entry in catalog.entries() {
        let Some(group) = groups.sub.get_mut(&entry.category) else {
            error!(
                entry = entry.id.as_str(),
                category = entry.category.as_str(),
                "cannot add catalog entry to category: the category does not exist"
            );
            report.push(BuildIssue::MissingCategory {
                entry: entry.id.clone(),
                category: entry.category.clone(),
            });
            continue;
        };
        debug!(
            entry = entry.id.as_str(),
            category = entry.category.as_str(),
            "found matching category"
        );
        let id = arena.insert(Button::catalog_item(entry.id.as_str()));
        group.add(id);
    }
}

/// Wire every main-row button that owns a sub-group to a visibility toggle.
///
/// Buttons whose `group_id` keys a sub-group get
/// [`Action::ToggleGroupVisibility`] with that key as the parameter; buttons
/// without a matching sub-group keep whatever action they already had.
pub fn bind_toggles(arena: &mut ElementArena, groups: &MenuGroups) {
    for id in &groups.main {
        let Some(button) = arena.get(id) else {
            continue;
        };
        if !groups.has_sub_group(button.group_id()) {
            continue;
        }
        let group = String::from(button.group_id());
        info!(group = group.as_str(), "adding toggle action for group");
        if let Some(button) = arena.get_mut(id) {
            button.set_action(Action::ToggleGroupVisibility { group });
        }
    }
}
