// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Non-owning button groups and the per-frame draw traversal.

use alloc::collections::BTreeMap;
use alloc::string::String;
use alloc::vec::Vec;

use marquee_arena::{Button, ElementArena, ElementId};

/// An ordered, non-owning collection of element handles.
///
/// Groups are views over an [`ElementArena`]; they never own elements and
/// never outlive the arena's say on liveness.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ButtonGroup {
    members: Vec<ElementId>,
}

impl ButtonGroup {
    /// Create an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element; insertion order is preserved.
    pub fn add(&mut self, id: ElementId) {
        self.members.push(id);
    }

    /// Number of members.
    pub fn count(&self) -> usize {
        self.members.len()
    }

    /// True if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Iterate members in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = ElementId> + '_ {
        self.members.iter().copied()
    }
}

impl<'a> IntoIterator for &'a ButtonGroup {
    type Item = ElementId;
    type IntoIter = core::iter::Copied<core::slice::Iter<'a, ElementId>>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter().copied()
    }
}

/// The two-tier group structure of a build menu.
///
/// `main` holds the top-level category buttons in classification order; `sub`
/// maps each category key to its (possibly empty) sub-group. Every key in
/// `sub` corresponds to exactly one main-group button with that `group_id`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MenuGroups {
    /// Top-level category buttons.
    pub main: ButtonGroup,
    /// Sub-groups keyed by their parent category identifier.
    pub sub: BTreeMap<String, ButtonGroup>,
}

/// Receives visible elements during [`MenuGroups::draw`].
///
/// Rendering stays on the host side of this seam; the traversal only decides
/// *which* elements are drawn and in what order.
pub trait DrawSink {
    /// Draw one visible element.
    fn draw(&mut self, id: ElementId, button: &Button);
}

impl<F: FnMut(ElementId, &Button)> DrawSink for F {
    fn draw(&mut self, id: ElementId, button: &Button) {
        self(id, button);
    }
}

impl MenuGroups {
    /// Borrow the sub-group for `key`, if registered.
    pub fn sub_group(&self, key: &str) -> Option<&ButtonGroup> {
        self.sub.get(key)
    }

    /// True if a sub-group is registered under `key`.
    pub fn has_sub_group(&self, key: &str) -> bool {
        self.sub.contains_key(key)
    }

    /// Register an empty sub-group for `key` if absent.
    pub(crate) fn ensure_sub_group(&mut self, key: &str) -> &mut ButtonGroup {
        self.sub.entry(String::from(key)).or_default()
    }

    /// Draw every visible element: the main row first, then each sub-group in
    /// key order, members in insertion order. Stale handles are skipped.
    pub fn draw(&self, arena: &ElementArena, sink: &mut impl DrawSink) {
        for id in &self.main {
            if let Some(button) = arena.get(id) {
                if button.is_visible() {
                    sink.draw(id, button);
                }
            }
        }
        for group in self.sub.values() {
            for id in group {
                if let Some(button) = arena.get(id) {
                    if button.is_visible() {
                        sink.draw(id, button);
                    }
                }
            }
        }
    }

    /// The sequence [`Self::draw`] would visit, as a list of handles.
    pub fn visible_elements(&self, arena: &ElementArena) -> Vec<ElementId> {
        let mut out = Vec::new();
        self.draw(arena, &mut |id, _: &Button| out.push(id));
        out
    }
}

/// Flip the visibility of every element in the sub-group named `key`.
///
/// This is the behavior a bound
/// [`Action::ToggleGroupVisibility`](marquee_arena::Action) dispatches to.
/// Returns `false` without touching anything if `key` is not registered.
pub fn toggle_group_visibility(arena: &mut ElementArena, groups: &MenuGroups, key: &str) -> bool {
    let Some(group) = groups.sub_group(key) else {
        return false;
    };
    for id in group {
        if let Some(button) = arena.get_mut(id) {
            let visible = button.is_visible();
            button.set_visibility(!visible);
        }
    }
    true
}
