// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Single-pass row layout over classified menu groups.

use kurbo::Point;

use marquee_arena::ElementArena;
use marquee_menu::{ButtonGroup, MenuGroups};

use crate::config::{Spacing, Viewport};

/// Computes absolute positions for every button of a menu.
///
/// Writes rect origins only; reads widths/heights, group membership, and the
/// injected configuration. Idempotent for unchanged inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutEngine {
    /// Screen dimensions the rows are anchored to.
    pub viewport: Viewport,
    /// Padding constants.
    pub spacing: Spacing,
}

impl LayoutEngine {
    /// Construct an engine for the given viewport and spacing.
    pub const fn new(viewport: Viewport, spacing: Spacing) -> Self {
        Self { viewport, spacing }
    }

    /// Position every button: the main row bottom-anchored and centered, each
    /// sub-group as its own centered row directly above its owning button.
    ///
    /// Stale handles and empty groups are skipped without effect.
    pub fn arrange(&self, arena: &mut ElementArena, groups: &MenuGroups) {
        let center = self.viewport.center();
        let main_width = Self::main_row_width(arena, &groups.main, self.spacing.padding);

        // Historical anchor: the full row width, not half of it.
        let x_offset = center.x - main_width;

        let mut current = 1_usize;
        for id in &groups.main {
            let Some(button) = arena.get(id) else {
                continue;
            };
            let group_id = button.group_id();
            if !group_id.is_empty() {
                let w = button.rect.width();
                let h = button.rect.height();
                let n = current as f64;
                let x = x_offset + w * n + self.spacing.padding * (n - 1.0);
                let y = self.viewport.height - h - self.spacing.padding_vertical;
                if let Some(button) = arena.get_mut(id) {
                    button.set_position(Point::new(x, y));
                }
                current += 1;
            }

            // Re-read after positioning: the sub-row hangs off the final origin.
            let Some(parent) = arena.get(id) else {
                continue;
            };
            let Some(sub) = groups.sub_group(parent.group_id()) else {
                continue;
            };
            let parent_origin = parent.rect.origin();
            self.arrange_sub_row(arena, sub, parent_origin);
        }
    }

    /// Lay out one sub-group as a row centered on `parent` and sitting above it.
    fn arrange_sub_row(&self, arena: &mut ElementArena, group: &ButtonGroup, parent: Point) {
        let mut width = 0.0;
        for id in group {
            if let Some(button) = arena.get(id) {
                width += button.rect.width();
            }
        }
        width += self.spacing.sub_padding * (group.count().saturating_sub(1)) as f64;

        let x_offset = parent.x - width / 2.0;
        let y_offset = parent.y;

        let mut current = 1_usize;
        for id in group {
            let Some(button) = arena.get(id) else {
                continue;
            };
            let w = button.rect.width();
            let h = button.rect.height();
            let n = current as f64;
            let x = x_offset + w * n + self.spacing.sub_padding * (n - 1.0);
            let y = y_offset - h - self.spacing.sub_padding_vertical;
            if let Some(button) = arena.get_mut(id) {
                button.set_position(Point::new(x, y));
            }
            current += 1;
        }
    }

    /// Total main-row width: button widths minus inter-button padding.
    ///
    /// The subtraction is intentional (see the crate docs on centering).
    fn main_row_width(arena: &ElementArena, group: &ButtonGroup, padding: f64) -> f64 {
        if group.is_empty() {
            return 0.0;
        }
        let mut width = 0.0;
        for id in group {
            if let Some(button) = arena.get(id) {
                width += button.rect.width();
            }
        }
        width - padding * (group.count() - 1) as f64
    }
}
