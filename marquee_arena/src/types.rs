// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the arena: element identifiers, flags, actions, and button data.

use alloc::string::String;
use kurbo::{Point, Rect, Size};

/// Identifier for an element in the arena.
///
/// This is a small, copyable handle that stays stable across updates but becomes
/// invalid when the underlying slot is reused.
/// It consists of a slot index and a generation counter.
///
/// ## Semantics
///
/// - On insert, a fresh slot is allocated with generation `1`.
/// - On remove, the slot is freed; any existing `ElementId` that pointed to that slot is now stale.
/// - On reuse of a freed slot, its generation is incremented, producing a new, distinct `ElementId`.
///
/// ### Liveness
///
/// Use [`ElementArena::is_alive`](crate::ElementArena::is_alive) to check whether an
/// `ElementId` still refers to a live element.
/// Stale `ElementId`s never alias a different live element because the generation must match.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ElementId(pub(crate) u32, pub(crate) u32);

impl ElementId {
    pub(crate) const fn new(idx: u32, generation: u32) -> Self {
        Self(idx, generation)
    }

    pub(crate) const fn idx(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Button flags controlling visibility and interaction behavior.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ButtonFlags: u8 {
        /// Element is visible (participates in the draw traversal).
        const VISIBLE     = 0b0000_0001;
        /// Element latches on click instead of firing once.
        const TOGGLE      = 0b0000_0010;
        /// Element is drawn with the image-button frame around its texture.
        const IMAGE_FRAME = 0b0000_0100;
    }
}

impl Default for ButtonFlags {
    fn default() -> Self {
        Self::VISIBLE
    }
}

/// The interaction behavior bound to a button.
///
/// Carries its own parameter, so a bound button is self-describing. The wire
/// names exposed by [`Action::id`] are stable and match what hosts historically
/// dispatched on.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum Action {
    /// No behavior bound.
    #[default]
    None,
    /// Select a tile type for placement.
    ChangeTileType {
        /// Catalog identifier of the tile to select.
        tile: String,
    },
    /// Flip the visibility of a named sub-group.
    ToggleGroupVisibility {
        /// Key of the sub-group to toggle.
        group: String,
    },
}

impl Action {
    /// Stable wire name of this action, or `None` if nothing is bound.
    pub fn id(&self) -> Option<&'static str> {
        match self {
            Self::None => None,
            Self::ChangeTileType { .. } => Some("ChangeTileType"),
            Self::ToggleGroupVisibility { .. } => Some("ToggleVisibilityOfGroup"),
        }
    }

    /// Parameter passed to the behavior on dispatch, if any.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::None => None,
            Self::ChangeTileType { tile } => Some(tile),
            Self::ToggleGroupVisibility { group } => Some(group),
        }
    }
}

/// Texture used for synthesized catalog buttons that carry no icon of their own.
pub(crate) const NO_ICON_TEXTURE: &str = "Button_NoIcon";

/// Per-element data for a menu button.
///
/// `rect` width/height are sizing inputs; the origin is written by layout via
/// [`Button::set_position`]. An empty `group_id` means the element takes no part
/// in grouping.
#[derive(Clone, Debug, PartialEq)]
pub struct Button {
    /// Bounds. Size is an input; origin is a layout output.
    pub rect: Rect,
    /// Group identifier, empty for ungrouped elements.
    pub group_id: String,
    /// Texture to draw.
    pub texture_id: String,
    /// Behavior bound to this button.
    pub action: Action,
    /// Visibility and behavior flags.
    pub flags: ButtonFlags,
}

impl Default for Button {
    fn default() -> Self {
        Self {
            rect: Rect::ZERO,
            group_id: String::new(),
            texture_id: String::new(),
            action: Action::None,
            flags: ButtonFlags::default(),
        }
    }
}

impl Button {
    /// Create a visible button with the given group id and size, positioned at the origin.
    pub fn new(group_id: impl Into<String>, size: Size) -> Self {
        Self {
            rect: Rect::from_origin_size(Point::ORIGIN, size),
            group_id: group_id.into(),
            ..Self::default()
        }
    }

    /// Create a hidden toggle button for one catalog item.
    ///
    /// Zero-sized until the host assigns artwork, framed, and bound to
    /// [`Action::ChangeTileType`] for the given tile.
    pub fn catalog_item(tile: impl Into<String>) -> Self {
        Self {
            rect: Rect::ZERO,
            texture_id: String::from(NO_ICON_TEXTURE),
            action: Action::ChangeTileType { tile: tile.into() },
            flags: ButtonFlags::TOGGLE | ButtonFlags::IMAGE_FRAME,
            ..Self::default()
        }
    }

    /// Move the button to `origin`, preserving its size.
    pub fn set_position(&mut self, origin: Point) {
        self.rect = self.rect.with_origin(origin);
    }

    /// Show or hide the button.
    pub fn set_visibility(&mut self, visible: bool) {
        self.flags.set(ButtonFlags::VISIBLE, visible);
    }

    /// Make the button latch on click (or not).
    pub fn set_toggle(&mut self, toggle: bool) {
        self.flags.set(ButtonFlags::TOGGLE, toggle);
    }

    /// Draw (or not) the image-button frame around the texture.
    pub fn set_image_frame(&mut self, framed: bool) {
        self.flags.set(ButtonFlags::IMAGE_FRAME, framed);
    }

    /// Assign the texture.
    pub fn set_texture_id(&mut self, texture: impl Into<String>) {
        self.texture_id = texture.into();
    }

    /// Bind a behavior.
    pub fn set_action(&mut self, action: Action) {
        self.action = action;
    }

    /// Whether the button participates in the draw traversal.
    pub fn is_visible(&self) -> bool {
        self.flags.contains(ButtonFlags::VISIBLE)
    }

    /// Group identifier, empty for ungrouped elements.
    pub fn group_id(&self) -> &str {
        &self.group_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_position_preserves_size() {
        let mut b = Button::new("Roads", Size::new(40.0, 32.0));
        b.set_position(Point::new(356.0, 552.0));
        assert_eq!(b.rect.origin(), Point::new(356.0, 552.0));
        assert_eq!(b.rect.size(), Size::new(40.0, 32.0));
    }

    #[test]
    fn catalog_item_defaults() {
        let b = Button::catalog_item("road_straight");
        assert_eq!(b.rect, Rect::ZERO);
        assert!(!b.is_visible(), "catalog items start hidden");
        assert!(b.flags.contains(ButtonFlags::TOGGLE));
        assert!(b.flags.contains(ButtonFlags::IMAGE_FRAME));
        assert_eq!(b.texture_id, "Button_NoIcon");
        assert_eq!(b.action.id(), Some("ChangeTileType"));
        assert_eq!(b.action.parameter(), Some("road_straight"));
        assert!(b.group_id().is_empty());
    }

    #[test]
    fn action_wire_names() {
        assert_eq!(Action::None.id(), None);
        assert_eq!(Action::None.parameter(), None);
        let toggle = Action::ToggleGroupVisibility {
            group: String::from("Roads"),
        };
        assert_eq!(toggle.id(), Some("ToggleVisibilityOfGroup"));
        assert_eq!(toggle.parameter(), Some("Roads"));
    }

    #[test]
    fn visibility_flag_roundtrip() {
        let mut b = Button::default();
        assert!(b.is_visible());
        b.set_visibility(false);
        assert!(!b.is_visible());
        b.set_visibility(true);
        assert!(b.is_visible());
    }
}
