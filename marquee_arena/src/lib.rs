// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Arena: owning storage and the button model for grouped menus.
//!
//! Every displayable element of a menu lives in an [`ElementArena`]; groups and
//! layout code refer to elements through copyable [`ElementId`] handles and never
//! own them. This gives each element exactly one owner with a defined destruction
//! point, while keeping group structures cheap, non-owning views.
//!
//! ## API overview
//!
//! - [`ElementArena`]: generational slot storage; insert/remove/get by handle.
//! - [`ElementId`]: generational handle of an element.
//! - [`Button`]: per-element data (rect, group id, texture, action, flags).
//! - [`ButtonFlags`]: visibility and behavior bits.
//! - [`Action`]: the interaction behavior bound to a button.
//!
//! Sizes (rect width/height) are inputs supplied by whoever creates a [`Button`];
//! positions (rect origin) are outputs written by a layout pass through
//! [`Button::set_position`]. The arena itself attaches no meaning to either.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod arena;
mod types;

pub use arena::ElementArena;
pub use types::{Action, Button, ButtonFlags, ElementId};
