// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Layout: deterministic row layout for two-tier build menus.
//!
//! ## Overview
//!
//! Given the classified and bound [`MenuGroups`](marquee_menu::MenuGroups)
//! structure, [`LayoutEngine::arrange`] computes absolute screen positions for
//! every button: the main row is anchored to the bottom of the viewport, and
//! each sub-group forms its own centered row directly above its owning
//! category button. Only rect origins are written; sizes, group membership,
//! and actions are never touched.
//!
//! Layout depends solely on current widths/heights, group membership, the
//! [`Spacing`] constants, and the [`Viewport`] dimensions, so repeated
//! invocation with unchanged inputs produces identical output.
//!
//! ## A note on main-row centering
//!
//! The main row is anchored at `center.x - row_width` (not halved) and its
//! row width subtracts inter-button padding; sub-rows use the conventional
//! halved form and add padding. Both formulas reproduce the shipped menu's
//! placement exactly and are covered by tests; confirm against visual
//! acceptance before changing either.
//!
//! ## Pipeline
//!
//! [`construct_menu`] runs the full sequence — classify, bind catalog, bind
//! toggles, arrange — in one synchronous call.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod construct;
mod engine;

pub use config::{Spacing, Viewport};
pub use construct::construct_menu;
pub use engine::LayoutEngine;
