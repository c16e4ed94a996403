// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Menu: grouping, catalog binding, and action wiring for build menus.
//!
//! ## Overview
//!
//! A build menu starts as a flat sequence of buttons tagged with group
//! identifiers. This crate partitions that sequence into one main row of
//! top-level categories plus a map of named sub-groups, synthesizes one toggle
//! button per catalog item under its category, and binds each category button
//! to a visibility toggle for its sub-group. It does not compute positions
//! (see the layout crate) and it does not render (see [`DrawSink`]).
//!
//! ## Naming convention
//!
//! A group identifier containing [`SUB_GROUP_MARKER`] (`"_sub"`) marks a
//! sub-group member; stripping the marker yields the parent category key
//! (`"Roads_sub"` → `"Roads"`). Identifiers without the marker are top-level
//! categories; an empty identifier opts the element out of grouping entirely.
//!
//! ## Construction is best-effort
//!
//! A sub-group member without a registered parent, or a catalog entry whose
//! category matches no sub-group, is skipped and recorded as a
//! [`BuildIssue`] in the returned [`BuildReport`] (and logged via `tracing`).
//! No single bad item aborts menu construction.
//!
//! ## Workflow
//!
//! 1) [`classify`] the flat element sequence into [`MenuGroups`].
//! 2) [`bind_catalog`] to synthesize per-item toggle buttons.
//! 3) [`bind_toggles`] to wire each category button to its sub-group.
//! 4) Hand the groups to a layout pass, then walk [`MenuGroups::draw`] per frame.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod bind;
pub mod catalog;
pub mod classify;
pub mod group;
pub mod report;

pub use bind::{bind_catalog, bind_toggles};
pub use catalog::{Catalog, CatalogEntry};
pub use classify::{SUB_GROUP_MARKER, classify, parent_key};
pub use group::{ButtonGroup, DrawSink, MenuGroups, toggle_group_visibility};
pub use report::{BuildIssue, BuildReport};
