// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The external item catalog consumed during binding.
//!
//! The catalog is read-only to this crate and injected explicitly; where its
//! data comes from (config files, a tile manager, test fixtures) is the
//! host's business.

use alloc::string::String;
use alloc::vec::Vec;

/// One selectable item and the category it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable identifier of the item (becomes the action parameter).
    pub id: String,
    /// Category key; must match a registered sub-group to produce a button.
    pub category: String,
}

impl CatalogEntry {
    /// Convenience constructor.
    pub fn new(id: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            category: category.into(),
        }
    }
}

/// A source of catalog entries.
///
/// Implemented for slices and vectors so fixtures stay trivial; hosts with a
/// richer registry implement it over their own storage.
pub trait Catalog {
    /// Iterate all entries in catalog order.
    fn entries(&self) -> impl Iterator<Item = &CatalogEntry>;
}

impl Catalog for [CatalogEntry] {
    fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.iter()
    }
}

impl Catalog for Vec<CatalogEntry> {
    fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.iter()
    }
}

impl<const N: usize> Catalog for [CatalogEntry; N] {
    fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        self.iter()
    }
}
