// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Collected construction diagnostics.
//!
//! Construction never aborts on a single bad item; instead each skipped item
//! is recorded here so hosts can surface or assert on the outcome without
//! scraping logs.

use alloc::string::String;
use alloc::vec::Vec;

/// One item skipped during menu construction, and why.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BuildIssue {
    /// A sub-group member referenced a category that was never registered.
    #[error("cannot add element `{element}` to group `{parent}`: the main group does not exist")]
    MissingParentGroup {
        /// Group identifier carried by the skipped element.
        element: String,
        /// The stripped parent key that failed to resolve.
        parent: String,
    },
    /// A catalog entry named a category with no matching sub-group.
    #[error("cannot add catalog entry `{entry}` to category `{category}`: the category does not exist")]
    MissingCategory {
        /// Identifier of the skipped catalog entry.
        entry: String,
        /// The category that failed to resolve.
        category: String,
    },
}

/// Batched summary of everything skipped while building a menu.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BuildReport {
    /// Issues in the order they were encountered.
    pub issues: Vec<BuildIssue>,
}

impl BuildReport {
    /// True if construction completed without skipping anything.
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    /// Record one issue.
    pub fn push(&mut self, issue: BuildIssue) {
        self.issues.push(issue);
    }

    /// Append all issues from `other`.
    pub fn merge(&mut self, other: Self) {
        self.issues.extend(other.issues);
    }
}
