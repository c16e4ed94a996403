// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Generational slot storage for menu elements.

use alloc::vec::Vec;

use crate::types::{Button, ElementId};

/// Owning storage for every menu element.
///
/// Slots are reused after removal; the generation counter on [`ElementId`]
/// keeps stale handles from aliasing newly inserted elements.
pub struct ElementArena {
    slots: Vec<Option<Button>>,
    generations: Vec<u32>, // last generation per slot (persists across frees)
    free_list: Vec<usize>,
}

impl core::fmt::Debug for ElementArena {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let total = self.slots.len();
        let alive = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("ElementArena")
            .field("slots_total", &total)
            .field("slots_alive", &alive)
            .field("free_list", &self.free_list.len())
            .finish_non_exhaustive()
    }
}

impl Default for ElementArena {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementArena {
    /// Create a new empty arena.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
        }
    }

    /// Insert an element, returning its handle.
    pub fn insert(&mut self, button: Button) -> ElementId {
        if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(button);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            ElementId::new(idx as u32, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(button));
            self.generations.push(generation);
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            ElementId::new((self.slots.len() - 1) as u32, generation)
        }
    }

    /// Remove an element. Stale handles are ignored.
    pub fn remove(&mut self, id: ElementId) {
        if !self.is_alive(id) {
            return;
        }
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
    }

    /// Returns true if `id` refers to a live element.
    ///
    /// An `ElementId` is considered live if its slot is occupied and its
    /// generation matches the current generation stored for that slot.
    pub fn is_alive(&self, id: ElementId) -> bool {
        self.slots
            .get(id.idx())
            .map(|s| s.is_some() && self.generations[id.idx()] == id.1)
            .unwrap_or(false)
    }

    /// Borrow an element, or `None` if the handle is stale.
    pub fn get(&self, id: ElementId) -> Option<&Button> {
        if self.generations.get(id.idx()) != Some(&id.1) {
            return None;
        }
        self.slots.get(id.idx())?.as_ref()
    }

    /// Mutably borrow an element, or `None` if the handle is stale.
    pub fn get_mut(&mut self, id: ElementId) -> Option<&mut Button> {
        if self.generations.get(id.idx()) != Some(&id.1) {
            return None;
        }
        self.slots.get_mut(id.idx())?.as_mut()
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// True if no elements are live.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterate live elements in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (ElementId, &Button)> {
        self.slots.iter().enumerate().filter_map(|(i, s)| {
            let button = s.as_ref()?;
            #[allow(
                clippy::cast_possible_truncation,
                reason = "ElementId uses 32-bit indices by design."
            )]
            Some((ElementId::new(i as u32, self.generations[i]), button))
        })
    }
}
