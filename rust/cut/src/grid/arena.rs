// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vector-backed storage for cell entries.
//!
//! Cell lists are singly linked through `u32` indices into one arena, so a
//! grid owns all of its entries in a single allocation and dropping the grid
//! frees them at once.

use gmcut_model::FaceKey;

use crate::error::{Error, Result};

/// One link of a cell's list: a non-owning face reference and the index of
/// the next entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellEntry {
    pub element: FaceKey,
    pub next: Option<u32>,
}

/// Growable arena of cell entries. Grows in whole blocks with fallible
/// reservation.
#[derive(Debug, Clone)]
pub struct CellEntryArena {
    entries: Vec<CellEntry>,
    block_size: usize,
}

impl CellEntryArena {
    pub fn new(block_size: usize) -> Self {
        Self {
            entries: Vec::new(),
            block_size: block_size.max(1),
        }
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn set_block_size(&mut self, block_size: usize) {
        self.block_size = block_size.max(1);
    }

    /// Appends an entry and returns its index.
    pub fn push(&mut self, entry: CellEntry) -> Result<u32> {
        let index =
            u32::try_from(self.entries.len()).map_err(|_| Error::ArenaFull(self.entries.len()))?;
        if self.entries.len() == self.entries.capacity() {
            self.entries.try_reserve_exact(self.block_size)?;
        }
        self.entries.push(entry);
        Ok(index)
    }

    pub fn get(&self, index: u32) -> Option<&CellEntry> {
        self.entries.get(index as usize)
    }

    /// Number of entries handed out since the last clear.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.entries.capacity()
    }

    /// Forgets all entries, keeping the allocation.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
