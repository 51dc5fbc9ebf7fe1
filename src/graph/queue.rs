/*
queue.rs

Copyright 2026 Hervé Quatremain

This file is part of Dijiduel.

Dijiduel is free software: you can redistribute it and/or modify it under the
terms of the GNU General Public License as published by the Free Software
Foundation, either version 3 of the License, or (at your option) any later
version.

Dijiduel is distributed in the hope that it will be useful, but WITHOUT ANY
WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR
A PARTICULAR PURPOSE. See the GNU General Public License for more details.

You should have received a copy of the GNU General Public License along with
Dijiduel. If not, see <https://www.gnu.org/licenses/>.

SPDX-License-Identifier: GPL-3.0-or-later
*/

//! Minimum priority queue for the shortest path search.
//!
//! The queue keeps its entries in a vector sorted by ascending priority.
//! Insertions cost O(n), which is adequate for the small graphs of the game.

/// Entry in the priority queue.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct QueueEntry {
    /// Node identifier.
    pub node: usize,

    /// Priority of the entry, the tentative distance from the start node.
    pub priority: u32,
}

/// Minimum priority queue backed by a sorted vector.
///
/// The same node can be queued several times with different priorities.
/// Consumers must be prepared to dequeue stale entries for nodes whose
/// distance improved after the entry was queued.
#[derive(Debug, Clone)]
pub struct PriorityQueue {
    /// Entries sorted by ascending priority.
    entries: Vec<QueueEntry>,
}

impl Default for PriorityQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl PriorityQueue {
    /// Create a [`PriorityQueue`] object.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Add a node to the queue.
    ///
    /// The entry is inserted before the first entry with a strictly greater
    /// priority. Entries with equal priorities stay in insertion order.
    pub fn enqueue(&mut self, node: usize, priority: u32) {
        let pos: usize = self
            .entries
            .iter()
            .position(|entry| entry.priority > priority)
            .unwrap_or(self.entries.len());
        self.entries.insert(pos, QueueEntry { node, priority });
    }

    /// Remove and return the entry with the lowest priority.
    ///
    /// Return None if the queue is empty.
    pub fn dequeue(&mut self) -> Option<QueueEntry> {
        if self.entries.is_empty() {
            None
        } else {
            Some(self.entries.remove(0))
        }
    }

    /// Number of entries in the queue.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the queue is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
