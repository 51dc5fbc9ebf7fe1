/*
edges.rs

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

//! Edges and adjacency lists of the level graph.

use log::debug;
use serde::{Deserialize, Serialize};

/// Weighted edge between two nodes.
///
/// Edges are undirected: the player and the bot can travel them in both
/// directions for the same cost.
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
pub struct Edge {
    /// First endpoint.
    pub from: usize,

    /// Second endpoint.
    pub to: usize,

    /// Cost of traveling the edge.
    pub weight: u32,
}

/// Represent the adjacency lists of the level graph.
#[derive(Debug, Clone)]
pub struct Adjacency {
    /// For each node identifier, the list of the adjacent nodes with the
    /// weight of the connecting edge.
    lists: Vec<Vec<(usize, u32)>>,
}

impl Default for Adjacency {
    fn default() -> Self {
        Self::new()
    }
}

impl Adjacency {
    /// Create the adjacency object that stores the edges of every node.
    pub fn new() -> Self {
        Self { lists: Vec::new() }
    }

    /// Remove all the adjacency lists from the object.
    pub fn clear(&mut self) {
        self.lists.clear();
    }

    /// Add an empty adjacency list for the next node.
    pub fn grow(&mut self) {
        self.lists.push(Vec::new());
    }

    /// Number of nodes covered by the adjacency lists.
    pub fn len(&self) -> usize {
        self.lists.len()
    }

    /// Whether the object covers no node at all.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Record the edge between the given nodes in both directions.
    pub fn insert(&mut self, from: usize, to: usize, weight: u32) {
        self.lists[from].push((to, weight));
        self.lists[to].push((from, weight));
    }

    /// Whether an edge exists between the given nodes.
    pub fn contains(&self, from: usize, to: usize) -> bool {
        self.get_adjacent(from).iter().any(|(n, _)| *n == to)
    }

    /// For the given node, return all the adjacent nodes with the edge
    /// weights.
    pub fn get_adjacent(&self, node: usize) -> &[(usize, u32)] {
        match self.lists.get(node) {
            Some(l) => l,
            None => &[],
        }
    }

    /// Return the weight of the edge between the given nodes, or None if the
    /// nodes are not connected.
    pub fn get_weight(&self, from: usize, to: usize) -> Option<u32> {
        self.get_adjacent(from)
            .iter()
            .find(|(n, _)| *n == to)
            .map(|(_, w)| *w)
    }

    /// Print the adjacency lists.
    pub fn debug(&self) {
        let mut s: String = String::new();

        for (node, adjacent) in self.lists.iter().enumerate() {
            s.clear();
            s.push_str(&format!("{node:>3} -->"));
            for (neighbor, weight) in adjacent {
                s.push_str(&format!(" {neighbor}({weight})"));
            }
            debug!("{s}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_is_symmetric() {
        let mut adjacency: Adjacency = Adjacency::new();
        for _ in 0..3 {
            adjacency.grow();
        }
        adjacency.insert(0, 2, 7);

        assert!(adjacency.contains(0, 2));
        assert!(adjacency.contains(2, 0));
        assert!(!adjacency.contains(0, 1));
        assert_eq!(adjacency.get_weight(0, 2), Some(7));
        assert_eq!(adjacency.get_weight(2, 0), Some(7));
        assert_eq!(adjacency.get_weight(1, 2), None);
    }

    #[test]
    fn test_get_adjacent_unknown_node() {
        let adjacency: Adjacency = Adjacency::new();

        assert!(adjacency.get_adjacent(42).is_empty());
        assert!(!adjacency.contains(42, 0));
        assert_eq!(adjacency.get_weight(42, 0), None);
    }

    #[test]
    fn test_clear() {
        let mut adjacency: Adjacency = Adjacency::new();
        adjacency.grow();
        adjacency.grow();
        adjacency.insert(0, 1, 3);
        assert_eq!(adjacency.len(), 2);

        adjacency.clear();

        assert_eq!(adjacency.len(), 0);
        assert!(adjacency.is_empty());
        assert!(!adjacency.contains(0, 1));
    }
}
