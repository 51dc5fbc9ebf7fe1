/*
level.rs

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

//! A playable level.

use crate::graph::Graph;
use crate::graph::search::Solution;

/// A playable level: the graph, its endpoints, and the bot route.
///
/// Levels come from the [`super::random_level::RandomLevel`] builder or from
/// a saved [`crate::record::LevelRecord`] snapshot.
/// The bot route is computed once, when the level is built, and is then only
/// read.
#[derive(Debug, Clone)]
pub struct Level {
    /// Level number, starting at 1.
    pub number: usize,

    /// The level graph.
    pub graph: Graph,

    /// Identifier of the start node.
    pub source: usize,

    /// Identifier of the goal node.
    pub target: usize,

    /// The bot route, which is the cheapest route from the start node to the
    /// goal node.
    pub solution: Solution,
}

impl Level {
    /// Return the label of the given node, or an empty string if the node
    /// does not exist.
    pub fn get_label(&self, node: usize) -> &str {
        match self.graph.get_node(node) {
            Some(n) => &n.label,
            None => "",
        }
    }
}
