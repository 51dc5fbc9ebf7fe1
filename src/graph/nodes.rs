/*
nodes.rs

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

//! Nodes of the level graph.

use serde::{Deserialize, Serialize};

/// Node of the level graph.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Node {
    /// Node identifier. Identifiers are also indexes in the graph node list.
    pub id: usize,

    /// Horizontal position of the node in the level area.
    pub x: f64,

    /// Vertical position of the node in the level area.
    pub y: f64,

    /// Label displayed on the node, a letter from A to Z.
    pub label: String,
}

impl Node {
    /// Create a [`Node`] object.
    pub fn new(id: usize, x: f64, y: f64, label: &str) -> Self {
        Self {
            id,
            x,
            y,
            label: label.to_string(),
        }
    }

    /// Euclidean distance between this node and the given node.
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx: f64 = self.x - other.x;
        let dy: f64 = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}
