/*
difficulty.rs

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

//! Difficulty scaling for the level generator.
//!
//! Levels start at 1 and get harder as the player progresses: the graphs grow
//! and the bot route must cross more nodes.

/// Maximum number of nodes in a level, so that every node gets a distinct
/// letter label.
pub const MAX_NODES: usize = 26;

/// Number of nodes in the graph for the given level.
pub fn node_count(level: usize) -> usize {
    MAX_NODES.min(3 + level * 3 / 2)
}

/// Minimum number of nodes in an acceptable bot route, endpoints included.
///
/// The requirement is capped below the node count so that the small graphs of
/// the first levels stay solvable. An empty graph gets a requirement of zero.
pub fn min_path_nodes(level: usize, num_nodes: usize) -> usize {
    num_nodes.saturating_sub(1).min(2 + level / 4)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_count_grows_with_level() {
        assert_eq!(node_count(1), 4);
        assert_eq!(node_count(2), 6);
        assert_eq!(node_count(3), 7);
        assert_eq!(node_count(4), 9);
        assert_eq!(node_count(10), 18);
        assert_eq!(node_count(15), 25);
    }

    #[test]
    fn test_node_count_is_capped() {
        assert_eq!(node_count(16), MAX_NODES);
        assert_eq!(node_count(100), MAX_NODES);
    }

    #[test]
    fn test_min_path_nodes_grows_with_level() {
        assert_eq!(min_path_nodes(1, node_count(1)), 2);
        assert_eq!(min_path_nodes(3, node_count(3)), 2);
        assert_eq!(min_path_nodes(4, node_count(4)), 3);
        assert_eq!(min_path_nodes(8, node_count(8)), 4);
        assert_eq!(min_path_nodes(20, node_count(20)), 7);
    }

    #[test]
    fn test_min_path_nodes_is_capped_on_small_graphs() {
        assert_eq!(min_path_nodes(12, 4), 3);
        assert_eq!(min_path_nodes(40, 5), 4);
    }

    #[test]
    fn test_min_path_nodes_on_tiny_graphs() {
        assert_eq!(min_path_nodes(3, 1), 0);
        assert_eq!(min_path_nodes(3, 0), 0);
    }
}
