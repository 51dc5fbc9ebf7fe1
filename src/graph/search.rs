/*
search.rs

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

//! Cheapest route search with the Dijkstra algorithm.
//!
//! The search stops as soon as the goal node leaves the priority queue, so
//! only the part of the graph that is cheaper than the goal gets explored.
//! The queue is not purged when the distance of a node improves. The stale
//! entries are harmless because a relaxation never degrades a recorded
//! distance.

use log::debug;

use super::Graph;
use super::queue::PriorityQueue;

/// Cheapest route between two nodes.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Total cost of the route.
    pub distance: u32,

    /// Nodes of the route, from the start node to the goal node.
    pub path: Vec<usize>,
}

impl Graph {
    /// Return the cheapest route between the given nodes.
    ///
    /// Return None if the goal node cannot be reached from the start node, or
    /// if one of the nodes does not exist.
    /// When the start and goal nodes are the same, the route contains that
    /// single node and costs nothing.
    pub fn dijkstra(&self, start: usize, end: usize) -> Option<Solution> {
        if start >= self.len() || end >= self.len() {
            return None;
        }
        debug!("Searching the cheapest route from {start} to {end}");

        let mut distances: Vec<u32> = vec![u32::MAX; self.len()];
        let mut previous: Vec<Option<usize>> = vec![None; self.len()];
        let mut queue: PriorityQueue = PriorityQueue::new();

        distances[start] = 0;
        queue.enqueue(start, 0);

        while let Some(entry) = queue.dequeue() {
            let current: usize = entry.node;

            // The goal node leaves the queue with its final distance
            if current == end {
                break;
            }

            for &(neighbor, weight) in self.get_adjacent(current) {
                let candidate: u32 = distances[current].saturating_add(weight);
                if candidate < distances[neighbor] {
                    distances[neighbor] = candidate;
                    previous[neighbor] = Some(current);
                    queue.enqueue(neighbor, candidate);
                }
            }
        }

        // Walk the predecessor chain back from the goal node
        let mut path: Vec<usize> = Vec::new();
        let mut current: Option<usize> = Some(end);
        while let Some(node) = current {
            path.push(node);
            current = previous[node];
        }
        path.reverse();

        // The chain does not reach back to the start node when the goal node
        // is unreachable
        if path[0] != start {
            debug!("No route from {start} to {end}");
            return None;
        }
        Some(Solution {
            distance: distances[end],
            path,
        })
    }
}
