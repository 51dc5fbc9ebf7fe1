/*
random_level.rs

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

//! Generate a random level.

use log::{debug, log_enabled};
use rand::Rng;
use std::error::Error;
use std::fmt;
use std::time::Instant;

use super::difficulty;
use super::layout;
use super::level::Level;
use crate::graph::nodes::Node;
use crate::graph::{Graph, GraphError};

// Max number of attempts for building an acceptable graph, otherwise an error is raised. The
// nearest neighbor wiring disconnects the goal node often enough that a large budget is needed.
const MAX_ATTEMPTS: usize = 4096;

/// Type of errors.
#[derive(Debug, PartialEq)]
pub enum LevelError {
    /// The graph construction produced inconsistent data.
    Graph(GraphError),

    /// No acceptable graph within the attempt budget.
    RetriesExhausted {
        /// Requested level number.
        level: usize,

        /// Number of attempts before giving up.
        attempts: usize,
    },
}

impl fmt::Display for LevelError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LevelError::Graph(e) => write!(f, "cannot build the level graph: {e}"),
            LevelError::RetriesExhausted { level, attempts } => {
                write!(
                    f,
                    "no solvable graph for level {level} after {attempts} attempts"
                )
            }
        }
    }
}

impl Error for LevelError {}

/// [`RandomLevel`] object.
pub struct RandomLevel {
    /// Number of the level to generate, starting at 1.
    pub number: usize,

    /// Number of attempts it took to generate the last level.
    pub attempts: usize,

    /// Duration in seconds it took to generate the last level.
    pub duration: f32,

    /// Time when the generation started. Used to compute the
    /// [`RandomLevel::duration`].
    start: Instant,
}

impl RandomLevel {
    /// Create the object.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            attempts: 0,
            duration: 0.0,
            start: Instant::now(),
        }
    }

    /// Generate and return a random level.
    ///
    /// Candidate graphs are rebuilt from scratch until the bot route reaches
    /// the goal node and crosses enough nodes for the level.
    /// All the randomness comes from the provided generator, so a seeded
    /// generator reproduces a level exactly.
    ///
    /// # Errors
    ///
    /// The method returns an error if no candidate graph is acceptable within
    /// the attempt budget. This only happens with out of range level numbers.
    pub fn generate(&mut self, rng: &mut impl Rng) -> Result<Level, LevelError> {
        self.attempts = 0;
        self.duration = 0.0;
        self.start = Instant::now();

        let num_nodes: usize = difficulty::node_count(self.number);
        let min_nodes: usize = difficulty::min_path_nodes(self.number, num_nodes);
        let source: usize = 0;
        let target: usize = num_nodes - 1;

        debug!(
            "Level {}: {num_nodes} nodes, bot route of {min_nodes} nodes or more",
            self.number
        );

        while self.attempts < MAX_ATTEMPTS {
            self.attempts += 1;

            let graph: Graph = self
                .build_graph(num_nodes, source, target, rng)
                .map_err(LevelError::Graph)?;

            match graph.dijkstra(source, target) {
                Some(solution) if solution.path.len() >= min_nodes => {
                    self.duration = self.start.elapsed().as_secs_f32();
                    debug!(
                        "Attempts = {}  Duration = {}",
                        self.attempts, self.duration
                    );
                    if log_enabled!(log::Level::Debug) {
                        graph.debug();
                    }
                    return Ok(Level {
                        number: self.number,
                        graph,
                        source,
                        target,
                        solution,
                    });
                }
                Some(solution) => {
                    debug!(
                        "    Back: the bot route has {} nodes instead of {min_nodes}",
                        solution.path.len()
                    );
                }
                None => {
                    debug!("    Back: the goal node is unreachable");
                }
            }
        }
        self.duration = self.start.elapsed().as_secs_f32();
        Err(LevelError::RetriesExhausted {
            level: self.number,
            attempts: self.attempts,
        })
    }

    /// Build a candidate graph by connecting each node to its two nearest
    /// neighbors.
    fn build_graph(
        &self,
        num_nodes: usize,
        source: usize,
        target: usize,
        rng: &mut impl Rng,
    ) -> Result<Graph, GraphError> {
        let positions: Vec<(f64, f64)> = layout::grid_positions(num_nodes, rng);
        let mut graph: Graph = Graph::new();

        for (id, (x, y)) in positions.iter().enumerate() {
            let label: String = char::from(b'A' + id as u8).to_string();
            graph.add_node(id, *x, *y, &label)?;
        }

        for from in 0..num_nodes {
            // Sort the other nodes by distance
            let nodes: &Vec<Node> = graph.get_nodes();
            let mut candidates: Vec<(usize, f64)> = Vec::with_capacity(num_nodes - 1);
            for to in 0..num_nodes {
                if to != from {
                    candidates.push((to, nodes[from].distance_to(&nodes[to])));
                }
            }
            candidates.sort_by(|a, b| a.1.total_cmp(&b.1));

            // Connect to the two closest nodes only, so that the graph stays
            // sparse
            for &(to, dist) in candidates.iter().take(2) {
                // Never give away a direct edge between the start and goal
                // nodes, except on the first level
                if self.number > 1
                    && ((from == source && to == target) || (from == target && to == source))
                {
                    continue;
                }
                let weight: u32 = (dist / 20.0).round() as u32 + rng.random_range(0..5) + 1;
                graph.add_edge(from, to, weight)?;
            }
        }
        Ok(graph)
    }
}
