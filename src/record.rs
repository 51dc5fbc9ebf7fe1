/*
record.rs

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

//! Serializable snapshot of a level.
//!
//! A [`LevelRecord`] object stores everything needed to rebuild a
//! [`Level`] object without running the generator again: the level number,
//! the nodes, the edges, the start and goal nodes, and the bot route with its
//! cost.
//! The bot route is restored as saved and is never recomputed.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;

use crate::generator::level::Level;
use crate::graph::edges::Edge;
use crate::graph::nodes::Node;
use crate::graph::search::Solution;
use crate::graph::{Graph, GraphError};

/// Type of errors when rebuilding a level from a record.
#[derive(Debug, PartialEq)]
pub enum RecordError {
    /// The nodes or the edges of the record are inconsistent.
    Graph(GraphError),

    /// The start or goal node does not exist in the graph.
    UnknownEndpoint(usize),

    /// The stored bot route does not join the start node to the goal node.
    CorruptSolution,
}

impl fmt::Display for RecordError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            RecordError::Graph(e) => write!(f, "invalid graph data: {e}"),
            RecordError::UnknownEndpoint(node) => {
                write!(f, "the endpoint {node} does not exist in the graph")
            }
            RecordError::CorruptSolution => {
                write!(f, "the bot route does not join the start node to the goal node")
            }
        }
    }
}

impl Error for RecordError {}

/// Serializable snapshot of a [`Level`] object.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct LevelRecord {
    /// Level number.
    pub level: usize,

    /// Nodes of the level graph.
    pub nodes: Vec<Node>,

    /// Edges of the level graph.
    pub edges: Vec<Edge>,

    /// Identifier of the start node.
    pub source: usize,

    /// Identifier of the goal node.
    pub target: usize,

    /// Cost of the bot route.
    pub optimal_distance: u32,

    /// Nodes of the bot route.
    pub optimal_path: Vec<usize>,
}

impl LevelRecord {
    /// Create a [`LevelRecord`] object from the given level.
    pub fn new(level: &Level) -> Self {
        Self {
            level: level.number,
            nodes: level.graph.get_nodes().clone(),
            edges: level.graph.get_edges().clone(),
            source: level.source,
            target: level.target,
            optimal_distance: level.solution.distance,
            optimal_path: level.solution.path.clone(),
        }
    }

    /// Rebuild the [`Level`] object for the record.
    ///
    /// # Errors
    ///
    /// The method returns an error if the record does not describe a valid
    /// level, for example when the record file was edited by hand.
    pub fn to_level(&self) -> Result<Level, RecordError> {
        let mut graph: Graph = Graph::new();

        for node in &self.nodes {
            graph
                .add_node(node.id, node.x, node.y, &node.label)
                .map_err(RecordError::Graph)?;
        }
        for edge in &self.edges {
            graph
                .add_edge(edge.from, edge.to, edge.weight)
                .map_err(RecordError::Graph)?;
        }

        if self.source >= graph.len() {
            return Err(RecordError::UnknownEndpoint(self.source));
        }
        if self.target >= graph.len() {
            return Err(RecordError::UnknownEndpoint(self.target));
        }

        // The bot route must start and end on the level endpoints, and only
        // cross nodes of the graph
        if self.optimal_path.first() != Some(&self.source)
            || self.optimal_path.last() != Some(&self.target)
            || self.optimal_path.iter().any(|node| *node >= graph.len())
        {
            return Err(RecordError::CorruptSolution);
        }

        Ok(Level {
            number: self.level,
            graph,
            source: self.source,
            target: self.target,
            solution: Solution {
                distance: self.optimal_distance,
                path: self.optimal_path.clone(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use crate::generator::random_level::RandomLevel;

    fn sample_record() -> LevelRecord {
        LevelRecord {
            level: 1,
            nodes: vec![
                Node::new(0, 100.0, 100.0, "A"),
                Node::new(1, 200.0, 100.0, "B"),
                Node::new(2, 300.0, 100.0, "C"),
            ],
            edges: vec![
                Edge {
                    from: 0,
                    to: 1,
                    weight: 4,
                },
                Edge {
                    from: 1,
                    to: 2,
                    weight: 2,
                },
            ],
            source: 0,
            target: 2,
            optimal_distance: 6,
            optimal_path: vec![0, 1, 2],
        }
    }

    #[test]
    fn test_round_trip() {
        let mut rng: StdRng = StdRng::seed_from_u64(19);
        let level: Level = RandomLevel::new(4).generate(&mut rng).unwrap();
        let record: LevelRecord = LevelRecord::new(&level);
        let rebuilt: Level = record.to_level().unwrap();

        assert_eq!(LevelRecord::new(&rebuilt), record);
        assert_eq!(rebuilt.number, level.number);
        assert_eq!(rebuilt.solution, level.solution);

        // The adjacency lists are rebuilt from the edge list
        for edge in level.graph.get_edges() {
            assert_eq!(
                rebuilt.graph.get_weight(edge.from, edge.to),
                Some(edge.weight)
            );
        }
    }

    #[test]
    fn test_rebuilds_a_valid_level() {
        let level: Level = sample_record().to_level().unwrap();

        assert_eq!(level.graph.len(), 3);
        assert_eq!(level.graph.get_weight(1, 2), Some(2));
        assert_eq!(level.solution.distance, 6);
    }

    #[test]
    fn test_rejects_unknown_endpoint() {
        let mut record: LevelRecord = sample_record();
        record.source = 9;
        record.optimal_path = vec![9, 1, 2];

        assert_eq!(
            record.to_level().unwrap_err(),
            RecordError::UnknownEndpoint(9)
        );
    }

    #[test]
    fn test_rejects_route_detached_from_endpoints() {
        let mut record: LevelRecord = sample_record();
        record.optimal_path = vec![1, 2];

        assert_eq!(record.to_level().unwrap_err(), RecordError::CorruptSolution);
    }

    #[test]
    fn test_rejects_route_with_unknown_nodes() {
        let mut record: LevelRecord = sample_record();
        record.optimal_path = vec![0, 7, 2];

        assert_eq!(record.to_level().unwrap_err(), RecordError::CorruptSolution);
    }

    #[test]
    fn test_rejects_empty_route() {
        let mut record: LevelRecord = sample_record();
        record.optimal_path = Vec::new();

        assert_eq!(record.to_level().unwrap_err(), RecordError::CorruptSolution);
    }

    #[test]
    fn test_rejects_gapped_node_identifiers() {
        let mut record: LevelRecord = sample_record();
        record.nodes[2].id = 5;

        assert!(matches!(
            record.to_level(),
            Err(RecordError::Graph(GraphError::NonSequentialNode { .. }))
        ));
    }

    #[test]
    fn test_rejects_edge_with_unknown_node() {
        let mut record: LevelRecord = sample_record();
        record.edges[1].to = 12;

        assert_eq!(
            record.to_level().unwrap_err(),
            RecordError::Graph(GraphError::UnknownNode(12))
        );
    }

    #[test]
    fn test_json_round_trip() {
        let record: LevelRecord = sample_record();
        let json: String = serde_json::to_string(&record).unwrap();
        let parsed: LevelRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed, record);
    }
}
