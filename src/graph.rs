/*
graph.rs

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

//! Weighted undirected graph of a level.
//!
//! A [`Graph`] object stores the nodes and the edges of a level.
//! Nodes are created with the [`Graph::add_node`] method and connected with
//! the [`Graph::add_edge`] method.
//! Node identifiers are dense: the first node gets the identifier 0, the next
//! one 1, and so on.
//! Identifiers are also indexes in the node list, and the graph refuses nodes
//! that would break that property.
//!
//! The [`Graph::dijkstra`] method, in the [`search`] module, computes the
//! cheapest route between two nodes.

pub mod edges;
pub mod nodes;
pub mod queue;
pub mod search;

use std::error::Error;
use std::fmt;

use self::edges::{Adjacency, Edge};
use self::nodes::Node;

/// Type of errors when building a graph.
#[derive(Debug, PartialEq)]
pub enum GraphError {
    /// An edge refers to a node that does not exist.
    UnknownNode(usize),

    /// A node was added with an identifier that is not the next index in the
    /// node list.
    NonSequentialNode {
        /// Expected node identifier.
        expected: usize,

        /// Provided node identifier.
        got: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            GraphError::UnknownNode(node) => {
                write!(f, "the node {node} does not exist in the graph")
            }
            GraphError::NonSequentialNode { expected, got } => {
                write!(f, "the node identifier should be {expected}, not {got}")
            }
        }
    }
}

impl Error for GraphError {}

/// Weighted undirected graph of a level.
#[derive(Debug, Clone)]
pub struct Graph {
    /// Nodes, indexed by identifier.
    nodes: Vec<Node>,

    /// Edges, in insertion order.
    edges: Vec<Edge>,

    /// Adjacency lists, kept in sync with the edge list.
    adjacency: Adjacency,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create an empty [`Graph`] object.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            edges: Vec::new(),
            adjacency: Adjacency::new(),
        }
    }

    /// Remove all the nodes and edges from the graph.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.edges.clear();
        self.adjacency.clear();
    }

    /// Add a node to the graph.
    ///
    /// # Errors
    ///
    /// The method returns an error if the identifier is not the next index in
    /// the node list.
    pub fn add_node(&mut self, id: usize, x: f64, y: f64, label: &str) -> Result<(), GraphError> {
        if id != self.nodes.len() {
            return Err(GraphError::NonSequentialNode {
                expected: self.nodes.len(),
                got: id,
            });
        }
        self.nodes.push(Node::new(id, x, y, label));
        self.adjacency.grow();
        Ok(())
    }

    /// Connect two nodes of the graph.
    ///
    /// If the nodes are already connected, then the existing edge and its
    /// weight are preserved.
    ///
    /// # Errors
    ///
    /// The method returns an error if one of the nodes does not exist.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: u32) -> Result<(), GraphError> {
        if from >= self.nodes.len() {
            return Err(GraphError::UnknownNode(from));
        }
        if to >= self.nodes.len() {
            return Err(GraphError::UnknownNode(to));
        }
        if self.adjacency.contains(from, to) {
            return Ok(());
        }
        self.edges.push(Edge { from, to, weight });
        self.adjacency.insert(from, to, weight);
        Ok(())
    }

    /// Number of nodes in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the graph has no node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Return the node with the given identifier.
    pub fn get_node(&self, id: usize) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Return all the nodes.
    pub fn get_nodes(&self) -> &Vec<Node> {
        &self.nodes
    }

    /// Return all the edges.
    pub fn get_edges(&self) -> &Vec<Edge> {
        &self.edges
    }

    /// For the given node, return all the adjacent nodes with the edge
    /// weights.
    pub fn get_adjacent(&self, node: usize) -> &[(usize, u32)] {
        self.adjacency.get_adjacent(node)
    }

    /// Whether an edge exists between the given nodes.
    pub fn contains_edge(&self, from: usize, to: usize) -> bool {
        self.adjacency.contains(from, to)
    }

    /// Return the weight of the edge between the given nodes, or None if the
    /// nodes are not connected.
    pub fn get_weight(&self, from: usize, to: usize) -> Option<u32> {
        self.adjacency.get_weight(from, to)
    }

    /// Print the adjacency lists of the graph.
    pub fn debug(&self) {
        self.adjacency.debug();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_node_sequential_ids() {
        let mut graph: Graph = Graph::new();

        assert_eq!(graph.add_node(0, 1.0, 2.0, "A"), Ok(()));
        assert_eq!(graph.add_node(1, 3.0, 4.0, "B"), Ok(()));
        assert_eq!(graph.len(), 2);
        assert_eq!(graph.get_node(1).map(|n| n.label.as_str()), Some("B"));
    }

    #[test]
    fn test_add_node_rejects_gaps() {
        let mut graph: Graph = Graph::new();
        graph.add_node(0, 0.0, 0.0, "A").unwrap();

        assert_eq!(
            graph.add_node(2, 0.0, 0.0, "C"),
            Err(GraphError::NonSequentialNode {
                expected: 1,
                got: 2
            })
        );
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_add_edge_unknown_node() {
        let mut graph: Graph = Graph::new();
        graph.add_node(0, 0.0, 0.0, "A").unwrap();
        graph.add_node(1, 1.0, 1.0, "B").unwrap();

        assert_eq!(graph.add_edge(0, 5, 3), Err(GraphError::UnknownNode(5)));
        assert_eq!(graph.add_edge(7, 1, 3), Err(GraphError::UnknownNode(7)));
        assert!(graph.get_edges().is_empty());
    }

    #[test]
    fn test_add_edge_is_symmetric() {
        let mut graph: Graph = Graph::new();
        graph.add_node(0, 0.0, 0.0, "A").unwrap();
        graph.add_node(1, 1.0, 1.0, "B").unwrap();
        graph.add_edge(0, 1, 4).unwrap();

        assert!(graph.contains_edge(0, 1));
        assert!(graph.contains_edge(1, 0));
        assert_eq!(graph.get_weight(0, 1), Some(4));
        assert_eq!(graph.get_weight(1, 0), Some(4));
    }

    #[test]
    fn test_duplicate_edge_keeps_first_weight() {
        let mut graph: Graph = Graph::new();
        graph.add_node(0, 0.0, 0.0, "A").unwrap();
        graph.add_node(1, 1.0, 1.0, "B").unwrap();
        graph.add_edge(0, 1, 4).unwrap();
        graph.add_edge(0, 1, 9).unwrap();
        graph.add_edge(1, 0, 7).unwrap();

        assert_eq!(graph.get_edges().len(), 1);
        assert_eq!(graph.get_weight(0, 1), Some(4));
        assert_eq!(graph.get_adjacent(0).len(), 1);
        assert_eq!(graph.get_adjacent(1).len(), 1);
    }

    #[test]
    fn test_clear() {
        let mut graph: Graph = Graph::new();
        graph.add_node(0, 0.0, 0.0, "A").unwrap();
        graph.add_node(1, 1.0, 1.0, "B").unwrap();
        graph.add_edge(0, 1, 2).unwrap();
        graph.clear();

        assert!(graph.is_empty());
        assert!(graph.get_edges().is_empty());
        assert!(!graph.contains_edge(0, 1));
        assert_eq!(graph.add_node(0, 0.0, 0.0, "A"), Ok(()));
    }
}
