/*
session.rs

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

//! Manage the status of a level in progress.
//!
//! A [`PlaySession`] object applies the rules for building the player route:
//! the route starts on the start node, grows one adjacent node at a time, and
//! never crosses the same node twice.
//! When the route reaches the goal node, the [`PlaySession::finish`] method
//! compares its cost with the cost of the bot route and closes the session.
//!
//! The widget layer of the embedding application translates clicks into
//! [`PlaySession::select`] calls and draws the route after each change.

use crate::generator::level::Level;

/// Result of a finished level.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Outcome {
    /// The player route costs the same as the bot route.
    Victory,

    /// The player route costs more than the bot route.
    Defeat,
}

/// Manage the status of a level in progress.
#[derive(Debug)]
pub struct PlaySession {
    /// The level being played.
    level: Level,

    /// The player route, starting on the start node.
    path: Vec<usize>,

    /// Result of the level, or None while the player is still building the
    /// route.
    outcome: Option<Outcome>,
}

impl PlaySession {
    /// Create a [`PlaySession`] object for the given level.
    pub fn new(level: Level) -> Self {
        let source: usize = level.source;
        Self {
            level,
            path: vec![source],
            outcome: None,
        }
    }

    /// Toggle the given node in the player route.
    ///
    /// Selecting the last node of the route removes that node, unless it is
    /// the start node.
    /// Selecting a node that is adjacent to the end of the route and that the
    /// route does not already cross appends that node.
    /// Any other selection is ignored, and the session ignores all the
    /// selections once the level is finished.
    ///
    /// Return whether the route changed.
    pub fn select(&mut self, node: usize) -> bool {
        if self.outcome.is_some() {
            return false;
        }
        let last: usize = self.path[self.path.len() - 1];
        if node == last && self.path.len() > 1 {
            self.path.pop();
            return true;
        }
        if self.level.graph.contains_edge(last, node) && !self.path.contains(&node) {
            self.path.push(node);
            return true;
        }
        false
    }

    /// Restart the player route from the start node.
    ///
    /// The method does nothing once the level is finished.
    pub fn reset(&mut self) {
        if self.outcome.is_none() {
            self.path.clear();
            self.path.push(self.level.source);
        }
    }

    /// Total cost of the player route.
    pub fn cost(&self) -> u32 {
        let mut total: u32 = 0;
        for pair in self.path.windows(2) {
            if let Some(weight) = self.level.graph.get_weight(pair[0], pair[1]) {
                total += weight;
            }
        }
        total
    }

    /// Whether the player route ends on the goal node.
    pub fn is_at_target(&self) -> bool {
        self.path.last() == Some(&self.level.target)
    }

    /// Close the session and compare the player route with the bot route.
    ///
    /// The player wins when both routes cost the same, since the bot route is
    /// the cheapest one.
    /// Return None, without closing the session, if the player route does not
    /// end on the goal node.
    pub fn finish(&mut self) -> Option<Outcome> {
        if self.outcome.is_some() {
            return self.outcome;
        }
        if !self.is_at_target() {
            return None;
        }
        if self.cost() == self.level.solution.distance {
            self.outcome = Some(Outcome::Victory);
        } else {
            self.outcome = Some(Outcome::Defeat);
        }
        self.outcome
    }

    /// Return the player route.
    pub fn get_path(&self) -> &Vec<usize> {
        &self.path
    }

    /// Return the level being played.
    pub fn get_level(&self) -> &Level {
        &self.level
    }

    /// Return the result of the level, or None while the player is still
    /// building the route.
    pub fn get_outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    /// Whether the level is finished.
    pub fn is_finished(&self) -> bool {
        self.outcome.is_some()
    }
}
