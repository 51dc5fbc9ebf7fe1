/*
generator.rs

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

//! Generate random playable levels.
//!
//! A [`level::Level`] object represents a playable level: the graph, the
//! start and goal nodes, and the bot route against which the player route is
//! compared.
//!
//! You create a [`level::Level`] object by creating a
//! [`random_level::RandomLevel`] object and by using its
//! [`random_level::RandomLevel::generate`] method.
//! The method places the nodes with the [`layout`] module, connects each node
//! to its two nearest neighbors, and validates the result with the
//! [`crate::graph::Graph::dijkstra`] method.
//! Most candidate graphs are discarded, either because the goal node is
//! unreachable or because the bot route is too short for the level.
//! The method rebuilds candidates until one is acceptable, within a bounded
//! attempt budget.
//!
//! The [`difficulty`] module computes how the graph size and the minimum bot
//! route length scale with the level number.

pub mod difficulty;
pub mod layout;
pub mod level;
pub mod random_level;
