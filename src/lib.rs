/*
lib.rs

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

//! Core engine of the Dijiduel puzzle game.
//!
//! In Dijiduel, the player builds a route through a weighted graph and races
//! the bot, which always travels the cheapest route.
//! The player wins the level when the cost of their route matches the cost of
//! the bot route.
//!
//! The crate provides the game logic and leaves the rendering and the input
//! handling to the embedding application:
//!
//! * The [`graph`] module stores the level graph and computes the cheapest
//!   route with the [`graph::Graph::dijkstra`] method.
//! * The [`generator`] module builds random levels that are guaranteed to be
//!   solvable. See [`generator::random_level::RandomLevel`].
//! * The [`record`] module converts levels to and from a serializable
//!   snapshot, and the [`saver`] module moves that snapshot to and from disk.
//! * The [`session`] module applies the rules for building the player route
//!   and decides the outcome of a level.

pub mod generator;
pub mod graph;
pub mod record;
pub mod saver;
pub mod session;
