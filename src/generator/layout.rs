/*
layout.rs

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

//! Random placement of the level nodes.
//!
//! Nodes are laid out on a grid that covers the level area, and each node is
//! jittered inside its grid cell so that the levels do not look computed.
//! The positions are then shuffled, which detaches the node identifiers from
//! the grid order.

use rand::Rng;
use rand::seq::SliceRandom;

/// Width of the level area.
pub const WIDTH: f64 = 800.0;

/// Height of the level area.
pub const HEIGHT: f64 = 600.0;

/// Minimum distance between the nodes and the borders of the level area.
pub const PADDING: f64 = 100.0;

/// Return random positions for the given number of nodes.
///
/// The grid is sized so that its aspect ratio follows the level area, and the
/// jitter moves each node by at most a quarter of a cell on each axis.
/// Asking for zero nodes returns an empty list.
pub fn grid_positions(count: usize, rng: &mut impl Rng) -> Vec<(f64, f64)> {
    if count == 0 {
        return Vec::new();
    }

    let cols: usize = (count as f64 * (WIDTH / HEIGHT)).sqrt().ceil() as usize;
    let rows: usize = count.div_ceil(cols);
    let cell_width: f64 = (WIDTH - 2.0 * PADDING) / cols as f64;
    let cell_height: f64 = (HEIGHT - 2.0 * PADDING) / rows as f64;

    let mut positions: Vec<(f64, f64)> = Vec::with_capacity(count);
    for i in 0..count {
        let col: f64 = (i % cols) as f64;
        let row: f64 = (i / cols) as f64;
        let x: f64 = PADDING
            + col * cell_width
            + cell_width / 2.0
            + (rng.random::<f64>() - 0.5) * (cell_width * 0.5);
        let y: f64 = PADDING
            + row * cell_height
            + cell_height / 2.0
            + (rng.random::<f64>() - 0.5) * (cell_height * 0.5);
        positions.push((x, y));
    }
    positions.shuffle(rng);
    positions
}
