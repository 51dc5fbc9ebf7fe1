/*
cli_options.rs

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

//! Process command-line options.
//!
//! These options are intended for developers tuning the level generator.
//! The tool generates random levels, prints them, and verifies that the bot
//! routes are consistent with the graphs.
//!
//! # Examples
//!
//! Generate two levels at difficulty 3 and print the statistics:
//!
//! ```
//! $ dijiduel --level 3 --count 2 --summary
//!
//! Level 3: 7 nodes, 10 edges
//!   Nodes:
//!     A (173, 158)
//!     B (396, 434)
//!     ...
//!   Edges:
//!     A-C  6
//!     B-E  9
//!     ...
//!   Bot route: A C E G (cost 21)
//! ...
//!
//!       total time = 0.00013s
//!     average time = 0.000065s
//!         max time = 0.00008s
//!   total attempts = 5
//! average attempts = 2
//!     max attempts = 3
//! ```
//!
//! Generate a reproducible level and store it as a save file:
//!
//! ```
//! $ dijiduel --level 5 --seed 42 --save-dir ~/.local/share/dijiduel
//! ```
//!
//! Inspect a save file as JSON:
//!
//! ```
//! $ dijiduel --load ~/.local/share/dijiduel --json
//! Level saved on Sat Aug 22 14:02:11 2026
//! {"level":5,"nodes":[{"id":0,...
//! ```

use chrono::{DateTime, Local};
use clap::Parser;
use log::debug;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::env;
use std::path::PathBuf;

use crate::config::COPYRIGHT_NOTICE;
use dijiduel::generator::difficulty;
use dijiduel::generator::level::Level;
use dijiduel::generator::random_level::RandomLevel;
use dijiduel::record::LevelRecord;
use dijiduel::saver::level::SaverLevel;

/// Build random Dijiduel levels for developers.
#[derive(Parser)]
#[command(about, long_about = None, version, long_version = COPYRIGHT_NOTICE)]
struct Args {
    /// Difficulty level to generate
    #[arg(short, long, default_value_t = 1)]
    level: usize,

    /// Number of levels to generate
    #[arg(short, long, default_value_t = 1)]
    count: usize,

    /// Seed for the random number generator, for reproducible levels
    #[arg(long)]
    seed: Option<u64>,

    /// Print the levels as JSON records instead of reports
    #[arg(short, long, default_value_t = false)]
    json: bool,

    /// Print some statistics after generating the levels
    #[arg(short, long, default_value_t = false)]
    summary: bool,

    /// Directory where to save the last generated level
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// Print the level saved in the given directory, and generate nothing
    #[arg(long)]
    load: Option<PathBuf>,

    /// Enable debug messages
    #[arg(short, long, default_value_t = false)]
    debug: bool,
}

/// Parse and process command-line options.
pub fn parse() -> u8 {
    let args: Args = Args::parse();

    if args.debug {
        unsafe {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    //
    // Report a saved level
    //
    if let Some(dir) = args.load {
        return print_saved_level(dir, args.json);
    }

    //
    // Generate the requested levels
    //
    let mut rng: StdRng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let mut builder: RandomLevel = RandomLevel::new(args.level);
    let mut last_level: Option<Level> = None;
    let mut total_attempts: usize = 0;
    let mut max_attempts: usize = 0;
    let mut total_duration: f32 = 0.0;
    let mut max_duration: f32 = 0.0;

    for i in 0..args.count {
        debug!("Iteration {i}");

        match builder.generate(&mut rng) {
            Ok(level) => {
                total_attempts += builder.attempts;
                if builder.attempts > max_attempts {
                    max_attempts = builder.attempts;
                }
                total_duration += builder.duration;
                if builder.duration > max_duration {
                    max_duration = builder.duration;
                }

                verify_level(&level);
                if args.json {
                    println!("{}", record_json(&level));
                } else {
                    print_level(&level);
                }
                last_level = Some(level);
            }
            Err(e) => {
                eprintln!("Cannot generate a level: {e}");
                return 1;
            }
        }
    }

    //
    // Save the last generated level
    //
    if let Some(dir) = args.save_dir
        && let Some(level) = &last_level
    {
        let saver: SaverLevel = SaverLevel::new(dir);
        if let Err(e) = saver.save_level(level) {
            eprintln!("Cannot save the level: {e}");
            return 1;
        }
    }

    // Print some stats
    if args.summary && args.count > 0 {
        println!(
            "
      total time = {}s
    average time = {}s
        max time = {}s
  total attempts = {}
average attempts = {}
    max attempts = {}",
            total_duration,
            total_duration / args.count as f32,
            max_duration,
            total_attempts,
            total_attempts / args.count,
            max_attempts
        );
    }
    0
}

/// Load the saved level from the given directory and print it.
fn print_saved_level(dir: PathBuf, json: bool) -> u8 {
    let saver: SaverLevel = SaverLevel::new(dir.clone());

    match saver.get_level() {
        Ok(Some((level, saved))) => {
            let date: DateTime<Local> = DateTime::from(saved);
            println!("Level saved on {}", date.format("%c"));
            if json {
                println!("{}", record_json(&level));
            } else {
                print_level(&level);
            }
            0
        }
        Ok(None) => {
            eprintln!("No saved level in {}", dir.display());
            1
        }
        Err(e) => {
            eprintln!("Cannot load the saved level: {e}");
            1
        }
    }
}

/// Return the JSON record of the given level.
fn record_json(level: &Level) -> String {
    serde_json::to_string(&LevelRecord::new(level)).expect("Cannot serialize the level")
}

/// Print a report of the given level.
fn print_level(level: &Level) {
    println!(
        "\nLevel {}: {} nodes, {} edges",
        level.number,
        level.graph.len(),
        level.graph.get_edges().len()
    );
    println!("  Nodes:");
    for node in level.graph.get_nodes() {
        println!("    {} ({:.0}, {:.0})", node.label, node.x, node.y);
    }
    println!("  Edges:");
    for edge in level.graph.get_edges() {
        println!(
            "    {}-{}  {}",
            level.get_label(edge.from),
            level.get_label(edge.to),
            edge.weight
        );
    }

    let route: Vec<&str> = level
        .solution
        .path
        .iter()
        .map(|node| level.get_label(*node))
        .collect();
    println!(
        "  Bot route: {} (cost {})",
        route.join(" "),
        level.solution.distance
    );
}

/// Verify that the bot route of the generated level is consistent.
fn verify_level(level: &Level) {
    let path: &Vec<usize> = &level.solution.path;

    // The route must join the start node to the goal node
    if path.first() != Some(&level.source) || path.last() != Some(&level.target) {
        eprintln!(
            "Bot route {:?} for endpoints {} and {}",
            path, level.source, level.target
        );
        panic!("Bug: the bot route does not join the endpoints");
    }

    // Verify that there are no duplicated nodes
    let mut p: Vec<usize> = path.clone();
    p.sort_unstable();
    p.dedup();
    if p.len() != path.len() {
        eprintln!("Duplicated nodes in the bot route: {path:?}");
        panic!("Bug: duplicated nodes in the bot route");
    }

    // The route must only cross existing edges, and its cost must match the
    // advertised distance
    let mut total: u32 = 0;
    for pair in path.windows(2) {
        match level.graph.get_weight(pair[0], pair[1]) {
            Some(weight) => total += weight,
            None => {
                eprintln!("No edge between {} and {}: {path:?}", pair[0], pair[1]);
                panic!("Bug: the bot route crosses a missing edge");
            }
        }
    }
    if total != level.solution.distance {
        eprintln!(
            "Bot route costs {total} but is advertised as {}",
            level.solution.distance
        );
        panic!("Bug: wrong bot route cost");
    }

    // The route must be long enough for the level
    if path.len() < difficulty::min_path_nodes(level.number, level.graph.len()) {
        eprintln!("Bot route {:?} for level {}", path, level.number);
        panic!("Bug: the bot route is too short for the level");
    }
}
