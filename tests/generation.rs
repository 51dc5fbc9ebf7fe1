/*
generation.rs

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

//! End to end tests: generate a level, save it, restore it, and play it.

use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::SystemTime;
use tempfile::TempDir;

use dijiduel::generator::level::Level;
use dijiduel::generator::random_level::RandomLevel;
use dijiduel::record::LevelRecord;
use dijiduel::saver::level::SaverLevel;
use dijiduel::session::{Outcome, PlaySession};

fn generate_level(number: usize, seed: u64) -> Level {
    let mut rng: StdRng = StdRng::seed_from_u64(seed);
    RandomLevel::new(number)
        .generate(&mut rng)
        .expect("the generator must produce a level")
}

#[test]
fn save_and_restore_round_trip() {
    let dir: TempDir = TempDir::new().unwrap();
    let saver: SaverLevel = SaverLevel::new(dir.path().to_path_buf());
    let level: Level = generate_level(3, 101);

    let before: SystemTime = SystemTime::now();
    saver.save_level(&level).unwrap();
    let (restored, saved) = saver.get_level().unwrap().unwrap();

    assert_eq!(LevelRecord::new(&restored), LevelRecord::new(&level));
    assert_eq!(restored.solution, level.solution);
    assert!(saved >= before);
    assert!(saved <= SystemTime::now());
}

#[test]
fn missing_save_file_is_not_an_error() {
    let dir: TempDir = TempDir::new().unwrap();
    let saver: SaverLevel = SaverLevel::new(dir.path().to_path_buf());

    assert!(saver.get_level().unwrap().is_none());
}

#[test]
fn delete_save_removes_the_level() {
    let dir: TempDir = TempDir::new().unwrap();
    let saver: SaverLevel = SaverLevel::new(dir.path().to_path_buf());
    saver.save_level(&generate_level(2, 7)).unwrap();

    assert!(saver.get_level().unwrap().is_some());
    saver.delete_save();
    assert!(saver.get_level().unwrap().is_none());

    // Deleting again is harmless
    saver.delete_save();
}

#[test]
fn corrupt_save_file_is_reported() {
    let dir: TempDir = TempDir::new().unwrap();
    let saver: SaverLevel = SaverLevel::new(dir.path().to_path_buf());
    std::fs::write(dir.path().join("savelevel.json"), b"not json").unwrap();

    assert!(saver.get_level().is_err());
}

#[test]
fn replaying_the_bot_route_wins_the_level() {
    let level: Level = generate_level(4, 55);
    let route: Vec<usize> = level.solution.path.clone();
    let distance: u32 = level.solution.distance;
    let mut session: PlaySession = PlaySession::new(level);

    for node in &route[1..] {
        assert!(session.select(*node));
    }
    assert!(session.is_at_target());
    assert_eq!(session.cost(), distance);
    assert_eq!(session.finish(), Some(Outcome::Victory));
}

#[test]
fn restored_level_plays_like_the_original() {
    let dir: TempDir = TempDir::new().unwrap();
    let saver: SaverLevel = SaverLevel::new(dir.path().to_path_buf());
    saver.save_level(&generate_level(5, 900)).unwrap();

    let (restored, _) = saver.get_level().unwrap().unwrap();
    let route: Vec<usize> = restored.solution.path.clone();
    let mut session: PlaySession = PlaySession::new(restored);

    for node in &route[1..] {
        assert!(session.select(*node));
    }
    assert_eq!(session.finish(), Some(Outcome::Victory));
}
