/*
level.rs

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

//! Save and restore the level in progress when quitting or starting Dijiduel.
//!
//! When a level is in progress and the user quits Dijiduel, the level is
//! saved in the `savelevel.json` file.
//! When Dijiduel is restarted, the saved level is loaded, and the user plays
//! the same graph again instead of a freshly generated one.
//!
//! The saved object is a serialization of a [`LevelRecord`] object in JSON
//! format by using [`serde`], wrapped in an envelope that also stores the
//! save time.

use log::debug;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::{File, remove_file};
use std::io::{BufReader, BufWriter, ErrorKind, Write};
use std::path::PathBuf;
use std::time::SystemTime;

use crate::generator::level::Level;
use crate::record::LevelRecord;

/// On-disk envelope around the saved level.
#[derive(Serialize, Deserialize, Debug)]
struct SavedLevel {
    /// Time when the level was saved.
    saved: SystemTime,

    /// Snapshot of the saved level.
    record: LevelRecord,
}

/// Object to save and restore a level in progress.
pub struct SaverLevel {
    /// Absolute path to the save file.
    save_file: PathBuf,
}

impl SaverLevel {
    /// Create a [`SaverLevel`] object.
    ///
    /// The provided [`PathBuf`] is the path to the directory where the level
    /// must be saved.
    pub fn new(mut data_dir: PathBuf) -> Self {
        data_dir.push("savelevel.json");
        debug!("Save level file: {data_dir:?}");
        SaverLevel {
            save_file: data_dir,
        }
    }

    /// Retrieve the saved [`Level`] object and the time when it was saved.
    ///
    /// Return None if there is no saved level.
    pub fn get_level(&self) -> Result<Option<(Level, SystemTime)>, Box<dyn Error>> {
        let file: File;
        match File::open(&self.save_file) {
            Ok(f) => file = f,
            Err(error) => match error.kind() {
                ErrorKind::NotFound => return Ok(None),
                _ => return Err(Box::new(error)),
            },
        }
        let reader: BufReader<File> = BufReader::new(file);
        let saved: SavedLevel = serde_json::from_reader(reader)?;
        let level: Level = saved.record.to_level()?;
        Ok(Some((level, saved.saved)))
    }

    /// Save the provided [`Level`] object.
    pub fn save_level(&self, level: &Level) -> Result<(), Box<dyn Error>> {
        let saved: SavedLevel = SavedLevel {
            saved: SystemTime::now(),
            record: LevelRecord::new(level),
        };
        let file: File = File::create(&self.save_file)?;
        let mut writer: BufWriter<File> = BufWriter::new(file);

        serde_json::to_writer(&mut writer, &saved)?;
        writer.flush()?;
        Ok(())
    }

    /// Delete the saved level.
    pub fn delete_save(&self) {
        let _ = remove_file(&self.save_file);
    }
}
