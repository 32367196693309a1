// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::path::{Path, PathBuf};

use movie_catalogue_repository::MemoryRepository;
use tempfile::TempDir;

use crate::password::MIN_COST;
use crate::{COMMENTS_FILE, LoaderConfig, MOVIES_FILE, USERS_FILE, populate};

pub const MOVIES_HEADER: &str = "Rank,Title,Genre,Description,Director,Actors,Year,Runtime (Minutes)";
pub const USERS_CSV: &str = "id,username,password\n1,thorke,ilovebeer\n";
pub const COMMENTS_HEADER: &str = "id,user_id,movie_id,comment";

/// The checked-in five-movie data set.
pub fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata")
}

/// A config over `dir` that hashes cheaply.
pub fn create_test_config(dir: &Path) -> LoaderConfig {
    LoaderConfig::new(dir).with_password_cost(MIN_COST)
}

pub fn create_populated_repository() -> MemoryRepository {
    let mut repo: MemoryRepository = MemoryRepository::new();
    populate(&create_test_config(&testdata_dir()), &mut repo).unwrap();
    repo
}

/// Writes the three data files into a fresh temporary directory.
pub fn write_data_dir(movies: &str, users: &str, comments: &str) -> TempDir {
    let dir: TempDir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(MOVIES_FILE), movies).unwrap();
    std::fs::write(dir.path().join(USERS_FILE), users).unwrap();
    std::fs::write(dir.path().join(COMMENTS_FILE), comments).unwrap();
    dir
}

/// A single-movie `movies.csv` body followed by `rows`.
pub fn movies_csv(rows: &[&str]) -> String {
    let mut csv: String = format!("{MOVIES_HEADER}\n");
    for row in rows {
        csv.push_str(row);
        csv.push('\n');
    }
    csv
}
