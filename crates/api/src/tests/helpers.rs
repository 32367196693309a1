// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test helper functions and fixtures.

use std::path::{Path, PathBuf};

use movie_catalogue_loader::password::MIN_COST;
use movie_catalogue_loader::{LoaderConfig, populate};
use movie_catalogue_repository::MemoryRepository;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::AddReviewRequest;
use movie_catalogue_domain::MovieId;

/// The five-movie data set checked in with the loader.
pub fn testdata_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../loader/testdata")
}

/// A repository populated from the loader's test data, hashed cheaply.
pub fn create_test_repository() -> MemoryRepository {
    let config: LoaderConfig = LoaderConfig::new(testdata_dir()).with_password_cost(MIN_COST);
    let mut repo: MemoryRepository = MemoryRepository::new();
    populate(&config, &mut repo).unwrap();
    repo
}

pub fn create_test_rng() -> StdRng {
    StdRng::seed_from_u64(2020)
}

pub fn create_review_request(movie_id: u32, username: &str, text: &str) -> AddReviewRequest {
    AddReviewRequest {
        movie_id: MovieId::new(movie_id),
        username: String::from(username),
        text: String::from(text),
        rating: None,
    }
}
