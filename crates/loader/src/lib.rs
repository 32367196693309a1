// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

//! Bulk loading of the movie catalogue from CSV files.
//!
//! A data directory holds `movies.csv`, `users.csv` and `comments.csv`.
//! [`populate`] reads all three into a [`Repository`], wiring every
//! association through the domain factories.
//!
//! [`Repository`]: movie_catalogue_repository::Repository

mod error;
mod load;
pub mod password;
mod table;

#[cfg(test)]
mod tests;

pub use error::LoaderError;
pub use load::{
    COMMENTS_FILE, LoaderConfig, MOVIES_FILE, USERS_FILE, load_comments, load_movies, load_users,
    populate,
};
