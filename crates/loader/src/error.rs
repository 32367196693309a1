// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Loader errors.

use movie_catalogue_domain::{DomainError, MovieId};
use movie_catalogue_repository::RepositoryError;
use thiserror::Error;

/// Errors raised while loading the catalogue.
///
/// Row numbers are 1-based and do not count the header line.
#[derive(Debug, Error)]
pub enum LoaderError {
    /// A file could not be opened or a record could not be parsed.
    #[error("Failed to read {file}: {source}")]
    Csv {
        file: &'static str,
        #[source]
        source: csv::Error,
    },

    /// The header line lacks one or more required columns.
    #[error("{file} is missing required headers: {}", .missing.join(", "))]
    MissingHeaders {
        file: &'static str,
        missing: Vec<String>,
    },

    /// A field could not be parsed.
    #[error("{file} row {row}: invalid {field} '{value}'")]
    InvalidField {
        file: &'static str,
        row: usize,
        field: &'static str,
        value: String,
    },

    /// A comment names a user id that `users.csv` does not define.
    #[error("comments.csv row {row}: unknown user id '{user_id}'")]
    UnknownUser { row: usize, user_id: String },

    /// A comment names a movie that is not in the repository.
    #[error("comments.csv row {row}: unknown movie id {movie_id}")]
    UnknownMovie { row: usize, movie_id: MovieId },

    #[error("Failed to hash password for user '{username}': {source}")]
    PasswordHash {
        username: String,
        #[source]
        source: bcrypt::BcryptError,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error(transparent)]
    Domain(#[from] DomainError),
}
