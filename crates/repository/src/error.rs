// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use movie_catalogue_domain::{DomainError, MovieId};

/// The side of a review whose back-reference is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewParty {
    /// The reviewing user.
    User,
    /// The reviewed movie.
    Movie,
}

impl std::fmt::Display for ReviewParty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::User => write!(f, "user"),
            Self::Movie => write!(f, "movie"),
        }
    }
}

/// Errors that can occur while mutating a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    /// A review was offered without being attached to both its user and movie.
    InvalidAssociation {
        /// The side that does not reference the review.
        party: ReviewParty,
    },
    /// Another movie already holds this id.
    DuplicateMovieId(MovieId),
    /// A domain rule was violated.
    DomainViolation(DomainError),
}

impl std::fmt::Display for RepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidAssociation { party } => {
                write!(f, "Review not correctly attached to a {party}")
            }
            Self::DuplicateMovieId(id) => write!(f, "Movie id {id} is already in use"),
            Self::DomainViolation(err) => write!(f, "Domain violation: {err}"),
        }
    }
}

impl std::error::Error for RepositoryError {}

impl From<DomainError> for RepositoryError {
    fn from(err: DomainError) -> Self {
        Self::DomainViolation(err)
    }
}
