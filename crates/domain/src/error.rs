// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::movie::{MovieId, MovieKey};

/// The kind of entity on the far side of a movie association.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssociationKind {
    /// A genre applied to a movie.
    Genre,
    /// An actor appearing in a movie.
    Actor,
    /// A director of a movie.
    Director,
}

impl AssociationKind {
    /// Returns the lowercase label used in messages.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Genre => "genre",
            Self::Actor => "actor",
            Self::Director => "director",
        }
    }
}

impl std::fmt::Display for AssociationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Errors raised by the entity model.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The same genre, actor or director was linked to a movie twice.
    DuplicateAssociation {
        /// Which side of the association was repeated.
        kind: AssociationKind,
        /// The name of the repeated genre, actor or director.
        name: String,
        /// The movie that already carries the association.
        movie: MovieKey,
    },
    /// A runtime that is not a positive number of minutes.
    InvalidRuntime(i64),
    /// A movie was watched before its runtime was known.
    RuntimeNotSet(MovieKey),
    /// A movie already carries an id.
    IdAlreadyAssigned {
        /// The movie whose id was reassigned.
        movie: MovieKey,
        /// The id the movie already holds.
        existing: MovieId,
    },
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateAssociation { kind, name, movie } => {
                write!(f, "{kind} '{name}' already applied to movie \"{movie}\"")
            }
            Self::InvalidRuntime(minutes) => {
                write!(f, "Runtime out of range: {minutes}. Must be greater than 0")
            }
            Self::RuntimeNotSet(movie) => {
                write!(f, "Movie \"{movie}\" has no runtime and cannot be watched")
            }
            Self::IdAlreadyAssigned { movie, existing } => {
                write!(f, "Movie \"{movie}\" already has id {existing}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
