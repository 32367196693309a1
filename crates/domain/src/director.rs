// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::movie::{Movie, MovieKey};
use crate::name::Name;
use std::cmp::Ordering;

/// A director, identified by full name.
#[derive(Debug, Clone)]
pub struct Director {
    name: Name,
    movies: Vec<MovieKey>,
}

impl Director {
    #[must_use]
    pub fn new(full_name: &str) -> Self {
        Self {
            name: Name::new(full_name),
            movies: Vec::new(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// The movies directed, in association order.
    #[must_use]
    pub fn movies(&self) -> &[MovieKey] {
        &self.movies
    }

    #[must_use]
    pub fn is_applied_to(&self, movie: &Movie) -> bool {
        self.movies.contains(movie.key())
    }

    pub(crate) fn add_movie(&mut self, movie: &Movie) {
        self.movies.push(movie.key().clone());
    }
}

impl std::fmt::Display for Director {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Director {}>", self.name)
    }
}

impl PartialEq for Director {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Director {}

impl std::hash::Hash for Director {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Director {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Director {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
