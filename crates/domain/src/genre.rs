// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::movie::{Movie, MovieKey};
use crate::name::Name;
use std::cmp::Ordering;

/// A genre that can be applied to movies.
///
/// Identity and ordering are by name. The movie list is append-only; the
/// association factory prevents the same movie from being added twice.
#[derive(Debug, Clone)]
pub struct Genre {
    name: Name,
    movies: Vec<MovieKey>,
}

impl Genre {
    /// Creates a genre. Surrounding whitespace is trimmed.
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: Name::new(name),
            movies: Vec::new(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// The movies this genre is applied to, in association order.
    #[must_use]
    pub fn movies(&self) -> &[MovieKey] {
        &self.movies
    }

    #[must_use]
    pub fn number_of_movies(&self) -> usize {
        self.movies.len()
    }

    #[must_use]
    pub fn is_applied_to(&self, movie: &Movie) -> bool {
        self.movies.contains(movie.key())
    }

    pub(crate) fn add_movie(&mut self, movie: &Movie) {
        self.movies.push(movie.key().clone());
    }
}

impl std::fmt::Display for Genre {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Genre {}>", self.name)
    }
}

impl PartialEq for Genre {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Genre {}

impl std::hash::Hash for Genre {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Genre {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Genre {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
