// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use crate::movie::{Movie, MovieKey};
use crate::name::Name;
use crate::review::Review;
use std::cmp::Ordering;

/// A registered user of the catalogue.
///
/// The password is stored as given; hashing happens before construction and
/// the model never inspects it.
#[derive(Debug, Clone)]
pub struct User {
    username: Name,
    password: Name,
    watched_movies: Vec<MovieKey>,
    reviews: Vec<Review>,
    time_spent_watching_movies_minutes: u64,
}

impl User {
    /// Creates a user.
    ///
    /// Empty usernames or passwords degrade to absent values. Neither is
    /// trimmed.
    #[must_use]
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: Name::exact(username),
            password: Name::exact(password),
            watched_movies: Vec::new(),
            reviews: Vec::new(),
            time_spent_watching_movies_minutes: 0,
        }
    }

    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.username
    }

    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.username.as_str()
    }

    #[must_use]
    pub fn password(&self) -> Option<&str> {
        self.password.as_str()
    }

    #[must_use]
    pub fn watched_movies(&self) -> &[MovieKey] {
        &self.watched_movies
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    #[must_use]
    pub const fn time_spent_watching_movies_minutes(&self) -> u64 {
        self.time_spent_watching_movies_minutes
    }

    /// Records that the user watched `movie`, adding its runtime to the total.
    ///
    /// Watching the same movie again counts again.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::RuntimeNotSet` if the movie has no runtime. The
    /// user is left unchanged.
    pub fn watch_movie(&mut self, movie: &Movie) -> Result<(), DomainError> {
        let runtime: u32 = movie
            .runtime_minutes()
            .ok_or_else(|| DomainError::RuntimeNotSet(movie.key().clone()))?;
        self.watched_movies.push(movie.key().clone());
        self.time_spent_watching_movies_minutes += u64::from(runtime);
        Ok(())
    }

    pub(crate) fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }
}

impl std::fmt::Display for User {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<User {}>", self.username)
    }
}

impl PartialEq for User {
    fn eq(&self, other: &Self) -> bool {
        self.username == other.username
    }
}

impl Eq for User {}

impl std::hash::Hash for User {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.username.hash(state);
    }
}

impl PartialOrd for User {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for User {
    fn cmp(&self, other: &Self) -> Ordering {
        self.username.cmp(&other.username)
    }
}
