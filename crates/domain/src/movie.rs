// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::actor::Actor;
use crate::director::Director;
use crate::error::DomainError;
use crate::genre::Genre;
use crate::name::Name;
use crate::review::Review;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// The earliest release year a movie may carry.
pub const EARLIEST_RELEASE_YEAR: i32 = 1900;

/// The numeric identifier a repository assigns to a movie on insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(u32);

impl MovieId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for MovieId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The identity of a movie: its title and release year.
///
/// Keys order by title first and release year second. Absent components sort
/// before present ones, which keeps the order total for movies built from
/// invalid input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MovieKey {
    title: Name,
    release_year: Option<u16>,
}

impl MovieKey {
    /// Builds a key from raw input.
    ///
    /// The title is trimmed; an empty title becomes absent. A release year
    /// before 1900 (or beyond `u16`) becomes absent.
    #[must_use]
    pub fn new(title: &str, release_year: i32) -> Self {
        let release_year: Option<u16> = if release_year >= EARLIEST_RELEASE_YEAR {
            u16::try_from(release_year).ok()
        } else {
            None
        };

        Self {
            title: Name::new(title),
            release_year,
        }
    }

    /// Returns the title, if valid.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_str()
    }

    /// Returns the release year, if valid.
    #[must_use]
    pub const fn release_year(&self) -> Option<u16> {
        self.release_year
    }
}

impl std::fmt::Display for MovieKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.release_year {
            Some(year) => write!(f, "{}, {year}", self.title),
            None => write!(f, "{}, None", self.title),
        }
    }
}

/// A movie in the catalogue.
///
/// Equality, hashing and ordering use only the [`MovieKey`]. The id is
/// assigned once by the repository and never changes afterwards.
///
/// Associations to genres, actors and directors are stored as their names;
/// they are only created through the factories in this crate, which keep
/// both sides in step.
#[derive(Debug, Clone)]
pub struct Movie {
    key: MovieKey,
    id: Option<MovieId>,
    description: Option<String>,
    runtime_minutes: Option<u32>,
    directors: Vec<Name>,
    actors: Vec<Name>,
    genres: Vec<Name>,
    reviews: Vec<Review>,
}

impl Movie {
    /// Creates a movie with no id, description, runtime or associations.
    #[must_use]
    pub fn new(title: &str, release_year: i32) -> Self {
        Self {
            key: MovieKey::new(title, release_year),
            id: None,
            description: None,
            runtime_minutes: None,
            directors: Vec::new(),
            actors: Vec::new(),
            genres: Vec::new(),
            reviews: Vec::new(),
        }
    }

    #[must_use]
    pub const fn key(&self) -> &MovieKey {
        &self.key
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.key.title()
    }

    #[must_use]
    pub const fn release_year(&self) -> Option<u16> {
        self.key.release_year()
    }

    /// Returns the repository-assigned id, if the movie has been stored.
    #[must_use]
    pub const fn id(&self) -> Option<MovieId> {
        self.id
    }

    /// Assigns the movie's id.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::IdAlreadyAssigned` if the movie already has an id.
    pub fn assign_id(&mut self, id: MovieId) -> Result<(), DomainError> {
        if let Some(existing) = self.id {
            return Err(DomainError::IdAlreadyAssigned {
                movie: self.key.clone(),
                existing,
            });
        }
        self.id = Some(id);
        Ok(())
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Sets the description, trimming surrounding whitespace.
    pub fn set_description(&mut self, description: &str) {
        self.description = Some(description.trim().to_string());
    }

    #[must_use]
    pub const fn runtime_minutes(&self) -> Option<u32> {
        self.runtime_minutes
    }

    /// Sets the runtime in minutes.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRuntime` if `minutes` is not positive or
    /// does not fit in a `u32`. The previous runtime is kept.
    pub fn set_runtime_minutes(&mut self, minutes: i64) -> Result<(), DomainError> {
        let value: u32 = u32::try_from(minutes)
            .ok()
            .filter(|value| *value > 0)
            .ok_or(DomainError::InvalidRuntime(minutes))?;
        self.runtime_minutes = Some(value);
        Ok(())
    }

    #[must_use]
    pub fn directors(&self) -> &[Name] {
        &self.directors
    }

    #[must_use]
    pub fn actors(&self) -> &[Name] {
        &self.actors
    }

    #[must_use]
    pub fn genres(&self) -> &[Name] {
        &self.genres
    }

    #[must_use]
    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    #[must_use]
    pub fn number_of_directors(&self) -> usize {
        self.directors.len()
    }

    #[must_use]
    pub fn number_of_actors(&self) -> usize {
        self.actors.len()
    }

    #[must_use]
    pub fn number_of_genres(&self) -> usize {
        self.genres.len()
    }

    #[must_use]
    pub fn number_of_reviews(&self) -> usize {
        self.reviews.len()
    }

    #[must_use]
    pub fn is_genred_by(&self, genre: &Genre) -> bool {
        self.genres.contains(genre.name())
    }

    #[must_use]
    pub fn is_genred(&self) -> bool {
        !self.genres.is_empty()
    }

    #[must_use]
    pub fn is_acted_by(&self, actor: &Actor) -> bool {
        self.actors.contains(actor.name())
    }

    #[must_use]
    pub fn is_acted(&self) -> bool {
        !self.actors.is_empty()
    }

    #[must_use]
    pub fn is_directed_by(&self, director: &Director) -> bool {
        self.directors.contains(director.name())
    }

    #[must_use]
    pub fn is_directed(&self) -> bool {
        !self.directors.is_empty()
    }

    pub(crate) fn add_genre(&mut self, genre: &Genre) {
        if !self.is_genred_by(genre) {
            self.genres.push(genre.name().clone());
        }
    }

    pub(crate) fn add_actor(&mut self, actor: &Actor) {
        if !self.is_acted_by(actor) {
            self.actors.push(actor.name().clone());
        }
    }

    pub(crate) fn add_director(&mut self, director: &Director) {
        if !self.is_directed_by(director) {
            self.directors.push(director.name().clone());
        }
    }

    pub(crate) fn add_review(&mut self, review: Review) {
        self.reviews.push(review);
    }
}

impl std::fmt::Display for Movie {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Movie {}>", self.key)
    }
}

impl PartialEq for Movie {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for Movie {}

impl std::hash::Hash for Movie {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl PartialOrd for Movie {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Movie {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key.cmp(&other.key)
    }
}
