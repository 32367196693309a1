// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Request and response data transfer objects.
//!
//! Records are snapshots of domain entities. Associations appear as names
//! or movie ids, never as nested entities.

use movie_catalogue_domain::{Actor, Director, Genre, Movie, MovieId, Name, Review, User};
use time::OffsetDateTime;

fn names(names: &[Name]) -> Vec<String> {
    names
        .iter()
        .filter_map(Name::as_str)
        .map(String::from)
        .collect()
}

/// A movie with its reviews.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MovieRecord {
    pub id: Option<MovieId>,
    pub title: Option<String>,
    pub release_year: Option<u16>,
    pub description: Option<String>,
    pub runtime_minutes: Option<u32>,
    pub reviews: Vec<ReviewRecord>,
    pub genres: Vec<String>,
    pub actors: Vec<String>,
    pub directors: Vec<String>,
}

impl From<&Movie> for MovieRecord {
    fn from(movie: &Movie) -> Self {
        Self {
            id: movie.id(),
            title: movie.title().map(String::from),
            release_year: movie.release_year(),
            description: movie.description().map(String::from),
            runtime_minutes: movie.runtime_minutes(),
            reviews: movie.reviews().iter().map(ReviewRecord::from).collect(),
            genres: names(movie.genres()),
            actors: names(movie.actors()),
            directors: names(movie.directors()),
        }
    }
}

/// A review of a movie.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ReviewRecord {
    pub username: Option<String>,
    pub movie_id: Option<MovieId>,
    pub text: String,
    pub rating: Option<u8>,
    /// When the review was written, as RFC 3339.
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
}

impl From<&Review> for ReviewRecord {
    fn from(review: &Review) -> Self {
        Self {
            username: review.username().map(String::from),
            movie_id: review.movie_id(),
            text: review.text().to_string(),
            rating: review.rating(),
            timestamp: review.timestamp(),
        }
    }
}

/// A genre and the ids of the movies it is applied to.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct GenreRecord {
    pub name: String,
    pub movie_ids: Vec<MovieId>,
}

/// An actor, the ids of the movies they appear in, and their colleagues.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ActorRecord {
    pub name: String,
    pub movie_ids: Vec<MovieId>,
    pub colleagues: Vec<String>,
}

/// A director and the ids of the movies they directed.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct DirectorRecord {
    pub name: String,
    pub movie_ids: Vec<MovieId>,
}

impl GenreRecord {
    pub(crate) fn new(genre: &Genre, movie_ids: Vec<MovieId>) -> Self {
        Self {
            name: genre.name().to_string(),
            movie_ids,
        }
    }
}

impl ActorRecord {
    pub(crate) fn new(actor: &Actor, movie_ids: Vec<MovieId>) -> Self {
        Self {
            name: actor.name().to_string(),
            movie_ids,
            colleagues: actor
                .colleagues()
                .filter_map(Name::as_str)
                .map(String::from)
                .collect(),
        }
    }
}

impl DirectorRecord {
    pub(crate) fn new(director: &Director, movie_ids: Vec<MovieId>) -> Self {
        Self {
            name: director.name().to_string(),
            movie_ids,
        }
    }
}

/// The movies released in one year, with the nearest years either side
/// that have movies.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MoviesForYear {
    pub year: u16,
    pub movies: Vec<MovieRecord>,
    /// The latest earlier release year with at least one movie.
    pub previous_year: Option<u16>,
    /// The earliest later release year with at least one movie.
    pub next_year: Option<u16>,
}

/// Request to review a movie.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AddReviewRequest {
    pub movie_id: MovieId,
    pub username: String,
    pub text: String,
    /// Rating from 1 to 10. The default rating applies when absent.
    #[serde(default)]
    pub rating: Option<i64>,
}

/// Request to register a new user.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RegisterUserRequest {
    pub username: String,
    pub password: String,
}

/// Request to check a user's credentials.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Response for a successful registration or login.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct LoginResponse {
    pub username: String,
}

/// Request to record that a user watched a movie.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WatchMovieRequest {
    pub username: String,
    pub movie_id: MovieId,
}

/// A user's viewing history.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WatchRecord {
    pub username: String,
    /// Number of movies watched, counting repeats.
    pub movies_watched: usize,
    pub time_spent_watching_movies_minutes: u64,
}

impl From<&User> for WatchRecord {
    fn from(user: &User) -> Self {
        Self {
            username: user.name().to_string(),
            movies_watched: user.watched_movies().len(),
            time_spent_watching_movies_minutes: user.time_spent_watching_movies_minutes(),
        }
    }
}
