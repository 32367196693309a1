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

//! Service layer over a movie catalogue [`Repository`].
//!
//! Every operation takes the repository explicitly and returns plain
//! records, so callers never hold references into the store.
//!
//! [`Repository`]: movie_catalogue_repository::Repository

mod auth;
mod error;
mod handlers;
mod password_policy;
mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{authenticate, register_user};
pub use error::{ApiError, translate_domain_error, translate_repository_error};
pub use handlers::{
    add_review, get_actor_names, get_actors, get_director_names, get_directors, get_first_movie,
    get_genre_names, get_genres, get_last_movie, get_movie, get_movie_ids_for_actor,
    get_movie_ids_for_director, get_movie_ids_for_genre, get_movies_by_ids, get_movies_by_year,
    get_random_movies, get_reviews_for_movie, watch_movie,
};
pub use password_policy::{PasswordPolicy, PasswordPolicyError};
pub use request_response::{
    ActorRecord, AddReviewRequest, DirectorRecord, GenreRecord, LoginRequest, LoginResponse,
    MovieRecord, MoviesForYear, RegisterUserRequest, ReviewRecord, WatchMovieRequest, WatchRecord,
};
