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

mod error;
mod memory;

#[cfg(test)]
mod tests;

use movie_catalogue_domain::{Actor, Director, Genre, Movie, MovieId, Review, User};

pub use error::{RepositoryError, ReviewParty};
pub use memory::MemoryRepository;

/// Storage and query contract for the movie catalogue.
///
/// Lookups that miss return `None` or an empty collection; only the mutating
/// operations that carry a precondition return errors. Implementations are
/// single-writer: callers serialize access.
pub trait Repository {
    /// Adds a user. Usernames are not checked for uniqueness.
    fn add_user(&mut self, user: User);

    /// Returns the first user with the given username.
    fn get_user(&self, username: &str) -> Option<&User>;

    /// Mutable form of [`Repository::get_user`].
    fn get_user_mut(&mut self, username: &str) -> Option<&mut User>;

    /// Inserts a movie in sort order, assigning its id and description.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::DuplicateMovieId` if `id` is already in use,
    /// or `RepositoryError::DomainViolation` if the movie already carries an
    /// id. The repository is unchanged on error.
    fn add_movie(
        &mut self,
        movie: Movie,
        id: MovieId,
        description: &str,
    ) -> Result<(), RepositoryError>;

    /// Returns the movie with the given id.
    fn get_movie(&self, id: MovieId) -> Option<&Movie>;

    /// Mutable form of [`Repository::get_movie`].
    ///
    /// Only fields outside the movie's identity can change through this
    /// reference, so the sort order is unaffected.
    fn get_movie_mut(&mut self, id: MovieId) -> Option<&mut Movie>;

    /// Returns every movie in sort order.
    fn get_movies(&self) -> Vec<&Movie>;

    /// Returns the movies released in `year`, in sort order.
    fn get_movies_by_year(&self, year: u16) -> Vec<&Movie>;

    fn get_number_of_movies(&self) -> usize;

    /// Returns the movie that sorts first.
    fn get_first_movie(&self) -> Option<&Movie>;

    /// Returns the movie that sorts last.
    fn get_last_movie(&self) -> Option<&Movie>;

    /// Returns the movies for `ids`, in the order given, skipping unknown ids.
    fn get_movies_by_ids(&self, ids: &[MovieId]) -> Vec<&Movie>;

    /// Returns the ids of the movies linked to the first genre named
    /// `genre_name`, or an empty list if there is no such genre.
    fn get_movie_ids_for_genre(&self, genre_name: &str) -> Vec<MovieId>;

    /// Returns the ids of the movies linked to the first actor named
    /// `actor_name`, or an empty list if there is no such actor.
    fn get_movie_ids_for_actor(&self, actor_name: &str) -> Vec<MovieId>;

    /// Returns the ids of the movies linked to the first director named
    /// `director_name`, or an empty list if there is no such director.
    fn get_movie_ids_for_director(&self, director_name: &str) -> Vec<MovieId>;

    fn add_genre(&mut self, genre: Genre);

    fn get_genres(&self) -> &[Genre];

    fn add_actor(&mut self, actor: Actor);

    fn get_actors(&self) -> &[Actor];

    fn add_director(&mut self, director: Director);

    fn get_directors(&self) -> &[Director];

    /// Returns the named user and the identified movie at the same time, so
    /// that both sides of a review can be linked while they are stored here.
    fn user_and_movie_mut(
        &mut self,
        username: &str,
        id: MovieId,
    ) -> Option<(&mut User, &mut Movie)>;

    /// Adds a review.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::InvalidAssociation` unless both the review's
    /// user and its movie are stored here and already hold the review. The
    /// repository is unchanged on error.
    fn add_review(&mut self, review: Review) -> Result<(), RepositoryError>;

    fn get_reviews(&self) -> &[Review];
}
