// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::HashMap;

use movie_catalogue_domain::{Actor, Director, Genre, Movie, MovieId, MovieKey, Review, User};
use tracing::{debug, warn};

use crate::Repository;
use crate::error::{RepositoryError, ReviewParty};

/// An in-memory [`Repository`].
///
/// Movies live in `movies` in insertion order and never move. `order` holds
/// their slot numbers sorted by movie key, so inserts shift small integers
/// instead of movies, and `index` maps each id straight to its slot.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    movies: Vec<Movie>,
    order: Vec<usize>,
    index: HashMap<MovieId, usize>,
    genres: Vec<Genre>,
    actors: Vec<Actor>,
    directors: Vec<Director>,
    users: Vec<User>,
    reviews: Vec<Review>,
}

impl MemoryRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn sorted(&self) -> impl Iterator<Item = &Movie> {
        self.order.iter().map(move |&slot| &self.movies[slot])
    }

    /// Iterates the stored movies whose key equals `key`, in sort order.
    fn movies_with_key<'a>(&'a self, key: &'a MovieKey) -> impl Iterator<Item = &'a Movie> {
        let start: usize = self
            .order
            .partition_point(|&slot| self.movies[slot].key() < key);
        self.order[start..]
            .iter()
            .map(move |&slot| &self.movies[slot])
            .take_while(move |movie| movie.key() == key)
    }

    /// Returns the ids of the stored movies with the given key.
    ///
    /// Binary search over the sort order; more than one id comes back only
    /// when movies sharing a title and year were added under different ids.
    #[must_use]
    pub fn find_movie_ids_by_key(&self, key: &MovieKey) -> Vec<MovieId> {
        self.movies_with_key(key).filter_map(Movie::id).collect()
    }

    /// Resolves association keys to ids, picking for each key the stored
    /// movie that `linked` accepts. Movies sharing a key but not the link are
    /// passed over.
    fn linked_ids(&self, keys: &[MovieKey], linked: impl Fn(&Movie) -> bool) -> Vec<MovieId> {
        keys.iter()
            .filter_map(|key| {
                self.movies_with_key(key)
                    .find(|movie| linked(movie))
                    .and_then(Movie::id)
            })
            .collect()
    }
}

impl Repository for MemoryRepository {
    fn add_user(&mut self, user: User) {
        debug!(username = ?user.username(), "Adding user");
        self.users.push(user);
    }

    fn get_user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|user| user.name().matches(username))
    }

    fn get_user_mut(&mut self, username: &str) -> Option<&mut User> {
        self.users
            .iter_mut()
            .find(|user| user.name().matches(username))
    }

    fn add_movie(
        &mut self,
        mut movie: Movie,
        id: MovieId,
        description: &str,
    ) -> Result<(), RepositoryError> {
        if self.index.contains_key(&id) {
            return Err(RepositoryError::DuplicateMovieId(id));
        }
        movie.assign_id(id)?;
        movie.set_description(description);

        // Insert before any equal keys, so the newest arrival of a key sorts
        // ahead of the earlier ones.
        let position: usize = self
            .order
            .partition_point(|&slot| self.movies[slot] < movie);

        debug!(%id, movie = %movie.key(), position, "Adding movie");

        let slot: usize = self.movies.len();
        self.movies.push(movie);
        self.order.insert(position, slot);
        self.index.insert(id, slot);
        Ok(())
    }

    fn get_movie(&self, id: MovieId) -> Option<&Movie> {
        self.index.get(&id).map(|&slot| &self.movies[slot])
    }

    fn get_movie_mut(&mut self, id: MovieId) -> Option<&mut Movie> {
        let slot: usize = *self.index.get(&id)?;
        self.movies.get_mut(slot)
    }

    fn get_movies(&self) -> Vec<&Movie> {
        self.sorted().collect()
    }

    fn get_movies_by_year(&self, year: u16) -> Vec<&Movie> {
        self.sorted()
            .filter(|movie| movie.release_year() == Some(year))
            .collect()
    }

    fn get_number_of_movies(&self) -> usize {
        self.movies.len()
    }

    fn get_first_movie(&self) -> Option<&Movie> {
        self.order.first().map(|&slot| &self.movies[slot])
    }

    fn get_last_movie(&self) -> Option<&Movie> {
        self.order.last().map(|&slot| &self.movies[slot])
    }

    fn get_movies_by_ids(&self, ids: &[MovieId]) -> Vec<&Movie> {
        ids.iter().filter_map(|&id| self.get_movie(id)).collect()
    }

    fn get_movie_ids_for_genre(&self, genre_name: &str) -> Vec<MovieId> {
        self.genres
            .iter()
            .find(|genre| genre.name().matches(genre_name))
            .map_or_else(Vec::new, |genre| {
                self.linked_ids(genre.movies(), |movie| movie.is_genred_by(genre))
            })
    }

    fn get_movie_ids_for_actor(&self, actor_name: &str) -> Vec<MovieId> {
        self.actors
            .iter()
            .find(|actor| actor.name().matches(actor_name))
            .map_or_else(Vec::new, |actor| {
                self.linked_ids(actor.movies(), |movie| movie.is_acted_by(actor))
            })
    }

    fn get_movie_ids_for_director(&self, director_name: &str) -> Vec<MovieId> {
        self.directors
            .iter()
            .find(|director| director.name().matches(director_name))
            .map_or_else(Vec::new, |director| {
                self.linked_ids(director.movies(), |movie| movie.is_directed_by(director))
            })
    }

    fn add_genre(&mut self, genre: Genre) {
        self.genres.push(genre);
    }

    fn get_genres(&self) -> &[Genre] {
        &self.genres
    }

    fn add_actor(&mut self, actor: Actor) {
        self.actors.push(actor);
    }

    fn get_actors(&self) -> &[Actor] {
        &self.actors
    }

    fn add_director(&mut self, director: Director) {
        self.directors.push(director);
    }

    fn get_directors(&self) -> &[Director] {
        &self.directors
    }

    fn user_and_movie_mut(
        &mut self,
        username: &str,
        id: MovieId,
    ) -> Option<(&mut User, &mut Movie)> {
        let slot: usize = *self.index.get(&id)?;
        let user: &mut User = self
            .users
            .iter_mut()
            .find(|user| user.name().matches(username))?;
        let movie: &mut Movie = self.movies.get_mut(slot)?;
        Some((user, movie))
    }

    fn add_review(&mut self, review: Review) -> Result<(), RepositoryError> {
        let attached_to_user: bool = review.username().is_some_and(|username| {
            self.users
                .iter()
                .any(|user| user.name().matches(username) && user.reviews().contains(&review))
        });
        if !attached_to_user {
            warn!(review = %review, "Rejecting review without user back-reference");
            return Err(RepositoryError::InvalidAssociation {
                party: ReviewParty::User,
            });
        }

        let attached_to_movie: bool = self
            .movies_with_key(review.movie())
            .any(|movie| movie.reviews().contains(&review));
        if !attached_to_movie {
            warn!(review = %review, "Rejecting review without movie back-reference");
            return Err(RepositoryError::InvalidAssociation {
                party: ReviewParty::Movie,
            });
        }

        debug!(movie = %review.movie(), username = ?review.username(), "Adding review");
        self.reviews.push(review);
        Ok(())
    }

    fn get_reviews(&self) -> &[Review] {
        &self.reviews
    }
}
