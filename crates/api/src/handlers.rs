// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Catalogue queries and review operations.

use movie_catalogue_domain::{
    DEFAULT_RATING, MAX_RATING, MIN_RATING, Movie, MovieId, Name, Review, make_rated_comment,
};
use movie_catalogue_repository::Repository;
use rand::seq::index::IndexVec;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::request_response::{
    ActorRecord, AddReviewRequest, DirectorRecord, GenreRecord, MovieRecord, MoviesForYear,
    ReviewRecord, WatchRecord,
};

fn records(movies: &[&Movie]) -> Vec<MovieRecord> {
    movies.iter().map(|movie| MovieRecord::from(*movie)).collect()
}

fn present_names<'a>(names: impl Iterator<Item = &'a Name>) -> Vec<String> {
    names.filter_map(Name::as_str).map(String::from).collect()
}

/// Reviews a movie on behalf of a registered user.
///
/// The review is attached to both the user and the movie before it is
/// stored.
///
/// # Errors
///
/// Returns an error if:
/// - The text is blank
/// - The rating is outside 1 to 10
/// - The movie does not exist
/// - The user does not exist
pub fn add_review<R: Repository + ?Sized>(
    repo: &mut R,
    request: &AddReviewRequest,
) -> Result<ReviewRecord, ApiError> {
    let text: &str = request.text.trim();
    if text.is_empty() {
        return Err(ApiError::InvalidInput {
            field: String::from("text"),
            message: String::from("Review text must not be empty"),
        });
    }

    let rating: i64 = request.rating.unwrap_or(DEFAULT_RATING);
    if !(MIN_RATING..=MAX_RATING).contains(&rating) {
        return Err(ApiError::InvalidInput {
            field: String::from("rating"),
            message: format!("Rating {rating} must be between {MIN_RATING} and {MAX_RATING}"),
        });
    }

    if repo.get_movie(request.movie_id).is_none() {
        return Err(ApiError::NonExistentMovie {
            id: request.movie_id,
        });
    }

    let (user, movie) = repo
        .user_and_movie_mut(&request.username, request.movie_id)
        .ok_or_else(|| ApiError::UnknownUser {
            username: request.username.clone(),
        })?;
    let review: Review = make_rated_comment(text, rating, user, movie);
    let record: ReviewRecord = ReviewRecord::from(&review);
    repo.add_review(review)?;

    info!(
        movie_id = %request.movie_id,
        username = %request.username,
        rating,
        "Added review"
    );
    Ok(record)
}

/// Returns the movie with the given id.
///
/// # Errors
///
/// Returns `ApiError::NonExistentMovie` if there is no such movie.
pub fn get_movie<R: Repository + ?Sized>(repo: &R, id: MovieId) -> Result<MovieRecord, ApiError> {
    repo.get_movie(id)
        .map(MovieRecord::from)
        .ok_or(ApiError::NonExistentMovie { id })
}

/// Returns the movie that sorts first, or `None` for an empty catalogue.
#[must_use]
pub fn get_first_movie<R: Repository + ?Sized>(repo: &R) -> Option<MovieRecord> {
    repo.get_first_movie().map(MovieRecord::from)
}

/// Returns the movie that sorts last, or `None` for an empty catalogue.
#[must_use]
pub fn get_last_movie<R: Repository + ?Sized>(repo: &R) -> Option<MovieRecord> {
    repo.get_last_movie().map(MovieRecord::from)
}

/// Returns the movies released in `year` along with the neighbouring
/// release years that have movies.
///
/// The neighbours are found even when `year` itself has no movies, so a
/// caller can always page from any year.
#[must_use]
pub fn get_movies_by_year<R: Repository + ?Sized>(repo: &R, year: u16) -> MoviesForYear {
    let movies: Vec<&Movie> = repo.get_movies_by_year(year);

    let mut previous_year: Option<u16> = None;
    let mut next_year: Option<u16> = None;
    for release_year in repo.get_movies().into_iter().filter_map(|movie| movie.release_year()) {
        if release_year < year {
            previous_year = previous_year.max(Some(release_year));
        } else if release_year > year {
            next_year = Some(next_year.map_or(release_year, |next| next.min(release_year)));
        }
    }

    debug!(year, count = movies.len(), ?previous_year, ?next_year, "Movies by year");
    MoviesForYear {
        year,
        movies: records(&movies),
        previous_year,
        next_year,
    }
}

#[must_use]
pub fn get_movie_ids_for_genre<R: Repository + ?Sized>(
    repo: &R,
    genre_name: &str,
) -> Vec<MovieId> {
    repo.get_movie_ids_for_genre(genre_name)
}

#[must_use]
pub fn get_movie_ids_for_actor<R: Repository + ?Sized>(
    repo: &R,
    actor_name: &str,
) -> Vec<MovieId> {
    repo.get_movie_ids_for_actor(actor_name)
}

#[must_use]
pub fn get_movie_ids_for_director<R: Repository + ?Sized>(
    repo: &R,
    director_name: &str,
) -> Vec<MovieId> {
    repo.get_movie_ids_for_director(director_name)
}

/// Returns the movies for `ids` in the order given, skipping unknown ids.
#[must_use]
pub fn get_movies_by_ids<R: Repository + ?Sized>(repo: &R, ids: &[MovieId]) -> Vec<MovieRecord> {
    records(&repo.get_movies_by_ids(ids))
}

/// Returns the reviews of a movie, oldest first.
///
/// # Errors
///
/// Returns `ApiError::NonExistentMovie` if there is no such movie.
pub fn get_reviews_for_movie<R: Repository + ?Sized>(
    repo: &R,
    id: MovieId,
) -> Result<Vec<ReviewRecord>, ApiError> {
    let movie: &Movie = repo.get_movie(id).ok_or(ApiError::NonExistentMovie { id })?;
    Ok(movie.reviews().iter().map(ReviewRecord::from).collect())
}

#[must_use]
pub fn get_genre_names<R: Repository + ?Sized>(repo: &R) -> Vec<String> {
    present_names(repo.get_genres().iter().map(|genre| genre.name()))
}

#[must_use]
pub fn get_actor_names<R: Repository + ?Sized>(repo: &R) -> Vec<String> {
    present_names(repo.get_actors().iter().map(|actor| actor.name()))
}

#[must_use]
pub fn get_director_names<R: Repository + ?Sized>(repo: &R) -> Vec<String> {
    present_names(repo.get_directors().iter().map(|director| director.name()))
}

#[must_use]
pub fn get_genres<R: Repository + ?Sized>(repo: &R) -> Vec<GenreRecord> {
    repo.get_genres()
        .iter()
        .map(|genre| {
            let ids: Vec<MovieId> = genre
                .name()
                .as_str()
                .map_or_else(Vec::new, |name| repo.get_movie_ids_for_genre(name));
            GenreRecord::new(genre, ids)
        })
        .collect()
}

#[must_use]
pub fn get_actors<R: Repository + ?Sized>(repo: &R) -> Vec<ActorRecord> {
    repo.get_actors()
        .iter()
        .map(|actor| {
            let ids: Vec<MovieId> = actor
                .name()
                .as_str()
                .map_or_else(Vec::new, |name| repo.get_movie_ids_for_actor(name));
            ActorRecord::new(actor, ids)
        })
        .collect()
}

#[must_use]
pub fn get_directors<R: Repository + ?Sized>(repo: &R) -> Vec<DirectorRecord> {
    repo.get_directors()
        .iter()
        .map(|director| {
            let ids: Vec<MovieId> = director
                .name()
                .as_str()
                .map_or_else(Vec::new, |name| repo.get_movie_ids_for_director(name));
            DirectorRecord::new(director, ids)
        })
        .collect()
}

/// Picks up to `quantity` distinct movies at random.
///
/// Asking for more movies than the catalogue holds returns all of them, in
/// random order.
pub fn get_random_movies<R, G>(repo: &R, quantity: usize, rng: &mut G) -> Vec<MovieRecord>
where
    R: Repository + ?Sized,
    G: rand::Rng + ?Sized,
{
    let movies: Vec<&Movie> = repo.get_movies();
    let amount: usize = quantity.min(movies.len());
    let picks: IndexVec = rand::seq::index::sample(rng, movies.len(), amount);

    picks
        .into_iter()
        .map(|idx| MovieRecord::from(movies[idx]))
        .collect()
}

/// Records that a user watched a movie.
///
/// # Errors
///
/// Returns an error if:
/// - The movie does not exist
/// - The user does not exist
/// - The movie has no runtime
pub fn watch_movie<R: Repository + ?Sized>(
    repo: &mut R,
    username: &str,
    id: MovieId,
) -> Result<WatchRecord, ApiError> {
    if repo.get_movie(id).is_none() {
        return Err(ApiError::NonExistentMovie { id });
    }

    let (user, movie) = repo
        .user_and_movie_mut(username, id)
        .ok_or_else(|| ApiError::UnknownUser {
            username: username.to_string(),
        })?;
    user.watch_movie(movie)?;

    info!(username, movie_id = %id, "Recorded watched movie");
    Ok(WatchRecord::from(&*user))
}
