// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Association factories.
//!
//! These are the only way to link entities. Each one updates both sides, so
//! a half-applied association is never visible to callers.

use crate::actor::Actor;
use crate::director::Director;
use crate::error::{AssociationKind, DomainError};
use crate::genre::Genre;
use crate::movie::Movie;
use crate::name::Name;
use crate::review::Review;
use crate::user::User;

/// Rating given to reviews created through [`make_comment`].
pub const DEFAULT_RATING: i64 = 5;

fn duplicate(kind: AssociationKind, name: &Name, movie: &Movie) -> DomainError {
    DomainError::DuplicateAssociation {
        kind,
        name: name.to_string(),
        movie: movie.key().clone(),
    }
}

/// Applies `genre` to `movie`.
///
/// # Errors
///
/// Returns `DomainError::DuplicateAssociation` if the genre is already
/// applied to the movie. Neither side is modified in that case.
pub fn make_genre_association(movie: &mut Movie, genre: &mut Genre) -> Result<(), DomainError> {
    if genre.is_applied_to(movie) {
        return Err(duplicate(AssociationKind::Genre, genre.name(), movie));
    }

    movie.add_genre(genre);
    genre.add_movie(movie);
    Ok(())
}

/// Records `actor` as appearing in `movie`.
///
/// # Errors
///
/// Returns `DomainError::DuplicateAssociation` if the actor is already
/// linked to the movie.
pub fn make_actor_association(movie: &mut Movie, actor: &mut Actor) -> Result<(), DomainError> {
    if actor.is_applied_to(movie) {
        return Err(duplicate(AssociationKind::Actor, actor.name(), movie));
    }

    movie.add_actor(actor);
    actor.add_movie(movie);
    Ok(())
}

/// Records `director` as directing `movie`.
///
/// # Errors
///
/// Returns `DomainError::DuplicateAssociation` if the director is already
/// linked to the movie.
pub fn make_director_association(
    movie: &mut Movie,
    director: &mut Director,
) -> Result<(), DomainError> {
    if director.is_applied_to(movie) {
        return Err(duplicate(AssociationKind::Director, director.name(), movie));
    }

    movie.add_director(director);
    director.add_movie(movie);
    Ok(())
}

/// Records two actors as colleagues of each other.
pub fn make_colleague_association(actor: &mut Actor, colleague: &mut Actor) {
    actor.add_actor_colleague(colleague);
    colleague.add_actor_colleague(actor);
}

/// Creates a review by `user` of `movie` with the default rating and attaches
/// it to both.
///
/// There is no duplicate check: a user may review the same movie many times.
pub fn make_comment(text: &str, user: &mut User, movie: &mut Movie) -> Review {
    make_rated_comment(text, DEFAULT_RATING, user, movie)
}

/// Like [`make_comment`], with an explicit rating.
///
/// A rating outside `1..=10` is stored as absent.
pub fn make_rated_comment(text: &str, rating: i64, user: &mut User, movie: &mut Movie) -> Review {
    let review: Review = Review::new(Some(&*user), movie, text, rating);
    user.add_review(review.clone());
    movie.add_review(review.clone());
    review
}
