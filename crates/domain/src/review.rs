// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::movie::{Movie, MovieId, MovieKey};
use crate::name::Name;
use crate::user::User;
use time::OffsetDateTime;

/// Lowest accepted rating.
pub const MIN_RATING: i64 = 1;
/// Highest accepted rating.
pub const MAX_RATING: i64 = 10;

/// A user's review of a movie.
///
/// A review refers to its user by username and to its movie by key (plus the
/// movie's id, when it had one at construction). Equality compares the movie,
/// text, rating and timestamp; the user is deliberately left out.
///
/// Constructing a review does not attach it to anything. Use
/// [`crate::make_comment`] to link it to both sides.
#[derive(Debug, Clone)]
pub struct Review {
    user: Name,
    movie: MovieKey,
    movie_id: Option<MovieId>,
    text: String,
    rating: Option<u8>,
    timestamp: OffsetDateTime,
}

impl Review {
    /// Creates a review stamped with the current time.
    ///
    /// A rating outside `1..=10` becomes absent.
    #[must_use]
    pub fn new(user: Option<&User>, movie: &Movie, text: &str, rating: i64) -> Self {
        let rating: Option<u8> = if (MIN_RATING..=MAX_RATING).contains(&rating) {
            u8::try_from(rating).ok()
        } else {
            None
        };

        Self {
            user: user.map(|user| user.name().clone()).unwrap_or_default(),
            movie: movie.key().clone(),
            movie_id: movie.id(),
            text: text.to_string(),
            rating,
            timestamp: OffsetDateTime::now_utc(),
        }
    }

    /// The reviewing user's username, if the review has a user.
    #[must_use]
    pub fn username(&self) -> Option<&str> {
        self.user.as_str()
    }

    #[must_use]
    pub const fn movie(&self) -> &MovieKey {
        &self.movie
    }

    #[must_use]
    pub const fn movie_id(&self) -> Option<MovieId> {
        self.movie_id
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn rating(&self) -> Option<u8> {
        self.rating
    }

    #[must_use]
    pub const fn timestamp(&self) -> OffsetDateTime {
        self.timestamp
    }
}

impl std::fmt::Display for Review {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.rating {
            Some(rating) => write!(
                f,
                "<Review of movie {}, rating = {rating}, timestamp = {}>",
                self.movie, self.timestamp
            ),
            None => write!(
                f,
                "<Review of movie {}, rating = None, timestamp = {}>",
                self.movie, self.timestamp
            ),
        }
    }
}

impl PartialEq for Review {
    fn eq(&self, other: &Self) -> bool {
        self.movie == other.movie
            && self.text == other.text
            && self.rating == other.rating
            && self.timestamp == other.timestamp
    }
}

impl Eq for Review {}
