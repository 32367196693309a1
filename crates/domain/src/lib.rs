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

mod actor;
mod association;
mod director;
mod error;
mod genre;
mod movie;
mod name;
mod review;
mod user;

#[cfg(test)]
mod tests;

pub use actor::Actor;
pub use association::{
    DEFAULT_RATING, make_actor_association, make_colleague_association, make_comment,
    make_director_association, make_genre_association, make_rated_comment,
};
pub use director::Director;
pub use error::{AssociationKind, DomainError};
pub use genre::Genre;
pub use movie::{EARLIEST_RELEASE_YEAR, Movie, MovieId, MovieKey};
pub use name::Name;
pub use review::{MAX_RATING, MIN_RATING, Review};
pub use user::User;
