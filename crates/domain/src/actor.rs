// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::movie::{Movie, MovieKey};
use crate::name::Name;
use std::cmp::Ordering;
use std::collections::BTreeSet;

/// An actor, identified by full name.
///
/// Besides the movies acted in, an actor keeps the set of colleagues they
/// have worked with. Colleagues are recorded explicitly; co-starring in a
/// movie does not add them.
#[derive(Debug, Clone)]
pub struct Actor {
    name: Name,
    movies: Vec<MovieKey>,
    colleagues: BTreeSet<Name>,
}

impl Actor {
    #[must_use]
    pub fn new(full_name: &str) -> Self {
        Self {
            name: Name::new(full_name),
            movies: Vec::new(),
            colleagues: BTreeSet::new(),
        }
    }

    #[must_use]
    pub const fn name(&self) -> &Name {
        &self.name
    }

    /// The movies acted in, in association order.
    #[must_use]
    pub fn movies(&self) -> &[MovieKey] {
        &self.movies
    }

    /// The names of recorded colleagues, in name order.
    pub fn colleagues(&self) -> impl Iterator<Item = &Name> {
        self.colleagues.iter()
    }

    /// Records `colleague` as someone this actor has worked with.
    ///
    /// Nameless colleagues and the actor themself are ignored.
    pub fn add_actor_colleague(&mut self, colleague: &Self) {
        if colleague.name.is_present() && colleague.name != self.name {
            self.colleagues.insert(colleague.name.clone());
        }
    }

    #[must_use]
    pub fn check_if_this_actor_worked_with(&self, colleague: &Self) -> bool {
        self.colleagues.contains(&colleague.name)
    }

    #[must_use]
    pub fn is_applied_to(&self, movie: &Movie) -> bool {
        self.movies.contains(movie.key())
    }

    pub(crate) fn add_movie(&mut self, movie: &Movie) {
        self.movies.push(movie.key().clone());
    }
}

impl std::fmt::Display for Actor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<Actor {}>", self.name)
    }
}

impl PartialEq for Actor {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Actor {}

impl std::hash::Hash for Actor {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl PartialOrd for Actor {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Actor {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name.cmp(&other.name)
    }
}
