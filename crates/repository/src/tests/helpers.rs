// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Test fixtures.

use std::collections::BTreeMap;

use movie_catalogue_domain::{
    Actor, Director, Genre, Movie, MovieId, Review, User, make_actor_association, make_comment,
    make_director_association, make_genre_association,
};

use crate::{MemoryRepository, Repository};

/// One row of the five-movie fixture.
struct FixtureMovie {
    id: u32,
    title: &'static str,
    year: i32,
    genres: &'static [&'static str],
    director: &'static str,
    actors: &'static [&'static str],
    runtime: i64,
}

const FIXTURE_MOVIES: &[FixtureMovie] = &[
    FixtureMovie {
        id: 1,
        title: "Guardians of the Galaxy",
        year: 2014,
        genres: &["Action", "Adventure", "Sci-Fi"],
        director: "James Gunn",
        actors: &["Chris Pratt", "Vin Diesel", "Bradley Cooper", "Zoe Saldana"],
        runtime: 121,
    },
    FixtureMovie {
        id: 2,
        title: "Prometheus",
        year: 2012,
        genres: &["Adventure", "Mystery", "Sci-Fi"],
        director: "Ridley Scott",
        actors: &["Noomi Rapace", "Michael Fassbender", "Charlize Theron"],
        runtime: 124,
    },
    FixtureMovie {
        id: 3,
        title: "Split",
        year: 2016,
        genres: &["Horror", "Thriller"],
        director: "M. Night Shyamalan",
        actors: &["James McAvoy", "Anya Taylor-Joy"],
        runtime: 117,
    },
    FixtureMovie {
        id: 4,
        title: "Sing",
        year: 2016,
        genres: &["Animation", "Comedy", "Family"],
        director: "Christophe Lourdelet",
        actors: &["Matthew McConaughey", "Reese Witherspoon", "Scarlett Johansson"],
        runtime: 108,
    },
    FixtureMovie {
        id: 5,
        title: "Suicide Squad",
        year: 2016,
        genres: &["Action", "Adventure", "Fantasy"],
        director: "David Ayer",
        actors: &["Will Smith", "Jared Leto", "Margot Robbie", "Viola Davis"],
        runtime: 123,
    },
];

/// Builds a repository holding five movies, ten genres, three users and two
/// reviews of movie 1.
pub fn create_test_repository() -> MemoryRepository {
    let mut repo: MemoryRepository = MemoryRepository::new();
    let mut genres: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
    let mut actors: BTreeMap<&str, Vec<u32>> = BTreeMap::new();
    let mut directors: BTreeMap<&str, Vec<u32>> = BTreeMap::new();

    for row in FIXTURE_MOVIES {
        let mut movie: Movie = Movie::new(row.title, row.year);
        movie.set_runtime_minutes(row.runtime).unwrap();
        repo.add_movie(movie, MovieId::new(row.id), "A test movie.")
            .unwrap();

        for genre in row.genres {
            genres.entry(*genre).or_default().push(row.id);
        }
        for actor in row.actors {
            actors.entry(*actor).or_default().push(row.id);
        }
        directors.entry(row.director).or_default().push(row.id);
    }

    for (name, ids) in genres {
        let mut genre: Genre = Genre::new(name);
        for id in ids {
            let movie: &mut Movie = repo.get_movie_mut(MovieId::new(id)).unwrap();
            make_genre_association(movie, &mut genre).unwrap();
        }
        repo.add_genre(genre);
    }
    for (name, ids) in actors {
        let mut actor: Actor = Actor::new(name);
        for id in ids {
            let movie: &mut Movie = repo.get_movie_mut(MovieId::new(id)).unwrap();
            make_actor_association(movie, &mut actor).unwrap();
        }
        repo.add_actor(actor);
    }
    for (name, ids) in directors {
        let mut director: Director = Director::new(name);
        for id in ids {
            let movie: &mut Movie = repo.get_movie_mut(MovieId::new(id)).unwrap();
            make_director_association(movie, &mut director).unwrap();
        }
        repo.add_director(director);
    }

    repo.add_user(User::new("fmercury", "8734gfe2058v"));
    repo.add_user(User::new("thorke", "ilovebeer"));
    repo.add_user(User::new("mjackson", "thriller1982"));

    add_test_review(&mut repo, "fmercury", 1, "Oh no, COVID-19 has hit New Zealand");
    add_test_review(&mut repo, "thorke", 1, "Yeah Freddie, bad news");

    repo
}

/// Links a review to a stored user and movie, then adds it.
pub fn add_test_review(repo: &mut MemoryRepository, username: &str, id: u32, text: &str) -> Review {
    let (user, movie) = repo
        .user_and_movie_mut(username, MovieId::new(id))
        .unwrap();
    let review: Review = make_comment(text, user, movie);
    repo.add_review(review.clone()).unwrap();
    review
}

pub fn titles(movies: &[&Movie]) -> Vec<String> {
    movies
        .iter()
        .map(|movie| movie.title().unwrap_or_default().to_string())
        .collect()
}
