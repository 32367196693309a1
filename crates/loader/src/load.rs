// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use movie_catalogue_domain::{
    Actor, Director, DomainError, Genre, Movie, MovieId, Review, User, make_actor_association,
    make_comment, make_director_association, make_genre_association,
};
use movie_catalogue_repository::Repository;
use tracing::{debug, info};

use crate::error::LoaderError;
use crate::password::{DEFAULT_COST, hash_password};
use crate::table::Table;

pub const MOVIES_FILE: &str = "movies.csv";
pub const USERS_FILE: &str = "users.csv";
pub const COMMENTS_FILE: &str = "comments.csv";

const MOVIE_HEADERS: &[&str] = &[
    "rank",
    "title",
    "genre",
    "description",
    "director",
    "actors",
    "year",
];
const RUNTIME_HEADER: &str = "runtime_(minutes)";
const USER_HEADERS: &[&str] = &["id", "username", "password"];
const COMMENT_HEADERS: &[&str] = &["id", "user_id", "movie_id", "comment"];

/// Where to load from and how to treat credentials.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderConfig {
    /// Directory holding the three CSV files.
    pub data_dir: PathBuf,
    /// bcrypt cost used to hash user passwords.
    pub password_cost: u32,
}

impl LoaderConfig {
    /// Creates a config for `data_dir` with the default bcrypt cost.
    #[must_use]
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            password_cost: DEFAULT_COST,
        }
    }

    #[must_use]
    pub const fn with_password_cost(mut self, password_cost: u32) -> Self {
        self.password_cost = password_cost;
        self
    }
}

/// Loads movies, users and comments into `repo`, in that order.
///
/// # Errors
///
/// Returns the first `LoaderError` met. Rows loaded before the failure stay
/// in the repository.
pub fn populate<R: Repository + ?Sized>(
    config: &LoaderConfig,
    repo: &mut R,
) -> Result<(), LoaderError> {
    info!(data_dir = %config.data_dir.display(), "Populating repository");

    load_movies(&config.data_dir, repo)?;
    let users: HashMap<String, String> = load_users(&config.data_dir, config.password_cost, repo)?;
    load_comments(&config.data_dir, repo, &users)?;

    Ok(())
}

/// Reads `movies.csv` and links every movie to its genres, actors and
/// director.
///
/// Genres, actors and directors are created in name order, each linked to
/// its movies in file order.
///
/// # Errors
///
/// Returns a `LoaderError` for unreadable files, unparsable rank, year or
/// runtime values, and duplicate ranks.
pub fn load_movies<R: Repository + ?Sized>(
    data_dir: &Path,
    repo: &mut R,
) -> Result<usize, LoaderError> {
    let table: Table = Table::read(data_dir, MOVIES_FILE, MOVIE_HEADERS)?;

    let mut genres: BTreeMap<String, Vec<MovieId>> = BTreeMap::new();
    let mut actors: BTreeMap<String, Vec<MovieId>> = BTreeMap::new();
    let mut directors: BTreeMap<String, Vec<MovieId>> = BTreeMap::new();

    for row in table.rows() {
        let id: MovieId = MovieId::new(row.parse::<u32>("rank")?);
        let year: i32 = row.parse("year")?;

        let mut movie: Movie = Movie::new(row.field("title"), year);
        if let Some(runtime) = row.parse_optional::<i64>(RUNTIME_HEADER)? {
            movie.set_runtime_minutes(runtime)?;
        }
        repo.add_movie(movie, id, row.field("description"))?;

        for genre in row.list("genre") {
            group(&mut genres, genre, id);
        }
        for actor in row.list("actors") {
            group(&mut actors, actor, id);
        }
        let director: &str = row.field("director");
        if !director.is_empty() {
            group(&mut directors, director, id);
        }
    }

    let genre_count: usize = link(
        repo,
        genres,
        Genre::new,
        make_genre_association,
        R::add_genre,
    );
    let actor_count: usize = link(
        repo,
        actors,
        Actor::new,
        make_actor_association,
        R::add_actor,
    );
    let director_count: usize = link(
        repo,
        directors,
        Director::new,
        make_director_association,
        R::add_director,
    );

    info!(
        movies = table.len(),
        genres = genre_count,
        actors = actor_count,
        directors = director_count,
        "Loaded movies"
    );
    Ok(table.len())
}

fn group(groups: &mut BTreeMap<String, Vec<MovieId>>, name: &str, id: MovieId) {
    let ids: &mut Vec<MovieId> = groups.entry(name.to_string()).or_default();
    // A name repeated within one row links once.
    if ids.last() != Some(&id) {
        ids.push(id);
    }
}

/// Creates one entity per group, links it to the group's movies and stores it.
fn link<R, E>(
    repo: &mut R,
    groups: BTreeMap<String, Vec<MovieId>>,
    create: impl Fn(&str) -> E,
    associate: impl Fn(&mut Movie, &mut E) -> Result<(), DomainError>,
    store: impl Fn(&mut R, E),
) -> usize
where
    R: Repository + ?Sized,
{
    let count: usize = groups.len();
    for (name, ids) in groups {
        let mut entity: E = create(&name);
        for id in ids {
            let Some(movie) = repo.get_movie_mut(id) else {
                continue;
            };
            // Fails only when the movie already carries this name.
            if let Err(err) = associate(movie, &mut entity) {
                debug!(%err, "Skipping association");
            }
        }
        store(repo, entity);
    }
    count
}

/// Reads `users.csv`, hashing each password with bcrypt at `password_cost`.
///
/// Returns a map from the file's user id column to username, used to resolve
/// comment authors.
///
/// # Errors
///
/// Returns a `LoaderError` for unreadable files or a failed hash.
pub fn load_users<R: Repository + ?Sized>(
    data_dir: &Path,
    password_cost: u32,
    repo: &mut R,
) -> Result<HashMap<String, String>, LoaderError> {
    let table: Table = Table::read(data_dir, USERS_FILE, USER_HEADERS)?;
    let mut users: HashMap<String, String> = HashMap::with_capacity(table.len());

    for row in table.rows() {
        let username: &str = row.field("username");
        let password_hash: String =
            hash_password(row.field("password"), password_cost).map_err(|source| {
                LoaderError::PasswordHash {
                    username: username.to_string(),
                    source,
                }
            })?;

        repo.add_user(User::new(username, &password_hash));
        users.insert(row.field("id").to_string(), username.to_string());
    }

    info!(users = users.len(), "Loaded users");
    Ok(users)
}

/// Reads `comments.csv`, attaching each comment to its user and movie.
///
/// # Errors
///
/// Returns a `LoaderError` for unreadable files, unknown user ids or movie
/// ids, and reviews the repository rejects.
pub fn load_comments<R: Repository + ?Sized>(
    data_dir: &Path,
    repo: &mut R,
    users: &HashMap<String, String>,
) -> Result<usize, LoaderError> {
    let table: Table = Table::read(data_dir, COMMENTS_FILE, COMMENT_HEADERS)?;

    for row in table.rows() {
        let user_id: &str = row.field("user_id");
        let username: &str = users
            .get(user_id)
            .ok_or_else(|| LoaderError::UnknownUser {
                row: row.number(),
                user_id: user_id.to_string(),
            })?;
        let movie_id: MovieId = MovieId::new(row.parse::<u32>("movie_id")?);

        let (user, movie) =
            repo.user_and_movie_mut(username, movie_id)
                .ok_or(LoaderError::UnknownMovie {
                    row: row.number(),
                    movie_id,
                })?;
        let review: Review = make_comment(row.field("comment"), user, movie);
        repo.add_review(review)?;
    }

    info!(comments = table.len(), "Loaded comments");
    Ok(table.len())
}
