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
#![allow(clippy::multiple_crate_versions)]

use axum::{
    Json, Router,
    extract::{Path, Query, State as AxumState},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use clap::Parser;
use movie_catalogue_api::{
    ActorRecord, AddReviewRequest, ApiError, DirectorRecord, GenreRecord, LoginRequest,
    LoginResponse, MovieRecord, MoviesForYear, PasswordPolicy, RegisterUserRequest, ReviewRecord,
    WatchMovieRequest, WatchRecord, add_review, authenticate, get_actors, get_directors,
    get_first_movie, get_genres, get_last_movie, get_movie, get_movie_ids_for_actor,
    get_movie_ids_for_director, get_movie_ids_for_genre, get_movies_by_ids, get_movies_by_year,
    get_random_movies, get_reviews_for_movie, register_user, watch_movie,
};
use movie_catalogue_domain::MovieId;
use movie_catalogue_loader::{LoaderConfig, populate, password::DEFAULT_COST};
use movie_catalogue_repository::MemoryRepository;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{info, warn};


/// Number of movies returned by `/movies/random` when no quantity is given.
const DEFAULT_RANDOM_QUANTITY: usize = 3;

/// Movie Catalogue Server - HTTP server for browsing and reviewing movies
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding movies.csv, users.csv and comments.csv
    #[arg(short, long, default_value = "data")]
    data_dir: PathBuf,

    /// Port to bind the server to
    #[arg(short, long, default_value_t = 5000)]
    port: u16,

    /// bcrypt cost for hashing passwords
    #[arg(long, default_value_t = DEFAULT_COST)]
    password_cost: u32,
}

/// Application state shared across handlers.
#[derive(Clone)]
struct AppState {
    /// The populated catalogue.
    repository: Arc<Mutex<MemoryRepository>>,
    /// Source of randomness for `/movies/random`.
    rng: Arc<Mutex<StdRng>>,
    /// Policy applied to passwords chosen at registration.
    password_policy: PasswordPolicy,
    /// bcrypt cost for passwords chosen at registration.
    password_cost: u32,
}

impl AppState {
    fn new(repository: MemoryRepository, rng: StdRng, password_cost: u32) -> Self {
        Self {
            repository: Arc::new(Mutex::new(repository)),
            rng: Arc::new(Mutex::new(rng)),
            password_policy: PasswordPolicy::default(),
            password_cost,
        }
    }
}

/// Error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ErrorResponse {
    /// Error indicator.
    error: bool,
    /// Error message.
    message: String,
}

/// An error with the HTTP status it maps to.
#[derive(Debug)]
struct HttpError {
    /// The HTTP status code.
    status: StatusCode,
    /// The error message.
    message: String,
}

impl HttpError {
    fn not_found(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: message.into(),
        }
    }

    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let body: Json<ErrorResponse> = Json(ErrorResponse {
            error: true,
            message: self.message,
        });
        (self.status, body).into_response()
    }
}

impl From<ApiError> for HttpError {
    fn from(err: ApiError) -> Self {
        let status: StatusCode = match err {
            ApiError::NonExistentMovie { .. } | ApiError::UnknownUser { .. } => {
                StatusCode::NOT_FOUND
            }
            ApiError::InvalidInput { .. } | ApiError::PasswordPolicyViolation { .. } => {
                StatusCode::BAD_REQUEST
            }
            ApiError::DuplicateUsername { .. } => StatusCode::CONFLICT,
            ApiError::AuthenticationFailed { .. } => StatusCode::UNAUTHORIZED,
            ApiError::DomainRuleViolation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if status.is_server_error() {
            warn!(error = %err, "Request failed");
        }
        Self {
            status,
            message: err.to_string(),
        }
    }
}

/// Query for `/movies`.
#[derive(Debug, Deserialize)]
struct YearQuery {
    year: u16,
}

/// Query for `/movies/by_ids`.
#[derive(Debug, Deserialize)]
struct IdsQuery {
    /// Comma-separated movie ids.
    ids: String,
}

/// Query for `/movies/random`.
#[derive(Debug, Deserialize)]
struct RandomQuery {
    quantity: Option<usize>,
}

/// Parses a comma-separated id list, ignoring empty entries.
fn parse_ids(raw: &str) -> Result<Vec<MovieId>, HttpError> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<u32>()
                .map(MovieId::new)
                .map_err(|_| HttpError::bad_request(format!("Invalid movie id: '{token}'")))
        })
        .collect()
}

/// Handler for GET `/movies/first`.
async fn handle_first_movie(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<MovieRecord>, HttpError> {
    let repo = app_state.repository.lock().await;
    get_first_movie(&*repo)
        .map(Json)
        .ok_or_else(|| HttpError::not_found("The catalogue is empty"))
}

/// Handler for GET `/movies/last`.
async fn handle_last_movie(
    AxumState(app_state): AxumState<AppState>,
) -> Result<Json<MovieRecord>, HttpError> {
    let repo = app_state.repository.lock().await;
    get_last_movie(&*repo)
        .map(Json)
        .ok_or_else(|| HttpError::not_found("The catalogue is empty"))
}

/// Handler for GET `/movies/{id}`.
async fn handle_get_movie(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<MovieRecord>, HttpError> {
    let repo = app_state.repository.lock().await;
    Ok(Json(get_movie(&*repo, MovieId::new(id))?))
}

/// Handler for GET `/movies/{id}/reviews`.
async fn handle_get_reviews(
    AxumState(app_state): AxumState<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Vec<ReviewRecord>>, HttpError> {
    let repo = app_state.repository.lock().await;
    Ok(Json(get_reviews_for_movie(&*repo, MovieId::new(id))?))
}

/// Handler for GET `/movies?year=`.
async fn handle_movies_by_year(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<YearQuery>,
) -> Json<MoviesForYear> {
    let repo = app_state.repository.lock().await;
    Json(get_movies_by_year(&*repo, query.year))
}

/// Handler for GET `/movies/by_ids?ids=`.
async fn handle_movies_by_ids(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<IdsQuery>,
) -> Result<Json<Vec<MovieRecord>>, HttpError> {
    let ids: Vec<MovieId> = parse_ids(&query.ids)?;
    let repo = app_state.repository.lock().await;
    Ok(Json(get_movies_by_ids(&*repo, &ids)))
}

/// Handler for GET `/movies/random?quantity=`.
async fn handle_random_movies(
    AxumState(app_state): AxumState<AppState>,
    Query(query): Query<RandomQuery>,
) -> Json<Vec<MovieRecord>> {
    let quantity: usize = query.quantity.unwrap_or(DEFAULT_RANDOM_QUANTITY);
    let repo = app_state.repository.lock().await;
    let mut rng = app_state.rng.lock().await;
    Json(get_random_movies(&*repo, quantity, &mut *rng))
}

/// Handler for GET `/genres`.
async fn handle_list_genres(AxumState(app_state): AxumState<AppState>) -> Json<Vec<GenreRecord>> {
    let repo = app_state.repository.lock().await;
    Json(get_genres(&*repo))
}

/// Handler for GET `/genres/{name}/movies`.
async fn handle_genre_movies(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<MovieRecord>> {
    let repo = app_state.repository.lock().await;
    let ids: Vec<MovieId> = get_movie_ids_for_genre(&*repo, &name);
    Json(get_movies_by_ids(&*repo, &ids))
}

/// Handler for GET `/actors`.
async fn handle_list_actors(AxumState(app_state): AxumState<AppState>) -> Json<Vec<ActorRecord>> {
    let repo = app_state.repository.lock().await;
    Json(get_actors(&*repo))
}

/// Handler for GET `/actors/{name}/movies`.
async fn handle_actor_movies(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<MovieRecord>> {
    let repo = app_state.repository.lock().await;
    let ids: Vec<MovieId> = get_movie_ids_for_actor(&*repo, &name);
    Json(get_movies_by_ids(&*repo, &ids))
}

/// Handler for GET `/directors`.
async fn handle_list_directors(
    AxumState(app_state): AxumState<AppState>,
) -> Json<Vec<DirectorRecord>> {
    let repo = app_state.repository.lock().await;
    Json(get_directors(&*repo))
}

/// Handler for GET `/directors/{name}/movies`.
async fn handle_director_movies(
    AxumState(app_state): AxumState<AppState>,
    Path(name): Path<String>,
) -> Json<Vec<MovieRecord>> {
    let repo = app_state.repository.lock().await;
    let ids: Vec<MovieId> = get_movie_ids_for_director(&*repo, &name);
    Json(get_movies_by_ids(&*repo, &ids))
}

/// Handler for POST `/reviews`.
async fn handle_add_review(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<AddReviewRequest>,
) -> Result<(StatusCode, Json<ReviewRecord>), HttpError> {
    info!(
        movie_id = %req.movie_id,
        username = %req.username,
        "Handling add_review request"
    );

    let mut repo = app_state.repository.lock().await;
    let record: ReviewRecord = add_review(&mut *repo, &req)?;
    drop(repo);

    Ok((StatusCode::CREATED, Json(record)))
}

/// Handler for POST `/register`.
async fn handle_register(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<RegisterUserRequest>,
) -> Result<(StatusCode, Json<LoginResponse>), HttpError> {
    info!(username = %req.username, "Handling register request");

    let mut repo = app_state.repository.lock().await;
    let response: LoginResponse = register_user(
        &mut *repo,
        &req,
        &app_state.password_policy,
        app_state.password_cost,
    )?;
    drop(repo);

    Ok((StatusCode::CREATED, Json(response)))
}

/// Handler for POST `/login`.
async fn handle_login(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, HttpError> {
    info!(username = %req.username, "Handling login request");

    let repo = app_state.repository.lock().await;
    Ok(Json(authenticate(&*repo, &req)?))
}

/// Handler for POST `/watch`.
async fn handle_watch(
    AxumState(app_state): AxumState<AppState>,
    Json(req): Json<WatchMovieRequest>,
) -> Result<Json<WatchRecord>, HttpError> {
    let mut repo = app_state.repository.lock().await;
    Ok(Json(watch_movie(&mut *repo, &req.username, req.movie_id)?))
}

/// Builds the application router with all endpoints.
fn build_router(app_state: AppState) -> Router {
    Router::new()
        .route("/movies", get(handle_movies_by_year))
        .route("/movies/first", get(handle_first_movie))
        .route("/movies/last", get(handle_last_movie))
        .route("/movies/by_ids", get(handle_movies_by_ids))
        .route("/movies/random", get(handle_random_movies))
        .route("/movies/{id}", get(handle_get_movie))
        .route("/movies/{id}/reviews", get(handle_get_reviews))
        .route("/genres", get(handle_list_genres))
        .route("/genres/{name}/movies", get(handle_genre_movies))
        .route("/actors", get(handle_list_actors))
        .route("/actors/{name}/movies", get(handle_actor_movies))
        .route("/directors", get(handle_list_directors))
        .route("/directors/{name}/movies", get(handle_director_movies))
        .route("/reviews", post(handle_add_review))
        .route("/register", post(handle_register))
        .route("/login", post(handle_login))
        .route("/watch", post(handle_watch))
        .with_state(app_state)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Args = Args::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    info!("Initializing Movie Catalogue Server");

    let config: LoaderConfig =
        LoaderConfig::new(&args.data_dir).with_password_cost(args.password_cost);
    let mut repository: MemoryRepository = MemoryRepository::new();
    populate(&config, &mut repository)?;

    let rng: StdRng = StdRng::from_rng(&mut rand::rng());
    let app_state: AppState = AppState::new(repository, rng, args.password_cost);

    // Build router
    let app: Router = build_router(app_state);

    // Bind to address
    let addr: std::net::SocketAddr = format!("127.0.0.1:{}", args.port).parse()?;
    info!("Server listening on {}", addr);

    // Run server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
