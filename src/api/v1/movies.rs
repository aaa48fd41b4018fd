//! Movie management handlers.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::api::AppState;
use crate::db::{Database, Id, Movie};
use crate::service::ServiceError;

const MSG_SAVED: &str = "saved";
const MSG_UPDATED: &str = "updated";
const MSG_DELETED: &str = "deleted";
const MSG_RENTAL_STATUS_UPDATED: &str = "rental status updated";
const MSG_NOT_FOUND: &str = "not found";
const MSG_RENTAL_STATUS_REQUIRED: &str = "rental status is required";

// =============================================================================
// DTOs (Data Transfer Objects)
// =============================================================================

/// Movie response DTO
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    /// Storage-assigned identifier
    #[schema(example = 1)]
    pub id: Id,
    #[schema(example = "Inception")]
    pub name: String,
    #[schema(example = "https://img.example/inception.jpg")]
    pub cover_url: Option<String>,
    pub description: Option<String>,
    #[schema(example = 9)]
    pub score: Option<i32>,
    #[schema(example = "available")]
    pub status: Option<String>,
    #[schema(example = "available")]
    pub rental_status: Option<String>,
    #[schema(example = "2024-05-01")]
    pub created_at: Option<NaiveDate>,
    #[schema(example = "2024-05-01T10:30:00")]
    pub modified_at: Option<NaiveDateTime>,
}

impl From<Movie> for MovieResponse {
    fn from(m: Movie) -> Self {
        Self {
            id: m.id,
            name: m.name,
            cover_url: m.cover_url,
            description: m.description,
            score: m.score,
            status: m.status,
            rental_status: m.rental_status,
            created_at: m.created_at,
            modified_at: m.modified_at,
        }
    }
}

/// Save movie request DTO
///
/// An `id` in the body is ignored; storage assigns one.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaveMovieRequest {
    #[schema(example = "Inception")]
    pub name: String,
    pub cover_url: Option<String>,
    pub description: Option<String>,
    #[schema(example = 9)]
    pub score: Option<i32>,
    #[schema(example = "available")]
    pub status: Option<String>,
    #[schema(example = "available")]
    pub rental_status: Option<String>,
    /// Defaults to today when omitted
    pub created_at: Option<NaiveDate>,
    /// Defaults to now when omitted. A bare date is read as midnight.
    #[serde(default, deserialize_with = "crate::db::utils::deserialize_date_or_datetime")]
    #[schema(example = "2024-05-01T10:30:00")]
    pub modified_at: Option<NaiveDateTime>,
}

impl From<SaveMovieRequest> for Movie {
    fn from(req: SaveMovieRequest) -> Self {
        Movie {
            id: 0, // Repository will assign this
            name: req.name,
            cover_url: req.cover_url,
            description: req.description,
            score: req.score,
            status: req.status,
            rental_status: req.rental_status,
            created_at: req.created_at,
            modified_at: req.modified_at,
        }
    }
}

/// Update movie request DTO
///
/// `createdAt` and `modifiedAt` in the body are ignored; the modification
/// time is always set by the server.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateMovieRequest {
    #[schema(example = 1)]
    pub id: Id,
    #[schema(example = "Inception")]
    pub name: String,
    pub cover_url: Option<String>,
    pub description: Option<String>,
    #[schema(example = 10)]
    pub score: Option<i32>,
    #[schema(example = "in-edition")]
    pub status: Option<String>,
    #[schema(example = "rented")]
    pub rental_status: Option<String>,
}

impl From<UpdateMovieRequest> for Movie {
    fn from(req: UpdateMovieRequest) -> Self {
        Movie {
            id: req.id,
            name: req.name,
            cover_url: req.cover_url,
            description: req.description,
            score: req.score,
            status: req.status,
            rental_status: req.rental_status,
            created_at: None,
            modified_at: None,
        }
    }
}

/// Uniform outcome envelope for write operations
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ServiceResponse {
    /// Whether the operation succeeded
    #[schema(example = true)]
    pub success: Option<bool>,
    /// Human-readable outcome
    #[schema(example = "saved")]
    pub message: String,
}

impl ServiceResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: Some(true),
            message: message.into(),
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: Some(false),
            message: message.into(),
        }
    }
}

type Failure = (StatusCode, Json<ServiceResponse>);

/// Map a service error to a status code and envelope.
///
/// `label` names the failed operation ("error saving", ...) and is used for
/// rejected input and storage failures. Storage failures append the service
/// error text, which never carries driver details.
fn failure(label: &str, err: ServiceError) -> Failure {
    match err {
        ServiceError::NotFound { .. } => (
            StatusCode::NOT_FOUND,
            Json(ServiceResponse::failed(MSG_NOT_FOUND)),
        ),
        ServiceError::Rejected { .. } => (
            StatusCode::BAD_REQUEST,
            Json(ServiceResponse::failed(label)),
        ),
        storage @ ServiceError::Storage { .. } => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ServiceResponse::failed(format!("{}: {}", label, storage))),
        ),
    }
}

/// Decode the raw rental-status body.
///
/// Plain text is taken as-is (trimmed). A JSON string literal such as
/// `"rented"` is unquoted first.
fn parse_rental_status(body: &str) -> Option<String> {
    let trimmed = body.trim();
    let status = if trimmed.starts_with('"') {
        serde_json::from_str::<String>(trimmed).unwrap_or_else(|_| trimmed.to_string())
    } else {
        trimmed.to_string()
    };

    if status.trim().is_empty() {
        None
    } else {
        Some(status)
    }
}

// =============================================================================
// Handlers
// =============================================================================

/// List all movies
///
/// Returns every movie in storage order
#[utoipa::path(
    get,
    path = "/api/v1/movie/list",
    tag = "movies",
    responses(
        (status = 200, description = "List of movies", body = Vec<MovieResponse>),
        (status = 500, description = "Storage failure", body = ServiceResponse)
    )
)]
#[instrument(skip(state))]
pub async fn list_movies<D: Database>(
    State(state): State<AppState<D>>,
) -> Result<Json<Vec<MovieResponse>>, Failure> {
    let movies = state
        .movies()
        .find_all()
        .await
        .map_err(|e| failure("error listing", e))?;

    Ok(Json(movies.into_iter().map(MovieResponse::from).collect()))
}

/// Get a movie by ID
#[utoipa::path(
    get,
    path = "/api/v1/movie/{id}",
    tag = "movies",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie found", body = MovieResponse),
        (status = 404, description = "Movie not found", body = ServiceResponse),
        (status = 500, description = "Storage failure", body = ServiceResponse)
    )
)]
#[instrument(skip(state))]
pub async fn get_movie<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> Result<Json<MovieResponse>, Failure> {
    let movie = state
        .movies()
        .find_by_id(id)
        .await
        .map_err(|e| failure("error fetching", e))?;

    Ok(Json(MovieResponse::from(movie)))
}

/// Save a new movie
#[utoipa::path(
    post,
    path = "/api/v1/movie/save",
    tag = "movies",
    request_body = SaveMovieRequest,
    responses(
        (status = 200, description = "Movie saved", body = ServiceResponse),
        (status = 400, description = "Movie rejected, e.g. blank name", body = ServiceResponse),
        (status = 500, description = "Storage failure", body = ServiceResponse)
    )
)]
#[instrument(skip(state))]
pub async fn save_movie<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<SaveMovieRequest>,
) -> Result<Json<ServiceResponse>, Failure> {
    let movie = Movie::from(req);

    state
        .movies()
        .save(&movie)
        .await
        .map_err(|e| failure("error saving", e))?;

    Ok(Json(ServiceResponse::ok(MSG_SAVED)))
}

/// Update a movie
///
/// Overwrites every mutable field of the movie matching `id`
#[utoipa::path(
    post,
    path = "/api/v1/movie/update",
    tag = "movies",
    request_body = UpdateMovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = ServiceResponse),
        (status = 400, description = "Movie rejected", body = ServiceResponse),
        (status = 404, description = "Movie not found", body = ServiceResponse),
        (status = 500, description = "Storage failure", body = ServiceResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_movie<D: Database>(
    State(state): State<AppState<D>>,
    Json(req): Json<UpdateMovieRequest>,
) -> Result<Json<ServiceResponse>, Failure> {
    let movie = Movie::from(req);

    state
        .movies()
        .update(&movie)
        .await
        .map_err(|e| failure("error updating", e))?;

    Ok(Json(ServiceResponse::ok(MSG_UPDATED)))
}

/// Delete a movie
#[utoipa::path(
    delete,
    path = "/api/v1/movie/delete/{id}",
    tag = "movies",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = ServiceResponse),
        (status = 404, description = "Movie not found", body = ServiceResponse),
        (status = 500, description = "Storage failure", body = ServiceResponse)
    )
)]
#[instrument(skip(state))]
pub async fn delete_movie<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
) -> Result<Json<ServiceResponse>, Failure> {
    state
        .movies()
        .delete_by_id(id)
        .await
        .map_err(|e| failure("error deleting", e))?;

    Ok(Json(ServiceResponse::ok(MSG_DELETED)))
}

/// Update the rental status of a movie
///
/// The request body is the new status as raw text
#[utoipa::path(
    put,
    path = "/api/v1/movie/updateEstadoAlquiler/{id}",
    tag = "movies",
    params(
        ("id" = i64, Path, description = "Movie ID")
    ),
    request_body(
        content = String,
        content_type = "text/plain",
        description = "New rental status, e.g. rented"
    ),
    responses(
        (status = 200, description = "Rental status updated", body = ServiceResponse),
        (status = 400, description = "Empty rental status", body = ServiceResponse),
        (status = 404, description = "Movie not found", body = ServiceResponse),
        (status = 500, description = "Storage failure", body = ServiceResponse)
    )
)]
#[instrument(skip(state))]
pub async fn update_rental_status<D: Database>(
    State(state): State<AppState<D>>,
    Path(id): Path<Id>,
    body: String,
) -> Result<Json<ServiceResponse>, Failure> {
    let rental_status = parse_rental_status(&body).ok_or_else(|| {
        (
            StatusCode::BAD_REQUEST,
            Json(ServiceResponse::failed(MSG_RENTAL_STATUS_REQUIRED)),
        )
    })?;

    state
        .movies()
        .update_rental_status(id, &rental_status)
        .await
        .map_err(|e| failure("error updating rental status", e))?;

    Ok(Json(ServiceResponse::ok(MSG_RENTAL_STATUS_UPDATED)))
}
