//! Handlers for the `/movies` resource.
//!
//! Each handler is one storage round trip. Update and delete succeed even
//! when no row has the requested id.

use axum::extract::State;
use axum::Json;
use catalog_db::models::movie::{CreateMovie, Movie, UpdateMovie, UpdatedMovie};
use catalog_db::repositories::MovieRepo;

use crate::error::AppResult;
use crate::extract::{PathId, ValidatedJson};
use crate::response::SuccessResponse;
use crate::state::AppState;

/// GET /movies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Movie>>> {
    let movies = MovieRepo::list(&state.pool).await?;
    Ok(Json(movies))
}

/// POST /movies
///
/// All five fields are required; the response is the stored row.
pub async fn create(
    State(state): State<AppState>,
    ValidatedJson(input): ValidatedJson<CreateMovie>,
) -> AppResult<Json<Movie>> {
    let movie = MovieRepo::create(&state.pool, &input).await?;
    tracing::info!(movie_id = movie.id, title = %movie.title, "Movie created");
    Ok(Json(movie))
}

/// PUT /movies/{id}
///
/// Echoes the id and the submitted fields whether or not a row matched.
pub async fn update(
    State(state): State<AppState>,
    PathId(id): PathId,
    ValidatedJson(input): ValidatedJson<UpdateMovie>,
) -> AppResult<Json<UpdatedMovie>> {
    let affected = MovieRepo::update(&state.pool, id, &input).await?;
    if affected == 0 {
        tracing::debug!(movie_id = id, "Update matched no movie");
    } else {
        tracing::info!(movie_id = id, "Movie updated");
    }
    Ok(Json(UpdatedMovie { id, fields: input }))
}

/// DELETE /movies/{id}
pub async fn delete(
    State(state): State<AppState>,
    PathId(id): PathId,
) -> AppResult<Json<SuccessResponse>> {
    let deleted = MovieRepo::delete(&state.pool, id).await?;
    tracing::info!(movie_id = id, deleted, "Movie delete handled");
    Ok(Json(SuccessResponse::ok()))
}
