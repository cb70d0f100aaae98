//! Handlers for the movie catalog.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::pagination::PageMeta;
use cinelog_core::types::DbId;
use cinelog_db::models::movie::{CreateMovie, MovieFilters, MovieResponse};
use cinelog_db::models::review::ReviewResponse;
use cinelog_db::repositories::{MovieRepo, ReviewRepo};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::response::PagedResponse;
use crate::state::AppState;

/// GET /api/movies
///
/// Public catalog listing with optional filters, sorting, and pagination.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(filters): Query<MovieFilters>,
) -> AppResult<Json<PagedResponse<MovieResponse>>> {
    let page = MovieRepo::list(&state.pool, &filters).await?;

    let meta = PageMeta::new(page.total, page.page, page.limit);
    let data = page.movies.into_iter().map(MovieResponse::from).collect();

    Ok(Json(PagedResponse { data, meta }))
}

/// GET /api/movies/{id}
///
/// Movie detail plus its reviews, newest first.
pub async fn get_movie(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    let movie = MovieRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;

    let reviews: Vec<ReviewResponse> = ReviewRepo::list_for_movie(&state.pool, id)
        .await?
        .into_iter()
        .map(ReviewResponse::from)
        .collect();

    Ok(Json(json!({
        "movie": MovieResponse::from(movie),
        "reviews": reviews,
    })))
}

/// POST /api/movies
///
/// Add a movie to the catalog. Admin only.
pub async fn create_movie(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateMovie>,
) -> AppResult<(StatusCode, Json<MovieResponse>)> {
    if input.title.trim().is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Title is required".into(),
        )));
    }

    let movie = MovieRepo::create(&state.pool, &input).await?;

    tracing::info!(
        movie_id = movie.id,
        title = %movie.title,
        user_id = admin.user_id,
        "Movie created",
    );

    Ok((StatusCode::CREATED, Json(MovieResponse::from(movie))))
}
