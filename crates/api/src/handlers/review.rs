//! Handlers for movie reviews and the denormalized rating aggregate.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::rating::validate_rating;
use cinelog_core::types::DbId;
use cinelog_db::models::review::{CreateReview, ReviewResponse};
use cinelog_db::repositories::{MovieRepo, ReviewRepo};
use serde_json::json;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// GET /api/movies/{id}/reviews
///
/// List a movie's reviews, newest first, each with the reviewer's public
/// identity.
pub async fn list_reviews(
    RequireAuth(_auth): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    if !MovieRepo::exists(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound { entity: "Movie", id }));
    }

    let reviews: Vec<ReviewResponse> = ReviewRepo::list_for_movie(&state.pool, id)
        .await?
        .into_iter()
        .map(ReviewResponse::from)
        .collect();

    Ok(Json(json!({ "reviews": reviews })))
}

/// POST /api/movies/{id}/reviews
///
/// Submit a review. The movie's average rating is recomputed in the same
/// transaction as the insert, so the returned `avgRating` already includes
/// this review.
pub async fn submit_review(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<CreateReview>,
) -> AppResult<(StatusCode, Json<serde_json::Value>)> {
    validate_rating(input.rating)?;

    let (review, avg_rating) = ReviewRepo::submit(&state.pool, id, auth.user_id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Movie", id }))?;

    tracing::info!(
        movie_id = id,
        review_id = review.id,
        user_id = auth.user_id,
        avg_rating,
        "Review submitted",
    );

    Ok((
        StatusCode::CREATED,
        Json(json!({ "review": review, "avgRating": avg_rating })),
    ))
}
