//! Handlers for user profiles and per-user watchlists.
//!
//! Every route here is self-only: the `{id}` in the path must match the
//! authenticated user's id from the bearer token.

use axum::extract::{Path, State};
use axum::Json;
use cinelog_core::error::CoreError;
use cinelog_core::types::{DbId, Timestamp};
use cinelog_db::models::review::ProfileReview;
use cinelog_db::models::user::{PublicUser, UpdateUser};
use cinelog_db::models::watchlist::{AddWatchlistEntry, WatchlistItemResponse};
use cinelog_db::repositories::{MovieRepo, ReviewRepo, UserRepo, WatchlistRepo};
use serde::{Deserialize, Serialize};
use serde_json::json;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `PUT /api/users/{id}`. Only present fields change.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    #[validate(length(min = 2, message = "Username must be at least 2 characters long"))]
    pub username: Option<String>,
    #[validate(email(message = "A valid email is required"))]
    pub email: Option<String>,
}

/// Response body for `GET /api/users/{id}`: identity plus the user's
/// reviews and watchlist.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: DbId,
    pub username: String,
    pub email: String,
    pub created_at: Timestamp,
    pub reviews: Vec<ProfileReview>,
    pub watchlist: Vec<WatchlistItemResponse>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/users/{id}
///
/// A user's own profile with their review history and watchlist.
pub async fn get_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProfileResponse>> {
    ensure_self(&auth, id)?;

    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let reviews = ReviewRepo::list_for_user(&state.pool, id).await?;
    let watchlist = load_watchlist(&state, id).await?;

    Ok(Json(ProfileResponse {
        id: user.id,
        username: user.username,
        email: user.email,
        created_at: user.created_at,
        reviews,
        watchlist,
    }))
}

/// PUT /api/users/{id}
///
/// Update the user's own profile fields. Returns the updated public user.
pub async fn update_profile(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProfileRequest>,
) -> AppResult<Json<PublicUser>> {
    ensure_self(&auth, id)?;
    input.validate()?;

    let update_dto = UpdateUser {
        username: input.username,
        email: input.email,
    };
    let user = UserRepo::update(&state.pool, id, &update_dto)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    Ok(Json(PublicUser::from(user)))
}

/// GET /api/users/{id}/watchlist
pub async fn get_watchlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<serde_json::Value>> {
    ensure_self(&auth, id)?;

    let watchlist = load_watchlist(&state, id).await?;
    Ok(Json(json!({ "watchlist": watchlist })))
}

/// POST /api/users/{id}/watchlist
///
/// Add a movie to the user's watchlist. Adding a movie that is already on
/// the list leaves exactly one membership row.
pub async fn add_to_watchlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<AddWatchlistEntry>,
) -> AppResult<Json<serde_json::Value>> {
    ensure_self(&auth, id)?;

    if !MovieRepo::exists(&state.pool, input.movie_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Movie",
            id: input.movie_id,
        }));
    }

    WatchlistRepo::add(&state.pool, id, input.movie_id).await?;

    tracing::info!(user_id = id, movie_id = input.movie_id, "Watchlist add");

    let watchlist = load_watchlist(&state, id).await?;
    Ok(Json(json!({
        "message": "Added to watchlist",
        "watchlist": watchlist,
    })))
}

/// DELETE /api/users/{id}/watchlist/{movie_id}
///
/// Remove a movie from the user's watchlist. Removing a movie that is not
/// on the list (or does not exist) is a no-op success.
pub async fn remove_from_watchlist(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((id, movie_id)): Path<(DbId, DbId)>,
) -> AppResult<Json<serde_json::Value>> {
    ensure_self(&auth, id)?;

    WatchlistRepo::remove(&state.pool, id, movie_id).await?;

    let watchlist = load_watchlist(&state, id).await?;
    Ok(Json(json!({
        "message": "Removed from watchlist",
        "watchlist": watchlist,
    })))
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Reject requests whose path id differs from the authenticated user.
fn ensure_self(auth: &AuthUser, id: DbId) -> AppResult<()> {
    if auth.user_id != id {
        return Err(AppError::Core(CoreError::Forbidden(
            "You can only access your own profile".into(),
        )));
    }
    Ok(())
}

/// Fetch a user's watchlist in its outward form.
async fn load_watchlist(state: &AppState, user_id: DbId) -> AppResult<Vec<WatchlistItemResponse>> {
    let items = WatchlistRepo::list_for_user(&state.pool, user_id)
        .await?
        .into_iter()
        .map(WatchlistItemResponse::from)
        .collect();
    Ok(items)
}
