//! Route definitions for the `/users` resource.
//!
//! All routes are self-only: the authenticated user may only access the
//! profile and watchlist matching their own id.

use axum::routing::{delete, get};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /{id}                        -> get_profile
/// PUT    /{id}                        -> update_profile
/// GET    /{id}/watchlist              -> get_watchlist
/// POST   /{id}/watchlist              -> add_to_watchlist
/// DELETE /{id}/watchlist/{movie_id}   -> remove_from_watchlist
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}", get(user::get_profile).put(user::update_profile))
        .route(
            "/{id}/watchlist",
            get(user::get_watchlist).post(user::add_to_watchlist),
        )
        .route(
            "/{id}/watchlist/{movie_id}",
            delete(user::remove_from_watchlist),
        )
}
