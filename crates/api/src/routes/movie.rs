//! Route definitions for the `/movies` resource.
//!
//! Also nests per-movie review routes under `/movies/{id}/reviews`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{movie, review};
use crate::state::AppState;

/// Routes mounted at `/movies`.
///
/// ```text
/// GET  /               -> list_movies (public)
/// POST /               -> create_movie (admin only)
/// GET  /{id}           -> get_movie (public)
/// GET  /{id}/reviews   -> list_reviews (requires auth)
/// POST /{id}/reviews   -> submit_review (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(movie::list_movies).post(movie::create_movie))
        .route("/{id}", get(movie::get_movie))
        .route(
            "/{id}/reviews",
            get(review::list_reviews).post(review::submit_review),
        )
}
