pub mod auth;
pub mod health;
pub mod movie;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                      register (public)
/// /auth/login                         login (public)
///
/// /movies                             list (public), create (admin only)
/// /movies/{id}                        detail + reviews (public)
/// /movies/{id}/reviews                list, submit (requires auth)
///
/// /users/{id}                         profile, update (self only)
/// /users/{id}/watchlist               list, add (self only)
/// /users/{id}/watchlist/{movie_id}    remove (self only)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (register, login).
        .nest("/auth", auth::router())
        // Movie catalog and per-movie reviews.
        .nest("/movies", movie::router())
        // User profiles and watchlists.
        .nest("/users", user::router())
}
