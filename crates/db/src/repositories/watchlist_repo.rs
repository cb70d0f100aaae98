//! Repository for the `watchlist_entries` junction table.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::watchlist::WatchlistItem;

/// Provides watchlist membership operations.
pub struct WatchlistRepo;

impl WatchlistRepo {
    /// List a user's watchlist, most recently added first, joined with
    /// each movie's card fields.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<WatchlistItem>, sqlx::Error> {
        sqlx::query_as::<_, WatchlistItem>(
            "SELECT w.movie_id, m.title, m.poster_url
             FROM watchlist_entries w
             JOIN movies m ON m.id = w.movie_id
             WHERE w.user_id = $1
             ORDER BY w.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Add a movie to a user's watchlist (idempotent).
    ///
    /// The unique constraint on `(user_id, movie_id)` plus `ON CONFLICT DO
    /// NOTHING` guarantees at most one membership row however many times
    /// this is called. Returns `true` if a new row was inserted.
    pub async fn add(pool: &PgPool, user_id: DbId, movie_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query(
            "INSERT INTO watchlist_entries (user_id, movie_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, movie_id) DO NOTHING",
        )
        .bind(user_id)
        .bind(movie_id)
        .execute(pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Remove a movie from a user's watchlist.
    ///
    /// Removing a movie that was never added affects zero rows; that is
    /// still success for the caller. Returns `true` if a row was deleted.
    pub async fn remove(pool: &PgPool, user_id: DbId, movie_id: DbId) -> Result<bool, sqlx::Error> {
        let result =
            sqlx::query("DELETE FROM watchlist_entries WHERE user_id = $1 AND movie_id = $2")
                .bind(user_id)
                .bind(movie_id)
                .execute(pool)
                .await?;
        Ok(result.rows_affected() > 0)
    }
}
