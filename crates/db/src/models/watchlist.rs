//! Watchlist membership models.

use cinelog_core::media;
use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full row from the `watchlist_entries` junction table.
#[derive(Debug, Clone, FromRow)]
pub struct WatchlistEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub movie_id: DbId,
    pub created_at: Timestamp,
}

/// A watchlist item joined with its movie, reduced to card fields.
#[derive(Debug, Clone, FromRow)]
pub struct WatchlistItem {
    pub movie_id: DbId,
    pub title: String,
    pub poster_url: Option<String>,
}

/// Outward watchlist item; missing posters degrade to the placeholder.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchlistItemResponse {
    pub movie_id: DbId,
    pub title: String,
    pub poster_url: String,
}

impl From<WatchlistItem> for WatchlistItemResponse {
    fn from(item: WatchlistItem) -> Self {
        Self {
            movie_id: item.movie_id,
            title: item.title,
            poster_url: media::poster_or_placeholder(item.poster_url.as_deref()),
        }
    }
}

/// DTO for adding a movie to a watchlist.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddWatchlistEntry {
    pub movie_id: DbId,
}
