//! Review entity model and DTOs.

use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full review row from the `reviews` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: DbId,
    pub movie_id: DbId,
    pub user_id: DbId,
    pub rating: f64,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Review row joined with the reviewer's username.
#[derive(Debug, Clone, FromRow)]
pub struct ReviewWithAuthor {
    pub id: DbId,
    pub movie_id: DbId,
    pub user_id: DbId,
    pub rating: f64,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub username: String,
}

/// Outward review representation with a nested author object.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewResponse {
    pub id: DbId,
    pub movie_id: DbId,
    pub rating: f64,
    pub comment: Option<String>,
    pub created_at: Timestamp,
    pub user: ReviewAuthor,
}

/// Reviewer identity embedded in review responses.
#[derive(Debug, Clone, Serialize)]
pub struct ReviewAuthor {
    pub id: DbId,
    pub username: String,
}

impl From<ReviewWithAuthor> for ReviewResponse {
    fn from(row: ReviewWithAuthor) -> Self {
        Self {
            id: row.id,
            movie_id: row.movie_id,
            rating: row.rating,
            comment: row.comment,
            created_at: row.created_at,
            user: ReviewAuthor {
                id: row.user_id,
                username: row.username,
            },
        }
    }
}

/// A review as shown on the submitting user's own profile, joined with
/// the movie title.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileReview {
    pub id: DbId,
    pub rating: f64,
    pub comment: Option<String>,
    pub movie_id: DbId,
    pub movie_title: String,
    pub created_at: Timestamp,
}

/// DTO for submitting a review. Movie and user ids come from the route
/// and the bearer token, never the body.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateReview {
    pub rating: f64,
    pub comment: Option<String>,
}
