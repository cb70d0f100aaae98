//! Movie catalog models and DTOs.

use cinelog_core::media;
use cinelog_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Full movie row from the `movies` table.
///
/// `avg_rating` is denormalized: the mean of all review ratings for this
/// movie, rounded to one decimal place, recomputed on every review insert.
#[derive(Debug, Clone, FromRow)]
pub struct Movie {
    pub id: DbId,
    pub title: String,
    pub genre: Vec<String>,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    pub cast_members: Vec<String>,
    pub synopsis: Option<String>,
    pub poster_url: Option<String>,
    pub tmdb_id: Option<i64>,
    pub trailer: Option<String>,
    pub avg_rating: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Outward-facing movie representation.
///
/// `poster_url` is always present here: titles without stored artwork get
/// the shared placeholder. The `cast_members` column serializes as `cast`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieResponse {
    pub id: DbId,
    pub title: String,
    pub genre: Vec<String>,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    #[serde(rename = "cast")]
    pub cast_members: Vec<String>,
    pub synopsis: Option<String>,
    pub poster_url: String,
    pub tmdb_id: Option<i64>,
    pub trailer: Option<String>,
    pub avg_rating: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<Movie> for MovieResponse {
    fn from(movie: Movie) -> Self {
        Self {
            id: movie.id,
            title: movie.title,
            genre: movie.genre,
            release_year: movie.release_year,
            director: movie.director,
            cast_members: movie.cast_members,
            synopsis: movie.synopsis,
            poster_url: media::poster_or_placeholder(movie.poster_url.as_deref()),
            tmdb_id: movie.tmdb_id,
            trailer: movie.trailer,
            avg_rating: movie.avg_rating,
            created_at: movie.created_at,
            updated_at: movie.updated_at,
        }
    }
}

/// DTO for creating a new movie. Only the title is required.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMovie {
    pub title: String,
    #[serde(default)]
    pub genre: Vec<String>,
    pub release_year: Option<i32>,
    pub director: Option<String>,
    #[serde(default, rename = "cast")]
    pub cast_members: Vec<String>,
    pub synopsis: Option<String>,
    pub poster_url: Option<String>,
    pub tmdb_id: Option<i64>,
    pub trailer: Option<String>,
}

/// Query parameters for the catalog listing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MovieFilters {
    /// Case-insensitive title substring.
    pub search: Option<String>,
    /// Comma-separated genre names; a movie matches on any overlap.
    pub genre: Option<String>,
    /// Exact release year.
    pub year: Option<i32>,
    /// Inclusive lower bound on the denormalized average rating.
    pub min_rating: Option<f64>,
    /// Sort key: `createdAt`, `avgRating`, `releaseYear`, or `title`.
    /// Unknown keys fall back to `createdAt`.
    pub sort: Option<String>,
    /// `asc` or `desc` (default `desc`).
    pub order: Option<String>,
    /// 1-indexed page number.
    pub page: Option<i64>,
    /// Results per page (default 12, max 100).
    pub limit: Option<i64>,
}

/// One catalog page: the matching rows plus the paging state actually
/// applied (page and limit are clamped before the query runs).
#[derive(Debug, Clone)]
pub struct MoviePage {
    pub movies: Vec<Movie>,
    pub total: i64,
    pub page: i64,
    pub limit: i64,
}
