//! Repository for the `movies` table.
//!
//! The catalog listing builds its WHERE clause dynamically from the
//! optional filters and pages with LIMIT/OFFSET; the sort key goes through
//! an allow-list so client input never reaches the ORDER BY clause raw.

use cinelog_core::pagination;
use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::movie::{CreateMovie, Movie, MovieFilters, MoviePage};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, genre, release_year, director, cast_members, \
                        synopsis, poster_url, tmdb_id, trailer, avg_rating, \
                        created_at, updated_at";

/// Provides CRUD operations for the movie catalog.
pub struct MovieRepo;

impl MovieRepo {
    /// Insert a new movie, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateMovie) -> Result<Movie, sqlx::Error> {
        let query = format!(
            "INSERT INTO movies (title, genre, release_year, director, cast_members,
                                 synopsis, poster_url, tmdb_id, trailer)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Movie>(&query)
            .bind(&input.title)
            .bind(&input.genre)
            .bind(input.release_year)
            .bind(input.director.as_deref())
            .bind(&input.cast_members)
            .bind(input.synopsis.as_deref())
            .bind(input.poster_url.as_deref())
            .bind(input.tmdb_id)
            .bind(input.trailer.as_deref())
            .fetch_one(pool)
            .await
    }

    /// Find a movie by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Movie>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM movies WHERE id = $1");
        sqlx::query_as::<_, Movie>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Verify that a movie exists by ID.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM movies WHERE id = $1")
            .bind(id)
            .fetch_one(pool)
            .await?;
        Ok(count.0 > 0)
    }

    /// List movies with optional filters, sorting, and pagination.
    ///
    /// Returns one page plus the total row count for the same filters, so
    /// callers can derive the page count. Page and limit are clamped here.
    pub async fn list(pool: &PgPool, filters: &MovieFilters) -> Result<MoviePage, sqlx::Error> {
        let page = pagination::clamp_page(filters.page);
        let limit = pagination::clamp_limit(filters.limit);
        let offset = pagination::offset(page, limit);

        let genres = filters.genre.as_deref().map(parse_genres).unwrap_or_default();

        // Build dynamic WHERE clauses.
        let mut conditions = Vec::new();
        let mut bind_idx = 1u32;

        if filters.search.is_some() {
            conditions.push(format!("title ILIKE ${bind_idx}"));
            bind_idx += 1;
        }
        if !genres.is_empty() {
            // Array overlap: any shared genre matches.
            conditions.push(format!("genre && ${bind_idx}"));
            bind_idx += 1;
        }
        if filters.year.is_some() {
            conditions.push(format!("release_year = ${bind_idx}"));
            bind_idx += 1;
        }
        if filters.min_rating.is_some() {
            conditions.push(format!("avg_rating >= ${bind_idx}"));
            bind_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let order_by = order_clause(filters.sort.as_deref(), filters.order.as_deref());

        let page_query = format!(
            "SELECT {COLUMNS} FROM movies {where_clause} \
             ORDER BY {order_by} \
             LIMIT ${bind_idx} OFFSET ${next_idx}",
            next_idx = bind_idx + 1,
        );
        let count_query = format!("SELECT COUNT(*) FROM movies {where_clause}");

        let mut page_q = sqlx::query_as::<_, Movie>(&page_query);
        let mut count_q = sqlx::query_as::<_, (i64,)>(&count_query);

        // Bind dynamic parameters in clause order.
        if let Some(ref search) = filters.search {
            let pattern = format!("%{search}%");
            page_q = page_q.bind(pattern.clone());
            count_q = count_q.bind(pattern);
        }
        if !genres.is_empty() {
            page_q = page_q.bind(genres.clone());
            count_q = count_q.bind(genres.clone());
        }
        if let Some(year) = filters.year {
            page_q = page_q.bind(year);
            count_q = count_q.bind(year);
        }
        if let Some(min_rating) = filters.min_rating {
            page_q = page_q.bind(min_rating);
            count_q = count_q.bind(min_rating);
        }

        let movies = page_q.bind(limit).bind(offset).fetch_all(pool).await?;
        let (total,) = count_q.fetch_one(pool).await?;

        Ok(MoviePage {
            movies,
            total,
            page,
            limit,
        })
    }
}

/// Split a comma-separated genre parameter into trimmed, non-empty names.
fn parse_genres(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .map(str::to_string)
        .collect()
}

/// Map the public sort/order parameters onto an ORDER BY fragment.
///
/// Only allow-listed column names are emitted; anything else sorts by
/// newest first. Direction defaults to descending.
fn order_clause(sort: Option<&str>, order: Option<&str>) -> String {
    let column = match sort {
        Some("avgRating") => "avg_rating",
        Some("releaseYear") => "release_year",
        Some("title") => "title",
        _ => "created_at",
    };
    let direction = match order {
        Some(o) if o.eq_ignore_ascii_case("asc") => "ASC",
        _ => "DESC",
    };
    format!("{column} {direction}")
}
