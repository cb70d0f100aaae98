//! Repository for the `reviews` table and the denormalized average rating.

use cinelog_core::types::DbId;
use sqlx::PgPool;

use crate::models::review::{CreateReview, ProfileReview, Review, ReviewWithAuthor};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, movie_id, user_id, rating, comment, created_at, updated_at";

/// Provides review persistence and the aggregate recompute.
pub struct ReviewRepo;

impl ReviewRepo {
    /// List all reviews for a movie, newest first, joined with the
    /// reviewer's username.
    pub async fn list_for_movie(
        pool: &PgPool,
        movie_id: DbId,
    ) -> Result<Vec<ReviewWithAuthor>, sqlx::Error> {
        sqlx::query_as::<_, ReviewWithAuthor>(
            "SELECT r.id, r.movie_id, r.user_id, r.rating, r.comment, r.created_at, u.username
             FROM reviews r
             JOIN users u ON u.id = r.user_id
             WHERE r.movie_id = $1
             ORDER BY r.created_at DESC",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await
    }

    /// List a user's own reviews, newest first, joined with the movie title.
    pub async fn list_for_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<ProfileReview>, sqlx::Error> {
        sqlx::query_as::<_, ProfileReview>(
            "SELECT r.id, r.rating, r.comment, r.movie_id, m.title AS movie_title, r.created_at
             FROM reviews r
             JOIN movies m ON m.id = r.movie_id
             WHERE r.user_id = $1
             ORDER BY r.created_at DESC",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }

    /// Insert a review and recompute the movie's average rating in one
    /// transaction.
    ///
    /// The movie row is locked first (`FOR UPDATE`), so concurrent
    /// submissions against the same movie serialize and the re-aggregation
    /// always sees every committed review. Returns `None` if the movie
    /// does not exist; otherwise the created review and the new average,
    /// rounded to one decimal place.
    pub async fn submit(
        pool: &PgPool,
        movie_id: DbId,
        user_id: DbId,
        input: &CreateReview,
    ) -> Result<Option<(Review, f64)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let locked: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM movies WHERE id = $1 FOR UPDATE")
                .bind(movie_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let insert_query = format!(
            "INSERT INTO reviews (movie_id, user_id, rating, comment)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let review = sqlx::query_as::<_, Review>(&insert_query)
            .bind(movie_id)
            .bind(user_id)
            .bind(input.rating)
            .bind(input.comment.as_deref())
            .fetch_one(&mut *tx)
            .await?;

        // Full re-aggregation over all reviews for the movie. AVG cannot be
        // NULL here: the row inserted above is part of the set.
        let (avg_rating,): (f64,) = sqlx::query_as(
            "UPDATE movies
             SET avg_rating = ROUND((SELECT AVG(rating) FROM reviews WHERE movie_id = $1)::numeric, 1)::float8,
                 updated_at = NOW()
             WHERE id = $1
             RETURNING avg_rating",
        )
        .bind(movie_id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(Some((review, avg_rating)))
    }

    /// Count reviews for a movie.
    pub async fn count_for_movie(pool: &PgPool, movie_id: DbId) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reviews WHERE movie_id = $1")
            .bind(movie_id)
            .fetch_one(pool)
            .await?;
        Ok(count.0)
    }
}
