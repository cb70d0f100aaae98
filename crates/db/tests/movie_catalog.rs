//! Integration tests for catalog listing: filters, sorting, pagination.

use sqlx::PgPool;

use cinelog_db::models::movie::{CreateMovie, MovieFilters};
use cinelog_db::models::review::CreateReview;
use cinelog_db::models::user::CreateUser;
use cinelog_db::repositories::{MovieRepo, ReviewRepo, UserRepo};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn movie(title: &str, genres: &[&str], year: i32) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        genre: genres.iter().map(|g| g.to_string()).collect(),
        release_year: Some(year),
        director: None,
        cast_members: vec![],
        synopsis: None,
        poster_url: None,
        tmdb_id: None,
        trailer: None,
    }
}

/// Filters with everything off; tests override what they exercise.
fn no_filters() -> MovieFilters {
    MovieFilters::default()
}

async fn seed_catalog(pool: &PgPool) {
    for (title, genres, year) in [
        ("Edge of Tomorrow", &["Sci-Fi", "Action"][..], 2014),
        ("The Grand Budapest Hotel", &["Comedy", "Drama"][..], 2014),
        ("Interstellar", &["Sci-Fi", "Drama"][..], 2014),
        ("The Matrix", &["Sci-Fi", "Action"][..], 1999),
        ("Inception", &["Sci-Fi", "Thriller"][..], 2010),
    ] {
        MovieRepo::create(pool, &movie(title, genres, year)).await.unwrap();
    }
}

// ---------------------------------------------------------------------------
// Test: unfiltered listing returns everything with the total
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_unfiltered(pool: PgPool) {
    seed_catalog(&pool).await;

    let page = MovieRepo::list(&pool, &no_filters()).await.unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.movies.len(), 5);
    assert_eq!(page.page, 1);
    assert_eq!(page.limit, 12, "default page size");
}

// ---------------------------------------------------------------------------
// Test: title search is a case-insensitive substring match
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_search_is_case_insensitive(pool: PgPool) {
    seed_catalog(&pool).await;

    let filters = MovieFilters {
        search: Some("matrix".to_string()),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.movies[0].title, "The Matrix");

    let filters = MovieFilters {
        search: Some("THE".to_string()),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.total, 2, "The Grand Budapest Hotel and The Matrix");
}

// ---------------------------------------------------------------------------
// Test: genre filter matches on set overlap
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_genre_filter_overlaps(pool: PgPool) {
    seed_catalog(&pool).await;

    let filters = MovieFilters {
        genre: Some("Action".to_string()),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.total, 2, "Edge of Tomorrow and The Matrix");

    // Comma-separated list: any overlap qualifies.
    let filters = MovieFilters {
        genre: Some("Action,Drama".to_string()),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.total, 4);

    let filters = MovieFilters {
        genre: Some("Documentary".to_string()),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.total, 0);
    assert!(page.movies.is_empty());
}

// ---------------------------------------------------------------------------
// Test: exact year filter
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_year_filter(pool: PgPool) {
    seed_catalog(&pool).await;

    let filters = MovieFilters {
        year: Some(2014),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.total, 3);
    assert!(page.movies.iter().all(|m| m.release_year == Some(2014)));
}

// ---------------------------------------------------------------------------
// Test: minRating is an inclusive lower bound on the denormalized average
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_min_rating_filter(pool: PgPool) {
    let reviewer = UserRepo::create(
        &pool,
        &CreateUser {
            username: "rater".to_string(),
            email: "rater@example.com".to_string(),
            password_hash: "$argon2id$fake".to_string(),
        },
    )
    .await
    .unwrap();

    let high = MovieRepo::create(&pool, &movie("High", &["Drama"], 2020)).await.unwrap();
    let low = MovieRepo::create(&pool, &movie("Low", &["Drama"], 2020)).await.unwrap();
    MovieRepo::create(&pool, &movie("Unrated", &["Drama"], 2020)).await.unwrap();

    for rating in [4.0, 5.0] {
        ReviewRepo::submit(&pool, high.id, reviewer.id, &CreateReview { rating, comment: None })
            .await
            .unwrap()
            .expect("movie exists");
    }
    ReviewRepo::submit(&pool, low.id, reviewer.id, &CreateReview { rating: 2.0, comment: None })
        .await
        .unwrap()
        .expect("movie exists");

    let filters = MovieFilters {
        min_rating: Some(3.0),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.movies[0].title, "High");

    // Inclusive bound: 4.5 >= 4.5.
    let filters = MovieFilters {
        min_rating: Some(4.5),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.total, 1);
}

// ---------------------------------------------------------------------------
// Test: pagination math and page clamping
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_pagination(pool: PgPool) {
    seed_catalog(&pool).await;

    let filters = MovieFilters {
        limit: Some(2),
        page: Some(1),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.total, 5);
    assert_eq!(page.movies.len(), 2);
    assert_eq!(cinelog_core::pagination::total_pages(page.total, page.limit), 3);

    // The last page holds the remainder.
    let filters = MovieFilters {
        limit: Some(2),
        page: Some(3),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.movies.len(), 1);

    // Page 0 clamps to 1 rather than erroring on a negative offset.
    let filters = MovieFilters {
        limit: Some(2),
        page: Some(0),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.page, 1);
    assert_eq!(page.movies.len(), 2);
}

// ---------------------------------------------------------------------------
// Test: sort allow-list, direction, and fallback
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_sorting(pool: PgPool) {
    seed_catalog(&pool).await;

    let filters = MovieFilters {
        sort: Some("title".to_string()),
        order: Some("asc".to_string()),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.movies[0].title, "Edge of Tomorrow");
    assert_eq!(page.movies[4].title, "The Matrix");

    let filters = MovieFilters {
        sort: Some("releaseYear".to_string()),
        order: Some("asc".to_string()),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.movies[0].title, "The Matrix");

    // Unknown sort keys are ignored, not interpolated.
    let filters = MovieFilters {
        sort: Some("password_hash; DROP TABLE movies".to_string()),
        ..no_filters()
    };
    let page = MovieRepo::list(&pool, &filters).await.unwrap();
    assert_eq!(page.total, 5, "fallback sort still returns every row");
}
