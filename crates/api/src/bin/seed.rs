//! Development database seeder.
//!
//! Inserts the well-known demo catalog plus an admin account
//! (`admin@example.com` / `password`). Run against a freshly migrated
//! database; it does not check for existing rows.

use cinelog_api::auth::password::hash_password;
use cinelog_db::models::movie::CreateMovie;
use cinelog_db::models::user::CreateUser;
use cinelog_db::repositories::{MovieRepo, UserRepo};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "cinelog_api=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = cinelog_db::create_pool(&database_url)
        .await
        .expect("Failed to connect to database");

    // Admin account.
    let password_hash = hash_password("password").expect("Failed to hash seed password");
    let admin = UserRepo::create(
        &pool,
        &CreateUser {
            username: "admin".to_string(),
            email: "admin@example.com".to_string(),
            password_hash,
        },
    )
    .await
    .expect("Failed to create admin user");
    UserRepo::set_admin(&pool, admin.id, true)
        .await
        .expect("Failed to promote admin user");
    tracing::info!(user_id = admin.id, email = %admin.email, "Admin account created");

    // Demo catalog.
    let movies = catalog();
    for input in &movies {
        let created = MovieRepo::create(&pool, input)
            .await
            .expect("Failed to insert seed movie");
        tracing::info!(movie_id = created.id, title = %created.title, "Seeded movie");
    }

    tracing::info!(count = movies.len(), "Seeding complete");
}

/// The six demo movies.
fn catalog() -> Vec<CreateMovie> {
    vec![
        movie(
            "Edge of Tomorrow",
            &["Sci-Fi", "Action"],
            2014,
            "Doug Liman",
            &["Tom Cruise", "Emily Blunt"],
            "A soldier relives the same day in a war against aliens.",
            "https://image.tmdb.org/t/p/w500/gfJGljf0h6pmg0k04eelsV3xO3i.jpg",
            137113,
        ),
        movie(
            "The Grand Budapest Hotel",
            &["Comedy", "Drama"],
            2014,
            "Wes Anderson",
            &["Ralph Fiennes"],
            "The adventures of a concierge at a famous hotel.",
            "https://image.tmdb.org/t/p/w500/9E2A8l6scE9f5r9lOQ5g2z1xZ3x.jpg",
            120467,
        ),
        movie(
            "Interstellar",
            &["Sci-Fi", "Drama"],
            2014,
            "Christopher Nolan",
            &["Matthew McConaughey", "Anne Hathaway"],
            "A team of explorers travel through a wormhole in space.",
            "https://image.tmdb.org/t/p/w500/gEU2QniE6E6l53S3PmwuWPiCc1I.jpg",
            157336,
        ),
        movie(
            "The Matrix",
            &["Sci-Fi", "Action"],
            1999,
            "The Wachowskis",
            &["Keanu Reeves", "Laurence Fishburne"],
            "A hacker learns the world is a simulation and joins a rebellion.",
            "https://image.tmdb.org/t/p/w500/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
            603,
        ),
        movie(
            "Inception",
            &["Sci-Fi", "Thriller"],
            2010,
            "Christopher Nolan",
            &["Leonardo DiCaprio"],
            "A thief enters people's dreams to steal secrets.",
            "https://image.tmdb.org/t/p/w500/qmDpIHrmpJINaRKAfWQfftjCdyi.jpg",
            27205,
        ),
        movie(
            "The Shawshank Redemption",
            &["Drama"],
            1994,
            "Frank Darabont",
            &["Tim Robbins", "Morgan Freeman"],
            "Two imprisoned men bond and find redemption over years.",
            "https://image.tmdb.org/t/p/w500/q6y0Go1tsGEsmtFryDOJo3dEmqu.jpg",
            278,
        ),
    ]
}

fn movie(
    title: &str,
    genre: &[&str],
    release_year: i32,
    director: &str,
    cast: &[&str],
    synopsis: &str,
    poster_url: &str,
    tmdb_id: i64,
) -> CreateMovie {
    CreateMovie {
        title: title.to_string(),
        genre: genre.iter().map(|g| g.to_string()).collect(),
        release_year: Some(release_year),
        director: Some(director.to_string()),
        cast_members: cast.iter().map(|c| c.to_string()).collect(),
        synopsis: Some(synopsis.to_string()),
        poster_url: Some(poster_url.to_string()),
        tmdb_id: Some(tmdb_id),
        trailer: None,
    }
}
