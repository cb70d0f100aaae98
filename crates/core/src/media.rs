//! Poster artwork fallbacks.

/// Served by the frontend when a title has no artwork of its own.
pub const PLACEHOLDER_POSTER_URL: &str = "/no-image.png";

/// Resolve an optional stored poster URL to something a client can render.
///
/// Missing or blank URLs degrade to [`PLACEHOLDER_POSTER_URL`] instead of
/// surfacing a broken image.
pub fn poster_or_placeholder(poster_url: Option<&str>) -> String {
    match poster_url {
        Some(url) if !url.trim().is_empty() => url.to_string(),
        _ => PLACEHOLDER_POSTER_URL.to_string(),
    }
}
