//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - `Serialize` response structs for the public JSON surface, which is
//!   camelCase on the wire while the row structs stay snake_case

pub mod movie;
pub mod review;
pub mod user;
pub mod watchlist;
