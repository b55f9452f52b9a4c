//! Database module: models, schema and storage access for blog posts.
//!
//! Layout:
//! - `models.rs`: Rust structs mirroring DB rows
//! - `schema.rs`: SQL DDL for initializing the database (SQLite)
//! - `sqlite.rs`: per-operation connection accessor and the post repository
//! - `seed.rs`: one-shot schema + sample data bootstrap

pub mod models;
pub mod schema;
pub mod seed;
pub mod sqlite;

pub use models::{Post, PostId};
pub use schema::SQLITE_INIT;
pub use seed::{SEED_POSTS, init_db};
pub use sqlite::{Database, PostRepository};
