//! SQL DDL for the posts table.

/// SQLite schema with:
/// - `id` INTEGER PRIMARY KEY AUTOINCREMENT, so ids are never reused
/// - `created` filled in by the store at insert time (UTC)
/// - `title`/`content` NOT NULL; non-empty titles are enforced by the create handler
///
/// The table is dropped first: running the bootstrap resets the store.
pub const SQLITE_INIT: &str = r#"
DROP TABLE IF EXISTS posts;

CREATE TABLE posts (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    created TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP,
    title TEXT NOT NULL,
    content TEXT NOT NULL
);
"#;
