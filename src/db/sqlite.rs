use crate::db::models::{Post, PostId};
use crate::error::BlogError;
use sqlx::sqlite::SqliteConnectOptions;
use sqlx::{Connection, SqliteConnection};
use std::path::Path;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

/// Opens one SQLite connection per storage operation and counts every attempt.
///
/// Clones share the same counter, so the router state can hand copies to each
/// request while `/metrics` still sees the process-wide total.
#[derive(Debug, Clone)]
pub struct Database {
    connect_opts: SqliteConnectOptions,
    opened: Arc<AtomicU64>,
}

impl Database {
    /// Database backed by the SQLite file at `path`. The file must already exist.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            connect_opts: SqliteConnectOptions::new().filename(path),
            opened: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Allow `open` to create the file; only the bootstrap utility wants this.
    pub fn with_create_if_missing(mut self, create: bool) -> Self {
        self.connect_opts = self.connect_opts.create_if_missing(create);
        self
    }

    /// Open a fresh connection. The counter is bumped before connecting, so
    /// failed attempts are counted too.
    pub async fn open(&self) -> Result<SqliteConnection, BlogError> {
        self.opened.fetch_add(1, Ordering::Relaxed);
        SqliteConnection::connect_with(&self.connect_opts)
            .await
            .map_err(BlogError::StorageUnavailable)
    }

    pub fn connections_opened(&self) -> u64 {
        self.opened.load(Ordering::Relaxed)
    }
}

/// Close `conn` and then surface the query outcome. A query error wins over a
/// close error.
pub(crate) async fn finish<T>(
    conn: SqliteConnection,
    result: Result<T, sqlx::Error>,
) -> Result<T, BlogError> {
    let closed = conn.close().await;
    let value = result?;
    closed?;
    Ok(value)
}

#[derive(Debug, Clone)]
pub struct PostRepository {
    db: Database,
}

impl PostRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    /// All posts in insertion order.
    pub async fn list_posts(&self) -> Result<Vec<Post>, BlogError> {
        let mut conn = self.db.open().await?;
        let result =
            sqlx::query_as::<_, Post>("SELECT id, created, title, content FROM posts ORDER BY id")
                .fetch_all(&mut conn)
                .await;
        finish(conn, result).await
    }

    pub async fn get_post(&self, id: PostId) -> Result<Option<Post>, BlogError> {
        let mut conn = self.db.open().await?;
        let result = sqlx::query_as::<_, Post>(
            "SELECT id, created, title, content FROM posts WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&mut conn)
        .await;
        finish(conn, result).await
    }

    /// Insert a post and return the id the store assigned. Callers validate the title.
    pub async fn create_post(&self, title: &str, content: &str) -> Result<PostId, BlogError> {
        let mut conn = self.db.open().await?;
        let result = sqlx::query("INSERT INTO posts (title, content) VALUES (?, ?)")
            .bind(title)
            .bind(content)
            .execute(&mut conn)
            .await
            .map(|done| done.last_insert_rowid());
        finish(conn, result).await
    }

    pub async fn count_posts(&self) -> Result<i64, BlogError> {
        let mut conn = self.db.open().await?;
        let result = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM posts")
            .fetch_one(&mut conn)
            .await;
        finish(conn, result).await
    }
}
