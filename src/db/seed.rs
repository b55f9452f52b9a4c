//! One-shot bootstrap: recreate the schema and load the sample posts.

use crate::db::schema::SQLITE_INIT;
use crate::db::sqlite::{Database, finish};
use crate::error::BlogError;
use sqlx::{Connection, SqliteConnection};

/// `(title, content)` pairs inserted by [`init_db`], in id order.
pub const SEED_POSTS: [(&str, &str); 6] = [
    (
        "2020 CNCF Annual Report",
        "The Cloud Native Computing Foundation (CNCF) is an open source software foundation that promotes the adoption of cloud native computing.",
    ),
    (
        "Kubernetes Certification",
        "The Certified Kubernetes Administrator (CKA) program was created by the Cloud Native Computing Foundation (CNCF), in collaboration with The Linux Foundation, to help develop the Kubernetes ecosystem.",
    ),
    (
        "Kubernetes and Cloud Native Operations",
        "Kubernetes is an open-source system for automating deployment, scaling, and management of containerized applications.",
    ),
    (
        "Cloud Native DevOps",
        "DevOps is a set of practices that combines software development (Dev) and IT operations (Ops).",
    ),
    (
        "Kubernetes and Cloud Native Security",
        "Kubernetes provides several security features to ensure that your applications are secure.",
    ),
    (
        "CNCF Cloud Native Interactive Landscape",
        "The Cloud Native Interactive Landscape is CNCF recommended path through the cloud native ecosystem.",
    ),
];

/// Drop and recreate `posts`, then insert [`SEED_POSTS`] in a single transaction.
/// Returns the number of seeded rows.
pub async fn init_db(db: &Database) -> Result<usize, BlogError> {
    let mut conn = db.open().await?;
    let result = seed(&mut conn).await;
    finish(conn, result).await
}

async fn seed(conn: &mut SqliteConnection) -> Result<usize, sqlx::Error> {
    let mut tx = conn.begin().await?;

    // sqlx::query runs one statement at a time
    for stmt in SQLITE_INIT.split(';') {
        let s = stmt.trim();
        if s.is_empty() {
            continue;
        }
        sqlx::query(s).execute(&mut *tx).await?;
    }

    for (title, content) in SEED_POSTS {
        sqlx::query("INSERT INTO posts (title, content) VALUES (?, ?)")
            .bind(title)
            .bind(content)
            .execute(&mut *tx)
            .await?;
    }

    tx.commit().await?;
    Ok(SEED_POSTS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::PostRepository;
    use tempfile::TempDir;

    #[tokio::test]
    async fn seeding_an_empty_store_loads_six_posts() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let db = Database::new(dir.path().join("database.db")).with_create_if_missing(true);

        let seeded = init_db(&db).await.expect("seed failed");
        assert_eq!(seeded, 6);

        let repo = PostRepository::new(db);
        assert_eq!(repo.count_posts().await.expect("count failed"), 6);
        for (id, (title, content)) in (1..).zip(SEED_POSTS) {
            let post = repo
                .get_post(id)
                .await
                .expect("get failed")
                .expect("seed post missing");
            assert_eq!(post.title, title);
            assert_eq!(post.content, content);
        }
    }

    #[tokio::test]
    async fn reseeding_resets_the_table() {
        let dir = TempDir::new().expect("failed to create temp dir");
        let db = Database::new(dir.path().join("database.db")).with_create_if_missing(true);
        init_db(&db).await.expect("first seed failed");

        let repo = PostRepository::new(db.clone());
        repo.create_post("extra", "row").await.expect("create failed");
        init_db(&db).await.expect("second seed failed");

        assert_eq!(repo.count_posts().await.expect("count failed"), 6);
    }
}
