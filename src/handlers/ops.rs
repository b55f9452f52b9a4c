use axum::{Json, extract::State};
use serde::Serialize;

use crate::{BlogError, router::BlogState};

#[derive(Debug, Serialize)]
pub struct Health {
    pub result: &'static str,
}

#[derive(Debug, Serialize)]
pub struct Metrics {
    pub post_count: i64,
    pub db_connection_count: u64,
}

/// GET /healthz -> liveness only; never touches the database.
pub async fn healthz() -> Json<Health> {
    Json(Health {
        result: "OK - healthy",
    })
}

/// GET /metrics -> post count plus connections opened so far, including the one
/// this request used for counting.
pub async fn metrics(State(state): State<BlogState>) -> Result<Json<Metrics>, BlogError> {
    let post_count = state.posts.count_posts().await?;
    let db_connection_count = state.posts.database().connections_opened();
    Ok(Json(Metrics {
        post_count,
        db_connection_count,
    }))
}
