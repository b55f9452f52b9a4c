use axum::{Router, routing::get};
use tower_http::trace::TraceLayer;

use crate::db::{Database, PostRepository};
use crate::handlers::{ops, posts};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct BlogState {
    pub posts: PostRepository,
}

impl BlogState {
    pub fn new(db: Database) -> Self {
        Self {
            posts: PostRepository::new(db),
        }
    }
}

pub fn blog_router(state: BlogState) -> Router {
    Router::new()
        .route("/", get(posts::index))
        .route("/about", get(posts::about))
        .route("/create", get(posts::create_form).post(posts::create_post))
        .route("/healthz", get(ops::healthz))
        .route("/metrics", get(ops::metrics))
        // static segments above take priority over this capture
        .route("/{id}", get(posts::show_post))
        .fallback(posts::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
