use axum::{
    Form,
    extract::{Path, State},
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use serde::Deserialize;
use tracing::{error, info};

use crate::db::PostId;
use crate::views;
use crate::{BlogError, router::BlogState};

pub const TITLE_REQUIRED: &str = "Title is required!";

/// Fields posted by the creation form. Missing fields arrive as empty strings.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct CreatePostForm {
    pub title: String,
    pub content: String,
}

/// GET / -> every post, oldest first.
pub async fn index(State(state): State<BlogState>) -> Result<Html<String>, BlogError> {
    let posts = state.posts.list_posts().await?;
    Ok(Html(views::index(&posts)))
}

/// GET /{id} -> a single post, or the 404 page when the id is unknown or not a number.
pub async fn show_post(
    State(state): State<BlogState>,
    Path(raw_id): Path<String>,
) -> Result<Response, BlogError> {
    let Ok(id) = raw_id.parse::<PostId>() else {
        error!("Article with id {} not found!", raw_id);
        return Ok(not_found().await.into_response());
    };

    match state.posts.get_post(id).await? {
        Some(post) => {
            info!(id, "Article \"{}\" retrieved!", post.title);
            Ok(Html(views::post(&post)).into_response())
        }
        None => {
            error!("Article with id {} not found!", id);
            Ok(not_found().await.into_response())
        }
    }
}

/// GET /about
pub async fn about() -> Html<String> {
    info!("About page retrieved!");
    Html(views::about())
}

/// GET /create -> empty form.
pub async fn create_form() -> Html<String> {
    Html(views::create(None, "", ""))
}

/// POST /create -> store the post and redirect home, or re-render the form with a
/// warning when the title is empty.
pub async fn create_post(
    State(state): State<BlogState>,
    Form(form): Form<CreatePostForm>,
) -> Result<Response, BlogError> {
    if form.title.is_empty() {
        return Ok(
            Html(views::create(Some(TITLE_REQUIRED), &form.title, &form.content)).into_response(),
        );
    }

    let id = state.posts.create_post(&form.title, &form.content).await?;
    info!(id, "Article \"{}\" created!", form.title);
    // 302 Found; axum's Redirect helpers only emit 303/307/308
    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]).into_response())
}

/// Fallback for unknown routes and unknown post ids.
pub async fn not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(views::not_found()))
}
