use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;

use orbit_core::Error;

use crate::error::ApiError;
use crate::views::{ArticleView, PostListView};
use crate::AppState;

pub async fn list_posts(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PostListView>, ApiError> {
    let paginator = state.paginator.lock().await;
    Ok(Json(PostListView::from_state(paginator.state())?))
}

/// The sole "load more" trigger. Holding the state lock across the fetch
/// serializes concurrent triggers.
pub async fn load_more(
    State(state): State<Arc<AppState>>,
) -> Result<Json<PostListView>, ApiError> {
    let mut paginator = state.paginator.lock().await;
    let snapshot = paginator.fetch_next_page().await?;
    Ok(Json(PostListView::from_state(&snapshot)?))
}

pub async fn get_article(
    State(state): State<Arc<AppState>>,
    Path(uid): Path<String>,
) -> Result<Json<ArticleView>, ApiError> {
    let articles = state.articles.read().await;
    let article = articles.get(&uid).ok_or(Error::NotFound(uid))?;
    Ok(Json(ArticleView::from_document(article)?))
}
