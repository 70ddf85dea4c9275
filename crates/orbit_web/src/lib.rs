use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;

pub mod bootstrap;
pub mod error;
pub mod handlers;
pub mod state;
pub mod views;

pub use state::AppState;

pub fn create_app(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::permissive();

    Router::new()
        .route("/api/posts", get(handlers::list_posts))
        .route("/api/posts/next", post(handlers::load_more))
        .route("/api/posts/:uid", get(handlers::get_article))
        .layer(cors)
        .with_state(state)
}

/// Bind and run the API server.
pub async fn serve(addr: &str, app: Router) -> orbit_core::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

pub mod prelude {
    pub use crate::AppState;
    pub use orbit_core::{Error, Result};
}
