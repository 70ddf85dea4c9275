use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{Mutex, RwLock};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use orbit_core::{ArticleDocument, ContentRepository, Paginator, Result};

use crate::AppState;

/// Fetch everything the server needs before it starts serving: the first
/// page of the feed plus every article document.
pub async fn load_state(
    repository: Arc<dyn ContentRepository>,
    page_size: usize,
) -> Result<AppState> {
    let first_page = repository.first_page(page_size).await?;
    info!(
        "seeded feed with {} posts, more = {}",
        first_page.results.len(),
        first_page.next_page.is_some()
    );

    let articles = fetch_articles(&repository).await?;
    info!("resolved {} article documents", articles.len());

    Ok(AppState {
        paginator: Mutex::new(Paginator::new(repository.clone(), first_page)),
        articles: RwLock::new(articles),
        repository,
    })
}

async fn fetch_articles(
    repository: &Arc<dyn ContentRepository>,
) -> Result<HashMap<String, ArticleDocument>> {
    let mut articles = HashMap::new();
    for uid in repository.all_uids().await? {
        let article = repository.article(&uid).await?;
        articles.insert(uid, article);
    }
    Ok(articles)
}

/// Refresh the article cache wholesale on a fixed interval. The paginator
/// holds session state and is left alone; a failed refresh keeps the
/// previous snapshot.
pub fn spawn_revalidation(state: Arc<AppState>, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        loop {
            tokio::time::sleep(interval).await;
            match fetch_articles(&state.repository).await {
                Ok(articles) => {
                    let count = articles.len();
                    *state.articles.write().await = articles;
                    info!("revalidated {} article documents", count);
                }
                Err(e) => warn!("revalidation failed, keeping previous snapshot: {}", e),
            }
        }
    })
}
