use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, RwLock};

use orbit_core::{ArticleDocument, ContentRepository, Paginator};

/// Shared server state.
///
/// The paginator sits behind a mutex so a second "load more" trigger queues
/// behind an in-flight fetch instead of racing the merge. The article cache
/// is replaced wholesale on revalidation, never edited in place.
pub struct AppState {
    pub repository: Arc<dyn ContentRepository>,
    pub paginator: Mutex<Paginator>,
    pub articles: RwLock<HashMap<String, ArticleDocument>>,
}
