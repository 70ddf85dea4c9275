use std::collections::HashSet;
use std::sync::Arc;

use tracing::debug;

use crate::repository::ContentRepository;
use crate::types::{Post, PostPage};
use crate::{Error, Result};

/// The visible post list plus the cursor to the next page. Values are
/// immutable snapshots; a merge produces a new state instead of editing the
/// current one in place.
#[derive(Debug, Clone, PartialEq)]
pub struct PaginationState {
    posts: Vec<Post>,
    next_page: Option<String>,
}

impl PaginationState {
    pub fn new(first_page: PostPage) -> Self {
        Self {
            posts: Vec::new(),
            next_page: None,
        }
        .merged(first_page)
    }

    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    pub fn next_page(&self) -> Option<&str> {
        self.next_page.as_deref()
    }

    pub fn has_more(&self) -> bool {
        self.next_page.is_some()
    }

    /// Merge one fetched page into this state. The new page lands *before*
    /// the posts already in the list; see DESIGN.md for why this ordering is
    /// kept as-is. Duplicate uids keep the freshly fetched copy.
    fn merged(&self, page: PostPage) -> Self {
        let mut seen = HashSet::new();
        let mut posts = Vec::with_capacity(page.results.len() + self.posts.len());
        for post in page.results.into_iter().chain(self.posts.iter().cloned()) {
            if seen.insert(post.uid.clone()) {
                posts.push(post);
            }
        }
        Self {
            posts,
            next_page: page.next_page,
        }
    }
}

/// Fetch-and-merge controller over the paged post feed.
///
/// Construction seeds the session from the build-time first page, so a
/// session can only ever be initialized once. `fetch_next_page` takes
/// `&mut self`; callers sharing a paginator serialize through a lock, which
/// queues concurrent triggers instead of racing the merge.
pub struct Paginator {
    repository: Arc<dyn ContentRepository>,
    state: PaginationState,
}

impl Paginator {
    pub fn new(repository: Arc<dyn ContentRepository>, first_page: PostPage) -> Self {
        Self {
            repository,
            state: PaginationState::new(first_page),
        }
    }

    pub fn state(&self) -> &PaginationState {
        &self.state
    }

    pub fn posts(&self) -> &[Post] {
        self.state.posts()
    }

    pub fn has_more(&self) -> bool {
        self.state.has_more()
    }

    /// Fetch the page behind the stored cursor and merge it in, returning a
    /// snapshot of the new state.
    ///
    /// Fails with [`Error::NoMorePages`] when the feed is exhausted; the
    /// trigger control must be hidden before that point. On a fetch failure
    /// the state is left untouched, so retrying with the same cursor is safe.
    pub async fn fetch_next_page(&mut self) -> Result<PaginationState> {
        let cursor = match self.state.next_page() {
            Some(cursor) => cursor.to_string(),
            None => return Err(Error::NoMorePages),
        };

        let page = self.repository.page_at(&cursor).await?;
        debug!(
            "merged page of {} posts, more = {}",
            page.results.len(),
            page.next_page.is_some()
        );
        self.state = self.state.merged(page);
        Ok(self.state.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{ArticleDocument, PostSummary};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::Mutex;

    fn post(uid: &str) -> Post {
        Post {
            uid: uid.to_string(),
            first_publication_date: None,
            data: PostSummary {
                title: format!("Title {}", uid),
                subtitle: String::new(),
                author: "Author".to_string(),
            },
        }
    }

    /// Repository stub serving pages out of a cursor map. A missing cursor
    /// behaves like a network failure.
    struct StubRepository {
        pages: Mutex<HashMap<String, PostPage>>,
        calls: Mutex<Vec<String>>,
    }

    impl StubRepository {
        fn new(pages: Vec<(&str, PostPage)>) -> Arc<Self> {
            Arc::new(Self {
                pages: Mutex::new(
                    pages
                        .into_iter()
                        .map(|(k, v)| (k.to_string(), v))
                        .collect(),
                ),
                calls: Mutex::new(Vec::new()),
            })
        }
    }

    #[async_trait]
    impl ContentRepository for StubRepository {
        async fn first_page(&self, _page_size: usize) -> Result<PostPage> {
            unimplemented!("seeded through Paginator::new")
        }

        async fn page_at(&self, cursor: &str) -> Result<PostPage> {
            self.calls.lock().unwrap().push(cursor.to_string());
            self.pages
                .lock()
                .unwrap()
                .get(cursor)
                .cloned()
                .ok_or_else(|| Error::NotFound(cursor.to_string()))
        }

        async fn article(&self, uid: &str) -> Result<ArticleDocument> {
            Err(Error::NotFound(uid.to_string()))
        }

        async fn all_uids(&self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn next_page_lands_before_existing_posts() {
        let repo = StubRepository::new(vec![(
            "tok1",
            PostPage {
                results: vec![post("p2")],
                next_page: None,
            },
        )]);
        let mut paginator = Paginator::new(
            repo,
            PostPage {
                results: vec![post("p1")],
                next_page: Some("tok1".to_string()),
            },
        );

        assert!(paginator.has_more());
        let state = paginator.fetch_next_page().await.unwrap();

        let uids: Vec<&str> = state.posts().iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids, vec!["p2", "p1"]);
        assert_eq!(state.next_page(), None);
        assert!(!paginator.has_more());
    }

    #[tokio::test]
    async fn exhausted_feed_rejects_further_fetches() {
        let repo = StubRepository::new(vec![]);
        let mut paginator = Paginator::new(
            repo,
            PostPage {
                results: vec![post("p1")],
                next_page: None,
            },
        );

        for _ in 0..3 {
            let before = paginator.state().clone();
            match paginator.fetch_next_page().await {
                Err(Error::NoMorePages) => {}
                other => panic!("expected NoMorePages, got {:?}", other.map(|_| ())),
            }
            assert_eq!(paginator.state(), &before);
        }
    }

    #[tokio::test]
    async fn failed_fetch_leaves_state_unchanged() {
        let repo = StubRepository::new(vec![]);
        let mut paginator = Paginator::new(
            repo.clone(),
            PostPage {
                results: vec![post("p1")],
                next_page: Some("gone".to_string()),
            },
        );

        let before = paginator.state().clone();
        assert!(paginator.fetch_next_page().await.is_err());
        assert_eq!(paginator.state(), &before);

        // Same cursor is reissued on retry.
        assert!(paginator.fetch_next_page().await.is_err());
        assert_eq!(
            *repo.calls.lock().unwrap(),
            vec!["gone".to_string(), "gone".to_string()]
        );
    }

    #[tokio::test]
    async fn merge_drops_duplicate_uids() {
        let repo = StubRepository::new(vec![
            (
                "tok1",
                PostPage {
                    results: vec![post("p2"), post("p1")],
                    next_page: Some("tok2".to_string()),
                },
            ),
            (
                "tok2",
                PostPage {
                    results: vec![post("p3"), post("p3"), post("p2")],
                    next_page: None,
                },
            ),
        ]);
        let mut paginator = Paginator::new(
            repo,
            PostPage {
                results: vec![post("p1")],
                next_page: Some("tok1".to_string()),
            },
        );

        paginator.fetch_next_page().await.unwrap();
        let state = paginator.fetch_next_page().await.unwrap();

        let uids: Vec<&str> = state.posts().iter().map(|p| p.uid.as_str()).collect();
        assert_eq!(uids, vec!["p3", "p2", "p1"]);
    }

    #[tokio::test]
    async fn cursor_walk_terminates() {
        let repo = StubRepository::new(vec![
            (
                "tok1",
                PostPage {
                    results: vec![post("p2")],
                    next_page: Some("tok2".to_string()),
                },
            ),
            (
                "tok2",
                PostPage {
                    results: vec![post("p3")],
                    next_page: None,
                },
            ),
        ]);
        let mut paginator = Paginator::new(
            repo,
            PostPage {
                results: vec![post("p1")],
                next_page: Some("tok1".to_string()),
            },
        );

        while paginator.has_more() {
            paginator.fetch_next_page().await.unwrap();
        }
        assert_eq!(paginator.posts().len(), 3);
        assert!(matches!(
            paginator.fetch_next_page().await,
            Err(Error::NoMorePages)
        ));
    }
}
