use async_trait::async_trait;

use crate::types::{ArticleDocument, PostPage};
use crate::Result;

#[async_trait]
pub trait ContentRepository: Send + Sync {
    /// First page of the post feed, in repository order.
    async fn first_page(&self, page_size: usize) -> Result<PostPage>;

    /// Follow an opaque cursor handed out by an earlier page.
    async fn page_at(&self, cursor: &str) -> Result<PostPage>;

    /// Fully resolved article for one post.
    async fn article(&self, uid: &str) -> Result<ArticleDocument>;

    /// Every published post uid, for static path generation.
    async fn all_uids(&self) -> Result<Vec<String>>;
}
