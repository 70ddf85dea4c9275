use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of the blog index, as shown in the post list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub uid: String,
    /// `None` only for records that were never published.
    pub first_publication_date: Option<DateTime<Utc>>,
    pub data: PostSummary,
}

/// Text fields of a list entry. All fields are plain strings, possibly empty,
/// never absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostSummary {
    pub title: String,
    pub subtitle: String,
    pub author: String,
}

/// One page of the post feed as handed out by the content repository,
/// already normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostPage {
    pub results: Vec<Post>,
    /// Opaque cursor URL for the following page, `None` when exhausted.
    pub next_page: Option<String>,
}

/// Fully resolved article for the detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleDocument {
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub banner_url: String,
    pub first_publication_date: Option<DateTime<Utc>>,
    pub content: Vec<ContentSection>,
}

/// A titled slice of an article body. Headings are unique within one
/// document; they double as section keys for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentSection {
    pub heading: String,
    pub body: Vec<RichTextBlock>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RichTextBlock {
    pub kind: BlockKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BlockKind {
    Paragraph,
    Preformatted,
    ListItem,
    OListItem,
}
