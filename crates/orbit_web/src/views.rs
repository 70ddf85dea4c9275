use chrono::{DateTime, Utc};
use serde::Serialize;

use orbit_core::{dates, reading_time, ArticleDocument, PaginationState, Post, Result};
use orbit_cms::rich_text;

#[derive(Debug, Serialize)]
pub struct PostListView {
    pub posts: Vec<PostView>,
    pub has_more: bool,
}

#[derive(Debug, Serialize)]
pub struct PostView {
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    /// Formatted publication date, `null` for unpublished records.
    pub published_at: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ArticleView {
    pub uid: String,
    pub title: String,
    pub subtitle: String,
    pub author: String,
    pub banner_url: String,
    pub published_at: Option<String>,
    pub reading_minutes: u32,
    pub sections: Vec<SectionView>,
}

#[derive(Debug, Serialize)]
pub struct SectionView {
    pub heading: String,
    pub html: String,
}

impl PostListView {
    pub fn from_state(state: &PaginationState) -> Result<Self> {
        Ok(Self {
            posts: state
                .posts()
                .iter()
                .map(PostView::from_post)
                .collect::<Result<Vec<_>>>()?,
            has_more: state.has_more(),
        })
    }
}

impl PostView {
    pub fn from_post(post: &Post) -> Result<Self> {
        Ok(Self {
            uid: post.uid.clone(),
            title: post.data.title.clone(),
            subtitle: post.data.subtitle.clone(),
            author: post.data.author.clone(),
            published_at: formatted(post.first_publication_date)?,
        })
    }
}

impl ArticleView {
    pub fn from_document(article: &ArticleDocument) -> Result<Self> {
        Ok(Self {
            uid: article.uid.clone(),
            title: article.title.clone(),
            subtitle: article.subtitle.clone(),
            author: article.author.clone(),
            banner_url: article.banner_url.clone(),
            published_at: formatted(article.first_publication_date)?,
            reading_minutes: reading_time::estimate_minutes(&article.content),
            sections: article
                .content
                .iter()
                .map(|section| SectionView {
                    heading: section.heading.clone(),
                    html: rich_text::as_html(&section.body),
                })
                .collect(),
        })
    }
}

// The formatter is undefined for a missing date; unpublished records skip it
// and serialize as null.
fn formatted(date: Option<DateTime<Utc>>) -> Result<Option<String>> {
    match date {
        Some(date) => Ok(Some(dates::format_publication_date(Some(date))?)),
        None => Ok(None),
    }
}
