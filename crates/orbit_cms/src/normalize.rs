use std::collections::HashSet;

use serde_json::Value;

use orbit_core::{
    ArticleDocument, BlockKind, ContentSection, Error, Post, PostSummary, Result, RichTextBlock,
};

use crate::records::RawRecord;

/// Normalize a raw record into a list entry.
///
/// Field values are carried over verbatim. Missing `subtitle`/`author`
/// become empty strings. A missing uid or title, or any non-string text
/// field, is rejected: the raw payload is untyped and this is where it gets
/// validated.
pub fn post(record: &RawRecord) -> Result<Post> {
    Ok(Post {
        uid: require_uid(record)?,
        first_publication_date: record.first_publication_date,
        data: PostSummary {
            title: required_text(&record.data, "title")?,
            subtitle: optional_text(&record.data, "subtitle")?,
            author: optional_text(&record.data, "author")?,
        },
    })
}

/// Normalize a raw record into a detail document.
pub fn article(record: &RawRecord) -> Result<ArticleDocument> {
    let content = sections(&record.data)?;

    let mut headings = HashSet::new();
    for section in &content {
        if !headings.insert(section.heading.as_str()) {
            return Err(Error::InvalidDocument(format!(
                "duplicate section heading {:?}",
                section.heading
            )));
        }
    }

    Ok(ArticleDocument {
        uid: require_uid(record)?,
        title: required_text(&record.data, "title")?,
        subtitle: optional_text(&record.data, "subtitle")?,
        author: optional_text(&record.data, "author")?,
        banner_url: banner_url(&record.data)?,
        first_publication_date: record.first_publication_date,
        content,
    })
}

fn require_uid(record: &RawRecord) -> Result<String> {
    record
        .uid
        .clone()
        .ok_or_else(|| Error::InvalidDocument("record has no uid".to_string()))
}

fn required_text(data: &Value, field: &str) -> Result<String> {
    match data.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        Some(other) => Err(Error::InvalidDocument(format!(
            "field {:?} is not a string: {}",
            field, other
        ))),
        None => Err(Error::InvalidDocument(format!("missing field {:?}", field))),
    }
}

fn optional_text(data: &Value, field: &str) -> Result<String> {
    match data.get(field) {
        Some(Value::String(text)) => Ok(text.clone()),
        None | Some(Value::Null) => Ok(String::new()),
        Some(other) => Err(Error::InvalidDocument(format!(
            "field {:?} is not a string: {}",
            field, other
        ))),
    }
}

fn banner_url(data: &Value) -> Result<String> {
    match data.get("banner") {
        Some(banner @ Value::Object(_)) => optional_text(banner, "url"),
        None | Some(Value::Null) => Ok(String::new()),
        Some(other) => Err(Error::InvalidDocument(format!(
            "field \"banner\" is not an object: {}",
            other
        ))),
    }
}

fn sections(data: &Value) -> Result<Vec<ContentSection>> {
    let raw = match data.get("content") {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(other) => {
            return Err(Error::InvalidDocument(format!(
                "field \"content\" is not an array: {}",
                other
            )))
        }
    };

    raw.iter()
        .map(|item| {
            Ok(ContentSection {
                heading: optional_text(item, "heading")?,
                body: body_blocks(item)?,
            })
        })
        .collect()
}

fn body_blocks(section: &Value) -> Result<Vec<RichTextBlock>> {
    let raw = match section.get("body") {
        Some(Value::Array(items)) => items,
        None | Some(Value::Null) => return Ok(Vec::new()),
        Some(other) => {
            return Err(Error::InvalidDocument(format!(
                "field \"body\" is not an array: {}",
                other
            )))
        }
    };

    raw.iter()
        .map(|block| {
            Ok(RichTextBlock {
                kind: block_kind(block),
                text: optional_text(block, "text")?,
            })
        })
        .collect()
}

// Unknown kinds degrade to paragraphs so a new upstream block type still
// renders as text.
fn block_kind(block: &Value) -> BlockKind {
    match block.get("type").and_then(Value::as_str) {
        Some("preformatted") => BlockKind::Preformatted,
        Some("list-item") => BlockKind::ListItem,
        Some("o-list-item") => BlockKind::OListItem,
        _ => BlockKind::Paragraph,
    }
}
