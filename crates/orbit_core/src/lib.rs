pub mod dates;
pub mod error;
pub mod pagination;
pub mod reading_time;
pub mod repository;
pub mod types;

pub use error::Error;
pub use pagination::{PaginationState, Paginator};
pub use repository::ContentRepository;
pub use types::{
    ArticleDocument, BlockKind, ContentSection, Post, PostPage, PostSummary, RichTextBlock,
};

pub type Result<T> = std::result::Result<T, Error>;
