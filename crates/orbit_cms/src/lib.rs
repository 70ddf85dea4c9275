pub mod client;
pub mod config;
pub mod normalize;
pub mod records;
pub mod rich_text;

pub use client::CmsClient;
pub use config::Config;

pub mod prelude {
    pub use crate::{CmsClient, Config};
    pub use orbit_core::{ContentRepository, Error, Result};
}
