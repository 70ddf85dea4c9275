use std::time::Duration;

use url::Url;

use orbit_core::{Error, Result};

pub const DEFAULT_PAGE_SIZE: usize = 20;
pub const DEFAULT_REVALIDATE: Duration = Duration::from_secs(24 * 60 * 60);

/// Connection settings for the content repository.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the repository API.
    pub api_url: Url,
    /// Page-size hint passed on the first query.
    pub page_size: usize,
    /// How often the bootstrap data is refreshed.
    pub revalidate: Duration,
}

impl Config {
    pub fn new(api_url: &str) -> Result<Self> {
        let mut api_url = Url::parse(api_url)
            .map_err(|e| Error::Config(format!("invalid api url {:?}: {}", api_url, e)))?;
        // A trailing slash keeps Url::join from eating the last path segment.
        if !api_url.path().ends_with('/') {
            api_url.set_path(&format!("{}/", api_url.path()));
        }
        Ok(Self {
            api_url,
            page_size: DEFAULT_PAGE_SIZE,
            revalidate: DEFAULT_REVALIDATE,
        })
    }

    /// Read `ORBIT_API_URL`, `ORBIT_PAGE_SIZE` and `ORBIT_REVALIDATE_SECS`.
    pub fn from_env() -> Result<Self> {
        let api_url = std::env::var("ORBIT_API_URL")
            .map_err(|_| Error::Config("ORBIT_API_URL is not set".to_string()))?;
        let mut config = Self::new(&api_url)?;
        if let Ok(raw) = std::env::var("ORBIT_PAGE_SIZE") {
            config.page_size = raw
                .parse()
                .map_err(|_| Error::Config(format!("invalid ORBIT_PAGE_SIZE {:?}", raw)))?;
        }
        if let Ok(raw) = std::env::var("ORBIT_REVALIDATE_SECS") {
            let secs: u64 = raw
                .parse()
                .map_err(|_| Error::Config(format!("invalid ORBIT_REVALIDATE_SECS {:?}", raw)))?;
            config.revalidate = Duration::from_secs(secs);
        }
        Ok(config)
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn with_revalidate(mut self, revalidate: Duration) -> Self {
        self.revalidate = revalidate;
        self
    }
}
