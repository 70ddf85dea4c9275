use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::debug;
use url::Url;

use orbit_core::{ArticleDocument, ContentRepository, Error, PostPage, Result};

use crate::config::Config;
use crate::normalize;
use crate::records::{QueryResponse, RawRecord};

/// HTTP client for the headless content repository.
///
/// Cursors handed out in `next_page` are full URLs and are followed
/// verbatim; everything else goes through the configured base URL.
pub struct CmsClient {
    http: reqwest::Client,
    config: Config,
}

impl CmsClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.config
            .api_url
            .join(path)
            .map_err(|e| Error::Config(format!("invalid endpoint {:?}: {}", path, e)))
    }

    async fn query(&self, url: Url) -> Result<PostPage> {
        debug!("querying {}", url);
        let response = self.http.get(url).send().await?.error_for_status()?;
        let envelope: QueryResponse = response.json().await?;
        let results = envelope
            .results
            .iter()
            .map(normalize::post)
            .collect::<Result<Vec<_>>>()?;
        Ok(PostPage {
            results,
            next_page: envelope.next_page,
        })
    }
}

#[async_trait]
impl ContentRepository for CmsClient {
    async fn first_page(&self, page_size: usize) -> Result<PostPage> {
        let mut url = self.endpoint("documents")?;
        url.query_pairs_mut()
            .append_pair("pageSize", &page_size.to_string());
        self.query(url).await
    }

    async fn page_at(&self, cursor: &str) -> Result<PostPage> {
        let url = Url::parse(cursor)
            .map_err(|e| Error::InvalidArgument(format!("bad page cursor {:?}: {}", cursor, e)))?;
        self.query(url).await
    }

    async fn article(&self, uid: &str) -> Result<ArticleDocument> {
        let url = self.endpoint(&format!("documents/{}", uid))?;
        debug!("fetching article {}", uid);
        let response = self.http.get(url).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Err(Error::NotFound(uid.to_string()));
        }
        let record: RawRecord = response.error_for_status()?.json().await?;
        normalize::article(&record)
    }

    async fn all_uids(&self) -> Result<Vec<String>> {
        let mut page = self.first_page(self.config.page_size).await?;
        let mut uids: Vec<String> = page.results.iter().map(|p| p.uid.clone()).collect();
        while let Some(cursor) = page.next_page.clone() {
            page = self.page_at(&cursor).await?;
            uids.extend(page.results.iter().map(|p| p.uid.clone()));
        }
        Ok(uids)
    }
}
