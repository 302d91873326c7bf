//! Document request

use async_trait::async_trait;
use gloo_net::http::Request;

use folio::loader::{DocumentSource, LoadError, LoadResult, SourceResponse};
use folio::DOCUMENT_PATH;

/// Fetches the document relative to the page URL
pub struct GlooSource {
    url: String,
}

impl GlooSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl Default for GlooSource {
    fn default() -> Self {
        Self::new(DOCUMENT_PATH)
    }
}

#[async_trait(?Send)]
impl DocumentSource for GlooSource {
    fn location(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> LoadResult<SourceResponse> {
        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .binary()
            .await
            .map_err(|e| LoadError::Network(e.to_string()))?;

        Ok(SourceResponse { status, body })
    }
}
