use reqwest::Url;

use crate::config::CONFIG;
use crate::error::SearchError;
use crate::models::{QueryParameters, SearchResponse};

pub const SEARCH_PATH: &str = "/search";

/// HTTP client for the backend's `/search` endpoint.
#[derive(Debug, Clone)]
pub struct SearchClient {
    base_url: String,
    http: reqwest::Client,
}

impl SearchClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(base_url, reqwest::Client::new())
    }

    pub fn with_http(base_url: impl Into<String>, http: reqwest::Client) -> Self {
        Self {
            base_url: base_url.into(),
            http,
        }
    }

    /// Client pointed at the configured backend
    pub fn from_config() -> Self {
        Self::new(CONFIG.base_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Builds `<base>/search?q=..&page=..&limit=..`. Every value is
    /// form-urlencoded, so `&`, `#` or `?` typed into the form stay inside
    /// their own parameter.
    pub fn search_url(&self, params: &QueryParameters) -> Result<Url, SearchError> {
        let url_error = |e: &dyn std::fmt::Display| SearchError::Url {
            url: self.base_url.clone(),
            reason: e.to_string(),
        };
        let base = Url::parse(&self.base_url).map_err(|e| url_error(&e))?;
        let mut url = base.join(SEARCH_PATH).map_err(|e| url_error(&e))?;
        url.query_pairs_mut()
            .clear()
            .append_pair("q", &params.query)
            .append_pair("page", &params.page)
            .append_pair("limit", &params.limit);
        Ok(url)
    }

    pub async fn search(&self, params: &QueryParameters) -> Result<SearchResponse, SearchError> {
        let url = self.search_url(params)?;
        tracing::debug!(%url, "sending search request");

        let res = self.http.get(url).send().await?;
        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            tracing::warn!(%status, "search backend returned an error");
            return Err(SearchError::Status {
                status,
                body: body.trim().to_string(),
            });
        }

        let response: SearchResponse = serde_json::from_str(&body)?;
        tracing::debug!(
            total = response.total_quantity,
            page = response.page_quantity,
            "search response decoded"
        );
        Ok(response)
    }
}
