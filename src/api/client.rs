//! HTTP client for the notes search server.
//!
//! One `reqwest::Client` is shared by every request the client makes. No
//! request timeout is configured: a call ends when the transport says so.

use std::future::Future;

use reqwest::header::CONTENT_TYPE;
use reqwest::Url;

use crate::api::protocol::{
    ErrorBody, HealthStatus, SearchOutcome, SearchQuery, SearchRequest, SearchResult,
    HEALTH_PATH, SEARCH_PATH,
};
use crate::{NoteSeekError, Result};

/// Something that can run one search exchange.
///
/// Implementations are cheap to clone so a copy can be moved into a
/// spawned task per search.
pub trait SearchBackend: Clone + Send + Sync + 'static {
    /// Send `query` and wait for the server's answer.
    ///
    /// # Errors
    /// Returns error if no response was obtained or its body was not JSON.
    fn search(&self, query: &SearchQuery) -> impl Future<Output = Result<SearchOutcome>> + Send;
}

/// HTTP client bound to one server origin.
#[derive(Clone, Debug)]
pub struct HttpClient {
    http: reqwest::Client,
    base: Url,
}

impl HttpClient {
    /// Create a client for the server at `base_url` (e.g. `http://127.0.0.1:5000`).
    ///
    /// # Errors
    /// Returns error if the URL does not parse or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)
            .map_err(|e| NoteSeekError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        if base.cannot_be_a_base() {
            return Err(NoteSeekError::InvalidUrl(format!(
                "{}: not a server address",
                base_url
            )));
        }

        let http = reqwest::Client::builder().build()?;

        Ok(Self { http, base })
    }

    /// Server origin this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Resolve a link returned by the server against the server origin.
    ///
    /// The server hands out links like `/pdf/notes.pdf`; absolute links
    /// are returned unchanged.
    pub fn resolve(&self, href: &str) -> Result<Url> {
        self.base
            .join(href)
            .map_err(|e| NoteSeekError::InvalidUrl(format!("{}: {}", href, e)))
    }

    /// Query the server health endpoint.
    ///
    /// The server answers 503 with a valid body while its model is not
    /// loaded, so both statuses are decoded.
    ///
    /// # Errors
    /// Returns error if the request fails or the body is not a health report.
    pub async fn health(&self) -> Result<HealthStatus> {
        let url = self.resolve(HEALTH_PATH)?;
        let response = self.http.get(url).send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        tracing::debug!("Health check answered {}", status);

        serde_json::from_slice(&bytes)
            .map_err(|e| NoteSeekError::Decode(format!("health report ({}): {}", status, e)))
    }
}

impl SearchBackend for HttpClient {
    async fn search(&self, query: &SearchQuery) -> Result<SearchOutcome> {
        let url = self.resolve(SEARCH_PATH)?;

        let response = self
            .http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .json(&SearchRequest::from(query))
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            let result: SearchResult = serde_json::from_slice(&bytes)
                .map_err(|e| NoteSeekError::Decode(format!("search result: {}", e)))?;
            Ok(SearchOutcome::Found(result))
        } else {
            let value: serde_json::Value = serde_json::from_slice(&bytes).map_err(|e| {
                NoteSeekError::Decode(format!("error body ({}): {}", status, e))
            })?;
            Ok(SearchOutcome::Rejected {
                status: status.as_u16(),
                body: ErrorBody::from_value(&value),
            })
        }
    }
}
