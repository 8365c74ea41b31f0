//! Wire types for the notes search HTTP API.
//!
//! All bodies are JSON. A search is `POST /api/search` with
//! `{"query": "..."}`; success returns a [`SearchResult`], failure returns
//! a non-2xx status with an optional `error` string.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Path of the search endpoint, relative to the server origin.
pub const SEARCH_PATH: &str = "/api/search";

/// Path of the server health endpoint.
pub const HEALTH_PATH: &str = "/healthz";

/// A validated search query: trimmed and never empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Build a query from raw input field text.
    ///
    /// Returns `None` when the input is empty or whitespace-only.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Search request body sent to the server.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SearchRequest {
    /// Trimmed query text
    pub query: String,
}

impl From<&SearchQuery> for SearchRequest {
    fn from(query: &SearchQuery) -> Self {
        Self {
            query: query.as_str().to_string(),
        }
    }
}

/// Metadata of the best-matching document.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Display title
    pub name: String,
    /// Viewer location, also used for the inline preview
    pub url: String,
    /// Attachment location; absent means "use `url`"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_url: Option<String>,
}

impl SearchResult {
    /// Target for the download link: `download_url` when present and
    /// non-empty, otherwise `url`.
    pub fn download_target(&self) -> &str {
        match self.download_url.as_deref() {
            Some(dl) if !dl.is_empty() => dl,
            _ => &self.url,
        }
    }
}

/// Failure body returned with a non-2xx status.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBody {
    /// Human-readable failure reason
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Extra diagnostics (e.g. why the model is unavailable)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorBody {
    /// Extract the failure fields from an arbitrary JSON value.
    ///
    /// Non-object bodies and non-string fields yield empty fields rather
    /// than an error, since any JSON is acceptable on the failure path.
    pub fn from_value(value: &Value) -> Self {
        let text = |key: &str| value.get(key).and_then(Value::as_str).map(str::to_string);
        Self {
            error: text("error"),
            details: text("details"),
        }
    }

    /// The message to show for this failure, if the server supplied one.
    pub fn message(&self) -> Option<&str> {
        self.error.as_deref().filter(|e| !e.is_empty())
    }
}

/// Server health report from `GET /healthz`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthStatus {
    pub ok: bool,
    pub model_loaded: bool,
    pub pdf_count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// A completed HTTP exchange with the search endpoint.
///
/// Transport failures (no response at all, or an undecodable body) are
/// reported as errors instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// 2xx response carrying a result
    Found(SearchResult),
    /// Non-2xx response
    Rejected { status: u16, body: ErrorBody },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_is_trimmed() {
        let query = SearchQuery::parse("  linear algebra \n").unwrap();
        assert_eq!(query.as_str(), "linear algebra");
    }

    #[test]
    fn test_blank_query_rejected() {
        assert!(SearchQuery::parse("").is_none());
        assert!(SearchQuery::parse(" \t\n ").is_none());
    }

    #[test]
    fn test_search_request_body() {
        let query = SearchQuery::parse(" graphs ").unwrap();
        let json = serde_json::to_value(SearchRequest::from(&query)).unwrap();
        assert_eq!(json, json!({"query": "graphs"}));
    }

    #[test]
    fn test_download_target_falls_back_to_url() {
        let result: SearchResult =
            serde_json::from_value(json!({"name": "Doc A", "url": "https://x/a.pdf"})).unwrap();
        assert_eq!(result.download_url, None);
        assert_eq!(result.download_target(), "https://x/a.pdf");
    }

    #[test]
    fn test_download_target_prefers_download_url() {
        let result: SearchResult = serde_json::from_value(json!({
            "name": "Doc B",
            "url": "https://x/b.pdf",
            "download_url": "https://x/b.pdf?dl=1"
        }))
        .unwrap();
        assert_eq!(result.download_target(), "https://x/b.pdf?dl=1");
    }

    #[test]
    fn test_empty_download_url_falls_back() {
        let result = SearchResult {
            name: "Doc".to_string(),
            url: "/pdf/doc.pdf".to_string(),
            download_url: Some(String::new()),
        };
        assert_eq!(result.download_target(), "/pdf/doc.pdf");
    }

    #[test]
    fn test_null_download_url_is_absent() {
        let result: SearchResult = serde_json::from_value(json!({
            "name": "Doc",
            "url": "/pdf/doc.pdf",
            "download_url": null
        }))
        .unwrap();
        assert_eq!(result.download_url, None);
    }

    #[test]
    fn test_error_body_from_value() {
        let body = ErrorBody::from_value(&json!({
            "error": "model_unavailable",
            "details": "weights missing"
        }));
        assert_eq!(body.message(), Some("model_unavailable"));
        assert_eq!(body.details.as_deref(), Some("weights missing"));
    }

    #[test]
    fn test_error_body_tolerates_odd_shapes() {
        assert_eq!(ErrorBody::from_value(&json!({})).message(), None);
        assert_eq!(ErrorBody::from_value(&json!([1, 2])).message(), None);
        assert_eq!(ErrorBody::from_value(&json!({"error": 42})).message(), None);
        assert_eq!(ErrorBody::from_value(&json!({"error": ""})).message(), None);
    }

    #[test]
    fn test_health_status_parsing() {
        let health: HealthStatus = serde_json::from_value(json!({
            "ok": false,
            "model_loaded": false,
            "pdf_count": 3,
            "error": "no model"
        }))
        .unwrap();
        assert!(!health.ok);
        assert_eq!(health.pdf_count, 3);
        assert_eq!(health.error.as_deref(), Some("no model"));
    }
}
