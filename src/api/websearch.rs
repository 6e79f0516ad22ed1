//! Client for the remote web-search HTTP API.
//!
//! Issues a single synchronous `GET` per query. Search parameters that were
//! implicit globals in earlier designs (market, safe-search level, result
//! count, offset) are explicit [`SearchConfig`] fields with documented
//! defaults. The site-filtered variant composes a `site:` query string; it
//! never launches a browser itself — that side effect lives in
//! [`crate::browser`] and is invoked separately by the caller.

use std::fmt;
use std::time::Duration;

use clap::ValueEnum;
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::api::{DEFAULT_TIMEOUT_SECS, SUBSCRIPTION_KEY_HEADER};
use crate::error::{CorrigoError, Result};

/// Default web-search endpoint.
pub const DEFAULT_SEARCH_ENDPOINT: &str = "https://api.cognitive.microsoft.com/bing/v7.0/search";

/// Safe-search filtering level.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SafeSearch {
    /// No filtering.
    Off,
    /// Filter explicit imagery, keep text.
    Moderate,
    /// Filter all adult content.
    Strict,
}

impl SafeSearch {
    /// Wire value for the `safesearch` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            SafeSearch::Off => "off",
            SafeSearch::Moderate => "moderate",
            SafeSearch::Strict => "strict",
        }
    }
}

impl fmt::Display for SafeSearch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for a search request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Market to search in (`mkt` parameter).
    pub market: String,
    /// Safe-search filtering level.
    pub safe_search: SafeSearch,
    /// Number of results to request (`count` parameter).
    pub count: u32,
    /// Result offset for pagination (`offset` parameter).
    pub offset: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            market: "en-gb".to_string(),
            safe_search: SafeSearch::Moderate,
            count: 10,
            offset: 0,
        }
    }
}

/// One web page in a search response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebPage {
    /// Page title.
    pub name: String,
    /// Page URL.
    pub url: String,
    /// Search-engine snippet, when present.
    #[serde(default)]
    pub snippet: Option<String>,
}

/// Wire shape of the search response body.
#[derive(Debug, Deserialize)]
struct SearchBody {
    #[serde(rename = "webPages")]
    web_pages: Option<WirePages>,
}

#[derive(Debug, Deserialize)]
struct WirePages {
    #[serde(rename = "totalEstimatedMatches", default)]
    total_estimated_matches: Option<u64>,
    #[serde(default)]
    value: Vec<WebPage>,
}

/// Typed result of a search request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// The query as sent to the service, including any site filter.
    pub query: String,
    /// Estimated total matches reported by the service, when present.
    pub total_estimated_matches: Option<u64>,
    /// The returned result pages, service order.
    pub pages: Vec<WebPage>,
}

impl SearchResponse {
    /// URL of the top-ranked result, if any.
    pub fn first_url(&self) -> Option<&str> {
        self.pages.first().map(|p| p.url.as_str())
    }
}

/// Compose a site-restricted query string.
///
/// Pure helper: callers that only want the query (for display, logging, or a
/// different transport) can use it without touching the network.
pub fn site_query(site: &str, query: &str) -> Result<String> {
    if site.trim().is_empty() {
        return Err(CorrigoError::invalid_argument(
            "site filter must not be empty",
        ));
    }
    Ok(format!("site:{site} {query}"))
}

/// Blocking client for the web-search service.
pub struct WebSearchClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl WebSearchClient {
    /// Create a client against the default endpoint.
    pub fn new<S: Into<String>>(api_key: S) -> Result<Self> {
        Self::with_endpoint(api_key, DEFAULT_SEARCH_ENDPOINT)
    }

    /// Create a client against a custom endpoint.
    pub fn with_endpoint<S: Into<String>, E: Into<String>>(api_key: S, endpoint: E) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CorrigoError::invalid_argument(
                "web-search API key must not be empty",
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(WebSearchClient {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    /// Run a search for `query` with the given configuration.
    pub fn search(&self, query: &str, config: &SearchConfig) -> Result<SearchResponse> {
        debug!(
            "search request: q='{}' mkt={} count={} offset={}",
            query, config.market, config.count, config.offset
        );

        let response = self
            .client
            .get(&self.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .query(&[
                ("q", query),
                ("count", &config.count.to_string()),
                ("offset", &config.offset.to_string()),
                ("mkt", &config.market),
                ("safesearch", config.safe_search.as_str()),
            ])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_else(|_| status.to_string());
            return Err(CorrigoError::api(status.as_u16(), message));
        }

        let body: SearchBody = response.json()?;
        let (total, pages) = match body.web_pages {
            Some(wire) => (wire.total_estimated_matches, wire.value),
            None => (None, Vec::new()),
        };
        debug!("search response: {} pages", pages.len());

        Ok(SearchResponse {
            query: query.to_string(),
            total_estimated_matches: total,
            pages,
        })
    }

    /// Run a search restricted to a single site.
    ///
    /// Data-returning only; pair with [`crate::browser::open_url`] on
    /// [`SearchResponse::first_url`] when auto-open behavior is wanted.
    pub fn search_site(
        &self,
        site: &str,
        query: &str,
        config: &SearchConfig,
    ) -> Result<SearchResponse> {
        let query = site_query(site, query)?;
        self.search(&query, config)
    }
}

/// Parse a raw search response body into a typed response.
pub fn parse_search_response(query: &str, body: &str) -> Result<SearchResponse> {
    let body: SearchBody = serde_json::from_str(body)?;
    let (total, pages) = match body.web_pages {
        Some(wire) => (wire.total_estimated_matches, wire.value),
        None => (None, Vec::new()),
    };
    Ok(SearchResponse {
        query: query.to_string(),
        total_estimated_matches: total,
        pages,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.market, "en-gb");
        assert_eq!(config.safe_search, SafeSearch::Moderate);
        assert_eq!(config.count, 10);
        assert_eq!(config.offset, 0);
    }

    #[test]
    fn test_safe_search_wire_values() {
        assert_eq!(SafeSearch::Off.as_str(), "off");
        assert_eq!(SafeSearch::Moderate.as_str(), "moderate");
        assert_eq!(SafeSearch::Strict.as_str(), "strict");
    }

    #[test]
    fn test_site_query() {
        let q = site_query("example.org", "rust tutorials").unwrap();
        assert_eq!(q, "site:example.org rust tutorials");
    }

    #[test]
    fn test_site_query_empty_site_rejected() {
        assert!(matches!(
            site_query("  ", "rust"),
            Err(CorrigoError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_empty_api_key_rejected() {
        let result = WebSearchClient::new("");
        assert!(matches!(result, Err(CorrigoError::InvalidArgument(_))));
    }

    #[test]
    fn test_parse_search_response() {
        let body = r#"{
            "_type": "SearchResponse",
            "webPages": {
                "totalEstimatedMatches": 12400,
                "value": [
                    {
                        "name": "Cheese on toast recipe",
                        "url": "https://example.org/recipes/cheese-on-toast",
                        "snippet": "A quick snack."
                    },
                    {
                        "name": "Toast techniques",
                        "url": "https://example.org/toast"
                    }
                ]
            }
        }"#;

        let response = parse_search_response("cheese on toast", body).unwrap();
        assert_eq!(response.query, "cheese on toast");
        assert_eq!(response.total_estimated_matches, Some(12400));
        assert_eq!(response.pages.len(), 2);
        assert_eq!(
            response.first_url(),
            Some("https://example.org/recipes/cheese-on-toast")
        );
        assert_eq!(response.pages[1].snippet, None);
    }

    #[test]
    fn test_parse_empty_response() {
        let response = parse_search_response("q", r#"{"_type": "SearchResponse"}"#).unwrap();
        assert!(response.pages.is_empty());
        assert!(response.first_url().is_none());
    }
}
