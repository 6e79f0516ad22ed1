//! Client for the remote spell-check HTTP API.
//!
//! Issues a single synchronous `GET` per check and maps the service's
//! `flaggedTokens` JSON document into the [`FlaggedToken`] shape consumed by
//! the reconciler. Transport failures and non-success statuses surface as
//! typed errors, never as sentinel values.

use std::time::Duration;

use clap::ValueEnum;
use log::debug;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use crate::api::{DEFAULT_TIMEOUT_SECS, SUBSCRIPTION_KEY_HEADER};
use crate::error::{CorrigoError, Result};
use crate::reconcile::{FlaggedToken, Suggestion};

/// Default spell-check endpoint.
pub const DEFAULT_SPELLCHECK_ENDPOINT: &str =
    "https://api.cognitive.microsoft.com/bing/v7.0/spellcheck";

/// Checking mode understood by the spell-check service.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckMode {
    /// Spelling only.
    Spell,
    /// Spelling plus grammar proofing.
    Proof,
}

impl CheckMode {
    /// Wire value for the `mode` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckMode::Spell => "spell",
            CheckMode::Proof => "proof",
        }
    }
}

/// Wire shape of the spell-check response body.
#[derive(Debug, Deserialize)]
struct SpellCheckBody {
    #[serde(rename = "flaggedTokens", default)]
    flagged_tokens: Vec<WireFlaggedToken>,
}

#[derive(Debug, Deserialize)]
struct WireFlaggedToken {
    token: String,
    #[serde(default)]
    suggestions: Vec<WireSuggestion>,
}

#[derive(Debug, Deserialize)]
struct WireSuggestion {
    suggestion: String,
    #[serde(default)]
    score: Option<f64>,
}

impl From<WireFlaggedToken> for FlaggedToken {
    fn from(wire: WireFlaggedToken) -> Self {
        FlaggedToken {
            token: wire.token,
            suggestions: wire
                .suggestions
                .into_iter()
                .map(|s| Suggestion {
                    text: s.suggestion,
                    score: s.score,
                })
                .collect(),
        }
    }
}

/// Blocking client for the spell-check service.
pub struct SpellCheckClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl SpellCheckClient {
    /// Create a client against the default endpoint.
    pub fn new<S: Into<String>>(api_key: S) -> Result<Self> {
        Self::with_endpoint(api_key, DEFAULT_SPELLCHECK_ENDPOINT)
    }

    /// Create a client against a custom endpoint.
    pub fn with_endpoint<S: Into<String>, E: Into<String>>(api_key: S, endpoint: E) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(CorrigoError::invalid_argument(
                "spell-check API key must not be empty",
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_TIMEOUT_SECS))
            .build()?;

        Ok(SpellCheckClient {
            client,
            endpoint: endpoint.into(),
            api_key,
        })
    }

    /// Check `text` and return the tokens the service flagged.
    ///
    /// Returns an empty list when the service found nothing to flag.
    pub fn check(&self, text: &str, mode: CheckMode) -> Result<Vec<FlaggedToken>> {
        debug!("spell-check request: mode={} len={}", mode.as_str(), text.len());

        let response = self
            .client
            .get(&self.endpoint)
            .header(SUBSCRIPTION_KEY_HEADER, &self.api_key)
            .query(&[("text", text), ("mode", mode.as_str())])
            .send()?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().unwrap_or_else(|_| status.to_string());
            return Err(CorrigoError::api(status.as_u16(), message));
        }

        let body: SpellCheckBody = response.json()?;
        debug!("spell-check response: {} flagged tokens", body.flagged_tokens.len());

        Ok(body.flagged_tokens.into_iter().map(Into::into).collect())
    }
}

/// Parse a raw spell-check response body into flagged tokens.
///
/// Exposed separately so the wire mapping is testable without a live
/// endpoint, and usable by callers that obtained the body some other way.
pub fn parse_flagged_tokens(body: &str) -> Result<Vec<FlaggedToken>> {
    let body: SpellCheckBody = serde_json::from_str(body)?;
    Ok(body.flagged_tokens.into_iter().map(Into::into).collect())
}
