//! The model-client seam: a narrow trait plus the Gemini implementation.
//!
//! ARCHITECTURAL RULE: no other module talks to the model service directly.
//! Everything upstream of the network goes through [`CompletionProvider`],
//! which keeps the pipeline testable with an in-process double and keeps
//! provider details (URL shapes, wire types, auth) in one file.

use crate::config::AnalysisConfig;
use crate::error::AtsError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

/// Default completion model. Cheap, fast, and good enough for free-text
/// resume assessment; override with [`AnalysisConfig::model`].
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// A remote generative-text service reduced to the one call this crate needs.
///
/// `complete(prompt) -> text`. Implementations must not retry internally;
/// any failure is terminal for the current submission and surfaces as an
/// upstream [`AtsError`].
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Send one prompt, return the generated text.
    async fn complete(&self, prompt: &str) -> Result<String, AtsError>;

    /// Human-readable identifier used in logs and stats.
    fn model_id(&self) -> &str;
}

// ── Gemini wire types ────────────────────────────────────────────────────

#[derive(Debug, Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Debug, Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: usize,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<CandidatePart>,
}

#[derive(Debug, Deserialize)]
struct CandidatePart {
    text: Option<String>,
}

// ── Gemini provider ──────────────────────────────────────────────────────

/// [`CompletionProvider`] backed by the Gemini `generateContent` endpoint.
pub struct GeminiProvider {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_output_tokens: usize,
    timeout_secs: u64,
}

impl GeminiProvider {
    /// Build a provider from the resolved config.
    ///
    /// Fails fast with [`AtsError::MissingApiKey`] when no credential is
    /// available — no request is ever attempted with an empty key.
    pub fn from_config(config: &AnalysisConfig) -> Result<Self, AtsError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("GEMINI_API_KEY").ok())
            .or_else(|| std::env::var("GOOGLE_API_KEY").ok())
            .filter(|k| !k.trim().is_empty())
            .ok_or(AtsError::MissingApiKey)?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.api_timeout_secs))
            .build()
            .map_err(|e| AtsError::RequestFailed {
                reason: e.to_string(),
            })?;

        Ok(Self {
            client,
            base_url: config
                .base_url
                .clone()
                .unwrap_or_else(|| GEMINI_BASE_URL.to_string()),
            api_key,
            model: config
                .model
                .clone()
                .unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            temperature: config.temperature,
            max_output_tokens: config.max_output_tokens,
            timeout_secs: config.api_timeout_secs,
        })
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl CompletionProvider for GeminiProvider {
    async fn complete(&self, prompt: &str) -> Result<String, AtsError> {
        let request = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        debug!(model = %self.model, prompt_chars = prompt.len(), "calling generateContent");

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    AtsError::ApiTimeout {
                        secs: self.timeout_secs,
                    }
                } else {
                    AtsError::RequestFailed {
                        reason: e.to_string(),
                    }
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "generateContent returned non-success status");
            return Err(match status.as_u16() {
                401 | 403 => AtsError::AuthFailed {
                    status: status.as_u16(),
                    detail: truncate(&body, 200),
                },
                code => AtsError::ApiStatus {
                    status: code,
                    message: truncate(&body, 200),
                },
            });
        }

        let decoded: GenerateContentResponse =
            response
                .json()
                .await
                .map_err(|e| AtsError::MalformedResponse {
                    detail: e.to_string(),
                })?;

        let text: String = decoded
            .candidates
            .into_iter()
            .next()
            .and_then(|c| c.content)
            .map(|c| {
                c.parts
                    .into_iter()
                    .filter_map(|p| p.text)
                    .collect::<Vec<_>>()
                    .join("")
            })
            .unwrap_or_default();

        if text.is_empty() {
            return Err(AtsError::EmptyCompletion);
        }

        Ok(text)
    }

    fn model_id(&self) -> &str {
        &self.model
    }
}

/// Keep error bodies readable in terminal output.
fn truncate(s: &str, max: usize) -> String {
    if s.len() <= max {
        s.to_string()
    } else {
        let mut end = max;
        while !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}\u{2026}", &s[..end])
    }
}
