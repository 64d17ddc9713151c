//! Configuration for a resume analysis run.
//!
//! Every knob lives in [`AnalysisConfig`], built via its
//! [`AnalysisConfigBuilder`]. Keeping the whole configuration in one struct
//! makes it trivial to share across calls, log, and diff two runs to
//! understand why their outputs differ.

use crate::error::AtsError;
use crate::provider::CompletionProvider;
use std::fmt;
use std::sync::Arc;

/// Configuration for a resume-to-job-description analysis.
///
/// Built via [`AnalysisConfig::builder()`] or [`AnalysisConfig::default()`].
///
/// # Example
/// ```rust
/// use careercraft::AnalysisConfig;
///
/// let config = AnalysisConfig::builder()
///     .model("gemini-2.0-flash")
///     .api_timeout_secs(30)
///     .build()
///     .unwrap();
/// ```
#[derive(Clone)]
pub struct AnalysisConfig {
    /// Completion model identifier, e.g. "gemini-2.0-flash".
    /// If None, uses [`crate::provider::DEFAULT_MODEL`].
    pub model: Option<String>,

    /// API key. If None, resolved from `GEMINI_API_KEY` then `GOOGLE_API_KEY`
    /// at provider construction; absence fails fast with
    /// [`AtsError::MissingApiKey`].
    pub api_key: Option<String>,

    /// Override the service base URL. Default: the public Gemini endpoint.
    ///
    /// Exists so tests can point the provider at a local stub without
    /// touching the request path; production callers leave it None.
    pub base_url: Option<String>,

    /// Pre-constructed provider. Takes precedence over `model`/`api_key`;
    /// this is the seam test doubles plug into.
    pub provider: Option<Arc<dyn CompletionProvider>>,

    /// Sampling temperature. Default: 0.2.
    ///
    /// Low temperature keeps the assessment anchored to what is actually in
    /// the resume and the job description rather than inventing skills.
    pub temperature: f32,

    /// Maximum tokens the model may generate. Default: 2048.
    ///
    /// The three-section response (match percentage, missing keywords,
    /// profile summary) rarely exceeds 700 tokens; 2048 leaves headroom
    /// without letting a runaway completion cost real money.
    pub max_output_tokens: usize,

    /// Model-call timeout in seconds. Default: 60.
    ///
    /// One submission is one blocking call from the user's perspective, so
    /// the only requirement is "do not hang the session indefinitely".
    pub api_timeout_secs: u64,

    /// Custom instructional template. If None, uses
    /// [`crate::prompts::ATS_PROMPT_TEMPLATE`]. Must contain the `{text}`
    /// and `{jd}` placeholders to be useful; `build()` enforces this.
    pub prompt_template: Option<String>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            model: None,
            api_key: None,
            base_url: None,
            provider: None,
            temperature: 0.2,
            max_output_tokens: 2048,
            api_timeout_secs: 60,
            prompt_template: None,
        }
    }
}

impl fmt::Debug for AnalysisConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisConfig")
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("provider", &self.provider.as_ref().map(|_| "<dyn CompletionProvider>"))
            .field("temperature", &self.temperature)
            .field("max_output_tokens", &self.max_output_tokens)
            .field("api_timeout_secs", &self.api_timeout_secs)
            .field("prompt_template", &self.prompt_template.as_ref().map(|t| t.len()))
            .finish()
    }
}

impl AnalysisConfig {
    /// Create a new builder for `AnalysisConfig`.
    pub fn builder() -> AnalysisConfigBuilder {
        AnalysisConfigBuilder {
            config: Self::default(),
        }
    }
}

/// Builder for [`AnalysisConfig`].
#[derive(Debug)]
pub struct AnalysisConfigBuilder {
    config: AnalysisConfig,
}

impl AnalysisConfigBuilder {
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.config.model = Some(model.into());
        self
    }

    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.config.api_key = Some(key.into());
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config.base_url = Some(url.into());
        self
    }

    pub fn provider(mut self, provider: Arc<dyn CompletionProvider>) -> Self {
        self.config.provider = Some(provider);
        self
    }

    pub fn temperature(mut self, t: f32) -> Self {
        self.config.temperature = t.clamp(0.0, 2.0);
        self
    }

    pub fn max_output_tokens(mut self, n: usize) -> Self {
        self.config.max_output_tokens = n;
        self
    }

    pub fn api_timeout_secs(mut self, secs: u64) -> Self {
        self.config.api_timeout_secs = secs;
        self
    }

    pub fn prompt_template(mut self, template: impl Into<String>) -> Self {
        self.config.prompt_template = Some(template.into());
        self
    }

    /// Build the configuration, validating constraints.
    pub fn build(self) -> Result<AnalysisConfig, AtsError> {
        let c = &self.config;
        if c.api_timeout_secs == 0 {
            return Err(AtsError::InvalidConfig(
                "api_timeout_secs must be ≥ 1".into(),
            ));
        }
        if c.max_output_tokens == 0 {
            return Err(AtsError::InvalidConfig(
                "max_output_tokens must be ≥ 1".into(),
            ));
        }
        if let Some(ref template) = c.prompt_template {
            use crate::prompts::{JD_PLACEHOLDER, TEXT_PLACEHOLDER};
            if !template.contains(TEXT_PLACEHOLDER) || !template.contains(JD_PLACEHOLDER) {
                return Err(AtsError::InvalidConfig(format!(
                    "prompt template must contain both {TEXT_PLACEHOLDER} and {JD_PLACEHOLDER}"
                )));
            }
        }
        Ok(self.config)
    }
}
