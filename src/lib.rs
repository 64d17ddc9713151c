//! # careercraft
//!
//! Match a resume (PDF) against a job description using the Gemini API.
//!
//! ## What it does
//!
//! The user supplies a job description and a resume file. The resume text is
//! extracted page by page, both texts are substituted into a fixed
//! instructional template, the composed prompt is sent to a generative-text
//! model, and the model's free-text answer — match percentage, missing
//! keywords, profile summary — is returned verbatim. All domain reasoning is
//! the model's; this crate is the plumbing around it, done carefully.
//!
//! ## Pipeline Overview
//!
//! ```text
//! resume.pdf + job description
//!  │
//!  ├─ 1. Input    validate path and %PDF magic bytes
//!  ├─ 2. Extract  page-by-page text via lopdf, concatenated in order
//!  ├─ 3. Compose  substitute {text} and {jd} into the ATS template
//!  ├─ 4. Complete one generateContent call (no retries, fixed timeout)
//!  └─ 5. Output   verbatim model response + run stats
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use careercraft::{analyze, AnalysisConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Credential from GEMINI_API_KEY (fallback: GOOGLE_API_KEY)
//!     let config = AnalysisConfig::default();
//!     let output = analyze("resume.pdf", "Senior Rust developer, tokio, axum", &config).await?;
//!     println!("{}", output.response);
//!     eprintln!("{} pages, {}ms", output.stats.page_count, output.stats.total_duration_ms);
//!     Ok(())
//! }
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `cli`   | on      | Enables the `careercraft` binary (clap + anyhow + tracing-subscriber + indicatif + dotenvy) |
//!
//! Disable `cli` when using only the library:
//! ```toml
//! careercraft = { version = "0.1", default-features = false }
//! ```
//!
//! ## Testing without a network
//!
//! The model dependency hides behind [`provider::CompletionProvider`]
//! (`complete(prompt) -> text`). Plug a double into
//! [`AnalysisConfig::provider`] and the pipeline never opens a socket.

// ── Modules ──────────────────────────────────────────────────────────────

pub mod analyze;
pub mod config;
pub mod error;
pub mod output;
pub mod pipeline;
pub mod prompts;
pub mod provider;

// ── Re-exports ───────────────────────────────────────────────────────────

pub use analyze::{analyze, analyze_bytes, analyze_sync};
pub use config::{AnalysisConfig, AnalysisConfigBuilder};
pub use error::{AtsError, ErrorKind};
pub use output::{AnalysisOutput, AnalysisStats};
pub use provider::{CompletionProvider, GeminiProvider};
