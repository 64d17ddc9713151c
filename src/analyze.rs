//! Top-level analysis entry points.
//!
//! One submission runs its stages strictly in sequence — extract, compose,
//! complete — and every value involved is scoped to the call. Nothing is
//! cached, queued, or shared between submissions.

use crate::config::AnalysisConfig;
use crate::error::AtsError;
use crate::output::{AnalysisOutput, AnalysisStats};
use crate::pipeline::{extract, input, llm};
use crate::prompts::{compose_prompt, ATS_PROMPT_TEMPLATE, PROMPT_VERSION};
use crate::provider::{CompletionProvider, GeminiProvider};
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tracing::info;

/// Analyse the resume at `resume_path` against `job_description`.
///
/// This is the primary entry point for the library.
///
/// # Errors
/// - Extraction errors for a missing, unreadable, or malformed PDF —
///   the provider is never invoked in that case.
/// - [`AtsError::MissingApiKey`] when no credential is configured.
/// - Upstream errors when the single model call fails; there are no
///   automatic retries.
pub async fn analyze(
    resume_path: impl AsRef<Path>,
    job_description: &str,
    config: &AnalysisConfig,
) -> Result<AnalysisOutput, AtsError> {
    let bytes = input::load_document(resume_path.as_ref())?;
    analyze_bytes(&bytes, job_description, config).await
}

/// Analyse a resume already held in memory (an upload, typically).
pub async fn analyze_bytes(
    resume_bytes: &[u8],
    job_description: &str,
    config: &AnalysisConfig,
) -> Result<AnalysisOutput, AtsError> {
    let total_start = Instant::now();

    // ── Step 1: Extract resume text ──────────────────────────────────────
    let extract_start = Instant::now();
    let resume = extract::extract_text(resume_bytes)?;
    let extract_duration_ms = extract_start.elapsed().as_millis() as u64;
    info!(
        pages = resume.page_count,
        chars = resume.text.len(),
        "extracted resume text"
    );

    // ── Step 2: Compose the prompt ───────────────────────────────────────
    let template = config
        .prompt_template
        .as_deref()
        .unwrap_or(ATS_PROMPT_TEMPLATE);
    let prompt = compose_prompt(template, &resume.text, job_description);

    // ── Step 3: Resolve the provider ─────────────────────────────────────
    let provider = resolve_provider(config)?;
    info!(
        model = provider.model_id(),
        prompt_version = PROMPT_VERSION,
        prompt_chars = prompt.len(),
        "submitting prompt"
    );

    // ── Step 4: One model call, no retries ───────────────────────────────
    let (response, completion_duration_ms) = llm::run_completion(&provider, &prompt).await?;

    Ok(AnalysisOutput {
        stats: AnalysisStats {
            page_count: resume.page_count,
            extracted_chars: resume.text.len(),
            prompt_chars: prompt.len(),
            prompt_version: PROMPT_VERSION.to_string(),
            model: provider.model_id().to_string(),
            extract_duration_ms,
            completion_duration_ms,
            total_duration_ms: total_start.elapsed().as_millis() as u64,
        },
        response,
    })
}

/// Blocking wrapper around [`analyze`] for synchronous callers.
///
/// Spins up a current-thread tokio runtime for the duration of the call.
/// Must not be called from within an async context.
pub fn analyze_sync(
    resume_path: impl AsRef<Path>,
    job_description: &str,
    config: &AnalysisConfig,
) -> Result<AnalysisOutput, AtsError> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| AtsError::InvalidConfig(format!("failed to start runtime: {e}")))?;
    runtime.block_on(analyze(resume_path, job_description, config))
}

/// Use the caller-supplied provider when present, otherwise build the
/// Gemini provider from config + environment. Credential resolution fails
/// fast here, before any document bytes are sent anywhere.
fn resolve_provider(config: &AnalysisConfig) -> Result<Arc<dyn CompletionProvider>, AtsError> {
    if let Some(ref provider) = config.provider {
        return Ok(Arc::clone(provider));
    }
    Ok(Arc::new(GeminiProvider::from_config(config)?))
}
