//! Result types returned by the analysis entry points.

use serde::{Deserialize, Serialize};

/// The outcome of one resume-to-job-description analysis.
///
/// `response` is the model's text exactly as the service returned it — no
/// parsing, reformatting, or schema enforcement happens on this side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisOutput {
    /// Verbatim model response (match percentage, missing keywords,
    /// profile summary — if the model honoured the requested structure).
    pub response: String,
    /// Run statistics for logs, `--json` output, and cost sanity checks.
    pub stats: AnalysisStats,
}

/// Statistics for one analysis run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisStats {
    /// Pages in the uploaded resume (including textless ones).
    pub page_count: usize,
    /// Characters of resume text extracted.
    pub extracted_chars: usize,
    /// Characters in the composed prompt.
    pub prompt_chars: usize,
    /// Prompt template version that was used.
    pub prompt_version: String,
    /// Model that produced the response.
    pub model: String,
    /// Wall-clock time spent extracting text, in milliseconds.
    pub extract_duration_ms: u64,
    /// Wall-clock time spent in the model call, in milliseconds.
    pub completion_duration_ms: u64,
    /// End-to-end wall-clock time, in milliseconds.
    pub total_duration_ms: u64,
}
