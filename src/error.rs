//! Error types for the careercraft library.
//!
//! A single [`AtsError`] enum covers every failure mode, partitioned into
//! three groups that callers can branch on via [`AtsError::kind`]:
//!
//! * [`ErrorKind::Configuration`] — **Fatal**: no credential or an invalid
//!   config; nothing can run until the operator fixes the environment.
//!
//! * [`ErrorKind::Extraction`] — **Recoverable**: the uploaded document is
//!   missing, unreadable, or not a well-formed PDF. The user retries with a
//!   different file; the process keeps running.
//!
//! * [`ErrorKind::Upstream`] — **Recoverable**: the remote model call failed
//!   (transport, auth, malformed response, timeout). The user retries the
//!   submission; no automatic retry happens here.

use std::path::PathBuf;
use thiserror::Error;

/// All errors returned by the careercraft library.
#[derive(Debug, Error)]
pub enum AtsError {
    // ── Configuration errors ──────────────────────────────────────────────
    /// No API key found in the environment or the config.
    #[error("No Gemini API key configured.\nSet GEMINI_API_KEY (or GOOGLE_API_KEY) or pass a key explicitly.")]
    MissingApiKey,

    /// Builder validation failed.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // ── Extraction errors ─────────────────────────────────────────────────
    /// Resume file was not found at the given path.
    #[error("Resume file not found: '{path}'\nCheck the path exists and is readable.")]
    FileNotFound { path: PathBuf },

    /// Process does not have read permission on the file.
    #[error("Permission denied reading '{path}'\nTry: chmod +r {path:?}")]
    PermissionDenied { path: PathBuf },

    /// The file exists and was read, but is not a PDF.
    #[error("File is not a valid PDF: '{path}'\nFirst bytes: {magic:?}")]
    NotAPdf { path: PathBuf, magic: [u8; 4] },

    /// PDF header/trailer/xref is corrupt and cannot be parsed.
    #[error("Resume PDF is corrupt: {detail}\nTry re-exporting the PDF and uploading again.")]
    CorruptPdf { detail: String },

    // ── Upstream errors ───────────────────────────────────────────────────
    /// The request never completed (DNS, TLS, connection reset, ...).
    #[error("Request to the model service failed: {reason}\nCheck your internet connection.")]
    RequestFailed { reason: String },

    /// The model service returned an authentication error (401/403).
    #[error("Authentication rejected by the model service (HTTP {status}): {detail}\nCheck that GEMINI_API_KEY is valid.")]
    AuthFailed { status: u16, detail: String },

    /// The model service returned a non-success status.
    #[error("Model service returned HTTP {status}: {message}")]
    ApiStatus { status: u16, message: String },

    /// The response body could not be decoded into the expected shape.
    #[error("Malformed response from the model service: {detail}")]
    MalformedResponse { detail: String },

    /// The response decoded, but contained no generated text.
    #[error("Model returned an empty completion")]
    EmptyCompletion,

    /// The model call exceeded the configured timeout.
    #[error("Model call timed out after {secs}s\nIncrease --api-timeout or retry the submission.")]
    ApiTimeout { secs: u64 },
}

/// The three-part taxonomy an [`AtsError`] belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing/invalid credential or config; fatal at startup.
    Configuration,
    /// Malformed or unreadable document; retry with a different file.
    Extraction,
    /// Remote model failure of any kind; retry the submission.
    Upstream,
}

impl AtsError {
    /// Classify this error for caller-side recovery decisions.
    pub fn kind(&self) -> ErrorKind {
        match self {
            AtsError::MissingApiKey | AtsError::InvalidConfig(_) => ErrorKind::Configuration,
            AtsError::FileNotFound { .. }
            | AtsError::PermissionDenied { .. }
            | AtsError::NotAPdf { .. }
            | AtsError::CorruptPdf { .. } => ErrorKind::Extraction,
            AtsError::RequestFailed { .. }
            | AtsError::AuthFailed { .. }
            | AtsError::ApiStatus { .. }
            | AtsError::MalformedResponse { .. }
            | AtsError::EmptyCompletion
            | AtsError::ApiTimeout { .. } => ErrorKind::Upstream,
        }
    }

    /// True when the user can retry the same submission (or a corrected one)
    /// without operator intervention.
    pub fn is_recoverable(&self) -> bool {
        self.kind() != ErrorKind::Configuration
    }
}
