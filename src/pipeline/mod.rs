//! Pipeline stages for a resume analysis.
//!
//! Each submodule implements exactly one transformation step. Keeping
//! stages separate makes each independently testable and lets us swap an
//! implementation (e.g. a different PDF backend) without touching the rest.
//!
//! ## Data Flow
//!
//! ```text
//! input ──▶ extract ──▶ compose ──▶ llm
//! (path/bytes) (lopdf)  (template)  (Gemini)
//! ```
//!
//! 1. [`input`]   — validate the user-supplied path and load the PDF bytes
//! 2. [`extract`] — page-by-page text extraction, concatenated in order
//! 3. compose     — lives in [`crate::prompts`]; a pure function, no stage
//!    module needed
//! 4. [`llm`]     — drive the single provider call; the only stage with
//!    network I/O

pub mod extract;
pub mod input;
pub mod llm;
