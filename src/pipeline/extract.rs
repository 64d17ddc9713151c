//! Page-by-page text extraction from the resume PDF.
//!
//! Pages are walked in document order and their text concatenated with no
//! separator beyond what extraction naturally returns. A page without an
//! extractable text layer (a scanned image, say) contributes the empty
//! string — that is a property of the document, not an error. Only a
//! document lopdf cannot parse at all fails, and it fails before any prompt
//! is composed.

use crate::error::AtsError;
use lopdf::Document;
use tracing::{debug, warn};

/// Text pulled out of one resume, with enough shape for reporting.
#[derive(Debug, Clone)]
pub struct ResumeText {
    /// Ordered concatenation of every page's text.
    pub text: String,
    /// Number of pages in the document (including textless ones).
    pub page_count: usize,
}

/// Extract the full text of a PDF held in memory.
pub fn extract_text(bytes: &[u8]) -> Result<ResumeText, AtsError> {
    let doc = Document::load_mem(bytes).map_err(|e| AtsError::CorruptPdf {
        detail: e.to_string(),
    })?;

    // BTreeMap keyed by 1-based page number, so iteration is page order.
    let pages = doc.get_pages();
    let page_count = pages.len();

    let mut text = String::new();
    for &page_num in pages.keys() {
        match doc.extract_text(&[page_num]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => {
                // Content-stream quirks on a single page must not sink the
                // submission; the page simply contributes nothing.
                warn!(page = page_num, error = %e, "page yielded no extractable text");
            }
        }
    }

    debug!(pages = page_count, chars = text.len(), "extracted resume text");

    Ok(ResumeText { text, page_count })
}
