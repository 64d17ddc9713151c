//! Model interaction: drive the single completion call.
//!
//! Intentionally thin — all prompt engineering lives in [`crate::prompts`]
//! and all transport detail in [`crate::provider`], so this stage is just
//! timing, logging, and error propagation. There is deliberately no retry
//! loop: a failed call is terminal for the submission and is reported to
//! the user, who decides whether to resubmit.

use crate::error::AtsError;
use crate::provider::CompletionProvider;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Send the composed prompt and return the model's text plus wall-clock
/// duration in milliseconds.
pub async fn run_completion(
    provider: &Arc<dyn CompletionProvider>,
    prompt: &str,
) -> Result<(String, u64), AtsError> {
    let start = Instant::now();

    match provider.complete(prompt).await {
        Ok(response) => {
            let duration_ms = start.elapsed().as_millis() as u64;
            debug!(
                model = provider.model_id(),
                response_chars = response.len(),
                duration_ms,
                "completion succeeded"
            );
            Ok((response, duration_ms))
        }
        Err(e) => {
            warn!(model = provider.model_id(), error = %e, "completion failed");
            Err(e)
        }
    }
}
