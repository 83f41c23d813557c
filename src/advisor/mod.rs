mod prompt;
mod types;

pub use prompt::{STYLIST_ROLE, build_prompt};
pub use types::*;

use crate::{Error, Result, llm::AdviceBackend};
use std::sync::Arc;
use tracing::debug;

/// Orchestrates one "get advice" action: validates the session, assembles
/// the prompt, and makes exactly one call through the backend seam. No
/// retries and no caching; every invocation is an independent cycle.
pub struct AdviceRequester {
    backend: Arc<dyn AdviceBackend>,
}

impl AdviceRequester {
    pub fn new(backend: Arc<dyn AdviceBackend>) -> Self {
        Self { backend }
    }

    pub async fn request_advice(&self, session: &AdviceSession) -> Result<AdviceResult> {
        // Invariant: the backend is never invoked without a credential and
        // a validated image.
        if session.credential.trim().is_empty() {
            return Err(Error::invalid_input("an API key is required"));
        }
        let image = session
            .image
            .as_ref()
            .ok_or_else(|| Error::invalid_input("a clothing photo is required"))?;

        let prompt = build_prompt(&session.profile, &session.context);

        debug!(
            "Submitting styling request ({} byte {} image)",
            image.bytes().len(),
            image.mime_type()
        );

        let text = self
            .backend
            .submit(&prompt, image, &session.credential)
            .await?;

        if text.trim().is_empty() {
            return Err(Error::EmptyResponse);
        }

        Ok(AdviceResult { text })
    }
}
