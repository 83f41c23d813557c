use super::types::*;
use crate::{Error, Result, advisor::ClothingImage, config::LlmConfig};
use async_trait::async_trait;
use base64::Engine as _;
use std::time::Duration;
use tracing::debug;

/// The single seam to the external completion service: one prompt, one
/// image, one credential in; advice text or a typed error out.
#[async_trait]
pub trait AdviceBackend: Send + Sync {
    async fn submit(&self, prompt: &str, image: &ClothingImage, credential: &str)
    -> Result<String>;
}

pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    model: String,
}

impl GeminiClient {
    pub fn new(config: LlmConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            model: config.model,
        })
    }

    // The credential travels as a query parameter, so this URL must never
    // reach a log line.
    fn endpoint(&self, credential: &str) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.base_url, self.model, credential
        )
    }
}

#[async_trait]
impl AdviceBackend for GeminiClient {
    async fn submit(
        &self,
        prompt: &str,
        image: &ClothingImage,
        credential: &str,
    ) -> Result<String> {
        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![
                    Part::Text {
                        text: prompt.to_string(),
                    },
                    Part::InlineData {
                        inline_data: InlineData {
                            mime_type: image.mime_type().to_string(),
                            data: base64::engine::general_purpose::STANDARD.encode(image.bytes()),
                        },
                    },
                ],
            }],
        };

        debug!("Requesting styling advice from model {}", self.model);

        let response = self
            .http
            .post(self.endpoint(credential))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    Error::upstream("the advice request timed out")
                } else {
                    // without_url: the URL carries the credential
                    Error::upstream(format!("the advice request failed: {}", e.without_url()))
                }
            })?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| Error::upstream(format!("failed to read response: {}", e.without_url())))?;

        if !status.is_success() {
            let message = serde_json::from_str::<ErrorBody>(&text)
                .ok()
                .and_then(|b| b.error)
                .and_then(|d| d.message)
                .unwrap_or_else(|| status.to_string());

            if status == reqwest::StatusCode::UNAUTHORIZED
                || status == reqwest::StatusCode::FORBIDDEN
                || text.contains("API_KEY_INVALID")
            {
                return Err(Error::authentication(message));
            }
            return Err(Error::upstream(format!(
                "endpoint returned {status}: {message}"
            )));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text)
            .map_err(|e| Error::upstream(format!("unparseable response: {e}")))?;

        match parsed.first_text() {
            Some(advice) => Ok(advice.to_string()),
            None => Err(Error::EmptyResponse),
        }
    }
}
