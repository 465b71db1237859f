use std::sync::Arc;

use futures::future::BoxFuture;
use reqwest::Client;

use crate::dao::text_generator::{GenerationError, GenerationResult, TextGenerator};

use super::{
    config::GeminiConfig,
    models::{ErrorResponse, GenerateContentRequest, GenerateContentResponse},
};

const API_KEY_HEADER: &str = "x-goog-api-key";

/// [`TextGenerator`] backed by the Gemini `generateContent` endpoint.
#[derive(Clone)]
pub struct GeminiGenerator {
    client: Client,
    endpoint: Arc<str>,
    api_key: Arc<str>,
}

impl GeminiGenerator {
    /// Build an HTTP client configured with the request timeout.
    pub fn new(config: GeminiConfig) -> GenerationResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|source| GenerationError::ClientBuilder { source })?;

        let endpoint = Arc::<str>::from(format!(
            "{}/v1beta/models/{}:generateContent",
            config.base_url.trim_end_matches('/'),
            config.model
        ));

        Ok(Self {
            client,
            endpoint,
            api_key: Arc::from(config.api_key),
        })
    }

    async fn generate_content(&self, prompt: &str) -> GenerationResult<String> {
        let response = self
            .client
            .post(self.endpoint.as_ref())
            .header(API_KEY_HEADER, self.api_key.as_ref())
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await
            .map_err(GenerationError::from_transport)?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorResponse>()
                .await
                .map(|body| body.error.message)
                .unwrap_or_default();
            return Err(GenerationError::Rejected { status, message });
        }

        let body = response
            .json::<GenerateContentResponse>()
            .await
            .map_err(|source| {
                if source.is_timeout() {
                    GenerationError::Timeout
                } else {
                    GenerationError::Decode { source }
                }
            })?;

        body.into_text().ok_or(GenerationError::EmptyResponse)
    }
}

impl TextGenerator for GeminiGenerator {
    fn generate(&self, prompt: String) -> BoxFuture<'static, GenerationResult<String>> {
        let generator = self.clone();
        Box::pin(async move { generator.generate_content(&prompt).await })
    }
}
