//! GeminiBrain implementation using the Gemini REST API.

use brain_core::{async_trait, Brain, BrainError, ChatPrompt, Role};
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, info};

use crate::api_types::{
    ApiError, Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
};
use crate::config::GeminiConfig;

/// A brain implementation backed by Gemini's `generateContent` endpoint.
///
/// Stateless between calls: the rolling conversation context arrives inside
/// each [`ChatPrompt`]. The HTTP client carries a hard timeout, so a slow
/// upstream surfaces as [`BrainError::Timeout`] instead of a hung request.
pub struct GeminiBrain {
    client: Client,
    config: GeminiConfig,
}

impl GeminiBrain {
    /// Create a new GeminiBrain with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, BrainError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| {
                BrainError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        info!(
            "GeminiBrain initialized with model: {}, timeout: {}s",
            config.model, config.timeout_secs
        );

        Ok(Self { client, config })
    }

    /// Create a GeminiBrain from environment variables.
    ///
    /// See [`GeminiConfig::from_env`] for the variables involved.
    pub fn from_env() -> Result<Self, BrainError> {
        let config = GeminiConfig::from_env()?;
        Self::new(config)
    }

    /// Get the configuration.
    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Map a [`ChatPrompt`] onto the Gemini contents array.
    ///
    /// Turns become role-tagged contents; the extra instruction rides as a
    /// trailing user content so the model treats it as part of the request.
    fn build_contents(prompt: &ChatPrompt) -> Vec<Content> {
        let mut contents: Vec<Content> = prompt
            .context
            .iter()
            .map(|turn| match turn.role {
                Role::User => Content::user(turn.content.clone()),
                Role::Assistant => Content::model(turn.content.clone()),
            })
            .collect();

        if let Some(ref instruction) = prompt.instruction {
            contents.push(Content::user(instruction.clone()));
        }

        contents
    }

    async fn generate_content(
        &self,
        request: GenerateContentRequest,
    ) -> Result<GenerateContentResponse, BrainError> {
        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.api_url, self.config.model
        );

        debug!("Sending request to Gemini API: {:?}", request);

        let response = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    BrainError::Timeout
                } else {
                    BrainError::Network(format!("Failed to send request: {}", e))
                }
            })?;

        let status = response.status();

        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();

            // Try to parse as API error
            if let Ok(api_error) = serde_json::from_str::<ApiError>(&error_text) {
                return Err(BrainError::ProcessingFailed(format!(
                    "API error ({}): {}",
                    status.as_u16(),
                    api_error.error.message
                )));
            }

            return Err(BrainError::ProcessingFailed(format!(
                "API error ({}): {}",
                status.as_u16(),
                error_text
            )));
        }

        let completion: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| BrainError::ProcessingFailed(format!("Failed to parse response: {}", e)))?;

        debug!("Received response from Gemini API: {:?}", completion);

        Ok(completion)
    }
}

#[async_trait]
impl Brain for GeminiBrain {
    async fn generate(&self, prompt: &ChatPrompt) -> Result<String, BrainError> {
        let request = GenerateContentRequest {
            system_instruction: prompt.system.as_ref().map(|s| Content::bare(s.clone())),
            contents: Self::build_contents(prompt),
            generation_config: Some(GenerationConfig {
                max_output_tokens: self.config.max_output_tokens,
                temperature: self.config.temperature,
                top_p: self.config.top_p,
            }),
        };

        let response = self.generate_content(request).await?;

        response.first_text().ok_or_else(|| {
            BrainError::ProcessingFailed("response contained no candidate text".to_string())
        })
    }

    fn name(&self) -> &str {
        "GeminiBrain"
    }

    async fn is_ready(&self) -> bool {
        !self.config.api_key.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use brain_core::ChatTurn;

    #[test]
    fn test_build_contents_maps_roles_and_instruction() {
        let prompt = ChatPrompt {
            system: Some("persona".to_string()),
            context: vec![
                ChatTurn::user("Hello"),
                ChatTurn::assistant("Hi"),
                ChatTurn::user("Explain torque"),
            ],
            instruction: Some("One question per turn.".to_string()),
        };

        let contents = GeminiBrain::build_contents(&prompt);
        assert_eq!(contents.len(), 4);
        assert_eq!(contents[0].role.as_deref(), Some("user"));
        assert_eq!(contents[1].role.as_deref(), Some("model"));
        assert_eq!(contents[3].parts[0].text, "One question per turn.");
    }

    #[tokio::test]
    async fn test_readiness_tracks_api_key() {
        let brain = GeminiBrain::new(GeminiConfig::default()).unwrap();
        assert!(!brain.is_ready().await);

        let brain = GeminiBrain::new(GeminiConfig::builder().api_key("k").build()).unwrap();
        assert!(brain.is_ready().await);
    }
}
