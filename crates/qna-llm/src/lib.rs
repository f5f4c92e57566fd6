//! Completion client implementations
//!
//! Provides the outbound chat-completion call for OpenAI-compatible and
//! Ollama APIs. Each call is stateless: one user message in, the first
//! returned choice out. No retries, no streaming, no conversation state.
//!
//! Author: hephaex@gmail.com

use async_trait::async_trait;
use qna_core::{CompletionClient, LlmConfig, LlmProvider, QnaError, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

// ============================================================================
// OpenAI Client
// ============================================================================

/// OpenAI API client
///
/// A missing credential does not block construction; every call fails
/// with a configuration error instead.
pub struct OpenAiClient {
    client: Client,
    api_key: Option<String>,
    base_url: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize)]
struct ChatRequest {
    model: String,
    messages: Vec<Message>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
struct Message {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct Choice {
    message: Message,
    finish_reason: Option<String>,
}

impl OpenAiClient {
    /// Create a new OpenAI client
    pub fn new(
        api_key: Option<String>,
        model: impl Into<String>,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            client: Client::new(),
            api_key,
            base_url: "https://api.openai.com/v1".to_string(),
            model: model.into(),
            max_tokens,
            temperature,
        }
    }

    /// Create from config
    pub fn from_config(config: &LlmConfig) -> Self {
        let mut client = Self::new(
            config.openai_api_key.clone(),
            config.model.clone(),
            config.max_tokens,
            config.temperature,
        );

        if let Some(url) = &config.openai_base_url {
            client.base_url = url.clone();
        }

        client
    }

    /// Set custom base URL (for Azure or compatible APIs)
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }
}

#[async_trait]
impl CompletionClient for OpenAiClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .api_key
            .as_ref()
            .ok_or_else(|| QnaError::Config("OPENAI_API_KEY is not set".to_string()))?;

        let request = ChatRequest {
            model: self.model.clone(),
            messages: vec![Message {
                role: "user".to_string(),
                content: prompt.to_string(),
            }],
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        tracing::debug!(model = %self.model, "sending completion request");

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .header("Authorization", format!("Bearer {api_key}"))
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| QnaError::Completion(format!("Request failed: {e}")))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(QnaError::Completion(format!("OpenAI error: {error_text}")));
        }

        let result: ChatResponse = response
            .json()
            .await
            .map_err(|e| QnaError::Completion(format!("Failed to parse response: {e}")))?;

        result
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .ok_or_else(|| QnaError::Completion("No response generated".to_string()))
    }
}

// ============================================================================
// Ollama Client
// ============================================================================

/// Ollama API client
pub struct OllamaClient {
    client: Client,
    base_url: String,
    model: String,
}

#[derive(Debug, Serialize)]
struct OllamaRequest {
    model: String,
    prompt: String,
    stream: bool,
}

#[derive(Debug, Deserialize)]
#[allow(dead_code)]
struct OllamaResponse {
    response: String,
    done: bool,
}

impl OllamaClient {
    /// Create a new Ollama client
    pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
        }
    }

    /// Create from config
    pub fn from_config(config: &LlmConfig) -> Self {
        Self::new(config.ollama_url.clone(), config.model.clone())
    }
}

#[async_trait]
impl CompletionClient for OllamaClient {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let request = OllamaRequest {
            model: self.model.clone(),
            prompt: prompt.to_string(),
            stream: false,
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&request)
            .send()
            .await
            .map_err(|e| QnaError::Completion(format!("Ollama request failed: {e}")))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(QnaError::Completion(format!("Ollama error: {error_text}")));
        }

        let result: OllamaResponse = response
            .json()
            .await
            .map_err(|e| QnaError::Completion(format!("Failed to parse Ollama response: {e}")))?;

        Ok(result.response)
    }
}

// ============================================================================
// Factory function
// ============================================================================

/// Create a completion client from config
pub fn create_completion_client(config: &LlmConfig) -> Arc<dyn CompletionClient> {
    match config.provider {
        LlmProvider::OpenAI => Arc::new(OpenAiClient::from_config(config)),
        LlmProvider::Ollama => Arc::new(OllamaClient::from_config(config)),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openai_client_creation() {
        let client = OpenAiClient::new(Some("test-key".to_string()), "gpt-4o-mini", 2048, 0.1);
        assert_eq!(client.model, "gpt-4o-mini");
        assert_eq!(client.base_url, "https://api.openai.com/v1");
    }

    #[test]
    fn test_ollama_client_creation() {
        let client = OllamaClient::new("http://localhost:11434", "llama2");
        assert_eq!(client.model, "llama2");
    }

    #[test]
    fn test_parse_first_choice() {
        let json = r#"{
            "choices": [
                {"message": {"role": "assistant", "content": "4"}, "finish_reason": "stop"},
                {"message": {"role": "assistant", "content": "four"}, "finish_reason": "stop"}
            ]
        }"#;

        let parsed: ChatResponse = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.choices.first().unwrap().message.content, "4");
    }

    #[test]
    fn test_empty_choice_list_parses() {
        let parsed: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(parsed.choices.is_empty());
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_per_call() {
        let client = OpenAiClient::new(None, "gpt-4o-mini", 2048, 0.1);
        let err = client.complete("What is 2+2?").await.unwrap_err();
        assert!(matches!(err, QnaError::Config(_)));
    }
}
