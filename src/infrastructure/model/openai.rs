//! OpenAI-compatible chat-completions client.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::types::{ModelError, ModelProvider, ModelRequest, ModelResponse};
use crate::domain::ChatMessage;

const DEFAULT_ENDPOINT: &str = "https://api.openai.com";
const API_PATH: &str = "v1/chat/completions";

#[derive(Clone)]
pub struct OpenAiClient {
    endpoint: String,
    api_key: String,
    http: Client,
}

impl OpenAiClient {
    /// Fails fast when no credential is present so a misconfigured session
    /// never reaches the interactive prompt.
    pub fn from_env() -> Result<Self, ModelError> {
        let api_key = std::env::var("OPENAI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ModelError::MissingApiKey)?;
        let endpoint = std::env::var("OPENAI_BASE_URL")
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string());
        Ok(Self {
            endpoint,
            api_key,
            http: Client::new(),
        })
    }

    fn url(&self) -> String {
        format!("{}/{API_PATH}", self.endpoint.trim_end_matches('/'))
    }
}

#[async_trait]
impl ModelProvider for OpenAiClient {
    async fn complete(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let payload = ChatCompletionRequest {
            model: request.model.clone(),
            messages: request.messages,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            stream: false,
        };

        info!(
            model = request.model.as_str(),
            messages = payload.messages.len(),
            "Sending chat completion request"
        );

        let response: ChatCompletionResponse = self
            .http
            .post(self.url())
            .bearer_auth(&self.api_key)
            .json(&payload)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;
        debug!("Received chat completion response");

        let content = response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message)
            .map(|message| message.content)
            .ok_or_else(|| ModelError::InvalidResponse("missing message content".into()))?;

        Ok(ModelResponse { content })
    }
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    stream: bool,
}

#[derive(Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatCompletionChoice>,
}

#[derive(Deserialize)]
struct ChatCompletionChoice {
    message: Option<ChatCompletionMessage>,
}

#[derive(Deserialize)]
struct ChatCompletionMessage {
    content: String,
}
