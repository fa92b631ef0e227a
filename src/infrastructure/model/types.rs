//! Model provider seam - request, response, and error types.

use async_trait::async_trait;
use reqwest::StatusCode;
use thiserror::Error;

use crate::domain::ChatMessage;

/// One chat-completion request carrying the full conversation so far.
#[derive(Debug, Clone)]
pub struct ModelRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
}

#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub content: String,
}

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("model provider requires the OPENAI_API_KEY environment variable")]
    MissingApiKey,
    #[error("network error calling the model provider: {0}")]
    Network(#[from] reqwest::Error),
    #[error("model provider returned an invalid response: {0}")]
    InvalidResponse(String),
}

impl ModelError {
    pub fn user_message(&self) -> String {
        match self {
            ModelError::MissingApiKey => {
                "No API key configured. Set OPENAI_API_KEY and restart.".to_string()
            }
            ModelError::Network(source) => {
                if source.is_connect() {
                    "Could not connect to the model provider.".to_string()
                } else if source.is_timeout() {
                    "The model provider took too long to respond.".to_string()
                } else if let Some(status) = source.status() {
                    match status {
                        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                            "The model provider rejected the API key.".to_string()
                        }
                        StatusCode::SERVICE_UNAVAILABLE | StatusCode::BAD_GATEWAY => {
                            "The model provider is currently unavailable.".to_string()
                        }
                        _ => format!("Model request failed: {}", status.as_u16()),
                    }
                } else {
                    "Network error while talking to the model provider.".to_string()
                }
            }
            ModelError::InvalidResponse(_) => {
                "The model provider returned an unusable response.".to_string()
            }
        }
    }
}

#[async_trait]
pub trait ModelProvider: Send + Sync {
    async fn complete(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}
