mod openai;
mod types;

pub use openai::OpenAiClient;
pub use types::{ModelError, ModelProvider, ModelRequest, ModelResponse};
