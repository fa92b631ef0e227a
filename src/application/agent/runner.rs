use std::sync::Arc;

use serde_json::json;
use tracing::{debug, info, warn};

use super::directive::Directive;
use super::errors::AgentError;
use super::tools::{self, ToolName};
use crate::domain::Conversation;
use crate::infrastructure::model::{ModelProvider, ModelRequest};
use crate::infrastructure::store::TodoStore;

/// Drives one user turn: query the model with the full transcript, decode its
/// directive, dispatch tool calls, and repeat until the model emits a final
/// output or the round-trip limit is hit.
pub struct Agent<P: ModelProvider> {
    provider: Arc<P>,
    store: Arc<TodoStore>,
    model: String,
    max_steps: usize,
}

impl<P: ModelProvider> Agent<P> {
    pub fn new(
        provider: Arc<P>,
        store: Arc<TodoStore>,
        model: impl Into<String>,
        max_steps: usize,
    ) -> Self {
        Self {
            provider,
            store,
            model: model.into(),
            max_steps,
        }
    }

    pub async fn run_turn(
        &self,
        conversation: &mut Conversation,
        prompt: &str,
    ) -> Result<String, AgentError> {
        conversation.push_user(prompt);
        info!("Turn started");

        for step in 0..self.max_steps {
            debug!(step, messages = conversation.len(), "Submitting conversation to model");
            let response = self
                .provider
                .complete(ModelRequest {
                    model: self.model.clone(),
                    messages: conversation.messages().to_vec(),
                })
                .await?;

            // The raw reply joins the transcript before decoding, so the
            // model keeps seeing its own output even when it is unusable.
            conversation.push_assistant(&response.content);

            match Directive::parse(&response.content)? {
                Directive::Plan { plan } => {
                    debug!(plan = plan.as_str(), "Model planned");
                }
                Directive::Action { function, input } => {
                    let Some(tool) = ToolName::parse(&function) else {
                        warn!(function = function.as_str(), "Model invoked a tool outside the registry");
                        return Err(AgentError::UnknownTool(function));
                    };
                    info!(tool = tool.as_str(), "Dispatching tool");
                    let result = tools::execute(&self.store, tool, &input).await?;
                    let observation = json!({ "type": "observation", "observation": result });
                    conversation.push_developer(observation.to_string());
                }
                Directive::Output { output } => {
                    info!("Turn finished");
                    return Ok(output);
                }
                Directive::Observation { .. } => {
                    warn!("Model emitted an observation directive");
                    return Err(AgentError::MalformedDirective(
                        "observation directives are produced by the runtime, not the model".into(),
                    ));
                }
            }
        }

        warn!(max_steps = self.max_steps, "Turn hit the round-trip limit");
        Err(AgentError::TurnLimitExceeded {
            max_steps: self.max_steps,
        })
    }
}
