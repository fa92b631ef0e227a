use thiserror::Error;

use crate::infrastructure::model::ModelError;
use crate::infrastructure::store::StoreError;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error(transparent)]
    Model(#[from] ModelError),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error("malformed directive from model: {0}")]
    MalformedDirective(String),
    #[error("model invoked unknown tool '{0}'")]
    UnknownTool(String),
    #[error("turn exceeded the limit of {max_steps} model round-trips")]
    TurnLimitExceeded { max_steps: usize },
}

impl AgentError {
    /// An unknown tool name means the model has broken the tool contract the
    /// system prompt spells out; the session cannot be trusted to continue.
    /// Everything else fails the current turn only.
    pub fn is_fatal(&self) -> bool {
        matches!(self, AgentError::UnknownTool(_))
    }

    pub fn user_message(&self) -> String {
        match self {
            AgentError::Model(err) => err.user_message(),
            AgentError::Store(err) => err.user_message(),
            AgentError::MalformedDirective(_) => {
                "The assistant produced an unreadable reply. Please try rephrasing.".to_string()
            }
            AgentError::UnknownTool(name) => {
                format!("The assistant asked for an unknown operation \"{name}\".")
            }
            AgentError::TurnLimitExceeded { max_steps } => format!(
                "The assistant could not finish within {max_steps} steps. Please try a simpler request."
            ),
        }
    }
}
