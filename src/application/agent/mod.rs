mod directive;
mod errors;
mod prompt;
mod runner;
mod tools;


pub use errors::AgentError;
pub use prompt::SYSTEM_PROMPT;
pub use runner::Agent;
