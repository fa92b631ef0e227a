mod conversation;
mod todo;

pub use conversation::{ChatMessage, Conversation, MessageRole};
pub use todo::Todo;
