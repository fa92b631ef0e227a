use serde_json::Value;
use tracing::warn;

use crate::infrastructure::store::{StoreError, TodoStore};

/// The closed set of operations the model may invoke. Unknown names never
/// reach dispatch; they fail at parse time, so the match below is exhaustive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolName {
    GetAllTodos,
    CreateTodo,
    DeleteTodoById,
    SearchTodo,
}

impl ToolName {
    /// Exact-name lookup; these are the spellings the system prompt
    /// advertises to the model.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "getAllTodos" => Some(Self::GetAllTodos),
            "createTodo" => Some(Self::CreateTodo),
            "deleteTodoById" => Some(Self::DeleteTodoById),
            "searchTodo" => Some(Self::SearchTodo),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::GetAllTodos => "getAllTodos",
            Self::CreateTodo => "createTodo",
            Self::DeleteTodoById => "deleteTodoById",
            Self::SearchTodo => "searchTodo",
        }
    }
}

/// Runs one tool call against the store and returns the observation payload
/// that gets fed back into the conversation.
pub(crate) async fn execute(
    store: &TodoStore,
    tool: ToolName,
    input: &str,
) -> Result<Value, StoreError> {
    match tool {
        ToolName::GetAllTodos => {
            let todos = store.list().await?;
            Ok(serde_json::to_value(todos).unwrap_or(Value::Null))
        }
        ToolName::CreateTodo => {
            let id = store.create(input).await?;
            Ok(Value::from(id))
        }
        ToolName::DeleteTodoById => {
            match input.trim().parse::<i64>() {
                Ok(id) => store.delete_by_id(id).await?,
                // Same soft semantics as a missing row.
                Err(_) => warn!(input, "Ignoring delete with non-numeric id"),
            }
            Ok(Value::Null)
        }
        ToolName::SearchTodo => {
            let todos = store.search(input).await?;
            Ok(serde_json::to_value(todos).unwrap_or(Value::Null))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_the_four_advertised_names() {
        for name in ["getAllTodos", "createTodo", "deleteTodoById", "searchTodo"] {
            let tool = ToolName::parse(name).expect("known tool");
            assert_eq!(tool.as_str(), name);
        }
    }

    #[test]
    fn parse_is_exact_match() {
        assert_eq!(ToolName::parse("getalltodos"), None);
        assert_eq!(ToolName::parse("GetAllTodos"), None);
        assert_eq!(ToolName::parse("dropAllTodos"), None);
        assert_eq!(ToolName::parse(""), None);
    }

    #[tokio::test]
    async fn create_execution_returns_the_new_id() {
        let store = TodoStore::open_in_memory().unwrap();
        let value = execute(&store, ToolName::CreateTodo, "milk").await.unwrap();
        let id = value.as_i64().expect("id observation");
        let todos = store.list().await.unwrap();
        assert_eq!(todos[0].id, id);
    }

    #[tokio::test]
    async fn delete_with_non_numeric_id_is_a_no_op() {
        let store = TodoStore::open_in_memory().unwrap();
        store.create("keep").await.unwrap();
        let value = execute(&store, ToolName::DeleteTodoById, "not-a-number")
            .await
            .unwrap();
        assert!(value.is_null());
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_execution_serializes_records() {
        let store = TodoStore::open_in_memory().unwrap();
        store.create("milk").await.unwrap();
        let value = execute(&store, ToolName::GetAllTodos, "").await.unwrap();
        let rows = value.as_array().expect("array observation");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0]["todo"], "milk");
    }
}
