use serde::Deserialize;
use serde_json::Value;

use super::errors::AgentError;

/// One structured instruction from the model, discriminated by the `type`
/// field. `Observation` is only ever constructed by the runtime when feeding
/// tool results back into the conversation.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Directive {
    Plan {
        plan: String,
    },
    Action {
        function: String,
        #[serde(default)]
        input: String,
    },
    Output {
        output: String,
    },
    Observation {
        observation: Value,
    },
}

impl Directive {
    /// The contract is one JSON object per model reply; anything that does
    /// not decode into a known variant is a malformed directive.
    pub fn parse(content: &str) -> Result<Self, AgentError> {
        serde_json::from_str(content).map_err(|err| AgentError::MalformedDirective(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_plan() {
        let directive = Directive::parse(r#"{"type":"plan","plan":"look at the list"}"#).unwrap();
        assert_eq!(
            directive,
            Directive::Plan {
                plan: "look at the list".into()
            }
        );
    }

    #[test]
    fn parses_action_with_input() {
        let directive =
            Directive::parse(r#"{"type":"action","function":"createTodo","input":"milk"}"#)
                .unwrap();
        assert_eq!(
            directive,
            Directive::Action {
                function: "createTodo".into(),
                input: "milk".into()
            }
        );
    }

    #[test]
    fn action_input_defaults_to_empty() {
        let directive =
            Directive::parse(r#"{"type":"action","function":"getAllTodos"}"#).unwrap();
        assert_eq!(
            directive,
            Directive::Action {
                function: "getAllTodos".into(),
                input: String::new()
            }
        );
    }

    #[test]
    fn parses_output() {
        let directive = Directive::parse(r#"{"type":"output","output":"done"}"#).unwrap();
        assert_eq!(
            directive,
            Directive::Output {
                output: "done".into()
            }
        );
    }

    #[test]
    fn parses_observation() {
        let directive =
            Directive::parse(r#"{"type":"observation","observation":5}"#).unwrap();
        assert_eq!(
            directive,
            Directive::Observation {
                observation: json!(5)
            }
        );
    }

    #[test]
    fn fields_outside_the_variant_are_ignored() {
        let directive =
            Directive::parse(r#"{"type":"output","output":"hi","plan":"ignored"}"#).unwrap();
        assert_eq!(
            directive,
            Directive::Output {
                output: "hi".into()
            }
        );
    }

    #[test]
    fn rejects_non_json() {
        let err = Directive::parse("sure, adding milk now!").unwrap_err();
        assert!(matches!(err, AgentError::MalformedDirective(_)));
    }

    #[test]
    fn rejects_unknown_type() {
        let err = Directive::parse(r#"{"type":"reflect","thought":"hmm"}"#).unwrap_err();
        assert!(matches!(err, AgentError::MalformedDirective(_)));
    }

    #[test]
    fn rejects_missing_type() {
        let err = Directive::parse(r#"{"output":"no discriminant"}"#).unwrap_err();
        assert!(matches!(err, AgentError::MalformedDirective(_)));
    }
}
