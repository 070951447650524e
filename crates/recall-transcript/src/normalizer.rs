//! Message normalization for heterogeneous transcript records.
//!
//! Transcript lines arrive as loosely structured JSON: some carry an
//! explicit `type`, some nest a `message` object with its own `role` and
//! `content`, and content may be a bare string or a sequence of typed
//! blocks. This module reduces every shape to a `(role, body)` pair and
//! never fails on malformed input.

use serde_json::Value;

/// Speaker role resolved from a transcript record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Role {
    User,
    Assistant,
    /// Anything else: tool results, summaries, unknown record kinds.
    /// Carries the raw type string verbatim (possibly empty).
    Other(String),
}

impl Role {
    pub fn is_user(&self) -> bool {
        matches!(self, Role::User)
    }

    pub fn is_assistant(&self) -> bool {
        matches!(self, Role::Assistant)
    }
}

/// A transcript record reduced to a role and plain-text body.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedMessage {
    pub role: Role,
    pub body: String,
}

/// Reduce one raw transcript record to a role and plain-text body.
///
/// Unknown shapes degrade to [`Role::Other`] and an empty body rather
/// than erroring.
pub fn normalize(record: &Value) -> NormalizedMessage {
    NormalizedMessage {
        role: resolve_role(record),
        body: resolve_body(record),
    }
}

/// Role resolution order: explicit `type` field first, then the nested
/// message's `role`, then the raw type string as-is.
fn resolve_role(record: &Value) -> Role {
    let raw = record.get("type").and_then(Value::as_str).unwrap_or("");
    match raw {
        "user" | "user_message" => return Role::User,
        "assistant" | "assistant_message" => return Role::Assistant,
        _ => {}
    }

    if let Some(role) = record
        .get("message")
        .and_then(|m| m.get("role"))
        .and_then(Value::as_str)
    {
        match role {
            "user" => return Role::User,
            "assistant" => return Role::Assistant,
            _ => {}
        }
    }

    Role::Other(raw.to_string())
}

/// Body resolution: a nested message object wins; otherwise fall back to a
/// top-level `content` field with the same handling.
fn resolve_body(record: &Value) -> String {
    if let Some(message) = record.get("message") {
        if message.is_object() {
            return flatten_content(message.get("content").unwrap_or(&Value::Null));
        }
    }

    match record.get("content") {
        Some(content) => flatten_content(content),
        None => String::new(),
    }
}

/// Flatten a content field to plain text.
///
/// A bare string is returned as-is. A sequence concatenates the text of
/// `"text"` blocks joined with single spaces; bare strings inside the
/// sequence are kept verbatim; `"thinking"` blocks (internal reasoning)
/// and every other block type are skipped. Anything else is empty.
fn flatten_content(content: &Value) -> String {
    match content {
        Value::String(text) => text.clone(),
        Value::Array(blocks) => {
            let mut parts: Vec<&str> = Vec::new();
            for block in blocks {
                match block {
                    Value::String(text) => parts.push(text),
                    Value::Object(_) => {
                        if block.get("type").and_then(Value::as_str) == Some("text") {
                            if let Some(text) = block.get("text").and_then(Value::as_str) {
                                parts.push(text);
                            }
                        }
                    }
                    _ => {}
                }
            }
            parts.join(" ")
        }
        _ => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_from_type_field() {
        assert_eq!(normalize(&json!({"type": "user"})).role, Role::User);
        assert_eq!(normalize(&json!({"type": "user_message"})).role, Role::User);
        assert_eq!(
            normalize(&json!({"type": "assistant"})).role,
            Role::Assistant
        );
        assert_eq!(
            normalize(&json!({"type": "assistant_message"})).role,
            Role::Assistant
        );
    }

    #[test]
    fn test_role_from_nested_message() {
        let record = json!({"type": "turn", "message": {"role": "assistant"}});
        assert_eq!(normalize(&record).role, Role::Assistant);

        let record = json!({"message": {"role": "user"}});
        assert_eq!(normalize(&record).role, Role::User);
    }

    #[test]
    fn test_unknown_role_passes_through() {
        assert_eq!(
            normalize(&json!({"type": "summary"})).role,
            Role::Other("summary".to_string())
        );
        assert_eq!(normalize(&json!({})).role, Role::Other(String::new()));
    }

    #[test]
    fn test_type_field_wins_over_nested_role() {
        let record = json!({"type": "user", "message": {"role": "assistant"}});
        assert_eq!(normalize(&record).role, Role::User);
    }

    #[test]
    fn test_body_from_nested_string_content() {
        let record = json!({"type": "user", "message": {"content": "hello there"}});
        assert_eq!(normalize(&record).body, "hello there");
    }

    #[test]
    fn test_body_from_text_blocks() {
        let record = json!({
            "type": "assistant",
            "message": {"content": [
                {"type": "text", "text": "first part"},
                {"type": "text", "text": "second part"}
            ]}
        });
        assert_eq!(normalize(&record).body, "first part second part");
    }

    #[test]
    fn test_thinking_blocks_never_surface() {
        let record = json!({
            "type": "assistant",
            "message": {"content": [
                {"type": "thinking", "thinking": "private deliberation"},
                {"type": "text", "text": "visible answer"}
            ]}
        });
        let body = normalize(&record).body;
        assert_eq!(body, "visible answer");
        assert!(!body.contains("private"));
    }

    #[test]
    fn test_tool_use_blocks_skipped() {
        let record = json!({
            "type": "assistant",
            "message": {"content": [
                {"type": "tool_use", "name": "bash", "input": {"cmd": "ls"}},
                {"type": "text", "text": "ran the command"}
            ]}
        });
        assert_eq!(normalize(&record).body, "ran the command");
    }

    #[test]
    fn test_bare_strings_in_sequence_kept() {
        let record = json!({
            "message": {"content": ["plain chunk", {"type": "text", "text": "typed chunk"}]}
        });
        assert_eq!(normalize(&record).body, "plain chunk typed chunk");
    }

    #[test]
    fn test_top_level_content_fallback() {
        assert_eq!(normalize(&json!({"content": "direct text"})).body, "direct text");

        let record = json!({"content": [{"type": "text", "text": "from blocks"}]});
        assert_eq!(normalize(&record).body, "from blocks");
    }

    #[test]
    fn test_nested_message_wins_over_top_level_content() {
        let record = json!({
            "message": {"content": "nested"},
            "content": "top-level"
        });
        assert_eq!(normalize(&record).body, "nested");
    }

    #[test]
    fn test_non_object_message_falls_back() {
        let record = json!({"message": "not an object", "content": "fallback"});
        assert_eq!(normalize(&record).body, "fallback");
    }

    #[test]
    fn test_malformed_shapes_yield_empty_body() {
        assert_eq!(normalize(&json!({})).body, "");
        assert_eq!(normalize(&json!({"content": 42})).body, "");
        assert_eq!(normalize(&json!({"content": {"nested": "object"}})).body, "");
        assert_eq!(normalize(&json!({"message": {"content": null}})).body, "");
        assert_eq!(normalize(&json!({"message": {}})).body, "");
    }
}
