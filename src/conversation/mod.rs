//! Conversation types and state management

use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use uuid::Uuid;

/// Originator of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    Tool,
}

impl Role {
    /// Lowercase name used on the wire
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Tool => "tool",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One turn in a conversation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Creation time in milliseconds since the Unix epoch. Any JSON number is
    /// accepted; whole values are written back as integers.
    #[serde(serialize_with = "serialize_millis")]
    pub ts: f64,
}

/// Largest integer an `f64` holds exactly (2^53)
const MAX_EXACT_MILLIS: f64 = 9_007_199_254_740_992.0;

fn serialize_millis<S: Serializer>(ts: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if ts.fract() == 0.0 && ts.abs() <= MAX_EXACT_MILLIS {
        serializer.serialize_i64(*ts as i64)
    } else {
        serializer.serialize_f64(*ts)
    }
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>, ts: f64) -> Self {
        Self {
            role,
            content: content.into(),
            ts,
        }
    }

    pub fn user(content: impl Into<String>, ts: f64) -> Self {
        Self::new(Role::User, content, ts)
    }

    pub fn assistant(content: impl Into<String>, ts: f64) -> Self {
        Self::new(Role::Assistant, content, ts)
    }

    pub fn tool(content: impl Into<String>, ts: f64) -> Self {
        Self::new(Role::Tool, content, ts)
    }
}

/// The value passed between conversation steps
///
/// `session_id` is opaque and never interpreted. The order of `messages`
/// is significant: the final element is the "last message" steps react to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationState {
    pub session_id: String,
    pub messages: Vec<Message>,
}

impl ConversationState {
    pub fn new(session_id: impl Into<String>) -> Self {
        Self {
            session_id: session_id.into(),
            messages: Vec::new(),
        }
    }

    /// Start a conversation under a freshly generated session id
    pub fn with_random_session() -> Self {
        Self::new(Uuid::new_v4().to_string())
    }

    pub fn with_message(mut self, message: Message) -> Self {
        self.messages.push(message);
        self
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    /// Content of the last message, or the empty string for an empty transcript
    pub fn last_content(&self) -> &str {
        self.last_message().map(|m| m.content.as_str()).unwrap_or("")
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let state = ConversationState::new("t1").with_message(Message::user("Hola", 1_700_000_000_000.0));

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sessionId": "t1",
                "messages": [{ "role": "user", "content": "Hola", "ts": 1_700_000_000_000i64 }]
            })
        );
    }

    #[test]
    fn test_parse_all_roles() {
        let raw = r#"{
            "sessionId": "abc",
            "messages": [
                { "role": "user", "content": "q", "ts": 1 },
                { "role": "tool", "content": "r", "ts": 2 },
                { "role": "assistant", "content": "a", "ts": 3 }
            ]
        }"#;

        let state: ConversationState = serde_json::from_str(raw).unwrap();
        let roles: Vec<Role> = state.messages.iter().map(|m| m.role).collect();
        assert_eq!(roles, vec![Role::User, Role::Tool, Role::Assistant]);
        assert_eq!(state.last_content(), "a");
    }

    #[test]
    fn test_float_timestamps_accepted() {
        let raw = r#"{
            "sessionId": "a",
            "messages": [
                { "role": "user", "content": "x", "ts": 1700000000000.0 },
                { "role": "user", "content": "y", "ts": 1.7e12 },
                { "role": "tool", "content": "z", "ts": 1700000000000.25 }
            ]
        }"#;

        let state: ConversationState = serde_json::from_str(raw).unwrap();
        assert_eq!(state.messages[0].ts, 1_700_000_000_000.0);
        assert_eq!(state.messages[1].ts, 1_700_000_000_000.0);
        assert_eq!(state.messages[2].ts, 1_700_000_000_000.25);

        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["messages"][0]["ts"], serde_json::json!(1_700_000_000_000i64));
        assert_eq!(json["messages"][2]["ts"], serde_json::json!(1_700_000_000_000.25));

        let back: ConversationState = serde_json::from_value(json).unwrap();
        assert_eq!(back, state);
    }

    #[test]
    fn test_unknown_role_rejected() {
        let raw = r#"{ "sessionId": "abc", "messages": [{ "role": "system", "content": "x", "ts": 1 }] }"#;
        assert!(serde_json::from_str::<ConversationState>(raw).is_err());
    }

    #[test]
    fn test_last_content_empty() {
        let state = ConversationState::new("empty");
        assert!(state.is_empty());
        assert!(state.last_message().is_none());
        assert_eq!(state.last_content(), "");
    }

    #[test]
    fn test_random_session_ids_differ() {
        let a = ConversationState::with_random_session();
        let b = ConversationState::with_random_session();
        assert_ne!(a.session_id, b.session_id);
        assert!(Uuid::parse_str(&a.session_id).is_ok());
    }

    #[test]
    fn test_role_display() {
        assert_eq!(Role::Tool.to_string(), "tool");
        assert_eq!(Role::Assistant.as_str(), "assistant");
    }
}
