//! The core models for a single linear chat transcript.
use std::fmt;

use serde::{Deserialize, Serialize};

use super::ChatError;

/// Id of the seed system message.
pub const SEED_ID: u64 = 0;

/// First id handed out after a reset.
pub const INITIAL_ID: u64 = 1;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum Role {
    System,
    User,
    Assistant,
    // Only reachable when strict role checking is turned off
    Other(String),
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::Other(s) => s,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Other(_))
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        match s.as_str() {
            "system" => Role::System,
            "user" => Role::User,
            "assistant" => Role::Assistant,
            _ => Role::Other(s),
        }
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Other(s) => s,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rejects roles outside of `system | user | assistant` unless
/// `strict` is off, in which case anything goes.
pub fn validate_role(role: &Role, strict: bool) -> Result<(), ChatError> {
    if strict && !role.is_known() {
        return Err(ChatError::Validation(format!(
            "Unknown role '{}'. Expected one of system, user, assistant",
            role
        )));
    }
    Ok(())
}

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct Message {
    pub id: u64,
    pub role: Role,
    pub content: String,
}

/// Ordered list of messages plus the next id to hand out.
///
/// Order is arrival order and is exactly the prompt sent to the
/// completion API. The next id is always greater than any id in the
/// list.
#[derive(Debug, Clone, PartialEq)]
pub struct Transcript {
    messages: Vec<Message>,
    next_id: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self {
            messages: Vec::new(),
            next_id: INITIAL_ID,
        }
    }
}

impl Transcript {
    /// A transcript holding only the seed system message.
    pub fn seeded(system_message: &str) -> Self {
        let mut transcript = Self::default();
        transcript.seed(system_message);
        transcript
    }

    /// Restores a transcript from previously saved messages. Returns
    /// `None` when an id leaves no room for a next id.
    pub fn from_messages(messages: Vec<Message>) -> Option<Self> {
        let mut next_id = INITIAL_ID;
        for m in &messages {
            next_id = next_id.max(m.id.checked_add(1)?);
        }
        Some(Self { messages, next_id })
    }

    pub fn append(&mut self, role: Role, content: &str) -> Result<Message, ChatError> {
        let id = self.next_id;
        self.next_id = id.checked_add(1).ok_or(ChatError::IdsExhausted)?;
        let msg = Message {
            id,
            role,
            content: content.to_string(),
        };
        self.messages.push(msg.clone());
        Ok(msg)
    }

    pub fn get(&self, id: u64) -> Result<&Message, ChatError> {
        self.messages
            .iter()
            .find(|m| m.id == id)
            .ok_or(ChatError::NotFound(id))
    }

    /// Replaces the role and content of message `id`, keeping its
    /// position in the transcript.
    pub fn update(&mut self, id: u64, role: Role, content: &str) -> Result<&Message, ChatError> {
        let msg = self
            .messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(ChatError::NotFound(id))?;
        msg.role = role;
        msg.content = content.to_string();
        Ok(msg)
    }

    /// Clears every message and restarts ids. Does not reseed.
    pub fn reset(&mut self) {
        self.messages.clear();
        self.next_id = INITIAL_ID;
    }

    /// Reinstates the seed message on an empty transcript.
    pub fn seed(&mut self, system_message: &str) {
        if !self.messages.is_empty() {
            return;
        }
        self.messages.push(Message {
            id: SEED_ID,
            role: Role::System,
            content: system_message.to_string(),
        });
        self.next_id = self.next_id.max(SEED_ID + 1);
    }

    pub fn list(&self) -> Vec<Message> {
        self.messages.clone()
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn next_id(&self) -> u64 {
        self.next_id
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
    fn test_seeded_transcript() {
        let transcript = Transcript::seeded("Output markdown.");
        assert_eq!(transcript.len(), 1);
        let seed = transcript.get(SEED_ID).unwrap();
        assert_eq!(seed.role, Role::System);
        assert_eq!(seed.content, "Output markdown.");
        assert_eq!(transcript.next_id(), INITIAL_ID);
    }

    #[test]
    fn test_append_assigns_increasing_ids() {
        let mut transcript = Transcript::seeded("seed");
        let ids: Vec<u64> = (0..5)
            .map(|i| transcript.append(Role::User, &format!("msg {}", i)).unwrap().id)
            .collect();

        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(transcript.next_id(), 6);
    }

    #[test]
    fn test_append_first_user_message() {
        let mut transcript = Transcript::seeded("seed");
        let msg = transcript.append(Role::User, "hi").unwrap();

        assert_eq!(msg.id, 1);
        assert_eq!(
            transcript.list(),
            vec![
                Message {
                    id: 0,
                    role: Role::System,
                    content: "seed".to_string()
                },
                Message {
                    id: 1,
                    role: Role::User,
                    content: "hi".to_string()
                },
            ]
        );
    }

    #[test]
    fn test_update_keeps_length_and_order() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append(Role::User, "hi").unwrap();
        transcript.append(Role::User, "there").unwrap();
        let before: Vec<u64> = transcript.messages().iter().map(|m| m.id).collect();

        transcript.update(1, Role::Assistant, "hello").unwrap();

        let after: Vec<u64> = transcript.messages().iter().map(|m| m.id).collect();
        assert_eq!(before, after);
        assert_eq!(transcript.len(), 3);
        let updated = transcript.get(1).unwrap();
        assert_eq!(updated.role, Role::Assistant);
        assert_eq!(updated.content, "hello");
        assert_eq!(transcript.get(2).unwrap().content, "there");
    }

    #[test]
    fn test_missing_ids_are_not_found() {
        let mut transcript = Transcript::seeded("seed");
        assert!(matches!(transcript.get(99), Err(ChatError::NotFound(99))));
        assert!(matches!(
            transcript.update(99, Role::User, "nope"),
            Err(ChatError::NotFound(99))
        ));
        assert_eq!(transcript.len(), 1);
    }

    #[test]
    fn test_reset_then_seed() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append(Role::User, "hi").unwrap();
        transcript.reset();
        assert!(transcript.is_empty());
        assert_eq!(transcript.next_id(), INITIAL_ID);

        transcript.seed("seed");
        assert_eq!(transcript, Transcript::seeded("seed"));
        assert_eq!(transcript.append(Role::User, "again").unwrap().id, 1);
    }

    #[test]
    fn test_seed_is_noop_when_not_empty() {
        let mut transcript = Transcript::seeded("seed");
        transcript.append(Role::User, "hi").unwrap();
        transcript.seed("other");
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript.get(0).unwrap().content, "seed");
    }

    #[test]
    fn test_from_messages_continues_after_max_id() {
        let messages = vec![
            Message {
                id: 0,
                role: Role::System,
                content: "seed".to_string(),
            },
            Message {
                id: 7,
                role: Role::User,
                content: "hi".to_string(),
            },
            Message {
                id: 3,
                role: Role::Assistant,
                content: "hello".to_string(),
            },
        ];
        let mut transcript = Transcript::from_messages(messages).unwrap();
        assert_eq!(transcript.next_id(), 8);
        assert_eq!(transcript.append(Role::User, "next").unwrap().id, 8);

        assert_eq!(
            Transcript::from_messages(vec![]).unwrap().next_id(),
            INITIAL_ID
        );
    }

    #[test]
    fn test_from_messages_rejects_max_id() {
        let messages = vec![Message {
            id: u64::MAX,
            role: Role::User,
            content: "x".to_string(),
        }];
        assert!(Transcript::from_messages(messages).is_none());
    }

    #[test]
    fn test_append_stops_when_ids_run_out() {
        let messages = vec![Message {
            id: u64::MAX - 1,
            role: Role::User,
            content: "x".to_string(),
        }];
        let mut transcript = Transcript::from_messages(messages).unwrap();
        assert_eq!(transcript.next_id(), u64::MAX);

        let result = transcript.append(Role::User, "one too many");
        assert!(matches!(result, Err(ChatError::IdsExhausted)));
        assert_eq!(transcript.len(), 1);
        assert_eq!(transcript.next_id(), u64::MAX);
    }

    #[test]
    fn test_role_serializes_as_plain_string() {
        let msg = Message {
            id: 1,
            role: Role::Assistant,
            content: "hello".to_string(),
        };
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"id": 1, "role": "assistant", "content": "hello"})
        );

        let other: Role = serde_json::from_str("\"narrator\"").unwrap();
        assert_eq!(other, Role::Other("narrator".to_string()));
        assert_eq!(serde_json::to_string(&other).unwrap(), "\"narrator\"");
    }

    #[test]
    fn test_validate_role() {
        let narrator = Role::Other("narrator".to_string());
        assert!(validate_role(&Role::User, true).is_ok());
        assert!(matches!(
            validate_role(&narrator, true),
            Err(ChatError::Validation(_))
        ));
        assert!(validate_role(&narrator, false).is_ok());
    }
}
