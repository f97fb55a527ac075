//! Chat transcript model.

use serde::{Deserialize, Serialize};

/// Who authored a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
}

/// A single line in the transcript.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub sender: Sender,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::User,
        }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            sender: Sender::Bot,
        }
    }
}

/// Ordered, append-only sequence of messages.
///
/// There is no way to edit or remove a message once pushed; a transcript
/// only ever grows for the lifetime of its owner.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    messages: Vec<Message>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, message: Message) {
        self.messages.push(message);
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn last(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Message> {
        self.messages.iter()
    }

    pub fn as_slice(&self) -> &[Message] {
        &self.messages
    }
}

impl<'a> IntoIterator for &'a Transcript {
    type Item = &'a Message;
    type IntoIter = std::slice::Iter<'a, Message>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transcript_preserves_push_order() {
        let mut transcript = Transcript::new();
        transcript.push(Message::bot("welcome"));
        transcript.push(Message::user("hi"));
        transcript.push(Message::bot("hello"));

        let texts: Vec<&str> = transcript.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, ["welcome", "hi", "hello"]);
        assert_eq!(transcript.len(), 3);
        assert_eq!(transcript.last(), Some(&Message::bot("hello")));
    }

    #[test]
    fn sender_serializes_lowercase() {
        let json = serde_json::to_value(Message::user("Hello")).expect("serialize");
        assert_eq!(json, serde_json::json!({"text": "Hello", "sender": "user"}));

        let json = serde_json::to_value(Message::bot("Hi")).expect("serialize");
        assert_eq!(json["sender"], "bot");
    }
}
