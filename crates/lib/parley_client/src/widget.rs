//! Chat widget state: transcript, input line and submission.
//!
//! The widget does no I/O. [`ChatWidget::submit`] hands back the request to
//! send, and the result comes back in through [`ChatWidget::apply_reply`].

use std::fmt;

use parley_core::{Message, Transcript};

use crate::error::ClientError;

/// First message of every session.
pub const WELCOME_MESSAGE: &str =
    "Welcome! Paste your website URL to get started or select a prompt below.";

/// Shown in place of a reply for every kind of failure.
pub const ERROR_REPLY: &str = "Sorry, there was an error processing your request.";

/// Hint shown while the input is empty.
pub const INPUT_PLACEHOLDER: &str = "Type your prompt here...";

/// One-click prompt shortcuts.
pub const PRESET_PROMPTS: [&str; 3] = [
    "What AI-tools can improve my website?",
    "How can AI streamline customer support?",
    "What automation can boost productivity?",
];

/// Sequence number of a submission, for log correlation only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(u64);

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A submission that still has to be sent to the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingRequest {
    pub id: RequestId,
    pub prompt: String,
}

/// Result of one backend round trip.
#[derive(Debug)]
pub struct ReplyEvent {
    pub id: RequestId,
    pub outcome: Result<String, ClientError>,
}

/// Cursor-relative edits to the input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEdit {
    Insert(char),
    Backspace,
    Delete,
    Left,
    Right,
    Home,
    End,
}

#[derive(Debug, Clone)]
pub struct ChatWidget {
    transcript: Transcript,
    input: String,
    /// Cursor position in chars, `0..=input.chars().count()`.
    cursor: usize,
    next_id: u64,
}

impl Default for ChatWidget {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatWidget {
    pub fn new() -> Self {
        let mut transcript = Transcript::new();
        transcript.push(Message::bot(WELCOME_MESSAGE));
        Self {
            transcript,
            input: String::new(),
            cursor: 0,
            next_id: 1,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the input line and move the cursor to its end.
    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
        self.cursor = self.input.chars().count();
    }

    /// Put a preset prompt in the input line. Does not submit.
    pub fn select_preset(&mut self, text: &str) {
        self.set_input(text);
    }

    pub fn edit(&mut self, edit: InputEdit) {
        let len = self.input.chars().count();
        match edit {
            InputEdit::Insert(c) => {
                let at = char_to_byte_index(&self.input, self.cursor);
                self.input.insert(at, c);
                self.cursor += 1;
            }
            InputEdit::Backspace => {
                if self.cursor > 0 {
                    self.cursor -= 1;
                    let at = char_to_byte_index(&self.input, self.cursor);
                    self.input.remove(at);
                }
            }
            InputEdit::Delete => {
                if self.cursor < len {
                    let at = char_to_byte_index(&self.input, self.cursor);
                    self.input.remove(at);
                }
            }
            InputEdit::Left => self.cursor = self.cursor.saturating_sub(1),
            InputEdit::Right => self.cursor = (self.cursor + 1).min(len),
            InputEdit::Home => self.cursor = 0,
            InputEdit::End => self.cursor = len,
        }
    }

    /// Move the input into the transcript as a user message.
    ///
    /// Returns `None` and changes nothing when the input is blank. The text
    /// is recorded and sent exactly as typed.
    pub fn submit(&mut self) -> Option<PendingRequest> {
        if self.input.trim().is_empty() {
            return None;
        }

        let prompt = std::mem::take(&mut self.input);
        self.cursor = 0;
        self.transcript.push(Message::user(prompt.clone()));

        let id = RequestId(self.next_id);
        self.next_id += 1;
        Some(PendingRequest { id, prompt })
    }

    /// Append the bot's side of a round trip, in arrival order.
    pub fn apply_reply(&mut self, event: ReplyEvent) {
        let text = match event.outcome {
            Ok(reply) if !reply.is_empty() => reply,
            _ => ERROR_REPLY.to_string(),
        };
        self.transcript.push(Message::bot(text));
    }
}

fn char_to_byte_index(s: &str, char_idx: usize) -> usize {
    s.char_indices()
        .nth(char_idx)
        .map(|(i, _)| i)
        .unwrap_or(s.len())
}
