//! Scripted chat widget: visibility, transcript, and canned replies.
//!
//! DESIGN
//! ======
//! Replies are deliberately non-contextual: the bot never looks at what the
//! visitor typed, it draws one entry from a fixed list. The draw goes through
//! [`ReplySource`] so tests can pin the choice.
//!
//! Deferred replies are tracked only as a count. A reply that lands while the
//! window is closed is still appended to the (hidden) transcript.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use rand::Rng;

/// Who wrote a transcript entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single transcript entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    pub text: String,
    pub sender: Sender,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::User }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), sender: Sender::Bot }
    }
}

/// Picks which canned reply to send next.
pub trait ReplySource {
    /// Return an index in `0..len`. Only called with `len > 0`.
    fn pick(&mut self, len: usize) -> usize;
}

/// Uniform reply selection backed by a `rand` generator.
#[derive(Debug)]
pub struct RandomReplies<R> {
    rng: R,
}

impl<R: Rng> RandomReplies<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> ReplySource for RandomReplies<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

/// Chat window state and transcript for one page view.
#[derive(Clone, Debug, Default)]
pub struct ChatState {
    pub visible: bool,
    pub messages: Vec<ChatMessage>,
    pub pending_replies: usize,
}

impl ChatState {
    pub fn open(&mut self) {
        self.visible = true;
    }

    pub fn close(&mut self) {
        self.visible = false;
    }

    /// Accept visitor input. Blank input is ignored and returns `None`.
    ///
    /// On success the user message is appended and one bot reply is owed.
    pub fn submit(&mut self, raw: &str) -> Option<ChatMessage> {
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let message = ChatMessage::user(text);
        self.messages.push(message.clone());
        self.pending_replies += 1;
        Some(message)
    }

    /// Append one canned reply chosen by `source`.
    ///
    /// Returns `None` only when `replies` is empty.
    pub fn deliver_reply(&mut self, replies: &[String], source: &mut dyn ReplySource) -> Option<ChatMessage> {
        self.pending_replies = self.pending_replies.saturating_sub(1);
        if replies.is_empty() {
            return None;
        }
        let idx = source.pick(replies.len()).min(replies.len() - 1);
        let message = ChatMessage::bot(replies[idx].clone());
        if !self.visible {
            log::debug!("bot reply delivered to hidden chat window");
        }
        self.messages.push(message.clone());
        Some(message)
    }
}
