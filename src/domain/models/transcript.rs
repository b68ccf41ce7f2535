#[cfg(test)]
#[path = "transcript_test.rs"]
mod tests;

use super::ChatMessage;
use super::Sender;

/// Ordered, append-only conversation. Insertion order is display order.
#[derive(Default)]
pub struct Transcript {
    messages: Vec<ChatMessage>,
}

impl Transcript {
    pub fn append_message(&mut self, sender: Sender, text: &str) {
        self.messages.push(ChatMessage::new(sender, text));
    }

    pub fn messages(&self) -> &[ChatMessage] {
        return &self.messages;
    }

    pub fn len(&self) -> usize {
        return self.messages.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.messages.is_empty();
    }
}
