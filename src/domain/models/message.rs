#[cfg(test)]
#[path = "message_test.rs"]
mod tests;

use super::Sender;

pub const ASK_FALLBACK_TEXT: &str = "Error getting response.";

/// A single transcript entry. Fields are private so an entry can't change
/// once it has been appended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChatMessage {
    sender: Sender,
    text: String,
}

impl ChatMessage {
    pub fn new(sender: Sender, text: &str) -> ChatMessage {
        return ChatMessage {
            sender,
            text: text.to_string(),
        };
    }

    pub fn sender(&self) -> Sender {
        return self.sender;
    }

    pub fn text(&self) -> &str {
        return &self.text;
    }

    /// Text as it should be laid out in a terminal, with tabs expanded.
    pub fn display_lines(&self) -> Vec<String> {
        return self
            .text
            .replace('\t', "  ")
            .lines()
            .map(|line| return line.trim_end().to_string())
            .collect();
    }
}
