pub const BOT_NAME: &str = "DocChat";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

impl Sender {
    /// Name shown on top of the sender's chat bubbles.
    pub fn label(&self, username: &str) -> String {
        match self {
            Sender::User => return username.to_string(),
            Sender::Bot => return BOT_NAME.to_string(),
        }
    }
}
