use super::SelectedFile;

/// Requests sent from the UI loop to the gateway.
pub enum Action {
    Ask(String),
    Upload(SelectedFile),
}
