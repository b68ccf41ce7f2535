mod action;
mod document;
mod error;
mod event;
mod loading;
mod message;
mod pending;
mod sender;
mod service;
mod slash_commands;
mod textarea;
mod transcript;
mod upload_status;

pub use action::*;
pub use document::*;
pub use error::*;
pub use event::*;
pub use loading::*;
pub use message::*;
pub use pending::*;
pub use sender::*;
pub use service::*;
pub use slash_commands::*;
pub use textarea::*;
pub use transcript::*;
pub use upload_status::*;
