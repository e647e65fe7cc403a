//! Handler module - TEA update function and key handling
//!
//! - `update`: main update() function and message dispatch
//! - `keys`: key bindings per UI mode

pub(crate) mod keys;
pub(crate) mod update;


use crate::message::Message;

pub use update::update;

/// Result of processing a message
#[derive(Debug, Default, PartialEq, Eq)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self { message: Some(msg) }
    }
}
