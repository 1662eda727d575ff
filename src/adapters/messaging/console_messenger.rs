//! Console Messenger Adapter
//!
//! Renders outbound messages to stdout. Used by the hazard-intake binary;
//! choice lists are rendered as a numbered menu.

use async_trait::async_trait;

use crate::domain::foundation::ConversationId;
use crate::ports::{Messenger, MessengerError};

/// Stdout-backed messenger
#[derive(Debug, Clone, Default)]
pub struct ConsoleMessenger;

impl ConsoleMessenger {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Messenger for ConsoleMessenger {
    async fn send_prompt(
        &self,
        _conversation_id: &ConversationId,
        text: &str,
        choices: Option<&[String]>,
    ) -> Result<(), MessengerError> {
        println!("{}", text);
        if let Some(choices) = choices {
            for (index, choice) in choices.iter().enumerate() {
                println!("  {}. {}", index + 1, choice);
            }
        }
        Ok(())
    }

    async fn send_text(
        &self,
        _conversation_id: &ConversationId,
        text: &str,
    ) -> Result<(), MessengerError> {
        println!("{}", text);
        Ok(())
    }
}
