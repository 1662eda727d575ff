//! Messenger Port - Interface for outbound conversation messages.
//!
//! The core never renders UI. A prompt is text plus an optional list of
//! selectable option labels; how a channel displays them (buttons, menus,
//! plain text) is the adapter's concern. The core only inspects delivery
//! results as success or failure.

use async_trait::async_trait;

use crate::domain::foundation::ConversationId;

/// Errors that can occur during message delivery
#[derive(Debug, thiserror::Error)]
pub enum MessengerError {
    #[error("Delivery failed: {0}")]
    DeliveryFailed(String),
}

/// Port for sending messages back to the conversation
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Send a prompt whose answer is expected on the next turn.
    async fn send_prompt(
        &self,
        conversation_id: &ConversationId,
        text: &str,
        choices: Option<&[String]>,
    ) -> Result<(), MessengerError>;

    /// Send an informational message that expects no answer.
    async fn send_text(
        &self,
        conversation_id: &ConversationId,
        text: &str,
    ) -> Result<(), MessengerError>;
}
