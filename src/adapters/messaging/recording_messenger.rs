//! Recording Messenger Adapter
//!
//! Buffers outbound messages instead of delivering them, in send order.
//! Useful for testing and development.

use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::foundation::ConversationId;
use crate::ports::{Messenger, MessengerError};

/// One captured outbound message.
#[derive(Debug, Clone, PartialEq)]
pub enum SentMessage {
    Prompt {
        conversation_id: ConversationId,
        text: String,
        choices: Option<Vec<String>>,
    },
    Text {
        conversation_id: ConversationId,
        text: String,
    },
}

/// Messenger that records messages instead of delivering them
#[derive(Debug, Clone)]
pub struct RecordingMessenger {
    sent: Arc<Mutex<Vec<SentMessage>>>,
}

impl RecordingMessenger {
    /// Create a new recording messenger with an empty buffer
    pub fn new() -> Self {
        Self {
            sent: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// All messages captured so far, in send order.
    pub async fn sent(&self) -> Vec<SentMessage> {
        self.sent.lock().await.clone()
    }

    /// Number of messages captured so far.
    pub async fn sent_count(&self) -> usize {
        self.sent.lock().await.len()
    }
}

impl Default for RecordingMessenger {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_prompt(
        &self,
        conversation_id: &ConversationId,
        text: &str,
        choices: Option<&[String]>,
    ) -> Result<(), MessengerError> {
        self.sent.lock().await.push(SentMessage::Prompt {
            conversation_id: conversation_id.clone(),
            text: text.to_string(),
            choices: choices.map(<[String]>::to_vec),
        });
        Ok(())
    }

    async fn send_text(
        &self,
        conversation_id: &ConversationId,
        text: &str,
    ) -> Result<(), MessengerError> {
        self.sent.lock().await.push(SentMessage::Text {
            conversation_id: conversation_id.clone(),
            text: text.to_string(),
        });
        Ok(())
    }
}
