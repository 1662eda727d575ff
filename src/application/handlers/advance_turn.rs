//! AdvanceTurnHandler - drive one turn of the intake conversation.
//!
//! One inbound turn: load the conversation's record (creating it on first
//! contact), re-derive the pending stage, feed the turn's raw input through
//! that stage's validator when present, persist any accepted answer, and
//! either prompt for the next uncollected field or finalize with a case
//! number. Every persistence write completes before the corresponding
//! outbound message is sent, so nothing the user sees claims progress that
//! was not durably stored.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::foundation::{CaseNumber, ConversationId};
use crate::domain::intake::{FieldRejection, IntakeRecord, IntakeSeed, Stage};
use crate::ports::{Messenger, MessengerError, RecordStore, RecordStoreError};

/// Command to advance a conversation by one turn.
#[derive(Debug, Clone)]
pub struct AdvanceTurnCommand {
    pub conversation_id: ConversationId,
    /// The user's raw reply, when this turn answers an outstanding prompt.
    /// A choice-resolved selection arrives here as its plain label.
    pub input: Option<String>,
    /// Initial values adopted exactly once, when the conversation's record
    /// is first created. Unusable seeds are discarded, never failed.
    pub seed: Option<serde_json::Value>,
}

impl AdvanceTurnCommand {
    /// A turn that opens (or resumes) a conversation without an answer.
    pub fn open(conversation_id: ConversationId) -> Self {
        Self {
            conversation_id,
            input: None,
            seed: None,
        }
    }

    /// A turn that answers the outstanding prompt.
    pub fn reply(conversation_id: ConversationId, input: impl Into<String>) -> Self {
        Self {
            conversation_id,
            input: Some(input.into()),
            seed: None,
        }
    }

    /// Attaches caller-supplied initial values for a fresh conversation.
    pub fn with_seed(mut self, seed: serde_json::Value) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Result of advancing a conversation by one turn.
#[derive(Debug, Clone, PartialEq)]
pub enum TurnOutcome {
    /// A prompt for the pending stage was sent; awaiting the next reply.
    Prompt(Stage),
    /// The reply was rejected; the rejection message and the same stage's
    /// prompt were sent. The record is unchanged.
    Reprompt {
        stage: Stage,
        rejection: FieldRejection,
    },
    /// Every field is collected; the confirmation sequence was sent and
    /// the conversation is closed.
    Completed { case_number: CaseNumber },
    /// The conversation reached its confirmation on an earlier turn;
    /// nothing was sent.
    AlreadyClosed,
}

/// Error type for advancing a turn
#[derive(Debug, thiserror::Error)]
pub enum AdvanceTurnError {
    /// The record store reported a failure. The turn did not complete and
    /// should be retried by the caller.
    #[error("Record store failure: {0}")]
    Store(#[from] RecordStoreError),

    /// Outbound message delivery failed.
    #[error("Messenger failure: {0}")]
    Messenger(#[from] MessengerError),
}

/// Handler driving the scripted intake sequence, one turn per call.
///
/// The caller serializes turns per conversation; distinct conversations
/// are independent and may be handled concurrently.
pub struct AdvanceTurnHandler {
    store: Arc<dyn RecordStore>,
    messenger: Arc<dyn Messenger>,
}

impl AdvanceTurnHandler {
    pub fn new(store: Arc<dyn RecordStore>, messenger: Arc<dyn Messenger>) -> Self {
        Self { store, messenger }
    }

    pub async fn handle(&self, cmd: AdvanceTurnCommand) -> Result<TurnOutcome, AdvanceTurnError> {
        let conversation_id = &cmd.conversation_id;

        // 1. Load the record, creating it on first contact. The fresh
        //    record is persisted before anything is sent so a later resume
        //    observes the adopted seed.
        let mut record = match self.store.load(conversation_id).await? {
            Some(record) => record,
            None => {
                let record = Self::create_record(conversation_id, cmd.seed);
                self.store.save(conversation_id, &record).await?;
                record
            }
        };

        // 2. Terminal conversations are never reopened.
        if record.is_closed() {
            debug!(conversation = %conversation_id, "turn on closed conversation ignored");
            return Ok(TurnOutcome::AlreadyClosed);
        }

        // 3. Re-derive the pending stage and feed it this turn's answer.
        //    A record that is already fully populated derives `Done` and
        //    falls straight through to finalization without prompting.
        let mut stage = Stage::of(&record);
        if let Some(raw) = cmd.input.as_deref() {
            if let Some(validated) = stage.accept(raw) {
                match validated {
                    Ok(value) => {
                        record.apply(value);
                        self.store.save(conversation_id, &record).await?;
                        debug!(
                            conversation = %conversation_id,
                            stage = stage.label(),
                            "answer accepted"
                        );
                        stage = Stage::of(&record);
                    }
                    Err(rejection) => {
                        warn!(
                            conversation = %conversation_id,
                            stage = stage.label(),
                            %rejection,
                            "answer rejected"
                        );
                        return self.reprompt(conversation_id, stage, rejection).await;
                    }
                }
            }
        }

        // 4. Everything collected: confirm and close. Otherwise prompt for
        //    the pending field.
        match stage.prompt() {
            None => self.finalize(conversation_id, record).await,
            Some(prompt) => {
                self.messenger
                    .send_prompt(conversation_id, prompt.text, prompt.choices.as_deref())
                    .await?;
                Ok(TurnOutcome::Prompt(stage))
            }
        }
    }

    /// Builds the initial record, adopting a seed when one deserializes.
    ///
    /// A seed of the wrong shape is discarded wholesale; seed values that
    /// fail their field validator are discarded individually by
    /// [`IntakeRecord::from_seed`].
    fn create_record(
        conversation_id: &ConversationId,
        seed: Option<serde_json::Value>,
    ) -> IntakeRecord {
        match seed {
            None => IntakeRecord::new(),
            Some(value) => match serde_json::from_value::<IntakeSeed>(value) {
                Ok(seed) => IntakeRecord::from_seed(seed),
                Err(err) => {
                    warn!(
                        conversation = %conversation_id,
                        error = %err,
                        "discarding malformed seed"
                    );
                    IntakeRecord::new()
                }
            },
        }
    }

    async fn reprompt(
        &self,
        conversation_id: &ConversationId,
        stage: Stage,
        rejection: FieldRejection,
    ) -> Result<TurnOutcome, AdvanceTurnError> {
        self.messenger
            .send_text(conversation_id, &rejection.to_string())
            .await?;
        if let Some(prompt) = stage.prompt() {
            self.messenger
                .send_prompt(conversation_id, prompt.text, prompt.choices.as_deref())
                .await?;
        }
        Ok(TurnOutcome::Reprompt { stage, rejection })
    }

    async fn finalize(
        &self,
        conversation_id: &ConversationId,
        mut record: IntakeRecord,
    ) -> Result<TurnOutcome, AdvanceTurnError> {
        let case_number = CaseNumber::new();
        record.close(case_number);
        self.store.save(conversation_id, &record).await?;

        self.messenger
            .send_text(
                conversation_id,
                &format!(
                    "Your report has been filed under case number {}.",
                    case_number
                ),
            )
            .await?;
        self.messenger
            .send_text(conversation_id, "Thank you for helping keep the city safe.")
            .await?;

        info!(conversation = %conversation_id, case = %case_number, "intake completed");
        Ok(TurnOutcome::Completed { case_number })
    }
}
