//! The per-conversation intake record.
//!
//! This is the Field Store payload: the partially-filled hazard report for
//! one conversation. The record never stores its own pending stage - that
//! is re-derived from field contents on every turn (see
//! [`super::Stage::of`]).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::foundation::CaseNumber;

use super::{validators, FieldValue, HazardCategory};

/// Lifecycle status of an intake conversation.
///
/// `Closed` is set exactly once, when the confirmation sequence has been
/// issued; a closed conversation is never reopened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeStatus {
    Open,
    Closed,
}

/// The partially-filled hazard report for one conversation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IntakeRecord {
    pub national_id: Option<String>,
    pub category: Option<HazardCategory>,
    pub description: Option<String>,
    pub status: IntakeStatus,
    pub case_number: Option<CaseNumber>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IntakeRecord {
    /// Creates an empty record with every field uncollected.
    pub fn new() -> Self {
        let now = Utc::now();
        Self {
            national_id: None,
            category: None,
            description: None,
            status: IntakeStatus::Open,
            case_number: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates a record from caller-supplied initial values.
    ///
    /// Seed values run through the same validators as typed answers; a
    /// value that does not validate is discarded and its field starts
    /// uncollected.
    pub fn from_seed(seed: IntakeSeed) -> Self {
        let mut record = Self::new();
        if let Some(raw) = seed.national_id {
            if let Ok(id) = validators::national_id(&raw) {
                record.national_id = Some(id);
            }
        }
        if let Some(raw) = seed.category {
            if let Ok(category) = validators::category(&raw) {
                record.category = Some(category);
            }
        }
        if let Some(raw) = seed.description {
            if let Ok(description) = validators::description(&raw) {
                record.description = Some(description);
            }
        }
        record
    }

    /// True when the ID number has been collected.
    pub fn has_national_id(&self) -> bool {
        Self::collected(&self.national_id)
    }

    /// True when the category has been collected.
    pub fn has_category(&self) -> bool {
        self.category.is_some()
    }

    /// True when the description has been collected.
    pub fn has_description(&self) -> bool {
        Self::collected(&self.description)
    }

    // A text field counts as collected iff it is non-empty after trimming.
    fn collected(field: &Option<String>) -> bool {
        field.as_deref().map_or(false, |v| !v.trim().is_empty())
    }

    /// Writes a validated field value into the record.
    pub fn apply(&mut self, value: FieldValue) {
        match value {
            FieldValue::NationalId(id) => self.national_id = Some(id),
            FieldValue::Category(category) => self.category = Some(category),
            FieldValue::Description(text) => self.description = Some(text),
        }
        self.updated_at = Utc::now();
    }

    /// Closes the record with its assigned case number.
    pub fn close(&mut self, case_number: CaseNumber) {
        self.status = IntakeStatus::Closed;
        self.case_number = Some(case_number);
        self.updated_at = Utc::now();
    }

    /// True once the conversation has reached its terminal confirmation.
    pub fn is_closed(&self) -> bool {
        self.status == IntakeStatus::Closed
    }
}

impl Default for IntakeRecord {
    fn default() -> Self {
        Self::new()
    }
}

/// Caller-supplied initial values for a fresh conversation.
///
/// Arrives as loosely-shaped data from the flow's entry point; fields that
/// are missing or unusable simply start uncollected.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IntakeSeed {
    pub national_id: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}
