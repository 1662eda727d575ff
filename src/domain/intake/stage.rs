//! Derived step sequencing for the intake flow.
//!
//! The pending stage is never stored. It is recomputed from record contents
//! at the start of every turn: the first uncollected field in the fixed
//! order is the stage to prompt for, and a record with nothing left to
//! collect is `Done`. That recomputation is the resume mechanism - a
//! conversation picked up mid-flow lands on exactly the field it was
//! waiting for, and a field collected earlier (or seeded at creation) is
//! never solicited again.

use serde::{Deserialize, Serialize};

use super::{validators, FieldRejection, HazardCategory, IntakeRecord};

/// The currently-pending step of an intake conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    AwaitNationalId,
    AwaitCategory,
    AwaitDescription,
    Done,
}

/// A validated answer for one field, ready to write into the record.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    NationalId(String),
    Category(HazardCategory),
    Description(String),
}

/// The prompt a stage issues: text plus optional selectable option labels.
#[derive(Debug, Clone, PartialEq)]
pub struct StagePrompt {
    pub text: &'static str,
    pub choices: Option<Vec<String>>,
}

impl Stage {
    /// The fixed order of prompting stages.
    pub const PROMPTING: [Stage; 3] = [
        Stage::AwaitNationalId,
        Stage::AwaitCategory,
        Stage::AwaitDescription,
    ];

    /// Derives the pending stage from record contents.
    ///
    /// Pure function of the record: the first field in the fixed order that
    /// is still uncollected, or `Done` when every field is present.
    pub fn of(record: &IntakeRecord) -> Stage {
        if !record.has_national_id() {
            Stage::AwaitNationalId
        } else if !record.has_category() {
            Stage::AwaitCategory
        } else if !record.has_description() {
            Stage::AwaitDescription
        } else {
            Stage::Done
        }
    }

    /// Returns the prompt this stage issues, or `None` for `Done`.
    ///
    /// The category stage carries the selectable category labels; how a
    /// channel renders them is not this module's concern.
    pub fn prompt(&self) -> Option<StagePrompt> {
        let text = match self {
            Stage::AwaitNationalId => "Please enter your 9-digit ID number.",
            Stage::AwaitCategory => "What kind of hazard are you reporting?",
            Stage::AwaitDescription => "Please describe the hazard briefly.",
            Stage::Done => return None,
        };
        let choices = match self {
            Stage::AwaitCategory => Some(HazardCategory::labels()),
            _ => None,
        };
        Some(StagePrompt { text, choices })
    }

    /// Runs this stage's validator over a raw answer.
    ///
    /// Returns `None` for `Done`, which accepts no input.
    pub fn accept(&self, raw: &str) -> Option<Result<FieldValue, FieldRejection>> {
        match self {
            Stage::AwaitNationalId => {
                Some(validators::national_id(raw).map(FieldValue::NationalId))
            }
            Stage::AwaitCategory => Some(validators::category(raw).map(FieldValue::Category)),
            Stage::AwaitDescription => {
                Some(validators::description(raw).map(FieldValue::Description))
            }
            Stage::Done => None,
        }
    }

    /// Returns a short label for the stage, suitable for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::AwaitNationalId => "national_id",
            Stage::AwaitCategory => "category",
            Stage::AwaitDescription => "description",
            Stage::Done => "done",
        }
    }

    /// True for the terminal stage.
    pub fn is_done(&self) -> bool {
        matches!(self, Stage::Done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intake::IntakeSeed;

    fn record_with(
        national_id: Option<&str>,
        category: Option<HazardCategory>,
        description: Option<&str>,
    ) -> IntakeRecord {
        let mut record = IntakeRecord::new();
        record.national_id = national_id.map(str::to_string);
        record.category = category;
        record.description = description.map(str::to_string);
        record
    }

    mod derivation {
        use super::*;

        #[test]
        fn empty_record_awaits_national_id() {
            assert_eq!(Stage::of(&IntakeRecord::new()), Stage::AwaitNationalId);
        }

        #[test]
        fn collected_id_advances_to_category() {
            let record = record_with(Some("123456782"), None, None);
            assert_eq!(Stage::of(&record), Stage::AwaitCategory);
        }

        #[test]
        fn collected_id_and_category_advance_to_description() {
            let record = record_with(Some("123456782"), Some(HazardCategory::Pothole), None);
            assert_eq!(Stage::of(&record), Stage::AwaitDescription);
        }

        #[test]
        fn fully_collected_record_is_done() {
            let record = record_with(
                Some("123456782"),
                Some(HazardCategory::Pothole),
                Some("deep pothole"),
            );
            assert_eq!(Stage::of(&record), Stage::Done);
        }

        #[test]
        fn whitespace_only_description_still_awaits_description() {
            let record = record_with(
                Some("123456782"),
                Some(HazardCategory::Pothole),
                Some("   "),
            );
            assert_eq!(Stage::of(&record), Stage::AwaitDescription);
        }

        #[test]
        fn later_field_collected_first_never_reprompts_it() {
            // Category was seeded; the flow still starts at the ID and then
            // skips straight past the collected category.
            let seeded = IntakeRecord::from_seed(IntakeSeed {
                national_id: None,
                category: Some("Fallen tree".to_string()),
                description: None,
            });
            assert_eq!(Stage::of(&seeded), Stage::AwaitNationalId);

            let mut record = seeded;
            record.apply(FieldValue::NationalId("123456782".to_string()));
            assert_eq!(Stage::of(&record), Stage::AwaitDescription);
        }

        #[test]
        fn derivation_is_idempotent() {
            let record = record_with(Some("123456782"), None, None);
            assert_eq!(Stage::of(&record), Stage::of(&record));
        }

        #[test]
        fn derivation_follows_prompting_order() {
            let mut record = IntakeRecord::new();
            assert_eq!(Stage::of(&record), Stage::PROMPTING[0]);

            record.apply(FieldValue::NationalId("123456782".to_string()));
            assert_eq!(Stage::of(&record), Stage::PROMPTING[1]);

            record.apply(FieldValue::Category(HazardCategory::Pothole));
            assert_eq!(Stage::of(&record), Stage::PROMPTING[2]);
        }
    }

    mod prompts {
        use super::*;

        #[test]
        fn every_prompting_stage_has_prompt_text() {
            for stage in Stage::PROMPTING {
                let prompt = stage.prompt().unwrap();
                assert!(!prompt.text.is_empty());
            }
        }

        #[test]
        fn done_has_no_prompt() {
            assert_eq!(Stage::Done.prompt(), None);
        }

        #[test]
        fn only_the_category_stage_offers_choices() {
            assert!(Stage::AwaitNationalId.prompt().unwrap().choices.is_none());
            assert_eq!(
                Stage::AwaitCategory.prompt().unwrap().choices,
                Some(HazardCategory::labels())
            );
            assert!(Stage::AwaitDescription.prompt().unwrap().choices.is_none());
        }
    }

    mod accept {
        use super::*;

        #[test]
        fn dispatches_to_the_matching_validator() {
            assert_eq!(
                Stage::AwaitNationalId.accept("123456782"),
                Some(Ok(FieldValue::NationalId("123456782".to_string())))
            );
            assert_eq!(
                Stage::AwaitCategory.accept("Water leak"),
                Some(Ok(FieldValue::Category(HazardCategory::WaterLeak)))
            );
            assert_eq!(
                Stage::AwaitDescription.accept(" burst pipe "),
                Some(Ok(FieldValue::Description("burst pipe".to_string())))
            );
        }

        #[test]
        fn surfaces_rejections_unchanged() {
            assert_eq!(
                Stage::AwaitNationalId.accept("123"),
                Some(Err(FieldRejection::InvalidFormat))
            );
        }

        #[test]
        fn done_accepts_no_input() {
            assert_eq!(Stage::Done.accept("anything"), None);
            assert!(Stage::Done.is_done());
        }
    }
}
