//! Per-field validators for the intake flow.
//!
//! Each validator is a pure function from raw user input to either a
//! normalized value or a [`FieldRejection`]. The rejection's `Display` text
//! is the message sent back to the user before the stage is re-prompted;
//! the sequencer itself never inspects it.

use thiserror::Error;

use super::HazardCategory;

/// Why a raw answer was rejected for a field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldRejection {
    /// The ID number is not a 9-digit string.
    #[error("An ID number is exactly 9 digits, with no spaces or dashes. Please try again.")]
    InvalidFormat,

    /// The ID number is well-formed but fails the check-digit rule.
    #[error("That ID number does not check out. Please double-check the digits and try again.")]
    ChecksumMismatch,

    /// The category is not one of the listed options.
    #[error("'{0}' is not one of the listed categories. Please pick one of the options.")]
    NotInSet(String),

    /// The description was empty after trimming.
    #[error("The description cannot be empty. Please describe the hazard in a few words.")]
    Empty,
}

/// Validates a national ID number.
///
/// The input must be exactly 9 ASCII digits after trimming. Each digit is
/// weighted by its 0-based position (even position x1, odd position x2),
/// weighted values above 9 have 9 subtracted, and the grand total must be
/// divisible by 10. Returns the trimmed digit string unchanged.
pub fn national_id(raw: &str) -> Result<String, FieldRejection> {
    let trimmed = raw.trim();
    if trimmed.len() != 9 || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FieldRejection::InvalidFormat);
    }

    let sum: u32 = trimmed
        .bytes()
        .enumerate()
        .map(|(i, b)| {
            let digit = u32::from(b - b'0');
            let weighted = if i % 2 == 0 { digit } else { digit * 2 };
            if weighted > 9 {
                weighted - 9
            } else {
                weighted
            }
        })
        .sum();

    if sum % 10 == 0 {
        Ok(trimmed.to_string())
    } else {
        Err(FieldRejection::ChecksumMismatch)
    }
}

/// Validates a category answer against the fixed category set.
///
/// Choice-resolved labels go through the same membership check as typed
/// text; nothing outside the set is ever stored.
pub fn category(raw: &str) -> Result<HazardCategory, FieldRejection> {
    HazardCategory::from_label(raw)
        .ok_or_else(|| FieldRejection::NotInSet(raw.trim().to_string()))
}

/// Validates a free-text description: anything non-empty after trimming.
pub fn description(raw: &str) -> Result<String, FieldRejection> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        Err(FieldRejection::Empty)
    } else {
        Ok(trimmed.to_string())
    }
}
