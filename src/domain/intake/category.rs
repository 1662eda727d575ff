//! Hazard category vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The fixed set of categories a hazard report can be filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HazardCategory {
    Pothole,
    StreetLightOut,
    FallenTree,
    WaterLeak,
    BlockedDrain,
    GarbageOverflow,
}

impl HazardCategory {
    /// The canonical presentation order of categories.
    pub const ALL: [HazardCategory; 6] = [
        HazardCategory::Pothole,
        HazardCategory::StreetLightOut,
        HazardCategory::FallenTree,
        HazardCategory::WaterLeak,
        HazardCategory::BlockedDrain,
        HazardCategory::GarbageOverflow,
    ];

    /// Returns the presentation label for this category.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pothole => "Pothole",
            Self::StreetLightOut => "Street light out",
            Self::FallenTree => "Fallen tree",
            Self::WaterLeak => "Water leak",
            Self::BlockedDrain => "Blocked drain",
            Self::GarbageOverflow => "Garbage overflow",
        }
    }

    /// Returns all labels in presentation order.
    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|c| c.label().to_string()).collect()
    }

    /// Matches a label against the category set.
    ///
    /// Matching ignores surrounding whitespace and ASCII case, so a typed
    /// answer and a choice-resolved label both land on the same variant.
    pub fn from_label(label: &str) -> Option<Self> {
        let needle = label.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label().eq_ignore_ascii_case(needle))
    }
}

impl fmt::Display for HazardCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
