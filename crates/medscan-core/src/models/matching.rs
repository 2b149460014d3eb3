//! Match result models for the medicine matcher.

use serde::{Deserialize, Serialize};

use super::MedicineRecord;

/// Qualitative bucket derived from a candidate's numeric score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MatchStrength {
    Strong,
    Moderate,
    Weak,
}

impl MatchStrength {
    /// Bucket a final score. Bands: strong >= 80, moderate >= 50, weak below.
    pub fn from_score(score: u8) -> Self {
        if score >= 80 {
            MatchStrength::Strong
        } else if score >= 50 {
            MatchStrength::Moderate
        } else {
            MatchStrength::Weak
        }
    }

    /// Lowercase label used by presentation layers.
    pub fn as_str(&self) -> &'static str {
        match self {
            MatchStrength::Strong => "strong",
            MatchStrength::Moderate => "moderate",
            MatchStrength::Weak => "weak",
        }
    }
}

/// Raw per-field score contributions for one candidate.
///
/// Each value is already weighted (name out of 40, generic name out of 30,
/// composition out of 20, kind flat 10).
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Default)]
pub struct FieldScores {
    /// Proportional name match, weight 40
    pub name: f64,
    /// Proportional generic name match, weight 30
    pub generic_name: f64,
    /// Proportional composition match, weight 20
    pub composition: f64,
    /// Flat kind match, 10 or 0
    pub kind: f64,
}

impl FieldScores {
    /// Sum of all field contributions (the raw, unclamped score).
    pub fn raw_total(&self) -> f64 {
        self.name + self.generic_name + self.composition + self.kind
    }
}

/// A ranked candidate match against the catalog.
///
/// Immutable value object, constructed fresh per match pass; borrows the
/// catalog record rather than cloning it.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MatchResult<'a> {
    /// The matched catalog record
    pub record: &'a MedicineRecord,
    /// Final confidence score, clamped to [0, 100]
    pub score: u8,
    /// Field tokens that matched, deduplicated across fields
    pub matched_keywords: Vec<String>,
    /// Per-field score breakdown
    pub breakdown: FieldScores,
    /// Qualitative strength bucket
    pub strength: MatchStrength,
}
