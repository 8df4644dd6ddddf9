//! Outcome records for curation runs.
//!
//! The legacy update jobs broadcast side effects through event listeners
//! (report writers, persistence hooks). Here every algorithm returns an
//! explicit, serializable record of what it did instead; reporting and
//! persistence are the caller's concern.

use crate::error::CurateError;
use crate::model::Feature;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four boundary fields of a range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BoundaryField {
    FromStart,
    FromEnd,
    ToStart,
    ToEnd,
}

impl fmt::Display for BoundaryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            BoundaryField::FromStart => "from-start",
            BoundaryField::FromEnd => "from-end",
            BoundaryField::ToStart => "to-start",
            BoundaryField::ToEnd => "to-end",
        };
        write!(f, "{}", name)
    }
}

/// A boundary that could not be projected onto the new sequence.
///
/// The range keeps the sentinel value; the caller decides whether to mark
/// the feature invalid or out of date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UnmappableBoundary {
    pub feature_ac: String,
    pub range_ac: String,
    pub boundary: BoundaryField,
    /// The 1-based position in the old sequence
    pub old_position: i64,
}

/// A range whose net length changed during shifting.
///
/// A warning, not an error: the underlying diff really did insert or
/// delete residues inside the range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LengthChange {
    pub feature_ac: String,
    pub range_ac: String,
    pub old_length: i64,
    pub new_length: i64,
}

/// Result of shifting a feature set from an old to a new sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftReport {
    /// Accessions of features with at least one shifted range
    pub shifted_features: Vec<String>,
    /// Boundaries that fell inside deleted spans
    pub unmappable: Vec<UnmappableBoundary>,
    /// Ranges whose net length changed
    pub length_changes: Vec<LengthChange>,
}

impl ShiftReport {
    /// Whether the shift touched nothing at all.
    pub fn is_noop(&self) -> bool {
        self.shifted_features.is_empty()
            && self.unmappable.is_empty()
            && self.length_changes.is_empty()
    }
}

/// Per-feature result of a short-label generation batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum LabelOutcome {
    /// A label was generated for the feature.
    Generated { feature_ac: String, label: String },
    /// Validation failed; the feature was skipped, no partial label kept.
    Failed {
        feature_ac: String,
        code: String,
        message: String,
    },
}

impl LabelOutcome {
    /// Wrap a per-feature generation result.
    pub fn from_result(feature: &Feature, result: Result<String, CurateError>) -> Self {
        let feature_ac = feature.ac_or_unknown().to_string();
        match result {
            Ok(label) => LabelOutcome::Generated { feature_ac, label },
            Err(err) => LabelOutcome::Failed {
                feature_ac,
                code: err.code().as_str(),
                message: err.to_string(),
            },
        }
    }

    pub fn is_generated(&self) -> bool {
        matches!(self, LabelOutcome::Generated { .. })
    }

    pub fn feature_ac(&self) -> &str {
        match self {
            LabelOutcome::Generated { feature_ac, .. } => feature_ac,
            LabelOutcome::Failed { feature_ac, .. } => feature_ac,
        }
    }
}

/// A set of candidates that must be merged into one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateGroup {
    /// Shared sequence checksum
    pub crc64: String,
    /// Shared organism taxid
    pub taxid: i32,
    /// Accessions of the members, in input order
    pub members: Vec<String>,
}

impl DuplicateGroup {
    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, ac: &str) -> bool {
        self.members.iter().any(|m| m == ac)
    }
}

/// A candidate excluded from grouping, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedCandidate {
    /// Identity xref of the candidate, when it had one
    pub identity: Option<String>,
    pub reason: String,
}

/// Result of partitioning duplicate candidates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DedupReport {
    /// Groups of size >= 2, to be merged by the caller
    pub groups: Vec<DuplicateGroup>,
    /// Candidates excluded from grouping (reported, never fatal)
    pub skipped: Vec<SkippedCandidate>,
}

impl DedupReport {
    /// The group containing the given accession, if any.
    pub fn group_of(&self, ac: &str) -> Option<&DuplicateGroup> {
        self.groups.iter().find(|g| g.contains(ac))
    }
}

/// Aggregate report for a whole curation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CurationReport {
    pub shift: Option<ShiftReport>,
    pub labels: Vec<LabelOutcome>,
    pub dedup: Option<DedupReport>,
}

impl CurationReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count of successfully generated labels.
    pub fn labels_generated(&self) -> usize {
        self.labels.iter().filter(|o| o.is_generated()).count()
    }

    /// Count of features skipped during label generation.
    pub fn labels_failed(&self) -> usize {
        self.labels.len() - self.labels_generated()
    }

    /// Serialize the report as pretty JSON for run logs.
    pub fn to_json(&self) -> Result<String, CurateError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
