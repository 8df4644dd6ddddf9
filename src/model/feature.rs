//! Feature and range value objects
//!
//! These are transient computation objects: they are built from persisted
//! entities at the start of an update run, mutated in memory (range
//! endpoints shifted, short label rewritten), and handed back to the
//! persistence layer afterwards.
//!
//! # Coordinate System
//!
//! All range positions are 1-based and inclusive. Position 0 is invalid
//! and rejected during validation. Positions are signed so that the
//! unmappable sentinel [`UNMAPPABLE_POSITION`] can flow through a range
//! unchanged.

use serde::{Deserialize, Serialize};

/// Sentinel for a boundary that has no corresponding position in the new
/// sequence (it fell inside a deleted span).
///
/// Deliberately not an error: the caller decides whether the feature
/// becomes invalid or merely out of date.
pub const UNMAPPABLE_POSITION: i64 = -1;

/// Determinedness of a range boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RangeStatus {
    /// Exact position
    Certain,
    /// Position is unknown
    Undetermined,
    /// Position is approximate (greater-than, less-than, fuzzy interval)
    Fuzzy,
}

/// Residue content of a mutation before and after the change.
///
/// Either fragment may be absent on legacy records; the short-label
/// generator treats an absent fragment as a null-field error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultingSequence {
    /// Residues originally at the range positions
    pub original: Option<String>,
    /// Residues after the mutation
    pub new: Option<String>,
}

impl ResultingSequence {
    pub fn new(original: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            original: Some(original.into()),
            new: Some(new.into()),
        }
    }
}

/// A region on an interactor sequence.
///
/// The four boundary fields mirror the persisted model: a range has a
/// fuzzy begin interval (`from_start..from_end`) and a fuzzy end interval
/// (`to_start..to_end`). For an exact range all four collapse to
/// `from_start == from_end` and `to_start == to_end`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Accession of the persisted range, if any
    pub ac: Option<String>,
    /// Start of the begin interval (1-based, inclusive)
    pub from_start: i64,
    /// End of the begin interval
    pub from_end: i64,
    /// Start of the end interval
    pub to_start: i64,
    /// End of the end interval
    pub to_end: i64,
    /// Status of the begin boundary
    pub from_status: RangeStatus,
    /// Status of the end boundary
    pub to_status: RangeStatus,
    /// Mutated residue content, when the range describes a mutation
    pub resulting_sequence: Option<ResultingSequence>,
}

impl Range {
    /// Create an exact (certain/certain) range covering `start..=end`.
    pub fn exact(start: i64, end: i64) -> Self {
        Self {
            ac: None,
            from_start: start,
            from_end: start,
            to_start: end,
            to_end: end,
            from_status: RangeStatus::Certain,
            to_status: RangeStatus::Certain,
            resulting_sequence: None,
        }
    }

    /// Builder-style accession setter.
    pub fn with_ac(mut self, ac: impl Into<String>) -> Self {
        self.ac = Some(ac.into());
        self
    }

    /// Builder-style resulting-sequence setter.
    pub fn with_resulting_sequence(mut self, rs: ResultingSequence) -> Self {
        self.resulting_sequence = Some(rs);
        self
    }

    /// First position of the range (1-based).
    pub fn start(&self) -> i64 {
        self.from_start
    }

    /// Last position of the range (1-based, inclusive).
    pub fn end(&self) -> i64 {
        self.to_end
    }

    /// Net length of the range in residues.
    ///
    /// Meaningless when a boundary carries the unmappable sentinel.
    pub fn length(&self) -> i64 {
        self.to_end - self.from_start + 1
    }

    /// Accession for error messages, with a placeholder for transient ranges.
    pub fn ac_or_unknown(&self) -> &str {
        self.ac.as_deref().unwrap_or("unknown-range")
    }
}

/// An annotated region on an interactor: one or more ranges, an ontology
/// term identifying the feature type, and a short label slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feature {
    /// Accession of the persisted feature, if any
    pub ac: Option<String>,
    /// Ontology term identifier of the feature type (e.g. "MI:0429")
    pub feature_type: String,
    /// Current short label, rewritten by the generator
    pub short_label: Option<String>,
    /// Ranges in their natural stored order
    pub ranges: Vec<Range>,
}

impl Feature {
    pub fn new(feature_type: impl Into<String>) -> Self {
        Self {
            ac: None,
            feature_type: feature_type.into(),
            short_label: None,
            ranges: Vec::new(),
        }
    }

    /// Builder-style accession setter.
    pub fn with_ac(mut self, ac: impl Into<String>) -> Self {
        self.ac = Some(ac.into());
        self
    }

    /// Builder-style range append.
    pub fn with_range(mut self, range: Range) -> Self {
        self.ranges.push(range);
        self
    }

    /// Accession for error messages, with a placeholder for transient features.
    pub fn ac_or_unknown(&self) -> &str {
        self.ac.as_deref().unwrap_or("unknown-feature")
    }
}
