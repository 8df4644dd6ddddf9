//! Sequence source collaborator and residue helpers
//!
//! The algorithms never fetch sequences themselves; an upstream service
//! (UniProt, a local store) supplies them through [`SequenceSource`].

use crate::error::CurateError;
use crate::model::AminoAcid;
use std::collections::HashMap;
use std::path::Path;

/// Trait for providing interactor sequences
///
/// Implementations might include:
/// - MockSequenceSource for testing
/// - a UniProt-backed service in the surrounding batch jobs
pub trait SequenceSource {
    /// Get the full residue sequence for an interactor accession
    fn sequence(&self, accession: &str) -> Result<String, CurateError>;

    /// Check if a sequence is available
    fn has_sequence(&self, accession: &str) -> bool {
        self.sequence(accession).is_ok()
    }
}

/// Blanket implementation for boxed trait objects
impl SequenceSource for Box<dyn SequenceSource> {
    fn sequence(&self, accession: &str) -> Result<String, CurateError> {
        (**self).sequence(accession)
    }

    fn has_sequence(&self, accession: &str) -> bool {
        (**self).has_sequence(accession)
    }
}

/// Mock sequence source backed by an in-memory map
#[derive(Debug, Clone, Default)]
pub struct MockSequenceSource {
    sequences: HashMap<String, String>,
}

impl MockSequenceSource {
    /// Create an empty mock source
    pub fn new() -> Self {
        Self::default()
    }

    /// Load sequences from a JSON file mapping accession to sequence
    pub fn from_json(path: &Path) -> Result<Self, CurateError> {
        let content = std::fs::read_to_string(path)?;
        let sequences: HashMap<String, String> = serde_json::from_str(&content)?;
        Ok(Self { sequences })
    }

    /// Add a sequence to the source
    pub fn add_sequence(&mut self, accession: impl Into<String>, sequence: impl Into<String>) {
        self.sequences.insert(accession.into(), sequence.into());
    }
}

impl SequenceSource for MockSequenceSource {
    fn sequence(&self, accession: &str) -> Result<String, CurateError> {
        self.sequences
            .get(accession)
            .cloned()
            .ok_or_else(|| CurateError::MissingSequence {
                accession: accession.to_string(),
            })
    }
}

/// Whether a fragment contains any lowercase letter.
pub fn contains_lowercase(fragment: &str) -> bool {
    fragment.chars().any(|c| c.is_ascii_lowercase())
}

/// Check every symbol of a fragment against the amino-acid alphabet.
///
/// Returns the first offending symbol, if any.
pub fn validate_residues(fragment: &str) -> Result<(), char> {
    for c in fragment.chars() {
        if AminoAcid::from_one_letter(c).is_none() {
            return Err(c);
        }
    }
    Ok(())
}
