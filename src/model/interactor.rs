//! Interactor and cross-reference records

use serde::{Deserialize, Serialize};
use std::fmt;

/// Interactor type, as resolved from its controlled-vocabulary term.
///
/// Only proteins and peptides are eligible for mutation short labels.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InteractorKind {
    Protein,
    Peptide,
    /// Anything else (gene, nucleic acid, small molecule, ...)
    Other(String),
}

impl InteractorKind {
    /// Whether this kind carries an amino-acid sequence usable for labels.
    pub fn is_polypeptide(&self) -> bool {
        matches!(self, InteractorKind::Protein | InteractorKind::Peptide)
    }
}

impl fmt::Display for InteractorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InteractorKind::Protein => write!(f, "protein"),
            InteractorKind::Peptide => write!(f, "peptide"),
            InteractorKind::Other(name) => write!(f, "{}", name),
        }
    }
}

/// A foreign-database reference attached to an interactor.
///
/// The qualifier distinguishes the canonical identity reference (e.g. a
/// UniProt accession with the "identity" qualifier) from parent links on
/// transcript records (isoform-parent, chain-parent).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Xref {
    /// Primary identifier in the foreign database
    pub primary_id: String,
    /// Reference qualifier (e.g. "identity", "isoform-parent")
    pub qualifier: Option<String>,
}

impl Xref {
    pub fn new(primary_id: impl Into<String>) -> Self {
        Self {
            primary_id: primary_id.into(),
            qualifier: None,
        }
    }

    pub fn with_qualifier(mut self, qualifier: impl Into<String>) -> Self {
        self.qualifier = Some(qualifier.into());
        self
    }
}

/// A protein or other interactor loaded from the reference store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interactor {
    /// Accession of the persisted interactor
    pub ac: String,
    /// Resolved interactor type
    pub kind: InteractorKind,
    /// Full residue sequence, when the record carries one
    pub sequence: Option<String>,
    /// NCBI taxonomy identifier of the source organism
    pub taxid: Option<i32>,
    /// CRC64 checksum of the sequence, when precomputed
    pub crc64: Option<String>,
}

impl Interactor {
    /// Create a protein interactor with a sequence.
    pub fn protein(ac: impl Into<String>, sequence: impl Into<String>) -> Self {
        Self {
            ac: ac.into(),
            kind: InteractorKind::Protein,
            sequence: Some(sequence.into()),
            taxid: None,
            crc64: None,
        }
    }

    /// Builder-style kind setter.
    pub fn with_kind(mut self, kind: InteractorKind) -> Self {
        self.kind = kind;
        self
    }

    /// Builder-style taxid setter.
    pub fn with_taxid(mut self, taxid: i32) -> Self {
        self.taxid = Some(taxid);
        self
    }
}
