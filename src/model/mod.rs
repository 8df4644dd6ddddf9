//! Data model for the curation algorithms
//!
//! Transient value objects mirroring the persisted entity graph:
//! interactors, features, ranges, cross-references. They carry no
//! persistence identity of their own; the caller maps them back onto
//! stored entities after an update run.

pub mod amino_acid;
pub mod feature;
pub mod interactor;

pub use amino_acid::AminoAcid;
pub use feature::{Feature, Range, RangeStatus, ResultingSequence, UNMAPPABLE_POSITION};
pub use interactor::{Interactor, InteractorKind, Xref};
