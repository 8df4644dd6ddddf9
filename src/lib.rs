//! intact-curate: protein curation core algorithms
//!
//! The algorithmic heart of the IntAct protein-update batch jobs, free of
//! any persistence machinery: feature range shifting across sequence
//! updates, mutation short-label generation, and duplicate protein
//! matching. External services (sequence stores, ontology servers) appear
//! only as narrow collaborator traits with mock implementations.
//!
//! # Example
//!
//! ```
//! use intact_curate::model::{Feature, Interactor, Range, ResultingSequence};
//! use intact_curate::ontology::MockOntology;
//! use intact_curate::shortlabel::{ShortlabelConfig, ShortlabelGenerator};
//! use intact_curate::CurateConfig;
//!
//! // Resolve the allowed mutation terms once, at startup.
//! let ontology = MockOntology::with_test_data();
//! let config = ShortlabelConfig::from_ontology(&ontology, &CurateConfig::default()).unwrap();
//! let generator = ShortlabelGenerator::new(config);
//!
//! // A V -> T substitution at position 3 of the interactor sequence.
//! let interactor = Interactor::protein("EBI-1000", "MKVLAT");
//! let feature = Feature::new("MI:0118").with_range(
//!     Range::exact(3, 3).with_resulting_sequence(ResultingSequence::new("V", "T")),
//! );
//!
//! let label = generator.generate(&interactor, &feature).unwrap();
//! assert_eq!(label, "val3thr");
//! ```

pub mod checksum;
pub mod config;
pub mod dedup;
pub mod diff;
pub mod error;
pub mod model;
pub mod ontology;
pub mod report;
pub mod sequence;
pub mod shift;
pub mod shortlabel;

// Re-export commonly used types
pub use checksum::crc64;
pub use config::CurateConfig;
pub use dedup::{group_candidates, DuplicateCandidate};
pub use error::{CurateError, ErrorCode};
pub use model::{Feature, Interactor, Range, UNMAPPABLE_POSITION};
pub use ontology::{MockOntology, OntologyLookup, MUTATION_MI_REF};
pub use report::{CurationReport, DedupReport, LabelOutcome, ShiftReport};
pub use sequence::{MockSequenceSource, SequenceSource};
pub use shift::RangeShifter;
pub use shortlabel::{ShortlabelConfig, ShortlabelGenerator};

/// Result type alias for intact-curate operations
pub type Result<T> = std::result::Result<T, CurateError>;
