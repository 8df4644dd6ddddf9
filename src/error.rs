//! Error types for intact-curate
//!
//! Validation failures carry the implicated feature/range/interactor
//! accession so batch drivers can report which unit of work was skipped.
//! All errors here are local validation outcomes, never transient
//! conditions worth retrying.

use std::fmt;
use thiserror::Error;

/// Error codes for categorizing errors
///
/// These codes can be used for programmatic error handling and for
/// run-report aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u16)]
pub enum ErrorCode {
    // Type errors (E1xxx)
    /// Interactor is not a protein or peptide
    InvalidInteractorType = 1001,
    /// Feature type is not in the mutation subtree
    FeatureTypeNotMutation = 1002,

    // Null-field errors (E2xxx)
    /// Interactor sequence is missing
    MissingSequence = 2001,
    /// Feature has no ranges
    MissingRange = 2002,
    /// Range has no resulting-sequence fragments
    MissingResultingSequence = 2003,
    /// Range position is zero, undetermined, or out of bounds
    InvalidRangePosition = 2004,

    // Sequence errors (E3xxx)
    /// Recomputed original fragment disagrees with the stored fragment
    SequenceMismatch = 3001,

    // Formatting errors (E4xxx)
    /// Resulting fragment contains lowercase letters
    LowercaseResultingSequence = 4001,
    /// Fragment contains a symbol that is not an amino acid
    InvalidResidue = 4002,

    // IO errors (E9xxx)
    /// File IO error
    IoError = 9001,
    /// JSON parsing error
    JsonError = 9002,
}

impl ErrorCode {
    /// Get the error code as a string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("E{:04}", *self as u16)
    }

    /// Get a brief description of this error code
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvalidInteractorType => "interactor is not a protein or peptide",
            ErrorCode::FeatureTypeNotMutation => "feature type is not a mutation term",
            ErrorCode::MissingSequence => "interactor sequence missing",
            ErrorCode::MissingRange => "feature has no ranges",
            ErrorCode::MissingResultingSequence => "resulting sequence missing",
            ErrorCode::InvalidRangePosition => "invalid range position",
            ErrorCode::SequenceMismatch => "original sequence mismatch",
            ErrorCode::LowercaseResultingSequence => "resulting sequence contains lowercase",
            ErrorCode::InvalidResidue => "invalid amino acid symbol",
            ErrorCode::IoError => "file I/O error",
            ErrorCode::JsonError => "JSON parsing error",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Main error type for intact-curate operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurateError {
    /// Interactor is not a protein or peptide
    #[error("Interactor {accession} has type {found}, expected protein or peptide")]
    InvalidInteractorType { accession: String, found: String },

    /// Feature type is outside the mutation ontology subtree
    #[error("Feature {accession} has type {term}, which is not a mutation term")]
    FeatureTypeNotMutation { accession: String, term: String },

    /// Interactor sequence is missing
    #[error("Interactor {accession} has no sequence")]
    MissingSequence { accession: String },

    /// Feature has no ranges
    #[error("Feature {accession} has no ranges")]
    MissingRange { accession: String },

    /// Range is missing its resulting-sequence fragment pair
    #[error("Range {accession} is missing {field}")]
    MissingResultingSequence { accession: String, field: String },

    /// Range position is unusable (zero, undetermined, out of bounds)
    #[error("Range {accession} has invalid position: {msg}")]
    InvalidRangePosition { accession: String, msg: String },

    /// Recomputed original fragment disagrees with the stored one
    #[error(
        "Range {accession}: stored original sequence {stored} does not match \
         sequence {computed} at positions {start}-{end}"
    )]
    SequenceMismatch {
        accession: String,
        stored: String,
        computed: String,
        start: i64,
        end: i64,
    },

    /// Resulting fragment contains lowercase letters
    #[error("Range {accession}: resulting sequence {fragment} contains lowercase letters")]
    LowercaseResultingSequence { accession: String, fragment: String },

    /// Fragment contains a symbol with no amino-acid interpretation
    #[error("Range {accession}: symbol '{symbol}' is not an amino acid")]
    InvalidResidue { accession: String, symbol: char },

    /// IO error (for mock collaborators and config loading)
    #[error("IO error: {msg}")]
    Io { msg: String },

    /// JSON parsing error
    #[error("JSON error: {msg}")]
    Json { msg: String },
}

impl CurateError {
    /// Get the error code for this error
    pub fn code(&self) -> ErrorCode {
        match self {
            CurateError::InvalidInteractorType { .. } => ErrorCode::InvalidInteractorType,
            CurateError::FeatureTypeNotMutation { .. } => ErrorCode::FeatureTypeNotMutation,
            CurateError::MissingSequence { .. } => ErrorCode::MissingSequence,
            CurateError::MissingRange { .. } => ErrorCode::MissingRange,
            CurateError::MissingResultingSequence { .. } => ErrorCode::MissingResultingSequence,
            CurateError::InvalidRangePosition { .. } => ErrorCode::InvalidRangePosition,
            CurateError::SequenceMismatch { .. } => ErrorCode::SequenceMismatch,
            CurateError::LowercaseResultingSequence { .. } => {
                ErrorCode::LowercaseResultingSequence
            }
            CurateError::InvalidResidue { .. } => ErrorCode::InvalidResidue,
            CurateError::Io { .. } => ErrorCode::IoError,
            CurateError::Json { .. } => ErrorCode::JsonError,
        }
    }

    /// Whether this is a validation error (as opposed to an IO/JSON error)
    ///
    /// Validation errors skip the current unit of work; ambient errors
    /// usually abort the run.
    pub fn is_validation(&self) -> bool {
        !matches!(self, CurateError::Io { .. } | CurateError::Json { .. })
    }
}

impl From<std::io::Error> for CurateError {
    fn from(err: std::io::Error) -> Self {
        CurateError::Io {
            msg: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for CurateError {
    fn from(err: serde_json::Error) -> Self {
        CurateError::Json {
            msg: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_as_str() {
        assert_eq!(ErrorCode::InvalidInteractorType.as_str(), "E1001");
        assert_eq!(ErrorCode::FeatureTypeNotMutation.as_str(), "E1002");
        assert_eq!(ErrorCode::MissingSequence.as_str(), "E2001");
        assert_eq!(ErrorCode::SequenceMismatch.as_str(), "E3001");
        assert_eq!(ErrorCode::LowercaseResultingSequence.as_str(), "E4001");
        assert_eq!(ErrorCode::IoError.as_str(), "E9001");
    }

    #[test]
    fn test_error_code_display() {
        assert_eq!(format!("{}", ErrorCode::InvalidRangePosition), "E2004");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(
            ErrorCode::SequenceMismatch.description(),
            "original sequence mismatch"
        );
        assert_eq!(
            ErrorCode::MissingResultingSequence.description(),
            "resulting sequence missing"
        );
    }

    #[test]
    fn test_curate_error_code() {
        let err = CurateError::MissingSequence {
            accession: "EBI-12345".to_string(),
        };
        assert_eq!(err.code(), ErrorCode::MissingSequence);

        let err = CurateError::SequenceMismatch {
            accession: "EBI-100".to_string(),
            stored: "ABC".to_string(),
            computed: "ABD".to_string(),
            start: 1,
            end: 3,
        };
        assert_eq!(err.code(), ErrorCode::SequenceMismatch);
    }

    #[test]
    fn test_error_message_embeds_accession() {
        let err = CurateError::FeatureTypeNotMutation {
            accession: "EBI-feature-1".to_string(),
            term: "MI:0117".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("EBI-feature-1"));
        assert!(msg.contains("MI:0117"));
    }

    #[test]
    fn test_is_validation() {
        let err = CurateError::MissingRange {
            accession: "EBI-1".to_string(),
        };
        assert!(err.is_validation());

        let err = CurateError::Io {
            msg: "disk".to_string(),
        };
        assert!(!err.is_validation());
    }

    #[test]
    fn test_from_io_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: CurateError = io_err.into();
        assert!(matches!(err, CurateError::Io { .. }));
        assert!(err.to_string().contains("not found"));
    }
}
