//! Mutation short-label generation.
//!
//! Builds the compact mutation descriptor stored on sequence-mutation
//! features (`ala123thr`, `ala_thr_gly12-14ala_del_gly`). The label is a
//! pure function of the feature's ranges and the interactor's sequence:
//! identical inputs always produce identical labels, and range iteration
//! follows the natural stored order.
//!
//! Validation is ordered and fail-fast per feature: the first failing
//! check aborts that feature with a typed error carrying the implicated
//! accession, and no partial label is kept. A batch of features is never
//! aborted by one bad feature; see [`ShortlabelGenerator::generate_all`].

pub mod helper;

use crate::config::CurateConfig;
use crate::error::CurateError;
use crate::model::{Feature, Interactor, Range, RangeStatus};
use crate::ontology::OntologyLookup;
use crate::report::LabelOutcome;
use crate::sequence::contains_lowercase;
use helper::{generate_original_sequence, position_descriptor, resulting_codes, three_letter_codes};
use log::debug;
use std::collections::HashSet;

/// The feature types eligible for short-label generation.
///
/// Computed once at startup from the ontology collaborator (the mutation
/// root term and its descendants to a bounded depth) and passed into the
/// generator explicitly. No process-wide registry.
#[derive(Debug, Clone)]
pub struct ShortlabelConfig {
    allowed_feature_types: HashSet<String>,
}

impl ShortlabelConfig {
    /// Resolve the allowed feature types through the ontology lookup.
    ///
    /// The mutation root itself is always allowed.
    pub fn from_ontology(
        lookup: &impl OntologyLookup,
        config: &CurateConfig,
    ) -> Result<Self, CurateError> {
        let mut allowed =
            lookup.descendant_ids(&config.mutation_root_term, config.ontology_depth)?;
        allowed.insert(config.mutation_root_term.clone());
        Ok(Self {
            allowed_feature_types: allowed,
        })
    }

    /// Build a config from an explicit term set (mainly for tests).
    pub fn with_allowed_types<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            allowed_feature_types: types.into_iter().map(Into::into).collect(),
        }
    }

    /// Whether a feature type term is eligible.
    pub fn allows(&self, term: &str) -> bool {
        self.allowed_feature_types.contains(term)
    }

    /// Number of eligible terms.
    pub fn len(&self) -> usize {
        self.allowed_feature_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.allowed_feature_types.is_empty()
    }
}

/// Generates mutation short labels.
pub struct ShortlabelGenerator {
    config: ShortlabelConfig,
}

impl ShortlabelGenerator {
    pub fn new(config: ShortlabelConfig) -> Self {
        Self { config }
    }

    /// Generate the short label for one feature.
    ///
    /// Validation order per range: start position non-zero, start
    /// determined, resulting-sequence fragments present, recomputed
    /// original fragment equal to the stored one, resulting fragment free
    /// of lowercase letters. The first failure wins.
    pub fn generate(
        &self,
        interactor: &Interactor,
        feature: &Feature,
    ) -> Result<String, CurateError> {
        let sequence =
            interactor
                .sequence
                .as_deref()
                .ok_or_else(|| CurateError::MissingSequence {
                    accession: interactor.ac.clone(),
                })?;

        if !interactor.kind.is_polypeptide() {
            return Err(CurateError::InvalidInteractorType {
                accession: interactor.ac.clone(),
                found: interactor.kind.to_string(),
            });
        }

        if !self.config.allows(&feature.feature_type) {
            return Err(CurateError::FeatureTypeNotMutation {
                accession: feature.ac_or_unknown().to_string(),
                term: feature.feature_type.clone(),
            });
        }

        if feature.ranges.is_empty() {
            return Err(CurateError::MissingRange {
                accession: feature.ac_or_unknown().to_string(),
            });
        }

        let mut parts = Vec::with_capacity(feature.ranges.len());
        for range in &feature.ranges {
            parts.push(self.range_label(sequence, range)?);
        }

        let label = parts.join(",");
        debug!(
            "generated short label {} for feature {}",
            label,
            feature.ac_or_unknown()
        );
        Ok(label)
    }

    /// Generate and store the label on the feature.
    pub fn update_feature(
        &self,
        interactor: &Interactor,
        feature: &mut Feature,
    ) -> Result<String, CurateError> {
        let label = self.generate(interactor, feature)?;
        feature.short_label = Some(label.clone());
        Ok(label)
    }

    /// Generate labels for a whole feature set.
    ///
    /// Each feature is processed fail-fast on its own; a failure skips
    /// that feature (recorded as a `Failed` outcome with the accession and
    /// error code) and never aborts the batch. Successful labels are
    /// written back onto the features.
    pub fn generate_all(
        &self,
        interactor: &Interactor,
        features: &mut [Feature],
    ) -> Vec<LabelOutcome> {
        features
            .iter_mut()
            .map(|feature| {
                let result = self.update_feature(interactor, feature);
                LabelOutcome::from_result(feature, result)
            })
            .collect()
    }

    /// Build the label section for one range.
    fn range_label(&self, sequence: &str, range: &Range) -> Result<String, CurateError> {
        let accession = range.ac_or_unknown().to_string();
        let start = range.start();
        let end = range.end();

        // A zero start is invalid regardless of anything else.
        if start == 0 {
            return Err(CurateError::InvalidRangePosition {
                accession,
                msg: "start position is 0".to_string(),
            });
        }
        if range.from_status == RangeStatus::Undetermined {
            return Err(CurateError::InvalidRangePosition {
                accession,
                msg: "start position is undetermined".to_string(),
            });
        }

        let resulting =
            range
                .resulting_sequence
                .as_ref()
                .ok_or_else(|| CurateError::MissingResultingSequence {
                    accession: accession.clone(),
                    field: "resulting sequence".to_string(),
                })?;
        let stored_original =
            resulting
                .original
                .as_deref()
                .ok_or_else(|| CurateError::MissingResultingSequence {
                    accession: accession.clone(),
                    field: "original sequence fragment".to_string(),
                })?;
        let new_fragment =
            resulting
                .new
                .as_deref()
                .ok_or_else(|| CurateError::MissingResultingSequence {
                    accession: accession.clone(),
                    field: "new sequence fragment".to_string(),
                })?;

        let computed = generate_original_sequence(sequence, start, end).ok_or_else(|| {
            CurateError::InvalidRangePosition {
                accession: accession.clone(),
                msg: format!(
                    "positions {}-{} outside sequence of length {}",
                    start,
                    end,
                    sequence.len()
                ),
            }
        })?;

        if computed != stored_original {
            return Err(CurateError::SequenceMismatch {
                accession,
                stored: stored_original.to_string(),
                computed,
                start,
                end,
            });
        }

        if contains_lowercase(new_fragment) {
            return Err(CurateError::LowercaseResultingSequence {
                accession,
                fragment: new_fragment.to_string(),
            });
        }

        let original_part = three_letter_codes(&computed)
            .map_err(|symbol| CurateError::InvalidResidue {
                accession: accession.clone(),
                symbol,
            })?;
        let new_part = resulting_codes(&computed, new_fragment).map_err(|symbol| {
            CurateError::InvalidResidue {
                accession: accession.clone(),
                symbol,
            }
        })?;

        Ok(format!(
            "{}{}{}",
            original_part,
            position_descriptor(start, end),
            new_part
        ))
    }
}
