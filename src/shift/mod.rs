//! Feature range shifting across sequence updates.
//!
//! When the authoritative record for a protein changes its sequence, every
//! feature range anchored to the old sequence must be remapped onto the
//! new one. The shifter computes the diff once, then projects each of the
//! four boundary fields of every range independently.
//!
//! Boundaries that fall inside deleted spans receive the
//! [`UNMAPPABLE_POSITION`] sentinel and are reported as data, never as
//! errors: the calling updater chooses between "feature invalid" and
//! "feature out of date".

use crate::diff::{diff_sequences, project_position, SequenceEdit};
use crate::model::{Feature, Range, UNMAPPABLE_POSITION};
use crate::report::{BoundaryField, LengthChange, ShiftReport, UnmappableBoundary};
use log::warn;

/// Shifts feature ranges from an old sequence onto a new one.
pub struct RangeShifter {
    edits: Vec<SequenceEdit>,
    identical: bool,
}

impl RangeShifter {
    /// Diff the two sequences once; the shifter can then be applied to any
    /// number of features anchored to `old_sequence`.
    pub fn new(old_sequence: &str, new_sequence: &str) -> Self {
        let identical = old_sequence == new_sequence;
        Self {
            edits: diff_sequences(old_sequence, new_sequence),
            identical,
        }
    }

    /// Project a single 1-based position onto the new sequence.
    ///
    /// Returns [`UNMAPPABLE_POSITION`] when the position has no
    /// counterpart.
    pub fn shift_position(&self, pos: i64) -> i64 {
        project_position(&self.edits, pos)
    }

    /// Shift every range of every feature in place.
    ///
    /// The report lists the accessions of features with at least one
    /// shifted range, plus unmappable boundaries and length changes.
    /// Shifting against an unchanged sequence mutates nothing and returns
    /// an empty report.
    pub fn shift_features(&self, features: &mut [Feature]) -> ShiftReport {
        let mut report = ShiftReport::default();
        if self.identical {
            return report;
        }

        for feature in features.iter_mut() {
            let feature_ac = feature.ac_or_unknown().to_string();
            let mut feature_shifted = false;

            for range in feature.ranges.iter_mut() {
                if self.shift_range(&feature_ac, range, &mut report) {
                    feature_shifted = true;
                }
            }

            if feature_shifted {
                report.shifted_features.push(feature_ac);
            }
        }

        report
    }

    /// Shift one range; returns whether any boundary changed.
    fn shift_range(&self, feature_ac: &str, range: &mut Range, report: &mut ShiftReport) -> bool {
        let old_length = range.length();
        let range_ac = range.ac_or_unknown().to_string();
        let mut shifted = false;

        let boundaries = [
            (BoundaryField::FromStart, range.from_start),
            (BoundaryField::FromEnd, range.from_end),
            (BoundaryField::ToStart, range.to_start),
            (BoundaryField::ToEnd, range.to_end),
        ];

        let mut new_values = [0i64; 4];
        for (slot, (field, old_pos)) in new_values.iter_mut().zip(boundaries) {
            // Positions below 1 (unset boundaries on undetermined ranges)
            // have nothing to project.
            if old_pos < 1 {
                *slot = old_pos;
                continue;
            }
            let new_pos = self.shift_position(old_pos);
            if new_pos == UNMAPPABLE_POSITION {
                report.unmappable.push(UnmappableBoundary {
                    feature_ac: feature_ac.to_string(),
                    range_ac: range_ac.clone(),
                    boundary: field,
                    old_position: old_pos,
                });
            }
            if new_pos != old_pos {
                shifted = true;
            }
            *slot = new_pos;
        }

        range.from_start = new_values[0];
        range.from_end = new_values[1];
        range.to_start = new_values[2];
        range.to_end = new_values[3];

        let mappable = range.from_start != UNMAPPABLE_POSITION
            && range.to_end != UNMAPPABLE_POSITION;
        if shifted && mappable && range.length() != old_length {
            warn!(
                "range {} of feature {} changed length during shift: {} -> {}",
                range_ac,
                feature_ac,
                old_length,
                range.length()
            );
            report.length_changes.push(LengthChange {
                feature_ac: feature_ac.to_string(),
                range_ac,
                old_length,
                new_length: range.length(),
            });
        }

        shifted
    }
}
