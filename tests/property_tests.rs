//! Property-based tests for range shifting, short-label generation, and
//! duplicate matching.
//!
//! Uses proptest to exercise the algorithms over arbitrary protein
//! sequences and positions instead of hand-picked fixtures.

use intact_curate::diff::{diff_sequences, project_position, EditKind};
use intact_curate::model::{Feature, Interactor, Range, ResultingSequence};
use intact_curate::shortlabel::helper::generate_original_sequence;
use intact_curate::{
    crc64, group_candidates, DuplicateCandidate, RangeShifter, ShortlabelConfig,
    ShortlabelGenerator, UNMAPPABLE_POSITION,
};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

// =============================================================================
// Strategies
// =============================================================================

/// Generate a protein sequence over the 20 standard residues
fn protein_sequence() -> impl Strategy<Value = String> {
    "[ACDEFGHIKLMNPQRSTVWY]{1,60}".prop_map(|s| s)
}

/// Generate a sequence together with a 1-based range contained in it
fn sequence_with_range() -> impl Strategy<Value = (String, i64, i64)> {
    protein_sequence().prop_flat_map(|seq| {
        let len = seq.len() as i64;
        (Just(seq), 1..=len).prop_flat_map(|(seq, start)| {
            let len = seq.len() as i64;
            (Just(seq), Just(start), start..=len)
        })
    })
}

/// Generate a single standard residue
fn residue() -> impl Strategy<Value = char> {
    "[ACDEFGHIKLMNPQRSTVWY]".prop_map(|s| s.chars().next().unwrap())
}

// =============================================================================
// Range shifting properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// An unchanged sequence never moves or loses any range.
    #[test]
    fn prop_identity_shift_is_noop((seq, start, end) in sequence_with_range()) {
        let shifter = RangeShifter::new(&seq, &seq);
        let mut features = vec![Feature::new("MI:0118")
            .with_ac("EBI-1")
            .with_range(Range::exact(start, end))];
        let before = features.clone();

        let report = shifter.shift_features(&mut features);
        prop_assert!(report.is_noop());
        prop_assert_eq!(features, before);
    }

    /// The edit list covers both sequences exactly, matching runs carry
    /// identical content, and every projection stays in bounds.
    #[test]
    fn prop_diff_covers_both_sequences(old in protein_sequence(), new in protein_sequence()) {
        let edits = diff_sequences(&old, &new);

        let old_total: usize = edits.iter().map(|e| e.old_len).sum();
        let new_total: usize = edits.iter().map(|e| e.new_len).sum();
        prop_assert_eq!(old_total, old.len());
        prop_assert_eq!(new_total, new.len());

        for edit in &edits {
            if edit.kind == EditKind::Equal {
                let old_span = &old[edit.old_start..edit.old_start + edit.old_len];
                let new_span = &new[edit.new_start..edit.new_start + edit.new_len];
                prop_assert_eq!(old_span, new_span);
            }
        }

        for pos in 1..=(old.len() as i64) {
            let projected = project_position(&edits, pos);
            if projected != UNMAPPABLE_POSITION {
                prop_assert!(projected >= 1 && projected <= new.len() as i64);
            }
        }
    }

    /// A mapped boundary always lands on the same residue it left.
    #[test]
    fn prop_mapped_position_preserves_residue(
        (seq, start, _end) in sequence_with_range(),
        suffix in "[ACDEFGHIKLMNPQRSTVWY]{0,10}",
    ) {
        let new_seq = format!("{}{}", seq, suffix);
        let shifter = RangeShifter::new(&seq, &new_seq);

        let shifted = shifter.shift_position(start);
        if shifted != UNMAPPABLE_POSITION {
            let old_res = seq.as_bytes()[(start - 1) as usize];
            let new_res = new_seq.as_bytes()[(shifted - 1) as usize];
            prop_assert_eq!(old_res, new_res);
        }
    }
}

// =============================================================================
// Short-label properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// The extracted original fragment is exactly the 1-based inclusive
    /// slice of the interactor sequence.
    #[test]
    fn prop_original_fragment_matches_slice((seq, start, end) in sequence_with_range()) {
        let fragment = generate_original_sequence(&seq, start, end);
        let expected: String = seq
            .chars()
            .skip((start - 1) as usize)
            .take((end - start + 1) as usize)
            .collect();
        prop_assert_eq!(fragment, Some(expected));
    }

    /// Out-of-bounds requests yield no fragment instead of panicking.
    #[test]
    fn prop_out_of_bounds_fragment_is_none(seq in protein_sequence(), start in 1i64..100) {
        let end = seq.len() as i64 + 1;
        prop_assert_eq!(generate_original_sequence(&seq, start, end), None);
        prop_assert_eq!(generate_original_sequence(&seq, 0, 1), None);
    }

    /// Label generation is deterministic and ends with the replacement
    /// codes for a point substitution.
    #[test]
    fn prop_point_substitution_label_is_deterministic(
        (seq, start, _end) in sequence_with_range(),
        replacement in residue(),
    ) {
        let original: String = seq.chars().skip((start - 1) as usize).take(1).collect();
        let interactor = Interactor::protein("EBI-1", &seq);
        let feature = Feature::new("MI:0118").with_range(
            Range::exact(start, start)
                .with_resulting_sequence(ResultingSequence::new(&original, replacement.to_string())),
        );

        let generator = ShortlabelGenerator::new(ShortlabelConfig::with_allowed_types(["MI:0118"]));
        let first = generator.generate(&interactor, &feature).unwrap();
        let second = generator.generate(&interactor, &feature).unwrap();
        prop_assert_eq!(&first, &second);

        // Bare position number, no range dash.
        prop_assert!(first.contains(&start.to_string()));
        prop_assert!(!first.contains('-'));
    }
}

// =============================================================================
// Checksum and duplicate matching properties
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    /// CRC64 output is a fixed-width uppercase hex string and is stable.
    #[test]
    fn prop_crc64_format_and_determinism(seq in protein_sequence()) {
        let a = crc64(&seq);
        let b = crc64(&seq);
        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.len(), 16);
        prop_assert!(a.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_lowercase()));
    }

    /// Every candidate lands in at most one group, and groups are
    /// homogeneous in checksum and organism.
    #[test]
    fn prop_groups_partition_candidates(
        identities in proptest::collection::vec("[PQ][0-9]{5}", 2..12),
        taxids in proptest::collection::vec(prop_oneof![Just(9606i32), Just(10090)], 2..12),
    ) {
        let crc = crc64("MSKQLAERW");
        let candidates: Vec<_> = identities
            .iter()
            .zip(taxids.iter().cycle())
            .enumerate()
            .map(|(i, (identity, taxid))| {
                DuplicateCandidate::protein(format!("EBI-{}", i), &crc, *taxid)
                    .with_identity(identity.as_str())
            })
            .collect();

        let report = group_candidates(candidates);
        let mut seen = std::collections::HashSet::new();
        for group in &report.groups {
            prop_assert!(group.len() >= 2);
            prop_assert_eq!(&group.crc64, &crc);
            for member in &group.members {
                prop_assert!(seen.insert(member.clone()), "member in two groups");
            }
        }
    }
}
