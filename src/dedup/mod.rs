//! Duplicate protein matching.
//!
//! Partitions candidate proteins/transcripts into equivalence classes
//! representing "same real-world entity, must be merged". Candidates are
//! first bucketed by {CRC64 checksum, organism}; within a bucket, two
//! candidates belong together when their identity cross-references agree
//! (both absent, or exactly equal) and, for transcripts, their parent
//! cross-reference sets are multiset-equal by primary ID.
//!
//! Candidates without a persisted accession cannot be merged; they are
//! excluded and reported, never raised as errors.

use crate::checksum;
use crate::model::{Interactor, Xref};
use crate::report::{DedupReport, DuplicateGroup, SkippedCandidate};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A protein or transcript record considered for merging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicateCandidate {
    /// Persisted accession; candidates without one are skipped
    pub ac: Option<String>,
    /// Primary ID of the identity cross-reference (e.g. UniProt accession)
    pub identity: Option<String>,
    /// Primary IDs of isoform-/chain-parent cross-references.
    /// Empty for master proteins.
    pub parents: Vec<String>,
    /// Whether this record is a transcript (isoform or chain)
    pub transcript: bool,
    /// CRC64 checksum of the sequence
    pub crc64: String,
    /// NCBI taxid of the source organism
    pub taxid: i32,
}

impl DuplicateCandidate {
    /// Create a master-protein candidate.
    pub fn protein(ac: impl Into<String>, crc64: impl Into<String>, taxid: i32) -> Self {
        Self {
            ac: Some(ac.into()),
            identity: None,
            parents: Vec::new(),
            transcript: false,
            crc64: crc64.into(),
            taxid,
        }
    }

    /// Create a transcript candidate.
    pub fn transcript(ac: impl Into<String>, crc64: impl Into<String>, taxid: i32) -> Self {
        Self {
            transcript: true,
            ..Self::protein(ac, crc64, taxid)
        }
    }

    /// Build a master-protein candidate from a loaded interactor.
    ///
    /// Uses the stored checksum when present, recomputing it from the
    /// sequence otherwise. Interactors with neither, or without an
    /// organism, cannot take part in matching.
    pub fn from_interactor(interactor: &Interactor) -> Option<Self> {
        let crc64 = interactor
            .crc64
            .clone()
            .or_else(|| interactor.sequence.as_deref().map(checksum::crc64))?;
        let taxid = interactor.taxid?;
        Some(Self::protein(interactor.ac.clone(), crc64, taxid))
    }

    /// Populate identity and parent references from raw cross-references.
    ///
    /// The `identity` qualifier sets the identity reference (first one
    /// wins); `isoform-parent` and `chain-parent` append to the parent
    /// set. Other qualifiers are ignored.
    pub fn with_xrefs(mut self, xrefs: &[Xref]) -> Self {
        for xref in xrefs {
            match xref.qualifier.as_deref() {
                Some("identity") if self.identity.is_none() => {
                    self.identity = Some(xref.primary_id.clone());
                }
                Some("isoform-parent") | Some("chain-parent") => {
                    self.parents.push(xref.primary_id.clone());
                }
                _ => {}
            }
        }
        self
    }

    /// Builder-style identity xref setter.
    pub fn with_identity(mut self, primary_id: impl Into<String>) -> Self {
        self.identity = Some(primary_id.into());
        self
    }

    /// Builder-style parent xref append.
    pub fn with_parent(mut self, primary_id: impl Into<String>) -> Self {
        self.parents.push(primary_id.into());
        self
    }

    /// Whether this candidate and another are tentatively the same entity.
    fn matches(&self, other: &Self) -> bool {
        if self.identity != other.identity {
            return false;
        }
        if self.transcript || other.transcript {
            return parents_equal(&self.parents, &other.parents);
        }
        true
    }
}

/// Multiset equality of parent primary IDs: same cardinality, and every
/// ID occurs the same number of times in both (order irrelevant, not
/// deduplicated).
fn parents_equal(a: &[String], b: &[String]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut counts: HashMap<&str, i64> = HashMap::new();
    for id in a {
        *counts.entry(id.as_str()).or_default() += 1;
    }
    for id in b {
        let entry = counts.entry(id.as_str()).or_default();
        *entry -= 1;
        if *entry < 0 {
            return false;
        }
    }
    true
}

/// Partition candidates into duplicate groups.
///
/// Pivots are chosen in input order; the result is a partition, so the
/// caller must rely only on final group membership, never on which
/// member happened to pivot.
pub fn group_candidates(candidates: Vec<DuplicateCandidate>) -> DedupReport {
    let mut report = DedupReport::default();

    // Candidates with no persisted accession cannot be merged.
    let mut eligible = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        if candidate.ac.is_some() {
            eligible.push(candidate);
        } else {
            report.skipped.push(SkippedCandidate {
                identity: candidate.identity.clone(),
                reason: "candidate has no persisted accession".to_string(),
            });
        }
    }

    // Bucket by (checksum, organism), preserving insertion order.
    let mut buckets: Vec<((String, i32), Vec<DuplicateCandidate>)> = Vec::new();
    for candidate in eligible {
        let key = (candidate.crc64.clone(), candidate.taxid);
        match buckets.iter_mut().find(|(k, _)| *k == key) {
            Some((_, bucket)) => bucket.push(candidate),
            None => buckets.push((key, vec![candidate])),
        }
    }

    for ((crc64, taxid), mut working) in buckets {
        while !working.is_empty() {
            let pivot = working.remove(0);
            let mut group = vec![pivot];
            let mut rest = Vec::with_capacity(working.len());
            for candidate in working {
                if group[0].matches(&candidate) {
                    group.push(candidate);
                } else {
                    rest.push(candidate);
                }
            }
            working = rest;

            if group.len() >= 2 {
                report.groups.push(DuplicateGroup {
                    crc64: crc64.clone(),
                    taxid,
                    members: group
                        .into_iter()
                        .filter_map(|c| c.ac)
                        .collect(),
                });
            }
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;

    const CRC: &str = "ABCDEF0123456789";

    #[test]
    fn test_proteins_with_same_identity_grouped() {
        let report = group_candidates(vec![
            DuplicateCandidate::protein("EBI-a", CRC, 9606).with_identity("P12345"),
            DuplicateCandidate::protein("EBI-b", CRC, 9606).with_identity("P12345"),
        ]);
        assert_eq!(report.groups.len(), 1);
        assert!(report.groups[0].contains("EBI-a"));
        assert!(report.groups[0].contains("EBI-b"));
    }

    #[test]
    fn test_different_identities_not_grouped() {
        let report = group_candidates(vec![
            DuplicateCandidate::protein("EBI-a", CRC, 9606).with_identity("P12345"),
            DuplicateCandidate::protein("EBI-b", CRC, 9606).with_identity("P54321"),
        ]);
        assert!(report.groups.is_empty());
    }

    #[test]
    fn test_identity_match_is_case_sensitive() {
        let report = group_candidates(vec![
            DuplicateCandidate::protein("EBI-a", CRC, 9606).with_identity("P12345"),
            DuplicateCandidate::protein("EBI-b", CRC, 9606).with_identity("p12345"),
        ]);
        assert!(report.groups.is_empty());
    }

    #[test]
    fn test_both_identities_absent_grouped() {
        let report = group_candidates(vec![
            DuplicateCandidate::protein("EBI-a", CRC, 9606),
            DuplicateCandidate::protein("EBI-b", CRC, 9606),
        ]);
        assert_eq!(report.groups.len(), 1);
    }

    #[test]
    fn test_one_identity_absent_not_grouped() {
        let report = group_candidates(vec![
            DuplicateCandidate::protein("EBI-a", CRC, 9606).with_identity("P12345"),
            DuplicateCandidate::protein("EBI-b", CRC, 9606),
        ]);
        assert!(report.groups.is_empty());
    }

    #[test]
    fn test_different_organisms_never_grouped() {
        let report = group_candidates(vec![
            DuplicateCandidate::protein("EBI-a", CRC, 9606).with_identity("P12345"),
            DuplicateCandidate::protein("EBI-b", CRC, 10090).with_identity("P12345"),
        ]);
        assert!(report.groups.is_empty());
    }

    #[test]
    fn test_different_checksums_never_grouped() {
        let report = group_candidates(vec![
            DuplicateCandidate::protein("EBI-a", CRC, 9606).with_identity("P12345"),
            DuplicateCandidate::protein("EBI-b", "0000000000000000", 9606)
                .with_identity("P12345"),
        ]);
        assert!(report.groups.is_empty());
    }

    #[test]
    fn test_transcript_parent_sets_must_match() {
        // A and B share identity and parent X; C shares identity but has
        // parent Y. Expected partition: {A, B}, C ungrouped.
        let report = group_candidates(vec![
            DuplicateCandidate::transcript("EBI-a", CRC, 9606)
                .with_identity("P1")
                .with_parent("X"),
            DuplicateCandidate::transcript("EBI-b", CRC, 9606)
                .with_identity("P1")
                .with_parent("X"),
            DuplicateCandidate::transcript("EBI-c", CRC, 9606)
                .with_identity("P1")
                .with_parent("Y"),
        ]);
        assert_eq!(report.groups.len(), 1);
        let group = report.group_of("EBI-a").unwrap();
        assert_eq!(group.members, vec!["EBI-a".to_string(), "EBI-b".to_string()]);
        assert!(report.group_of("EBI-c").is_none());
    }

    #[test]
    fn test_parent_comparison_ignores_order() {
        let report = group_candidates(vec![
            DuplicateCandidate::transcript("EBI-a", CRC, 9606)
                .with_identity("P1")
                .with_parent("X")
                .with_parent("Y"),
            DuplicateCandidate::transcript("EBI-b", CRC, 9606)
                .with_identity("P1")
                .with_parent("Y")
                .with_parent("X"),
        ]);
        assert_eq!(report.groups.len(), 1);
    }

    #[test]
    fn test_parent_comparison_counts_duplicates() {
        // {X, X} vs {X}: cardinality differs, no match.
        let report = group_candidates(vec![
            DuplicateCandidate::transcript("EBI-a", CRC, 9606)
                .with_identity("P1")
                .with_parent("X")
                .with_parent("X"),
            DuplicateCandidate::transcript("EBI-b", CRC, 9606)
                .with_identity("P1")
                .with_parent("X"),
        ]);
        assert!(report.groups.is_empty());
    }

    #[test]
    fn test_candidate_without_accession_skipped() {
        let mut nameless = DuplicateCandidate::protein("EBI-x", CRC, 9606);
        nameless.ac = None;
        let report = group_candidates(vec![
            nameless,
            DuplicateCandidate::protein("EBI-a", CRC, 9606),
            DuplicateCandidate::protein("EBI-b", CRC, 9606),
        ]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.groups.len(), 1);
        assert_eq!(report.groups[0].len(), 2);
    }

    #[test]
    fn test_multiple_groups_in_one_bucket() {
        let report = group_candidates(vec![
            DuplicateCandidate::protein("EBI-a", CRC, 9606).with_identity("P1"),
            DuplicateCandidate::protein("EBI-b", CRC, 9606).with_identity("P2"),
            DuplicateCandidate::protein("EBI-c", CRC, 9606).with_identity("P1"),
            DuplicateCandidate::protein("EBI-d", CRC, 9606).with_identity("P2"),
        ]);
        assert_eq!(report.groups.len(), 2);
        assert!(report.group_of("EBI-a").unwrap().contains("EBI-c"));
        assert!(report.group_of("EBI-b").unwrap().contains("EBI-d"));
    }

    #[test]
    fn test_singletons_produce_no_groups() {
        let report = group_candidates(vec![DuplicateCandidate::protein("EBI-a", CRC, 9606)]);
        assert!(report.groups.is_empty());
        assert!(report.skipped.is_empty());
    }

    #[test]
    fn test_from_interactor_recomputes_checksum() {
        let interactor = Interactor::protein("EBI-1000", "MKVLAT").with_taxid(9606);
        let candidate = DuplicateCandidate::from_interactor(&interactor).unwrap();
        assert_eq!(candidate.ac.as_deref(), Some("EBI-1000"));
        assert_eq!(candidate.crc64, checksum::crc64("MKVLAT"));
        assert_eq!(candidate.taxid, 9606);
    }

    #[test]
    fn test_from_interactor_prefers_stored_checksum() {
        let mut interactor = Interactor::protein("EBI-1000", "MKVLAT").with_taxid(9606);
        interactor.crc64 = Some("ABCDEF0123456789".to_string());
        let candidate = DuplicateCandidate::from_interactor(&interactor).unwrap();
        assert_eq!(candidate.crc64, "ABCDEF0123456789");
    }

    #[test]
    fn test_from_interactor_requires_organism() {
        let interactor = Interactor::protein("EBI-1000", "MKVLAT");
        assert!(DuplicateCandidate::from_interactor(&interactor).is_none());
    }

    #[test]
    fn test_with_xrefs_classifies_by_qualifier() {
        let xrefs = vec![
            Xref::new("P12345").with_qualifier("identity"),
            Xref::new("P12345-1").with_qualifier("isoform-parent"),
            Xref::new("PRO_0000001").with_qualifier("chain-parent"),
            Xref::new("GO:0005515").with_qualifier("involved-in"),
            Xref::new("IPR000001"),
        ];
        let candidate = DuplicateCandidate::transcript("EBI-a", CRC, 9606).with_xrefs(&xrefs);
        assert_eq!(candidate.identity.as_deref(), Some("P12345"));
        assert_eq!(
            candidate.parents,
            vec!["P12345-1".to_string(), "PRO_0000001".to_string()]
        );
    }

    #[test]
    fn test_parents_equal() {
        let x = "X".to_string();
        let y = "Y".to_string();
        assert!(parents_equal(&[], &[]));
        assert!(parents_equal(
            &[x.clone(), y.clone()],
            &[y.clone(), x.clone()]
        ));
        assert!(!parents_equal(&[x.clone()], &[]));
        assert!(!parents_equal(&[x.clone(), x.clone()], &[x.clone(), y]));
    }
}
