//! Sequence diff for range remapping.
//!
//! Compares an old and a new polymer sequence and produces an ordered list
//! of edit operations covering the full span of both. The edit list is the
//! substrate for projecting 1-based feature positions from the old sequence
//! onto the new one.
//!
//! # Coordinate System
//!
//! | Field | Basis | Notes |
//! |-------|-------|-------|
//! | `SequenceEdit.old_start`, `new_start` | 0-based | Array-style spans |
//! | [`project_position`] input/output | 1-based | Persisted range positions |
//!
//! Unlike an HGVS-style diff, no 3' shifting is applied: a position in the
//! old sequence must project to the textually corresponding position in the
//! new one, so edits are kept exactly where the scan finds them.

use crate::model::UNMAPPABLE_POSITION;
use serde::{Deserialize, Serialize};

/// Edit operation kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EditKind {
    /// Identical run in both sequences.
    Equal,
    /// Residues substituted (both spans non-empty).
    Replace,
    /// Residues present only in the new sequence.
    Insert,
    /// Residues present only in the old sequence.
    Delete,
}

/// One edit operation over aligned spans of the two sequences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequenceEdit {
    pub kind: EditKind,
    /// Start of the span in the old sequence (0-based).
    pub old_start: usize,
    /// Length of the span in the old sequence.
    pub old_len: usize,
    /// Start of the span in the new sequence (0-based).
    pub new_start: usize,
    /// Length of the span in the new sequence.
    pub new_len: usize,
}

impl SequenceEdit {
    /// Whether the given 0-based old-sequence index falls in this edit's
    /// old span.
    fn covers_old(&self, idx: usize) -> bool {
        self.old_len > 0 && idx >= self.old_start && idx < self.old_start + self.old_len
    }
}

/// Diff two sequences into an ordered, covering edit list.
///
/// Identical sequences yield a single `Equal` edit (or nothing for two
/// empty strings). Every old-sequence index and every new-sequence index
/// is covered by exactly one edit.
pub fn diff_sequences(old: &str, new: &str) -> Vec<SequenceEdit> {
    let old_bytes = old.as_bytes();
    let new_bytes = new.as_bytes();

    let mut edits = Vec::new();
    let mut old_pos = 0usize;
    let mut new_pos = 0usize;

    while old_pos < old_bytes.len() || new_pos < new_bytes.len() {
        // Consume the matching run.
        let run_start_old = old_pos;
        let run_start_new = new_pos;
        while old_pos < old_bytes.len()
            && new_pos < new_bytes.len()
            && old_bytes[old_pos] == new_bytes[new_pos]
        {
            old_pos += 1;
            new_pos += 1;
        }
        if old_pos > run_start_old {
            edits.push(SequenceEdit {
                kind: EditKind::Equal,
                old_start: run_start_old,
                old_len: old_pos - run_start_old,
                new_start: run_start_new,
                new_len: new_pos - run_start_new,
            });
        }

        if old_pos >= old_bytes.len() && new_pos >= new_bytes.len() {
            break;
        }

        // Mismatch: find where the sequences line up again.
        let (old_end, new_end) = resync(old_bytes, new_bytes, old_pos, new_pos);
        let old_len = old_end - old_pos;
        let new_len = new_end - new_pos;
        let kind = match (old_len, new_len) {
            (0, _) => EditKind::Insert,
            (_, 0) => EditKind::Delete,
            _ => EditKind::Replace,
        };
        edits.push(SequenceEdit {
            kind,
            old_start: old_pos,
            old_len,
            new_start: new_pos,
            new_len,
        });
        old_pos = old_end;
        new_pos = new_end;
    }

    edits
}

/// Find the smallest edit explaining a mismatch at (`old_start`, `new_start`).
///
/// Tries, in order: a substitution span ending where the sequences realign
/// at the same offset, a deletion from the old sequence, an insertion into
/// the new one. Falls back to consuming the remainder of both.
fn resync(old: &[u8], new: &[u8], old_start: usize, new_start: usize) -> (usize, usize) {
    let old_remaining = old.len() - old_start;
    let new_remaining = new.len() - new_start;

    if old_remaining > 0 && new_remaining > 0 {
        // Substitution: realign at the same offset in both sequences.
        let check_len = old_remaining.min(new_remaining);
        for i in 1..check_len {
            if old[old_start + i] == new[new_start + i] {
                return (old_start + i, new_start + i);
            }
        }

        // Deletion: the new sequence continues after skipping old residues.
        for del_len in 1..=old_remaining {
            let after = old_start + del_len;
            if after < old.len() && tails_align(&old[after..], &new[new_start..]) {
                return (after, new_start);
            }
        }

        // Insertion: the old sequence continues after skipping new residues.
        for ins_len in 1..=new_remaining {
            let after = new_start + ins_len;
            if after < new.len() && tails_align(&old[old_start..], &new[after..]) {
                return (old_start, after);
            }
        }
    }

    (old.len(), new.len())
}

/// Whether two tails share a common prefix (or one tail is exhausted).
fn tails_align(old_tail: &[u8], new_tail: &[u8]) -> bool {
    let check_len = old_tail.len().min(new_tail.len());
    check_len > 0 && old_tail[..check_len] == new_tail[..check_len]
}

/// Project a 1-based old-sequence position onto the new sequence.
///
/// Returns the corresponding 1-based position, or [`UNMAPPABLE_POSITION`]
/// when the position falls inside a deleted span, past the end of the old
/// sequence, or is itself the sentinel or zero.
pub fn project_position(edits: &[SequenceEdit], pos: i64) -> i64 {
    if pos < 1 {
        return UNMAPPABLE_POSITION;
    }
    let idx = (pos - 1) as usize;

    for edit in edits {
        if !edit.covers_old(idx) {
            continue;
        }
        let offset = idx - edit.old_start;
        return match edit.kind {
            EditKind::Equal => (edit.new_start + offset) as i64 + 1,
            // Substituted spans keep positional correspondence as far as
            // the new span reaches; the excess was effectively deleted.
            EditKind::Replace if offset < edit.new_len => (edit.new_start + offset) as i64 + 1,
            _ => UNMAPPABLE_POSITION,
        };
    }

    UNMAPPABLE_POSITION
}
