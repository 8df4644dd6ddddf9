//! Label-building helpers.
//!
//! Pure string transformations shared by the generator: 1-based sequence
//! slicing, three-letter-code rendering, and the deletion-pattern special
//! case.

use crate::model::AminoAcid;

/// Slice a whole sequence at 1-based inclusive positions.
///
/// `generate_original_sequence(s, start, end)` equals `s[start-1..end]`
/// whenever the positions are in bounds; otherwise `None`.
pub fn generate_original_sequence(sequence: &str, start: i64, end: i64) -> Option<String> {
    if start < 1 || end < start {
        return None;
    }
    let start_idx = (start - 1) as usize;
    let end_idx = end as usize;
    if end_idx > sequence.len() {
        return None;
    }
    Some(sequence[start_idx..end_idx].to_string())
}

/// Render a fragment as lowercase three-letter codes joined by `_`.
///
/// Returns the first symbol with no amino-acid interpretation as the
/// error value.
pub fn three_letter_codes(fragment: &str) -> Result<String, char> {
    let codes: Result<Vec<&'static str>, char> =
        fragment.chars().map(code_for).collect();
    Ok(codes?.join("_"))
}

/// Position descriptor: a bare number for a single position, `start-end`
/// otherwise. A single-position mutation must never render as `123-123`.
pub fn position_descriptor(start: i64, end: i64) -> String {
    if start == end {
        format!("{}", start)
    } else {
        format!("{}-{}", start, end)
    }
}

/// Whether a shortened resulting fragment matches the deletion pattern:
/// exactly the two flanking residues of the original survive.
pub fn is_deletion_pattern(original: &str, resulting: &str) -> bool {
    if resulting.len() != 2 || resulting.len() >= original.len() {
        return false;
    }
    let orig = original.as_bytes();
    let res = resulting.as_bytes();
    res[0] == orig[0] && res[1] == orig[orig.len() - 1]
}

/// Deletion rendering: first residue code, `del` per internal deleted
/// residue, last residue code, joined by `_` (e.g. `ala_del_gly`).
pub fn deletion_codes(original: &str) -> Result<String, char> {
    let chars: Vec<char> = original.chars().collect();
    let first = code_for(chars[0])?;
    let last = code_for(chars[chars.len() - 1])?;

    let mut parts = Vec::with_capacity(chars.len());
    parts.push(first);
    for _ in 1..chars.len() - 1 {
        parts.push("del");
    }
    parts.push(last);
    Ok(parts.join("_"))
}

/// Render the resulting fragment: deletion format when it is a flanking
/// collapse of the original, default three-letter rendering otherwise.
pub fn resulting_codes(original: &str, resulting: &str) -> Result<String, char> {
    if is_deletion_pattern(original, resulting) {
        deletion_codes(original)
    } else {
        three_letter_codes(resulting)
    }
}

fn code_for(c: char) -> Result<&'static str, char> {
    AminoAcid::from_one_letter(c)
        .map(|aa| aa.to_label_code())
        .ok_or(c)
}
