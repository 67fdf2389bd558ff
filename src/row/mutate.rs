//! Row mutator
//!
//! Compaction and append. Both operations size their result exactly up
//! front and return a fresh buffer; the input row is never modified.

use crate::block::{calculate_needed_space, encode_block};
use crate::error::{Result, RowError};

use super::Span;

/// Remove the given spans from `row`, compacting the remainder
///
/// Returns a new buffer equal to `row` with every byte inside any span
/// removed, preserving the relative order of the remaining bytes. Spans
/// must lie within the row and be given in ascending, non-overlapping
/// order; violations are rejected before any copying. Spans are expected
/// to cover whole blocks as reported by iteration — alignment is not
/// checked, and a misaligned span yields a semantically corrupted row.
///
/// An empty span list returns a copy of `row`; a single span covering the
/// whole row returns an empty buffer.
pub fn remove_ranges(row: &[u8], ranges: &[Span]) -> Result<Vec<u8>> {
    let mut previous_end = 0;
    let mut removed = 0;
    for span in ranges {
        if span.start > span.end || span.end > row.len() {
            return Err(RowError::OutOfRange(format!(
                "span [{}, {}) out of bounds for row of {} bytes",
                span.start,
                span.end,
                row.len()
            )));
        }
        if span.start < previous_end {
            return Err(RowError::OutOfRange(format!(
                "span [{}, {}) overlaps or precedes an earlier span",
                span.start, span.end
            )));
        }
        previous_end = span.end;
        removed += span.len();
    }

    let mut compacted = Vec::with_capacity(row.len() - removed);
    let mut cursor = 0;
    for span in ranges {
        compacted.extend_from_slice(&row[cursor..span.start]);
        cursor = span.end;
    }
    compacted.extend_from_slice(&row[cursor..]);

    tracing::debug!(
        "Removed {} spans ({} bytes) from row of {} bytes",
        ranges.len(),
        removed,
        row.len()
    );

    Ok(compacted)
}

/// Append `entries` to `row` as newly encoded blocks
///
/// Returns a new buffer equal to `row` followed by one block per entry, in
/// input order. The result is allocated once at its exact final size
/// (computed via `calculate_needed_space`), so the operation never fails
/// for lack of destination space. Appending no entries returns a buffer
/// equal to `row`.
pub fn append_entries<E: AsRef<[u8]>>(entries: &[E], row: &[u8]) -> Result<Vec<u8>> {
    let grown_by = calculate_needed_space(entries);

    let mut new_row = vec![0u8; row.len() + grown_by];
    new_row[..row.len()].copy_from_slice(row);

    let mut offset = row.len();
    for entry in entries {
        offset = encode_block(entry.as_ref(), &mut new_row, offset)?;
    }
    debug_assert_eq!(offset, new_row.len());

    tracing::debug!(
        "Appended {} entries ({} bytes) to row of {} bytes",
        entries.len(),
        grown_by,
        row.len()
    );

    Ok(new_row)
}
