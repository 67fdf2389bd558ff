//! Row iterator
//!
//! Walks a row from offset 0 to its end, decoding successive blocks.

use crate::block::read_block;
use crate::error::{Result, RowError};

/// Half-open byte interval `[start, end)` identifying one block within a row
///
/// Produced by iteration; consumed by `remove_ranges`. `start` addresses the
/// block's prefix byte, `end` the first byte after its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of bytes covered
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.end == self.start
    }
}

/// Iterator over the blocks of a row
///
/// Yields `(span, payload)` pairs in increasing offset order, stopping
/// exactly at the row's end. A block that would run past the end of the row
/// is reported once as a corruption error, after which the iterator yields
/// nothing further — a damaged row is never silently truncated.
pub struct RowIter<'a> {
    row: &'a [u8],
    offset: usize,
    done: bool,
}

impl<'a> RowIter<'a> {
    /// Start a fresh scan at offset 0
    pub fn new(row: &'a [u8]) -> Self {
        Self {
            row,
            offset: 0,
            done: false,
        }
    }
}

impl<'a> Iterator for RowIter<'a> {
    type Item = Result<(Span, &'a [u8])>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done || self.offset >= self.row.len() {
            return None;
        }

        let start = self.offset;
        match read_block(self.row, start) {
            Ok((payload, end)) => {
                self.offset = end;
                Some(Ok((Span::new(start, end), payload)))
            }
            Err(_) => {
                self.done = true;
                Some(Err(RowError::Corruption(format!(
                    "block at offset {} runs past row end ({} bytes)",
                    start,
                    self.row.len()
                ))))
            }
        }
    }
}

/// Visit every block of `row` in order
///
/// The visitor receives each block's payload, its byte span, and its index.
/// An empty row visits nothing. A row that does not tile exactly into whole
/// blocks fails with a corruption error; blocks ahead of the corrupt one
/// have already been reported to the visitor by then.
pub fn iterate_blocks<F>(row: &[u8], mut visitor: F) -> Result<()>
where
    F: FnMut(&[u8], Span, usize),
{
    for (index, item) in RowIter::new(row).enumerate() {
        let (span, payload) = item?;
        visitor(payload, span, index);
    }
    Ok(())
}
