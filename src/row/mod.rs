//! Row Module
//!
//! A row is a plain byte buffer holding zero or more blocks back to back,
//! with no padding and no trailing partial block. Offset 0 is always the
//! start of the first block (or the row is empty).
//!
//! ## Responsibilities
//! - Sequential iteration with exact span reporting
//! - Compaction by removing previously discovered spans
//! - Appending new entries with a single exact-size allocation
//!
//! Mutations are functional: both mutators return a fresh buffer and leave
//! the input row untouched, so independent callers can process rows
//! concurrently without shared state.

mod iter;
mod mutate;

pub use iter::{iterate_blocks, RowIter, Span};
pub use mutate::{append_entries, remove_ranges};
