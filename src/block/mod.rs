//! Block Format Module
//!
//! Self-describing, length-prefixed encoding of opaque byte entries.
//! Every entry becomes one block: a minimal-width length prefix followed
//! immediately by the raw payload. Blocks carry no magic, no version and no
//! checksum, trading robustness for a single byte of overhead on small
//! payloads.
//!
//! ## Wire Format
//! ```text
//! Short form (payload length < 128):
//! ┌──────────────────┬────────────────┐
//! │ Prefix (1 byte)  │ Payload        │
//! │ 0xxxxxxx = len   │ len bytes      │
//! └──────────────────┴────────────────┘
//!
//! Long form (payload length >= 128):
//! ┌──────────────────┬────────────────┬────────────────┐
//! │ Prefix (1 byte)  │ Length (k)     │ Payload        │
//! │ 0x80 | k         │ big-endian len │ len bytes      │
//! └──────────────────┴────────────────┴────────────────┘
//! ```
//! `k` is the minimal number of big-endian bytes needed to hold the payload
//! length, so a 256-byte payload encodes as `0x82 0x01 0x00` + payload.
//!
//! Number blocks reuse the same two forms with the value itself in the
//! length position and no payload: values below 128 are one literal byte,
//! larger values are `0x80 | k` followed by `k` big-endian value bytes.

mod codec;
mod length;
mod numbers;

pub use codec::{decode_block, encode_block};
pub(crate) use codec::read_block;
pub use length::{calculate_needed_space, number_of_bytes, LengthPrefix};
pub use numbers::{
    calculate_needed_space_for_numbers, decode_number_block, decode_numbers, encode_number_block,
    encode_numbers,
};

// =============================================================================
// Shared Constants (used by length codec, block codec, number codec)
// =============================================================================

/// High bit of the prefix byte; set means long form
pub(crate) const LONG_FORM_FLAG: u8 = 0x80;

/// Largest payload length (or value) a short-form prefix can hold literally
pub(crate) const MAX_SHORT_LENGTH: usize = 0x7F;
