//! Block codec
//!
//! Encoding and decoding of single blocks at explicit byte offsets. The
//! destination is never grown here; callers size it up front with
//! `calculate_needed_space` (growth belongs to the row mutator).

use crate::error::{Result, RowError};

use super::length::LengthPrefix;

/// Encode one entry as a block into `destination` starting at `offset`
///
/// Returns the offset immediately following the written block, i.e. where
/// the next block may begin. All bounds checks happen before the first byte
/// is written, so a failed call leaves `destination` untouched.
pub fn encode_block(entry: &[u8], destination: &mut [u8], offset: usize) -> Result<usize> {
    let prefix = LengthPrefix::for_length(entry.len());

    let end = offset
        .checked_add(prefix.encoded_len())
        .and_then(|payload_start| payload_start.checked_add(entry.len()))
        .ok_or_else(|| {
            RowError::OutOfRange(format!("block end overflows at offset {}", offset))
        })?;

    if end > destination.len() {
        return Err(RowError::OutOfRange(format!(
            "block of {} bytes at offset {} exceeds destination of {} bytes",
            prefix.encoded_len() + entry.len(),
            offset,
            destination.len()
        )));
    }

    let payload_start = prefix.write(destination, offset);
    destination[payload_start..end].copy_from_slice(entry);

    Ok(end)
}

/// Decode the payload of the block starting at `offset` in `source`
///
/// Returns a read-only view of exactly the announced payload bytes. Fails
/// with an out-of-range error if the prefix, its length bytes, or the
/// payload would read past the end of `source`.
pub fn decode_block(source: &[u8], offset: usize) -> Result<&[u8]> {
    read_block(source, offset).map(|(payload, _)| payload)
}

/// Decode the block at `offset`, returning its payload and end offset
///
/// Shared by `decode_block` and row iteration, which also needs to know
/// where the block ends.
pub(crate) fn read_block(source: &[u8], offset: usize) -> Result<(&[u8], usize)> {
    let prefix = LengthPrefix::read(source, offset)?;
    let payload_start = offset + prefix.encoded_len();

    let payload_end = payload_start
        .checked_add(prefix.payload_length())
        .ok_or_else(|| {
            RowError::OutOfRange(format!("payload end overflows at offset {}", payload_start))
        })?;

    let payload = source.get(payload_start..payload_end).ok_or_else(|| {
        RowError::OutOfRange(format!(
            "payload of {} bytes at offset {} runs past buffer of {} bytes",
            prefix.payload_length(),
            payload_start,
            source.len()
        ))
    })?;

    Ok((payload, payload_end))
}
