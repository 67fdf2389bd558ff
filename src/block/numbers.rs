//! Number codec
//!
//! Unsigned integers packed with the same two prefix forms as blocks, with
//! the value taking the place of the length and no payload. Index rows use
//! this for compact numeric metadata (counts, identifiers, timestamps).

use crate::error::{Result, RowError};

use super::length::number_of_bytes;
use super::{LONG_FORM_FLAG, MAX_SHORT_LENGTH};

/// Total on-wire size of `values` packed as consecutive number blocks
pub fn calculate_needed_space_for_numbers(values: &[u64]) -> usize {
    values.iter().map(|&value| encoded_number_len(value)).sum()
}

fn encoded_number_len(value: u64) -> usize {
    if value <= MAX_SHORT_LENGTH as u64 {
        1
    } else {
        1 + number_of_bytes(value)
    }
}

/// Encode one number block at `offset`, returning the next free offset
///
/// Same all-or-nothing bounds policy as `encode_block`: nothing is written
/// unless the whole number block fits.
pub fn encode_number_block(value: u64, destination: &mut [u8], offset: usize) -> Result<usize> {
    let end = offset.checked_add(encoded_number_len(value)).ok_or_else(|| {
        RowError::OutOfRange(format!("number block end overflows at offset {}", offset))
    })?;

    if end > destination.len() {
        return Err(RowError::OutOfRange(format!(
            "number block of {} bytes at offset {} exceeds destination of {} bytes",
            encoded_number_len(value),
            offset,
            destination.len()
        )));
    }

    if value <= MAX_SHORT_LENGTH as u64 {
        destination[offset] = value as u8;
    } else {
        let width = number_of_bytes(value);
        destination[offset] = LONG_FORM_FLAG | width as u8;
        let be = value.to_be_bytes();
        destination[offset + 1..end].copy_from_slice(&be[8 - width..]);
    }

    Ok(end)
}

/// Decode one number block at `offset`, returning the value and next offset
pub fn decode_number_block(source: &[u8], offset: usize) -> Result<(u64, usize)> {
    let prefix = *source.get(offset).ok_or_else(|| {
        RowError::OutOfRange(format!(
            "number block offset {} beyond buffer of {} bytes",
            offset,
            source.len()
        ))
    })?;

    if prefix & LONG_FORM_FLAG == 0 {
        return Ok((prefix as u64, offset + 1));
    }

    let width = (prefix & !LONG_FORM_FLAG) as usize;
    let value_bytes = source.get(offset + 1..offset + 1 + width).ok_or_else(|| {
        RowError::OutOfRange(format!(
            "number field of {} bytes at offset {} runs past buffer of {} bytes",
            width,
            offset + 1,
            source.len()
        ))
    })?;

    let mut value: u64 = 0;
    for &byte in value_bytes {
        value = value
            .checked_mul(256)
            .and_then(|v| v.checked_add(byte as u64))
            .ok_or_else(|| {
                RowError::OutOfRange(format!("number field of {} bytes overflows u64", width))
            })?;
    }

    Ok((value, offset + 1 + width))
}

/// Encode `values` as consecutive number blocks starting at `offset`
///
/// The total size is checked up front, so either every value is written or
/// none is.
pub fn encode_numbers(values: &[u64], destination: &mut [u8], offset: usize) -> Result<usize> {
    let needed = calculate_needed_space_for_numbers(values);
    let end = offset.checked_add(needed).ok_or_else(|| {
        RowError::OutOfRange(format!("number sequence end overflows at offset {}", offset))
    })?;

    if end > destination.len() {
        return Err(RowError::OutOfRange(format!(
            "{} number blocks ({} bytes) at offset {} exceed destination of {} bytes",
            values.len(),
            needed,
            offset,
            destination.len()
        )));
    }

    let mut cursor = offset;
    for &value in values {
        cursor = encode_number_block(value, destination, cursor)?;
    }
    debug_assert_eq!(cursor, end);

    Ok(cursor)
}

/// Decode consecutive number blocks from the start of `source` to its end
///
/// The buffer must tile exactly into whole number blocks; a trailing
/// partial block is reported as corruption.
pub fn decode_numbers(source: &[u8]) -> Result<Vec<u64>> {
    let mut values = Vec::new();
    let mut cursor = 0;

    while cursor < source.len() {
        let (value, next) = decode_number_block(source, cursor).map_err(|_| {
            RowError::Corruption(format!(
                "number block at offset {} runs past buffer of {} bytes",
                cursor,
                source.len()
            ))
        })?;
        values.push(value);
        cursor = next;
    }

    Ok(values)
}
