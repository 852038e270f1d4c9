//! Command size table: hex parsing and parameter counts.

use crate::core::error::GenerateError;
use crate::core::paths::{HEADER_SIZE, MAX_COMMAND_SIZE, PARAM_WIDTH};

/// Parameter count marking a deleted slot.
pub const DELETED: i64 = -1;

/// Parse one size entry as base 16. Accepts an optional `0x`/`0X` prefix.
///
/// The result is always within `0..=MAX_COMMAND_SIZE`.
pub fn parse_size(index: usize, value: &str) -> Result<i64, GenerateError> {
    let trimmed = value.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let raw = i64::from_str_radix(digits, 16).map_err(|source| GenerateError::InvalidSize {
        index,
        value: value.to_string(),
        source,
    })?;
    if !(0..=MAX_COMMAND_SIZE).contains(&raw) {
        return Err(GenerateError::SizeOutOfRange {
            index,
            value: value.to_string(),
            max: MAX_COMMAND_SIZE,
        });
    }
    Ok(raw)
}

/// Number of 4-byte parameter slots for a raw command size.
///
/// A raw size of 0 is a deleted slot. Otherwise the header is removed and the
/// remainder floor-divided by the slot width; a trailing partial slot is
/// dropped without complaint, matching the definition files already in use.
pub fn param_count(raw: i64) -> i64 {
    if raw == 0 {
        return DELETED;
    }
    raw.saturating_sub(HEADER_SIZE).div_euclid(PARAM_WIDTH)
}

/// Parse a size entry and derive its parameter count.
pub fn derive_param_count(index: usize, value: &str) -> Result<i64, GenerateError> {
    parse_size(index, value).map(param_count)
}
