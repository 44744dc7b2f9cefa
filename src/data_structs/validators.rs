//! Field-level validators for the five BED columns.
//!
//! Each validator checks one raw field against the input grammar and either
//! returns the parsed value or a [`ValidationError`] naming the violated
//! rule. They are pure functions; [`RecordSet::validate_table`] applies them
//! column-wise over a whole table, and the search engine reuses
//! [`validate_chromosome`] and [`validate_position`] on query inputs.
//!
//! [`RecordSet::validate_table`]: crate::data_structs::RecordSet::validate_table

use std::str::FromStr;

use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::{
    ChromNum,
    PosNum,
    MAX_CHROM,
    MAX_POSITION,
    MIN_CHROM,
    MIN_POSITION,
};
use crate::error::ValidationError;

/// Parses a chromosome string like `"chr6"` or `"chr22"` into its number.
///
/// The grammar is: the literal prefix `chr`, followed by one or two
/// characters forming an integer with no zero padding, in [1, 22]. Checks
/// run in that order and each failure has a distinct error variant, so
/// `"chr06"` is rejected as zero-padded even though `06 == 6`.
pub fn validate_chromosome(raw: &str) -> Result<ChromNum, ValidationError> {
    let number = raw
        .strip_prefix("chr")
        .ok_or_else(|| ValidationError::ChromPrefix(raw.to_string()))?;
    if !(1..=2).contains(&number.len()) {
        return Err(ValidationError::ChromLength(raw.to_string()));
    }
    let parsed = number
        .parse::<ChromNum>()
        .map_err(|_| ValidationError::ChromNotNumeric(raw.to_string()))?;
    // round-trip compare catches padded zeros ("06") and a stray '+' sign
    if parsed.to_string() != number {
        return Err(ValidationError::ChromZeroPadded(raw.to_string()));
    }
    if !(MIN_CHROM..=MAX_CHROM).contains(&parsed) {
        return Err(ValidationError::ChromOutOfRange(parsed));
    }
    Ok(parsed)
}

/// Parses a single position from its textual form.
///
/// Going through the string representation deliberately rejects fractional
/// values such as `"2.53"`, which fail integer parsing. The valid range is
/// [1, 2^32] inclusive.
pub fn validate_position(raw: &str) -> Result<PosNum, ValidationError> {
    let parsed = raw
        .parse::<PosNum>()
        .map_err(|_| ValidationError::PositionNotNumeric(raw.to_string()))?;
    if !(MIN_POSITION..=MAX_POSITION).contains(&parsed) {
        return Err(ValidationError::PositionOutOfRange(parsed));
    }
    Ok(parsed)
}

/// Validates a start/end pair and their ordering.
///
/// Each endpoint is validated independently and a failure names the side it
/// occurred on. Ordering is strict: `end > start`.
pub fn validate_position_pair(
    start_raw: &str,
    end_raw: &str,
) -> Result<(PosNum, PosNum), ValidationError> {
    let start = validate_position(start_raw)
        .map_err(|e| ValidationError::InvalidStart(Box::new(e)))?;
    let end = validate_position(end_raw)
        .map_err(|e| ValidationError::InvalidEnd(Box::new(e)))?;
    if end > start {
        Ok((start, end))
    }
    else {
        Err(ValidationError::PositionOrder { start, end })
    }
}

fn is_allowed_feature_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '(' | ')')
}

/// Validates a feature name against the allowed alphabet
/// (alphanumeric, `_`, `-`, `(`, `)`); the error reports the first
/// offending character.
pub fn validate_feature_name(raw: &str) -> Result<String, ValidationError> {
    match raw.chars().find(|c| !is_allowed_feature_char(*c)) {
        Some(found) => {
            Err(ValidationError::FeatureNameChar {
                name: raw.to_string(),
                found,
            })
        },
        None => Ok(raw.to_string()),
    }
}

/// Validates a strand symbol, strictly `"+"` or `"-"`.
pub fn validate_strand(raw: &str) -> Result<Strand, ValidationError> {
    Strand::from_str(raw)
}
