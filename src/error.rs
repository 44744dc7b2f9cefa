use thiserror::Error;

use crate::data_structs::typedef::{
    ChromNum,
    PosNum,
};

/// Error raised when a raw field or a whole table fails validation.
///
/// Every rule of the input grammar has its own variant, so callers (and
/// tests) can tell exactly which constraint was violated. Validation errors
/// are never recovered internally: a single bad field aborts the whole load
/// or search call.
///
/// A search that finds nothing is *not* an error. No-match is reported as
/// `Option::None` by the query methods on
/// [`RecordSet`](crate::data_structs::RecordSet).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("chromosome {0:?} should begin with the prefix 'chr'")]
    ChromPrefix(String),

    #[error("chromosome {0:?} should be in the format 'chrX' or 'chrXX'")]
    ChromLength(String),

    #[error("chromosome number in {0:?} is not an integer")]
    ChromNotNumeric(String),

    #[error("chromosome number in {0:?} should not be zero-padded")]
    ChromZeroPadded(String),

    #[error("chromosome number should have a value of 1 through 22, got {0}")]
    ChromOutOfRange(ChromNum),

    #[error("position {0:?} is not an integer")]
    PositionNotNumeric(String),

    #[error("position should have a value of 1 through 2^32, got {0}")]
    PositionOutOfRange(PosNum),

    #[error("start position invalid: {0}")]
    InvalidStart(#[source] Box<ValidationError>),

    #[error("end position invalid: {0}")]
    InvalidEnd(#[source] Box<ValidationError>),

    #[error("end position ({end}) must be greater than start position ({start})")]
    PositionOrder { start: PosNum, end: PosNum },

    #[error(
        "feature name {name:?} contains disallowed character {found:?} \
         (allowed: alphanumeric, underscore, hyphen, parentheses)"
    )]
    FeatureNameChar { name: String, found: char },

    #[error("strand {0:?} should be a string value of '-' or '+'")]
    StrandSymbol(String),
}
