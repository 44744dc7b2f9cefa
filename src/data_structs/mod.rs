//! Core data structures for validated BED-like annotation tables.
//!
//! Key components of this module include:
//!
//! - [`validators`]: pure field-level validators for the five BED columns
//!   (chromosome, start/end positions, feature name, strand).
//! - [`RawBedRecord`]: one unvalidated row, all fields still textual.
//! - [`BedRecord`]: one validated annotation feature.
//! - [`RecordSet`]: the ordered, immutable table built by
//!   [`RecordSet::validate_table`]; the search engine
//!   ([`crate::search`]) and the summary aggregator ([`crate::summary`])
//!   operate on it read-only.
//! - [`Strand`]: the two-valued strand symbol.
//! - [`typedef`]: numeric type aliases and the valid chromosome/position
//!   ranges.

mod enums;
pub mod record;
pub mod record_set;
pub mod typedef;
pub mod validators;

#[cfg(test)]
mod tests;

pub use enums::Strand;
pub use record::{
    BedRecord,
    RawBedRecord,
};
pub use record_set::RecordSet;
