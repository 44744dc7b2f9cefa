//! # bedquery
//!
//! `bedquery` is a Rust library and command-line tool for loading, strictly
//! validating and querying BED-like genomic annotation tables: five
//! tab-separated columns per row (chromosome, start position, end position,
//! feature name, strand).
//!
//! The crate is built around a validation-first design. A table is either
//! accepted in full or rejected at the first invalid field; every query
//! input goes through the same field validators as the file columns; and a
//! search that finds nothing is an explicit no-match, never an error and
//! never a silently empty collection.
//!
//! ## Key Features
//!
//! * **Strict field validation**: chromosome strings must be `chrN`/`chrNN`
//!   with N in 1–22 and no zero padding; positions are integers in
//!   [1, 2^32] inclusive (fractional forms like `2.53` are rejected at the
//!   string level); feature names are limited to alphanumerics, `_`, `-`
//!   and parentheses; strands are exactly `+` or `-`.
//! * **All-or-nothing loads**: [`RecordSet::validate_table`] validates
//!   column-wise across the whole table and aborts on the first failure.
//! * **Position search**: containment range search (inclusive on both
//!   bounds) and half-open point search, including multi-point queries with
//!   duplicate suppression. The two bound conventions differ on purpose;
//!   see [`search`].
//! * **Feature search**: exact feature-name lookup.
//! * **Summaries**: per-chromosome record counts, per-strand counts and
//!   min/max/mean record lengths.
//!
//! ## Structure
//!
//! * [`data_structs`]: raw and validated record types, the [`RecordSet`]
//!   table and the field validators.
//! * [`search`]: chromosome/position and feature-name queries.
//! * [`summary`]: per-chromosome aggregate statistics.
//! * [`io`]: the tab-separated file reader feeding the validator.
//! * [`error`]: the [`ValidationError`] kind shared by all validators.
//!
//! ## Usage
//!
//! ```no_run
//! use bedquery::prelude::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     let records = open_bed("annotations.bed")?;
//!
//!     if let Some(hits) =
//!         records.query_positions("chr6", &["169000000", "170000000"], SearchMode::Range)?
//!     {
//!         for record in &hits {
//!             println!("{record}");
//!         }
//!     } else {
//!         println!("no matching records");
//!     }
//!
//!     for chrom_summary in records.summarize() {
//!         println!(
//!             "chr{}: {} records, mean length {:.1}",
//!             chrom_summary.chrom, chrom_summary.count, chrom_summary.length_mean
//!         );
//!     }
//!     Ok(())
//! }
//! ```

pub mod data_structs;
pub mod error;
pub mod io;
pub mod prelude;
pub mod search;
pub mod summary;

pub use data_structs::RecordSet;
pub use error::ValidationError;
