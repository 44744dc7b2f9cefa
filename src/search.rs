//! Position and feature search over a validated [`RecordSet`].
//!
//! All queries are linear scans over the in-memory set and never mutate it.
//! A query that runs but matches nothing returns `None`; that outcome is
//! always distinct from a [`ValidationError`] on the query inputs.
//!
//! The two position-search flavors deliberately use different bound
//! conventions:
//!
//! - **range search** selects records *fully contained* in the interval,
//!   inclusive on both bounds (`start >= lo && end <= hi`), so a range
//!   exactly matching a record's span still returns that record;
//! - **point search** is half-open (`start <= p && end > p`), start
//!   inclusive, end exclusive.

use itertools::Itertools;
use log::warn;

use crate::data_structs::record::BedRecord;
use crate::data_structs::record_set::RecordSet;
use crate::data_structs::typedef::PosNum;
use crate::data_structs::validators::{
    validate_chromosome,
    validate_position,
};
use crate::error::ValidationError;

/// How a list of exactly two positions is interpreted by
/// [`RecordSet::query_positions`].
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum SearchMode {
    /// Two positions define an inclusive containment range. The default.
    #[default]
    Range,
    /// Every position is an independent point query; results are unioned
    /// and deduplicated.
    Points,
}

impl RecordSet {
    /// Searches by chromosome and optional positions.
    ///
    /// `chrom` and every entry of `positions` are raw strings validated with
    /// the same rules as table fields; a validation failure is returned as
    /// an error even when the chromosome has no records, which is why all
    /// validation happens before any filtering.
    ///
    /// With no positions the whole chromosome subset is returned. Exactly
    /// two positions under [`SearchMode::Range`] run a containment range
    /// search (order-insensitive; a zero-length range degrades to a point
    /// search with a warning). Any other count, or two positions under
    /// [`SearchMode::Points`], runs independent point searches whose union
    /// is deduplicated on the full record tuple.
    ///
    /// Returns `Ok(None)` when the search ran but matched nothing.
    pub fn query_positions<S: AsRef<str>>(
        &self,
        chrom: &str,
        positions: &[S],
        mode: SearchMode,
    ) -> Result<Option<RecordSet>, ValidationError> {
        let chrom = validate_chromosome(chrom)?;
        // Positions must be validated before the chromosome filter, else an
        // invalid position could be masked by a technically correct no-match.
        let positions = positions
            .iter()
            .map(|p| validate_position(p.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        let chrom_match = self
            .iter()
            .filter(|record| record.chrom() == chrom)
            .collect_vec();
        if chrom_match.is_empty() {
            return Ok(None);
        }

        let found: Vec<BedRecord> = if positions.is_empty() {
            chrom_match.into_iter().cloned().collect()
        }
        else if positions.len() == 2 && mode == SearchMode::Range {
            range_search(&chrom_match, positions[0], positions[1])
        }
        else {
            positions
                .iter()
                .flat_map(|&pos| point_search(&chrom_match, pos))
                .unique()
                .collect()
        };

        if found.is_empty() {
            Ok(None)
        }
        else {
            Ok(Some(found.into_iter().collect()))
        }
    }

    /// Searches by exact feature name.
    ///
    /// Returns `None` when no record carries the name.
    pub fn query_feature(
        &self,
        feature_name: &str,
    ) -> Option<RecordSet> {
        let found: RecordSet = self
            .iter()
            .filter(|record| record.feature_name() == feature_name)
            .cloned()
            .collect();
        if found.is_empty() {
            None
        }
        else {
            Some(found)
        }
    }
}

/// Containment range search, inclusive on both bounds.
///
/// Position order does not matter. A zero-length range falls back to a
/// single point search at that value; this is a warning, not an error.
fn range_search(
    records: &[&BedRecord],
    p0: PosNum,
    p1: PosNum,
) -> Vec<BedRecord> {
    if p0 == p1 {
        warn!("position range has zero length, defaulting to single position search at {p0}");
        return point_search(records, p0);
    }
    let lo = p0.min(p1);
    let hi = p0.max(p1);
    records
        .iter()
        .filter(|record| record.start() >= lo && record.end() <= hi)
        .map(|record| (*record).clone())
        .collect()
}

/// Half-open point search: `start <= pos < end`.
fn point_search(
    records: &[&BedRecord],
    pos: PosNum,
) -> Vec<BedRecord> {
    records
        .iter()
        .filter(|record| record.start() <= pos && record.end() > pos)
        .map(|record| (*record).clone())
        .collect()
}
