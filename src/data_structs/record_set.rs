use itertools::izip;
use log::debug;

use crate::data_structs::record::{
    BedRecord,
    RawBedRecord,
};
use crate::data_structs::validators::{
    validate_chromosome,
    validate_feature_name,
    validate_position_pair,
    validate_strand,
};
use crate::error::ValidationError;

/// An ordered, immutable collection of validated [`BedRecord`]s.
///
/// Insertion order is preserved from the source and duplicate rows are kept
/// as distinct records; duplicates are only suppressed as a side effect of
/// multi-point search. Once constructed, a set is only ever read (`&self`
/// methods), so it may be shared freely across concurrent readers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordSet {
    records: Vec<BedRecord>,
}

impl RecordSet {
    /// Validates a whole table of raw rows into a `RecordSet`.
    ///
    /// Validation runs column-wise in file-column order: the entire
    /// chromosome column first, then every start/end pair, then the feature
    /// column, then the strand column. The first failure aborts the whole
    /// load; there is no partial acceptance. The traversal order is part of
    /// the contract (a bad chromosome in row 3 wins over a bad strand in
    /// row 1) and is pinned by tests.
    pub fn validate_table(rows: &[RawBedRecord]) -> Result<Self, ValidationError> {
        let mut chroms = Vec::with_capacity(rows.len());
        for row in rows {
            chroms.push(validate_chromosome(&row.chrom)?);
        }
        let mut positions = Vec::with_capacity(rows.len());
        for row in rows {
            positions.push(validate_position_pair(&row.start, &row.end)?);
        }
        let mut features = Vec::with_capacity(rows.len());
        for row in rows {
            features.push(validate_feature_name(&row.feature_name)?);
        }
        let mut strands = Vec::with_capacity(rows.len());
        for row in rows {
            strands.push(validate_strand(&row.strand)?);
        }
        debug!("validated table of {} rows", rows.len());

        let records = izip!(chroms, positions, features, strands)
            .map(|(chrom, (start, end), feature_name, strand)| {
                BedRecord::new(chrom, start, end, feature_name, strand)
            })
            .collect();
        Ok(Self { records })
    }

    /// Returns the number of records in the set.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the set holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates over the records in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, BedRecord> {
        self.records.iter()
    }

    /// Returns the record at `index`, if any.
    pub fn get(
        &self,
        index: usize,
    ) -> Option<&BedRecord> {
        self.records.get(index)
    }

    /// Returns the records as a slice.
    pub fn as_slice(&self) -> &[BedRecord] {
        &self.records
    }
}

impl FromIterator<BedRecord> for RecordSet {
    fn from_iter<T: IntoIterator<Item = BedRecord>>(iter: T) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for RecordSet {
    type IntoIter = std::vec::IntoIter<BedRecord>;
    type Item = BedRecord;

    fn into_iter(self) -> Self::IntoIter {
        self.records.into_iter()
    }
}

impl<'a> IntoIterator for &'a RecordSet {
    type IntoIter = std::slice::Iter<'a, BedRecord>;
    type Item = &'a BedRecord;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
