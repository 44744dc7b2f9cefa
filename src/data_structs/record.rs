use std::fmt;

use serde::{
    Deserialize,
    Serialize,
};

use crate::data_structs::enums::Strand;
use crate::data_structs::typedef::{
    ChromNum,
    PosNum,
};

/// One unvalidated row of a BED-like annotation file, five tab-separated
/// columns in file order.
///
/// All fields stay textual on purpose: validation has to see the original
/// string form to reject inputs like a fractional position (`"2.53"`) or a
/// zero-padded chromosome (`"chr06"`) that numeric deserialization would
/// silently coerce.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawBedRecord {
    pub chrom:        String,
    pub start:        String,
    pub end:          String,
    pub feature_name: String,
    pub strand:       String,
}

impl RawBedRecord {
    pub fn new<S: Into<String>>(
        chrom: S,
        start: S,
        end: S,
        feature_name: S,
        strand: S,
    ) -> Self {
        Self {
            chrom:        chrom.into(),
            start:        start.into(),
            end:          end.into(),
            feature_name: feature_name.into(),
            strand:       strand.into(),
        }
    }
}

/// One validated genomic annotation feature.
///
/// Instances normally come out of
/// [`RecordSet::validate_table`](crate::data_structs::RecordSet::validate_table),
/// which guarantees every field satisfies the input grammar.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BedRecord {
    chrom:        ChromNum,
    start:        PosNum,
    end:          PosNum,
    feature_name: String,
    strand:       Strand,
}

impl BedRecord {
    /// Creates a new `BedRecord`.
    pub fn new(
        chrom: ChromNum,
        start: PosNum,
        end: PosNum,
        feature_name: String,
        strand: Strand,
    ) -> Self {
        assert!(
            end > start,
            "End position must be greater than start position"
        );
        Self {
            chrom,
            start,
            end,
            feature_name,
            strand,
        }
    }

    /// Returns the chromosome number.
    pub fn chrom(&self) -> ChromNum {
        self.chrom
    }

    /// Returns the start position.
    pub fn start(&self) -> PosNum {
        self.start
    }

    /// Returns the end position.
    pub fn end(&self) -> PosNum {
        self.end
    }

    /// Returns the feature name.
    pub fn feature_name(&self) -> &str {
        &self.feature_name
    }

    /// Returns the strand.
    pub fn strand(&self) -> Strand {
        self.strand
    }

    /// Returns the length of the feature, `end - start`.
    ///
    /// Computed on demand, never stored.
    pub fn length(&self) -> PosNum {
        self.end - self.start
    }
}

impl fmt::Display for BedRecord {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(
            f,
            "chr{}:{}-{}\t{}\t{}",
            self.chrom, self.start, self.end, self.feature_name, self.strand
        )
    }
}
