//! Per-chromosome summary statistics over a validated [`RecordSet`].

use std::collections::BTreeMap;

use serde::Serialize;

use crate::data_structs::record::BedRecord;
use crate::data_structs::record_set::RecordSet;
use crate::data_structs::typedef::{
    ChromNum,
    PosNum,
};
use crate::data_structs::Strand;

/// Aggregate statistics for one chromosome present in a record set.
///
/// Strand counts are explicit fields and report 0 when a strand is absent.
/// Lengths are `end - start`; the mean is floating point. Rendering to text
/// or JSON is left to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChromSummary {
    /// Chromosome number.
    pub chrom:       ChromNum,
    /// Number of records on this chromosome.
    pub count:       usize,
    /// Number of records on the forward (`+`) strand.
    pub fwd_count:   usize,
    /// Number of records on the reverse (`-`) strand.
    pub rev_count:   usize,
    /// Minimum record length.
    pub length_min:  PosNum,
    /// Maximum record length.
    pub length_max:  PosNum,
    /// Mean record length.
    pub length_mean: f64,
}

impl RecordSet {
    /// Groups the set by chromosome and computes a [`ChromSummary`] per
    /// distinct chromosome, ascending. Chromosomes with no records do not
    /// appear. Pure; the set is not modified.
    pub fn summarize(&self) -> Vec<ChromSummary> {
        let mut grouped: BTreeMap<ChromNum, Vec<&BedRecord>> = BTreeMap::new();
        for record in self.iter() {
            grouped.entry(record.chrom()).or_default().push(record);
        }

        grouped
            .into_iter()
            .map(|(chrom, records)| {
                let lengths: Vec<PosNum> =
                    records.iter().map(|r| r.length()).collect();
                let fwd_count = records
                    .iter()
                    .filter(|r| r.strand() == Strand::Forward)
                    .count();
                ChromSummary {
                    chrom,
                    count: records.len(),
                    fwd_count,
                    rev_count: records.len() - fwd_count,
                    length_min: lengths
                        .iter()
                        .copied()
                        .min()
                        .expect("chromosome group is never empty"),
                    length_max: lengths
                        .iter()
                        .copied()
                        .max()
                        .expect("chromosome group is never empty"),
                    length_mean: lengths.iter().sum::<PosNum>() as f64
                        / lengths.len() as f64,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn record(
        chrom: ChromNum,
        start: PosNum,
        end: PosNum,
        strand: Strand,
    ) -> BedRecord {
        BedRecord::new(chrom, start, end, format!("f{chrom}_{start}"), strand)
    }

    #[test]
    fn summary_groups_by_chromosome_ascending() {
        let set = RecordSet::from_iter([
            record(9, 100, 500, Strand::Forward),
            record(6, 10, 110, Strand::Reverse),
            record(6, 20, 50, Strand::Forward),
            record(6, 1, 11, Strand::Reverse),
        ]);

        let summary = set.summarize();
        assert_eq!(summary.len(), 2);

        let chr6 = &summary[0];
        assert_eq!(chr6.chrom, 6);
        assert_eq!(chr6.count, 3);
        assert_eq!(chr6.fwd_count, 1);
        assert_eq!(chr6.rev_count, 2);
        // lengths are 100, 30, 10
        assert_eq!(chr6.length_min, 10);
        assert_eq!(chr6.length_max, 100);
        assert_approx_eq!(chr6.length_mean, 140.0 / 3.0);

        let chr9 = &summary[1];
        assert_eq!(chr9.chrom, 9);
        assert_eq!(chr9.count, 1);
        assert_eq!(chr9.fwd_count, 1);
        assert_eq!(chr9.rev_count, 0);
        assert_eq!(chr9.length_min, 400);
        assert_eq!(chr9.length_max, 400);
        assert_approx_eq!(chr9.length_mean, 400.0);
    }

    #[test]
    fn summary_of_empty_set_is_empty() {
        assert!(RecordSet::default().summarize().is_empty());
    }

    #[test]
    fn single_strand_chromosome_reports_zero_for_other() {
        let set = RecordSet::from_iter([
            record(1, 5, 15, Strand::Reverse),
            record(1, 7, 20, Strand::Reverse),
        ]);
        let summary = set.summarize();
        assert_eq!(summary[0].fwd_count, 0);
        assert_eq!(summary[0].rev_count, 2);
    }
}
