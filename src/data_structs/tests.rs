use rstest::rstest;

use super::typedef::{
    ChromNum,
    PosNum,
};
use super::validators::*;
use super::{
    RawBedRecord,
    RecordSet,
    Strand,
};
use crate::error::ValidationError;

#[rstest]
#[case::min("chr1", 1)]
#[case::max("chr22", 22)]
#[case::single_digit("chr6", 6)]
#[case::two_digits("chr10", 10)]
fn valid_chromosomes(
    #[case] raw: &str,
    #[case] expected: ChromNum,
) {
    assert_eq!(validate_chromosome(raw), Ok(expected));
}

#[rstest]
#[case::missing_prefix("5", ValidationError::ChromPrefix("5".to_string()))]
#[case::empty("", ValidationError::ChromPrefix("".to_string()))]
#[case::prefix_only("chr", ValidationError::ChromLength("chr".to_string()))]
#[case::three_digits("chr123", ValidationError::ChromLength("chr123".to_string()))]
#[case::noninteger("chr.3", ValidationError::ChromNotNumeric("chr.3".to_string()))]
#[case::padded_zero("chr06", ValidationError::ChromZeroPadded("chr06".to_string()))]
#[case::below_min("chr0", ValidationError::ChromOutOfRange(0))]
#[case::above_max("chr25", ValidationError::ChromOutOfRange(25))]
fn invalid_chromosomes(
    #[case] raw: &str,
    #[case] expected: ValidationError,
) {
    assert_eq!(validate_chromosome(raw), Err(expected));
}

#[rstest]
#[case::min("1", 1)]
#[case::max("4294967296", 1 << 32)]
#[case::typical("169717822", 169717822)]
fn valid_positions(
    #[case] raw: &str,
    #[case] expected: PosNum,
) {
    assert_eq!(validate_position(raw), Ok(expected));
}

#[rstest]
#[case::zero("0", ValidationError::PositionOutOfRange(0))]
#[case::above_max("4294967297", ValidationError::PositionOutOfRange(4294967297))]
#[case::not_a_number(
    "asdf1234qwer0987",
    ValidationError::PositionNotNumeric("asdf1234qwer0987".to_string())
)]
#[case::fractional("2.53", ValidationError::PositionNotNumeric("2.53".to_string()))]
#[case::negative("-5", ValidationError::PositionNotNumeric("-5".to_string()))]
fn invalid_positions(
    #[case] raw: &str,
    #[case] expected: ValidationError,
) {
    assert_eq!(validate_position(raw), Err(expected));
}

#[test]
fn position_pair_ordering_is_strict() {
    assert_eq!(validate_position_pair("100", "200"), Ok((100, 200)));
    assert_eq!(
        validate_position_pair("200", "100"),
        Err(ValidationError::PositionOrder {
            start: 200,
            end:   100,
        })
    );
    // equality violates end > start even though both endpoints are valid
    assert_eq!(
        validate_position_pair("100", "100"),
        Err(ValidationError::PositionOrder {
            start: 100,
            end:   100,
        })
    );
}

#[test]
fn position_pair_names_the_failing_endpoint() {
    assert_eq!(
        validate_position_pair("0", "200"),
        Err(ValidationError::InvalidStart(Box::new(
            ValidationError::PositionOutOfRange(0)
        )))
    );
    assert_eq!(
        validate_position_pair("100", "2.53"),
        Err(ValidationError::InvalidEnd(Box::new(
            ValidationError::PositionNotNumeric("2.53".to_string())
        )))
    );
}

#[rstest]
#[case::typical("470_368746_55274(PHF10)_4")]
#[case::hyphen("some-feature")]
#[case::alphanumeric("asdf1234qwer0987")]
#[case::empty("")]
fn valid_feature_names(#[case] raw: &str) {
    assert_eq!(validate_feature_name(raw), Ok(raw.to_string()));
}

#[rstest]
#[case::space("bad name", ' ')]
#[case::dot("bad.name", '.')]
#[case::hash("bad#name", '#')]
#[case::tab("bad\tname", '\t')]
fn invalid_feature_names(
    #[case] raw: &str,
    #[case] found: char,
) {
    assert_eq!(
        validate_feature_name(raw),
        Err(ValidationError::FeatureNameChar {
            name: raw.to_string(),
            found,
        })
    );
}

#[rstest]
#[case::forward("+", Strand::Forward)]
#[case::reverse("-", Strand::Reverse)]
fn valid_strands(
    #[case] raw: &str,
    #[case] expected: Strand,
) {
    assert_eq!(validate_strand(raw), Ok(expected));
}

#[rstest]
#[case::dot(".")]
#[case::word("plus")]
#[case::empty("")]
#[case::padded(" +")]
fn invalid_strands(#[case] raw: &str) {
    assert_eq!(
        validate_strand(raw),
        Err(ValidationError::StrandSymbol(raw.to_string()))
    );
}

fn raw_row(
    chrom: &str,
    start: &str,
    end: &str,
    feature: &str,
    strand: &str,
) -> RawBedRecord {
    RawBedRecord::new(chrom, start, end, feature, strand)
}

#[test]
fn validate_table_accepts_a_clean_table() {
    let rows = vec![
        raw_row("chr6", "169717822", "169717906", "470_368746_55274(PHF10)_4", "-"),
        raw_row("chr9", "136953847", "136954255", "464_319955_286256(LCN12)_5", "+"),
    ];
    let set = RecordSet::validate_table(&rows).unwrap();
    assert_eq!(set.len(), 2);

    let first = set.get(0).unwrap();
    assert_eq!(first.chrom(), 6);
    assert_eq!(first.start(), 169717822);
    assert_eq!(first.end(), 169717906);
    assert_eq!(first.feature_name(), "470_368746_55274(PHF10)_4");
    assert_eq!(first.strand(), Strand::Reverse);
    assert_eq!(first.length(), 84);
}

#[test]
fn validate_table_is_all_or_nothing() {
    let rows = vec![
        raw_row("chr6", "100", "200", "good", "+"),
        raw_row("chr6", "100", "200", "bad name", "+"),
    ];
    assert!(RecordSet::validate_table(&rows).is_err());
}

#[test]
fn validate_table_checks_columns_in_file_order() {
    // row 1 has a bad strand, row 2 a bad chromosome; the chromosome pass
    // runs first over the whole table, so its error wins
    let rows = vec![
        raw_row("chr6", "100", "200", "good", "x"),
        raw_row("chr99", "100", "200", "good", "+"),
    ];
    assert_eq!(
        RecordSet::validate_table(&rows),
        Err(ValidationError::ChromOutOfRange(99))
    );
}

#[test]
fn validate_table_keeps_order_and_duplicates() {
    let rows = vec![
        raw_row("chr2", "10", "20", "dup", "+"),
        raw_row("chr1", "10", "20", "other", "-"),
        raw_row("chr2", "10", "20", "dup", "+"),
    ];
    let set = RecordSet::validate_table(&rows).unwrap();
    assert_eq!(set.len(), 3);
    assert_eq!(set.get(0), set.get(2));
    assert_eq!(set.get(1).unwrap().chrom(), 1);
}

#[test]
fn empty_table_validates_to_an_empty_set() {
    let set = RecordSet::validate_table(&[]).unwrap();
    assert!(set.is_empty());
}
