/// Canonical chromosome number (1 through 22).
pub type ChromNum = u8;
/// Genomic position. Valid values span [1, 2^32] inclusive, so `u32` cannot
/// hold the upper bound.
pub type PosNum = u64;

pub const MIN_CHROM: ChromNum = 1;
pub const MAX_CHROM: ChromNum = 22;

pub const MIN_POSITION: PosNum = 1;
pub const MAX_POSITION: PosNum = 1 << 32;
