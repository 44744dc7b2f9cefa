pub use crate::data_structs::typedef::{
    ChromNum,
    PosNum,
};
pub use crate::data_structs::validators::{
    validate_chromosome,
    validate_feature_name,
    validate_position,
    validate_position_pair,
    validate_strand,
};
pub use crate::data_structs::{
    BedRecord,
    RawBedRecord,
    RecordSet,
    Strand,
};
pub use crate::error::ValidationError;
pub use crate::io::{
    open_bed,
    read_bed,
    read_bed_records,
};
pub use crate::search::SearchMode;
pub use crate::summary::ChromSummary;
