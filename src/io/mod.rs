//! File input for BED-like annotation tables.
//!
//! The reader is a thin collaborator around the validation core: it turns a
//! byte stream into rows of five raw fields and hands them to
//! [`RecordSet::validate_table`](crate::data_structs::RecordSet::validate_table).

mod bed;

pub use bed::{
    open_bed,
    read_bed,
    read_bed_records,
};
