//! Core domain types: the detention record, its closed categorical sets,
//! and the field accessor table used by the analyzers.

pub mod dates;
pub mod field;
pub mod record;

pub use dates::{parse_record_date, DateParseError};
pub use field::{Field, FieldValue};
pub use record::{
    Citizenship, Court, CustodyStatus, Duration, DurationParseError, Gender, IdType,
    NumericFieldError, Organization, Record,
};
