//! Field identifiers and the accessor table mapping them onto records.
//!
//! Analyzers address record attributes through the closed [`Field`]
//! enumeration rather than runtime reflection: every variant maps to an
//! accessor that returns the attribute's value as a [`FieldValue`].

use std::fmt;

use serde::{Deserialize, Serialize};

use super::record::Record;

/// Identifier for one record attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Age,
    ArrestDate,
    Birth,
    City,
    Citizenship,
    Court,
    Duration,
    Gender,
    Id,
    IdType,
    Name,
    Number,
    Offense,
    Organization,
    Status,
}

impl Field {
    /// The categorical fields the source dataset is typically analysed on.
    ///
    /// Free-text fields (`name`, `city`, `offense`) are deliberately absent:
    /// their cardinality is unbounded and distinct-value sets over them are
    /// rarely meaningful.
    pub const CATEGORICAL: [Field; 6] = [
        Field::Organization,
        Field::IdType,
        Field::Citizenship,
        Field::Court,
        Field::Gender,
        Field::Status,
    ];

    /// The field's name, matching the dataset's column naming.
    pub fn name(&self) -> &'static str {
        match self {
            Field::Age => "age",
            Field::ArrestDate => "arrest_date",
            Field::Birth => "birth",
            Field::City => "city",
            Field::Citizenship => "citizenship",
            Field::Court => "court",
            Field::Duration => "duration",
            Field::Gender => "gender",
            Field::Id => "id",
            Field::IdType => "id_type",
            Field::Name => "name",
            Field::Number => "number",
            Field::Offense => "offense",
            Field::Organization => "organization",
            Field::Status => "status",
        }
    }

    /// Looks up this field's value on the given record.
    pub fn value<'a>(&self, record: &'a Record) -> FieldValue<'a> {
        match self {
            Field::Age => FieldValue::Text(&record.age),
            Field::ArrestDate => FieldValue::Text(&record.arrest_date),
            Field::Birth => FieldValue::Text(&record.birth),
            Field::City => FieldValue::Text(&record.city),
            Field::Citizenship => FieldValue::Categorical(record.citizenship.as_str()),
            Field::Court => FieldValue::Categorical(record.court.as_str()),
            Field::Duration => FieldValue::Rendered(record.duration.to_string()),
            Field::Gender => FieldValue::Categorical(record.gender.as_str()),
            Field::Id => FieldValue::Text(&record.id),
            Field::IdType => FieldValue::Categorical(record.id_type.as_str()),
            Field::Name => FieldValue::Text(&record.name),
            Field::Number => FieldValue::Text(&record.number),
            Field::Offense => FieldValue::Text(&record.offense),
            Field::Organization => FieldValue::Categorical(record.organization.as_str()),
            Field::Status => FieldValue::Categorical(record.status.as_str()),
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The value of one record attribute, tagged by how it is represented.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A free-form string held verbatim on the record.
    Text(&'a str),
    /// A member of a closed categorical set, in its wire spelling.
    Categorical(&'static str),
    /// A structured value rendered back to its wire spelling.
    Rendered(String),
}

impl FieldValue<'_> {
    /// Borrows the value as a string slice.
    pub fn as_str(&self) -> &str {
        match self {
            FieldValue::Text(value) => value,
            FieldValue::Categorical(value) => value,
            FieldValue::Rendered(value) => value,
        }
    }

    /// Converts the value into an owned string.
    pub fn into_string(self) -> String {
        match self {
            FieldValue::Text(value) => value.to_string(),
            FieldValue::Categorical(value) => value.to_string(),
            FieldValue::Rendered(value) => value,
        }
    }
}

impl fmt::Display for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
