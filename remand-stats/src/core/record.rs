//! The detention record and its closed categorical value sets.
//!
//! Records are immutable: they are built once by decoding a page of the
//! remote response and only ever read after that. Every categorical field
//! deserializes against a closed set of Hebrew wire literals; a value
//! outside the set fails decoding instead of being coerced or dropped.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use super::dates::{parse_record_date, DateParseError};

/// Whether the person holds Israeli citizenship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Citizenship {
    #[serde(rename = "לא")]
    No,
    #[serde(rename = "כן")]
    Yes,
}

impl Citizenship {
    /// Returns the wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Citizenship::No => "לא",
            Citizenship::Yes => "כן",
        }
    }
}

/// The court system that handled the case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Court {
    #[serde(rename = "בית דין צבאי")]
    Military,
    #[serde(rename = "בית משפט אזרחי")]
    Civil,
    #[serde(rename = "בית דין צבאי + בית משפט אזרחי")]
    MilitaryAndCivil,
}

impl Court {
    /// Returns the wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Court::Military => "בית דין צבאי",
            Court::Civil => "בית משפט אזרחי",
            Court::MilitaryAndCivil => "בית דין צבאי + בית משפט אזרחי",
        }
    }
}

/// Recorded gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    #[serde(rename = "זכר")]
    Male,
    #[serde(rename = "נקבה")]
    Female,
}

impl Gender {
    /// Returns the wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "זכר",
            Gender::Female => "נקבה",
        }
    }
}

/// The kind of identity document behind the `id` field.
///
/// The source data carries `שטחים` both with and without a trailing space;
/// the two spellings are distinct wire values and are kept distinct here so
/// that distributions over this field reflect the data as published.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdType {
    #[serde(rename = "שטחים")]
    Territories,
    #[serde(rename = "שטחים ")]
    TerritoriesPadded,
    #[serde(rename = "כחולה")]
    Blue,
}

impl IdType {
    /// Returns the wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            IdType::Territories => "שטחים",
            IdType::TerritoriesPadded => "שטחים ",
            IdType::Blue => "כחולה",
        }
    }
}

/// Declared organizational affiliation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Organization {
    #[serde(rename = "ללא")]
    Unaffiliated,
    #[serde(rename = "פת\"ח")]
    Fatah,
    #[serde(rename = "חמאס")]
    Hamas,
    #[serde(rename = "גא\"פ")]
    IslamicJihad,
    #[serde(rename = "חז\"ד")]
    Dflp,
    #[serde(rename = "חז\"ע")]
    Pflp,
}

impl Organization {
    /// Returns the wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            Organization::Unaffiliated => "ללא",
            Organization::Fatah => "פת\"ח",
            Organization::Hamas => "חמאס",
            Organization::IslamicJihad => "גא\"פ",
            Organization::Dflp => "חז\"ד",
            Organization::Pflp => "חז\"ע",
        }
    }
}

/// Whether the person is detained pending trial or serving a sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CustodyStatus {
    #[serde(rename = "עצור")]
    Detained,
    #[serde(rename = "שפוט")]
    Sentenced,
}

impl CustodyStatus {
    /// Returns the wire literal for this value.
    pub fn as_str(&self) -> &'static str {
        match self {
            CustodyStatus::Detained => "עצור",
            CustodyStatus::Sentenced => "שפוט",
        }
    }
}

/// The custody sentinel used by the source for people still awaiting sentence.
const IN_CUSTODY_SENTINEL: &str = "במעצר";

static DURATION_TERM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d+)--(\d+)--(\d+)$").expect("duration pattern is valid"));

/// Sentence duration: either the custody sentinel or a structured term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Duration {
    /// Detained without a sentence (`במעצר`).
    InCustody,
    /// A sentenced term, encoded on the wire as `years--months--days`.
    Term { years: u32, months: u32, days: u32 },
}

/// A duration value that is neither the custody sentinel nor a
/// `years--months--days` triple.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("`{value}` is not a custody sentinel or a `years--months--days` duration")]
pub struct DurationParseError {
    /// The raw value that failed to parse.
    pub value: String,
}

impl FromStr for Duration {
    type Err = DurationParseError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        if raw == IN_CUSTODY_SENTINEL {
            return Ok(Duration::InCustody);
        }
        let captures = DURATION_TERM
            .captures(raw)
            .ok_or_else(|| DurationParseError {
                value: raw.to_string(),
            })?;
        let component = |index: usize| {
            captures[index]
                .parse::<u32>()
                .map_err(|_| DurationParseError {
                    value: raw.to_string(),
                })
        };
        Ok(Duration::Term {
            years: component(1)?,
            months: component(2)?,
            days: component(3)?,
        })
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Duration::InCustody => f.write_str(IN_CUSTODY_SENTINEL),
            Duration::Term {
                years,
                months,
                days,
            } => write!(f, "{years}--{months}--{days}"),
        }
    }
}

impl Serialize for Duration {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// A numeric-string field that does not hold a non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("field `{field}` holds `{value}`, which is not a non-negative integer")]
pub struct NumericFieldError {
    /// The record field that was queried.
    pub field: &'static str,
    /// The offending raw value.
    pub value: String,
}

/// One row of the detention dataset.
///
/// String fields keep their raw wire form; typed accessors parse on demand
/// and report violations instead of panicking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Age at publication, as a numeric string.
    pub age: String,
    /// Arrest date, as published.
    pub arrest_date: String,
    /// Birth date, as published.
    pub birth: String,
    /// City of residence, free text.
    pub city: String,
    /// Citizenship flag. The wire key is misspelled by the source.
    #[serde(rename = "ciztizenship")]
    pub citizenship: Citizenship,
    /// Sentence duration or the custody sentinel.
    pub duration: Duration,
    /// Court system that handled the case.
    pub court: Court,
    /// Recorded gender.
    pub gender: Gender,
    /// Identity number, as a numeric string.
    pub id: String,
    /// Kind of identity document.
    pub id_type: IdType,
    /// Full name, free text.
    pub name: String,
    /// Sequence number within the dataset, as a numeric string.
    pub number: String,
    /// Offense description, free text.
    pub offense: String,
    /// Declared organizational affiliation.
    pub organization: Organization,
    /// Detained pending trial vs. sentenced. The wire key is `type`.
    #[serde(rename = "type")]
    pub status: CustodyStatus,
}

impl Record {
    /// Age in whole years.
    pub fn age_years(&self) -> Result<u32, NumericFieldError> {
        parse_numeric(&self.age, "age")
    }

    /// Identity number as an integer.
    pub fn id_number(&self) -> Result<u64, NumericFieldError> {
        parse_numeric(&self.id, "id")
    }

    /// Sequence number as an integer.
    pub fn sequence_number(&self) -> Result<u64, NumericFieldError> {
        parse_numeric(&self.number, "number")
    }

    /// Arrest date parsed as a calendar date.
    pub fn arrested_on(&self) -> Result<NaiveDate, DateParseError> {
        parse_record_date(&self.arrest_date)
    }

    /// Birth date parsed as a calendar date.
    pub fn born_on(&self) -> Result<NaiveDate, DateParseError> {
        parse_record_date(&self.birth)
    }
}

fn parse_numeric<T: FromStr>(raw: &str, field: &'static str) -> Result<T, NumericFieldError> {
    raw.trim().parse().map_err(|_| NumericFieldError {
        field,
        value: raw.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::record_with;

    #[test]
    fn duration_parses_custody_sentinel() {
        assert_eq!("במעצר".parse::<Duration>().unwrap(), Duration::InCustody);
    }

    #[test]
    fn duration_parses_structured_term() {
        assert_eq!(
            "12--6--0".parse::<Duration>().unwrap(),
            Duration::Term {
                years: 12,
                months: 6,
                days: 0
            }
        );
    }

    #[test]
    fn duration_rejects_other_shapes() {
        assert!("12--6".parse::<Duration>().is_err());
        assert!("twelve--six--zero".parse::<Duration>().is_err());
        assert!("".parse::<Duration>().is_err());
    }

    #[test]
    fn duration_round_trips_through_display() {
        for raw in ["במעצר", "3--0--14"] {
            let parsed: Duration = raw.parse().unwrap();
            assert_eq!(parsed.to_string(), raw);
        }
    }

    #[test]
    fn record_decodes_wire_payload() {
        let payload = serde_json::json!({
            "age": "34",
            "arrest_date": "2023-10-08",
            "birth": "1989-05-01",
            "city": "שכם",
            "ciztizenship": "לא",
            "duration": "במעצר",
            "court": "בית דין צבאי",
            "gender": "זכר",
            "id": "901234567",
            "id_type": "שטחים",
            "name": "פלוני אלמוני",
            "number": "17",
            "offense": "אחר",
            "organization": "חמאס",
            "type": "עצור"
        });

        let record: Record = serde_json::from_value(payload).unwrap();
        assert_eq!(record.citizenship, Citizenship::No);
        assert_eq!(record.status, CustodyStatus::Detained);
        assert_eq!(record.organization, Organization::Hamas);
        assert_eq!(record.age_years().unwrap(), 34);
    }

    #[test]
    fn record_rejects_unknown_enum_value() {
        let payload = serde_json::json!({
            "age": "34",
            "arrest_date": "2023-10-08",
            "birth": "1989-05-01",
            "city": "שכם",
            "ciztizenship": "אולי",
            "duration": "במעצר",
            "court": "בית דין צבאי",
            "gender": "זכר",
            "id": "901234567",
            "id_type": "שטחים",
            "name": "פלוני אלמוני",
            "number": "17",
            "offense": "אחר",
            "organization": "חמאס",
            "type": "עצור"
        });

        assert!(serde_json::from_value::<Record>(payload).is_err());
    }

    #[test]
    fn id_type_keeps_padded_variant_distinct() {
        assert_ne!(IdType::Territories.as_str(), IdType::TerritoriesPadded.as_str());
        let padded: IdType = serde_json::from_value(serde_json::json!("שטחים ")).unwrap();
        assert_eq!(padded, IdType::TerritoriesPadded);
    }

    #[test]
    fn numeric_accessors_reject_free_text() {
        let record = record_with(|r| r.age = "לא ידוע".to_string());
        let err = record.age_years().unwrap_err();
        assert_eq!(err.field, "age");
    }
}
