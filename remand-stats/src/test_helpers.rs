//! Shared helpers for unit tests.

use crate::core::{
    Citizenship, Court, CustodyStatus, Duration, Gender, IdType, Organization, Record,
};

/// A well-formed baseline record for tests.
pub fn sample_record() -> Record {
    Record {
        age: "30".to_string(),
        arrest_date: "2023-10-07".to_string(),
        birth: "1993-04-18".to_string(),
        city: "חברון".to_string(),
        citizenship: Citizenship::No,
        duration: Duration::InCustody,
        court: Court::Military,
        gender: Gender::Male,
        id: "850123456".to_string(),
        id_type: IdType::Territories,
        name: "פלוני אלמוני".to_string(),
        number: "1".to_string(),
        offense: "אחר".to_string(),
        organization: Organization::Unaffiliated,
        status: CustodyStatus::Detained,
    }
}

/// A baseline record with selected fields overridden.
pub fn record_with(mutate: impl FnOnce(&mut Record)) -> Record {
    let mut record = sample_record();
    mutate(&mut record);
    record
}
