//! Shared fixtures for integration tests.
#![allow(dead_code)]

use async_trait::async_trait;
use remand_stats::core::{
    Citizenship, Court, CustodyStatus, Duration, Gender, IdType, Organization, Record,
};
use remand_stats::sources::{Page, PageFetcher, SourceResult};

/// A well-formed baseline record.
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

/// A numbered population of `count` records.
pub fn population(count: usize) -> Vec<Record> {
    (0..count)
        .map(|i| record_with(|r| r.number = i.to_string()))
        .collect()
}

/// Serves a fixed record list in pages of `page_size`, like the remote
/// collector does.
#[derive(Debug)]
pub struct SliceFetcher {
    pub records: Vec<Record>,
    pub page_size: usize,
}

#[async_trait]
impl PageFetcher for SliceFetcher {
    async fn fetch_page(&self, offset: usize) -> SourceResult<Page> {
        let start = offset.min(self.records.len());
        let end = (offset + self.page_size).min(self.records.len());
        Ok(Page {
            records: self.records[start..end].to_vec(),
            raw_total: self.records.len() as u64,
        })
    }
}
