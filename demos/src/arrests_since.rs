//! Collects the full dataset and reports how many arrests happened on or
//! after October 7th, 2023.

use chrono::NaiveDate;
use remand_stats::analyzers::arrests_since;
use remand_stats::logging::{init_logging, LoggingConfig};
use remand_stats::sources::{GovCollectorClient, PaginatedCollector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::default())?;

    let client = GovCollectorClient::new()?;
    let collector = PaginatedCollector::new(client);
    let records = collector.collect().await?;

    let threshold = NaiveDate::from_ymd_opt(2023, 10, 7).expect("valid threshold date");
    let recent = arrests_since(&records, threshold)?;

    println!(
        "{} of {} records have an arrest date on or after {threshold}",
        recent.len(),
        records.len()
    );

    Ok(())
}
