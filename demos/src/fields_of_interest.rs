//! Collects the full dataset and prints the distinct values observed for
//! each categorical field of interest.

use remand_stats::analyzers::{Analyzer, DistinctValuesAnalyzer};
use remand_stats::logging::{init_logging, LoggingConfig};
use remand_stats::sources::{GovCollectorClient, PaginatedCollector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::default())?;

    let client = GovCollectorClient::new()?;
    let collector = PaginatedCollector::new(client);
    let records = collector.collect().await?;
    println!("collected {} records", records.len());

    let analyzer = DistinctValuesAnalyzer::of_interest();
    let state = analyzer.compute_state(&records)?;

    for (field, values) in &state.values {
        println!("{field}:");
        for value in values {
            println!("  {value}");
        }
    }

    Ok(())
}
