//! Collects the full dataset and correlates organizational affiliation
//! with custody status, alongside the status distribution.

use remand_stats::analyzers::{
    AnalysisRunner, OrdinalCorrelationAnalyzer, ValueDistributionAnalyzer,
};
use remand_stats::core::Field;
use remand_stats::logging::{init_logging, LoggingConfig};
use remand_stats::sources::{GovCollectorClient, PaginatedCollector};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging(&LoggingConfig::default())?;

    let client = GovCollectorClient::new()?;
    let collector = PaginatedCollector::new(client);
    let records = collector.collect().await?;

    let context = AnalysisRunner::new()
        .add(ValueDistributionAnalyzer::new(Field::Status))
        .add(OrdinalCorrelationAnalyzer::new(
            Field::Organization,
            Field::Status,
        ))
        .on_progress(|fraction| println!("progress: {:.0}%", fraction * 100.0))
        .run(&records)?;

    for (key, metric) in context.all_metrics() {
        println!("{key}: {metric}");
    }

    Ok(())
}
