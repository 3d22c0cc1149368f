//! End-to-end tests: collect a population through a fake fetcher, then run
//! the analyzers over it.

mod common;

use chrono::NaiveDate;
use remand_stats::analyzers::{
    arrests_since, AnalysisRunner, Analyzer, AnalyzerError, DistinctValuesAnalyzer,
    MetricValue, OrdinalCorrelationAnalyzer, ValueDistributionAnalyzer,
};
use remand_stats::core::{CustodyStatus, Field, Gender, Organization};
use remand_stats::sources::PaginatedCollector;

use common::{record_with, SliceFetcher};

fn mixed_population() -> Vec<remand_stats::core::Record> {
    vec![
        record_with(|r| {
            r.gender = Gender::Male;
            r.organization = Organization::Hamas;
            r.status = CustodyStatus::Detained;
            r.arrest_date = "2023-10-07".to_string();
        }),
        record_with(|r| {
            r.gender = Gender::Female;
            r.organization = Organization::Fatah;
            r.status = CustodyStatus::Sentenced;
            r.arrest_date = "2023-10-06".to_string();
        }),
        record_with(|r| {
            r.gender = Gender::Male;
            r.organization = Organization::Hamas;
            r.status = CustodyStatus::Detained;
            r.arrest_date = "2023-12-24".to_string();
        }),
        record_with(|r| {
            r.gender = Gender::Female;
            r.organization = Organization::Unaffiliated;
            r.status = CustodyStatus::Sentenced;
            r.arrest_date = "2019-02-11".to_string();
        }),
    ]
}

#[tokio::test]
async fn collected_population_flows_into_analyzers() {
    let collector = PaginatedCollector::with_stride(
        SliceFetcher {
            records: mixed_population(),
            page_size: 2,
        },
        2,
    )
    .unwrap();
    let records = collector.collect().await.unwrap();

    let context = AnalysisRunner::new()
        .add(DistinctValuesAnalyzer::of_interest())
        .add(ValueDistributionAnalyzer::new(Field::Gender))
        .add(OrdinalCorrelationAnalyzer::new(Field::Gender, Field::Status))
        .run(&records)
        .unwrap();

    assert_eq!(context.metadata().record_count, 4);
    assert_eq!(context.all_metrics().len(), 3);
}

#[test]
fn distinct_values_match_the_population() {
    let records = mixed_population();
    let analyzer = DistinctValuesAnalyzer::of_interest();
    let state = analyzer.compute_state(&records).unwrap();

    let organizations = state.for_field(Field::Organization).unwrap();
    assert_eq!(organizations.len(), 3);
    assert!(organizations.contains("חמאס"));
    assert!(organizations.contains("פת\"ח"));
    assert!(organizations.contains("ללא"));

    let genders = state.for_field(Field::Gender).unwrap();
    assert_eq!(genders.len(), 2);
}

#[test]
fn gender_distribution_is_an_even_split() {
    let records = mixed_population();
    let analyzer = ValueDistributionAnalyzer::new(Field::Gender);
    let metric = analyzer
        .metric_from_state(&analyzer.compute_state(&records).unwrap())
        .unwrap();

    let percentages = match metric {
        MetricValue::Frequencies(map) => map,
        other => panic!("expected Frequencies, got {other:?}"),
    };
    assert_eq!(percentages["זכר"], 50.0);
    assert_eq!(percentages["נקבה"], 50.0);
    assert!((percentages.values().sum::<f64>() - 100.0).abs() < 1e-9);
}

#[test]
fn arrest_filter_is_boundary_inclusive_over_the_population() {
    let records = mixed_population();
    let threshold = NaiveDate::from_ymd_opt(2023, 10, 7).unwrap();

    let kept = arrests_since(&records, threshold).unwrap();
    let dates: Vec<&str> = kept.iter().map(|r| r.arrest_date.as_str()).collect();
    assert_eq!(dates, ["2023-10-07", "2023-12-24"]);
}

#[test]
fn gender_status_correlation_is_perfect_in_this_population() {
    // Gender and custody status are in bijection in the fixture.
    let records = mixed_population();
    let analyzer = OrdinalCorrelationAnalyzer::new(Field::Gender, Field::Status);
    let r = analyzer
        .metric_from_state(&analyzer.compute_state(&records).unwrap())
        .unwrap()
        .as_f64()
        .unwrap();
    assert!((r - 1.0).abs() < 1e-12);
}

#[test]
fn degenerate_and_empty_populations_fail_loudly() {
    let single_gender: Vec<_> = (0..3)
        .map(|_| record_with(|r| r.gender = Gender::Male))
        .collect();

    let correlation = OrdinalCorrelationAnalyzer::new(Field::Gender, Field::Status);
    let state = correlation.compute_state(&single_gender).unwrap();
    assert!(matches!(
        correlation.metric_from_state(&state).unwrap_err(),
        AnalyzerError::DegenerateInput { .. }
    ));

    let distribution = ValueDistributionAnalyzer::new(Field::Organization);
    let state = distribution.compute_state(&[]).unwrap();
    assert!(matches!(
        distribution.metric_from_state(&state).unwrap_err(),
        AnalyzerError::EmptyPopulation { .. }
    ));
}

#[test]
fn analyses_share_no_state_between_passes() {
    // Running one analyzer must not affect another's result over the same
    // slice, in any order.
    let records = mixed_population();

    let distribution = ValueDistributionAnalyzer::new(Field::Organization);
    let before = distribution
        .metric_from_state(&distribution.compute_state(&records).unwrap())
        .unwrap();

    let correlation = OrdinalCorrelationAnalyzer::new(Field::Organization, Field::Status);
    let _ = correlation
        .metric_from_state(&correlation.compute_state(&records).unwrap())
        .unwrap();

    let after = distribution
        .metric_from_state(&distribution.compute_state(&records).unwrap())
        .unwrap();
    assert_eq!(before, after);
}
