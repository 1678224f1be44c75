use crate::calculation::validation_report::{MetricIssue, MetricWarning, ValidationReport};
use crate::config::schema_table::SchemaTable;
use crate::io::snapshot_dtos::{MetricValue, MetricsSnapshot};
use crate::service::ServiceTag;

pub mod date_range;

/// Checks a snapshot for completeness.
///
/// Never fails. Everything wrong with the snapshot ends up in the report, and the caller
/// decides what a failed report means.
pub fn validate(snapshot: &MetricsSnapshot, schemas: &SchemaTable) -> ValidationReport {
    let (completeness_score, missing_metrics, warnings) = check_metrics(snapshot, schemas);

    let date_range_issues = date_range::check(
        snapshot.start_date.as_deref(),
        snapshot.end_date.as_deref(),
    );

    let report = ValidationReport::new(
        completeness_score,
        missing_metrics,
        warnings,
        date_range_issues,
    );

    tracing::info!(
        service = %snapshot.service,
        score = report.completeness_score,
        missing = report.missing_metrics.len(),
        warnings = report.warnings.len(),
        date_issues = report.date_range_issues.len(),
        passed = report.passed,
        "Validated snapshot"
    );

    report
}

fn check_metrics(
    snapshot: &MetricsSnapshot,
    schemas: &SchemaTable,
) -> (u8, Vec<MetricIssue>, Vec<MetricWarning>) {
    let required = match &snapshot.service {
        ServiceTag::Known(service) => schemas.required_for(*service).unwrap_or_default(),
        ServiceTag::Unrecognized(_) => &[][..],
    };

    // No schema, nothing to divide by.
    if required.is_empty() {
        let issue = MetricIssue::UnknownService(snapshot.service.to_string());

        return (0, vec![issue], vec![]);
    }

    let mut missing = vec![];
    let mut warnings = vec![];

    for &key in required {
        match snapshot.metric(key) {
            MetricValue::Missing => missing.push(MetricIssue::Missing(key.to_owned())),
            MetricValue::Null => missing.push(MetricIssue::Null(key.to_owned())),
            MetricValue::Present(value) if value == 0.0 => {
                warnings.push(MetricWarning::Zero(key.to_owned()))
            }
            // Not a number, but reported. Counts as present.
            MetricValue::Present(_) | MetricValue::NonNumeric => {}
        }
    }

    (completeness_score(required.len(), missing.len()), missing, warnings)
}

/// Percentage of required keys satisfied, truncated toward zero.
fn completeness_score(expected: usize, missing: usize) -> u8 {
    if expected == 0 {
        return 0;
    }

    let satisfied = expected.saturating_sub(missing);

    // At most 100, so the cast is lossless.
    (satisfied * 100 / expected) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::metric_keys::*;
    use crate::config::schema_table::SCHEMAS;
    use crate::service::Service;
    use serde_json::Value;

    fn snapshot(service: &str, metrics: &[(&str, Option<f64>)]) -> MetricsSnapshot {
        MetricsSnapshot {
            service: ServiceTag::from(service.to_owned()),
            start_date: Some("2024-01-01T00:00:00Z".to_owned()),
            end_date: Some("2024-02-01T00:00:00Z".to_owned()),
            metrics: metrics
                .iter()
                .map(|(key, value)| (key.to_string(), value.map_or(Value::Null, Value::from)))
                .collect(),
            ..MetricsSnapshot::default()
        }
    }

    #[test]
    fn complete_snapshot_passes() {
        let report = validate(
            &snapshot(
                "bigquery",
                &[
                    (BIGQUERY_STORED_BYTES, Some(10.0)),
                    (BIGQUERY_QUERY_COUNT, Some(3.0)),
                    (BIGQUERY_SCANNED_BYTES, Some(99.0)),
                ],
            ),
            &SCHEMAS,
        );

        assert_eq!(report.completeness_score, 100);
        assert!(report.missing_metrics.is_empty());
        assert!(report.warnings.is_empty());
        assert!(report.date_range_issues.is_empty());
        assert!(report.passed);
    }

    #[test]
    fn missing_and_null_are_tagged_apart() {
        let report = validate(
            &snapshot(
                "firestore",
                &[
                    (FIRESTORE_READS, Some(1.0)),
                    (FIRESTORE_WRITES, None),
                    (FIRESTORE_STORAGE_BYTES, Some(1.0)),
                ],
            ),
            &SCHEMAS,
        );

        assert_eq!(
            report.missing_metrics,
            vec![
                MetricIssue::Null(FIRESTORE_WRITES.to_owned()),
                MetricIssue::Missing(FIRESTORE_DELETES.to_owned()),
            ]
        );
        assert_eq!(report.completeness_score, 50);
        assert!(!report.passed);
    }

    #[test]
    fn zero_values_warn_without_lowering_the_score() {
        let report = validate(
            &snapshot(
                "firestore",
                &[
                    (FIRESTORE_READS, Some(2_000_000.0)),
                    (FIRESTORE_WRITES, Some(100_000.0)),
                    (FIRESTORE_DELETES, Some(0.0)),
                    (FIRESTORE_STORAGE_BYTES, Some(2_147_483_648.0)),
                ],
            ),
            &SCHEMAS,
        );

        assert_eq!(report.completeness_score, 100);
        assert_eq!(
            report.warnings,
            vec![MetricWarning::Zero(FIRESTORE_DELETES.to_owned())]
        );
        assert!(report.passed);
    }

    #[test]
    fn non_numeric_values_count_as_present() {
        let mut input = snapshot(
            "bigquery",
            &[
                (BIGQUERY_STORED_BYTES, Some(10.0)),
                (BIGQUERY_SCANNED_BYTES, Some(99.0)),
            ],
        );
        input
            .metrics
            .insert(BIGQUERY_QUERY_COUNT.to_owned(), Value::from("12"));

        let report = validate(&input, &SCHEMAS);

        assert_eq!(report.completeness_score, 100);
        assert!(report.missing_metrics.is_empty());
        assert!(report.warnings.is_empty());
        assert!(report.passed);
    }

    #[test]
    fn synonyms_use_the_canonical_schema() {
        let report = validate(
            &snapshot(
                "realtime-db",
                &[
                    (RTDB_BANDWIDTH_BYTES, Some(1.0)),
                    (RTDB_STORAGE_BYTES, Some(1.0)),
                ],
            ),
            &SCHEMAS,
        );

        assert_eq!(report.completeness_score, 66);
        assert_eq!(
            report.missing_metrics,
            vec![MetricIssue::Missing(RTDB_API_HITS.to_owned())]
        );
    }

    #[test]
    fn unknown_service_scores_zero_but_still_checks_dates() {
        let mut input = snapshot("unknown", &[]);
        input.start_date = None;

        let report = validate(&input, &SCHEMAS);

        assert_eq!(report.completeness_score, 0);
        assert_eq!(
            report.missing_metrics,
            vec![MetricIssue::UnknownService("unknown".to_owned())]
        );
        assert_eq!(report.date_range_issues.len(), 1);
        assert!(!report.passed);
    }

    #[test]
    fn schema_only_services_validate_too() {
        let report = validate(&snapshot("cloudrun", &[]), &SCHEMAS);

        assert_eq!(report.completeness_score, 0);
        assert_eq!(
            report.missing_metrics.len(),
            SCHEMAS.required_for(Service::CloudRun).unwrap().len()
        );
    }

    #[test]
    fn score_truncates_toward_zero() {
        assert_eq!(completeness_score(3, 0), 100);
        assert_eq!(completeness_score(3, 1), 66);
        assert_eq!(completeness_score(3, 2), 33);
        assert_eq!(completeness_score(4, 1), 75);
        assert_eq!(completeness_score(4, 4), 0);
        assert_eq!(completeness_score(0, 0), 0);
    }
}
