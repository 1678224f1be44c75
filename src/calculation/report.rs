use crate::calculation::cost_breakdown::CostBreakdown;
use crate::calculation::validation_report::ValidationReport;
use crate::cli::OutputFormat;
use crate::prelude::*;

/// The pricing document: the breakdown plus where and when it came from.
#[derive(Debug, Serialize)]
pub struct PricingOutput {
    #[serde(flatten)]
    pub breakdown: CostBreakdown,

    /// The snapshot's collection time, passed through.
    pub calculation_date: String,

    pub days_in_period: u32,
}

/// The validation document: the report plus what was validated.
#[derive(Debug, Serialize)]
pub struct ValidationOutput {
    pub file: String,
    pub service: String,
    pub project_id: String,
    pub date_range: DateRange,
    pub validation: ValidationReport,
    pub passed: bool,

    /// RFC 3339, UTC.
    pub validation_time: String,
}

#[derive(Debug, Serialize)]
pub struct DateRange {
    pub start: String,
    pub end: String,
}

/// Whatever a command produced, ready to be rendered.
#[derive(Debug)]
pub enum Report {
    Cost(PricingOutput),
    Validation(ValidationOutput),
}

impl Report {
    pub fn render(&self, format: &OutputFormat, unformatted: bool) -> AppResult<String> {
        match format {
            OutputFormat::Json => self.render_json(unformatted),
            OutputFormat::Csv => self.render_csv(),
        }
    }

    fn render_json(&self, unformatted: bool) -> AppResult<String> {
        let json = match (self, unformatted) {
            (Report::Cost(output), true) => serde_json::to_string(output),
            (Report::Cost(output), false) => serde_json::to_string_pretty(output),
            (Report::Validation(output), true) => serde_json::to_string(output),
            (Report::Validation(output), false) => serde_json::to_string_pretty(output),
        };

        json.into_diagnostic()
            .wrap_err("Failed to serialize the report to JSON")
    }

    /// Two columns, no header. Numbers stay bare so the right column sorts.
    fn render_csv(&self) -> AppResult<String> {
        let rows = match self {
            Report::Cost(output) => cost_rows(&output.breakdown),
            Report::Validation(output) => validation_rows(output),
        };

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(vec![]);

        for row in rows {
            writer
                .serialize(row)
                .into_diagnostic()
                .wrap_err("Failed to serialize report row to CSV format")?;
        }

        let data = writer
            .into_inner()
            .into_diagnostic()
            .wrap_err("Failed to get writer data.")?;

        String::from_utf8(data)
            .into_diagnostic()
            .wrap_err("Invalid utf-8")
    }
}

#[derive(Serialize)]
struct CsvRow {
    key: String,
    value: String,
}

impl CsvRow {
    fn new(key: impl Into<String>, value: impl ToString) -> Self {
        CsvRow {
            key: key.into(),
            value: value.to_string(),
        }
    }
}

fn cost_rows(breakdown: &CostBreakdown) -> Vec<CsvRow> {
    let mut rows: Vec<CsvRow> = breakdown
        .components
        .iter()
        .map(|(category, cost)| CsvRow::new(*category, format!("{cost:.2}")))
        .collect();

    rows.push(CsvRow::new(
        "free_tier_savings",
        format!("{:.2}", breakdown.free_tier_savings),
    ));
    rows.push(CsvRow::new("total", format!("{:.2}", breakdown.total_cost)));

    rows
}

fn validation_rows(output: &ValidationOutput) -> Vec<CsvRow> {
    let report = &output.validation;

    let mut rows = vec![CsvRow::new("completeness_score", report.completeness_score)];

    rows.extend(report.missing_metrics.iter().map(|m| CsvRow::new("missing", m)));
    rows.extend(report.warnings.iter().map(|w| CsvRow::new("warning", w)));
    rows.extend(
        report
            .date_range_issues
            .iter()
            .map(|issue| CsvRow::new("date_range", issue)),
    );
    rows.push(CsvRow::new("passed", output.passed));

    rows
}
