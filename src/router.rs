use std::path::Path;
use std::process::ExitCode;

use crate::app::App;
use crate::calculation::pricing::price;
use crate::calculation::report::{DateRange, PricingOutput, Report, ValidationOutput};
use crate::calculation::validation::validate;
use crate::cli::{Commands, PriceArgs, ValidateArgs};
use crate::io::snapshot_dtos::MetricsSnapshot;
use crate::io::snapshot_file;
use crate::prelude::*;

/// A failed validation is an expected result, kept apart from error exits (1).
const VALIDATION_FAILED: u8 = 2;

/// What main prints, and how the process ends.
pub struct Outcome {
    pub report: Report,
    pub exit_code: ExitCode,
}

/// Runs the requested command. Pricing and validation never call each other.
pub fn dispatch(ctx: &App) -> AppResult<Outcome> {
    match &ctx.cli.command {
        // billcheck price.
        Commands::Price(PriceArgs { file, days }) => {
            let snapshot = snapshot_file::load(file)?;
            let breakdown = price(&snapshot, *days, ctx.pricing)?;

            let output = PricingOutput {
                breakdown,
                calculation_date: or_unknown(snapshot.collection_time),
                days_in_period: *days,
            };

            Ok(Outcome {
                report: Report::Cost(output),
                exit_code: ExitCode::SUCCESS,
            })
        }

        // billcheck validate.
        Commands::Validate(ValidateArgs { file }) => {
            let snapshot = snapshot_file::load(file)?;
            let output = validation_output(file, snapshot, ctx);

            let exit_code = if output.passed {
                ExitCode::SUCCESS
            } else {
                ExitCode::from(VALIDATION_FAILED)
            };

            Ok(Outcome {
                report: Report::Validation(output),
                exit_code,
            })
        }
    }
}

fn validation_output(file: &Path, snapshot: MetricsSnapshot, ctx: &App) -> ValidationOutput {
    let validation = validate(&snapshot, ctx.schemas);

    ValidationOutput {
        file: file.display().to_string(),
        service: snapshot.service.to_string(),
        project_id: or_unknown(snapshot.project_id),
        date_range: DateRange {
            start: or_unknown(snapshot.start_date),
            end: or_unknown(snapshot.end_date),
        },
        passed: validation.passed,
        validation,
        validation_time: jiff::Timestamp::now().to_string(),
    }
}

fn or_unknown(value: Option<String>) -> String {
    value.unwrap_or_else(|| "unknown".to_owned())
}
