use crate::calculation::cost_breakdown::CostBreakdown;
use crate::config::pricing_table::PricingTable;
use crate::error::Error;
use crate::io::snapshot_dtos::MetricsSnapshot;
use crate::prelude::*;
use crate::service::{Service, ServiceTag};

pub mod bigquery;
pub mod charge;
pub mod firestore;
pub mod functions;
pub mod realtime_database;

/// A service-specific billing formula.
///
/// Formulas do not validate. Missing or null metrics are priced as zero usage, so run the
/// validator first and distrust the result when it did not pass.
pub trait PricingFormula {
    fn price(&self, snapshot: &MetricsSnapshot, period_days: u32) -> CostBreakdown;
}

impl PricingTable {
    /// The formula registry. `None` for services that only have a validation schema.
    pub fn formula(&self, service: Service) -> Option<&dyn PricingFormula> {
        match service {
            Service::Firestore => Some(&self.firestore),
            Service::RealtimeDatabase => Some(&self.realtime_database),
            Service::Functions => Some(&self.functions),
            Service::BigQuery => Some(&self.bigquery),
            Service::CloudStorage | Service::CloudRun => None,
        }
    }
}

/// Prices a snapshot over a billing period of `period_days`.
pub fn price(
    snapshot: &MetricsSnapshot,
    period_days: u32,
    table: &PricingTable,
) -> AppResult<CostBreakdown> {
    let service = match &snapshot.service {
        ServiceTag::Known(service) => *service,
        ServiceTag::Unrecognized(tag) => return Err(Error::UnknownService(tag.clone()).into()),
    };

    let formula = table
        .formula(service)
        .ok_or_else(|| Error::PricingNotImplemented(service.to_string()))?;

    Ok(formula.price(snapshot, period_days))
}
