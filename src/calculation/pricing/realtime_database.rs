use super::PricingFormula;
use super::charge::{format_count, usage};
use crate::calculation::cost_breakdown::{BreakdownBuilder, CostBreakdown, Quantity};
use crate::config::pricing_table::RealtimeDatabaseRates;
use crate::io::snapshot_dtos::MetricsSnapshot;
use crate::service::Service;

/// Both allowances are flat for the month, bandwidth included.
///
/// API hits are reported but not priced, their traffic already shows up as bandwidth.
impl PricingFormula for RealtimeDatabaseRates {
    fn price(&self, snapshot: &MetricsSnapshot, period_days: u32) -> CostBreakdown {
        let storage = self.storage.charge(snapshot, period_days);
        let bandwidth = self.bandwidth.charge(snapshot, period_days);
        let api_hits = usage(snapshot, self.api_hits_metric);

        BreakdownBuilder::new(Service::RealtimeDatabase)
            .component("storage", &storage)
            .component("bandwidth", &bandwidth)
            .usage("storage_gb", Quantity::amount(storage.billable, 2))
            .usage("bandwidth_gb", Quantity::amount(bandwidth.billable, 2))
            .usage("api_hits", Quantity::count(api_hits))
            .note(format!(
                "Storage: {:.2} GB ({:.2} GB billable after {} GB free)",
                storage.raw, storage.billable, storage.allowance
            ))
            .note(format!(
                "Bandwidth: {:.2} GB ({:.2} GB billable after {} GB free)",
                bandwidth.raw, bandwidth.billable, bandwidth.allowance
            ))
            .note(format!(
                "API hits: {} (included in bandwidth cost)",
                format_count(api_hits)
            ))
            .build()
    }
}
