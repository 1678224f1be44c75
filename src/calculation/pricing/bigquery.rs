use super::PricingFormula;
use super::charge::{format_count, usage};
use crate::calculation::cost_breakdown::{BreakdownBuilder, CostBreakdown, Quantity};
use crate::config::pricing_table::BigQueryRates;
use crate::io::snapshot_dtos::MetricsSnapshot;
use crate::service::Service;

/// Active storage plus on-demand scanning. No free tier is deducted.
impl PricingFormula for BigQueryRates {
    fn price(&self, snapshot: &MetricsSnapshot, period_days: u32) -> CostBreakdown {
        let storage = self.storage.charge(snapshot, period_days);
        let queries = self.queries.charge(snapshot, period_days);
        let query_count = usage(snapshot, self.query_count_metric);

        BreakdownBuilder::new(Service::BigQuery)
            .component("storage", &storage)
            .component("queries", &queries)
            .usage("stored_tb", Quantity::amount(storage.billable, 3))
            .usage("scanned_tb", Quantity::amount(queries.billable, 3))
            .usage("query_count", Quantity::count(query_count))
            .note(format!("Storage: {:.3} TB", storage.raw))
            .note(format!(
                "Queries: {} queries scanning {:.3} TB",
                format_count(query_count),
                queries.raw
            ))
            .note(format!(
                "First {} GB of queries per month are free (not deducted here)",
                self.undeducted_free_scan_gb
            ))
            .build()
    }
}
