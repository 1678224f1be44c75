use super::PricingFormula;
use super::charge::format_count;
use crate::calculation::cost_breakdown::{BreakdownBuilder, CostBreakdown, Quantity};
use crate::config::pricing_table::FunctionsRates;
use crate::io::snapshot_dtos::MetricsSnapshot;
use crate::service::Service;

/// Invocations only. Compute time, memory and egress are not modeled, and the provider's
/// free invocations are not deducted. The notes say so.
impl PricingFormula for FunctionsRates {
    fn price(&self, snapshot: &MetricsSnapshot, period_days: u32) -> CostBreakdown {
        let invocations = self.invocations.charge(snapshot, period_days);

        BreakdownBuilder::new(Service::Functions)
            .component("invocations", &invocations)
            .usage("executions", Quantity::count(invocations.billable))
            .note(format!("Executions: {}", format_count(invocations.raw)))
            .notes([
                "WARNING: This is approximate. Actual costs depend on:",
                "  - Memory allocation",
                "  - CPU time",
                "  - Network egress",
                "  - Always-on instances (minInstances > 0)",
            ])
            .note(format!(
                "Free tier of {} invocations per month is not deducted",
                format_count(self.undeducted_free_invocations as f64)
            ))
            .note("Check Cloud Functions billing for exact breakdown.")
            .build()
    }
}
