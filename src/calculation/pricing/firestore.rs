use super::PricingFormula;
use super::charge::{Charge, format_count};
use crate::calculation::cost_breakdown::{BreakdownBuilder, CostBreakdown, Quantity};
use crate::config::pricing_table::FirestoreRates;
use crate::io::snapshot_dtos::MetricsSnapshot;
use crate::service::Service;

/// Document store. Daily allowances on operations, a flat one on storage.
impl PricingFormula for FirestoreRates {
    fn price(&self, snapshot: &MetricsSnapshot, period_days: u32) -> CostBreakdown {
        let reads = self.reads.charge(snapshot, period_days);
        let writes = self.writes.charge(snapshot, period_days);
        let deletes = self.deletes.charge(snapshot, period_days);
        let storage = self.storage.charge(snapshot, period_days);

        BreakdownBuilder::new(Service::Firestore)
            .component("reads", &reads)
            .component("writes", &writes)
            .component("deletes", &deletes)
            .component("storage", &storage)
            .usage("reads", Quantity::count(reads.billable))
            .usage("writes", Quantity::count(writes.billable))
            .usage("deletes", Quantity::count(deletes.billable))
            .usage("storage_gib", Quantity::amount(storage.billable, 2))
            .note(operations_note("reads", &reads))
            .note(operations_note("writes", &writes))
            .note(operations_note("deletes", &deletes))
            .note(format!(
                "Storage: {:.2} GiB ({:.2} GiB billable after {} GiB free)",
                storage.raw, storage.billable, storage.allowance
            ))
            .build()
    }
}

fn operations_note(label: &str, charge: &Charge) -> String {
    format!(
        "Total {label}: {} ({} billable after {} free)",
        format_count(charge.raw),
        format_count(charge.billable),
        format_count(charge.allowance)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::cost_breakdown::Quantity;
    use crate::config::metric_keys::*;
    use crate::config::pricing_table::PRICING;

    const GIB: f64 = 1024.0 * 1024.0 * 1024.0;

    fn snapshot(reads: f64, writes: f64, deletes: f64, storage_bytes: f64) -> MetricsSnapshot {
        let mut snapshot = MetricsSnapshot::default();
        for (key, value) in [
            (FIRESTORE_READS, reads),
            (FIRESTORE_WRITES, writes),
            (FIRESTORE_DELETES, deletes),
            (FIRESTORE_STORAGE_BYTES, storage_bytes),
        ] {
            snapshot.metrics.insert(key.to_owned(), value.into());
        }
        snapshot
    }

    #[test]
    fn thirty_day_month_with_reads_over_the_free_tier() {
        let breakdown = PRICING
            .firestore
            .price(&snapshot(2_000_000.0, 100_000.0, 0.0, 2.0 * GIB), 30);

        assert_eq!(breakdown.components["reads"], 0.30);
        assert_eq!(breakdown.components["writes"], 0.0);
        assert_eq!(breakdown.components["deletes"], 0.0);
        assert_eq!(breakdown.components["storage"], 0.18);
        assert_eq!(breakdown.total_cost, 0.48);

        assert_eq!(breakdown.billable_usage["reads"], Quantity::Count(500_000));
        assert_eq!(breakdown.billable_usage["writes"], Quantity::Count(0));
        assert_eq!(breakdown.billable_usage["storage_gib"], Quantity::Amount(1.0));

        // 1.5M free reads, 100k writes all free, 1 GiB free storage.
        assert_eq!(breakdown.free_tier_savings, 1.26);
    }

    #[test]
    fn notes_show_raw_billable_and_free() {
        let breakdown = PRICING
            .firestore
            .price(&snapshot(2_000_000.0, 100_000.0, 0.0, 2.0 * GIB), 30);

        assert_eq!(
            breakdown.pricing_notes[0],
            "Total reads: 2,000,000 (500,000 billable after 1,500,000 free)"
        );
        assert_eq!(
            breakdown.pricing_notes[3],
            "Storage: 2.00 GiB (1.00 GiB billable after 1 GiB free)"
        );
    }

    #[test]
    fn cent_ties_round_like_the_invoice() {
        // 125,000 billable reads cost 0.075, stored just below the tie.
        let breakdown = PRICING.firestore.price(&snapshot(1_625_000.0, 0.0, 0.0, 0.0), 30);

        assert_eq!(breakdown.billable_usage["reads"], Quantity::Count(125_000));
        assert_eq!(breakdown.components["reads"], 0.07);
        assert_eq!(breakdown.total_cost, 0.07);
    }

    #[test]
    fn shorter_periods_shrink_the_daily_allowance() {
        let month = PRICING.firestore.price(&snapshot(1_500_000.0, 0.0, 0.0, 0.0), 30);
        let week = PRICING.firestore.price(&snapshot(1_500_000.0, 0.0, 0.0, 0.0), 7);

        assert_eq!(month.components["reads"], 0.0);
        assert_eq!(week.components["reads"], 0.69);
    }
}
