use itertools::Itertools;

use crate::config::pricing_table::MeteredRate;
use crate::io::snapshot_dtos::{MetricValue, MetricsSnapshot};

/// One metered line, worked out. All quantities are in the rate's unit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Charge {
    pub raw: f64,
    pub allowance: f64,
    /// `raw - allowance`, floored at zero.
    pub billable: f64,
    pub cost: f64,
    /// The price of the part of `raw` the free tier covered.
    pub savings: f64,
}

impl MeteredRate {
    pub fn charge(&self, snapshot: &MetricsSnapshot, period_days: u32) -> Charge {
        let raw = self.unit.convert(usage(snapshot, self.metric));
        let allowance = self
            .free_tier
            .map(|tier| tier.allowance(period_days))
            .unwrap_or(0.0);

        let billable = (raw - allowance).max(0.0);
        let covered = raw.min(allowance).max(0.0);

        Charge {
            raw,
            allowance,
            billable,
            cost: self.cost_of(billable),
            savings: self.cost_of(covered),
        }
    }

    fn cost_of(&self, quantity: f64) -> f64 {
        (quantity / self.per) * self.price
    }
}

/// Reads a metric for pricing. Absent and null both count as zero usage.
pub fn usage(snapshot: &MetricsSnapshot, metric: &str) -> f64 {
    let value = snapshot.metric(metric);

    if !matches!(value, MetricValue::Present(_)) {
        // Unvalidated input can under-report cost here.
        tracing::warn!(metric, state = ?value, "Metric priced as zero usage");
    }

    value.or_zero()
}

/// Rounds the exact binary value to `places` decimals, ties to even, the way invoices do.
///
/// Scaling by 10^places first would turn 0.07499999... into 0.075 and round it up.
pub fn round_to(value: f64, places: usize) -> f64 {
    // A formatted f64 always parses back.
    format!("{value:.places$}").parse().unwrap_or(value)
}

pub fn round_cents(value: f64) -> f64 {
    round_to(value, 2)
}

/// Whole number with thousands separators, e.g. `1,500,000`.
pub fn format_count(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let digits = (value.abs().trunc() as u64).to_string();

    let grouped = digits
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| String::from_utf8_lossy(chunk))
        .join(",");

    format!("{sign}{grouped}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::pricing_table::{FreeTier, Unit};
    use serde_json::Value;

    const RATE: MeteredRate = MeteredRate {
        metric: "m",
        unit: Unit::Count,
        price: 0.06,
        per: 100_000.0,
        free_tier: Some(FreeTier::Daily(50_000.0)),
    };

    fn snapshot_with(value: Option<f64>) -> MetricsSnapshot {
        let mut snapshot = MetricsSnapshot::default();
        snapshot
            .metrics
            .insert("m".to_owned(), value.map_or(Value::Null, Value::from));
        snapshot
    }

    #[test]
    fn usage_below_allowance_is_free() {
        let charge = RATE.charge(&snapshot_with(Some(40_000.0)), 1);

        assert_eq!(charge.billable, 0.0);
        assert_eq!(charge.cost, 0.0);
        assert_eq!(round_cents(charge.savings), 0.02);
    }

    #[test]
    fn savings_are_capped_at_the_allowance() {
        let charge = RATE.charge(&snapshot_with(Some(10_000_000.0)), 1);

        assert_eq!(charge.billable, 9_950_000.0);
        assert_eq!(round_cents(charge.savings), 0.03);
    }

    #[test]
    fn null_and_missing_are_zero_usage() {
        assert_eq!(RATE.charge(&snapshot_with(None), 30).raw, 0.0);
        assert_eq!(RATE.charge(&MetricsSnapshot::default(), 30).raw, 0.0);
    }

    #[test]
    fn non_numeric_values_are_zero_usage() {
        let mut snapshot = MetricsSnapshot::default();
        snapshot.metrics.insert("m".to_owned(), Value::from("12"));

        assert_eq!(RATE.charge(&snapshot, 1).raw, 0.0);
    }

    #[test]
    fn cost_never_decreases_as_usage_grows() {
        let mut previous = 0.0;

        for step in 0..200 {
            let raw = f64::from(step) * 25_000.0;
            let cost = round_cents(RATE.charge(&snapshot_with(Some(raw)), 30).cost);

            assert!(cost >= previous, "cost dropped at raw={raw}");
            previous = cost;
        }
    }

    #[test]
    fn negative_usage_never_bills() {
        let charge = RATE.charge(&snapshot_with(Some(-5.0)), 1);

        assert_eq!(charge.billable, 0.0);
        assert_eq!(charge.savings, 0.0);
    }

    #[test]
    fn rounds_the_exact_value_to_the_nearest_cent() {
        // 1.25 * 0.06 is stored just below 0.075.
        assert_eq!(round_cents(1.25 * 0.06), 0.07);
        assert_eq!(round_cents(2.675), 2.67);
        assert_eq!(round_to(0.12345, 3), 0.123);
    }

    #[test]
    fn exact_ties_go_to_even() {
        assert_eq!(round_cents(0.125), 0.12);
        assert_eq!(round_cents(0.375), 0.38);
    }

    #[test]
    fn counts_get_thousands_separators() {
        assert_eq!(format_count(0.0), "0");
        assert_eq!(format_count(999.0), "999");
        assert_eq!(format_count(1_500_000.0), "1,500,000");
        assert_eq!(format_count(-12_345.7), "-12,345");
    }
}
