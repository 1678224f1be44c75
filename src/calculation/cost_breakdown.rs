use std::collections::BTreeMap;

use crate::calculation::pricing::charge::{Charge, round_cents, round_to};
use crate::prelude::*;
use crate::service::Service;

/// What one snapshot costs, and how we got there.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostBreakdown {
    pub service: String,

    /// Sum of `components`, in dollars, rounded to cents.
    pub total_cost: f64,

    /// Cost category to rounded cost. The categories are fixed per service.
    pub components: BTreeMap<&'static str, f64>,

    /// What the free allowances would have cost. Never negative.
    pub free_tier_savings: f64,

    /// Usage actually charged, after free tiers.
    pub billable_usage: BTreeMap<&'static str, Quantity>,

    /// Raw vs. billable usage per category, then caveats.
    pub pricing_notes: Vec<String>,
}

/// A usage figure in `billable_usage`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Quantity {
    /// Whole events (reads, executions, hits).
    Count(u64),
    /// Byte-derived quantities, already rounded.
    Amount(f64),
}

impl Quantity {
    /// Truncates toward zero. Anything negative reads as zero.
    pub fn count(value: f64) -> Self {
        Quantity::Count(value.max(0.0) as u64)
    }

    pub fn amount(value: f64, places: usize) -> Self {
        Quantity::Amount(round_to(value, places))
    }
}

/// Accumulates the priced lines of a single formula.
pub struct BreakdownBuilder {
    service: Service,
    components: BTreeMap<&'static str, f64>,
    savings: f64,
    billable_usage: BTreeMap<&'static str, Quantity>,
    notes: Vec<String>,
}

impl BreakdownBuilder {
    pub fn new(service: Service) -> Self {
        BreakdownBuilder {
            service,
            components: BTreeMap::new(),
            savings: 0.0,
            billable_usage: BTreeMap::new(),
            notes: vec![],
        }
    }

    /// Adds a cost category. Each component is rounded on the way in, like the invoice does.
    pub fn component(mut self, category: &'static str, charge: &Charge) -> Self {
        tracing::debug!(
            service = %self.service,
            category,
            raw = charge.raw,
            allowance = charge.allowance,
            billable = charge.billable,
            cost = charge.cost,
            "Priced component"
        );

        self.components.insert(category, round_cents(charge.cost));
        self.savings += charge.savings;

        self
    }

    pub fn usage(mut self, category: &'static str, quantity: Quantity) -> Self {
        self.billable_usage.insert(category, quantity);

        self
    }

    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());

        self
    }

    pub fn notes<I, S>(mut self, notes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.notes.extend(notes.into_iter().map(Into::into));

        self
    }

    pub fn build(self) -> CostBreakdown {
        // Sum of the rounded parts, so the total never disagrees with them.
        let total_cost = round_cents(self.components.values().sum());

        CostBreakdown {
            service: self.service.canonical_tag().to_owned(),
            total_cost,
            components: self.components,
            free_tier_savings: round_cents(self.savings),
            billable_usage: self.billable_usage,
            pricing_notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn charge(cost: f64, savings: f64) -> Charge {
        Charge {
            raw: 0.0,
            allowance: 0.0,
            billable: 0.0,
            cost,
            savings,
        }
    }

    #[test]
    fn total_is_the_sum_of_rounded_components() {
        let breakdown = BreakdownBuilder::new(Service::Firestore)
            .component("a", &charge(0.004, 0.0))
            .component("b", &charge(0.004, 0.0))
            .component("c", &charge(0.126, 0.0))
            .build();

        assert_eq!(breakdown.components["a"], 0.0);
        assert_eq!(breakdown.components["c"], 0.13);
        assert_eq!(breakdown.total_cost, 0.13);
    }

    #[test]
    fn savings_are_summed_then_rounded() {
        let breakdown = BreakdownBuilder::new(Service::Firestore)
            .component("a", &charge(0.0, 0.004))
            .component("b", &charge(0.0, 0.004))
            .build();

        assert_eq!(breakdown.free_tier_savings, 0.01);
    }

    #[test]
    fn quantities_serialize_as_plain_numbers() {
        let breakdown = BreakdownBuilder::new(Service::BigQuery)
            .usage("count", Quantity::count(12.9))
            .usage("tb", Quantity::amount(0.12345, 3))
            .build();

        let json = serde_json::to_value(&breakdown).unwrap();

        assert_eq!(json["billable_usage"]["count"], 12);
        assert_eq!(json["billable_usage"]["tb"], 0.123);
        assert_eq!(json["service"], "bigquery");
    }
}
