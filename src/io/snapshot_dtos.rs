use std::collections::BTreeMap;

use serde_json::Value;

use crate::prelude::*;
use crate::service::ServiceTag;

/// One usage snapshot for one service over one billing period.
///
/// Mirrors the input document. Nothing here is checked, that is the validator's job.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct MetricsSnapshot {
    /// Which schema and formula apply. Defaults to the tag "unknown".
    #[serde(default)]
    pub service: ServiceTag,

    /// Informational only.
    #[serde(default)]
    pub project_id: Option<String>,

    /// Start of the billing period, kept raw so a bad value can be reported instead of
    /// failing the load.
    #[serde(default)]
    pub start_date: Option<String>,

    /// End of the billing period, raw as well.
    #[serde(default)]
    pub end_date: Option<String>,

    /// When the collector took the snapshot. Passed through to the pricing output.
    #[serde(default)]
    pub collection_time: Option<String>,

    /// Provider metric key to value, as written. Odd values are kept, not rejected.
    #[serde(default)]
    pub metrics: BTreeMap<String, Value>,
}

/// What a snapshot says about one metric key.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// The key is not in the document at all.
    Missing,
    /// The key is there, with a null value.
    Null,
    Present(f64),
    /// The key is there with something that is not a number.
    NonNumeric,
}

impl MetricsSnapshot {
    pub fn metric(&self, key: &str) -> MetricValue {
        match self.metrics.get(key) {
            None => MetricValue::Missing,
            Some(Value::Null) => MetricValue::Null,
            Some(Value::Number(number)) => number
                .as_f64()
                .map_or(MetricValue::NonNumeric, MetricValue::Present),
            Some(_) => MetricValue::NonNumeric,
        }
    }
}

impl MetricValue {
    /// Collapses absent, null and non-numeric values to zero usage.
    /// Only the pricing engine should do this, after validation had its say.
    pub fn or_zero(self) -> f64 {
        match self {
            MetricValue::Present(value) => value,
            MetricValue::Missing | MetricValue::Null | MetricValue::NonNumeric => 0.0,
        }
    }
}
