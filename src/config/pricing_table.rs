use super::metric_keys::*;

const GIB: f64 = 1024.0 * 1024.0 * 1024.0;
const TIB: f64 = GIB * 1024.0;

/// The unit a price and its free tier are quoted in.
/// Byte quantities always scale by 1024, never by 1000, or totals drift from the invoice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Unit {
    Count,
    Gibibytes,
    Tebibytes,
}

impl Unit {
    /// Converts a raw metric value into this unit.
    pub fn convert(&self, raw: f64) -> f64 {
        match self {
            Unit::Count => raw,
            Unit::Gibibytes => raw / GIB,
            Unit::Tebibytes => raw / TIB,
        }
    }
}

/// A free allowance, in the unit of the rate it belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FreeTier {
    /// Flow metrics: granted every day of the period.
    Daily(f64),
    /// Stock metrics, and the odd flat monthly quota.
    Monthly(f64),
}

impl FreeTier {
    pub fn allowance(&self, period_days: u32) -> f64 {
        match self {
            FreeTier::Daily(per_day) => per_day * f64::from(period_days),
            FreeTier::Monthly(flat) => *flat,
        }
    }
}

/// One metered line of a bill: which metric, how it is measured, what it costs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeteredRate {
    pub metric: &'static str,
    pub unit: Unit,
    /// Dollars per `per` units.
    pub price: f64,
    pub per: f64,
    /// `None` when the provider has a free tier we deliberately do not deduct, or none.
    pub free_tier: Option<FreeTier>,
}

pub struct FirestoreRates {
    pub reads: MeteredRate,
    pub writes: MeteredRate,
    pub deletes: MeteredRate,
    pub storage: MeteredRate,
}

pub struct RealtimeDatabaseRates {
    pub storage: MeteredRate,
    pub bandwidth: MeteredRate,
    /// Reported only. Its traffic is already in the bandwidth line.
    pub api_hits_metric: &'static str,
}

pub struct FunctionsRates {
    pub invocations: MeteredRate,
    /// The provider's monthly invocation allowance, shown in the notes, never subtracted.
    pub undeducted_free_invocations: u64,
}

pub struct BigQueryRates {
    pub storage: MeteredRate,
    pub queries: MeteredRate,
    pub query_count_metric: &'static str,
    pub undeducted_free_scan_gb: u64,
}

/// Unit prices for every service that has a formula. Fixed, current list prices.
pub struct PricingTable {
    pub firestore: FirestoreRates,
    pub realtime_database: RealtimeDatabaseRates,
    pub functions: FunctionsRates,
    pub bigquery: BigQueryRates,
}

pub static PRICING: PricingTable = PricingTable {
    // Multi-region prices.
    firestore: FirestoreRates {
        reads: MeteredRate {
            metric: FIRESTORE_READS,
            unit: Unit::Count,
            price: 0.06,
            per: 100_000.0,
            free_tier: Some(FreeTier::Daily(50_000.0)),
        },
        writes: MeteredRate {
            metric: FIRESTORE_WRITES,
            unit: Unit::Count,
            price: 0.18,
            per: 100_000.0,
            free_tier: Some(FreeTier::Daily(20_000.0)),
        },
        deletes: MeteredRate {
            metric: FIRESTORE_DELETES,
            unit: Unit::Count,
            price: 0.02,
            per: 100_000.0,
            free_tier: Some(FreeTier::Daily(20_000.0)),
        },
        storage: MeteredRate {
            metric: FIRESTORE_STORAGE_BYTES,
            unit: Unit::Gibibytes,
            price: 0.18,
            per: 1.0,
            free_tier: Some(FreeTier::Monthly(1.0)),
        },
    },

    // Blaze plan. Both allowances are flat, bandwidth included.
    realtime_database: RealtimeDatabaseRates {
        storage: MeteredRate {
            metric: RTDB_STORAGE_BYTES,
            unit: Unit::Gibibytes,
            price: 5.00,
            per: 1.0,
            free_tier: Some(FreeTier::Monthly(1.0)),
        },
        bandwidth: MeteredRate {
            metric: RTDB_BANDWIDTH_BYTES,
            unit: Unit::Gibibytes,
            price: 1.00,
            per: 1.0,
            free_tier: Some(FreeTier::Monthly(10.0)),
        },
        api_hits_metric: RTDB_API_HITS,
    },

    functions: FunctionsRates {
        invocations: MeteredRate {
            metric: FUNCTIONS_EXECUTIONS,
            unit: Unit::Count,
            price: 0.40,
            per: 1_000_000.0,
            free_tier: None,
        },
        undeducted_free_invocations: 2_000_000,
    },

    bigquery: BigQueryRates {
        // Active storage, $0.02 per GiB.
        storage: MeteredRate {
            metric: BIGQUERY_STORED_BYTES,
            unit: Unit::Tebibytes,
            price: 0.02 * 1024.0,
            per: 1.0,
            free_tier: None,
        },
        // On-demand queries.
        queries: MeteredRate {
            metric: BIGQUERY_SCANNED_BYTES,
            unit: Unit::Tebibytes,
            price: 5.00,
            per: 1.0,
            free_tier: None,
        },
        query_count_metric: BIGQUERY_QUERY_COUNT,
        undeducted_free_scan_gb: 10,
    },
};
