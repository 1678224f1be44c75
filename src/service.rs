use std::fmt;

use crate::prelude::*;

/// Every cloud service this tool knows a schema for.
///
/// Only some of them have a pricing formula, see `PricingTable::formula`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Firestore,
    RealtimeDatabase,
    Functions,
    BigQuery,
    CloudStorage,
    CloudRun,
}

impl Service {
    pub const ALL: [Service; 6] = [
        Service::Firestore,
        Service::RealtimeDatabase,
        Service::Functions,
        Service::BigQuery,
        Service::CloudStorage,
        Service::CloudRun,
    ];

    /// Resolves a tag from the input document, synonyms included.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Service::ALL
            .into_iter()
            .find(|service| service.canonical_tag() == tag || service.synonyms().contains(&tag))
    }

    /// Other spellings collectors use for the same service.
    pub fn synonyms(&self) -> &'static [&'static str] {
        match self {
            Service::RealtimeDatabase => &["realtime-db", "firebase-db"],
            Service::Functions => &["cloud-functions"],
            Service::Firestore | Service::BigQuery | Service::CloudStorage | Service::CloudRun => {
                &[]
            }
        }
    }

    /// The tag we echo back in every output document.
    pub fn canonical_tag(&self) -> &'static str {
        match self {
            Service::Firestore => "firestore",
            Service::RealtimeDatabase => "rtdb",
            Service::Functions => "functions",
            Service::BigQuery => "bigquery",
            Service::CloudStorage => "storage",
            Service::CloudRun => "cloudrun",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.canonical_tag())
    }
}

/// The `service` field of a snapshot, as it was written.
///
/// Unrecognized tags are kept as data. The validator reports them, the pricing engine
/// refuses them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(from = "String", into = "String")]
pub enum ServiceTag {
    Known(Service),
    Unrecognized(String),
}

impl Default for ServiceTag {
    fn default() -> Self {
        ServiceTag::Unrecognized("unknown".to_owned())
    }
}

impl From<String> for ServiceTag {
    fn from(tag: String) -> Self {
        match Service::from_tag(&tag) {
            Some(service) => ServiceTag::Known(service),
            None => ServiceTag::Unrecognized(tag),
        }
    }
}

impl From<ServiceTag> for String {
    fn from(tag: ServiceTag) -> Self {
        tag.to_string()
    }
}

impl fmt::Display for ServiceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServiceTag::Known(service) => service.fmt(f),
            ServiceTag::Unrecognized(tag) => f.write_str(tag),
        }
    }
}
