use super::metric_keys::*;
use crate::service::Service;

/// The metric keys a snapshot must carry for one service, in report order.
pub struct ServiceSchema {
    pub service: Service,
    pub required: &'static [&'static str],
}

pub struct SchemaTable {
    pub entries: &'static [ServiceSchema],
}

impl SchemaTable {
    pub fn required_for(&self, service: Service) -> Option<&'static [&'static str]> {
        self.entries
            .iter()
            .find(|entry| entry.service == service)
            .map(|entry| entry.required)
    }
}

pub static SCHEMAS: SchemaTable = SchemaTable {
    entries: &[
        ServiceSchema {
            service: Service::Firestore,
            required: &[
                FIRESTORE_READS,
                FIRESTORE_WRITES,
                FIRESTORE_DELETES,
                FIRESTORE_STORAGE_BYTES,
            ],
        },
        ServiceSchema {
            service: Service::RealtimeDatabase,
            required: &[RTDB_BANDWIDTH_BYTES, RTDB_STORAGE_BYTES, RTDB_API_HITS],
        },
        ServiceSchema {
            service: Service::Functions,
            required: &[
                FUNCTIONS_EXECUTIONS,
                FUNCTIONS_EXECUTION_TIMES,
                FUNCTIONS_ACTIVE_INSTANCES,
            ],
        },
        ServiceSchema {
            service: Service::BigQuery,
            required: &[
                BIGQUERY_STORED_BYTES,
                BIGQUERY_QUERY_COUNT,
                BIGQUERY_SCANNED_BYTES,
            ],
        },
        ServiceSchema {
            service: Service::CloudStorage,
            required: &[STORAGE_TOTAL_BYTES, STORAGE_SENT_BYTES, STORAGE_REQUESTS],
        },
        ServiceSchema {
            service: Service::CloudRun,
            required: &[
                CLOUDRUN_REQUESTS,
                CLOUDRUN_INSTANCES,
                CLOUDRUN_BILLABLE_TIME,
            ],
        },
    ],
};
