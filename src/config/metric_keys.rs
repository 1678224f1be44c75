//! Provider metric keys, as the monitoring API names them.

pub const FIRESTORE_READS: &str = "firestore.googleapis.com/document/read_count";
pub const FIRESTORE_WRITES: &str = "firestore.googleapis.com/document/write_count";
pub const FIRESTORE_DELETES: &str = "firestore.googleapis.com/document/delete_count";
pub const FIRESTORE_STORAGE_BYTES: &str = "firestore.googleapis.com/storage/total_bytes";

pub const RTDB_BANDWIDTH_BYTES: &str = "firebasedatabase.googleapis.com/network/monthly_sent";
pub const RTDB_STORAGE_BYTES: &str = "firebasedatabase.googleapis.com/storage/total_bytes";
pub const RTDB_API_HITS: &str = "firebasedatabase.googleapis.com/network/api_hits_count";

pub const FUNCTIONS_EXECUTIONS: &str = "cloudfunctions.googleapis.com/function/execution_count";
pub const FUNCTIONS_EXECUTION_TIMES: &str =
    "cloudfunctions.googleapis.com/function/execution_times";
pub const FUNCTIONS_ACTIVE_INSTANCES: &str =
    "cloudfunctions.googleapis.com/function/active_instances";

pub const BIGQUERY_STORED_BYTES: &str = "bigquery.googleapis.com/storage/stored_bytes";
pub const BIGQUERY_QUERY_COUNT: &str = "bigquery.googleapis.com/query/count";
pub const BIGQUERY_SCANNED_BYTES: &str = "bigquery.googleapis.com/query/scanned_bytes";

pub const STORAGE_TOTAL_BYTES: &str = "storage.googleapis.com/storage/total_bytes";
pub const STORAGE_SENT_BYTES: &str = "storage.googleapis.com/network/sent_bytes_count";
pub const STORAGE_REQUESTS: &str = "storage.googleapis.com/api/request_count";

pub const CLOUDRUN_REQUESTS: &str = "run.googleapis.com/request_count";
pub const CLOUDRUN_INSTANCES: &str = "run.googleapis.com/container/instance_count";
pub const CLOUDRUN_BILLABLE_TIME: &str = "run.googleapis.com/container/billable_instance_time";
