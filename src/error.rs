use miette::Diagnostic;
use thiserror::Error;

// billcheck::input -> reading and parsing the snapshot document.
// billcheck::pricing -> the snapshot is fine but there is nothing to price it with.
//
// An incomplete snapshot is not an error. The validator reports it as data.

#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error("Snapshot file not found: {path}")]
    #[diagnostic(
        code(billcheck::input::not_found),
        help("Check the path. The file is the JSON document written by the metrics collector.")
    )]
    SnapshotNotFound { path: String },

    #[error("Could not read snapshot file: {path}")]
    #[diagnostic(code(billcheck::input::read))]
    SnapshotUnreadable {
        path: String,

        #[source]
        source: std::io::Error,
    },

    #[error("Invalid snapshot JSON in {path}: {source}")]
    #[diagnostic(
        code(billcheck::input::json),
        help("Expected an object with `service` and a `metrics` map of numbers or nulls.")
    )]
    InvalidSnapshot {
        path: String,

        #[source]
        source: serde_json::Error,
    },

    #[error("Cost calculation not implemented for service: {0}")]
    #[diagnostic(
        code(billcheck::pricing::unknown_service),
        help("Known services are firestore, rtdb, functions and bigquery.")
    )]
    UnknownService(String),

    /// The service has a validation schema but no pricing formula.
    #[error("Cost calculation not implemented for service: {0}")]
    #[diagnostic(
        code(billcheck::pricing::not_implemented),
        help("Only firestore, rtdb, functions and bigquery can be priced. `validate` still works.")
    )]
    PricingNotImplemented(String),
}
