pub mod metric_keys;
pub mod pricing_table;
pub mod schema_table;
