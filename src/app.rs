use crate::cli::Cli;
use crate::config::pricing_table::{PRICING, PricingTable};
use crate::config::schema_table::{SCHEMAS, SchemaTable};

/// Everything a command needs: the parsed arguments and the static tables.
pub struct App {
    pub cli: Cli,
    pub pricing: &'static PricingTable,
    pub schemas: &'static SchemaTable,
}

impl App {
    pub fn new(cli: Cli) -> Self {
        App {
            cli,
            pricing: &PRICING,
            schemas: &SCHEMAS,
        }
    }
}
