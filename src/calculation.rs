pub mod cost_breakdown;
pub mod pricing;
pub mod report;
pub mod validation;
pub mod validation_report;
