//! Plan records and CSV batch loading

mod data;
pub mod loader;

pub use data::{PlanOutcome, PlanRecord};
pub use loader::{load_plans, load_plans_from_reader, write_outcomes};
