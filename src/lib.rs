//! Portfolio Planner - projection engine for goal-based investment planning
//!
//! This library provides:
//! - Lump-sum and SIP projections under normal, bullish and bearish markets
//! - Weighted portfolio return, risk and beta from an asset allocation
//! - Inflation-adjusted values and goal shortfall calculations
//! - Questionnaire-based investor risk profiling
//! - Parallel batch runs over CSV plan files

pub mod assumptions;
pub mod config;
pub mod error;
pub mod plan;
pub mod profile;
pub mod projection;
pub mod report;
pub mod scenario;

// Re-export commonly used types
pub use assumptions::{AllocationWeights, AssetClass, MarketAssumptions, Scenario};
pub use config::PlannerConfig;
pub use error::ProjectionError;
pub use profile::{InvestorPersona, Questionnaire, RiskProfile};
pub use projection::{project, GoalPlan, ProjectionEngine, ProjectionInput, ProjectionResult};
pub use report::{PlanReport, PlanSelection};
pub use scenario::ScenarioRunner;
