//! Projection engine and goal planning calculations

mod engine;
mod goal;
mod input;
mod result;

pub use engine::{annuity_future_value, project, ProjectionEngine, MAX_HORIZON_YEARS, MONTHS_PER_YEAR};
pub use goal::{
    additional_monthly_needed, assess_goal, inflation_adjusted_target, years_to_target, GoalAssessment,
    GoalPlan, GoalStatus,
};
pub use input::ProjectionInput;
pub use result::{ProjectionResult, YearRow};
