//! Goal planning calculations built on top of a projection
//!
//! - Years needed for a lump sum to grow into a target
//! - Extra monthly contribution needed to close a shortfall
//! - Assessment of a projection against an inflation-adjusted goal

use log::warn;
use serde::{Deserialize, Serialize};

use super::engine::{growth_factor, horizon_months, MAX_HORIZON_YEARS, MONTHS_PER_YEAR};
use super::result::ProjectionResult;
use crate::error::{ProjectionError, Result};

/// Financial goal with a nominal target and a horizon
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalPlan {
    pub name: String,
    pub target: f64,
    pub horizon_years: u32,
}

impl GoalPlan {
    pub fn new(name: impl Into<String>, target: f64, horizon_years: u32) -> Self {
        Self {
            name: name.into(),
            target,
            horizon_years,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(ProjectionError::InvalidInput("goal name is required".to_string()));
        }
        if !self.target.is_finite() || self.target <= 0.0 {
            return Err(ProjectionError::InvalidInput(format!(
                "goal target must be positive, got {}",
                self.target
            )));
        }
        if self.horizon_years == 0 || self.horizon_years > MAX_HORIZON_YEARS {
            return Err(ProjectionError::InvalidInput(format!(
                "goal horizon must be between 1 and {} years, got {}",
                MAX_HORIZON_YEARS, self.horizon_years
            )));
        }
        Ok(())
    }
}

/// Years for `principal` to compound into `target` at `portfolio_return`
///
/// A target below the principal gives a negative result (already reached).
pub fn years_to_target(target: f64, principal: f64, portfolio_return: f64) -> Result<f64> {
    if !target.is_finite() || target <= 0.0 {
        return Err(ProjectionError::InvalidInput(format!(
            "target must be positive, got {}",
            target
        )));
    }
    if !principal.is_finite() || !portfolio_return.is_finite() {
        return Err(ProjectionError::InvalidInput(format!(
            "principal and portfolio return must be finite, got {} and {}",
            principal, portfolio_return
        )));
    }
    if principal <= 0.0 {
        return Err(ProjectionError::UndefinedOperation(
            "years to target needs a positive principal".to_string(),
        ));
    }
    if portfolio_return <= 0.0 {
        return Err(ProjectionError::UndefinedOperation(
            "years to target needs a positive portfolio return".to_string(),
        ));
    }

    Ok((target / principal).ln() / (1.0 + portfolio_return).ln())
}

/// Additional monthly contribution whose annuity value covers `shortfall`
///
/// Solves the ordinary-annuity future value formula for the contribution.
/// Nothing extra is needed when the shortfall is not positive.
pub fn additional_monthly_needed(shortfall: f64, portfolio_return: f64, horizon_years: u32) -> Result<f64> {
    if horizon_years == 0 {
        return Err(ProjectionError::UndefinedOperation(
            "no months remain in the horizon".to_string(),
        ));
    }
    let remaining_months = horizon_months(horizon_years)?;

    let monthly_rate = portfolio_return / MONTHS_PER_YEAR as f64;
    if monthly_rate == 0.0 {
        return Err(ProjectionError::UndefinedOperation(
            "additional contribution needs a non-zero portfolio return".to_string(),
        ));
    }

    if shortfall <= 0.0 {
        return Ok(0.0);
    }

    let annuity_factor = (growth_factor(monthly_rate, remaining_months) - 1.0) / monthly_rate;
    Ok(shortfall / annuity_factor)
}

/// Target grown by compounding inflation over `years`
pub fn inflation_adjusted_target(target: f64, inflation_rate: f64, years: u32) -> f64 {
    target * growth_factor(inflation_rate, years)
}

/// Whether a projection reaches its goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum GoalStatus {
    /// Projected value meets or exceeds the inflation-adjusted target
    OnTrack { surplus: f64 },
    /// Projected value falls short; `additional_monthly` is None when it
    /// cannot be computed for this portfolio
    Shortfall {
        shortfall: f64,
        additional_monthly: Option<f64>,
    },
}

/// Projection measured against a goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalAssessment {
    pub goal: GoalPlan,
    pub inflation_rate: f64,
    pub inflation_adjusted_target: f64,
    pub projected_value: f64,
    pub status: GoalStatus,
    /// Years for the principal alone to reach the nominal target
    pub years_to_target: Option<f64>,
}

impl GoalAssessment {
    pub fn is_on_track(&self) -> bool {
        matches!(self.status, GoalStatus::OnTrack { .. })
    }
}

/// Compare a projection for `goal` against its inflation-adjusted target
///
/// `principal` is the upfront investment the projection started from.
pub fn assess_goal(
    goal: &GoalPlan,
    principal: f64,
    result: &ProjectionResult,
    inflation_rate: f64,
) -> Result<GoalAssessment> {
    goal.validate()?;

    let adjusted_target = inflation_adjusted_target(goal.target, inflation_rate, goal.horizon_years);
    let projected_value = result.future_value;

    let status = if projected_value >= adjusted_target {
        GoalStatus::OnTrack {
            surplus: projected_value - adjusted_target,
        }
    } else {
        let shortfall = adjusted_target - projected_value;
        let additional_monthly =
            match additional_monthly_needed(shortfall, result.portfolio_return, goal.horizon_years) {
                Ok(amount) => Some(amount),
                Err(ProjectionError::UndefinedOperation(reason)) => {
                    warn!("cannot compute additional contribution for '{}': {}", goal.name, reason);
                    None
                }
                Err(e) => return Err(e),
            };
        GoalStatus::Shortfall {
            shortfall,
            additional_monthly,
        }
    };

    let years_to_target = match years_to_target(goal.target, principal, result.portfolio_return) {
        Ok(years) => Some(years),
        Err(ProjectionError::UndefinedOperation(_)) => None,
        Err(e) => return Err(e),
    };

    Ok(GoalAssessment {
        goal: goal.clone(),
        inflation_rate,
        inflation_adjusted_target: adjusted_target,
        projected_value,
        status,
        years_to_target,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::{AllocationWeights, AssetClass};
    use crate::projection::{project, ProjectionInput};
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_years_to_target_doubling() {
        // 6% doubles in ln(2)/ln(1.06) ~ 11.9 years
        let years = years_to_target(200_000.0, 100_000.0, 0.06).unwrap();
        assert_abs_diff_eq!(years, 11.8957, epsilon = 1e-4);
    }

    #[test]
    fn test_years_to_target_undefined() {
        assert!(matches!(
            years_to_target(100_000.0, 0.0, 0.06),
            Err(ProjectionError::UndefinedOperation(_))
        ));
        assert!(matches!(
            years_to_target(100_000.0, 10_000.0, 0.0),
            Err(ProjectionError::UndefinedOperation(_))
        ));
        assert!(matches!(
            years_to_target(0.0, 10_000.0, 0.06),
            Err(ProjectionError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_additional_monthly_inverts_annuity() {
        // 5000/month at 6% for a year accumulates ~61677.81
        let extra = additional_monthly_needed(61_677.81, 0.06, 1).unwrap();
        assert_abs_diff_eq!(extra, 5_000.0, epsilon = 0.001);
    }

    #[test]
    fn test_years_to_target_non_finite() {
        assert!(matches!(
            years_to_target(100_000.0, f64::NAN, 0.06),
            Err(ProjectionError::InvalidInput(_))
        ));
        assert!(matches!(
            years_to_target(100_000.0, 10_000.0, f64::NAN),
            Err(ProjectionError::InvalidInput(_))
        ));
        assert!(years_to_target(100_000.0, f64::INFINITY, 0.06).is_err());
    }

    #[test]
    fn test_additional_monthly_oversized_horizon() {
        assert!(matches!(
            additional_monthly_needed(1_000.0, 0.06, 400_000_000),
            Err(ProjectionError::InvalidInput(_))
        ));
        assert!(assess_goal(
            &GoalPlan::new("Forever", 10.0, 400_000_000),
            1.0,
            &project(&ProjectionInput::lump_sum(1.0, 1, AllocationWeights::new())).unwrap(),
            0.0
        )
        .is_err());
    }

    #[test]
    fn test_additional_monthly_undefined() {
        assert!(matches!(
            additional_monthly_needed(10_000.0, 0.0, 10),
            Err(ProjectionError::UndefinedOperation(_))
        ));
        assert!(matches!(
            additional_monthly_needed(10_000.0, 0.08, 0),
            Err(ProjectionError::UndefinedOperation(_))
        ));
        assert_eq!(additional_monthly_needed(-5.0, 0.08, 5).unwrap(), 0.0);
    }

    #[test]
    fn test_inflation_adjusted_target() {
        let adjusted = inflation_adjusted_target(1_000_000.0, 0.045, 10);
        assert_abs_diff_eq!(adjusted, 1_552_969.42, epsilon = 0.01);
        assert_eq!(inflation_adjusted_target(500.0, 0.0, 30), 500.0);
    }

    #[test]
    fn test_assess_goal_shortfall() {
        let goal = GoalPlan::new("Retirement", 5_000_000.0, 10);
        let input = ProjectionInput::sip(5_000.0, 10, AllocationWeights::single(AssetClass::MutualFunds))
            .with_inflation(0.045);
        let result = project(&input).unwrap();

        let assessment = assess_goal(&goal, 0.0, &result, 0.045).unwrap();
        assert!(!assessment.is_on_track());
        assert!(assessment.years_to_target.is_none());

        match assessment.status {
            GoalStatus::Shortfall { shortfall, additional_monthly } => {
                assert_abs_diff_eq!(
                    shortfall,
                    assessment.inflation_adjusted_target - result.future_value,
                    epsilon = 1e-6
                );
                let extra = additional_monthly.unwrap();
                // Topping up by the extra amount closes the gap
                let topped_up = project(&input.clone().with_monthly_contribution(5_000.0 + extra)).unwrap();
                assert_abs_diff_eq!(
                    topped_up.future_value,
                    assessment.inflation_adjusted_target,
                    epsilon = 0.01
                );
            }
            other => panic!("expected shortfall, got {:?}", other),
        }
    }

    #[test]
    fn test_assess_goal_on_track() {
        let goal = GoalPlan::new("House", 100_000.0, 10);
        let input = ProjectionInput::lump_sum(100_000.0, 10, AllocationWeights::single(AssetClass::Stocks));
        let result = project(&input).unwrap();

        let assessment = assess_goal(&goal, 100_000.0, &result, 0.045).unwrap();
        assert!(assessment.is_on_track());
        assert_abs_diff_eq!(assessment.years_to_target.unwrap(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_assess_goal_zero_return_cannot_compute() {
        let goal = GoalPlan::new("Car", 1_000_000.0, 5);
        let input = ProjectionInput::sip(1_000.0, 5, AllocationWeights::new());
        let result = project(&input).unwrap();

        let assessment = assess_goal(&goal, 0.0, &result, 0.045).unwrap();
        assert_eq!(
            assessment.status,
            GoalStatus::Shortfall {
                shortfall: assessment.inflation_adjusted_target - 60_000.0,
                additional_monthly: None,
            }
        );
    }

    #[test]
    fn test_invalid_goal() {
        let result = project(&ProjectionInput::lump_sum(1.0, 1, AllocationWeights::new())).unwrap();
        assert!(assess_goal(&GoalPlan::new("", 10.0, 1), 1.0, &result, 0.0).is_err());
        assert!(assess_goal(&GoalPlan::new("x", -10.0, 1), 1.0, &result, 0.0).is_err());
        assert!(assess_goal(&GoalPlan::new("x", 10.0, 0), 1.0, &result, 0.0).is_err());
    }
}
