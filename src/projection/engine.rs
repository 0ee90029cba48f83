//! Core projection engine for lump-sum and SIP portfolio projections

use log::debug;

use super::input::ProjectionInput;
use super::result::{ProjectionResult, YearRow};
use crate::assumptions::MarketAssumptions;
use crate::error::{ProjectionError, Result};

/// Compounding periods per year for SIP contributions
pub const MONTHS_PER_YEAR: u32 = 12;

/// Longest horizon a projection or goal may cover
pub const MAX_HORIZON_YEARS: u32 = 1_000;

/// Monthly periods in a horizon of `years`, rejecting empty or oversized horizons
pub(crate) fn horizon_months(years: u32) -> Result<u32> {
    if years == 0 || years > MAX_HORIZON_YEARS {
        return Err(ProjectionError::InvalidInput(format!(
            "horizon must be between 1 and {} years, got {}",
            MAX_HORIZON_YEARS, years
        )));
    }
    Ok(years * MONTHS_PER_YEAR)
}

/// Main projection engine
///
/// Holds the market tables and nothing else, so a single engine can be
/// shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct ProjectionEngine {
    assumptions: MarketAssumptions,
}

impl ProjectionEngine {
    /// Create a new projection engine with the given assumptions
    pub fn new(assumptions: MarketAssumptions) -> Self {
        Self { assumptions }
    }

    /// Engine over the built-in scenario and risk tables
    pub fn standard() -> Self {
        Self::new(MarketAssumptions::standard())
    }

    pub fn assumptions(&self) -> &MarketAssumptions {
        &self.assumptions
    }

    /// Project a single input to the end of its horizon
    pub fn project(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        input.validate()?;

        let portfolio_return = self
            .assumptions
            .portfolio_return(&input.allocation, input.scenario);
        let result = self.project_years(input, portfolio_return, input.years);

        debug!(
            "projected {} over {} years: return={:.4} fv={:.2} real={:.2}",
            input.scenario,
            input.years,
            portfolio_return,
            result.future_value,
            result.real_future_value,
        );

        Ok(result)
    }

    /// Year-by-year trajectory from year 1 through the input's horizon
    pub fn schedule(&self, input: &ProjectionInput) -> Result<Vec<YearRow>> {
        input.validate()?;

        let portfolio_return = self
            .assumptions
            .portfolio_return(&input.allocation, input.scenario);

        Ok((1..=input.years)
            .map(|year| {
                let result = self.project_years(input, portfolio_return, year);
                YearRow {
                    year,
                    total_invested: result.total_invested,
                    future_value: result.future_value,
                    real_future_value: result.real_future_value,
                }
            })
            .collect())
    }

    fn project_years(&self, input: &ProjectionInput, portfolio_return: f64, years: u32) -> ProjectionResult {
        let months = years * MONTHS_PER_YEAR;

        let fv_lump = input.principal * growth_factor(portfolio_return, years);
        let fv_monthly = annuity_future_value(input.monthly_contribution, portfolio_return, months);
        let future_value = fv_lump + fv_monthly;

        let total_invested = input.principal + input.monthly_contribution * months as f64;

        let real_future_value = if input.inflation_rate > 0.0 {
            future_value / growth_factor(input.inflation_rate, years)
        } else {
            future_value
        };

        ProjectionResult {
            total_invested,
            future_value,
            real_future_value,
            gains: future_value - total_invested,
            portfolio_return,
            portfolio_risk: self.assumptions.portfolio_risk(&input.allocation),
            portfolio_beta: self.assumptions.portfolio_beta(&input.allocation),
        }
    }
}

/// Project with the built-in market tables
pub fn project(input: &ProjectionInput) -> Result<ProjectionResult> {
    ProjectionEngine::standard().project(input)
}

/// `(1 + rate)^periods`
pub(crate) fn growth_factor(rate: f64, periods: u32) -> f64 {
    (1.0 + rate).powf(periods as f64)
}

/// Future value of an ordinary annuity of monthly contributions
///
/// Compounds at `annual_return / 12`. A zero return collapses to the plain
/// sum of contributions.
pub fn annuity_future_value(contribution: f64, annual_return: f64, months: u32) -> f64 {
    if contribution <= 0.0 {
        return 0.0;
    }

    let monthly_rate = annual_return / MONTHS_PER_YEAR as f64;
    if monthly_rate == 0.0 {
        return contribution * months as f64;
    }

    contribution * ((growth_factor(monthly_rate, months) - 1.0) / monthly_rate)
}
