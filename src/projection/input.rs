//! Projection inputs and their validation

use serde::{Deserialize, Serialize};

use super::engine::{horizon_months, MONTHS_PER_YEAR};
use crate::assumptions::{AllocationWeights, Scenario};
use crate::error::{ProjectionError, Result};

/// Parameters for a single projection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Upfront lump sum
    #[serde(default)]
    pub principal: f64,

    /// Investment horizon in whole years
    pub years: u32,

    /// Monthly SIP contribution
    #[serde(default)]
    pub monthly_contribution: f64,

    /// Portfolio weights by asset class
    #[serde(default)]
    pub allocation: AllocationWeights,

    /// Market scenario to project under
    #[serde(default)]
    pub scenario: Scenario,

    /// Annual inflation used to deflate the nominal value
    #[serde(default)]
    pub inflation_rate: f64,
}

impl ProjectionInput {
    /// Lump-sum investment with no monthly contributions
    pub fn lump_sum(principal: f64, years: u32, allocation: AllocationWeights) -> Self {
        Self {
            principal,
            years,
            monthly_contribution: 0.0,
            allocation,
            scenario: Scenario::Normal,
            inflation_rate: 0.0,
        }
    }

    /// Monthly SIP with no upfront principal
    pub fn sip(monthly_contribution: f64, years: u32, allocation: AllocationWeights) -> Self {
        Self {
            principal: 0.0,
            years,
            monthly_contribution,
            allocation,
            scenario: Scenario::Normal,
            inflation_rate: 0.0,
        }
    }

    pub fn with_scenario(mut self, scenario: Scenario) -> Self {
        self.scenario = scenario;
        self
    }

    pub fn with_inflation(mut self, inflation_rate: f64) -> Self {
        self.inflation_rate = inflation_rate;
        self
    }

    pub fn with_principal(mut self, principal: f64) -> Self {
        self.principal = principal;
        self
    }

    pub fn with_monthly_contribution(mut self, monthly_contribution: f64) -> Self {
        self.monthly_contribution = monthly_contribution;
        self
    }

    /// Total number of monthly contributions
    pub fn months(&self) -> u32 {
        self.years.saturating_mul(MONTHS_PER_YEAR)
    }

    /// Reject out-of-range numeric arguments
    pub fn validate(&self) -> Result<()> {
        horizon_months(self.years)?;
        non_negative("principal", self.principal)?;
        non_negative("monthly contribution", self.monthly_contribution)?;
        non_negative("inflation rate", self.inflation_rate)?;
        self.allocation.validate()
    }
}

fn non_negative(name: &str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(ProjectionError::InvalidInput(format!(
            "{} must be a non-negative number, got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assumptions::AssetClass;

    fn base() -> ProjectionInput {
        ProjectionInput::lump_sum(100_000.0, 10, AllocationWeights::single(AssetClass::Fd))
    }

    #[test]
    fn test_valid_input() {
        assert!(base().validate().is_ok());
        assert!(base().with_inflation(0.045).with_monthly_contribution(5_000.0).validate().is_ok());
    }

    #[test]
    fn test_zero_years_rejected() {
        let mut input = base();
        input.years = 0;
        assert!(matches!(input.validate(), Err(ProjectionError::InvalidInput(_))));
    }

    #[test]
    fn test_oversized_horizon_rejected() {
        let mut input = base();
        input.years = 400_000_000;
        assert!(matches!(input.validate(), Err(ProjectionError::InvalidInput(_))));
        assert_eq!(input.months(), u32::MAX);
    }

    #[test]
    fn test_negative_amounts_rejected() {
        assert!(base().with_principal(-1.0).validate().is_err());
        assert!(base().with_monthly_contribution(-500.0).validate().is_err());
        assert!(base().with_inflation(-0.01).validate().is_err());
        assert!(base().with_principal(f64::NAN).validate().is_err());
    }

    #[test]
    fn test_bad_weight_rejected() {
        let input = ProjectionInput::sip(
            1_000.0,
            5,
            AllocationWeights::new().with(AssetClass::Stocks, 2.0),
        );
        assert!(matches!(input.validate(), Err(ProjectionError::InvalidInput(_))));
    }

    #[test]
    fn test_deserialize_with_defaults() {
        let input: ProjectionInput = serde_json::from_str(
            r#"{"principal": 50000, "years": 3, "allocation": {"stocks": 1.0}, "scenario": "bullish"}"#,
        )
        .unwrap();
        assert_eq!(input.monthly_contribution, 0.0);
        assert_eq!(input.inflation_rate, 0.0);
        assert_eq!(input.scenario, Scenario::Bullish);
        assert_eq!(input.months(), 36);
    }

    #[test]
    fn test_deserialize_unknown_scenario() {
        let result = serde_json::from_str::<ProjectionInput>(
            r#"{"years": 3, "scenario": "volatile"}"#,
        );
        assert!(result.is_err());
    }
}
