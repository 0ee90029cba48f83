//! Market assumptions: asset classes, scenario returns, risk and beta

mod asset;
mod market;

pub use asset::{AllocationWeights, AssetClass};
pub use market::{AssetProfile, AssetRates, RiskTable, Scenario, ScenarioTable};

/// Container for all projection assumptions
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarketAssumptions {
    pub scenarios: ScenarioTable,
    pub risk: RiskTable,
}

impl MarketAssumptions {
    /// Built-in tables used by every projection
    pub fn standard() -> Self {
        Self {
            scenarios: ScenarioTable::standard(),
            risk: RiskTable::standard(),
        }
    }

    /// Weighted expected annual return of an allocation
    pub fn portfolio_return(&self, allocation: &AllocationWeights, scenario: Scenario) -> f64 {
        let rates = self.scenarios.rates(scenario);
        allocation.weighted_sum(|asset| rates.get(asset))
    }

    /// Weighted annual risk of an allocation
    pub fn portfolio_risk(&self, allocation: &AllocationWeights) -> f64 {
        allocation.weighted_sum(|asset| self.risk.risk(asset))
    }

    /// Weighted beta of an allocation
    pub fn portfolio_beta(&self, allocation: &AllocationWeights) -> f64 {
        allocation.weighted_sum(|asset| self.risk.beta(asset))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn default_mix() -> AllocationWeights {
        AllocationWeights::from_percentages(&[
            (AssetClass::MutualFunds, 40),
            (AssetClass::Stocks, 20),
            (AssetClass::Fd, 20),
            (AssetClass::Bonds, 15),
            (AssetClass::Aif, 5),
        ])
    }

    #[test]
    fn test_single_asset_return_is_exact() {
        let assumptions = MarketAssumptions::standard();
        let allocation = AllocationWeights::single(AssetClass::MutualFunds);
        assert_eq!(assumptions.portfolio_return(&allocation, Scenario::Normal), 0.12);
    }

    #[test]
    fn test_weighted_average_return() {
        let assumptions = MarketAssumptions::standard();
        let allocation = default_mix();

        // 0.4*0.12 + 0.2*0.15 + 0.2*0.06 + 0.15*0.07 + 0.05*0.18
        let normal = assumptions.portfolio_return(&allocation, Scenario::Normal);
        assert_abs_diff_eq!(normal, 0.1095, epsilon = 1e-12);

        // 0.4*0.18 + 0.2*0.25 + 0.2*0.06 + 0.15*0.07 + 0.05*0.28
        let bullish = assumptions.portfolio_return(&allocation, Scenario::Bullish);
        assert_abs_diff_eq!(bullish, 0.1585, epsilon = 1e-12);

        // 0.4*0.04 + 0.2*0.02 + 0.2*0.06 + 0.15*0.07 + 0.05*0.08
        let bearish = assumptions.portfolio_return(&allocation, Scenario::Bearish);
        assert_abs_diff_eq!(bearish, 0.0465, epsilon = 1e-12);
    }

    #[test]
    fn test_risk_and_beta() {
        let assumptions = MarketAssumptions::standard();
        let allocation = default_mix();

        // 0.4*0.18 + 0.2*0.25 + 0.2*0.02 + 0.15*0.05 + 0.05*0.30
        assert_abs_diff_eq!(assumptions.portfolio_risk(&allocation), 0.1485, epsilon = 1e-12);
        // 0.4*0.85 + 0.2*1.2 + 0.0 + 0.15*0.1 + 0.05*1.5
        assert_abs_diff_eq!(assumptions.portfolio_beta(&allocation), 0.67, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_allocation_is_flat() {
        let assumptions = MarketAssumptions::standard();
        let empty = AllocationWeights::new();
        assert_eq!(assumptions.portfolio_return(&empty, Scenario::Bullish), 0.0);
        assert_eq!(assumptions.portfolio_risk(&empty), 0.0);
        assert_eq!(assumptions.portfolio_beta(&empty), 0.0);
    }
}
