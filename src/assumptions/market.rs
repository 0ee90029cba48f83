//! Market scenarios and per-asset return, risk and beta tables

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::asset::AssetClass;
use crate::error::{ProjectionError, Result};

/// Named market scenario
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Scenario {
    #[default]
    Normal,
    Bullish,
    Bearish,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [Scenario::Normal, Scenario::Bullish, Scenario::Bearish];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Normal => "normal",
            Scenario::Bullish => "bullish",
            Scenario::Bearish => "bearish",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Scenario::Normal => "Normal Market",
            Scenario::Bullish => "Bull Market",
            Scenario::Bearish => "Bear Market",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| ProjectionError::InvalidScenario(s.to_string()))
    }
}

impl TryFrom<String> for Scenario {
    type Error = ProjectionError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<Scenario> for String {
    fn from(scenario: Scenario) -> Self {
        scenario.as_str().to_string()
    }
}

/// Annual return rate for each asset class under one scenario
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetRates {
    pub mutual_funds: f64,
    pub stocks: f64,
    pub fd: f64,
    pub bonds: f64,
    pub aif: f64,
}

impl AssetRates {
    pub fn get(&self, asset: AssetClass) -> f64 {
        match asset {
            AssetClass::MutualFunds => self.mutual_funds,
            AssetClass::Stocks => self.stocks,
            AssetClass::Fd => self.fd,
            AssetClass::Bonds => self.bonds,
            AssetClass::Aif => self.aif,
        }
    }
}

/// Expected annual returns by scenario
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScenarioTable {
    normal: AssetRates,
    bullish: AssetRates,
    bearish: AssetRates,
}

impl ScenarioTable {
    /// Built-in scenario returns
    pub fn standard() -> Self {
        Self {
            normal: AssetRates {
                mutual_funds: 0.12,
                stocks: 0.15,
                fd: 0.06,
                bonds: 0.07,
                aif: 0.18,
            },
            bullish: AssetRates {
                mutual_funds: 0.18,
                stocks: 0.25,
                fd: 0.06,
                bonds: 0.07,
                aif: 0.28,
            },
            bearish: AssetRates {
                mutual_funds: 0.04,
                stocks: 0.02,
                fd: 0.06,
                bonds: 0.07,
                aif: 0.08,
            },
        }
    }

    pub fn rates(&self, scenario: Scenario) -> &AssetRates {
        match scenario {
            Scenario::Normal => &self.normal,
            Scenario::Bullish => &self.bullish,
            Scenario::Bearish => &self.bearish,
        }
    }

    /// Look up rates by scenario name
    pub fn rates_by_name(&self, name: &str) -> Result<&AssetRates> {
        Ok(self.rates(name.parse()?))
    }

    pub fn rate(&self, scenario: Scenario, asset: AssetClass) -> f64 {
        self.rates(scenario).get(asset)
    }
}

impl Default for ScenarioTable {
    fn default() -> Self {
        Self::standard()
    }
}

/// Static risk characteristics of an asset class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AssetProfile {
    /// Annual standard deviation proxy
    pub risk: f64,
    /// Sensitivity to overall market movement
    pub beta: f64,
}

/// Risk and beta for every asset class
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskTable {
    mutual_funds: AssetProfile,
    stocks: AssetProfile,
    fd: AssetProfile,
    bonds: AssetProfile,
    aif: AssetProfile,
}

impl RiskTable {
    pub fn standard() -> Self {
        Self {
            mutual_funds: AssetProfile { risk: 0.18, beta: 0.85 },
            stocks: AssetProfile { risk: 0.25, beta: 1.2 },
            fd: AssetProfile { risk: 0.02, beta: 0.0 },
            bonds: AssetProfile { risk: 0.05, beta: 0.1 },
            aif: AssetProfile { risk: 0.30, beta: 1.5 },
        }
    }

    pub fn profile(&self, asset: AssetClass) -> &AssetProfile {
        match asset {
            AssetClass::MutualFunds => &self.mutual_funds,
            AssetClass::Stocks => &self.stocks,
            AssetClass::Fd => &self.fd,
            AssetClass::Bonds => &self.bonds,
            AssetClass::Aif => &self.aif,
        }
    }

    pub fn risk(&self, asset: AssetClass) -> f64 {
        self.profile(asset).risk
    }

    pub fn beta(&self, asset: AssetClass) -> f64 {
        self.profile(asset).beta
    }
}

impl Default for RiskTable {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scenario_parsing() {
        assert_eq!("bullish".parse::<Scenario>().unwrap(), Scenario::Bullish);
        let err = "sideways".parse::<Scenario>().unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidScenario(ref name) if name == "sideways"));
    }

    #[test]
    fn test_scenario_serde_rejects_unknown() {
        let scenario: Scenario = serde_json::from_str(r#""bearish""#).unwrap();
        assert_eq!(scenario, Scenario::Bearish);
        assert_eq!(serde_json::to_string(&Scenario::Normal).unwrap(), r#""normal""#);

        let err = serde_json::from_str::<Scenario>(r#""Normal""#).unwrap_err();
        assert!(err.to_string().contains("Unknown market scenario"));
    }

    #[test]
    fn test_standard_rates() {
        let table = ScenarioTable::standard();
        assert_eq!(table.rate(Scenario::Normal, AssetClass::MutualFunds), 0.12);
        assert_eq!(table.rate(Scenario::Bullish, AssetClass::Aif), 0.28);
        assert_eq!(table.rate(Scenario::Bearish, AssetClass::Stocks), 0.02);

        // Fixed income does not move with the market
        for scenario in Scenario::ALL {
            assert_eq!(table.rate(scenario, AssetClass::Fd), 0.06);
            assert_eq!(table.rate(scenario, AssetClass::Bonds), 0.07);
        }
    }

    #[test]
    fn test_rates_by_name() {
        let table = ScenarioTable::standard();
        assert_eq!(table.rates_by_name("normal").unwrap().stocks, 0.15);
        assert!(matches!(
            table.rates_by_name("crash"),
            Err(ProjectionError::InvalidScenario(_))
        ));
    }

    #[test]
    fn test_risk_table() {
        let table = RiskTable::standard();
        assert_eq!(table.risk(AssetClass::Aif), 0.30);
        assert_eq!(table.beta(AssetClass::Stocks), 1.2);
        assert_eq!(table.beta(AssetClass::Fd), 0.0);
    }
}
