//! Asset classes and allocation weights

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Tolerance used when checking that weights add up to a full allocation
const FULL_ALLOCATION_TOLERANCE: f64 = 1e-9;

/// Investable asset class
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetClass {
    MutualFunds,
    Stocks,
    /// Fixed deposits
    Fd,
    Bonds,
    /// Alternative investment funds
    Aif,
}

impl AssetClass {
    /// Every asset class, in table order
    pub const ALL: [AssetClass; 5] = [
        AssetClass::MutualFunds,
        AssetClass::Stocks,
        AssetClass::Fd,
        AssetClass::Bonds,
        AssetClass::Aif,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AssetClass::MutualFunds => "mutual_funds",
            AssetClass::Stocks => "stocks",
            AssetClass::Fd => "fd",
            AssetClass::Bonds => "bonds",
            AssetClass::Aif => "aif",
        }
    }

    /// Human-readable label for reports
    pub fn label(&self) -> &'static str {
        match self {
            AssetClass::MutualFunds => "Mutual Funds",
            AssetClass::Stocks => "Stocks",
            AssetClass::Fd => "Fixed Deposits",
            AssetClass::Bonds => "Bonds",
            AssetClass::Aif => "AIF",
        }
    }
}

impl fmt::Display for AssetClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AssetClass {
    type Err = ProjectionError;

    fn from_str(s: &str) -> Result<Self> {
        AssetClass::ALL
            .into_iter()
            .find(|asset| asset.as_str() == s)
            .ok_or_else(|| ProjectionError::InvalidInput(format!("unknown asset class '{}'", s)))
    }
}

/// Fraction of the portfolio held in each asset class
///
/// Missing asset classes carry a weight of zero. The weights are not forced
/// to sum to one here; callers that collect allocations from users check
/// that with [`AllocationWeights::ensure_fully_allocated`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllocationWeights {
    weights: BTreeMap<AssetClass, f64>,
}

impl AllocationWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whole portfolio in a single asset class
    pub fn single(asset: AssetClass) -> Self {
        Self::new().with(asset, 1.0)
    }

    /// Builder-style setter
    pub fn with(mut self, asset: AssetClass, weight: f64) -> Self {
        self.set(asset, weight);
        self
    }

    pub fn set(&mut self, asset: AssetClass, weight: f64) {
        self.weights.insert(asset, weight);
    }

    /// Build from whole-number percentages (e.g. 40 => 0.40)
    pub fn from_percentages(percentages: &[(AssetClass, u32)]) -> Self {
        let mut weights = Self::new();
        for &(asset, pct) in percentages {
            weights.set(asset, pct as f64 / 100.0);
        }
        weights
    }

    /// Weight for an asset class, zero when absent
    pub fn weight(&self, asset: AssetClass) -> f64 {
        self.weights.get(&asset).copied().unwrap_or(0.0)
    }

    /// Sum of all weights
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Explicitly set (asset, weight) pairs
    pub fn iter(&self) -> impl Iterator<Item = (AssetClass, f64)> + '_ {
        self.weights.iter().map(|(&asset, &weight)| (asset, weight))
    }

    /// Weighted sum of a per-asset table
    pub fn weighted_sum<F>(&self, table: F) -> f64
    where
        F: Fn(AssetClass) -> f64,
    {
        AssetClass::ALL
            .iter()
            .map(|&asset| self.weight(asset) * table(asset))
            .sum()
    }

    /// Every weight must be a finite fraction in [0, 1]
    pub fn validate(&self) -> Result<()> {
        for (asset, weight) in self.iter() {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(ProjectionError::InvalidInput(format!(
                    "allocation weight for {} must be within [0, 1], got {}",
                    asset, weight
                )));
            }
        }
        Ok(())
    }

    /// Check that the allocation covers exactly 100% of the portfolio
    pub fn ensure_fully_allocated(&self) -> Result<()> {
        self.validate()?;
        let total = self.total();
        if (total - 1.0).abs() > FULL_ALLOCATION_TOLERANCE {
            return Err(ProjectionError::InvalidInput(format!(
                "total allocation should be 100%, current: {:.0}%",
                total * 100.0
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_weight_is_zero() {
        let weights = AllocationWeights::single(AssetClass::Stocks);
        assert_eq!(weights.weight(AssetClass::Stocks), 1.0);
        assert_eq!(weights.weight(AssetClass::Bonds), 0.0);
    }

    #[test]
    fn test_from_percentages() {
        let weights = AllocationWeights::from_percentages(&[
            (AssetClass::MutualFunds, 40),
            (AssetClass::Stocks, 20),
            (AssetClass::Fd, 20),
            (AssetClass::Bonds, 15),
            (AssetClass::Aif, 5),
        ]);
        assert!((weights.weight(AssetClass::Bonds) - 0.15).abs() < 1e-12);
        assert!(weights.ensure_fully_allocated().is_ok());
    }

    #[test]
    fn test_partial_allocation_rejected() {
        let weights = AllocationWeights::from_percentages(&[
            (AssetClass::MutualFunds, 50),
            (AssetClass::Stocks, 30),
        ]);
        let err = weights.ensure_fully_allocated().unwrap_err();
        assert!(matches!(err, ProjectionError::InvalidInput(_)));
        assert!(err.to_string().contains("80%"));
    }

    #[test]
    fn test_weight_out_of_range() {
        let weights = AllocationWeights::new().with(AssetClass::Aif, 1.5);
        assert!(matches!(weights.validate(), Err(ProjectionError::InvalidInput(_))));

        let negative = AllocationWeights::new().with(AssetClass::Fd, -0.1);
        assert!(negative.validate().is_err());
    }

    #[test]
    fn test_asset_class_parsing() {
        assert_eq!("mutual_funds".parse::<AssetClass>().unwrap(), AssetClass::MutualFunds);
        assert_eq!("aif".parse::<AssetClass>().unwrap(), AssetClass::Aif);
        assert!("crypto".parse::<AssetClass>().is_err());
    }

    #[test]
    fn test_serde_uses_snake_case_keys() {
        let weights: AllocationWeights =
            serde_json::from_str(r#"{"mutual_funds": 0.6, "fd": 0.4}"#).unwrap();
        assert_eq!(weights.weight(AssetClass::MutualFunds), 0.6);
        assert_eq!(weights.weight(AssetClass::Fd), 0.4);
        assert_eq!(weights.weight(AssetClass::Stocks), 0.0);

        assert!(serde_json::from_str::<AllocationWeights>(r#"{"gold": 1.0}"#).is_err());
    }
}
