//! Planner configuration
//!
//! Loaded from an optional JSON file, then overridden by environment:
//!   PLANNER_GOAL_INFLATION - inflation used for goal planning (decimal)

use std::env;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::assumptions::Scenario;
use crate::error::{ProjectionError, Result};

/// Inflation assumed when measuring goals (4.5%)
pub const DEFAULT_GOAL_INFLATION: f64 = 0.045;

pub const GOAL_INFLATION_ENV: &str = "PLANNER_GOAL_INFLATION";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    /// Inflation used to grow goal targets and deflate goal projections
    pub goal_inflation_rate: f64,

    /// Scenario used for goal planning
    pub goal_scenario: Scenario,

    /// Include the year-by-year trajectory in reports
    pub include_schedule: bool,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            goal_inflation_rate: DEFAULT_GOAL_INFLATION,
            goal_scenario: Scenario::Normal,
            include_schedule: false,
        }
    }
}

impl PlannerConfig {
    /// Parse a JSON document; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ProjectionError::InvalidInput(format!("invalid config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a JSON file
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json(&contents)
    }

    /// Defaults or file contents, then environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };
        config.apply_env_overrides()?;
        Ok(config)
    }

    pub fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(value) = env::var(GOAL_INFLATION_ENV) {
            self.goal_inflation_rate = value.trim().parse().map_err(|_| {
                ProjectionError::InvalidInput(format!("{} must be a number, got '{}'", GOAL_INFLATION_ENV, value))
            })?;
        }
        self.validate()
    }

    pub fn validate(&self) -> Result<()> {
        if !self.goal_inflation_rate.is_finite() || self.goal_inflation_rate < 0.0 {
            return Err(ProjectionError::InvalidInput(format!(
                "goal inflation rate must be non-negative, got {}",
                self.goal_inflation_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = PlannerConfig::default();
        assert_eq!(config.goal_inflation_rate, 0.045);
        assert_eq!(config.goal_scenario, Scenario::Normal);
        assert!(!config.include_schedule);
    }

    #[test]
    fn test_partial_json() {
        let config = PlannerConfig::from_json(r#"{"goal_scenario": "bearish"}"#).unwrap();
        assert_eq!(config.goal_scenario, Scenario::Bearish);
        assert_eq!(config.goal_inflation_rate, DEFAULT_GOAL_INFLATION);
    }

    #[test]
    fn test_invalid_json() {
        assert!(PlannerConfig::from_json(r#"{"goal_inflation_rate": -0.1}"#).is_err());
        assert!(PlannerConfig::from_json(r#"{"goal_scenario": "flat"}"#).is_err());
        assert!(PlannerConfig::from_json("not json").is_err());
    }

    #[test]
    fn test_env_override() {
        // Single test so parallel tests never race on the variable
        env::set_var(GOAL_INFLATION_ENV, " 0.06 ");
        let config = PlannerConfig::load(None).unwrap();
        assert_eq!(config.goal_inflation_rate, 0.06);

        env::set_var(GOAL_INFLATION_ENV, "abc");
        assert!(matches!(PlannerConfig::load(None), Err(ProjectionError::InvalidInput(_))));

        env::set_var(GOAL_INFLATION_ENV, "-0.02");
        assert!(matches!(PlannerConfig::load(None), Err(ProjectionError::InvalidInput(_))));

        env::remove_var(GOAL_INFLATION_ENV);
        assert_eq!(PlannerConfig::load(None).unwrap().goal_inflation_rate, DEFAULT_GOAL_INFLATION);
    }

    #[test]
    fn test_missing_file() {
        let err = PlannerConfig::from_path(Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ProjectionError::Io(_)));
    }
}
