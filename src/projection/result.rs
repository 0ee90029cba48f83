//! Projection output structures

use serde::{Deserialize, Serialize};

/// Derived figures for one projection
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Principal plus every monthly contribution
    pub total_invested: f64,

    /// Nominal value at the end of the horizon
    pub future_value: f64,

    /// Future value deflated by compounding inflation
    pub real_future_value: f64,

    /// Nominal value less the amount invested
    pub gains: f64,

    /// Weighted expected annual return
    pub portfolio_return: f64,

    /// Weighted annual risk
    pub portfolio_risk: f64,

    /// Weighted market beta
    pub portfolio_beta: f64,
}

impl ProjectionResult {
    /// Gains as a multiple of the amount invested
    pub fn return_on_investment(&self) -> Option<f64> {
        if self.total_invested > 0.0 {
            Some(self.gains / self.total_invested)
        } else {
            None
        }
    }

    /// Value lost to inflation over the horizon
    pub fn inflation_drag(&self) -> f64 {
        self.future_value - self.real_future_value
    }
}

/// One year of a projection trajectory
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearRow {
    pub year: u32,
    pub total_invested: f64,
    pub future_value: f64,
    pub real_future_value: f64,
}

impl YearRow {
    pub fn gains(&self) -> f64 {
        self.future_value - self.total_invested
    }
}
