//! Plan records for batch projections

use serde::{Deserialize, Serialize};

use crate::assumptions::Scenario;
use crate::projection::{ProjectionInput, ProjectionResult};

/// A projection input tagged with an identifier
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRecord {
    pub plan_id: u32,
    pub input: ProjectionInput,
}

impl PlanRecord {
    pub fn new(plan_id: u32, input: ProjectionInput) -> Self {
        Self { plan_id, input }
    }
}

/// Flattened projection output for one plan, written as a CSV row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanOutcome {
    #[serde(rename = "PlanId")]
    pub plan_id: u32,
    #[serde(rename = "Scenario")]
    pub scenario: Scenario,
    #[serde(rename = "TotalInvested")]
    pub total_invested: f64,
    #[serde(rename = "FutureValue")]
    pub future_value: f64,
    #[serde(rename = "RealFutureValue")]
    pub real_future_value: f64,
    #[serde(rename = "Gains")]
    pub gains: f64,
    #[serde(rename = "PortfolioReturn")]
    pub portfolio_return: f64,
    #[serde(rename = "PortfolioRisk")]
    pub portfolio_risk: f64,
    #[serde(rename = "PortfolioBeta")]
    pub portfolio_beta: f64,
}

impl PlanOutcome {
    pub fn from_result(record: &PlanRecord, result: &ProjectionResult) -> Self {
        Self {
            plan_id: record.plan_id,
            scenario: record.input.scenario,
            total_invested: result.total_invested,
            future_value: result.future_value,
            real_future_value: result.real_future_value,
            gains: result.gains,
            portfolio_return: result.portfolio_return,
            portfolio_risk: result.portfolio_risk,
            portfolio_beta: result.portfolio_beta,
        }
    }
}
