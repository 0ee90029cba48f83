//! Personalized plan report assembled from projection outputs

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::assumptions::{AllocationWeights, Scenario};
use crate::config::PlannerConfig;
use crate::error::Result;
use crate::profile::{InvestorPersona, RiskProfile};
use crate::projection::{
    assess_goal, GoalAssessment, GoalPlan, ProjectionEngine, ProjectionInput, ProjectionResult, YearRow,
};

/// Everything a reporting front end needs to present a plan
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport {
    pub generated_at: DateTime<Utc>,
    pub goal: GoalPlan,
    pub persona: InvestorPersona,
    pub risk_profile: RiskProfile,
    pub suggested_equity_share: f64,
    pub product_suggestions: Vec<String>,
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub allocation: AllocationWeights,
    pub scenario: Scenario,
    pub projection: ProjectionResult,
    pub assessment: GoalAssessment,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Vec<YearRow>>,
}

/// Inputs the investor chose for a goal
#[derive(Debug, Clone)]
pub struct PlanSelection {
    pub goal: GoalPlan,
    pub initial_investment: f64,
    pub monthly_contribution: f64,
    pub allocation: AllocationWeights,
}

impl PlanReport {
    /// Project the selection over the goal horizon and assess it
    ///
    /// The allocation must cover the whole portfolio.
    pub fn build(
        engine: &ProjectionEngine,
        config: &PlannerConfig,
        persona: &InvestorPersona,
        selection: &PlanSelection,
    ) -> Result<Self> {
        selection.goal.validate()?;
        selection.allocation.ensure_fully_allocated()?;

        let input = ProjectionInput {
            principal: selection.initial_investment,
            years: selection.goal.horizon_years,
            monthly_contribution: selection.monthly_contribution,
            allocation: selection.allocation.clone(),
            scenario: config.goal_scenario,
            inflation_rate: config.goal_inflation_rate,
        };

        let projection = engine.project(&input)?;
        let assessment = assess_goal(
            &selection.goal,
            selection.initial_investment,
            &projection,
            config.goal_inflation_rate,
        )?;
        let schedule = if config.include_schedule {
            Some(engine.schedule(&input)?)
        } else {
            None
        };

        let risk_profile = persona.risk_profile;

        Ok(Self {
            generated_at: Utc::now(),
            goal: selection.goal.clone(),
            persona: persona.clone(),
            risk_profile,
            suggested_equity_share: risk_profile.default_equity_share(),
            product_suggestions: risk_profile
                .product_suggestions()
                .iter()
                .map(|s| s.to_string())
                .collect(),
            initial_investment: selection.initial_investment,
            monthly_contribution: selection.monthly_contribution,
            allocation: selection.allocation.clone(),
            scenario: config.goal_scenario,
            projection,
            assessment,
            schedule,
        })
    }
}
