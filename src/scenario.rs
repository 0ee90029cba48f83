//! Scenario runner for comparisons and batch projections
//!
//! Holds one engine and runs many projections against it, either the same
//! input under every market scenario or a batch of plans in parallel.

use log::info;
use rayon::prelude::*;
use serde::Serialize;

use crate::assumptions::{MarketAssumptions, Scenario};
use crate::error::Result;
use crate::plan::{PlanOutcome, PlanRecord};
use crate::projection::{ProjectionEngine, ProjectionInput, ProjectionResult};

/// Projection of one input under a named scenario
#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub scenario: Scenario,
    pub result: ProjectionResult,
}

/// Pre-built scenario runner for repeated projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// for outcome in runner.run_all_scenarios(&input)? {
///     println!("{}: {:.0}", outcome.scenario.label(), outcome.result.future_value);
/// }
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner over the built-in market tables
    pub fn new() -> Self {
        Self {
            engine: ProjectionEngine::standard(),
        }
    }

    /// Create runner with custom assumptions
    pub fn with_assumptions(assumptions: MarketAssumptions) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions),
        }
    }

    /// Run a single projection
    pub fn run(&self, input: &ProjectionInput) -> Result<ProjectionResult> {
        self.engine.project(input)
    }

    /// Run the input under every scenario (normal, bullish, bearish)
    ///
    /// The input's own scenario is ignored.
    pub fn run_all_scenarios(&self, input: &ProjectionInput) -> Result<Vec<ScenarioOutcome>> {
        Scenario::ALL
            .iter()
            .map(|&scenario| {
                let scenario_input = input.clone().with_scenario(scenario);
                self.engine.project(&scenario_input).map(|result| ScenarioOutcome { scenario, result })
            })
            .collect()
    }

    /// Run many inputs in parallel; results keep the input order
    pub fn run_batch(&self, inputs: &[ProjectionInput]) -> Vec<Result<ProjectionResult>> {
        info!("running batch of {} projections", inputs.len());
        inputs.par_iter().map(|input| self.engine.project(input)).collect()
    }

    /// Run a batch of plan records in parallel
    pub fn run_plans(&self, plans: &[PlanRecord]) -> Result<Vec<PlanOutcome>> {
        info!("running {} plans", plans.len());
        plans
            .par_iter()
            .map(|plan| {
                self.engine
                    .project(&plan.input)
                    .map(|result| PlanOutcome::from_result(plan, &result))
            })
            .collect()
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}
