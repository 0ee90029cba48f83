//! Load plans from CSV and write projection outcomes back out
//!
//! Input columns:
//! `PlanId,Principal,Years,MonthlyContribution,MutualFunds,Stocks,FD,Bonds,AIF,Scenario,InflationRate`
//! with allocation columns given as percentages.

use std::io::{Read, Write};
use std::path::Path;

use csv::{Reader, Writer};

use super::{PlanOutcome, PlanRecord};
use crate::assumptions::{AllocationWeights, AssetClass, Scenario};
use crate::error::Result;
use crate::projection::ProjectionInput;

/// Raw CSV row matching the plan file columns
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "PlanId")]
    plan_id: u32,
    #[serde(rename = "Principal")]
    principal: f64,
    #[serde(rename = "Years")]
    years: u32,
    #[serde(rename = "MonthlyContribution")]
    monthly_contribution: f64,
    #[serde(rename = "MutualFunds")]
    mutual_funds: f64,
    #[serde(rename = "Stocks")]
    stocks: f64,
    #[serde(rename = "FD")]
    fd: f64,
    #[serde(rename = "Bonds")]
    bonds: f64,
    #[serde(rename = "AIF")]
    aif: f64,
    #[serde(rename = "Scenario")]
    scenario: String,
    #[serde(rename = "InflationRate", default)]
    inflation_rate: f64,
}

impl CsvRow {
    fn to_plan(self) -> Result<PlanRecord> {
        let scenario: Scenario = self.scenario.trim().parse()?;

        let allocation = AllocationWeights::new()
            .with(AssetClass::MutualFunds, self.mutual_funds / 100.0)
            .with(AssetClass::Stocks, self.stocks / 100.0)
            .with(AssetClass::Fd, self.fd / 100.0)
            .with(AssetClass::Bonds, self.bonds / 100.0)
            .with(AssetClass::Aif, self.aif / 100.0);

        let input = ProjectionInput {
            principal: self.principal,
            years: self.years,
            monthly_contribution: self.monthly_contribution,
            allocation,
            scenario,
            inflation_rate: self.inflation_rate,
        };
        input.validate()?;

        Ok(PlanRecord::new(self.plan_id, input))
    }
}

/// Load all plans from a CSV file
pub fn load_plans<P: AsRef<Path>>(path: P) -> Result<Vec<PlanRecord>> {
    let reader = Reader::from_path(path)?;
    collect_plans(reader)
}

/// Load plans from any reader (e.g., string buffer, stdin)
pub fn load_plans_from_reader<R: Read>(reader: R) -> Result<Vec<PlanRecord>> {
    collect_plans(Reader::from_reader(reader))
}

fn collect_plans<R: Read>(mut reader: Reader<R>) -> Result<Vec<PlanRecord>> {
    let mut plans = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        plans.push(row.to_plan()?);
    }

    Ok(plans)
}

/// Write one CSV row per outcome, with a header
pub fn write_outcomes<W: Write>(writer: W, outcomes: &[PlanOutcome]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    for outcome in outcomes {
        csv_writer.serialize(outcome)?;
    }
    csv_writer.flush()?;
    Ok(())
}
