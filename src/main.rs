//! Portfolio Planner CLI
//!
//! Command-line interface for scenario comparisons, goal plans and batch runs

use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand};

use portfolio_planner::plan::{load_plans, write_outcomes};
use portfolio_planner::projection::GoalStatus;
use portfolio_planner::{
    AllocationWeights, AssetClass, GoalPlan, InvestorPersona, PlanReport, PlanSelection, PlannerConfig,
    ProjectionInput, Questionnaire, ScenarioRunner,
};

/// Project investments under market scenarios and plan toward goals.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare one investment across normal, bull and bear markets.
    Compare(CompareArgs),
    /// Build a goal plan from a risk questionnaire and a refined allocation.
    Plan(PlanArgs),
    /// Project every plan in a CSV file and write the outcomes.
    Batch(BatchArgs),
}

#[derive(Args)]
struct AllocationArgs {
    /// Mutual funds share (%)
    #[arg(long, default_value_t = 40, value_parser = clap::value_parser!(u32).range(0..=100))]
    mutual_funds: u32,
    /// Stocks share (%)
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(0..=100))]
    stocks: u32,
    /// Fixed deposits share (%)
    #[arg(long, default_value_t = 20, value_parser = clap::value_parser!(u32).range(0..=100))]
    fd: u32,
    /// Bonds share (%)
    #[arg(long, default_value_t = 15, value_parser = clap::value_parser!(u32).range(0..=100))]
    bonds: u32,
    /// AIF share (%)
    #[arg(long, default_value_t = 5, value_parser = clap::value_parser!(u32).range(0..=100))]
    aif: u32,
}

impl AllocationArgs {
    fn weights(&self) -> AllocationWeights {
        AllocationWeights::from_percentages(&[
            (AssetClass::MutualFunds, self.mutual_funds),
            (AssetClass::Stocks, self.stocks),
            (AssetClass::Fd, self.fd),
            (AssetClass::Bonds, self.bonds),
            (AssetClass::Aif, self.aif),
        ])
    }
}

#[derive(Args)]
struct CompareArgs {
    /// Lump sum invested upfront
    #[arg(long, default_value_t = 100_000.0)]
    principal: f64,

    /// Monthly SIP contribution
    #[arg(long, default_value_t = 0.0)]
    monthly: f64,

    /// Time horizon in years
    #[arg(long, default_value_t = 10)]
    years: u32,

    /// Annual inflation rate (decimal)
    #[arg(long, default_value_t = 0.0)]
    inflation: f64,

    #[command(flatten)]
    allocation: AllocationArgs,
}

#[derive(Args)]
struct PlanArgs {
    /// Goal name (e.g., "Retirement")
    #[arg(long)]
    goal: String,

    /// Goal target amount
    #[arg(long)]
    target: f64,

    /// Goal horizon in years
    #[arg(long, default_value_t = 10)]
    horizon: u32,

    /// Annual income
    #[arg(long)]
    income: f64,

    /// Total assets excluding this investment
    #[arg(long, default_value_t = 0.0)]
    assets: f64,

    /// Six months of salary saved as an emergency fund
    #[arg(long)]
    emergency_fund: bool,

    /// Reaction to a 20% monthly drop: 1 sell all, 2 sell some, 3 hold, 4 buy more
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    drawdown: u8,

    /// Primary goal: 1 protection, 2 income, 3 balanced, 4 aggressive growth
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=4))]
    objective: u8,

    /// Horizon band: 1 (1-3y), 2 (3-5y), 3 (5-10y), 4 (10y+)
    #[arg(long = "horizon-band", value_parser = clap::value_parser!(u8).range(1..=4))]
    horizon_band: u8,

    /// Initial investment
    #[arg(long, default_value_t = 0.0)]
    initial: f64,

    /// Monthly SIP contribution
    #[arg(long, default_value_t = 5_000.0)]
    sip: f64,

    /// Direct stocks share (%); mutual funds take the remainder
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=100))]
    stocks: u32,

    /// AIF share (%); mutual funds take the remainder
    #[arg(long, default_value_t = 0, value_parser = clap::value_parser!(u32).range(0..=100))]
    aif: u32,
}

#[derive(Args)]
struct BatchArgs {
    /// CSV file of plans
    input: PathBuf,

    /// Where to write the outcome CSV
    #[arg(long, default_value = "plan_outcomes.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let config = PlannerConfig::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command {
        Commands::Compare(args) => handle_compare(args, cli.json),
        Commands::Plan(args) => handle_plan(args, &config, cli.json),
        Commands::Batch(args) => handle_batch(args),
    }
}

fn handle_compare(args: CompareArgs, json: bool) -> Result<()> {
    let allocation = args.allocation.weights();
    allocation.ensure_fully_allocated()?;

    let input = ProjectionInput::lump_sum(args.principal, args.years, allocation)
        .with_monthly_contribution(args.monthly)
        .with_inflation(args.inflation);

    let runner = ScenarioRunner::new();
    let outcomes = runner.run_all_scenarios(&input)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&outcomes)?);
        return Ok(());
    }

    println!("Investment Projections ({} years)", args.years);
    println!("{}", "=".repeat(78));
    println!(
        "{:<14} {:>10} {:>16} {:>16} {:>16}",
        "Scenario", "Return", "Invested", "Future Value", "Gains"
    );
    println!("{}", "-".repeat(78));
    for outcome in &outcomes {
        let r = &outcome.result;
        println!(
            "{:<14} {:>9.2}% {:>16.0} {:>16.0} {:>16.0}",
            outcome.scenario.label(),
            r.portfolio_return * 100.0,
            r.total_invested,
            r.future_value,
            r.gains,
        );
    }

    if let Some(first) = outcomes.first() {
        println!();
        println!("Portfolio risk: {:.2}%", first.result.portfolio_risk * 100.0);
        println!("Portfolio beta: {:.2}", first.result.portfolio_beta);
    }
    if args.inflation > 0.0 {
        println!();
        for outcome in &outcomes {
            println!(
                "  {:<14} inflation-adjusted value: {:.0}",
                outcome.scenario.label(),
                outcome.result.real_future_value
            );
        }
    }

    Ok(())
}

fn handle_plan(args: PlanArgs, config: &PlannerConfig, json: bool) -> Result<()> {
    let fixed_share = args.stocks.checked_add(args.aif).filter(|share| *share <= 100);
    let Some(fixed_share) = fixed_share else {
        bail!(
            "Stocks ({}%) and AIF ({}%) exceed 100% of the portfolio",
            args.stocks,
            args.aif
        );
    };

    let answers = Questionnaire::from_choices(args.drawdown, args.objective, args.horizon_band)?;
    let persona = InvestorPersona::new(args.income, args.assets, args.emergency_fund, &answers)?;

    let selection = PlanSelection {
        goal: GoalPlan::new(args.goal, args.target, args.horizon),
        initial_investment: args.initial,
        monthly_contribution: args.sip,
        allocation: AllocationWeights::from_percentages(&[
            (AssetClass::MutualFunds, 100 - fixed_share),
            (AssetClass::Stocks, args.stocks),
            (AssetClass::Aif, args.aif),
        ]),
    };

    let runner = ScenarioRunner::new();
    let report = PlanReport::build(runner.engine(), config, &persona, &selection)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("Plan for goal: {}", report.goal.name);
    println!("{}", "=".repeat(60));
    println!(
        "Target: {:.0} | Horizon: {} years",
        report.goal.target, report.goal.horizon_years
    );
    println!(
        "Risk profile: {} (suggested equity share {:.0}%)",
        report.risk_profile,
        report.suggested_equity_share * 100.0
    );

    println!("\nSuggested products:");
    for suggestion in &report.product_suggestions {
        println!("  - {}", suggestion);
    }

    let p = &report.projection;
    println!(
        "\nProjection ({} market, {:.1}% inflation):",
        report.scenario,
        config.goal_inflation_rate * 100.0
    );
    println!("  Initial investment:   {:>16.0}", report.initial_investment);
    println!("  Monthly SIP:          {:>16.0}", report.monthly_contribution);
    println!("  Portfolio return:     {:>15.1}%", p.portfolio_return * 100.0);
    println!("  Future value:         {:>16.0}", p.future_value);
    println!("  Inflation-adjusted:   {:>16.0}", p.real_future_value);

    if let Some(schedule) = &report.schedule {
        println!("\n{:>5} {:>16} {:>16} {:>16}", "Year", "Invested", "Value", "Real Value");
        for row in schedule {
            println!(
                "{:>5} {:>16.0} {:>16.0} {:>16.0}",
                row.year, row.total_invested, row.future_value, row.real_future_value
            );
        }
    }

    let assessment = &report.assessment;
    println!("\nTime to reach goal:");
    match assessment.years_to_target {
        Some(years) => println!("  About {:.1} years with the current allocation", years),
        None => println!("  Add an initial investment with a positive return to estimate this"),
    }

    println!("\nInflation-adjusted target: {:.0}", assessment.inflation_adjusted_target);
    match assessment.status {
        GoalStatus::OnTrack { surplus } => {
            println!("  On track: projected to exceed the target by {:.0}", surplus);
        }
        GoalStatus::Shortfall {
            shortfall,
            additional_monthly: Some(extra),
        } => {
            println!("  Shortfall of {:.0}; invest about {:.0} more per month", shortfall, extra);
        }
        GoalStatus::Shortfall {
            shortfall,
            additional_monthly: None,
        } => {
            println!(
                "  Shortfall of {:.0}; a positive portfolio return is needed to size extra contributions",
                shortfall
            );
        }
    }

    Ok(())
}

fn handle_batch(args: BatchArgs) -> Result<()> {
    let plans = load_plans(&args.input)
        .with_context(|| format!("Failed to load plans from {}", args.input.display()))?;
    println!("Loaded {} plans", plans.len());

    let runner = ScenarioRunner::new();
    let outcomes = runner.run_plans(&plans)?;

    let file = File::create(&args.output)
        .with_context(|| format!("Unable to create {}", args.output.display()))?;
    write_outcomes(BufWriter::new(file), &outcomes)?;

    println!("Results written to: {}", args.output.display());
    Ok(())
}
