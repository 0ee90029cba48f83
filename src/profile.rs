//! Investor risk profiling from the three-question questionnaire

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{ProjectionError, Result};

/// Reaction to a 20% drop in portfolio value within a month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawdownReaction {
    SellEverything,
    SellSome,
    Hold,
    BuyMore,
}

/// Primary goal for the investment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvestmentObjective {
    CapitalProtection,
    SteadyIncome,
    BalancedGrowth,
    AggressiveGrowth,
}

/// Investment horizon band
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizonBand {
    OneToThreeYears,
    ThreeToFiveYears,
    FiveToTenYears,
    TenPlusYears,
}

impl DrawdownReaction {
    pub fn score(&self) -> u8 {
        match self {
            DrawdownReaction::SellEverything => 1,
            DrawdownReaction::SellSome => 2,
            DrawdownReaction::Hold => 3,
            DrawdownReaction::BuyMore => 4,
        }
    }
}

impl InvestmentObjective {
    pub fn score(&self) -> u8 {
        match self {
            InvestmentObjective::CapitalProtection => 1,
            InvestmentObjective::SteadyIncome => 2,
            InvestmentObjective::BalancedGrowth => 3,
            InvestmentObjective::AggressiveGrowth => 4,
        }
    }
}

impl HorizonBand {
    pub fn score(&self) -> u8 {
        match self {
            HorizonBand::OneToThreeYears => 1,
            HorizonBand::ThreeToFiveYears => 2,
            HorizonBand::FiveToTenYears => 3,
            HorizonBand::TenPlusYears => 4,
        }
    }
}

/// Answers to the risk questionnaire
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Questionnaire {
    pub drawdown_reaction: DrawdownReaction,
    pub objective: InvestmentObjective,
    pub horizon: HorizonBand,
}

impl Questionnaire {
    /// Build from the 1-based option chosen for each question
    pub fn from_choices(drawdown: u8, objective: u8, horizon: u8) -> Result<Self> {
        let drawdown_reaction = match drawdown {
            1 => DrawdownReaction::SellEverything,
            2 => DrawdownReaction::SellSome,
            3 => DrawdownReaction::Hold,
            4 => DrawdownReaction::BuyMore,
            other => return Err(invalid_choice("drawdown reaction", other)),
        };
        let objective = match objective {
            1 => InvestmentObjective::CapitalProtection,
            2 => InvestmentObjective::SteadyIncome,
            3 => InvestmentObjective::BalancedGrowth,
            4 => InvestmentObjective::AggressiveGrowth,
            other => return Err(invalid_choice("investment objective", other)),
        };
        let horizon = match horizon {
            1 => HorizonBand::OneToThreeYears,
            2 => HorizonBand::ThreeToFiveYears,
            3 => HorizonBand::FiveToTenYears,
            4 => HorizonBand::TenPlusYears,
            other => return Err(invalid_choice("horizon", other)),
        };
        Ok(Self {
            drawdown_reaction,
            objective,
            horizon,
        })
    }

    pub fn score(&self) -> u8 {
        self.drawdown_reaction.score() + self.objective.score() + self.horizon.score()
    }

    pub fn risk_profile(&self) -> RiskProfile {
        RiskProfile::from_score(self.score())
    }
}

fn invalid_choice(question: &str, choice: u8) -> ProjectionError {
    ProjectionError::InvalidInput(format!("{} answer must be 1-4, got {}", question, choice))
}

/// Five-bucket investor risk profile
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskProfile {
    Conservative,
    ModeratelyConservative,
    Moderate,
    ModeratelyAggressive,
    Aggressive,
}

impl RiskProfile {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=5 => RiskProfile::Conservative,
            6..=8 => RiskProfile::ModeratelyConservative,
            9..=10 => RiskProfile::Moderate,
            11..=12 => RiskProfile::ModeratelyAggressive,
            _ => RiskProfile::Aggressive,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RiskProfile::Conservative => "Conservative",
            RiskProfile::ModeratelyConservative => "Moderately Conservative",
            RiskProfile::Moderate => "Moderate",
            RiskProfile::ModeratelyAggressive => "Moderately Aggressive",
            RiskProfile::Aggressive => "Aggressive",
        }
    }

    /// Suggested equity share of a refined mutual fund allocation
    pub fn default_equity_share(&self) -> f64 {
        match self {
            RiskProfile::Conservative => 0.20,
            RiskProfile::ModeratelyConservative => 0.35,
            RiskProfile::Moderate => 0.50,
            RiskProfile::ModeratelyAggressive => 0.65,
            RiskProfile::Aggressive => 0.80,
        }
    }

    /// Product categories to suggest for this profile
    pub fn product_suggestions(&self) -> &'static [&'static str] {
        match self {
            RiskProfile::Aggressive => &[
                "Mutual Funds: Aggressive Equity Funds (e.g., Small Cap, Sectoral Funds)",
                "Stocks: High-growth stocks in emerging sectors (e.g., Tech, EVs)",
                "AIFs: Category III AIFs (Hedge Funds) for sophisticated investors",
            ],
            // Moderately aggressive investors share the balanced list
            RiskProfile::ModeratelyAggressive | RiskProfile::Moderate => &[
                "Mutual Funds: Hybrid Funds, Large Cap and Mid Cap Equity Funds",
                "Stocks: Blue-chip stocks with stable growth and dividends",
                "AIFs: Category II AIFs (Private Equity, Debt Funds)",
            ],
            RiskProfile::ModeratelyConservative => &[
                "Mutual Funds: Balanced Advantage Funds, Large & Mid Cap Funds",
                "Bonds: High-rated Corporate Bonds, Dynamic Bond Funds",
                "Fixed Deposits: Laddered Fixed Deposits",
            ],
            RiskProfile::Conservative => &[
                "Mutual Funds: Debt Funds, Index Funds, Large Cap Funds",
                "Bonds: Government Bonds, High-rated Corporate Bonds",
                "Fixed Deposits: Traditional Bank Fixed Deposits",
            ],
        }
    }
}

impl fmt::Display for RiskProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Financial snapshot and risk profile of an investor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvestorPersona {
    pub annual_income: f64,
    /// Assets excluding the planned investment
    pub total_assets: f64,
    /// Six months of salary held as an emergency fund
    pub has_emergency_fund: bool,
    pub risk_profile: RiskProfile,
}

impl InvestorPersona {
    pub fn new(
        annual_income: f64,
        total_assets: f64,
        has_emergency_fund: bool,
        questionnaire: &Questionnaire,
    ) -> Result<Self> {
        if !annual_income.is_finite() || annual_income < 0.0 {
            return Err(ProjectionError::InvalidInput(format!(
                "annual income must be non-negative, got {}",
                annual_income
            )));
        }
        if !total_assets.is_finite() || total_assets < 0.0 {
            return Err(ProjectionError::InvalidInput(format!(
                "total assets must be non-negative, got {}",
                total_assets
            )));
        }
        Ok(Self {
            annual_income,
            total_assets,
            has_emergency_fund,
            risk_profile: questionnaire.risk_profile(),
        })
    }
}
