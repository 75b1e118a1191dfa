//! Command-line arguments
//!
//! Every calculator flag is optional. Flags that are set override the saved
//! config, which in turn overrides the built-in defaults.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use fincalc_core::model::{
    BacktestInput, BudgetInput, CompoundInput, ContributionPolicy, ExpectancyInput, GoalInput,
    Granularity, RateBasis,
};

#[derive(Parser, Debug)]
#[command(name = "fincalc")]
#[command(about = "Compound growth, goal, backtest and expectancy calculators")]
pub struct Args {
    /// Path to the config file (default: {data_dir}/config.yaml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the data directory (default: ~/.fincalc/)
    #[arg(short, long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, global = true, default_value = "info")]
    pub log_level: String,

    /// Output format
    #[arg(short, long, global = true, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List assets with their year bounds and data sources
    Assets,
    /// Annual returns and prices of one asset
    Returns(ReturnsArgs),
    /// Project compound growth of a principal
    Compound(CompoundArgs),
    /// Portfolio needed for a monthly income and the return required to reach it
    Goal(GoalArgs),
    /// Replay an investment over historical annual returns
    Backtest(BacktestArgs),
    /// Expectancy and risk of ruin from win rate and payoff ratio
    Expectancy(ExpectancyArgs),
    /// Budget breakdown and spending sustainability
    Review(ReviewArgs),
    /// Write the effective defaults to the config file
    SaveConfig,
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ReturnsArgs {
    #[arg(long)]
    pub asset: String,
    #[arg(long)]
    pub start: Option<i16>,
    #[arg(long)]
    pub end: Option<i16>,
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct CompoundArgs {
    /// Rate in percent per period of --basis
    #[arg(long)]
    pub rate: Option<f64>,
    /// annual, monthly or daily
    #[arg(long)]
    pub basis: Option<RateBasis>,
    #[arg(long)]
    pub years: Option<f64>,
    #[arg(long)]
    pub months: Option<f64>,
    #[arg(long)]
    pub days: Option<f64>,
    #[arg(long)]
    pub principal: Option<f64>,
    /// monthly or daily
    #[arg(long)]
    pub granularity: Option<Granularity>,
    /// Print every point instead of the thinned chart series
    #[arg(long)]
    pub full: bool,
}

impl CompoundArgs {
    pub fn apply(&self, input: &mut CompoundInput) {
        // a horizon given on the command line replaces the saved one entirely
        if self.years.is_some() || self.months.is_some() || self.days.is_some() {
            input.horizon.years = self.years.unwrap_or(0.0);
            input.horizon.months = self.months.unwrap_or(0.0);
            input.horizon.days = self.days.unwrap_or(0.0);
        }
        set(&mut input.rate_pct, self.rate);
        set(&mut input.basis, self.basis);
        set(&mut input.principal, self.principal);
        set(&mut input.granularity, self.granularity);
    }
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct GoalArgs {
    #[arg(long)]
    pub years: Option<f64>,
    #[arg(long)]
    pub monthly_income: Option<f64>,
    /// Dividend yield in percent
    #[arg(long)]
    pub dividend_rate: Option<f64>,
    #[arg(long)]
    pub current_assets: Option<f64>,
    /// Annual inflation in percent
    #[arg(long)]
    pub inflation: Option<f64>,
    /// Starting amount for a fixed-rate what-if projection
    #[arg(long, requires = "what_if_rate")]
    pub what_if_amount: Option<f64>,
    /// Annual rate in percent for the what-if projection
    #[arg(long, requires = "what_if_amount")]
    pub what_if_rate: Option<f64>,
}

impl GoalArgs {
    pub fn apply(&self, input: &mut GoalInput) {
        set(&mut input.target_years, self.years);
        set(&mut input.monthly_income, self.monthly_income);
        set(&mut input.dividend_rate_pct, self.dividend_rate);
        set(&mut input.current_assets, self.current_assets);
        set(&mut input.inflation_pct, self.inflation);
    }
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct BacktestArgs {
    #[arg(long)]
    pub asset: Option<String>,
    #[arg(long)]
    pub start: Option<i16>,
    #[arg(long)]
    pub end: Option<i16>,
    /// lump-sum or periodic
    #[arg(long)]
    pub policy: Option<ContributionPolicy>,
    #[arg(long)]
    pub initial: Option<f64>,
    #[arg(long)]
    pub periodic: Option<f64>,
}

impl BacktestArgs {
    pub fn apply(&self, input: &mut BacktestInput) {
        if let Some(asset) = &self.asset {
            input.asset_id.clone_from(asset);
        }
        set(&mut input.start_year, self.start);
        set(&mut input.end_year, self.end);
        set(&mut input.policy, self.policy);
        set(&mut input.initial_amount, self.initial);
        set(&mut input.periodic_amount, self.periodic);
    }
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ExpectancyArgs {
    /// Win rate in percent
    #[arg(long)]
    pub win_rate: Option<f64>,
    /// Average win divided by average loss
    #[arg(long)]
    pub payoff: Option<f64>,
    #[arg(long)]
    pub trades: Option<u32>,
    /// Share of the balance risked per trade, in percent
    #[arg(long)]
    pub risk: Option<f64>,
    /// Also print the drawdown recovery table
    #[arg(long)]
    pub recovery_table: bool,
}

impl ExpectancyArgs {
    pub fn apply(&self, input: &mut ExpectancyInput) {
        set(&mut input.win_rate_pct, self.win_rate);
        set(&mut input.payoff_ratio, self.payoff);
        set(&mut input.trade_count, self.trades);
        set(&mut input.risk_per_trade_pct, self.risk);
    }
}

#[derive(ClapArgs, Debug, Clone, Default)]
pub struct ReviewArgs {
    #[arg(long)]
    pub cash: Option<f64>,
    #[arg(long)]
    pub stocks: Option<f64>,
    #[arg(long)]
    pub real_estate: Option<f64>,
    #[arg(long)]
    pub bonds: Option<f64>,
    #[arg(long)]
    pub other_assets: Option<f64>,
    #[arg(long)]
    pub salary: Option<f64>,
    #[arg(long)]
    pub asset_income: Option<f64>,
    #[arg(long)]
    pub other_income: Option<f64>,
    #[arg(long)]
    pub housing: Option<f64>,
    #[arg(long)]
    pub food: Option<f64>,
    #[arg(long)]
    pub transport: Option<f64>,
    #[arg(long)]
    pub communication: Option<f64>,
    #[arg(long)]
    pub insurance: Option<f64>,
    #[arg(long)]
    pub other_expenses: Option<f64>,
}

impl ReviewArgs {
    pub fn apply(&self, input: &mut BudgetInput) {
        let assets = &mut input.assets;
        set(&mut assets.cash, self.cash);
        set(&mut assets.stocks, self.stocks);
        set(&mut assets.real_estate, self.real_estate);
        set(&mut assets.bonds, self.bonds);
        set(&mut assets.other, self.other_assets);

        let income = &mut input.income;
        set(&mut income.salary, self.salary);
        set(&mut income.asset_income, self.asset_income);
        set(&mut income.other, self.other_income);

        let expenses = &mut input.expenses;
        set(&mut expenses.housing, self.housing);
        set(&mut expenses.food, self.food);
        set(&mut expenses.transport, self.transport);
        set(&mut expenses.communication, self.communication);
        set(&mut expenses.insurance, self.insurance);
        set(&mut expenses.other, self.other_expenses);
    }
}

fn set<T>(field: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *field = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Args {
        Args::try_parse_from(std::iter::once("fincalc").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let args = parse(&["assets", "--format", "json", "--log-level", "debug"]);
        assert_eq!(args.format, OutputFormat::Json);
        assert_eq!(args.log_level, "debug");
        assert!(matches!(args.command, Command::Assets));
    }

    #[test]
    fn test_compound_flags() {
        let args = parse(&["compound", "--rate", "1.5", "--basis", "monthly", "--years", "3"]);
        let Command::Compound(compound) = args.command else {
            panic!("expected compound");
        };
        let mut input = CompoundInput::default();
        input.horizon.months = 6.0;
        compound.apply(&mut input);

        assert_eq!(input.rate_pct, 1.5);
        assert_eq!(input.basis, RateBasis::Monthly);
        assert_eq!(input.horizon.years, 3.0);
        assert_eq!(input.horizon.months, 0.0);
        assert_eq!(input.principal, 1000.0);
    }

    #[test]
    fn test_unset_flags_keep_config_values() {
        let args = parse(&["backtest", "--policy", "periodic"]);
        let Command::Backtest(backtest) = args.command else {
            panic!("expected backtest");
        };
        let mut input = BacktestInput {
            asset_id: "gold".to_string(),
            ..BacktestInput::default()
        };
        backtest.apply(&mut input);

        assert_eq!(input.asset_id, "gold");
        assert_eq!(input.policy, ContributionPolicy::Periodic);
        assert_eq!(input.initial_amount, 1000.0);
    }

    #[test]
    fn test_rejects_unknown_basis() {
        let result = Args::try_parse_from(["fincalc", "compound", "--basis", "weekly"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_what_if_needs_both_flags() {
        let result = Args::try_parse_from(["fincalc", "goal", "--what-if-amount", "1000"]);
        assert!(result.is_err());
        parse(&["goal", "--what-if-amount", "1000", "--what-if-rate", "7"]);
    }

    #[test]
    fn test_review_flags() {
        let args = parse(&["review", "--cash", "100", "--housing", "50", "--other-income", "5"]);
        let Command::Review(review) = args.command else {
            panic!("expected review");
        };
        let mut input = BudgetInput::default();
        review.apply(&mut input);
        assert_eq!(input.assets.cash, 100.0);
        assert_eq!(input.expenses.housing, 50.0);
        assert_eq!(input.income.other, 5.0);
    }
}
