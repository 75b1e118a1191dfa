//! Runs one calculator command and renders its result as a table or JSON.

use std::borrow::Cow;
use std::fmt::Write;
use std::path::Path;

use color_eyre::eyre::{Result, WrapErr};
use fincalc_core::history::{self, SourceInfo, YearPrice};
use fincalc_core::model::{
    BacktestInput, BacktestResult, BudgetInput, CategoryShare, CompoundInput, CompoundProjection,
    ContributionPolicy, ExpectancyInput, ExpectancyResult, GoalInput, GoalResult, Horizon,
    ProjectionPoint, RecoveryRow, ReviewResult, SpendingStatus, YearValue,
};
use fincalc_core::review::clamp_amount;
use fincalc_core::{backtest, compound, expectancy, goal, review};
use serde::Serialize;

use crate::cli::{
    BacktestArgs, Command, CompoundArgs, ExpectancyArgs, GoalArgs, OutputFormat, ReturnsArgs,
    ReviewArgs,
};
use crate::config::CalculatorConfig;
use crate::format::{
    NO_RESULT, format_amount, format_amount_short, format_compact, format_opt_amount,
    format_opt_pct, format_pct, format_signed_pct,
};

/// Longest compound horizon the shell will project.
pub const MAX_HORIZON_YEARS: f64 = 1_000.0;

/// Smallest payoff ratio accepted by the expectancy command.
pub const MIN_PAYOFF_RATIO: f64 = 0.1;

/// Run `command` with `config` as the starting inputs and return the rendered output.
pub fn run(
    command: &Command,
    config: &CalculatorConfig,
    config_path: &Path,
    format: OutputFormat,
) -> Result<String> {
    match command {
        Command::Assets => show_assets(format),
        Command::Returns(args) => show_returns(args, format),
        Command::Compound(args) => run_compound(args, &config.compound, format),
        Command::Goal(args) => run_goal(args, &config.goal, format),
        Command::Backtest(args) => run_backtest(args, &config.backtest, format),
        Command::Expectancy(args) => run_expectancy(args, &config.expectancy, format),
        Command::Review(args) => run_review(args, &config.review, format),
        Command::SaveConfig => {
            config
                .save(config_path)
                .wrap_err_with(|| format!("Failed to save {}", config_path.display()))?;
            tracing::info!(path = %config_path.display(), "config saved");
            Ok(format!("Saved defaults to {}\n", config_path.display()))
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    let mut json = serde_json::to_string_pretty(value).wrap_err("Failed to serialize output")?;
    json.push('\n');
    Ok(json)
}

// ============================================================================
// Assets and returns
// ============================================================================

#[derive(Serialize)]
struct AssetRow {
    id: &'static str,
    label: &'static str,
    label_localized: &'static str,
    first_year: Option<i16>,
    last_year: Option<i16>,
    value_unit: &'static str,
    source: Option<SourceInfo>,
}

fn show_assets(format: OutputFormat) -> Result<String> {
    let rows: Vec<AssetRow> = history::list_assets()
        .into_iter()
        .map(|a| {
            let years = history::available_years(a.id);
            AssetRow {
                id: a.id,
                label: a.label,
                label_localized: a.label_localized,
                first_year: years.first().copied(),
                last_year: years.last().copied(),
                value_unit: history::value_unit(a.id).unwrap_or(NO_RESULT),
                source: history::source_metadata(a.id),
            }
        })
        .collect();

    if format == OutputFormat::Json {
        return to_json(&rows);
    }

    let mut out = String::new();
    writeln!(out, "{:<8} {:<32} {:>5}-{:<5} {:<12} {}", "ID", "NAME", "FROM", "TO", "UNIT", "SOURCE")?;
    for row in &rows {
        let year = |y: Option<i16>| y.map_or_else(|| NO_RESULT.to_string(), |y| y.to_string());
        writeln!(
            out,
            "{:<8} {:<32} {:>5}-{:<5} {:<12} {}",
            row.id,
            row.label,
            year(row.first_year),
            year(row.last_year),
            row.value_unit,
            row.source.map_or(NO_RESULT, |s| s.url),
        )?;
    }
    writeln!(out, "Selectable years: {}-{}", history::min_year(), history::max_year())?;
    Ok(out)
}

#[derive(Serialize)]
struct ReturnsReport<'a> {
    asset_id: &'a str,
    start_year: i16,
    end_year: i16,
    value_unit: &'static str,
    years: Vec<ReturnsRow>,
}

#[derive(Serialize)]
struct ReturnsRow {
    year: i16,
    return_pct: Option<f64>,
    start_price: Option<f64>,
    end_price: Option<f64>,
}

fn show_returns(args: &ReturnsArgs, format: OutputFormat) -> Result<String> {
    let series = history::require_asset(&args.asset).wrap_err("Unknown asset")?;
    let (start_year, end_year) = backtest::normalize_range(
        args.start
            .or(series.first_year())
            .unwrap_or_else(history::min_year),
        args.end.unwrap_or_else(history::max_year),
    );
    tracing::debug!(asset = series.id, start_year, end_year, "listing returns");

    let prices: Vec<YearPrice> = history::yearly_prices(series.id, start_year, end_year);
    let years = history::range_of(series.id, start_year, end_year)
        .into_iter()
        .map(|r| {
            let price = prices.iter().find(|p| p.year == r.year);
            ReturnsRow {
                year: r.year,
                return_pct: r.return_pct,
                start_price: price.map(|p| p.start_price),
                end_price: price.map(|p| p.end_price),
            }
        })
        .collect();

    let report = ReturnsReport {
        asset_id: series.id,
        start_year,
        end_year,
        value_unit: series.value_unit,
        years,
    };
    if format == OutputFormat::Json {
        return to_json(&report);
    }

    let mut out = String::new();
    writeln!(out, "{} ({}), {}-{}", series.label, series.value_unit, start_year, end_year)?;
    writeln!(out, "{:<6} {:>10} {:>14} {:>14}", "YEAR", "RETURN", "START", "END")?;
    for row in &report.years {
        writeln!(
            out,
            "{:<6} {:>10} {:>14} {:>14}",
            row.year,
            format_opt_pct(row.return_pct),
            format_opt_amount(row.start_price),
            format_opt_amount(row.end_price),
        )?;
    }
    Ok(out)
}

// ============================================================================
// Compound growth
// ============================================================================

#[derive(Serialize)]
struct CompoundReport<'a> {
    input: CompoundInput,
    result: Option<CompoundSummary<'a>>,
}

#[derive(Serialize)]
struct CompoundSummary<'a> {
    annual_rate_pct: f64,
    horizon_years: f64,
    final_amount: f64,
    total_return: f64,
    cagr_pct: Option<f64>,
    points: Cow<'a, [ProjectionPoint]>,
}

fn run_compound(args: &CompoundArgs, base: &CompoundInput, format: OutputFormat) -> Result<String> {
    let mut input = *base;
    args.apply(&mut input);
    clamp_compound(&mut input);
    tracing::debug!(?input, "compound projection");

    let projection = compound::project(&input);
    let summary = projection.as_ref().map(|p| summarize_compound(p, args.full));

    if format == OutputFormat::Json {
        return to_json(&CompoundReport {
            input,
            result: summary,
        });
    }

    let mut out = String::new();
    let Some(summary) = summary else {
        tracing::info!("compound input not computable");
        writeln!(out, "No result: the rate must be positive and the horizon longer than zero")?;
        return Ok(out);
    };

    writeln!(out, "Principal        {}", format_amount(input.principal))?;
    writeln!(out, "Annual rate      {}", format_pct(summary.annual_rate_pct))?;
    writeln!(out, "Horizon          {:.2} years", summary.horizon_years)?;
    writeln!(out, "Final amount     {}", format_amount(summary.final_amount))?;
    writeln!(out, "Total return     {}", format_amount(summary.total_return))?;
    writeln!(out, "CAGR             {}", format_opt_pct(summary.cagr_pct))?;
    writeln!(out)?;
    writeln!(out, "{:<10} {:>16}", "POINT", "VALUE")?;
    for point in summary.points.iter() {
        writeln!(out, "{:<10} {:>16}", point.label, format_amount(point.value))?;
    }
    Ok(out)
}

fn clamp_compound(input: &mut CompoundInput) {
    input.rate_pct = clamp_amount(input.rate_pct);
    input.principal = clamp_amount(input.principal);
    let horizon = &mut input.horizon;
    horizon.years = clamp_amount(horizon.years);
    horizon.months = clamp_amount(horizon.months);
    horizon.days = clamp_amount(horizon.days);

    let requested = horizon.in_years();
    if requested > MAX_HORIZON_YEARS {
        tracing::warn!(requested, max = MAX_HORIZON_YEARS, "compound horizon capped");
        *horizon = Horizon::years(MAX_HORIZON_YEARS);
    }
}

fn summarize_compound(projection: &CompoundProjection, full: bool) -> CompoundSummary<'_> {
    let points = if full {
        Cow::Borrowed(projection.series())
    } else {
        Cow::Owned(compound::chart_points(projection))
    };
    CompoundSummary {
        annual_rate_pct: projection.annual_rate * 100.0,
        horizon_years: projection.horizon_years,
        final_amount: projection.final_amount,
        total_return: projection.total_return,
        cagr_pct: projection.cagr_pct,
        points,
    }
}

// ============================================================================
// Goal
// ============================================================================

#[derive(Serialize)]
struct GoalReport {
    input: GoalInput,
    result: GoalResult,
    what_if: Option<Vec<YearValue>>,
}

fn run_goal(args: &GoalArgs, base: &GoalInput, format: OutputFormat) -> Result<String> {
    let mut input = *base;
    args.apply(&mut input);
    clamp_goal(&mut input);
    tracing::debug!(?input, "goal solve");

    let result = goal::solve(&input);
    let horizon = goal::whole_years(input.target_years);
    let what_if = args
        .what_if_amount
        .zip(args.what_if_rate)
        .map(|(amount, rate)| goal::what_if(clamp_amount(amount), clamp_amount(rate), horizon));

    if format == OutputFormat::Json {
        return to_json(&GoalReport {
            input,
            result,
            what_if,
        });
    }

    let mut out = String::new();
    writeln!(out, "Monthly income   {}", format_amount(input.monthly_income))?;
    if result.inflation_adjusted {
        writeln!(
            out,
            "  in {} years    {} / month after {} inflation",
            input.target_years,
            format_amount(result.future_annual_income / 12.0),
            format_pct(input.inflation_pct),
        )?;
    }
    writeln!(out, "Target assets    {}", format_opt_amount(result.target_asset_value))?;
    writeln!(out, "Required return  {}", format_opt_pct(result.required_annual_return_pct))?;
    writeln!(out)?;
    writeln!(
        out,
        "{:<6} {:>18} {:>18}",
        "YEAR",
        "AT REQUIRED",
        format!("AT {}", format_pct(input.dividend_rate_pct)),
    )?;
    for year in &result.yearly {
        writeln!(
            out,
            "{:<6} {:>18} {:>18}",
            year.year,
            format_opt_amount(year.required_rate_value),
            format_amount(year.target_rate_value),
        )?;
    }

    if let Some(rows) = &what_if {
        writeln!(out)?;
        writeln!(out, "What if")?;
        for row in rows {
            writeln!(out, "{:<6} {:>18}", row.year, format_amount(row.value))?;
        }
    }
    Ok(out)
}

fn clamp_goal(input: &mut GoalInput) {
    input.target_years = clamp_amount(input.target_years);
    input.monthly_income = clamp_amount(input.monthly_income);
    input.dividend_rate_pct = clamp_amount(input.dividend_rate_pct);
    input.current_assets = clamp_amount(input.current_assets);
    input.inflation_pct = clamp_amount(input.inflation_pct);
}

// ============================================================================
// Backtest
// ============================================================================

#[derive(Serialize)]
struct BacktestReport<'a> {
    input: &'a BacktestInput,
    result: BacktestResult,
}

fn run_backtest(args: &BacktestArgs, base: &BacktestInput, format: OutputFormat) -> Result<String> {
    let mut input = base.clone();
    args.apply(&mut input);
    input.initial_amount = clamp_amount(input.initial_amount);
    input.periodic_amount = clamp_amount(input.periodic_amount);

    let series = history::require_asset(&input.asset_id).wrap_err("Unknown asset")?;
    let (start_year, end_year) = backtest::normalize_range(input.start_year, input.end_year);
    if (start_year, end_year) != (input.start_year, input.end_year) {
        tracing::warn!(
            requested_start = input.start_year,
            requested_end = input.end_year,
            start_year,
            end_year,
            "backtest range adjusted"
        );
    }
    input.start_year = start_year;
    input.end_year = end_year;
    tracing::debug!(?input, "backtest");

    let result = backtest::simulate(&input);

    if format == OutputFormat::Json {
        return to_json(&BacktestReport {
            input: &input,
            result,
        });
    }

    let mut out = String::new();
    let policy = match input.policy {
        ContributionPolicy::LumpSum => "lump sum".to_string(),
        ContributionPolicy::Periodic => format!(
            "{} then {} per year",
            format_amount_short(input.initial_amount),
            format_amount_short(input.periodic_amount)
        ),
    };
    writeln!(out, "{} {}-{}, {}", series.label, start_year, end_year, policy)?;
    if let Some(first) = result.first_data_year.filter(|&y| y > start_year) {
        writeln!(out, "Note: data starts in {first}; earlier years carry value unchanged")?;
    }
    writeln!(out, "{:<6} {:>10} {:>16}", "YEAR", "RETURN", "VALUE")?;
    for year in &result.yearly {
        writeln!(
            out,
            "{:<6} {:>10} {:>16}",
            year.year,
            format_opt_pct(year.return_pct),
            format_amount(year.value),
        )?;
    }
    writeln!(out)?;
    writeln!(out, "Invested         {}", format_amount(result.total_invested))?;
    writeln!(out, "End value        {}", format_amount(result.end_value))?;
    writeln!(out, "Total return     {}", format_opt_pct(result.total_return_pct))?;
    writeln!(out, "CAGR             {}", format_opt_pct(result.cagr_pct))?;
    let drawdown = if result.max_drawdown_pct > 0.0 {
        -result.max_drawdown_pct
    } else {
        0.0
    };
    writeln!(out, "Max drawdown     {}", format_pct(drawdown))?;
    Ok(out)
}

// ============================================================================
// Expectancy
// ============================================================================

#[derive(Serialize)]
struct ExpectancyReport {
    input: ExpectancyInput,
    result: ExpectancyResult,
    recovery_table: Option<Vec<RecoveryRow>>,
}

fn run_expectancy(
    args: &ExpectancyArgs,
    base: &ExpectancyInput,
    format: OutputFormat,
) -> Result<String> {
    let mut input = *base;
    args.apply(&mut input);
    input.win_rate_pct = clamp_amount(input.win_rate_pct).min(100.0);
    input.payoff_ratio = clamp_amount(input.payoff_ratio).max(MIN_PAYOFF_RATIO);
    input.risk_per_trade_pct = clamp_amount(input.risk_per_trade_pct).min(100.0);
    tracing::debug!(?input, "expectancy");

    let result = expectancy::evaluate(&input);
    let recovery_table = args.recovery_table.then(expectancy::mdd_recovery_table);

    if format == OutputFormat::Json {
        return to_json(&ExpectancyReport {
            input,
            result,
            recovery_table,
        });
    }

    let mut out = String::new();
    writeln!(out, "Trades           {}", input.trade_count.max(1))?;
    writeln!(out, "Expected wins    {:.1}", result.expected_wins)?;
    writeln!(out, "Expected losses  {:.1}", result.expected_losses)?;
    writeln!(out, "Per trade        {:+.2}R", result.avg_return_per_trade)?;
    writeln!(out, "Expectancy       {}", format_signed_pct(result.expectancy_pct))?;
    writeln!(out, "Total return     {}", format_signed_pct(result.total_return_pct))?;
    writeln!(
        out,
        "Ruin             {} straight losses at {} risk",
        result.ruin_trade_count,
        format_pct(result.risk_fraction * 100.0),
    )?;

    writeln!(out)?;
    writeln!(out, "{:<8} {:>12}", "TRADES", "CUMULATIVE")?;
    for point in &result.pattern {
        writeln!(
            out,
            "{:<8} {:>12}",
            point.trades,
            format!("{:+.1}%", point.cumulative_return_pct)
        )?;
    }

    writeln!(out)?;
    writeln!(out, "{:<8} {:>12}", "LOSSES", "BALANCE")?;
    for point in &result.ruin_curve {
        writeln!(out, "{:<8} {:>12}", point.losses, format_pct(point.balance_pct))?;
    }

    if let Some(table) = &recovery_table {
        writeln!(out)?;
        writeln!(out, "{:>6} {:>9} {:>10} {:>7}", "MDD", "BALANCE", "RECOVERY", "RATIO")?;
        for row in table {
            writeln!(
                out,
                "{:>6} {:>9} {:>10} {:>7}",
                format!("-{:.0}%", row.mdd_pct),
                format!("{:.0}%", row.balance_pct),
                format!("+{:.1}%", row.recovery_pct),
                format!("{:.2}x", row.ratio),
            )?;
        }
    }
    Ok(out)
}

// ============================================================================
// Budget review
// ============================================================================

#[derive(Serialize)]
struct ReviewReport {
    input: BudgetInput,
    result: ReviewResult,
}

fn run_review(args: &ReviewArgs, base: &BudgetInput, format: OutputFormat) -> Result<String> {
    let mut input = *base;
    args.apply(&mut input);
    clamp_budget(&mut input);
    tracing::debug!(?input, "budget review");

    let result = review::review(&input);

    if format == OutputFormat::Json {
        return to_json(&ReviewReport { input, result });
    }

    let mut out = String::new();
    write_shares(&mut out, "Assets", result.total_assets, &result.assets)?;
    write_shares(&mut out, "Monthly income", result.monthly_income, &result.income)?;
    write_shares(&mut out, "Monthly expenses", result.monthly_expenses, &result.expenses)?;

    match &result.sustainability {
        Some(s) => {
            writeln!(out, "Allowed per year {}", format_amount(s.allowed_annual_expenses))?;
            writeln!(
                out,
                "  {} from assets + {} income",
                format_compact(s.asset_allowance),
                format_compact(s.annual_income)
            )?;
            writeln!(out, "Spent per year   {}", format_amount(s.annual_expenses))?;
            let status = match s.status {
                SpendingStatus::Healthy => "healthy",
                SpendingStatus::Warning => "over the sustainable level",
            };
            writeln!(out, "Spending ratio   {} ({status})", format_pct(s.ratio_pct))?;
        }
        None => writeln!(out, "Spending ratio   {NO_RESULT} (needs assets and expenses)")?,
    }
    Ok(out)
}

fn clamp_budget(input: &mut BudgetInput) {
    let a = &mut input.assets;
    for value in [&mut a.cash, &mut a.stocks, &mut a.real_estate, &mut a.bonds, &mut a.other] {
        *value = clamp_amount(*value);
    }
    let i = &mut input.income;
    for value in [&mut i.salary, &mut i.asset_income, &mut i.other] {
        *value = clamp_amount(*value);
    }
    let e = &mut input.expenses;
    for value in [
        &mut e.housing,
        &mut e.food,
        &mut e.transport,
        &mut e.communication,
        &mut e.insurance,
        &mut e.other,
    ] {
        *value = clamp_amount(*value);
    }
}

fn write_shares(
    out: &mut String,
    title: &str,
    total: f64,
    shares: &[CategoryShare],
) -> std::fmt::Result {
    writeln!(out, "{title}: {}", format_amount(total))?;
    for share in shares {
        writeln!(
            out,
            "  {:<18} {:>16} {:>8}",
            share.label,
            format_amount(share.value),
            format_pct(share.share_pct)
        )?;
    }
    writeln!(out)
}
