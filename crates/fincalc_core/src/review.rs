//! Household budget review: category breakdowns and whether monthly spending
//! is covered by income plus a safe withdrawal from assets.

use crate::model::{BudgetInput, CategoryShare, ReviewResult, SpendingStatus, Sustainability};

/// Share of total assets that can be drawn each year without depleting them.
pub const SAFE_WITHDRAWAL_RATE: f64 = 0.04;

/// Negative and non-finite amounts count as zero.
#[must_use]
#[inline]
pub fn clamp_amount(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

#[must_use]
pub fn review(input: &BudgetInput) -> ReviewResult {
    let a = &input.assets;
    let assets = [
        ("real_estate", "Real estate", a.real_estate),
        ("stocks", "Stocks", a.stocks),
        ("bonds", "Deposits & funds", a.bonds),
        ("cash", "Cash", a.cash),
        ("other", "Other", a.other),
    ];

    let e = &input.expenses;
    let expenses = [
        ("housing", "Housing", e.housing),
        ("communication", "Communication", e.communication),
        ("transport", "Transport", e.transport),
        ("food", "Food", e.food),
        ("insurance", "Insurance", e.insurance),
        ("other", "Other", e.other),
    ];

    let i = &input.income;
    let income = [
        ("salary", "Salary", i.salary),
        ("asset_income", "Asset income", i.asset_income),
        ("other", "Other", i.other),
    ];

    let total_assets = total(&assets);
    let monthly_income = total(&income);
    let monthly_expenses = total(&expenses);

    ReviewResult {
        total_assets,
        monthly_income,
        monthly_expenses,
        assets: shares(&assets, total_assets),
        income: shares(&income, monthly_income),
        expenses: shares(&expenses, monthly_expenses),
        sustainability: sustainability(total_assets, monthly_income, monthly_expenses),
    }
}

/// `None` unless there are both assets and expenses to compare.
#[must_use]
pub fn sustainability(
    total_assets: f64,
    monthly_income: f64,
    monthly_expenses: f64,
) -> Option<Sustainability> {
    if !(total_assets > 0.0 && monthly_expenses > 0.0) {
        return None;
    }

    let asset_allowance = total_assets * SAFE_WITHDRAWAL_RATE;
    let annual_income = monthly_income * 12.0;
    let annual_expenses = monthly_expenses * 12.0;
    let allowed_annual_expenses = asset_allowance + annual_income;
    let ratio_pct = if allowed_annual_expenses > 0.0 {
        annual_expenses / allowed_annual_expenses * 100.0
    } else {
        0.0
    };

    Some(Sustainability {
        asset_allowance,
        annual_income,
        annual_expenses,
        allowed_annual_expenses,
        ratio_pct,
        status: if ratio_pct < 100.0 {
            SpendingStatus::Healthy
        } else {
            SpendingStatus::Warning
        },
    })
}

type Category = (&'static str, &'static str, f64);

fn total(categories: &[Category]) -> f64 {
    categories.iter().map(|&(_, _, v)| clamp_amount(v)).sum()
}

fn shares(categories: &[Category], total: f64) -> Vec<CategoryShare> {
    if total <= 0.0 {
        return Vec::new();
    }
    categories
        .iter()
        .map(|&(key, label, value)| (key, label, clamp_amount(value)))
        .filter(|&(_, _, value)| value > 0.0)
        .map(|(key, label, value)| CategoryShare {
            key,
            label,
            value,
            share_pct: value / total * 100.0,
        })
        .collect()
}
