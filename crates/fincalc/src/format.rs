/// Placeholder for a figure that could not be computed
pub const NO_RESULT: &str = "n/a";

/// Digits with a comma every three places
fn group_thousands(whole: u64) -> String {
    let digits = whole.to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result
}

/// Format an amount with thousands separators and two decimals
pub fn format_amount(value: f64) -> String {
    let cents_total = (value.abs() * 100.0).round() as u64;
    let whole = cents_total / 100;
    let cents = cents_total % 100;
    let sign = if value < 0.0 && cents_total > 0 { "-" } else { "" };
    format!("{sign}{}.{cents:02}", group_thousands(whole))
}

/// Format an amount rounded to whole units (shorter format for tight columns)
pub fn format_amount_short(value: f64) -> String {
    let whole = value.abs().round() as u64;
    let sign = if value < 0.0 && whole > 0 { "-" } else { "" };
    format!("{sign}{}", group_thousands(whole))
}

/// Format an amount in compact form (e.g., 2.1M, 450K, 50)
pub fn format_compact(value: f64) -> String {
    let abs_value = value.abs();
    let sign = if value < 0.0 { "-" } else { "" };

    if abs_value >= 1_000_000_000.0 {
        format!("{sign}{:.1}B", abs_value / 1_000_000_000.0)
    } else if abs_value >= 1_000_000.0 {
        format!("{sign}{:.1}M", abs_value / 1_000_000.0)
    } else if abs_value >= 1_000.0 {
        format!("{sign}{:.0}K", abs_value / 1_000.0)
    } else {
        format!("{sign}{abs_value:.0}")
    }
}

/// Format a value that is already in percent
pub fn format_pct(value: f64) -> String {
    format!("{value:.2}%")
}

/// Like [`format_pct`] with a leading `+` on gains
pub fn format_signed_pct(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.2}%")
    } else {
        format_pct(value)
    }
}

/// Percent or [`NO_RESULT`]; never shows a missing figure as zero
pub fn format_opt_pct(value: Option<f64>) -> String {
    value.map_or_else(|| NO_RESULT.to_string(), format_signed_pct)
}

pub fn format_opt_amount(value: Option<f64>) -> String {
    value.map_or_else(|| NO_RESULT.to_string(), format_amount)
}
