//! # Display Formatting
//!
//! Presentation-only derivations for precomputed metrics: separators,
//! fixed one-decimal rounding, K/M/B scaling, and bar widths relative to the
//! largest value. Out-of-range input degrades to a default rendering
//! (zero width, `0.0`) instead of failing.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// A value computed upstream, tagged with how it should be shown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum DisplayMetric {
    /// Whole count with thousands separators: `12,450`
    Count(u64),
    /// Whole count scaled with a suffix: `12.5K`
    Compact(u64),
    /// Percentage with one decimal: `87.3%`
    Percent(f64),
    /// Score with one decimal: `4.0`
    Rating(f64),
    /// Money with two decimals: `$48,210.50`
    Currency(f64),
    Text(String),
}

impl DisplayMetric {
    /// Formats the metric, using `currency_symbol` for currency values.
    pub fn render(&self, currency_symbol: &str) -> String {
        match self {
            DisplayMetric::Count(n) => format_thousands(*n),
            DisplayMetric::Compact(n) => format_compact(*n),
            DisplayMetric::Percent(p) => format_percent(*p),
            DisplayMetric::Rating(r) => format_one_decimal(*r),
            DisplayMetric::Currency(c) => format_currency(*c, currency_symbol),
            DisplayMetric::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for DisplayMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(DEFAULT_CURRENCY_SYMBOL))
    }
}

/// `1234567` → `"1,234,567"`
pub fn format_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rounds half away from zero to one decimal: `4.0` → `"4.0"`, `4.25` → `"4.3"`.
pub fn format_one_decimal(value: f64) -> String {
    if !value.is_finite() {
        return "0.0".to_string();
    }
    let rounded = (value * 10.0).round() / 10.0;
    // Avoid "-0.0"
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    format!("{rounded:.1}")
}

/// `87.34` → `"87.3%"`
pub fn format_percent(value: f64) -> String {
    format!("{}%", format_one_decimal(value))
}

/// Scales large counts to one decimal with a suffix: `12450` → `"12.5K"`.
///
/// Counts below 1,000 are returned as-is. Rounding is half-up on the
/// integer so `12450` lands on `12.5`, not on the binary float below it.
pub fn format_compact(n: u64) -> String {
    if n < 1_000 {
        return n.to_string();
    }
    let (scale, suffix) = if n >= 999_950_000 {
        (1_000_000_000u64, 'B')
    } else if n >= 999_950 {
        (1_000_000, 'M')
    } else {
        (1_000, 'K')
    };
    let tenths = n.saturating_add(scale / 20) / (scale / 10);
    format!("{}.{}{}", tenths / 10, tenths % 10, suffix)
}

/// `48210.5` → `"$48,210.50"`, negatives as `"-$12.00"`.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{symbol}0.00");
    }
    let cents = (amount * 100.0).round();
    let sign = if cents < 0.0 { "-" } else { "" };
    let cents = cents.abs() as u64;
    format!(
        "{sign}{symbol}{}.{:02}",
        format_thousands(cents / 100),
        cents % 100
    )
}

/// `value` as a percentage of `max`. A zero maximum gives zero.
pub fn percent_of_max(value: u64, max: u64) -> f64 {
    if max == 0 {
        return 0.0;
    }
    value as f64 / max as f64 * 100.0
}

/// Bar widths (0–100) for each value relative to the largest one.
pub fn relative_widths(values: &[u64]) -> Vec<f64> {
    let max = values.iter().copied().max().unwrap_or(0);
    values.iter().map(|v| percent_of_max(*v, max)).collect()
}

/// Number of terminal cells a bar of `percent` occupies in `width` cells.
pub fn bar_cells(percent: f64, width: u16) -> u16 {
    if !percent.is_finite() || percent <= 0.0 {
        return 0;
    }
    let cells = (percent.min(100.0) / 100.0 * f64::from(width)).round();
    cells as u16
}
