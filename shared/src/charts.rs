//! Chart data derived from the transaction history.

use std::collections::BTreeMap;

use crate::{Transaction, TransactionKind, TRANSFER_CATEGORY};

/// Income and expenses per calendar month, months in ascending order.
/// Expenses are stored negated so they plot below the axis.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlySeries {
    pub months: Vec<String>,
    pub inflows: Vec<f64>,
    pub outflows: Vec<f64>,
}

impl MonthlySeries {
    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    /// Smallest and largest plotted value, including zero
    pub fn value_range(&self) -> (f64, f64) {
        self.inflows
            .iter()
            .chain(self.outflows.iter())
            .fold((0.0_f64, 0.0_f64), |(lo, hi), v| (lo.min(*v), hi.max(*v)))
    }
}

/// Total expenses per category, in the order categories first appear
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryBreakdown {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
}

impl CategoryBreakdown {
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn total(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn percentage_labels(&self) -> Vec<String> {
        percentage_labels(&self.values)
    }
}

#[derive(Default)]
struct MonthTotals {
    inflow: f64,
    outflow: f64,
}

/// Group transactions by year-month (the first seven characters of the date)
pub fn monthly_series(transactions: &[Transaction]) -> MonthlySeries {
    let mut months: BTreeMap<String, MonthTotals> = BTreeMap::new();
    for t in transactions {
        let month: String = t.date.chars().take(7).collect();
        let totals = months.entry(month).or_default();
        match t.kind {
            TransactionKind::Inflow => totals.inflow += t.amount,
            TransactionKind::Outflow => totals.outflow += t.amount,
            TransactionKind::Other => {}
        }
    }

    let mut series = MonthlySeries::default();
    for (month, totals) in months {
        series.months.push(month);
        series.inflows.push(totals.inflow);
        series.outflows.push(-totals.outflow);
    }
    series
}

/// Sum expenses by category over the whole history, leaving transfers out
pub fn category_breakdown(transactions: &[Transaction]) -> CategoryBreakdown {
    let mut breakdown = CategoryBreakdown::default();
    let expenses = transactions
        .iter()
        .filter(|t| t.kind == TransactionKind::Outflow && t.category != TRANSFER_CATEGORY);

    for t in expenses {
        match breakdown.labels.iter().position(|l| *l == t.category) {
            Some(i) => breakdown.values[i] += t.amount,
            None => {
                breakdown.labels.push(t.category.clone());
                breakdown.values.push(t.amount);
            }
        }
    }
    breakdown
}

/// Share of each value in the total, rounded to a whole percent ("42%").
/// Nothing to label when the total is zero.
pub fn percentage_labels(values: &[f64]) -> Vec<String> {
    let sum: f64 = values.iter().sum();
    if sum == 0.0 || !sum.is_finite() {
        return Vec::new();
    }
    values
        .iter()
        .map(|v| format!("{}%", (v / sum * 100.0).round() as i64))
        .collect()
}
