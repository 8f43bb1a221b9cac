use colored::Colorize;
use rust_decimal::{Decimal, RoundingStrategy};
use tally_core::{DashboardSummary, LabelLookup};

const SEPARATOR: &str = "----------------------------------------";

/// Formats an amount with two decimals behind the currency symbol.
pub fn money(symbol: &str, amount: Decimal) -> String {
    format!(
        "{symbol}{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}

/// Renders the chart series and all-time totals as a plain-text table.
pub fn render_summary<L: LabelLookup + ?Sized>(
    summary: &DashboardSummary,
    symbol: &str,
    labels: &L,
) -> String {
    let income_title = labels.lookup("income");
    let expense_title = labels.lookup("expenses");
    let width = summary
        .chart
        .labels
        .iter()
        .map(|label| label.chars().count())
        .max()
        .unwrap_or(0)
        .max(6);

    let mut lines = Vec::new();
    lines.push(format!(
        "=== This {} (from {}) ===",
        summary.time_frame, summary.period.start
    ));
    lines.push(format!(
        "{:<width$}  {:>12}  {:>12}",
        "",
        income_title,
        expense_title,
        width = width
    ));
    for (label, income, expense) in summary.chart.buckets() {
        lines.push(format!(
            "{:<width$}  {:>12}  {:>12}",
            label,
            money(symbol, income).green(),
            money(symbol, expense).red(),
            width = width
        ));
    }
    lines.push(SEPARATOR.to_string());
    lines.push(format!(
        "Chart {}: {}  {}: {}",
        income_title.to_lowercase(),
        money(symbol, summary.chart.total_income()),
        expense_title.to_lowercase(),
        money(symbol, summary.chart.total_expenses())
    ));
    lines.push(format!(
        "Total income:   {}",
        money(symbol, summary.total_income)
    ));
    lines.push(format!(
        "Total expenses: {}",
        money(symbol, summary.total_expenses)
    ));
    lines.push(format!(
        "Balance:        {}",
        money(symbol, summary.total_balance).bold()
    ));
    lines.join("\n")
}
