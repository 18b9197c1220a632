//! Text rendering of [`AnalyticsReport`].

use fintrack_core::{format::format_ratio, format::CurrencyFormatter, AnalyticsReport};

use super::{
    style::ReportStyle,
    table::{Table, TableColumn},
};

const BAR_WIDTH: usize = 10;

pub fn render_analytics(
    report: &AnalyticsReport,
    money: &dyn CurrencyFormatter,
    style: &ReportStyle,
) -> String {
    let mut sections = vec![style.header(format!(
        "Analytics: {} ({} to {})",
        report.range,
        report.window.start,
        report.window.last_day()
    ))];

    let mut cards = Table::new(vec![TableColumn::left("Metric"), TableColumn::right("Value")])
        .without_headers();
    cards.push_row(vec!["Total income".into(), money.format_amount(report.totals.income)]);
    cards.push_row(vec![
        "Total expenses".into(),
        money.format_amount(report.totals.expenses),
    ]);
    let net = money.format_amount(report.net_savings);
    cards.push_row(vec![
        "Net savings".into(),
        if report.net_savings < 0.0 {
            style.bad(net)
        } else {
            style.good(net)
        },
    ]);
    cards.push_row(vec![
        "Savings rate".into(),
        format!("{:.1}%", report.savings_rate),
    ]);
    sections.push(cards.render(style));

    let spending = if report.monthly_spending.is_empty() {
        "No expenses in this range.".to_string()
    } else {
        let mut table = Table::new(vec![TableColumn::left("Month"), TableColumn::right("Spent")]);
        for month in &report.monthly_spending {
            table.push_row(vec![month.label.clone(), money.format_amount(month.amount)]);
        }
        table.render(style)
    };
    sections.push(format!("{}\n{}", style.section("Monthly spending"), spending));

    let categories = if report.categories.is_empty() {
        "No expenses in this range.".to_string()
    } else {
        let mut table = Table::new(vec![
            TableColumn::left("Category"),
            TableColumn::right("Spent"),
            TableColumn::right("Share"),
        ]);
        for row in &report.categories {
            table.push_row(vec![
                row.category.clone(),
                money.format_amount(row.total),
                format_ratio(row.share_of(report.totals.expenses)),
            ]);
        }
        table.render(style)
    };
    sections.push(format!(
        "{}\n{}",
        style.section("Spending by category"),
        categories
    ));

    let budgets = if report.budgets.is_empty() {
        "No budget categories.".to_string()
    } else {
        let mut table = Table::new(vec![
            TableColumn::left("Budget"),
            TableColumn::right("Spent"),
            TableColumn::right("Limit"),
            TableColumn::right("Remaining"),
            TableColumn::left("Used"),
        ]);
        for progress in &report.budgets {
            let used = format!(
                "{} {}",
                style.bar(progress.utilization, BAR_WIDTH),
                format_ratio(progress.utilization)
            );
            table.push_row(vec![
                progress.category.clone(),
                money.format_amount(progress.spent),
                money.format_amount(progress.budget),
                money.format_amount(progress.remaining),
                if progress.over_budget {
                    style.bad(format!("{used} OVER"))
                } else {
                    used
                },
            ]);
        }
        table.render(style)
    };
    sections.push(format!("{}\n{}", style.section("Budgets"), budgets));

    sections.join("\n\n")
}
