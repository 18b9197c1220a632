//! Text rendering of [`DashboardSummary`].

use fintrack_core::{format::format_ratio, format::CurrencyFormatter, DashboardSummary};
use fintrack_domain::shift_months;

use super::{
    style::ReportStyle,
    table::{Table, TableColumn},
};

const BAR_WIDTH: usize = 12;

pub fn render_dashboard(
    summary: &DashboardSummary,
    money: &dyn CurrencyFormatter,
    style: &ReportStyle,
) -> String {
    let previous = shift_months(summary.reference_date, -1).format("%b");
    let mut sections = vec![style.header(format!(
        "Dashboard: {}",
        summary.reference_date.format("%B %Y")
    ))];

    let mut cards = Table::new(vec![
        TableColumn::left("Metric"),
        TableColumn::right("Amount"),
        TableColumn::left("Change"),
    ])
    .without_headers();
    cards.push_row(vec![
        "Total balance".into(),
        money.format_amount(summary.total_balance),
        String::new(),
    ]);
    cards.push_row(vec![
        "Income".into(),
        money.format_amount(summary.current_month.income),
        format!(
            "{} vs {previous}",
            style.trend_badge(&summary.income_trend, DashboardSummary::INCOME_POLARITY)
        ),
    ]);
    cards.push_row(vec![
        "Expenses".into(),
        money.format_amount(summary.current_month.expenses),
        format!(
            "{} vs {previous}",
            style.trend_badge(&summary.expense_trend, DashboardSummary::EXPENSE_POLARITY)
        ),
    ]);
    cards.push_row(vec![
        "Net".into(),
        money.format_amount(summary.current_month.net()),
        String::new(),
    ]);
    sections.push(cards.render(style));

    let mut flows = Table::new(vec![
        TableColumn::left("Month"),
        TableColumn::right("Income"),
        TableColumn::right("Expenses"),
        TableColumn::right("Net"),
    ]);
    for bucket in &summary.monthly_flows {
        let net = bucket.net();
        let net_text = money.format_amount(net);
        flows.push_row(vec![
            bucket.label.clone(),
            money.format_amount(bucket.income),
            money.format_amount(bucket.expenses),
            if net < 0.0 {
                style.bad(net_text)
            } else {
                net_text
            },
        ]);
    }
    sections.push(format!(
        "{}\n{}",
        style.section(format!("Income vs expenses, last {} months", flows.rows.len())),
        flows.render(style)
    ));

    let recent = if summary.recent_transactions.is_empty() {
        "No transactions yet.".to_string()
    } else {
        let mut table = Table::new(vec![
            TableColumn::left("Date"),
            TableColumn::left("Name"),
            TableColumn::left("Category"),
            TableColumn::right("Amount"),
        ]);
        for txn in &summary.recent_transactions {
            let amount = money.format_amount(txn.signed_amount());
            table.push_row(vec![
                txn.date.format("%Y-%m-%d").to_string(),
                txn.name.clone(),
                txn.category.clone(),
                if txn.is_income() {
                    style.good(format!("+{amount}"))
                } else {
                    style.bad(amount)
                },
            ]);
        }
        table.render(style)
    };
    sections.push(format!("{}\n{}", style.section("Recent transactions"), recent));

    let accounts = if summary.accounts.per_account.is_empty() {
        "No accounts.".to_string()
    } else {
        let mut table = Table::new(vec![
            TableColumn::left("Account"),
            TableColumn::left("Type"),
            TableColumn::right("Balance"),
            TableColumn::left("Share"),
        ]);
        for entry in &summary.accounts.per_account {
            let label = if entry.credit_utilization.is_some() {
                "of limit"
            } else {
                "of total"
            };
            table.push_row(vec![
                entry.name.clone(),
                entry.account_type.to_string(),
                money.format_amount(entry.balance),
                format!(
                    "{} {} {label}",
                    style.bar(entry.display_ratio(), BAR_WIDTH),
                    format_ratio(entry.display_ratio())
                ),
            ]);
        }
        let mut block = table.render(style);
        for entry in summary.accounts.near_limit_accounts() {
            block.push('\n');
            block.push_str(&style.warning(format!(
                "{} is near its credit limit ({} used)",
                entry.name,
                format_ratio(entry.display_ratio())
            )));
        }
        block
    };
    sections.push(format!("{}\n{}", style.section("Accounts"), accounts));

    sections.join("\n\n")
}
