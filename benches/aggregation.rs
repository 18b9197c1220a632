use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fintrack_core::{
    aggregate_flows, bucket_by_period, spending_by_category, AnalyticsRange, AnalyticsService,
    DashboardService, DashboardSettings,
};
use fintrack_domain::{
    trailing_months, Account, AccountType, BudgetCategory, FinanceSnapshot, Transaction,
};
use fintrack_storage_json::{load_snapshot_from_path, save_snapshot_to_path};
use tempfile::tempdir;

const CATEGORIES: [&str; 6] = ["Rent", "Groceries", "Dining", "Transport", "Utilities", "Fun"];

fn build_sample_snapshot(txn_count: usize) -> FinanceSnapshot {
    let checking = Account::new("Checking", AccountType::Checking, 8_500.0);
    let card = Account::new("Card", AccountType::Credit, 1_200.0).with_credit_limit(5_000.0);
    let start_date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let transactions = (0..txn_count)
        .map(|idx| {
            let date = start_date + Duration::days((idx % 365) as i64);
            let account = if idx % 2 == 0 { checking.id } else { card.id };
            if idx % 10 == 0 {
                Transaction::income(account, "Salary", 2_500.0, "Salary", date)
            } else {
                let category = CATEGORIES[idx % CATEGORIES.len()];
                Transaction::expense(account, "Purchase", 20.0 + (idx % 90) as f64, category, date)
            }
        })
        .collect();
    let budgets = CATEGORIES
        .iter()
        .map(|name| BudgetCategory::new(*name, 600.0))
        .collect();

    FinanceSnapshot::new(vec![checking, card], transactions, budgets)
}

fn bench_aggregators(c: &mut Criterion) {
    let snapshot = build_sample_snapshot(black_box(10_000));
    let reference = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let periods = trailing_months(reference, 12);

    c.bench_function("aggregate_flows_10k", |b| {
        b.iter(|| black_box(aggregate_flows(&snapshot.transactions)))
    });
    c.bench_function("bucket_by_period_10k_12m", |b| {
        b.iter(|| black_box(bucket_by_period(&snapshot.transactions, &periods)))
    });
    c.bench_function("spending_by_category_10k", |b| {
        b.iter(|| black_box(spending_by_category(&snapshot.transactions)))
    });
    c.bench_function("dashboard_10k", |b| {
        b.iter(|| {
            DashboardService::from_snapshot(&snapshot, reference, &DashboardSettings::default())
                .expect("dashboard")
        })
    });
    c.bench_function("analytics_1y_10k", |b| {
        b.iter(|| {
            AnalyticsService::from_snapshot(&snapshot, AnalyticsRange::OneYear, reference)
                .expect("analytics")
        })
    });
}

fn bench_snapshot_load(c: &mut Criterion) {
    let snapshot = build_sample_snapshot(10_000);
    let dir = tempdir().expect("tempdir");
    let file_path = dir.path().join("snapshot.json");
    save_snapshot_to_path(&snapshot, &file_path).expect("seed");

    c.bench_function("snapshot_load_10k", |b| {
        b.iter(|| {
            let loaded = load_snapshot_from_path(&file_path).expect("load snapshot");
            black_box(loaded);
        })
    });
}

criterion_group!(benches, bench_aggregators, bench_snapshot_load);
criterion_main!(benches);
