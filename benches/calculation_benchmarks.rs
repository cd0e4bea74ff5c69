//! Criterion benchmarks for the hot calculation paths.

use chrono::NaiveDate;
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;
use std::str::FromStr;

use shop_hr_engine::config::{PayrollPolicy, WithholdingPolicy};
use shop_hr_engine::models::{
    EmployeeProfile, PayAdjustments, PayPeriod, PeriodAttendanceSummary,
};
use shop_hr_engine::payroll::{calculate, monthly_withholding, sss_contribution};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

fn bench_payroll_calculation(c: &mut Criterion) {
    let employee = EmployeeProfile {
        id: "emp_001".to_string(),
        name: "Maria Santos".to_string(),
        base_salary: dec("23750"),
        hourly_rate: None,
    };
    let summary = PeriodAttendanceSummary {
        total_regular_hours: dec("168"),
        total_overtime_hours: dec("5.5"),
        total_undertime_hours: dec("2"),
        total_absent_days: 1,
        total_late_days: 3,
        total_present_days: 21,
        working_days: 22,
        is_finalized: true,
    };
    let period = PayPeriod {
        start_date: NaiveDate::from_ymd_opt(2026, 3, 1).unwrap(),
        end_date: NaiveDate::from_ymd_opt(2026, 3, 31).unwrap(),
    };
    let adjustments = PayAdjustments {
        sales_commission: dec("1500"),
        ..PayAdjustments::default()
    };
    let policy = PayrollPolicy::default();

    c.bench_function("payroll_calculate", |b| {
        b.iter(|| {
            calculate(
                black_box(&employee),
                black_box(&summary),
                black_box(period),
                black_box(&adjustments),
                black_box(&policy),
            )
            .unwrap()
        })
    });
}

fn bench_contribution_lookup(c: &mut Criterion) {
    c.bench_function("sss_contribution", |b| {
        b.iter(|| sss_contribution(black_box(dec("23750"))))
    });
}

fn bench_withholding(c: &mut Criterion) {
    c.bench_function("monthly_withholding", |b| {
        b.iter(|| monthly_withholding(black_box(dec("45000")), WithholdingPolicy::Annualized))
    });
}

criterion_group!(
    benches,
    bench_payroll_calculation,
    bench_contribution_lookup,
    bench_withholding
);
criterion_main!(benches);
