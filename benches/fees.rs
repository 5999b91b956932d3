//! Fee model benchmarks: single calculations and full comparisons.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use feewise::{FeeModel, InvestmentCategory, compare};

fn bench_single_strategy(c: &mut Criterion) {
    let model = FeeModel::default();

    c.bench_function("questrade_regular_us_stock", |b| {
        b.iter(|| model.questrade_regular(black_box(1000.0), InvestmentCategory::UsStock))
    });

    c.bench_function("norberts_gambit_us_stock", |b| {
        b.iter(|| model.norberts_gambit(black_box(1000.0), InvestmentCategory::UsStock))
    });
}

fn bench_compare(c: &mut Criterion) {
    let model = FeeModel::default();

    c.bench_function("compare_us_stock", |b| {
        b.iter(|| compare(&model, black_box(1000.0), InvestmentCategory::UsStock))
    });

    c.bench_function("compare_all_categories", |b| {
        b.iter(|| {
            for category in InvestmentCategory::ALL {
                let _ = compare(&model, black_box(2500.0), category);
            }
        })
    });
}

criterion_group!(benches, bench_single_strategy, bench_compare);
criterion_main!(benches);
