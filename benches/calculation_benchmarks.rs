//! Performance benchmarks for the Zakat Engine.
//!
//! Both cores are expected to be effectively free at UI scale: a calendar
//! conversion is constant-time integer arithmetic, and a Zakat computation
//! is linear in the number of assets and liabilities.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use rust_decimal::Decimal;

use zakat_engine::calendar::{GregorianDate, gregorian_to_hijri, hijri_to_gregorian};
use zakat_engine::engine::compute_zakat;
use zakat_engine::models::{Asset, AssetCategory, Fiqh, Liability, MetalPrices, NisabStandard};

fn build_portfolio(asset_count: usize) -> (Vec<Asset>, Vec<Liability>) {
    let categories = [
        AssetCategory::Cash,
        AssetCategory::Gold,
        AssetCategory::Silver,
        AssetCategory::Business,
        AssetCategory::Investment,
        AssetCategory::Crypto,
        AssetCategory::Jewelry,
    ];

    let assets = (0..asset_count)
        .map(|i| {
            Asset::new(
                categories[i % categories.len()],
                format!("asset_{:03}", i),
                Decimal::new(100 + i as i64, 0),
                i % 5 != 0,
            )
        })
        .collect();

    let liabilities = (0..asset_count / 4)
        .map(|i| Liability::new(format!("debt_{:03}", i), Decimal::new(50 + i as i64, 0)))
        .collect();

    (assets, liabilities)
}

fn bench_calendar_conversion(c: &mut Criterion) {
    let date = GregorianDate::new(2024, 3, 11);

    c.bench_function("gregorian_to_hijri", |b| {
        b.iter(|| gregorian_to_hijri(black_box(date)))
    });

    c.bench_function("calendar_round_trip", |b| {
        b.iter(|| hijri_to_gregorian(gregorian_to_hijri(black_box(date))))
    });
}

fn bench_compute_zakat(c: &mut Criterion) {
    let prices = MetalPrices::new(Decimal::from(65), Decimal::new(8, 1));
    let mut group = c.benchmark_group("compute_zakat");

    for asset_count in [1usize, 10, 100, 1000] {
        let (assets, liabilities) = build_portfolio(asset_count);
        group.throughput(Throughput::Elements(asset_count as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(asset_count),
            &asset_count,
            |b, _| {
                b.iter(|| {
                    compute_zakat(
                        black_box(&assets),
                        black_box(&liabilities),
                        Fiqh::Hanafi,
                        NisabStandard::Silver,
                        &prices,
                        true,
                    )
                })
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_calendar_conversion, bench_compute_zakat);
criterion_main!(benches);
