use bikeshare_dashboard::{daily_totals, weather_totals, Dashboard, DateInterval, RideRecord};
use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

// Two years of hourly observations, the size of the public hour.csv.
fn hourly_records() -> Vec<RideRecord> {
    let start = NaiveDate::from_ymd_opt(2011, 1, 1).unwrap();
    (0..17_379u64)
        .map(|i| {
            let date = start + Duration::days((i / 24) as i64);
            RideRecord::new(date, (i % 4 + 1) as i64, (i * 37) % 977)
        })
        .collect()
}

fn bench_aggregates(c: &mut Criterion) {
    let records = hourly_records();
    let dashboard = Dashboard::from_records(records.clone()).unwrap();
    let summer = DateInterval::new(
        NaiveDate::from_ymd_opt(2012, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2012, 8, 31).unwrap(),
    )
    .unwrap();

    c.bench_function("daily_totals", |b| b.iter(|| daily_totals(black_box(&records))));
    c.bench_function("weather_totals", |b| {
        b.iter(|| weather_totals(black_box(&records)))
    });
    c.bench_function("compute_aggregates_full_range", |b| {
        b.iter(|| dashboard.compute_aggregates(black_box(&dashboard.default_interval())))
    });
    c.bench_function("compute_aggregates_summer", |b| {
        b.iter(|| dashboard.compute_aggregates(black_box(&summer)))
    });
}

criterion_group!(benches, bench_aggregates);
criterion_main!(benches);
