use bazi_chart::{
    ChartConfig, Gender, ReadingRequest, compute_annual_pillars, compute_chart, compute_reading,
};
use bazi_jieqi::jie_table;
use bazi_time::CivilTime;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn chart_bench(c: &mut Criterion) {
    // Build the boundary table outside the measured loop.
    let _ = jie_table();
    let config = ChartConfig::default();
    let birth = CivilTime::new(1984, 6, 15, 12, 30, 0.0);

    let mut group = c.benchmark_group("chart");
    group.bench_function("compute_chart", |b| {
        b.iter(|| compute_chart(black_box(birth), &config))
    });
    group.bench_function("luck_cycles_8", |b| {
        let chart = compute_chart(birth, &config);
        b.iter(|| {
            chart
                .as_ref()
                .map(|c| c.luck_cycles(black_box(Gender::Female), 8))
        })
    });
    group.bench_function("annual_pillars_12", |b| {
        b.iter(|| compute_annual_pillars(black_box(2024), 12))
    });
    group.bench_function("compute_reading", |b| {
        b.iter(|| {
            compute_reading(
                black_box(birth),
                Gender::Male,
                &ReadingRequest::default(),
                &config,
            )
        })
    });
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
