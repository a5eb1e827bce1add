use bazi_base::{
    Direction, Pillar, Stem, day_pillar, hour_pillar, luck_pillars, month_pillar, pillar_at,
    ten_god, year_pillar,
};
use criterion::{Criterion, black_box, criterion_group, criterion_main};

fn cycle_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("cycle");
    group.bench_function("pillar_at", |b| b.iter(|| pillar_at(black_box(37))));
    group.bench_function("year_pillar", |b| b.iter(|| year_pillar(black_box(2024))));
    group.bench_function("day_pillar", |b| b.iter(|| day_pillar(black_box(2_460_345))));
    group.bench_function("parse_pillar", |b| {
        b.iter(|| black_box("戊午").parse::<Pillar>())
    });
    group.finish();
}

fn rules_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("rules");
    group.bench_function("month_pillar", |b| {
        b.iter(|| month_pillar(black_box(Stem::Ji), black_box(10)))
    });
    group.bench_function("hour_pillar", |b| {
        b.iter(|| hour_pillar(black_box(Stem::Wu), black_box(0)))
    });
    group.bench_function("ten_god", |b| {
        b.iter(|| ten_god(black_box(Stem::Wu), black_box(Stem::Gui)))
    });
    group.finish();
}

fn luck_bench(c: &mut Criterion) {
    let month = year_pillar(1996);
    c.bench_function("luck_pillars_9", |b| {
        b.iter(|| luck_pillars(black_box(month), Direction::Backward, black_box(9)))
    });
}

criterion_group!(benches, cycle_bench, rules_bench, luck_bench);
criterion_main!(benches);
