use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use salah_times::{
    CalculationMethod, CalendarDate, Coordinates, HighLatitudeRule, PolarCircleResolution,
    PrayerTimesCache, compute_prayer_times, prayer_times_for_days, qibla_direction,
};
use std::hint::black_box;

fn benchmark_single_day(c: &mut Criterion) {
    let coordinates = Coordinates::new(21.422487, 39.826206).unwrap();
    let date = CalendarDate::new(2024, 6, 21).unwrap();
    let params = CalculationMethod::UmmAlQura.parameters();

    c.bench_function("single_day", |b| {
        b.iter(|| compute_prayer_times(black_box(coordinates), black_box(date), &params).unwrap())
    });

    let moonsighting = CalculationMethod::MoonsightingCommittee.parameters();
    let london = Coordinates::new(51.5074, -0.1278).unwrap();
    c.bench_function("single_day_seasonal", |b| {
        b.iter(|| {
            compute_prayer_times(black_box(london), black_box(date), &moonsighting).unwrap()
        })
    });
}

fn benchmark_all_methods(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_methods");
    let coordinates = Coordinates::new(41.0082, 28.9784).unwrap();
    let date = CalendarDate::new(2024, 3, 20).unwrap();

    for method in CalculationMethod::ALL {
        let params = method.parameters();
        group.bench_with_input(BenchmarkId::from_parameter(method), &params, |b, params| {
            b.iter(|| compute_prayer_times(black_box(coordinates), black_box(date), params).unwrap())
        });
    }

    group.finish();
}

fn benchmark_timetable(c: &mut Criterion) {
    let mut group = c.benchmark_group("timetable");
    let coordinates = Coordinates::new(-6.2088, 106.8456).unwrap();
    let start = CalendarDate::new(2024, 1, 1).unwrap();
    let params = CalculationMethod::Singapore.parameters();

    for &days in &[30_u32, 366] {
        group.throughput(Throughput::Elements(u64::from(days)));
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, &days| {
            b.iter(|| {
                prayer_times_for_days(black_box(coordinates), black_box(start), days, params)
                    .map(Result::unwrap)
                    .count()
            })
        });
    }

    group.finish();
}

fn benchmark_polar_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("polar_resolution");
    let coordinates = Coordinates::new(70.0, 25.0).unwrap();
    let date = CalendarDate::new(2024, 6, 21).unwrap();
    let base = CalculationMethod::MuslimWorldLeague
        .parameters()
        .with_high_latitude_rule(HighLatitudeRule::SeventhOfTheNight);

    for resolution in [
        PolarCircleResolution::AqrabBalad,
        PolarCircleResolution::AqrabYaum,
    ] {
        let params = base.with_polar_circle_resolution(resolution);
        group.bench_function(format!("{resolution:?}"), |b| {
            b.iter(|| compute_prayer_times(black_box(coordinates), black_box(date), &params).unwrap())
        });
    }

    group.finish();
}

fn benchmark_cache(c: &mut Criterion) {
    let mut group = c.benchmark_group("cache");
    let date = CalendarDate::new(2024, 6, 21).unwrap();
    let params = CalculationMethod::MuslimWorldLeague.parameters();

    // Requests clustered within a city, as from many nearby devices
    let requests: Vec<Coordinates> = (0..1000)
        .map(|i| {
            let offset = f64::from(i % 50) * 0.0001;
            Coordinates::new(48.8566 + offset, 2.3522 - offset).unwrap()
        })
        .collect();
    group.throughput(Throughput::Elements(requests.len() as u64));

    group.bench_function("uncached", |b| {
        b.iter(|| {
            for coordinates in &requests {
                black_box(compute_prayer_times(*coordinates, date, &params).unwrap());
            }
        })
    });

    group.bench_function("cached", |b| {
        b.iter(|| {
            let mut cache = PrayerTimesCache::new();
            for coordinates in &requests {
                black_box(cache.get_or_compute(*coordinates, date, &params).unwrap());
            }
        })
    });

    group.finish();
}

fn benchmark_qibla(c: &mut Criterion) {
    let coordinates = Coordinates::new(40.7128, -74.0060).unwrap();
    c.bench_function("qibla_direction", |b| {
        b.iter(|| qibla_direction(black_box(&coordinates)))
    });
}

criterion_group!(
    benches,
    benchmark_single_day,
    benchmark_all_methods,
    benchmark_timetable,
    benchmark_polar_resolution,
    benchmark_cache,
    benchmark_qibla
);
criterion_main!(benches);
