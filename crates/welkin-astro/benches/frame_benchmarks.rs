//! Per-frame hot path: everything the sky assembly queries each frame.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use welkin_astro::{
    Observer, apparent_angular_moon_diameter, apparent_angular_sun_diameter, moon_position,
    sun_position, true_obliquity, view_distance_within_atmosphere,
};
use welkin_time::JulianDay;

fn bench_frame_parameters(c: &mut Criterion) {
    let t = JulianDay(2_460_310.5);
    let observer = Observer::from_degrees(52.5, 13.4);

    c.bench_function("sun_horizontal", |b| {
        b.iter(|| {
            let eq = sun_position(black_box(t)).to_equatorial(t);
            observer.horizontal(&eq, t)
        })
    });

    c.bench_function("moon_horizontal", |b| {
        b.iter(|| {
            let eq = moon_position(black_box(t)).to_equatorial(t);
            observer.horizontal(&eq, t)
        })
    });

    c.bench_function("angular_diameters", |b| {
        b.iter(|| {
            (
                apparent_angular_sun_diameter(black_box(t)),
                apparent_angular_moon_diameter(black_box(t)),
            )
        })
    });

    c.bench_function("obliquity_with_nutation", |b| {
        b.iter(|| true_obliquity(black_box(t)))
    });

    c.bench_function("atmosphere_path_sweep", |b| {
        b.iter(|| {
            let mut acc = 0.0;
            for k in 0..=32 {
                let y = k as f64 / 32.0;
                acc += view_distance_within_atmosphere(black_box(y), true).unwrap();
            }
            acc
        })
    });
}

criterion_group!(benches, bench_frame_parameters);
criterion_main!(benches);
