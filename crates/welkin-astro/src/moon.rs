//! Lunar ephemeris, truncated from Meeus chapter 47.
//!
//! The series keeps the 32 largest longitude/distance terms of Table 47.A
//! and the 20 largest latitude terms of Table 47.B, plus the planetary
//! additive terms. That lands within a few hundredths of a degree and a few
//! tens of kilometers of the full theory — about a fiftieth of the lunar
//! disk, far below what a rendered moon can show. The tables are pinned
//! reference data.

use std::f64::consts::TAU;

use welkin_time::JulianDay;

use crate::coords::EclipticCoords;
use crate::nutation::longitude_nutation;
use crate::sun::{sun_distance_au, sun_position};
use crate::AU_KM;

/// One periodic term: integer multipliers of `(D, M, M', F)` and the
/// coefficients for longitude (1e-6 degree) and distance (1e-3 km).
type LonDistTerm = (i32, i32, i32, i32, i64, i64);

/// One latitude term: multipliers of `(D, M, M', F)` and the coefficient in
/// 1e-6 degree.
type LatTerm = (i32, i32, i32, i32, i64);

#[rustfmt::skip]
const LONGITUDE_DISTANCE_TERMS: [LonDistTerm; 32] = [
    (0, 0, 1, 0,  6_288_774, -20_905_355),
    (2, 0,-1, 0,  1_274_027,  -3_699_111),
    (2, 0, 0, 0,    658_314,  -2_955_968),
    (0, 0, 2, 0,    213_618,    -569_925),
    (0, 1, 0, 0,   -185_116,      48_888),
    (0, 0, 0, 2,   -114_332,      -3_149),
    (2, 0,-2, 0,     58_793,     246_158),
    (2,-1,-1, 0,     57_066,    -152_138),
    (2, 0, 1, 0,     53_322,    -170_733),
    (2,-1, 0, 0,     45_758,    -204_586),
    (0, 1,-1, 0,    -40_923,    -129_620),
    (1, 0, 0, 0,    -34_720,     108_743),
    (0, 1, 1, 0,    -30_383,     104_755),
    (2, 0, 0,-2,     15_327,      10_321),
    (0, 0, 1, 2,    -12_528,           0),
    (0, 0, 1,-2,     10_980,      79_661),
    (4, 0,-1, 0,     10_675,     -34_782),
    (0, 0, 3, 0,     10_034,     -23_210),
    (4, 0,-2, 0,      8_548,     -21_636),
    (2, 1,-1, 0,     -7_888,      24_208),
    (2, 1, 0, 0,     -6_766,      30_824),
    (1, 0,-1, 0,     -5_163,      -8_379),
    (1, 1, 0, 0,      4_987,     -16_675),
    (2,-1, 1, 0,      4_036,     -12_831),
    (2, 0, 2, 0,      3_994,     -10_445),
    (4, 0, 0, 0,      3_861,     -11_650),
    (2, 0,-3, 0,      3_665,      14_403),
    (0, 1,-2, 0,     -2_689,      -7_003),
    (2, 0,-1, 2,     -2_602,           0),
    (2,-1,-2, 0,      2_390,      10_056),
    (1, 0, 1, 0,     -2_348,       6_322),
    (2,-2, 0, 0,      2_236,      -9_884),
];

#[rustfmt::skip]
const LATITUDE_TERMS: [LatTerm; 20] = [
    (0, 0, 0, 1,  5_128_122),
    (0, 0, 1, 1,    280_602),
    (0, 0, 1,-1,    277_693),
    (2, 0, 0,-1,    173_237),
    (2, 0,-1, 1,     55_413),
    (2, 0,-1,-1,     46_271),
    (2, 0, 0, 1,     32_573),
    (0, 0, 2, 1,     17_198),
    (2, 0, 1,-1,      9_266),
    (0, 0, 2,-1,      8_822),
    (2,-1, 0,-1,      8_216),
    (2, 0,-2,-1,      4_324),
    (2, 0, 1, 1,      4_200),
    (2, 1, 0,-1,     -3_359),
    (2,-1,-1, 1,      2_463),
    (2,-1, 0, 1,      2_211),
    (2,-1,-1,-1,      2_065),
    (0, 1,-1,-1,     -1_870),
    (4, 0,-1,-1,      1_828),
    (0, 1, 0, 1,     -1_794),
];

/// Fundamental arguments of the lunar theory at `tc` centuries since
/// J2000.0, all in radians: mean longitude L', elongation D, solar anomaly
/// M, lunar anomaly M', argument of latitude F.
struct LunarArguments {
    lp: f64,
    d: f64,
    m: f64,
    mp: f64,
    f: f64,
    /// Eccentricity damping for terms involving the solar anomaly.
    e: f64,
}

fn lunar_arguments(tc: f64) -> LunarArguments {
    let t2 = tc * tc;
    let t3 = t2 * tc;
    let t4 = t3 * tc;
    let deg = |v: f64| v.to_radians().rem_euclid(TAU);

    LunarArguments {
        lp: deg(218.316_447_7 + 481_267.881_234_21 * tc - 0.001_578_6 * t2 + t3 / 538_841.0
            - t4 / 65_194_000.0),
        d: deg(297.850_192_1 + 445_267.111_403_4 * tc - 0.001_881_9 * t2 + t3 / 545_868.0
            - t4 / 113_065_000.0),
        m: deg(357.529_109_2 + 35_999.050_290_9 * tc - 0.000_153_6 * t2 + t3 / 24_490_000.0),
        mp: deg(134.963_396_4 + 477_198.867_505_5 * tc + 0.008_741_4 * t2 + t3 / 69_699.0
            - t4 / 14_712_000.0),
        f: deg(93.272_095_0 + 483_202.017_523_3 * tc - 0.003_653_9 * t2 - t3 / 3_526_000.0
            + t4 / 863_310_000.0),
        e: 1.0 - 0.002_516 * tc - 0.000_007_4 * t2,
    }
}

/// Sum the periodic series. Returns (Σl in 1e-6 deg, Σb in 1e-6 deg,
/// Σr in 1e-3 km).
fn periodic_sums(args: &LunarArguments, tc: f64) -> (f64, f64, f64) {
    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for &(d, m, mp, f, l_coeff, r_coeff) in &LONGITUDE_DISTANCE_TERMS {
        let arg = d as f64 * args.d + m as f64 * args.m + mp as f64 * args.mp + f as f64 * args.f;
        let damping = args.e.powi(m.abs());
        sum_l += l_coeff as f64 * damping * arg.sin();
        sum_r += r_coeff as f64 * damping * arg.cos();
    }

    let mut sum_b = 0.0;
    for &(d, m, mp, f, b_coeff) in &LATITUDE_TERMS {
        let arg = d as f64 * args.d + m as f64 * args.m + mp as f64 * args.mp + f as f64 * args.f;
        sum_b += b_coeff as f64 * args.e.powi(m.abs()) * arg.sin();
    }

    // Additive terms from Venus (A1), Jupiter (A2), and the flattening term.
    let a1 = (119.75 + 131.849 * tc).to_radians();
    let a2 = (53.09 + 479_264.290 * tc).to_radians();
    let a3 = (313.45 + 481_266.484 * tc).to_radians();
    sum_l += 3_958.0 * a1.sin() + 1_962.0 * (args.lp - args.f).sin() + 318.0 * a2.sin();
    sum_b += -2_235.0 * args.lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - args.f).sin()
        + 175.0 * (a1 + args.f).sin()
        + 127.0 * (args.lp - args.mp).sin()
        - 115.0 * (args.lp + args.mp).sin();

    (sum_l, sum_b, sum_r)
}

/// Earth-moon distance in kilometers at time `t`.
pub fn moon_distance_km(t: JulianDay) -> f64 {
    let tc = t.centuries_since_j2000();
    let args = lunar_arguments(tc);
    let (_, _, sum_r) = periodic_sums(&args, tc);
    385_000.56 + sum_r * 1e-3
}

/// Apparent geocentric ecliptic position of the moon at time `t`.
///
/// Longitude includes the nutation in longitude, matching the apparent sun.
pub fn moon_position(t: JulianDay) -> EclipticCoords {
    let tc = t.centuries_since_j2000();
    let args = lunar_arguments(tc);
    let (sum_l, sum_b, sum_r) = periodic_sums(&args, tc);

    let longitude = args.lp + (sum_l * 1e-6).to_radians() + longitude_nutation(t);
    let latitude = (sum_b * 1e-6).to_radians();

    EclipticCoords {
        longitude: longitude.rem_euclid(TAU),
        latitude,
        distance_km: 385_000.56 + sum_r * 1e-3,
    }
}

/// Illuminated fraction of the lunar disk at time `t`, in `[0, 1]`.
///
/// Meeus (48.2/48.3): geocentric elongation → phase angle → fraction.
/// 0.0 is new moon, 1.0 full moon.
pub fn moon_illuminated_fraction(t: JulianDay) -> f64 {
    let moon = moon_position(t);
    let sun = sun_position(t);

    let cos_elongation =
        moon.latitude.cos() * (moon.longitude - sun.longitude).cos();
    let elongation = cos_elongation.clamp(-1.0, 1.0).acos();

    let sun_distance_km = sun_distance_au(t) * AU_KM;
    let phase_angle = (sun_distance_km * elongation.sin())
        .atan2(moon.distance_km - sun_distance_km * elongation.cos());

    (1.0 + phase_angle.cos()) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_meeus_lunar_example() {
        // Meeus example 47.a: 1992 April 12.0 TD,
        // λ = 133.162655°, β = −3.229126°, Δ = 368409.7 km (full series).
        // The truncation costs a few hundredths of a degree at most.
        let t = JulianDay(2_448_724.5);
        let pos = moon_position(t);
        // The example quotes λ before nutation; strip ours for comparison.
        let lon_deg = (pos.longitude - longitude_nutation(t)).to_degrees();
        let lat_deg = pos.latitude.to_degrees();
        assert!(
            (lon_deg - 133.162_655).abs() < 0.03,
            "λ = {lon_deg}°, expected ≈ 133.1627°"
        );
        assert!(
            (lat_deg - -3.229_126).abs() < 0.02,
            "β = {lat_deg}°, expected ≈ −3.2291°"
        );
        assert!(
            (pos.distance_km - 368_409.7).abs() < 60.0,
            "Δ = {} km, expected ≈ 368409.7 km",
            pos.distance_km
        );
    }

    #[test]
    fn test_distance_stays_within_orbit_bounds() {
        // Perigee ≈ 356 500 km, apogee ≈ 406 700 km; sample a saros-ish span.
        for k in 0..660 {
            let t = JulianDay(2_451_545.0 + k as f64 * 10.0);
            let d = moon_distance_km(t);
            assert!(
                (356_000.0..407_000.0).contains(&d),
                "distance {d} km out of orbital bounds at step {k}"
            );
        }
    }

    #[test]
    fn test_latitude_bounded_by_inclination() {
        // The orbit is inclined 5.145° to the ecliptic.
        for k in 0..120 {
            let t = JulianDay(2_455_000.0 + k as f64 * 3.0);
            let beta = moon_position(t).latitude.to_degrees();
            assert!(beta.abs() < 5.4, "|β| = {beta}° exceeds inclination bound");
        }
    }

    #[test]
    fn test_sidereal_month_period() {
        // Longitude returns to itself after ~27.32 days.
        let t0 = JulianDay(2_460_000.5);
        let t1 = JulianDay(2_460_000.5 + 27.321_662);
        let l0 = moon_position(t0).longitude.to_degrees();
        let l1 = moon_position(t1).longitude.to_degrees();
        let diff = (l1 - l0 + 180.0).rem_euclid(360.0) - 180.0;
        assert!(
            diff.abs() < 3.0,
            "longitude moved {diff}° over one sidereal month"
        );
    }

    #[test]
    fn test_known_full_and_new_moon() {
        // 2024-01-11 11:57 UT was a new moon; 2024-01-25 17:54 UT full.
        let new_moon = moon_illuminated_fraction(JulianDay(2_460_320.998));
        let full_moon = moon_illuminated_fraction(JulianDay(2_460_335.246));
        assert!(new_moon < 0.01, "new moon fraction = {new_moon}");
        assert!(full_moon > 0.99, "full moon fraction = {full_moon}");
    }

    #[test]
    fn test_fraction_in_unit_interval() {
        for k in 0..60 {
            let t = JulianDay(2_460_300.5 + k as f64);
            let f = moon_illuminated_fraction(t);
            assert!((0.0..=1.0).contains(&f), "fraction {f} at day {k}");
        }
    }
}
