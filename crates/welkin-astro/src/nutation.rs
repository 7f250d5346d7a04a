//! Nutation in longitude and obliquity, IAU 2000B truncated model.
//!
//! The 77-term lunisolar series reproduces the full IAU 2000A model to
//! about 1 milliarcsecond over 1995–2050, far below what a rendered sky can
//! resolve. Coefficients are pinned from IERS Conventions 2010, Table 5.3b;
//! Delaunay argument polynomials from Table 5.2e. The table is data, not
//! something to re-derive.

use std::f64::consts::TAU;

use welkin_time::JulianDay;

use crate::ARCSEC_TO_RAD;

/// One lunisolar term: integer multipliers of the five Delaunay arguments
/// `(l, l', F, D, Ω)` followed by the longitude amplitudes `(S, S·T)` and
/// obliquity amplitudes `(C, C·T)` in units of 0.1 microarcseconds.
type Term = (i32, i32, i32, i32, i32, i64, i64, i64, i64);

#[rustfmt::skip]
const LUNISOLAR_TERMS: [Term; 77] = [
    ( 0,  0,  0,  0, 1, -172064161, -174666,  92052331,  9086),
    ( 0,  0,  2, -2, 2,  -13170906,   -1675,   5730336, -3015),
    ( 0,  0,  2,  0, 2,   -2276413,    -234,    978459,  -485),
    ( 0,  0,  0,  0, 2,    2074554,     207,   -897492,   470),
    ( 0,  1,  0,  0, 0,    1475877,   -3633,     73871,  -184),
    ( 0,  1,  2, -2, 2,    -516821,    1226,    224386,  -677),
    ( 1,  0,  0,  0, 0,     711159,      73,     -6750,     0),
    ( 0,  0,  2,  0, 1,    -387298,    -367,    200728,    18),
    ( 1,  0,  2,  0, 2,    -301461,     -36,    129025,   -63),
    ( 0, -1,  2, -2, 2,     215829,    -494,    -95929,   299),
    ( 0,  0,  2, -2, 1,     128227,     137,    -68982,    -9),
    (-1,  0,  2,  0, 2,     123457,      11,    -53311,    32),
    (-1,  0,  0,  2, 0,     156994,      10,     -1235,     0),
    ( 1,  0,  0,  0, 1,      63110,      63,    -33228,     0),
    (-1,  0,  0,  0, 1,     -57976,     -63,     31429,     0),
    (-1,  0,  2,  2, 2,     -59641,     -11,     25543,   -11),
    ( 1,  0,  2,  0, 1,     -51613,     -42,     26366,     0),
    (-2,  0,  2,  0, 1,      45893,      50,    -24236,   -10),
    ( 0,  0,  0,  2, 0,      63384,      11,     -1220,     0),
    ( 0,  0,  2,  2, 2,     -38571,      -1,     16452,   -11),
    ( 0, -2,  2, -2, 2,      32481,       0,    -13870,     0),
    (-2,  0,  0,  2, 0,     -47722,       0,       477,     0),
    ( 2,  0,  2,  0, 2,     -31046,      -1,     13238,   -11),
    ( 1,  0,  2, -2, 2,      28593,       0,    -12338,    10),
    (-1,  0,  2,  0, 1,      20441,      21,    -10758,     0),
    ( 2,  0,  0,  0, 0,      29243,       0,      -609,     0),
    ( 0,  0,  2,  0, 0,      25887,       0,      -550,     0),
    ( 0,  1,  0,  0, 1,     -14053,     -25,      8551,    -2),
    (-1,  0,  0,  2, 1,      15164,      10,     -8001,     0),
    ( 0,  2,  2, -2, 2,     -15794,      72,      6850,   -42),
    ( 0,  0, -2,  2, 0,      21783,       0,      -167,     0),
    ( 1,  0,  0, -2, 1,     -12873,     -10,      6953,     0),
    ( 0, -1,  0,  0, 1,     -12654,      11,      6415,     0),
    (-1,  0,  2,  2, 1,     -10204,       0,      5222,     0),
    ( 0,  2,  0,  0, 0,      16707,     -85,       168,    -1),
    ( 1,  0,  2,  2, 2,      -7691,       0,      3268,     0),
    (-2,  0,  2,  0, 0,     -11024,       0,       104,     0),
    ( 0,  1,  2,  0, 2,       7566,     -21,     -3250,     0),
    ( 0,  0,  2,  2, 1,      -6637,     -11,      3353,     0),
    ( 0, -1,  2,  0, 2,      -7141,      21,      3070,     0),
    ( 0,  0,  0,  2, 1,      -6302,     -11,      3272,     0),
    ( 1,  0,  2, -2, 1,       5800,      10,     -3045,     0),
    ( 2,  0,  2, -2, 2,       6443,       0,     -2768,     0),
    (-2,  0,  0,  2, 1,      -5774,     -11,      3041,     0),
    ( 2,  0,  2,  0, 1,      -5350,       0,      2695,     0),
    ( 0, -1,  2, -2, 1,      -4752,     -11,      2719,     0),
    ( 0,  0,  0, -2, 1,      -4940,     -11,      2720,     0),
    (-1, -1,  0,  2, 0,       7350,       0,       -51,     0),
    ( 2,  0,  0, -2, 1,      -4803,     -11,      2556,     0),
    ( 1,  0,  0,  2, 0,      -7677,       0,       462,     0),
    ( 0,  1,  2, -2, 1,       5417,       0,     -2520,     0),
    ( 1, -1,  0,  0, 0,       6624,       0,      -468,     0),
    (-2,  0,  2,  0, 2,      -5433,       0,      2334,     0),
    ( 3,  0,  2,  0, 2,      -4632,       0,      1991,     0),
    ( 0, -1,  0,  2, 0,       6106,       0,      -167,     0),
    ( 1, -1,  2,  0, 2,      -3593,       0,      1556,     0),
    ( 0,  0,  0,  1, 0,      -4766,       0,       270,     0),
    (-1, -1,  2,  2, 2,      -4095,       0,      1793,     0),
    (-1,  0,  2,  0, 0,       4229,       0,      -101,     0),
    ( 0, -1,  2,  2, 2,      -3372,       0,      1487,     0),
    ( 2,  0,  0,  0, 1,      -3353,       0,      1758,     0),
    ( 1,  0,  2,  0, 0,      -3523,       0,       246,     0),
    ( 1,  1,  0,  0, 0,      -3613,       0,       329,     0),
    (-1,  0,  2, -2, 1,       3522,       0,     -1830,     0),
    ( 2,  0,  0,  0,-1,       3312,       0,     -1730,     0),
    ( 0,  0, -2,  2, 1,      -3142,       0,      1704,     0),
    ( 0,  1,  0,  0,-1,      -2927,       0,      1564,     0),
    ( 0,  1,  2,  0, 1,      -2887,       0,      1401,     0),
    ( 0, -1,  2,  0, 1,       2451,       0,     -1200,     0),
    ( 2,  0, -2,  0, 0,      -2790,       0,       410,     0),
    (-1,  0,  0,  2,-1,       2145,       0,     -1154,     0),
    ( 0,  0,  2, -2, 0,       2816,       0,       286,     0),
    ( 0,  1,  0, -2, 0,       2700,       0,      -258,     0),
    ( 1,  0,  0, -1, 0,      -2330,       0,       -37,     0),
    ( 0,  0,  0,  0, 2,       2283,       0,     -1039,     0),
    ( 1,  0, -2,  0, 0,      -2321,       0,       284,     0),
    (-1,  0,  0,  1, 1,      -2049,       0,      1112,     0),
];

/// Fixed offsets approximating the IAU 2000A planetary terms dropped by the
/// truncation, in arcseconds.
const PSI_PLANETARY_OFFSET_ARCSEC: f64 = -0.000_135;
const EPS_PLANETARY_OFFSET_ARCSEC: f64 = -0.000_388;

/// The five Delaunay fundamental arguments in radians.
///
/// Returns `[l, l', F, D, Ω]`: mean anomaly of the Moon, mean anomaly of the
/// Sun, mean argument of latitude of the Moon, mean elongation of the Moon
/// from the Sun, and mean longitude of the Moon's ascending node.
fn delaunay_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let arcsec = |a0: f64, a1: f64, a2: f64, a3: f64, a4: f64| {
        ((a0 + a1 * t + a2 * t2 + a3 * t3 + a4 * t4) * ARCSEC_TO_RAD).rem_euclid(TAU)
    };

    [
        arcsec(485_868.249_036, 1_717_915_923.2178, 31.8792, 0.051_635, -0.000_244_70),
        arcsec(1_287_104.793_05, 129_596_581.0481, -0.5532, 0.000_136, -0.000_011_49),
        arcsec(335_779.526_232, 1_739_527_262.8478, -12.7512, -0.001_037, 0.000_004_17),
        arcsec(1_072_260.703_69, 1_602_961_601.2090, -6.3706, 0.006_593, -0.000_031_69),
        arcsec(450_160.398_036, -6_962_890.5431, 7.4722, 0.007_702, -0.000_059_39),
    ]
}

/// Nutation in longitude and obliquity, `(Δψ, Δε)` in radians.
fn nutation(t: JulianDay) -> (f64, f64) {
    let tc = t.centuries_since_j2000();
    let [l, lp, f, d, om] = delaunay_arguments(tc);

    let mut dpsi = 0.0_f64;
    let mut deps = 0.0_f64;
    for &(nl, nlp, nf, nd, nom, s, st, c, ct) in &LUNISOLAR_TERMS {
        let arg = nl as f64 * l
            + nlp as f64 * lp
            + nf as f64 * f
            + nd as f64 * d
            + nom as f64 * om;
        dpsi += (s as f64 + st as f64 * tc) * arg.sin();
        deps += (c as f64 + ct as f64 * tc) * arg.cos();
    }

    // Amplitudes are stored in 0.1 microarcseconds.
    let dpsi_arcsec = dpsi * 1e-7 + PSI_PLANETARY_OFFSET_ARCSEC;
    let deps_arcsec = deps * 1e-7 + EPS_PLANETARY_OFFSET_ARCSEC;
    (dpsi_arcsec * ARCSEC_TO_RAD, deps_arcsec * ARCSEC_TO_RAD)
}

/// Nutation in ecliptic longitude Δψ in radians.
///
/// A small-magnitude periodic perturbation, |Δψ| < 20″; never a full-circle
/// angle.
pub fn longitude_nutation(t: JulianDay) -> f64 {
    nutation(t).0
}

/// Nutation in obliquity Δε in radians, |Δε| < 10″.
pub fn obliquity_nutation(t: JulianDay) -> f64 {
    nutation(t).1
}
