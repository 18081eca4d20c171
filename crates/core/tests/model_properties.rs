//! Algebraic and degenerate-branch properties of the WCV model
//!
//! Randomized checks use a seeded `StdRng` so failures reproduce.
//!
//! Run tests with: `cargo test --test model_properties`

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use wcv_core::{
    delta, geometry::TCOA_NEVER, horizontal_wcv_xdist, horizontal_wcv_ydist, sympoly2, sympoly3,
    tcoa, tcpa, theta_d, NormVariant, Vect3, WcvThresholds,
};

const SAMPLES: usize = 500;

fn random_vect(rng: &mut StdRng, scale: f64) -> Vect3 {
    Vect3::new(
        rng.random_range(-scale..scale),
        rng.random_range(-scale..scale),
        rng.random_range(-scale..scale),
    )
}

#[ctor::ctor]
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 1: VECTOR ALGEBRA
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_dot2_symmetric() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    for _ in 0..SAMPLES {
        let a = random_vect(&mut rng, 1e4);
        let b = random_vect(&mut rng, 1e4);
        assert_eq!(a.dot2(b), b.dot2(a), "a = {a}, b = {b}");
    }
}

#[test]
fn test_det2_antisymmetric() {
    let mut rng = StdRng::seed_from_u64(0xDE72);
    for _ in 0..SAMPLES {
        let a = random_vect(&mut rng, 1e4);
        let b = random_vect(&mut rng, 1e4);
        assert_eq!(a.det2(b), -b.det2(a), "a = {a}, b = {b}");
    }
}

#[test]
fn test_double_perp_r_negates_horizontal_plane() {
    let mut rng = StdRng::seed_from_u64(0x9E49);
    for _ in 0..SAMPLES {
        let a = random_vect(&mut rng, 1e4);
        assert_eq!(a.perp_r().perp_r(), Vect3::new(-a.x(), -a.y(), a.z()));
    }
}

#[test]
fn test_index_matches_accessors() {
    let a = Vect3::new(1.5, -2.5, 3.5);
    assert_eq!([a[0], a[1], a[2]], [a.x(), a.y(), a.z()]);
    assert!(a.component(3).is_err());
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 2: COMBINATORS
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_sympoly2_symmetric() {
    let mut rng = StdRng::seed_from_u64(0x5A2);
    for _ in 0..SAMPLES {
        let x: f64 = rng.random_range(0.0..1.5);
        let y: f64 = rng.random_range(0.0..1.5);
        assert_relative_eq!(sympoly2(x, y), sympoly2(y, x), epsilon = 1e-12);
    }
}

#[test]
fn test_sympoly2_reference_values() {
    assert_eq!(sympoly2(0.0, 0.5), 0.5);
    assert_eq!(sympoly2(0.6, 1.2), 1.2);
}

#[test]
fn test_sympoly_bounded_by_one_below_saturation() {
    let mut rng = StdRng::seed_from_u64(0xB0B);
    for _ in 0..SAMPLES {
        let x: f64 = rng.random_range(0.0..1.0);
        let y: f64 = rng.random_range(0.0..1.0);
        let z: f64 = rng.random_range(0.0..1.0);
        let v2 = sympoly2(x, y);
        let v3 = sympoly3(x, y, z);
        assert!(v2 >= x.max(y) - 1e-12 && v2 <= 1.0 + 1e-12, "sympoly2({x}, {y}) = {v2}");
        assert!(v3 >= v2 - 1e-12 && v3 <= 1.0 + 1e-12, "sympoly3({x}, {y}, {z}) = {v3}");
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 3: TIMES AND DEGENERATE BRANCHES
// ═══════════════════════════════════════════════════════════════════════════════

#[test]
fn test_tcpa_zero_velocity_any_position() {
    let mut rng = StdRng::seed_from_u64(0x7C9A);
    for _ in 0..SAMPLES {
        let s = random_vect(&mut rng, 1e5);
        assert_eq!(tcpa(s, Vect3::zero()), 0.0);
    }
}

#[test]
fn test_tcoa_reference_values() {
    assert_eq!(tcoa(100.0, 5.0), TCOA_NEVER);
    assert_eq!(tcoa(100.0, 5.0), -1.0);
    assert_eq!(tcoa(100.0, -10.0), 10.0);
}

#[test]
fn test_negative_delta_gives_zero_theta() {
    let mut rng = StdRng::seed_from_u64(0xD17A);
    let mut misses = 0;
    for _ in 0..SAMPLES {
        let s = random_vect(&mut rng, 2e4);
        let v = random_vect(&mut rng, 400.0);
        let d = rng.random_range(100.0..8000.0);
        if delta(d, s, v) < 0.0 {
            misses += 1;
            assert_eq!(theta_d(d, s, v, -1.0), 0.0);
            assert_eq!(theta_d(d, s, v, 1.0), 0.0);
        }
    }
    assert!(misses > 0, "sampling produced no missing trajectories");
}

#[test]
fn test_horizontal_components_zero_velocity() {
    let mut rng = StdRng::seed_from_u64(0x0);
    for _ in 0..SAMPLES {
        let s = random_vect(&mut rng, 1e4);
        let dthr = rng.random_range(100.0..8000.0);
        assert_eq!(horizontal_wcv_xdist(35.0, dthr, s, Vect3::zero()), s.x() / dthr);
        assert_eq!(horizontal_wcv_ydist(35.0, dthr, s, Vect3::zero()), s.y() / dthr);
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SECTION 4: NORM VARIANTS
// ═══════════════════════════════════════════════════════════════════════════════

/// No variant returns NaN or infinity for non-degenerate thresholds, including
/// zero velocity, zero range and grazing geometries.
#[test]
fn test_variants_always_finite() {
    let thresholds = WcvThresholds {
        tcoa: 20.0,
        ..WcvThresholds::default()
    };
    let mut rng = StdRng::seed_from_u64(0xF1E1);
    let mut cases = vec![
        (Vect3::zero(), Vect3::zero()),
        (Vect3::zero(), Vect3::new(300.0, 0.0, -5.0)),
        (Vect3::new(1000.0, 0.0, 100.0), Vect3::zero()),
        // Grazes the DTHR circle exactly at closest approach
        (Vect3::new(-30000.0, 4000.0, 0.0), Vect3::new(337.0, 0.0, 0.0)),
    ];
    for _ in 0..SAMPLES {
        cases.push((random_vect(&mut rng, 3e4), random_vect(&mut rng, 400.0)));
    }

    for (s, v) in cases {
        for variant in NormVariant::ALL {
            let value = variant.evaluate(&thresholds, s, v);
            assert!(value.is_finite(), "{variant} at s = {s}, v = {v} gave {value}");
        }
    }
}

#[test]
fn test_variants_zero_at_coincident_stationary_pair() {
    let thresholds = WcvThresholds::default();
    for variant in NormVariant::ALL {
        let value = variant.evaluate(&thresholds, Vect3::zero(), Vect3::zero());
        assert!(value.abs() < 1e-12, "{variant} gave {value}");
    }
}
