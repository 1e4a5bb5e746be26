use crate::*;
use approx::{assert_abs_diff_eq, assert_relative_eq};

// A spread of plausible parameter sets, including ones that fail to assemble
// over part of the turn.
fn param_grid() -> impl Iterator<Item = Params> {
    let base = Params::example();
    [1.5, 3.71, 6.]
        .into_iter()
        .flat_map(move |r3| {
            [1., 4.32, 8.].into_iter().flat_map(move |l4| {
                [0.0008, 0.0015].into_iter().map(move |h| Params { r3, l4, h, ..base })
            })
        })
        .chain([
            Params { r1: 5., r2: 2., ..base },
            Params { theta20: 0., theta40: 45., ..base },
            Params { l4: 43.2, ..base }.with_unit(LengthUnit::Millimeter),
        ])
}

#[test]
fn closed_reference_round_trip() {
    let p = Params::example();
    // Take the exact rocker angle at rest as the undeflected one
    let p = Params { theta40: p.eval(p.theta20).theta4, ..p };
    let s = p.eval(p.theta20);
    assert!(s.is_valid);
    assert_abs_diff_eq!(s.theta4, p.theta40, epsilon = 1e-12);
    assert_abs_diff_eq!(s.delta_theta4, 0., epsilon = 1e-12);
    assert_abs_diff_eq!(s.energy, 0., epsilon = 1e-20);
    assert_abs_diff_eq!(s.torque, 0., epsilon = 1e-12);
}

#[test]
fn reference_scenario() {
    let p = Params::example();
    let rest = p.eval(90.);
    assert!(rest.is_valid);
    assert_abs_diff_eq!(rest.theta4, 89.879, epsilon = 1e-3);
    assert_eq!(rest.delta_theta2, 0.);
    assert_abs_diff_eq!(rest.energy, 0., epsilon = 1e-6);
    let swung = p.eval(-90.);
    assert!(swung.is_valid);
    assert!(swung.energy.is_finite() && swung.energy > 0.);
    assert_ne!(swung.theta3, rest.theta3);
    assert_ne!(swung.theta4, rest.theta4);
    // Hand-solved: theta4 = atan2(-1.5, -3) - acos(0.4453...) ≈ 143.0°
    assert_abs_diff_eq!(swung.theta4, 143.0, epsilon = 0.1);
    assert_relative_eq!(swung.energy, swung.prb.energy(swung.delta_theta4));
}

#[test]
fn energy_non_negative() {
    for p in param_grid() {
        for s in p.sweep() {
            if s.is_valid {
                assert!(s.energy >= 0., "{p:?} at {}", s.theta2);
            } else {
                assert_eq!(s.energy, 0.);
            }
        }
    }
}

#[test]
fn assembly_boundary() {
    for p in param_grid() {
        let [r1, r2, r3, r4] = p.planar_loop();
        let (lo, hi) = ((r3 - r4).abs(), r3 + r4);
        for s in Sweep::new(-180., 180., 0.25).unwrap().eval(&p) {
            let t = s.theta2.to_radians();
            let d = (r1 - r2 * t.cos()).hypot(r2 * t.sin());
            if (d - lo).abs() < 1e-6 || (d - hi).abs() < 1e-6 {
                continue;
            }
            assert_eq!(s.is_valid, lo < d && d < hi, "{p:?} at {}", s.theta2);
        }
    }
}

#[test]
fn torque_is_energy_gradient() {
    const STEP: f64 = 1e-4;
    for p in param_grid() {
        for s in Sweep::new(-175., 175., 5.).unwrap().eval(&p) {
            let before = p.eval(s.theta2 - STEP);
            let after = p.eval(s.theta2 + STEP);
            if !(s.is_valid && before.is_valid && after.is_valid) {
                continue;
            }
            // Keep away from toggle points and the deflection branch cut
            if s.h42.abs() > 10. || s.delta_theta4.abs() > 3. {
                continue;
            }
            let grad = (after.energy - before.energy) / (2. * STEP.to_radians());
            let tol = 1e-4 * s.prb.k.max(1e-3);
            assert_abs_diff_eq!(s.torque, grad, epsilon = tol);
        }
    }
}

#[test]
fn joints_close_the_loop() {
    for p in param_grid() {
        for s in p.sweep().into_iter().filter(|s| s.is_valid) {
            let j = s.joints(&p);
            assert_abs_diff_eq!(j.a0.dist(&j.a), p.r2, epsilon = 1e-9);
            assert_abs_diff_eq!(j.a.dist(&j.b), p.r3, epsilon = 1e-9);
            assert_abs_diff_eq!(j.b0.dist(&j.b), s.prb.r4, epsilon = 1e-6);
        }
    }
}

#[test]
fn stiffness_unit() {
    let cm = Params::example();
    let m = Params { r1: 0.03, r2: 0.015, r3: 0.0371, l4: 0.0432, ..cm }.with_unit(LengthUnit::Meter);
    assert_relative_eq!(cm.prb().k, m.prb().k, max_relative = 1e-12);
    // Geometry is scale free, energy depends only on stiffness
    let (a, b) = (cm.eval(-30.), m.eval(-30.));
    assert_abs_diff_eq!(a.theta4, b.theta4, epsilon = 1e-9);
    assert_relative_eq!(a.energy, b.energy, max_relative = 1e-9);
}

#[test]
fn collinear_pose_propagates_nan() {
    // Every link lies on the ground line at theta2 = 0, so h42 is 0/0
    let p = Params { r1: 3., r2: 1., r3: 3., l4: 1. / GAMMA, ..Params::example() };
    let s = p.eval(0.);
    assert!(s.is_valid);
    assert_eq!([s.theta3, s.theta4], [0.; 2]);
    assert!(s.h42.is_nan() && s.torque.is_nan());
    assert!(s.energy.is_finite() && s.energy > 0.);
}

#[test]
fn torque_grows_near_toggle() {
    // Coupler and reduced rocker fold out straight where d = r3 + r4 = 3
    let p = Params { r1: 3., r2: 1., r3: 2., l4: 1. / GAMMA, ..Params::example() };
    let toggle = (1f64 / 6.).acos().to_degrees();
    let far = p.eval(toggle - 1.);
    let near = p.eval(toggle - 0.01);
    assert!(far.is_valid && near.is_valid);
    assert!(near.h42.is_finite() && near.torque.is_finite());
    assert!(near.h42.abs() > 30.);
    assert!(near.torque.abs() > 5. * far.torque.abs());
}
