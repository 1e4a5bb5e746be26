//! Kinematics and energy of the pseudo-rigid-body mechanism.
use crate::*;

/// Result of one evaluation at an input crank angle.
///
/// When [`MechState::is_valid`] is false the solved quantities are zero.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MechState {
    /// Input crank angle (deg), as supplied
    pub theta2: f64,
    /// Coupler angle (deg) in `(-180, 180]`
    pub theta3: f64,
    /// Reduced rocker angle (deg) in `(-180, 180]`
    pub theta4: f64,
    /// Crank rotation from the undeflected position (deg)
    pub delta_theta2: f64,
    /// Spring deflection (rad) in `(-π, π]`
    pub delta_theta4: f64,
    /// Kinematic coefficient `dθ4/dθ2`
    pub h42: f64,
    /// Stored strain energy (J)
    pub energy: f64,
    /// Equivalent static input torque (N·m)
    pub torque: f64,
    /// False when the linkage cannot assemble at this angle
    pub is_valid: bool,
    /// Constants used by this evaluation
    pub prb: PrbConsts,
}

impl MechState {
    fn infeasible(theta2: f64, params: &Params, prb: PrbConsts) -> Self {
        Self {
            theta2,
            theta3: 0.,
            theta4: 0.,
            delta_theta2: theta2 - params.theta20,
            delta_theta4: 0.,
            h42: 0.,
            energy: 0.,
            torque: 0.,
            is_valid: false,
            prb,
        }
    }

    /// Joint positions of this state.
    ///
    /// The parameter set must be the one that produced the state.
    pub fn joints(&self, params: &Params) -> JointPos {
        project(self, params)
    }
}

/// Evaluate the mechanism at crank angle `theta2` (degrees).
///
/// Never fails. If the coupler and the reduced rocker cannot close the loop,
/// the state is marked invalid. At toggle points, where the coupler and the
/// rocker are collinear, [`MechState::h42`] and [`MechState::torque`] may be
/// infinite or NaN; they are returned as computed.
pub fn evaluate(theta2: f64, params: &Params) -> MechState {
    let prb = PrbConsts::new(params);
    let PrbConsts { r4, k, .. } = prb;
    let Params { r1, r2, r3, theta20, theta40, .. } = *params;
    let t2 = theta2.to_radians();
    let a = <[f64; 2]>::new(0., 0.).pla(r2, t2);
    let b0 = <[f64; 2]>::new(r1, 0.);
    let d = b0.dist(&a);
    // Negated to also reject NaN
    if !(d >= (r3 - r4).abs() && d <= r3 + r4) || d < f64::EPSILON {
        tracing::debug!(theta2, d, "linkage cannot assemble");
        return MechState::infeasible(theta2, params, prb);
    }
    let cos_beta = ((r4 * r4 + d * d - r3 * r3) / (2. * r4 * d)).clamp(-1., 1.);
    let beta = cos_beta.acos();
    let phi = b0.angle_to(&a);
    let t4 = phi - beta;
    let b = b0.pla(r4, t4);
    let t3 = a.angle_to(&b);
    let delta_theta4 = normalize_rad(t4 - theta40.to_radians());
    let energy = prb.energy(delta_theta4);
    let h42 = r2 * (t3 - t2).sin() / (r4 * (t3 - t4).sin());
    let torque = k * delta_theta4 * h42;
    tracing::trace!(theta2, energy, torque, "evaluated");
    MechState {
        theta2,
        theta3: normalize_deg(t3.to_degrees()),
        theta4: normalize_deg(t4.to_degrees()),
        delta_theta2: theta2 - theta20,
        delta_theta4,
        h42,
        energy,
        torque,
        is_valid: true,
        prb,
    }
}

impl Params {
    /// Evaluate at crank angle `theta2` (degrees).
    ///
    /// See [`evaluate()`].
    pub fn eval(&self, theta2: f64) -> MechState {
        evaluate(theta2, self)
    }
}
