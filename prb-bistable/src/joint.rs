use crate::*;

/// Pin joint positions of an evaluated state, in the parameter unit.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct JointPos {
    /// Fixed crank pivot (origin)
    pub a0: [f64; 2],
    /// Crank-coupler pin
    pub a: [f64; 2],
    /// Coupler-rocker pin
    pub b: [f64; 2],
    /// Fixed rocker pivot
    pub b0: [f64; 2],
}

impl JointPos {
    /// Joints in loop order `[a0, a, b, b0]`.
    pub fn to_array(&self) -> [[f64; 2]; 4] {
        [self.a0, self.a, self.b, self.b0]
    }
}

/// Project a state onto the plane.
///
/// `A` comes from the crank angle and `B` from the coupler angle; the rocker
/// angle is not re-derived. Only meaningful for valid states produced with the
/// same parameter set.
pub fn project(state: &MechState, params: &Params) -> JointPos {
    let a0 = <[f64; 2]>::new(0., 0.);
    let a = a0.pla(params.r2, state.theta2.to_radians());
    let b = a.pla(params.r3, state.theta3.to_radians());
    let b0 = <[f64; 2]>::new(params.r1, 0.);
    JointPos { a0, a, b, b0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn link_lengths() {
        let p = Params::example();
        for i in -180..180 {
            let s = p.eval(i as f64 * 2.);
            let j = s.joints(&p);
            assert_eq!(j.a0, [0., 0.]);
            assert_eq!(j.b0, [p.r1, 0.]);
            assert_abs_diff_eq!(j.a0.dist(&j.a), p.r2, epsilon = 1e-12);
            assert_abs_diff_eq!(j.a.dist(&j.b), p.r3, epsilon = 1e-12);
            // Closing the loop through theta3 lands on the reduced rocker
            assert_abs_diff_eq!(j.b0.dist(&j.b), s.prb.r4, epsilon = 1e-9);
            let t4 = j.b0.angle_to(&j.b).to_degrees();
            assert_abs_diff_eq!(normalize_deg(t4 - s.theta4), 0., epsilon = 1e-7);
        }
    }
}
