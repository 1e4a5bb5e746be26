use crate::Params;

/// Characteristic pivot ratio of a cantilever with an end force.
pub const GAMMA: f64 = 0.85;
/// Dimensionless stiffness coefficient of the characteristic pivot.
pub const K_THETA: f64 = 2.65;

/// Derived PRB constants.
///
/// Recomputed from a [`Params`] on every evaluation.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrbConsts {
    /// Characteristic pivot ratio
    pub gamma: f64,
    /// Stiffness coefficient
    pub k_theta: f64,
    /// Reduced rigid rocker length, in the parameter unit
    pub r4: f64,
    /// Second moment of area of the rocker section (m⁴)
    pub i: f64,
    /// Torsional spring stiffness (N·m/rad)
    pub k: f64,
}

impl PrbConsts {
    /// Compute the constants.
    ///
    /// The stiffness uses the rocker length in meters, `r4` keeps the unit of
    /// the parameter set.
    pub fn new(params: &Params) -> Self {
        let r4 = GAMMA * params.l4;
        let i = params.b * params.h.powi(3) / 12.;
        let k = GAMMA * K_THETA * params.e * i / params.l4_meters();
        Self { gamma: GAMMA, k_theta: K_THETA, r4, i, k }
    }

    /// Spring energy at a deflection (rad).
    pub fn energy(&self, deflection: f64) -> f64 {
        0.5 * self.k * deflection * deflection
    }
}
