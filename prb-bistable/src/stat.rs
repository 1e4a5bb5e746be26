//! Kinematic classification of the rigid-equivalent four-bar loop.
use crate::*;
use std::cmp::Ordering;

/// Type of the rigid-equivalent four-bar loop `[r1, r2, r3, r4]`.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Copy, Clone)]
pub enum LoopTy {
    /// Grashof double crank, the ground link is the shortest
    DoubleCrank,
    /// Grashof crank rocker, the crank is the shortest
    CrankRocker,
    /// Grashof double rocker, the coupler is the shortest
    DoubleRocker,
    /// Grashof rocker crank, the rocker is the shortest
    RockerCrank,
    /// Change point, `s + l = p + q`
    ChangePoint,
    /// Non-Grashof triple rocker, the ground link is the longest
    TripleRocker1,
    /// Non-Grashof triple rocker, the crank is the longest
    TripleRocker2,
    /// Non-Grashof triple rocker, the coupler is the longest
    TripleRocker3,
    /// Non-Grashof triple rocker, the rocker is the longest
    TripleRocker4,
    /// The longest link exceeds the sum of the others
    Invalid,
}

impl LoopTy {
    /// Detect from the loop `[r1, r2, r3, r4]`.
    pub fn from_loop(fb_loop: [f64; 4]) -> Self {
        if fb_loop.iter().any(|l| !(l.is_finite() && *l > 0.)) {
            return Self::Invalid;
        }
        let mut sorted = fb_loop;
        sorted.sort_unstable_by(f64::total_cmp);
        let [s, p, q, l] = sorted;
        if l > s + p + q {
            return Self::Invalid;
        }
        // Index of the first link with the given length
        let pos = |d: f64| fb_loop.iter().position(|x| *x == d);
        match (s + l).total_cmp(&(p + q)) {
            Ordering::Less => match pos(s) {
                Some(0) => Self::DoubleCrank,
                Some(1) => Self::CrankRocker,
                Some(2) => Self::DoubleRocker,
                _ => Self::RockerCrank,
            },
            Ordering::Equal => Self::ChangePoint,
            Ordering::Greater => match pos(l) {
                Some(0) => Self::TripleRocker1,
                Some(1) => Self::TripleRocker2,
                Some(2) => Self::TripleRocker3,
                _ => Self::TripleRocker4,
            },
        }
    }

    /// Name of the type.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::DoubleCrank => "Grashof double crank",
            Self::CrankRocker => "Grashof crank rocker",
            Self::DoubleRocker => "Grashof double rocker",
            Self::RockerCrank => "Grashof rocker crank",
            Self::ChangePoint => "Change point",
            Self::TripleRocker1 => "Non-Grashof triple rocker (ground longest)",
            Self::TripleRocker2 => "Non-Grashof triple rocker (crank longest)",
            Self::TripleRocker3 => "Non-Grashof triple rocker (coupler longest)",
            Self::TripleRocker4 => "Non-Grashof triple rocker (rocker longest)",
            Self::Invalid => "Invalid",
        }
    }

    /// Return true if the crank can turn a full revolution.
    pub const fn is_full_turn(&self) -> bool {
        matches!(self, Self::DoubleCrank | Self::CrankRocker)
    }

    /// Check if the type is valid.
    pub const fn is_valid(&self) -> bool {
        !matches!(self, Self::Invalid)
    }
}

impl std::fmt::Display for LoopTy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Crank angles (degrees) where the coupler and the reduced rocker can close
/// the loop, solved in closed form.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum AssemblyRange {
    /// Every crank angle
    Full,
    /// One interval `[lo, hi]`, `lo < hi`, may cross 0° or 180°
    Single([f64; 2]),
    /// Two intervals mirrored about the ground link
    Double([[f64; 2]; 2]),
    /// No crank angle
    Empty,
}

impl AssemblyRange {
    /// Solve the range of a parameter set.
    ///
    /// With `d² = r1² + r2² - 2 r1 r2 cos θ2`, the loop closes when
    /// `|r3 - r4| ≤ d ≤ r3 + r4`.
    pub fn from_params(params: &Params) -> Self {
        let [r1, r2, r3, r4] = params.planar_loop();
        let num = r1 * r1 + r2 * r2;
        let den = 2. * r1 * r2;
        let c_lo = (num - (r3 - r4).powi(2)) / den;
        let c_hi = (num - (r3 + r4).powi(2)) / den;
        if !(c_lo.is_finite() && c_hi.is_finite()) || c_lo < -1. || c_hi > 1. || c_hi > c_lo {
            return Self::Empty;
        }
        let lo = c_lo.min(1.).acos().to_degrees();
        let hi = c_hi.max(-1.).acos().to_degrees();
        match (c_lo >= 1., c_hi <= -1.) {
            (true, true) => Self::Full,
            (true, false) => Self::Single([-hi, hi]),
            (false, true) => Self::Single([lo, 360. - lo]),
            (false, false) => Self::Double([[lo, hi], [-hi, -lo]]),
        }
    }

    /// Intervals as `[lo, hi]` pairs.
    pub fn bounds(&self) -> Vec<[f64; 2]> {
        match self {
            Self::Full => vec![[-180., 180.]],
            Self::Single(r) => vec![*r],
            Self::Double(rs) => rs.to_vec(),
            Self::Empty => Vec::new(),
        }
    }

    /// Return true if the crank angle (degrees, any turn) is inside.
    pub fn contains(&self, theta2: f64) -> bool {
        match self {
            Self::Full => true,
            Self::Empty => false,
            _ => self
                .bounds()
                .into_iter()
                .any(|[lo, hi]| (theta2 - lo).rem_euclid(360.) <= hi - lo),
        }
    }

    /// Return true if no angle can assemble.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

impl Params {
    /// Type of the rigid-equivalent loop.
    pub fn loop_ty(&self) -> LoopTy {
        LoopTy::from_loop(self.planar_loop())
    }

    /// Crank angles where the linkage assembles.
    pub fn assembly_range(&self) -> AssemblyRange {
        AssemblyRange::from_params(self)
    }
}
