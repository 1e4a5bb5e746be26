use crate::{Error, PrbConsts};

/// Linear unit of the link lengths.
///
/// Geometry is computed in this unit; only the spring stiffness converts the
/// rocker length to meters.
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(rename_all = "lowercase")
)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[derive(Debug, PartialEq, Eq, Copy, Clone, Default, Hash)]
pub enum LengthUnit {
    /// Millimeter
    #[cfg_attr(feature = "serde", serde(alias = "mm"))]
    Millimeter,
    /// Centimeter
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "cm"))]
    Centimeter,
    /// Meter
    #[cfg_attr(feature = "serde", serde(alias = "m"))]
    Meter,
    /// Inch
    #[cfg_attr(feature = "serde", serde(alias = "in"))]
    Inch,
}

impl LengthUnit {
    /// Meters per unit.
    pub const fn to_meters(&self) -> f64 {
        match self {
            Self::Millimeter => 1e-3,
            Self::Centimeter => 1e-2,
            Self::Meter => 1.,
            Self::Inch => 0.0254,
        }
    }

    /// Unit symbol.
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Meter => "m",
            Self::Inch => "in",
        }
    }
}

impl std::fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Parameter set of the compliant bistable mechanism.
///
/// # Parameters
///
/// + Ground link `r1`, from the crank pivot `A0` to the rocker pivot `B0`
/// + Crank link `r2`
/// + Coupler link `r3`
/// + Undeflected length of the flexible rocker `l4`
/// + Young's modulus `e` (Pa)
/// + Out-of-plane width `b` (m)
/// + In-plane thickness `h` (m)
/// + Undeflected crank angle `theta20` (deg)
/// + Undeflected rocker angle `theta40` (deg)
///
/// Lengths share `unit`. A set is replaced as a whole, it is never patched by
/// the evaluator.
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(default)
)]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Params {
    /// Length of the ground link
    pub r1: f64,
    /// Length of the crank link
    pub r2: f64,
    /// Length of the coupler link
    pub r3: f64,
    /// Full length of the flexible rocker
    pub l4: f64,
    /// Young's modulus of the rocker (Pa)
    pub e: f64,
    /// Width of the rocker section (m)
    pub b: f64,
    /// Bending thickness of the rocker section (m)
    pub h: f64,
    /// Undeflected crank angle (deg)
    pub theta20: f64,
    /// Undeflected rocker angle (deg)
    pub theta40: f64,
    /// Unit of `r1`, `r2`, `r3` and `l4`
    pub unit: LengthUnit,
}

impl Default for Params {
    fn default() -> Self {
        Self::example()
    }
}

impl Params {
    /// The textbook bistable example: a polypropylene rocker in centimeters.
    pub const fn example() -> Self {
        Self {
            r1: 3.,
            r2: 1.5,
            r3: 3.71,
            l4: 4.32,
            e: 1.4e9,
            b: 0.005,
            h: 0.0015,
            theta20: 90.,
            theta40: 90.,
            unit: LengthUnit::Centimeter,
        }
    }

    /// Check the physical plausibility of each field.
    ///
    /// Lengths and material properties must be positive and finite, the
    /// reference angles finite. Whether the linkage can assemble is decided
    /// per angle by the evaluator instead.
    pub fn validate(&self) -> Result<(), Error> {
        Error::positive("r1", self.r1)?;
        Error::positive("r2", self.r2)?;
        Error::positive("r3", self.r3)?;
        Error::positive("l4", self.l4)?;
        Error::positive("e", self.e)?;
        Error::positive("b", self.b)?;
        Error::positive("h", self.h)?;
        Error::finite("theta20", self.theta20)?;
        Error::finite("theta40", self.theta40)
    }

    /// Validate and pass through.
    pub fn check(self) -> Result<Self, Error> {
        self.validate().map(|_| self)
    }

    /// Rocker length in meters.
    pub fn l4_meters(&self) -> f64 {
        self.l4 * self.unit.to_meters()
    }

    /// PRB constants of this set.
    pub fn prb(&self) -> PrbConsts {
        PrbConsts::new(self)
    }

    /// Rigid-equivalent loop `[r1, r2, r3, r4]`.
    pub fn planar_loop(&self) -> [f64; 4] {
        [self.r1, self.r2, self.r3, self.prb().r4]
    }

    /// Build with another Young's modulus.
    pub fn with_e(self, e: f64) -> Self {
        Self { e, ..self }
    }

    /// Build with another section thickness.
    pub fn with_h(self, h: f64) -> Self {
        Self { h, ..self }
    }

    /// Build with another length unit.
    pub fn with_unit(self, unit: LengthUnit) -> Self {
        Self { unit, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn example_is_valid() {
        assert_eq!(Params::default(), Params::example());
        assert!(Params::example().validate().is_ok());
        assert_abs_diff_eq!(Params::example().l4_meters(), 0.0432, epsilon = 1e-15);
    }

    #[test]
    fn rejects_bad_fields() {
        let p = Params { r3: 0., ..Params::example() };
        assert_eq!(p.validate(), Err(Error::NonPositive { name: "r3", value: 0. }));
        let p = Params { h: -0.001, ..Params::example() };
        assert!(matches!(p.check(), Err(Error::NonPositive { name: "h", .. })));
        let p = Params { theta40: f64::NAN, ..Params::example() };
        assert_eq!(p.validate(), Err(Error::NonFinite { name: "theta40" }));
        let p = Params { e: f64::INFINITY, ..Params::example() };
        assert_eq!(p.validate(), Err(Error::NonFinite { name: "e" }));
    }

    #[test]
    fn units() {
        let p = Params { l4: 43.2, ..Params::example() }.with_unit(LengthUnit::Millimeter);
        assert_abs_diff_eq!(p.l4_meters(), 0.0432, epsilon = 1e-15);
        assert_eq!(LengthUnit::Inch.to_string(), "in");
        assert_eq!(LengthUnit::default(), LengthUnit::Centimeter);
    }
}
