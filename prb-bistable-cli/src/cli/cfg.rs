use super::AnyResult;
use prb_bistable::{LengthUnit, Material, Params};
use std::path::PathBuf;

/// Parameter set options shared by the commands.
///
/// The configuration file is loaded first, then the material preset, then
/// the single field overrides.
#[derive(clap::Args, Default)]
pub(super) struct ParamArgs {
    /// Parameter set in RON format, missing fields use the textbook example
    #[clap(short, long)]
    config: Option<PathBuf>,
    /// Material preset for Young's modulus, see the `materials` command
    #[clap(short, long)]
    material: Option<String>,
    /// Ground link length
    #[clap(long)]
    r1: Option<f64>,
    /// Crank length
    #[clap(long)]
    r2: Option<f64>,
    /// Coupler length
    #[clap(long)]
    r3: Option<f64>,
    /// Undeflected length of the flexible rocker
    #[clap(long)]
    l4: Option<f64>,
    /// Young's modulus (Pa)
    #[clap(long)]
    young: Option<f64>,
    /// Rocker section width (m)
    #[clap(long)]
    width: Option<f64>,
    /// Rocker section thickness (m)
    #[clap(long)]
    thickness: Option<f64>,
    /// Undeflected crank angle (deg)
    #[clap(long, allow_negative_numbers = true)]
    theta20: Option<f64>,
    /// Undeflected rocker angle (deg)
    #[clap(long, allow_negative_numbers = true)]
    theta40: Option<f64>,
    /// Unit of the link lengths
    #[clap(long, value_enum)]
    unit: Option<LengthUnit>,
}

impl ParamArgs {
    /// Load, merge and validate the parameter set.
    pub(super) fn load(&self) -> AnyResult<Params> {
        let params = match &self.config {
            Some(path) => {
                tracing::info!(path = %path.display(), "loading parameter set");
                ron::from_str::<Params>(&std::fs::read_to_string(path)?)?
            }
            None => Params::example(),
        };
        self.merge(params)
    }

    fn merge(&self, mut p: Params) -> AnyResult<Params> {
        if let Some(name) = &self.material {
            p.e = Material::find(name)?.e;
        }
        macro_rules! overrides {
            ($($field:ident <- $arg:ident),+ $(,)?) => {$(
                if let Some(v) = self.$arg {
                    p.$field = v;
                }
            )+};
        }
        overrides!(
            r1 <- r1,
            r2 <- r2,
            r3 <- r3,
            l4 <- l4,
            e <- young,
            b <- width,
            h <- thickness,
            theta20 <- theta20,
            theta40 <- theta40,
            unit <- unit,
        );
        tracing::debug!(?p, "parameter set");
        Ok(p.check()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[derive(Parser)]
    struct Args {
        #[clap(flatten)]
        params: ParamArgs,
    }

    fn parse(args: &[&str]) -> ParamArgs {
        Args::parse_from(std::iter::once("test").chain(args.iter().copied())).params
    }

    #[test]
    fn defaults() {
        assert_eq!(ParamArgs::default().load().unwrap(), Params::example());
    }

    #[test]
    fn overrides() {
        let p = parse(&["--r1", "4", "--theta20", "-45", "--unit", "millimeter"])
            .load()
            .unwrap();
        assert_eq!(p.r1, 4.);
        assert_eq!(p.theta20, -45.);
        assert_eq!(p.unit, LengthUnit::Millimeter);
        assert_eq!(p.r2, Params::example().r2);
    }

    #[test]
    fn material_then_young() {
        let p = parse(&["-m", "spring steel"]).load().unwrap();
        assert_eq!(p.e, 207e9);
        let p = parse(&["-m", "spring steel", "--young", "1e9"]).load().unwrap();
        assert_eq!(p.e, 1e9);
        assert!(parse(&["-m", "cheese"]).load().is_err());
    }

    #[test]
    fn rejects_invalid() {
        assert!(parse(&["--thickness", "0"]).load().is_err());
    }

    #[test]
    fn ron_partial() {
        let p = ron::from_str::<Params>("(r1: 4.0, unit: mm)").unwrap();
        let p = ParamArgs::default().merge(p).unwrap();
        assert_eq!(p.r1, 4.);
        assert_eq!(p.unit, LengthUnit::Millimeter);
        assert_eq!(p.l4, Params::example().l4);
    }
}
