use super::{cfg::ParamArgs, AnyResult};
use prb_bistable::{JointPos, MechState, Params};

#[derive(clap::Args)]
pub(super) struct Eval {
    /// Crank angle (deg)
    #[clap(allow_negative_numbers = true)]
    theta2: f64,
    #[clap(flatten)]
    params: ParamArgs,
}

#[derive(serde::Serialize)]
struct Report {
    state: MechState,
    joints: Option<JointPos>,
}

fn report(theta2: f64, params: &Params) -> Report {
    let state = params.eval(theta2);
    if !state.is_valid {
        tracing::warn!(theta2, "linkage cannot assemble at this crank angle");
    } else if !state.torque.is_finite() {
        tracing::warn!(theta2, "toggle point, torque is not finite");
    }
    let joints = state.is_valid.then(|| state.joints(params));
    Report { state, joints }
}

pub(super) fn eval(eval: Eval) -> AnyResult {
    let Eval { theta2, params } = eval;
    let params = params.load()?;
    let report = report(theta2, &params);
    let s = ron::ser::to_string_pretty(&report, ron::ser::PrettyConfig::default())?;
    println!("{s}");
    Ok(())
}
