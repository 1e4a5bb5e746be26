use super::{cfg::ParamArgs, AnyResult};
use prb_bistable::{AssemblyRange, LengthUnit, LoopTy, Params, PrbConsts};

#[derive(serde::Serialize)]
struct Report {
    unit: LengthUnit,
    prb: PrbConsts,
    loop_ty: LoopTy,
    loop_name: &'static str,
    assembly: AssemblyRange,
}

fn report(params: &Params) -> Report {
    let loop_ty = params.loop_ty();
    let assembly = params.assembly_range();
    if assembly.is_empty() {
        tracing::warn!("linkage cannot assemble at any crank angle");
    }
    Report {
        unit: params.unit,
        prb: params.prb(),
        loop_ty,
        loop_name: loop_ty.name(),
        assembly,
    }
}

pub(super) fn info(params: ParamArgs) -> AnyResult {
    let params = params.load()?;
    let report = report(&params);
    let s = ron::ser::to_string_pretty(&report, ron::ser::PrettyConfig::default())?;
    println!("{s}");
    Ok(())
}
