use super::{cfg::ParamArgs, AnyResult};
use prb_bistable::{csv, plot, valid_spans, Sweep};
use std::{path::PathBuf, time::Instant};

#[derive(clap::Args)]
pub(super) struct SweepCfg {
    /// First crank angle (deg), default to theta20 - 180
    #[clap(long, allow_negative_numbers = true)]
    start: Option<f64>,
    /// Last crank angle (deg), default to theta20 + 180
    #[clap(long, allow_negative_numbers = true)]
    end: Option<f64>,
    /// Angle increment (deg)
    #[clap(long, default_value_t = 1.)]
    step: f64,
    /// Output CSV path, default to stdout
    #[clap(short, long)]
    output: Option<PathBuf>,
    /// Energy and torque chart (SVG)
    #[clap(long)]
    plot: Option<PathBuf>,
    /// Linkage chart at the undeflected crank angle (SVG)
    #[clap(long)]
    pose: Option<PathBuf>,
    /// Evaluate the angles in parallel
    #[clap(long)]
    parallel: bool,
    #[clap(flatten)]
    params: ParamArgs,
}

pub(super) fn sweep(cfg: SweepCfg) -> AnyResult {
    let SweepCfg { start, end, step, output, plot: chart, pose, parallel, params } = cfg;
    let params = params.load()?;
    let around = Sweep::around(params.theta20);
    let sweep = Sweep::new(start.unwrap_or(around.start), end.unwrap_or(around.end), step)?;
    let t0 = Instant::now();
    let states = if parallel {
        sweep.par_eval(&params)
    } else {
        sweep.eval(&params)
    };
    tracing::info!(samples = states.len(), elapsed = ?t0.elapsed(), "sweep evaluated");
    let valid = states.iter().filter(|s| s.is_valid).count();
    eprintln!("valid samples: {valid}/{}", states.len());
    for [lo, hi] in valid_spans(&states) {
        eprintln!("valid span: [{lo}, {hi}] deg");
    }
    let toggles = states
        .iter()
        .filter(|s| s.is_valid && !s.torque.is_finite())
        .count();
    if toggles > 0 {
        tracing::warn!(toggles, "torque is not finite at toggle points");
    }
    let rows = csv::dump_states(&states)?;
    match output {
        Some(path) => {
            std::fs::write(&path, rows)?;
            tracing::info!(path = %path.display(), "rows written");
        }
        None => print!("{rows}"),
    }
    if let Some(path) = chart {
        plot::curves(plot::SVGBackend::new(&path, (800, 800)), &states)?;
        tracing::info!(path = %path.display(), "chart written");
    }
    if let Some(path) = pose {
        let rest = params.eval(params.theta20);
        if rest.is_valid {
            plot::linkage(plot::SVGBackend::new(&path, (800, 800)), &rest.joints(&params))?;
            tracing::info!(path = %path.display(), "pose written");
        } else {
            tracing::warn!("linkage cannot assemble at theta20, pose skipped");
        }
    }
    Ok(())
}
