//! Charts of sweep results and linkage poses.
//!
//! ```
//! use prb_bistable::{plot::*, Params};
//!
//! let params = Params::example();
//! let mut buf = String::new();
//! let svg = SVGBackend::with_string(&mut buf, (800, 800));
//! curves(svg, &params.sweep()).unwrap();
//! ```
use crate::{JointPos, MechState};
#[doc(no_inline)]
pub use plotters::{prelude::*, *};
use std::ops::Range;

/// Result of the plotting functions.
pub type PResult<T, B> = Result<T, DrawingAreaErrorKind<<B as DrawingBackend>::ErrorType>>;
/// Drawing area of a backend.
pub type Canvas<B> = DrawingArea<B, coord::Shift>;

/// Get font setting.
pub fn font() -> TextStyle<'static> {
    ("Times New Roman", 24).into_font().color(&BLACK)
}

/// Plot the strain energy (upper) and the input torque (lower) against the
/// crank angle.
///
/// Invalid and non-finite samples are left as gaps.
pub fn curves<B, R>(root: R, states: &[MechState]) -> PResult<(), B>
where
    B: DrawingBackend,
    Canvas<B>: From<R>,
{
    let root = Canvas::from(root);
    root.fill(&WHITE)?;
    let (upper, lower) = root.split_vertically((50).percent_height());
    let x = span(states.iter().map(|s| s.theta2));
    let energy = runs(states, |s| s.energy);
    let torque = runs(states, |s| s.torque);
    panel(&upper, "Strain Energy", "Energy (J)", x.clone(), &energy, BLUE)?;
    panel(&lower, "Input Torque", "Torque (N·m)", x, &torque, RED)?;
    root.present()
}

/// Plot the linkage at one state.
///
/// The crank, coupler and reduced rocker are drawn as a chain from `A0` to
/// `B0`; grounded pivots are marked with triangles.
pub fn linkage<B, R>(root: R, joints: &JointPos) -> PResult<(), B>
where
    B: DrawingBackend,
    Canvas<B>: From<R>,
{
    const DOT: i32 = 5;
    let root = Canvas::from(root);
    root.fill(&WHITE)?;
    let js = joints.to_array();
    let [x_min, x_max, y_min, y_max] = bounding_box(&js);
    let mut chart = ChartBuilder::on(&root)
        .set_label_area_size(LabelAreaPosition::Left, (8).percent())
        .set_label_area_size(LabelAreaPosition::Bottom, (4).percent())
        .margin((4).percent())
        .build_cartesian_2d(x_min..x_max, y_min..y_max)?;
    chart
        .configure_mesh()
        .disable_mesh()
        .label_style(font())
        .draw()?;
    let chain = js.iter().map(|&[x, y]| (x, y));
    chart.draw_series(LineSeries::new(chain, BLACK.stroke_width(3)))?;
    let grounded = [joints.a0, joints.b0].into_iter().map(|[x, y]| {
        EmptyElement::at((x, y)) + TriangleMarker::new((0, 10), DOT + 3, BLACK.filled())
    });
    chart.draw_series(grounded)?;
    let pins = js
        .iter()
        .map(|&[x, y]| Circle::new((x, y), DOT, BLACK.filled()));
    chart.draw_series(pins)?;
    root.present()
}

fn panel<B>(
    root: &Canvas<B>,
    caption: &str,
    y_desc: &str,
    x: Range<f64>,
    runs: &[Vec<(f64, f64)>],
    color: RGBColor,
) -> PResult<(), B>
where
    B: DrawingBackend,
{
    let y = span(runs.iter().flatten().map(|(_, y)| *y));
    let mut chart = ChartBuilder::on(root)
        .caption(caption, font())
        .set_label_area_size(LabelAreaPosition::Left, (14).percent())
        .set_label_area_size(LabelAreaPosition::Bottom, (10).percent())
        .margin((3).percent())
        .build_cartesian_2d(x, y)?;
    chart
        .configure_mesh()
        .disable_x_mesh()
        .disable_y_mesh()
        .x_desc("Crank Angle (deg)")
        .x_label_style(font())
        .y_desc(y_desc)
        .y_label_style(font())
        .draw()?;
    for run in runs {
        chart.draw_series(LineSeries::new(run.iter().copied(), color.stroke_width(2)))?;
    }
    Ok(())
}

// Split the valid, finite samples into connected runs
fn runs<F>(states: &[MechState], f: F) -> Vec<Vec<(f64, f64)>>
where
    F: Fn(&MechState) -> f64,
{
    let mut runs = vec![Vec::new()];
    for s in states {
        let y = f(s);
        if s.is_valid && y.is_finite() {
            if let Some(run) = runs.last_mut() {
                run.push((s.theta2, y));
            }
        } else if runs.last().is_some_and(|run| !run.is_empty()) {
            runs.push(Vec::new());
        }
    }
    runs.retain(|run| !run.is_empty());
    runs
}

fn span<I>(iter: I) -> Range<f64>
where
    I: IntoIterator<Item = f64>,
{
    let [lo, hi] = iter
        .into_iter()
        .filter(|x| x.is_finite())
        .fold([f64::INFINITY, f64::NEG_INFINITY], |[lo, hi], x| {
            [lo.min(x), hi.max(x)]
        });
    if lo > hi {
        0.0..1.
    } else if lo == hi {
        lo - 1.0..hi + 1.
    } else {
        let pad = (hi - lo) * 0.05;
        lo - pad..hi + pad
    }
}

/// Get the 1:1 bounding box of the points with a margin.
pub fn bounding_box<'a>(pts: impl IntoIterator<Item = &'a [f64; 2]>) -> [f64; 4] {
    let [mut x_min, mut x_max] = [f64::INFINITY, f64::NEG_INFINITY];
    let [mut y_min, mut y_max] = [f64::INFINITY, f64::NEG_INFINITY];
    for &[x, y] in pts {
        x_min = x_min.min(x);
        x_max = x_max.max(x);
        y_min = y_min.min(y);
        y_max = y_max.max(y);
    }
    let r = (x_max - x_min).max(y_max - y_min).max(f64::EPSILON) * 0.6;
    let [cx, cy] = [(x_min + x_max) * 0.5, (y_min + y_max) * 0.5];
    [cx - r, cx + r, cy - r, cy + r]
}
