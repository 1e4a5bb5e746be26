use crate::*;

/// A grid of crank angles (degrees).
///
/// Samples are `start + i * step` up to and including `end` when it lands on
/// the grid. A reversed sweep (`end < start`) yields only `start`.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sweep {
    /// First angle
    pub start: f64,
    /// Last angle (inclusive)
    pub end: f64,
    /// Increment, positive
    pub step: f64,
}

impl Sweep {
    /// Tolerance for landing on `end`, as a fraction of the step.
    const SNAP: f64 = 1e-9;
    /// Upper limit of the sample count.
    pub const MAX_LEN: f64 = 1e7;

    /// Create a sweep with checked bounds.
    pub fn new(start: f64, end: f64, step: f64) -> Result<Self, Error> {
        if !start.is_finite() || !end.is_finite() {
            return Err(Error::InvalidSweep(format!("bounds [{start}, {end}]")));
        }
        if !(step.is_finite() && step > 0.) {
            return Err(Error::InvalidSweep(format!("step {step}")));
        }
        if (end - start) / step > Self::MAX_LEN {
            return Err(Error::InvalidSweep(format!("more than {} samples", Self::MAX_LEN)));
        }
        Ok(Self { start, end, step })
    }

    /// One full turn around `theta20` with one degree steps.
    pub fn around(theta20: f64) -> Self {
        Self { start: theta20 - 180., end: theta20 + 180., step: 1. }
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        let n = (self.end - self.start) / self.step;
        if n.is_finite() && n >= 0. {
            (n + Self::SNAP).floor() as usize + 1
        } else {
            1
        }
    }

    /// Return true if the sweep has no samples. Always false.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Iterate the sampled angles.
    pub fn angles(&self) -> impl Iterator<Item = f64> {
        let Self { start, step, .. } = *self;
        (0..self.len()).map(move |i| start + i as f64 * step)
    }

    /// Evaluate every angle.
    pub fn eval(&self, params: &Params) -> Vec<MechState> {
        let states = self.angles().map(|t| evaluate(t, params)).collect::<Vec<_>>();
        log_summary(&states);
        states
    }

    /// Evaluate every angle in parallel, in the same order as
    /// [`Sweep::eval()`].
    #[cfg(feature = "rayon")]
    #[cfg_attr(doc_cfg, doc(cfg(feature = "rayon")))]
    pub fn par_eval(&self, params: &Params) -> Vec<MechState> {
        use rayon::prelude::*;
        let Self { start, step, .. } = *self;
        let states = (0..self.len())
            .into_par_iter()
            .map(|i| evaluate(start + i as f64 * step, params))
            .collect::<Vec<_>>();
        log_summary(&states);
        states
    }
}

impl Params {
    /// Evaluate one full turn around the undeflected crank angle.
    pub fn sweep(&self) -> Vec<MechState> {
        Sweep::around(self.theta20).eval(self)
    }
}

fn log_summary(states: &[MechState]) {
    let valid = states.iter().filter(|s| s.is_valid).count();
    tracing::debug!(samples = states.len(), valid, "sweep finished");
}

/// Contiguous runs of valid states as `[first theta2, last theta2]`.
pub fn valid_spans(states: &[MechState]) -> Vec<[f64; 2]> {
    let mut spans = Vec::new();
    let mut span: Option<[f64; 2]> = None;
    for s in states {
        if s.is_valid {
            match &mut span {
                Some([_, last]) => *last = s.theta2,
                None => span = Some([s.theta2; 2]),
            }
        } else {
            spans.extend(span.take());
        }
    }
    spans.extend(span);
    spans
}
