//! Pseudo-rigid-body (PRB) model of a compliant bistable four-bar mechanism.
//!
//! A rigid crank and coupler drive a flexible cantilever rocker. The rocker is
//! replaced by a rigid link of length `γ·L4` ending in a torsional spring, so
//! each crank angle maps to a closed-form linkage configuration, a spring
//! deflection, the stored strain energy and the equivalent input torque.
//!
//! ```
//! use prb_bistable::*;
//!
//! let params = Params::example();
//! let state = params.eval(-90.);
//! assert!(state.is_valid);
//! assert!(state.energy > 0.);
//! let joints = state.joints(&params);
//! assert_eq!(joints.a0, [0., 0.]);
//! ```
#![cfg_attr(doc_cfg, feature(doc_cfg))]
#![warn(missing_docs)]
pub use crate::{
    angle::*, error::*, joint::*, material::*, mech::*, param::*, point::*, prb::*, stat::*,
    sweep::*,
};

mod angle;
#[cfg(feature = "csv")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "csv")))]
pub mod csv;
mod error;
mod joint;
mod material;
mod mech;
mod param;
#[cfg(feature = "plot")]
#[cfg_attr(doc_cfg, doc(cfg(feature = "plot")))]
pub mod plot;
mod point;
mod prb;
mod stat;
mod sweep;
#[cfg(test)]
mod tests;
