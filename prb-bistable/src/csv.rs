//! Functions for reading/writing sweep results in CSV format.
use crate::MechState;
pub use ::csv::Error;
use ::csv::{ReaderBuilder, Writer};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::io::Cursor;

/// Flat CSV record of a [`MechState`].
#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub struct SweepRow {
    /// Crank angle (deg)
    pub theta2: f64,
    /// Coupler angle (deg)
    pub theta3: f64,
    /// Rocker angle (deg)
    pub theta4: f64,
    /// Crank rotation (deg)
    pub delta_theta2: f64,
    /// Spring deflection (rad)
    pub delta_theta4: f64,
    /// Kinematic coefficient
    pub h42: f64,
    /// Strain energy (J)
    pub energy: f64,
    /// Input torque (N·m)
    pub torque: f64,
    /// Assembly flag
    pub valid: bool,
}

impl From<&MechState> for SweepRow {
    fn from(s: &MechState) -> Self {
        Self {
            theta2: s.theta2,
            theta3: s.theta3,
            theta4: s.theta4,
            delta_theta2: s.delta_theta2,
            delta_theta4: s.delta_theta4,
            h42: s.h42,
            energy: s.energy,
            torque: s.torque,
            valid: s.is_valid,
        }
    }
}

/// Parse CSV with a header row from string.
pub fn parse_csv<D>(s: &str) -> Result<Vec<D>, Error>
where
    D: DeserializeOwned,
{
    ReaderBuilder::new()
        .comment(Some(b'#'))
        .from_reader(Cursor::new(s))
        .deserialize()
        .collect()
}

/// Dump records with a header row to string.
pub fn dump_csv<'a, C, S>(c: C) -> Result<String, Box<dyn std::error::Error>>
where
    C: Into<std::borrow::Cow<'a, [S]>>,
    S: Serialize + Clone + 'a,
{
    let mut w = Writer::from_writer(Vec::new());
    let v = c.into().into_owned();
    v.into_iter().try_for_each(|c| w.serialize(c))?;
    Ok(String::from_utf8(w.into_inner()?)?)
}

/// Dump evaluated states as [`SweepRow`]s.
pub fn dump_states(states: &[MechState]) -> Result<String, Box<dyn std::error::Error>> {
    let rows = states.iter().map(SweepRow::from).collect::<Vec<_>>();
    dump_csv(rows)
}
