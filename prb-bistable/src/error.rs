use thiserror::Error;

/// Errors raised while building parameter sets and sweeps.
///
/// An unassemblable linkage is not an error, see [`MechState::is_valid`].
///
/// [`MechState::is_valid`]: crate::MechState::is_valid
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// A length or material property is zero or negative.
    #[error("{name} must be positive, got {value}")]
    NonPositive {
        /// Field name
        name: &'static str,
        /// Rejected value
        value: f64,
    },
    /// A field is NaN or infinite.
    #[error("{name} must be finite")]
    NonFinite {
        /// Field name
        name: &'static str,
    },
    /// The sweep bounds or step cannot produce a sample grid.
    #[error("invalid sweep: {0}")]
    InvalidSweep(String),
    /// The name is not in the material catalog.
    #[error("unknown material: {0}")]
    UnknownMaterial(String),
}

impl Error {
    /// Check a strictly positive, finite field.
    pub fn positive(name: &'static str, value: f64) -> Result<(), Self> {
        Self::finite(name, value)?;
        if value > 0. {
            Ok(())
        } else {
            Err(Self::NonPositive { name, value })
        }
    }

    /// Check a finite field.
    pub fn finite(name: &'static str, value: f64) -> Result<(), Self> {
        if value.is_finite() {
            Ok(())
        } else {
            Err(Self::NonFinite { name })
        }
    }
}
