//! Core units, constants, and shared validation for the Flight Step Calculator workspace.

pub mod validate;

pub use units::UnitError;
pub use validate::InvalidInput;

/// Physical constants and conversion factors.
pub mod constants {
    /// Seconds per hour.
    pub const SECONDS_PER_HOUR: f64 = 3_600.0;
    /// Metres per kilometre.
    pub const METRES_PER_KILOMETRE: f64 = 1_000.0;
    /// Multiplier taking an acceleration in m/s² to km/h².
    ///
    /// 1 m/s² = (1/1000 km) / (1/3600 h)² = 3600² / 1000 km/h² = 12 960 km/h².
    pub const M_S2_TO_KM_H2: f64 = SECONDS_PER_HOUR * SECONDS_PER_HOUR / METRES_PER_KILOMETRE;
}

/// Coarse classification shared by every error in the workspace.
///
/// Callers match on this when they only care about what went wrong, not where.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A value handed to a unit conversion was not a usable quantity.
    InvalidUnit,
    /// An input was non-finite or broke a non-negativity constraint.
    InvalidInput,
    /// The tank ran dry before the end of the interval.
    FuelDepleted,
}

/// Unit conversion helpers. Every function names the unit it accepts.
pub mod units {
    use super::constants::M_S2_TO_KM_H2;
    use thiserror::Error;

    /// Raised when a value cannot be converted from its declared unit.
    #[derive(Debug, Clone, PartialEq, Error)]
    pub enum UnitError {
        #[error("{quantity} in {unit} must be a finite number, got {value}")]
        InvalidUnit {
            quantity: &'static str,
            unit: &'static str,
            value: f64,
        },
    }

    impl UnitError {
        pub fn kind(&self) -> super::ErrorKind {
            super::ErrorKind::InvalidUnit
        }
    }

    /// Convert an acceleration in metres per second squared to kilometres per hour squared.
    ///
    /// The argument must be in m/s². Values already in km/h² must not be passed here.
    /// Fails when the input is not finite or when the km/h² value would overflow.
    pub fn acceleration_m_s2_to_km_h2(acc_m_s2: f64) -> Result<f64, UnitError> {
        let acc_km_h2 = acc_m_s2 * M_S2_TO_KM_H2;
        if !acc_km_h2.is_finite() {
            return Err(UnitError::InvalidUnit {
                quantity: "acceleration",
                unit: "m/s²",
                value: acc_m_s2,
            });
        }
        Ok(acc_km_h2)
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::SECONDS_PER_HOUR;

    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / SECONDS_PER_HOUR
    }
}
