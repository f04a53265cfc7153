//! Constant-acceleration kinematic updates.
//!
//! Velocities are in km/h and distances in km. Accelerations enter in m/s² and are
//! converted to km/h² at one point. Elapsed time enters in seconds.

use flight_core::ErrorKind;
use flight_core::constants::M_S2_TO_KM_H2;
use flight_core::time::seconds_to_hours;
use flight_core::units::acceleration_m_s2_to_km_h2;
use flight_core::validate::{self, InvalidInput};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum KinematicsError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    #[error("{quantity} overflowed to a non-finite value")]
    NonFinite { quantity: &'static str },
}

impl KinematicsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KinematicsError::InvalidInput(_) | KinematicsError::NonFinite { .. } => {
                ErrorKind::InvalidInput
            }
        }
    }
}

/// How distance is accumulated over the interval.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DistanceIntegration {
    /// `d0 + v0 * t`. Ignores the change in speed during the interval.
    #[default]
    InitialVelocity,
    /// `d0 + (v0 + v1) / 2 * t`, exact under constant acceleration.
    AverageVelocity,
}

/// Velocity and accumulated distance at an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KinematicState {
    pub velocity_km_h: f64,
    pub distance_km: f64,
}

/// Velocity after `elapsed_s` seconds of constant acceleration.
pub fn new_velocity_km_h(
    v0_km_h: f64,
    acc_m_s2: f64,
    elapsed_s: f64,
) -> Result<f64, KinematicsError> {
    let v0 = validate::finite("initial_velocity_km_h", v0_km_h)?;
    let acc = validate::finite("acceleration_m_s2", acc_m_s2)?;
    let t = validate::non_negative("elapsed_s", elapsed_s)?;

    let hours = seconds_to_hours(t);
    let delta_km_h = match acceleration_m_s2_to_km_h2(acc) {
        Ok(acc_km_h2) => acc_km_h2 * hours,
        // acc is finite, so only the km/h² value overflowed; scale by the interval first
        Err(_) => acc * (M_S2_TO_KM_H2 * hours),
    };
    checked("velocity", v0 + delta_km_h)
}

/// Distance after travelling at `v_km_h` for `elapsed_s` seconds, starting from `d0_km`.
///
/// The velocity is held constant over the interval; callers pass the velocity at the
/// start of the interval.
pub fn new_distance_km(v_km_h: f64, elapsed_s: f64, d0_km: f64) -> Result<f64, KinematicsError> {
    let v = validate::finite("velocity_km_h", v_km_h)?;
    let t = validate::non_negative("elapsed_s", elapsed_s)?;
    let d0 = validate::non_negative("initial_distance_km", d0_km)?;

    checked("distance", d0 + v * seconds_to_hours(t))
}

/// Advance a state by one interval under constant acceleration.
pub fn advance(
    state: KinematicState,
    acc_m_s2: f64,
    elapsed_s: f64,
    integration: DistanceIntegration,
) -> Result<KinematicState, KinematicsError> {
    let velocity_km_h = new_velocity_km_h(state.velocity_km_h, acc_m_s2, elapsed_s)?;
    let distance_km = match integration {
        DistanceIntegration::InitialVelocity => {
            new_distance_km(state.velocity_km_h, elapsed_s, state.distance_km)?
        }
        DistanceIntegration::AverageVelocity => {
            // v0/2 + v1/2 keeps the mean finite when both ends are near f64::MAX
            let mean = state.velocity_km_h * 0.5 + velocity_km_h * 0.5;
            new_distance_km(mean, elapsed_s, state.distance_km)?
        }
    };
    Ok(KinematicState {
        velocity_km_h,
        distance_km,
    })
}

fn checked(quantity: &'static str, value: f64) -> Result<f64, KinematicsError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(KinematicsError::NonFinite { quantity })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_elapsed_time_leaves_state_unchanged() {
        let start = KinematicState {
            velocity_km_h: 250.0,
            distance_km: 12.0,
        };
        for integration in [
            DistanceIntegration::InitialVelocity,
            DistanceIntegration::AverageVelocity,
        ] {
            assert_eq!(advance(start, 9.81, 0.0, integration).unwrap(), start);
        }
    }

    #[test]
    fn overflow_is_reported_not_propagated() {
        let err = new_velocity_km_h(f64::MAX, 1.0e300, 3_600.0).unwrap_err();
        assert_eq!(err, KinematicsError::NonFinite { quantity: "velocity" });
        assert_eq!(err.kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn average_velocity_matches_closed_form() {
        // 1 m/s² for 60 s from rest covers 1800 m.
        let state = advance(
            KinematicState {
                velocity_km_h: 0.0,
                distance_km: 0.0,
            },
            1.0,
            60.0,
            DistanceIntegration::AverageVelocity,
        )
        .unwrap();
        assert!((state.distance_km - 1.8).abs() < 1e-12);
        assert!((state.velocity_km_h - 216.0).abs() < 1e-9);
    }
}
