//! Fuel consumption under a constant burn rate.

use flight_core::ErrorKind;
use flight_core::validate::{self, Constraint, InvalidInput};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FuelError {
    #[error(transparent)]
    InvalidInput(#[from] InvalidInput),
    /// The tank empties before the end of the interval. Terminal for the scenario.
    #[error(
        "fuel depleted: {required_kg:.2} kg needed but only {fuel_kg:.2} kg on board (empty after {endurance_s:.1} s)"
    )]
    Depleted {
        fuel_kg: f64,
        required_kg: f64,
        endurance_s: f64,
    },
}

impl FuelError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            FuelError::InvalidInput(err) => err.kind(),
            FuelError::Depleted { .. } => ErrorKind::FuelDepleted,
        }
    }
}

/// Fuel burned over `elapsed_s` seconds at `burn_rate_kg_s`.
pub fn fuel_consumed_kg(burn_rate_kg_s: f64, elapsed_s: f64) -> Result<f64, FuelError> {
    let rate = validate::non_negative("burn_rate_kg_s", burn_rate_kg_s)?;
    let t = validate::non_negative("elapsed_s", elapsed_s)?;
    let consumed = rate * t;
    if !consumed.is_finite() {
        return Err(InvalidInput::new("fuel_consumed_kg", Constraint::Finite, consumed).into());
    }
    Ok(consumed)
}

/// Seconds until the tank is empty, or `None` when nothing is being burned.
pub fn endurance_s(fuel0_kg: f64, burn_rate_kg_s: f64) -> Result<Option<f64>, FuelError> {
    let fuel = validate::non_negative("initial_fuel_kg", fuel0_kg)?;
    let rate = validate::non_negative("burn_rate_kg_s", burn_rate_kg_s)?;
    if rate == 0.0 {
        return Ok(None);
    }
    Ok(Some(fuel / rate))
}

/// Fuel left after burning for `elapsed_s` seconds.
///
/// Never returns a negative mass: if the burn needs more than `fuel0_kg`, the
/// result is [`FuelError::Depleted`]. Exactly empty is a success.
pub fn remaining_fuel_kg(
    fuel0_kg: f64,
    burn_rate_kg_s: f64,
    elapsed_s: f64,
) -> Result<f64, FuelError> {
    let fuel = validate::non_negative("initial_fuel_kg", fuel0_kg)?;
    let consumed = fuel_consumed_kg(burn_rate_kg_s, elapsed_s)?;

    let remaining = fuel - consumed;
    if remaining < 0.0 {
        // consumed > fuel >= 0 so the burn rate is strictly positive here
        let endurance = endurance_s(fuel, burn_rate_kg_s)?.unwrap_or(f64::INFINITY);
        return Err(FuelError::Depleted {
            fuel_kg: fuel,
            required_kg: consumed,
            endurance_s: endurance,
        });
    }
    // -0.0 fuel with no burn would otherwise come back with its sign bit set
    Ok(remaining + 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burning_exactly_the_whole_tank_is_allowed() {
        assert_eq!(remaining_fuel_kg(1_800.0, 0.5, 3_600.0), Ok(0.0));
    }

    #[test]
    fn depletion_reports_when_the_tank_ran_dry() {
        match remaining_fuel_kg(100.0, 1.0, 3_600.0) {
            Err(FuelError::Depleted {
                fuel_kg,
                required_kg,
                endurance_s,
            }) => {
                assert_eq!(fuel_kg, 100.0);
                assert_eq!(required_kg, 3_600.0);
                assert_eq!(endurance_s, 100.0);
            }
            other => panic!("expected depletion, got {other:?}"),
        }
    }

    #[test]
    fn zero_burn_rate_has_unbounded_endurance() {
        assert_eq!(endurance_s(10.0, 0.0), Ok(None));
        assert_eq!(endurance_s(10.0, 2.0), Ok(Some(5.0)));
    }
}
