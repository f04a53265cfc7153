//! Input guards shared by the kinematics and fuel crates.

use thiserror::Error;

use crate::ErrorKind;

/// Which constraint an input broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Finite,
    NonNegative,
    Numeric,
}

impl std::fmt::Display for Constraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Constraint::Finite => f.write_str("a finite number"),
            Constraint::NonNegative => f.write_str("non-negative"),
            Constraint::Numeric => f.write_str("a number"),
        }
    }
}

/// An input that is not a finite number or violates a sign constraint.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid input: {name} must be {constraint}, got {value}")]
pub struct InvalidInput {
    pub name: &'static str,
    pub constraint: Constraint,
    pub value: String,
}

impl InvalidInput {
    pub fn new(name: &'static str, constraint: Constraint, value: impl ToString) -> Self {
        Self {
            name,
            constraint,
            value: value.to_string(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        ErrorKind::InvalidInput
    }
}

/// Reject NaN and ±∞.
pub fn finite(name: &'static str, value: f64) -> Result<f64, InvalidInput> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(InvalidInput::new(name, Constraint::Finite, value))
    }
}

/// Reject non-finite values and anything below zero. `-0.0` passes.
pub fn non_negative(name: &'static str, value: f64) -> Result<f64, InvalidInput> {
    let value = finite(name, value)?;
    if value < 0.0 {
        return Err(InvalidInput::new(name, Constraint::NonNegative, value));
    }
    Ok(value)
}
