//! Construction parameters for a penalty landscape.
//!
//! These are the only configuration surface of the dynamics. A
//! `LandscapeParams` value is valid by construction: raw TOML/JSON input is
//! deserialized into a private struct and checked at the parse boundary via
//! `#[serde(try_from)]`.

use std::f64::consts::TAU;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParamsError {
    #[error("number_steps must be positive and an integer multiple of 4, but is {number_steps}")]
    InvalidNumberSteps { number_steps: i32 },
    #[error("safe_zone must be non-negative, but is {safe_zone}")]
    NegativeSafeZone { safe_zone: f64 },
}

#[derive(Deserialize)]
struct RawLandscapeParams {
    number_steps: i32,
    max_required_step: f64,
    #[serde(default)]
    safe_zone: f64,
}

/// Validated landscape parameters.
///
/// Invariants:
/// - `number_steps` is positive and a multiple of 4, so
///   `strongest_penalty_index() = number_steps / 4` is a positive integer
/// - `safe_zone >= 0` (NaN is rejected)
///
/// `max_required_step` is passed through to the penalty functions untouched.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawLandscapeParams")]
pub struct LandscapeParams {
    number_steps: i32,
    max_required_step: f64,
    safe_zone: f64,
}

impl LandscapeParams {
    /// Quarter turns in a full turn; `number_steps / QUARTER` is `K`.
    const QUARTER: i32 = 4;

    pub fn new(
        number_steps: i32,
        max_required_step: f64,
        safe_zone: f64,
    ) -> Result<Self, ParamsError> {
        if number_steps < 1 || number_steps % Self::QUARTER != 0 {
            return Err(ParamsError::InvalidNumberSteps { number_steps });
        }
        if safe_zone.is_nan() || safe_zone < 0.0 {
            return Err(ParamsError::NegativeSafeZone { safe_zone });
        }
        Ok(Self {
            number_steps,
            max_required_step,
            safe_zone,
        })
    }

    #[must_use]
    pub const fn number_steps(&self) -> i32 {
        self.number_steps
    }

    #[must_use]
    pub const fn max_required_step(&self) -> f64 {
        self.max_required_step
    }

    #[must_use]
    pub const fn safe_zone(&self) -> f64 {
        self.safe_zone
    }

    /// Angle index of a 90 degree rotation (`K`).
    #[must_use]
    pub const fn strongest_penalty_index(&self) -> i32 {
        self.number_steps / Self::QUARTER
    }

    /// Rotation per angle index step, in radians.
    ///
    /// Informational. The penalty table computes each angle as
    /// `2i * PI / number_steps` directly rather than multiplying by this.
    #[must_use]
    pub fn angular_speed(&self) -> f64 {
        TAU / f64::from(self.number_steps)
    }
}

impl TryFrom<RawLandscapeParams> for LandscapeParams {
    type Error = ParamsError;

    fn try_from(raw: RawLandscapeParams) -> Result<Self, Self::Error> {
        Self::new(raw.number_steps, raw.max_required_step, raw.safe_zone)
    }
}
