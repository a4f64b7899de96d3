//! Control-position adapter over the rotation dynamics.
//!
//! [`RotatingLandscape`] owns the absolute control position. Callers feed it
//! relative changes; the dynamics only ever see absolute positions.

use landscape_types::{
    Domain, LandscapeParams, LandscapeSnapshot, ParamsError, SymbolError, SystemResponse,
};
use tracing::debug;

use crate::dynamics::RotationDynamics;
use crate::penalty::PenaltyFunction;

pub const DEFAULT_CONTROL_START_VALUE: f64 = 0.0;

#[derive(Debug, Clone)]
pub struct RotatingLandscape<P> {
    dynamics: RotationDynamics<P>,
    control_position: f64,
}

impl<P: PenaltyFunction> RotatingLandscape<P> {
    pub fn new(
        number_steps: i32,
        max_required_step: f64,
        safe_zone: f64,
    ) -> Result<Self, ParamsError> {
        let params = LandscapeParams::new(number_steps, max_required_step, safe_zone)?;
        Ok(Self::from_params(params))
    }

    #[must_use]
    pub fn from_params(params: LandscapeParams) -> Self {
        Self {
            dynamics: RotationDynamics::from_params(params),
            control_position: DEFAULT_CONTROL_START_VALUE,
        }
    }

    /// Rebuild a landscape from a saved state.
    ///
    /// The penalty table is rebuilt from the saved parameters and the control
    /// position is installed without running a transition, so the restored
    /// landscape continues exactly where the saved one left off.
    #[must_use]
    pub fn restore(snapshot: &LandscapeSnapshot) -> Self {
        let mut dynamics = RotationDynamics::from_params(snapshot.params);
        dynamics.set_domain(snapshot.domain);
        dynamics.set_system_response(snapshot.system_response);
        dynamics.set_angle_index(snapshot.angle_index);
        dynamics.refresh_penalty_function();
        debug!(
            domain = %snapshot.domain,
            system_response = %snapshot.system_response,
            angle_index = snapshot.angle_index,
            control_position = snapshot.control_position,
            "Restored landscape"
        );
        Self {
            dynamics,
            control_position: snapshot.control_position,
        }
    }

    /// Apply a relative control change and return the resulting reward.
    pub fn apply_delta(&mut self, delta: f64) -> f64 {
        self.control_position += delta;
        self.dynamics.transition(self.control_position);
        self.reward()
    }

    /// Override the absolute control position.
    ///
    /// Runs one transition at the new position so the dynamics stay
    /// consistent with it.
    pub fn set_control_position(&mut self, position: f64) {
        self.control_position = position;
        self.dynamics.transition(position);
    }

    #[must_use]
    pub fn reward(&self) -> f64 {
        self.dynamics.reward_at(self.control_position)
    }

    #[must_use]
    pub fn optimal_position(&self) -> f64 {
        self.dynamics.optimal_position()
    }

    #[must_use]
    pub fn optimal_reward(&self) -> f64 {
        self.dynamics.optimal_reward()
    }
}

impl<P> RotatingLandscape<P> {
    /// Move the control back to its start value.
    ///
    /// The dynamics are left alone; they unwind through the safe-zone rules
    /// of later transitions.
    pub fn reset(&mut self) {
        self.set_control_start_value(DEFAULT_CONTROL_START_VALUE);
    }

    /// Set the control position without running a transition.
    pub fn set_control_start_value(&mut self, position: f64) {
        self.control_position = position;
    }

    #[must_use]
    pub const fn control_position(&self) -> f64 {
        self.control_position
    }

    #[must_use]
    pub fn penalty_function(&self) -> &P {
        self.dynamics.penalty_function()
    }

    #[must_use]
    pub const fn dynamics(&self) -> &RotationDynamics<P> {
        &self.dynamics
    }

    #[must_use]
    pub fn snapshot(&self) -> LandscapeSnapshot {
        LandscapeSnapshot {
            params: *self.dynamics.params(),
            domain: self.dynamics.domain(),
            system_response: self.dynamics.system_response(),
            angle_index: self.dynamics.angle_index(),
            control_position: self.control_position,
        }
    }

    #[must_use]
    pub const fn domain(&self) -> i32 {
        self.dynamics.domain().value()
    }

    pub fn set_domain(&mut self, code: f64) -> Result<(), SymbolError> {
        self.dynamics.set_domain(Domain::from_code(code)?);
        Ok(())
    }

    #[must_use]
    pub const fn system_response(&self) -> i32 {
        self.dynamics.system_response().value()
    }

    pub fn set_system_response(&mut self, code: f64) -> Result<(), SymbolError> {
        self.dynamics.set_system_response(SystemResponse::from_code(code)?);
        Ok(())
    }

    #[must_use]
    pub const fn angle_index(&self) -> i32 {
        self.dynamics.angle_index()
    }

    pub fn set_angle_index(&mut self, angle_index: i32) {
        self.dynamics.set_angle_index(angle_index);
    }
}
