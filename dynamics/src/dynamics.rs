//! Rotation dynamics of the penalty landscape.
//!
//! The engine owns the discretized angle grid and the state
//! `{domain, system_response, angle_index}`. Every call to
//! [`RotationDynamics::transition`] advances that state from a new absolute
//! control position:
//!
//! ```text
//! classify domain -> reset response on domain change -> angular step
//!     -> update response -> reset when unwound and quiescent
//!     -> fold angle index -> select active penalty function
//! ```
//!
//! The order is load-bearing: the no-turn check reads the domain and
//! response as left by the first two stages.

use landscape_types::{Domain, LandscapeParams, ParamsError, SystemResponse};
use tracing::{debug, trace};

use crate::fold::fold_angle_index;
use crate::penalty::{PenaltyFunction, PenaltyTable};

/// Three-way sign. Zero and NaN map to `0`.
fn sign(value: f64) -> i32 {
    if value > 0.0 {
        1
    } else if value < 0.0 {
        -1
    } else {
        0
    }
}

#[derive(Debug, Clone)]
pub struct RotationDynamics<P> {
    params: LandscapeParams,
    table: PenaltyTable<P>,
    domain: Domain,
    system_response: SystemResponse,
    angle_index: i32,
    /// Folded angle index of the active penalty function.
    active_index: i32,
}

impl<P: PenaltyFunction> RotationDynamics<P> {
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
        let table = PenaltyTable::build(&params);
        debug!(
            number_steps = params.number_steps(),
            strongest_penalty_index = params.strongest_penalty_index(),
            entries = table.len(),
            "Built penalty table"
        );
        let mut dynamics = Self {
            params,
            table,
            domain: Domain::Initial,
            system_response: SystemResponse::Advantageous,
            angle_index: 0,
            active_index: 0,
        };
        dynamics.reset();
        dynamics
    }
}

impl<P> RotationDynamics<P> {
    /// Back to the initial, favorable state with an unrotated landscape.
    pub fn reset(&mut self) {
        self.domain = Domain::Initial;
        self.angle_index = 0;
        self.system_response = SystemResponse::Advantageous;
        self.refresh_penalty_function();
    }

    /// Advance the state for a new absolute control position.
    pub fn transition(&mut self, new_position: f64) {
        let quiescent = self.in_safe_zone(new_position);

        let previous_domain = self.domain;
        self.domain = self.classify_domain(new_position, quiescent);
        if self.domain != previous_domain {
            self.system_response = SystemResponse::Advantageous;
            trace!(domain = %self.domain, "Domain changed, system response -> advantageous");
        }

        let step = self.angular_step(new_position, quiescent);
        self.angle_index = self.angle_index.saturating_add(step);

        self.system_response = self.updated_system_response();

        if self.angle_index == 0 && quiescent {
            trace!("Rotation unwound inside safe zone, resetting");
            self.reset();
        }

        self.angle_index = fold_angle_index(self.angle_index, self.strongest_penalty_index());
        trace!(angle_index = self.angle_index, "Transition applied");
        self.refresh_penalty_function();
    }

    fn in_safe_zone(&self, position: f64) -> bool {
        position.is_nan() || position.abs() <= self.params.safe_zone()
    }

    /// Inside the safe zone the side is ambiguous, so the domain is kept.
    fn classify_domain(&self, position: f64, quiescent: bool) -> Domain {
        if quiescent {
            self.domain
        } else {
            Domain::from_sign(sign(position))
        }
    }

    fn angular_step(&self, position: f64, quiescent: bool) -> i32 {
        if quiescent {
            return -self.angle_index.signum();
        }

        if self.angle_index == -self.domain.value() * self.strongest_penalty_index() {
            trace!("No turning");
            return 0;
        }

        self.system_response.value() * sign(position)
    }

    /// Turns disadvantageous once the landscape reaches a quarter turn.
    fn updated_system_response(&self) -> SystemResponse {
        if self.angle_index.unsigned_abs() >= self.strongest_penalty_index().unsigned_abs() {
            trace!("System response -> disadvantageous");
            SystemResponse::Disadvantageous
        } else {
            self.system_response
        }
    }

    /// Re-select the active penalty function from the current angle index.
    ///
    /// The state setters do not do this on their own.
    pub fn refresh_penalty_function(&mut self) {
        self.active_index = fold_angle_index(self.angle_index, self.strongest_penalty_index());
    }

    #[must_use]
    pub fn penalty_function(&self) -> &P {
        self.table.lookup(self.active_index)
    }

    #[must_use]
    pub fn penalty_function_at(&self, idx: i32) -> &P {
        self.table.lookup(idx)
    }

    #[must_use]
    pub fn penalty_table(&self) -> &PenaltyTable<P> {
        &self.table
    }

    #[must_use]
    pub const fn params(&self) -> &LandscapeParams {
        &self.params
    }

    #[must_use]
    pub const fn strongest_penalty_index(&self) -> i32 {
        self.params.strongest_penalty_index()
    }

    #[must_use]
    pub const fn safe_zone(&self) -> f64 {
        self.params.safe_zone()
    }

    #[must_use]
    pub const fn domain(&self) -> Domain {
        self.domain
    }

    pub fn set_domain(&mut self, domain: Domain) {
        self.domain = domain;
    }

    #[must_use]
    pub const fn system_response(&self) -> SystemResponse {
        self.system_response
    }

    pub fn set_system_response(&mut self, system_response: SystemResponse) {
        self.system_response = system_response;
    }

    #[must_use]
    pub const fn angle_index(&self) -> i32 {
        self.angle_index
    }

    pub fn set_angle_index(&mut self, angle_index: i32) {
        self.angle_index = angle_index;
    }
}

impl<P: PenaltyFunction> RotationDynamics<P> {
    /// Reward at `position`: the negated penalty of the active function.
    #[must_use]
    pub fn reward_at(&self, position: f64) -> f64 {
        -self.penalty_function().reward(position)
    }

    #[must_use]
    pub fn optimal_position(&self) -> f64 {
        self.penalty_function().optimum_radius()
    }

    #[must_use]
    pub fn optimal_reward(&self) -> f64 {
        -self.penalty_function().optimum_value()
    }
}
