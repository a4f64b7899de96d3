//! Rotating penalty landscape.
//!
//! A ring of discretized rotation angles where one angle is active at a time
//! and supplies a penalty function of the control position. Pushing the
//! control away from the safe zone rotates the landscape; the rotation
//! unwinds once the control is quiescent again.
//!
//! - [`RotationDynamics`]: the state machine over `{domain, system_response, angle_index}`
//! - [`RotatingLandscape`]: owns the absolute control position and drives the dynamics
//! - [`PenaltyFunction`]: the penalty family the landscape is built from
//!
//! Everything here is synchronous and single-owner. Use one instance per
//! episode; share nothing across threads.

mod dynamics;
mod fold;
mod landscape;
mod penalty;

pub use dynamics::RotationDynamics;
pub use fold::fold_angle_index;
pub use landscape::{DEFAULT_CONTROL_START_VALUE, RotatingLandscape};
pub use penalty::{PenaltyFunction, PenaltyTable};

pub use landscape_types::{
    Domain, LandscapeParams, LandscapeSnapshot, ParamsError, SymbolError, SystemResponse,
};
