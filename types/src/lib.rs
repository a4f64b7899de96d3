//! Core value types for the rotating penalty landscape.
//!
//! This crate contains pure value types with no IO and minimal dependencies:
//! the symbolic domain/response enumerations, validated construction
//! parameters and the saved-state snapshot.

mod params;
mod snapshot;
mod symbols;

pub use params::{LandscapeParams, ParamsError};
pub use snapshot::LandscapeSnapshot;
pub use symbols::{Domain, SymbolError, SystemResponse};
