use serde::{Deserialize, Serialize};

use crate::{Domain, LandscapeParams, SystemResponse};

/// Saved state of a rotating landscape.
///
/// Four scalars plus the construction parameters needed to rebuild the
/// penalty table deterministically. `domain` and `system_response`
/// serialize as their integer codes.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandscapeSnapshot {
    pub params: LandscapeParams,
    pub domain: Domain,
    pub system_response: SystemResponse,
    pub angle_index: i32,
    pub control_position: f64,
}
