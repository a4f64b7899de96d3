//! Penalty function collaborator and the table of rotated instances.

use std::f64::consts::PI;

use landscape_types::LandscapeParams;

use crate::fold::fold_angle_index;

/// A penalty function over the control position for one landscape angle.
///
/// The dynamics treat implementations as opaque and side-effect free; only
/// these queries are used.
pub trait PenaltyFunction {
    /// Penalty function for a landscape rotated by `angle` radians.
    fn from_angle(angle: f64, max_required_step: f64) -> Self
    where
        Self: Sized;

    /// Penalty at `position`. Penalties are positive costs.
    fn reward(&self, position: f64) -> f64;

    /// Position where the penalty is smallest.
    fn optimum_radius(&self) -> f64;

    /// Penalty at [`Self::optimum_radius`].
    fn optimum_value(&self) -> f64;
}

/// The `2K + 1` penalty functions for angle indices `-K..=K`.
///
/// Slot `0` holds angle index `-K`, slot `2K` holds `+K`. Built once and
/// never mutated.
#[derive(Debug, Clone)]
pub struct PenaltyTable<P> {
    functions: Vec<P>,
    strongest_penalty_index: i32,
}

impl<P: PenaltyFunction> PenaltyTable<P> {
    #[must_use]
    pub fn build(params: &LandscapeParams) -> Self {
        let k = params.strongest_penalty_index();
        let number_steps = f64::from(params.number_steps());
        let functions = (-k..=k)
            .map(|i| {
                let angle = f64::from(2 * i) * PI / number_steps;
                P::from_angle(angle, params.max_required_step())
            })
            .collect();
        Self {
            functions,
            strongest_penalty_index: k,
        }
    }
}

impl<P> PenaltyTable<P> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    #[must_use]
    pub const fn strongest_penalty_index(&self) -> i32 {
        self.strongest_penalty_index
    }

    /// Entry for an index already in `[-K, K]`.
    #[must_use]
    pub fn get(&self, folded_idx: i32) -> Option<&P> {
        let slot = usize::try_from(self.strongest_penalty_index + folded_idx).ok()?;
        self.functions.get(slot)
    }

    /// Entry for any angle index, folded onto `[-K, K]` first.
    #[must_use]
    pub fn lookup(&self, idx: i32) -> &P {
        let k = self.strongest_penalty_index;
        let slot = (k + fold_angle_index(idx, k)) as usize;
        debug_assert!(slot < self.functions.len(), "folded slot {slot} out of table");
        &self.functions[slot]
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.functions.iter()
    }
}
