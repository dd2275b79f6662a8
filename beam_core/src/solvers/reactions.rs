//! # Reaction Solver
//!
//! Solves the two-equation statics system of a simply-supported beam:
//! the torque balance about the right support gives the left reaction, the
//! vertical force balance gives the right reaction.
//!
//! ## Sign convention
//!
//! - Vertical force: up is positive, down is negative.
//! - Torque: clockwise is positive.
//! - Horizontal force: right-to-left is positive.
//!
//! Inclined point loads are split into a vertical part `F cos(angle)` that
//! enters the vertical and torque balances, and a horizontal part
//! `-F sin(angle)` that accumulates separately. The whole horizontal sum is
//! assigned to one support by convention: a deliberate
//! two-unknowns-per-axis simplification, not a full three-equation solve.
//!
//! ## Failure semantics
//!
//! Validation is collected, never short-circuited: one call reports every
//! load and support that lies outside the beam. If any error exists the
//! reaction fields stay at zero and no further math runs; callers must
//! check [`BeamResult::error_count`] before reading them.

use serde::{Deserialize, Serialize};

use crate::errors::BeamCalcError;
use crate::model::Beam;

/// Result of a reaction solve.
///
/// The numeric fields are meaningful only when the error list is empty.
///
/// ## Example
///
/// ```rust
/// use beam_core::model::{Beam, Load, Support};
/// use beam_core::solvers::reactions;
///
/// let mut beam = Beam::new(3.0).unwrap();
/// beam.add_support(Support::pin("A", 0.0)).unwrap();
/// beam.add_support(Support::roller("B", 3.0)).unwrap();
/// beam.add_load(Load::point("F1", -3.0, 1.5, 0.0));
///
/// let result = reactions::solve(&beam);
/// assert_eq!(result.error_count(), 0);
/// assert!((result.left_reaction_n - 1.5).abs() < 1e-9);
/// assert!((result.right_reaction_n - 1.5).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BeamResult {
    errors: Vec<BeamCalcError>,

    /// Vertical reaction at the left support in newtons, positive upwards
    pub left_reaction_n: f64,

    /// Vertical reaction at the right support in newtons, positive upwards
    pub right_reaction_n: f64,

    /// Sum of the horizontal load components, assigned wholesale to one
    /// support; positive right-to-left
    pub horizontal_reaction_n: f64,
}

impl BeamResult {
    fn failed(errors: Vec<BeamCalcError>) -> Self {
        BeamResult {
            errors,
            left_reaction_n: 0.0,
            right_reaction_n: 0.0,
            horizontal_reaction_n: 0.0,
        }
    }

    /// Collected validation errors, one per offending load or support
    pub fn errors(&self) -> &[BeamCalcError] {
        &self.errors
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// True when the solve succeeded and the reaction fields may be read
    pub fn is_solved(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Solve the support reactions of a simply-supported beam.
///
/// Validates every support and every load extent against the beam length,
/// collecting one [`BeamCalcError`] per offender. With a clean validation
/// pass, sorts the supports left to right and for each load accumulates the
/// vertical force sum, the torque sum about the right support, and the
/// horizontal force sum; then
///
/// ```text
/// left  = -torque_sum / span
/// right = -vertical_sum - left
/// ```
pub fn solve(beam: &Beam) -> BeamResult {
    let mut errors = Vec::new();

    if beam.supports().len() != 2 {
        errors.push(BeamCalcError::support(
            beam.supports().len(),
            format!(
                "beam has {} support(s), a simply-supported beam needs exactly 2",
                beam.supports().len()
            ),
        ));
        return BeamResult::failed(errors);
    }

    for (index, support) in beam.supports().iter().enumerate() {
        if !beam.contains(support.position_m) {
            errors.push(BeamCalcError::support(
                index,
                format!(
                    "support '{}' sits {} m from the left end, beam length is {} m",
                    support.name,
                    support.position_m,
                    beam.length_m()
                ),
            ));
        }
    }

    for (index, load) in beam.loads().iter().enumerate() {
        if !beam.contains(load.position_m) || !beam.contains(load.end_m()) {
            errors.push(BeamCalcError::load(
                index,
                format!(
                    "load '{}' spans {} m to {} m from the left end, beam length is {} m",
                    load.name,
                    load.position_m,
                    load.end_m(),
                    beam.length_m()
                ),
            ));
        }
    }

    if !errors.is_empty() {
        log::debug!("reaction solve failed with {} validation error(s)", errors.len());
        return BeamResult::failed(errors);
    }

    let supports = beam.supports_sorted();
    let (left, right) = (supports[0], supports[1]);
    let span_m = (right.position_m - left.position_m).abs();

    let mut torque_sum = 0.0;
    let mut vertical_sum = 0.0;
    let mut horizontal_sum = 0.0;

    for load in beam.loads() {
        if load.is_point() {
            let vertical = load.vertical_component_n();
            horizontal_sum += load.horizontal_component_n();
            vertical_sum += vertical;
            torque_sum += vertical * (right.position_m - load.position_m);
        } else {
            let resultant = load.resultant_force_n();
            let centroid_x_m = load.position_m + load.centroid_offset_m();
            vertical_sum += resultant;
            torque_sum += resultant * (right.position_m - centroid_x_m);
        }
    }

    let left_reaction_n = -torque_sum / span_m;
    let right_reaction_n = -vertical_sum - left_reaction_n;

    log::debug!(
        "reactions: left {:.4} N, right {:.4} N, horizontal {:.4} N",
        left_reaction_n,
        right_reaction_n,
        horizontal_sum
    );

    BeamResult {
        errors,
        left_reaction_n,
        right_reaction_n,
        horizontal_reaction_n: horizontal_sum,
    }
}
