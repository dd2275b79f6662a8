//! # Shear-Force Solver
//!
//! Builds the Q(x) diagram: a [`StressResultantTable`] seeded with both
//! reactions and every load's vertical contribution, then cumulatively
//! integrated left to right. The result shows a discontinuity at every
//! support, point-load position and distributed-load boundary, and a zero
//! point wherever the shear changes sign.

use crate::errors::{BeamError, CalcResult};
use crate::model::Beam;
use crate::solvers::reactions;
use crate::table::StressResultantTable;

/// Default sampling step for the shear and moment diagrams. Coarser than
/// the normal-force step since distributed loads are superimposed row by
/// row.
pub const DEFAULT_SECTION_LENGTH_M: f64 = 0.1;

/// Solve the shear-force diagram with the default step.
pub fn solve(beam: &Beam, unit: &str) -> CalcResult<StressResultantTable> {
    solve_with_step(beam, DEFAULT_SECTION_LENGTH_M, unit)
}

/// Solve the shear-force diagram with a caller-chosen step.
///
/// Runs the reaction solver first; a failed validation pass is propagated
/// as [`BeamError::ReactionsUnsolved`] carrying the collected errors.
pub fn solve_with_step(
    beam: &Beam,
    section_length_m: f64,
    unit: &str,
) -> CalcResult<StressResultantTable> {
    let result = reactions::solve(beam);
    if !result.is_solved() {
        return Err(BeamError::ReactionsUnsolved {
            errors: result.errors().to_vec(),
        });
    }

    let mut table = StressResultantTable::new(beam, section_length_m, unit)?;

    // Both reactions act on the table as concentrated forces.
    let supports = beam.supports_sorted();
    table.add_point_force(&supports[0].name, supports[0].position_m, result.left_reaction_n);
    table.add_point_force(&supports[1].name, supports[1].position_m, result.right_reaction_n);

    for load in beam.loads_sorted() {
        if load.is_point() {
            table.add_point_force(&load.name, load.position_m, load.vertical_component_n());
        } else {
            table.add_distributed_load(load);
        }
    }

    table.integrate();
    log::debug!(
        "shear diagram: {} rows, {} discontinuities, {} zero point(s)",
        table.len(),
        table.discontinuities().len(),
        table.zero_points().len()
    );
    Ok(table)
}
