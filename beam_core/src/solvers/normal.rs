//! # Normal-Force Solver
//!
//! Builds the N(x) diagram from the horizontal components of the point
//! loads. The normal force is referenced to zero at the pin support, so the
//! table is integrated from the left end toward the pin and independently
//! from the right end toward the pin; the two partial sums meet at zero
//! there. A beam without a pin support has no defined normal-force diagram
//! and fails with [`BeamError::NoPinSupport`].
//!
//! Only point loads contribute, so the default step is much finer than the
//! shear solver's without a superposition cost.

use crate::errors::{BeamError, CalcResult};
use crate::model::{Beam, LoadKind};
use crate::solvers::reactions;
use crate::table::StressResultantTable;

/// Default sampling step for the normal-force diagram.
pub const DEFAULT_SECTION_LENGTH_M: f64 = 0.001;

/// Solve the normal-force diagram with the default step.
pub fn solve(beam: &Beam, unit: &str) -> CalcResult<StressResultantTable> {
    solve_with_step(beam, DEFAULT_SECTION_LENGTH_M, unit)
}

/// Solve the normal-force diagram with a caller-chosen step.
///
/// Runs the reaction solver's validation pass first; a load or support
/// outside the beam is propagated as [`BeamError::ReactionsUnsolved`],
/// never clamped onto the nearest row.
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

    let pin = beam
        .supports()
        .iter()
        .find(|s| s.is_pin())
        .ok_or(BeamError::NoPinSupport)?;
    let x_pin_m = pin.position_m;

    let mut table = StressResultantTable::new(beam, section_length_m, unit)?;

    // Seed the axial drive of every point load. The component along the
    // beam axis is F sin(angle); distributed loads act vertically only.
    for load in beam.loads_sorted() {
        if let LoadKind::Point {
            magnitude_n,
            angle_deg,
        } = load.kind
        {
            let axial_n = magnitude_n * angle_deg.to_radians().sin();
            table.add_point_force(&load.name, load.position_m, axial_n);
        }
    }

    // Accumulate from the left end toward the pin...
    for n in 0..table.len().saturating_sub(1) {
        let x_m = (n + 1) as f64 * section_length_m;
        if x_m < x_pin_m {
            let previous = table.row_at(n).value;
            table.row_mut(n + 1).value += previous;
        }
    }

    // ...and from the right end toward the pin.
    for n in (1..table.len()).rev() {
        let x_m = (n - 1) as f64 * section_length_m;
        if x_m > x_pin_m {
            let next = table.row_at(n).value;
            table.row_mut(n - 1).value += next;
        }
    }

    log::debug!(
        "normal-force diagram: {} rows, pin at {} m",
        table.len(),
        x_pin_m
    );
    Ok(table)
}
