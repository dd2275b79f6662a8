//! # Bending-Moment Solver
//!
//! Derives M(x) from a solved Q(x) table through the identity `dM/dx = Q`:
//! each section contributes the area under the shear diagram over that
//! section, accumulated with the same running-sum discipline as the shear
//! solver. Markers propagate from Q to M: a shear zero point becomes a
//! moment local extremum, a shear discontinuity becomes a moment
//! discontinuity.

use crate::errors::CalcResult;
use crate::model::Beam;
use crate::table::StressResultantTable;

/// Derive the bending-moment diagram from a solved shear table.
///
/// The moment table reuses the shear table's step, so rows of the two
/// tables correspond one to one and the markers land on matching positions.
pub fn solve(
    q_table: &StressResultantTable,
    beam: &Beam,
    unit: &str,
) -> CalcResult<StressResultantTable> {
    let section_length_m = q_table.section_length_m();
    let mut m_table = StressResultantTable::new(beam, section_length_m, unit)?;
    let rows = q_table.len().min(m_table.len());

    // Forward sweep: the shear value held over [x_n, x_n+1) is the slope of
    // the moment, so each section adds Q_n * ds. Seeding the jump rows this
    // way keeps M continuous across shear discontinuities and puts the peak
    // exactly on the zero-point row.
    for n in 0..rows.saturating_sub(1) {
        let delta_m = q_table.row_at(n).value * section_length_m;
        let running = m_table.row_at(n).value;
        m_table.row_mut(n + 1).value = running + delta_m;
    }

    for n in 0..rows {
        let q_row = q_table.row_at(n);
        if q_row.is_zero_point {
            m_table.row_mut(n).is_local_extremum = true;
        } else if q_row.is_discontinuity {
            let moment = m_table.row_at(n).value;
            let m_row = m_table.row_mut(n);
            m_row.is_discontinuity = true;
            m_row.delta = Some(moment);
            m_row.source = q_row.source.clone();
        }
    }

    log::debug!(
        "moment diagram: {} rows, extremum count {}",
        m_table.len(),
        m_table.maxima().len()
    );
    Ok(m_table)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Load, Support};
    use crate::solvers::shear;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    fn simple_beam(length_m: f64) -> Beam {
        let mut beam = Beam::new(length_m).unwrap();
        beam.add_support(Support::pin("A", 0.0)).unwrap();
        beam.add_support(Support::roller("B", length_m)).unwrap();
        beam
    }

    #[test]
    fn test_centered_point_load_peak() {
        // Scenario E continued: exactly one local maximum at the load
        // position, with the textbook peak value M = P L / 4
        let mut beam = simple_beam(3.0);
        beam.add_load(Load::point("F1", -3.0, 1.5, 0.0));

        let q = shear::solve(&beam, "N").unwrap();
        let m = solve(&q, &beam, "Nm").unwrap();

        let maxima = m.maxima();
        assert_eq!(maxima.len(), 1);
        assert_relative_eq!(maxima[0].x_m, 1.5, epsilon = 1e-9);
        assert_abs_diff_eq!(maxima[0].value, 2.25, epsilon = 1e-9);
    }

    #[test]
    fn test_moment_closes_to_zero_at_both_ends() {
        let mut beam = simple_beam(3.0);
        beam.add_load(Load::point("F1", -3.0, 1.0, 0.0));

        let q = shear::solve(&beam, "N").unwrap();
        let m = solve(&q, &beam, "Nm").unwrap();

        assert_relative_eq!(m.row_at(0).value, 0.0);
        assert_abs_diff_eq!(m.row_at(m.len() - 1).value, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_asymmetric_point_load_peak() {
        // -3 N at 1 m on 3 m: M(1) = 2 * 1 = 2 Nm
        let mut beam = simple_beam(3.0);
        beam.add_load(Load::point("F1", -3.0, 1.0, 0.0));

        let q = shear::solve(&beam, "N").unwrap();
        let m = solve(&q, &beam, "Nm").unwrap();

        let maxima = m.maxima();
        assert_eq!(maxima.len(), 1);
        assert_relative_eq!(maxima[0].x_m, 1.0, epsilon = 1e-9);
        assert_abs_diff_eq!(maxima[0].value, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_uniform_load_parabola() {
        // -5 N/m over 4 m: M(2) = w L^2 / 8 = 10 Nm at midspan
        let mut beam = simple_beam(4.0);
        beam.add_load(Load::uniform("q1", -5.0, 0.0, 4.0));

        let q = shear::solve(&beam, "N").unwrap();
        let m = solve(&q, &beam, "Nm").unwrap();

        // The 0.1 m step smears each boundary by one section, which costs
        // about half a section of area at midspan and one at the far end.
        assert_abs_diff_eq!(m.row_at(20).value, 10.0, epsilon = 0.55);
        assert_abs_diff_eq!(m.row_at(m.len() - 1).value, 0.0, epsilon = 1.1);

        // A finer step converges on the closed form
        let q_fine = shear::solve_with_step(&beam, 0.01, "N").unwrap();
        let m_fine = solve(&q_fine, &beam, "Nm").unwrap();
        assert_abs_diff_eq!(m_fine.row_at(200).value, 10.0, epsilon = 0.06);
        assert_abs_diff_eq!(m_fine.row_at(m_fine.len() - 1).value, 0.0, epsilon = 0.11);
    }

    #[test]
    fn test_discontinuities_propagate_from_shear() {
        let mut beam = simple_beam(2.0);
        beam.add_load(Load::point("F1", -4.0, 1.0, 0.0));

        let q = shear::solve(&beam, "N").unwrap();
        let m = solve(&q, &beam, "Nm").unwrap();

        // The load row is an extremum, not a discontinuity; the support
        // rows stay discontinuities and carry the moment value as delta.
        let discontinuities = m.discontinuities();
        assert_eq!(discontinuities.len(), 2);
        assert!(m.row_at(10).is_local_extremum);
        assert!(!m.row_at(10).is_discontinuity);
        assert_eq!(m.row_at(0).delta, Some(0.0));
    }

    #[test]
    fn test_unit_label() {
        let mut beam = simple_beam(2.0);
        beam.add_load(Load::point("F1", -4.0, 1.0, 0.0));

        let q = shear::solve(&beam, "N").unwrap();
        let m = solve(&q, &beam, "Nm").unwrap();
        assert_eq!(m.unit(), "Nm");
        assert_eq!(q.unit(), "N");
    }
}
