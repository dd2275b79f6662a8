//! # Stress-Resultant Table
//!
//! A fixed-step sampled function over the beam length with per-sample
//! structural flags. Shared infrastructure for the shear, moment and
//! normal-force solvers: the solvers seed it with forces, run the cumulative
//! integration pass, and hand it to the caller read-only.
//!
//! Smaller section lengths improve resolution near load boundaries at linear
//! cost in time and memory; the step is chosen per solver call.

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, CalcResult};
use crate::model::{Beam, Load};

/// One sampled row: a position, the stress-resultant value there, and flags
/// describing the structural features at that position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StressResultant {
    /// Distance from the left end of the beam in metres
    pub x_m: f64,

    /// Sampled value; a force or a moment depending on the table's unit
    pub value: f64,

    /// A concentrated force acts here, or a distributed load starts or ends
    pub is_discontinuity: bool,

    /// The running value changes sign here; a Q sign change is a local
    /// extremum of M
    pub is_zero_point: bool,

    /// Local extremum of the sampled function
    pub is_local_extremum: bool,

    /// Name of the load that caused the discontinuity, if any
    pub source: Option<String>,

    /// Accumulated jump recorded at a discontinuity
    pub delta: Option<f64>,
}

impl StressResultant {
    fn new(x_m: f64) -> Self {
        StressResultant {
            x_m,
            value: 0.0,
            is_discontinuity: false,
            is_zero_point: false,
            is_local_extremum: false,
            source: None,
            delta: None,
        }
    }

    /// Superpose a force into this row, marking it as a discontinuity and
    /// accumulating the jump. Coincident loads add up instead of
    /// overwriting each other.
    fn superpose(&mut self, name: &str, force: f64) {
        self.value += force;
        self.delta = Some(self.delta.unwrap_or(0.0) + force);
        self.is_discontinuity = true;
        self.source = Some(name.to_string());
    }
}

/// An ordered sequence of [`StressResultant`] rows spaced by a fixed section
/// length from `0` to the beam length inclusive.
///
/// Built once per solve call, mutated in place during superposition and
/// integration, read-only afterwards. The rows are exclusively owned by the
/// table and never outlive it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StressResultantTable {
    rows: Vec<StressResultant>,
    section_length_m: f64,
    beam_length_m: f64,
    unit: String,
}

impl StressResultantTable {
    /// Create a table for the given beam, pre-filled with zero-valued rows
    /// at `0, s, 2s, ..., length`.
    pub(crate) fn new(beam: &Beam, section_length_m: f64, unit: &str) -> CalcResult<Self> {
        if !section_length_m.is_finite() || section_length_m <= 0.0 {
            return Err(BeamError::InvalidSectionLength { section_length_m });
        }

        let length_m = beam.length_m();
        let mut rows = Vec::new();
        let mut i = 0usize;
        loop {
            // Multiply instead of accumulating so the step error does not
            // drift and drop the last row.
            let x_m = i as f64 * section_length_m;
            if x_m > length_m + section_length_m * 1e-6 {
                break;
            }
            rows.push(StressResultant::new(x_m));
            i += 1;
        }

        log::trace!(
            "stress-resultant table: {} rows at {} m over {} m [{}]",
            rows.len(),
            section_length_m,
            length_m,
            unit
        );

        Ok(StressResultantTable {
            rows,
            section_length_m,
            beam_length_m: length_m,
            unit: unit.to_string(),
        })
    }

    /// Number of rows in the table
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row at the given index
    pub fn row_at(&self, index: usize) -> &StressResultant {
        &self.rows[index]
    }

    /// All rows, left to right
    pub fn rows(&self) -> &[StressResultant] {
        &self.rows
    }

    /// The fixed spacing between rows in metres
    pub fn section_length_m(&self) -> f64 {
        self.section_length_m
    }

    /// Length of the beam this table samples
    pub fn beam_length_m(&self) -> f64 {
        self.beam_length_m
    }

    /// Unit label of the sampled values (N, kN, Nm, ...)
    pub fn unit(&self) -> &str {
        &self.unit
    }

    /// Index of the row whose half-open interval `[x_i, x_i + s)` contains
    /// the given position. Positions that land on the sampling grid within
    /// rounding error map to their own row.
    fn index_at(&self, x_m: f64) -> usize {
        let ratio = x_m / self.section_length_m;
        let index = if (ratio - ratio.round()).abs() < 1e-6 {
            ratio.round()
        } else {
            ratio.floor()
        };
        (index.max(0.0) as usize).min(self.rows.len() - 1)
    }

    /// Index of the row nearest to the given position
    fn nearest_index(&self, x_m: f64) -> usize {
        let index = (x_m / self.section_length_m).round().max(0.0) as usize;
        index.min(self.rows.len() - 1)
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> &mut StressResultant {
        &mut self.rows[index]
    }

    /// Superpose a concentrated force at the given position.
    ///
    /// The force is added (not overwritten) into the containing row, so
    /// coincident loads superpose; the row is marked as a discontinuity and
    /// records the source name and the accumulated jump.
    pub(crate) fn add_point_force(&mut self, name: &str, x_m: f64, force: f64) {
        let index = self.index_at(x_m);
        self.rows[index].superpose(name, force);
    }

    /// Superpose a distributed load.
    ///
    /// Adds `intensity * section_length` to every row inside the load's
    /// extent and marks the rows nearest the start and end as
    /// discontinuities. For linearly varying loads the start intensity is
    /// used as the per-length value; a smaller step, not a different
    /// formula, is the way to better accuracy here.
    pub(crate) fn add_distributed_load(&mut self, load: &Load) {
        let start_m = load.position_m;
        let end_m = load.end_m();
        let delta_per_section = load.force_at_start_n() * self.section_length_m;
        let tolerance = self.section_length_m * 1e-6;

        for row in &mut self.rows {
            if row.x_m >= start_m - tolerance && row.x_m <= end_m + tolerance {
                row.value += delta_per_section;
            }
        }

        let start_index = self.nearest_index(start_m);
        let end_index = self.nearest_index(end_m);
        // Loads shorter than half a section resolve both bounds to one row;
        // record the jump there once.
        let bound_indices = if start_index == end_index {
            vec![start_index]
        } else {
            vec![start_index, end_index]
        };
        for index in bound_indices {
            let row = &mut self.rows[index];
            row.is_discontinuity = true;
            row.delta = Some(row.delta.unwrap_or(0.0) + delta_per_section);
            row.source = Some(load.name.clone());
        }
    }

    /// Cumulative integration pass shared by the shear and moment solvers:
    /// `row[n+1] += row[n]` left to right, turning "load present at this
    /// section" into "running total up to this position".
    ///
    /// Where the running value strictly changes sign, the first row after
    /// the flip is marked as a zero point; that row is where the causing
    /// load sits. A sample that is exactly zero belongs to its neighbouring
    /// segment and is not a flip.
    pub(crate) fn integrate(&mut self) {
        for n in 0..self.rows.len().saturating_sub(1) {
            let previous = self.rows[n].value;
            self.rows[n + 1].value += previous;
            if previous * self.rows[n + 1].value < 0.0 {
                self.rows[n + 1].is_zero_point = true;
            }
        }
    }

    /// Largest sampled value (upper envelope of the diagram)
    pub fn abs_max(&self) -> f64 {
        self.rows.iter().map(|r| r.value).fold(f64::MIN, f64::max)
    }

    /// Smallest sampled value (lower envelope of the diagram)
    pub fn abs_min(&self) -> f64 {
        self.rows.iter().map(|r| r.value).fold(f64::MAX, f64::min)
    }

    /// Rows flagged as local extrema
    pub fn maxima(&self) -> Vec<&StressResultant> {
        self.rows.iter().filter(|r| r.is_local_extremum).collect()
    }

    /// Rows flagged as discontinuities
    pub fn discontinuities(&self) -> Vec<&StressResultant> {
        self.rows.iter().filter(|r| r.is_discontinuity).collect()
    }

    /// Rows flagged as zero points
    pub fn zero_points(&self) -> Vec<&StressResultant> {
        self.rows.iter().filter(|r| r.is_zero_point).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Beam, Support};
    use approx::assert_relative_eq;

    fn beam(length_m: f64) -> Beam {
        let mut beam = Beam::new(length_m).unwrap();
        beam.add_support(Support::pin("A", 0.0)).unwrap();
        beam.add_support(Support::roller("B", length_m)).unwrap();
        beam
    }

    #[test]
    fn test_rows_span_zero_to_length_inclusive() {
        let table = StressResultantTable::new(&beam(3.0), 0.1, "N").unwrap();
        assert_eq!(table.len(), 31);
        assert_relative_eq!(table.row_at(0).x_m, 0.0);
        assert_relative_eq!(table.row_at(30).x_m, 3.0, epsilon = 1e-9);
    }

    #[test]
    fn test_rejects_degenerate_step() {
        let beam = beam(3.0);
        assert!(StressResultantTable::new(&beam, 0.0, "N").is_err());
        assert!(StressResultantTable::new(&beam, -0.1, "N").is_err());
    }

    #[test]
    fn test_point_force_lands_in_containing_section() {
        let mut table = StressResultantTable::new(&beam(3.0), 0.1, "N").unwrap();
        table.add_point_force("F1", 1.5, -3.0);

        let row = table.row_at(15);
        assert_relative_eq!(row.value, -3.0);
        assert!(row.is_discontinuity);
        assert_eq!(row.source.as_deref(), Some("F1"));
        assert_eq!(row.delta, Some(-3.0));

        // Off-grid position falls into the half-open section to its left
        let mut table = StressResultantTable::new(&beam(3.0), 0.1, "N").unwrap();
        table.add_point_force("F2", 1.55, -2.0);
        assert_relative_eq!(table.row_at(15).value, -2.0);
    }

    #[test]
    fn test_coincident_forces_superpose() {
        let mut table = StressResultantTable::new(&beam(3.0), 0.1, "N").unwrap();
        table.add_point_force("F1", 1.5, -3.0);
        table.add_point_force("F2", 1.5, -2.0);

        let row = table.row_at(15);
        assert_relative_eq!(row.value, -5.0);
        assert_eq!(row.delta, Some(-5.0));
    }

    #[test]
    fn test_distributed_load_covers_extent_and_marks_bounds() {
        let mut table = StressResultantTable::new(&beam(4.0), 0.1, "N").unwrap();
        let q = Load::uniform("q1", -5.0, 1.0, 2.0);
        table.add_distributed_load(&q);

        // -5 N/m * 0.1 m per section over [1.0, 3.0]
        assert_relative_eq!(table.row_at(10).value, -0.5);
        assert_relative_eq!(table.row_at(20).value, -0.5);
        assert_relative_eq!(table.row_at(30).value, -0.5);
        assert_relative_eq!(table.row_at(9).value, 0.0);
        assert_relative_eq!(table.row_at(31).value, 0.0);

        assert!(table.row_at(10).is_discontinuity);
        assert!(table.row_at(30).is_discontinuity);
        assert_eq!(table.discontinuities().len(), 2);
    }

    #[test]
    fn test_short_distributed_load_records_jump_once() {
        // Extent shorter than half a section: both bounds land on the same
        // row, which must carry a single jump, not a doubled one.
        let mut table = StressResultantTable::new(&beam(4.0), 0.1, "N").unwrap();
        let q = Load::uniform("q1", -5.0, 1.0, 0.04);
        table.add_distributed_load(&q);

        let row = table.row_at(10);
        assert!(row.is_discontinuity);
        assert_eq!(row.delta, Some(-0.5));
        assert_eq!(table.discontinuities().len(), 1);
    }

    #[test]
    fn test_integration_is_running_sum() {
        let mut table = StressResultantTable::new(&beam(2.0), 0.5, "N").unwrap();
        table.add_point_force("A", 0.0, 2.0);
        table.add_point_force("F", 1.0, -4.0);
        table.add_point_force("B", 2.0, 2.0);
        table.integrate();

        let values: Vec<f64> = table.rows().iter().map(|r| r.value).collect();
        assert_eq!(values, vec![2.0, 2.0, -2.0, -2.0, 0.0]);
    }

    #[test]
    fn test_zero_point_marked_on_first_row_after_flip() {
        let mut table = StressResultantTable::new(&beam(2.0), 0.5, "N").unwrap();
        table.add_point_force("A", 0.0, 2.0);
        table.add_point_force("F", 1.0, -4.0);
        table.add_point_force("B", 2.0, 2.0);
        table.integrate();

        let zeros = table.zero_points();
        assert_eq!(zeros.len(), 1);
        assert_relative_eq!(zeros[0].x_m, 1.0);
        // Returning to exactly zero at the far end is not a sign flip
        assert!(!table.row_at(4).is_zero_point);
    }

    #[test]
    fn test_envelopes_and_filters() {
        let mut table = StressResultantTable::new(&beam(2.0), 0.5, "N").unwrap();
        table.add_point_force("A", 0.0, 2.0);
        table.add_point_force("F", 1.0, -4.0);
        table.add_point_force("B", 2.0, 2.0);
        table.integrate();

        assert_relative_eq!(table.abs_max(), 2.0);
        assert_relative_eq!(table.abs_min(), -2.0);
        assert_eq!(table.discontinuities().len(), 3);
        assert_eq!(table.unit(), "N");
    }
}
