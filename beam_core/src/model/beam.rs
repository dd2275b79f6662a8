//! The beam itself: a length, exactly two supports, and any number of loads.

use serde::{Deserialize, Serialize};

use crate::errors::{BeamError, CalcResult};
use crate::model::{Load, Support};

/// A simply-supported beam.
///
/// Owns its supports and loads in insertion order; the solvers read the beam
/// and never mutate it. Degenerate geometry (non-positive length, a third
/// support, coincident supports) is rejected at construction time, and
/// deserialization rebuilds the beam through the same constructors, so JSON
/// cannot materialize geometry the builders reject. Whether every load lies
/// inside the beam length is validated per solve, so that a single call can
/// report every offending load at once.
///
/// ## Example
///
/// ```rust
/// use beam_core::model::{Beam, Load, Support};
///
/// let mut beam = Beam::new(3.0).unwrap();
/// beam.add_support(Support::pin("A", 0.0)).unwrap();
/// beam.add_support(Support::roller("B", 3.0)).unwrap();
/// beam.add_load(Load::point("F1", -3.0, 1.5, 0.0));
///
/// assert_eq!(beam.point_load_count(), 1);
/// assert!(beam.contains(1.5));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "BeamData")]
pub struct Beam {
    length_m: f64,
    supports: Vec<Support>,
    loads: Vec<Load>,
}

/// Raw wire form of a [`Beam`]; converted through the validating
/// constructors on deserialization.
#[derive(Deserialize)]
struct BeamData {
    length_m: f64,
    supports: Vec<Support>,
    loads: Vec<Load>,
}

impl TryFrom<BeamData> for Beam {
    type Error = BeamError;

    fn try_from(data: BeamData) -> Result<Self, Self::Error> {
        let mut beam = Beam::new(data.length_m)?;
        for support in data.supports {
            beam.add_support(support)?;
        }
        for load in data.loads {
            beam.add_load(load);
        }
        Ok(beam)
    }
}

impl Beam {
    /// Create a new beam of the given length in metres.
    ///
    /// Fails with [`BeamError::InvalidLength`] unless the length is positive
    /// and finite.
    pub fn new(length_m: f64) -> CalcResult<Self> {
        if !length_m.is_finite() || length_m <= 0.0 {
            return Err(BeamError::InvalidLength { length_m });
        }
        Ok(Beam {
            length_m,
            supports: Vec::new(),
            loads: Vec::new(),
        })
    }

    /// Add a support. A simply-supported beam carries exactly two; a third
    /// support or one coinciding with an existing support is rejected.
    pub fn add_support(&mut self, support: Support) -> CalcResult<()> {
        if self.supports.len() >= 2 {
            return Err(BeamError::TooManySupports);
        }
        if let Some(existing) = self
            .supports
            .iter()
            .find(|s| s.position_m == support.position_m)
        {
            return Err(BeamError::CoincidentSupports {
                x_m: existing.position_m,
            });
        }
        self.supports.push(support);
        Ok(())
    }

    /// Add a load, point or distributed. Whether the load lies inside the
    /// beam length is checked by the solvers, which collect one error per
    /// offending load.
    pub fn add_load(&mut self, load: Load) {
        self.loads.push(load);
    }

    /// Length of the beam in metres
    pub fn length_m(&self) -> f64 {
        self.length_m
    }

    /// Supports in insertion order
    pub fn supports(&self) -> &[Support] {
        &self.supports
    }

    /// Loads in insertion order
    pub fn loads(&self) -> &[Load] {
        &self.loads
    }

    /// Whether a position measured from the left end lies on the beam
    pub fn contains(&self, x_m: f64) -> bool {
        x_m >= 0.0 && x_m <= self.length_m
    }

    /// Loads sorted ascending by distance from the left end of the beam.
    ///
    /// Full-precision comparison with a stable sort: loads closer than a
    /// metre apart keep their relative order correct, and loads at the same
    /// position keep insertion order.
    pub fn loads_sorted(&self) -> Vec<&Load> {
        let mut sorted: Vec<&Load> = self.loads.iter().collect();
        sorted.sort_by(|a, b| a.position_m.total_cmp(&b.position_m));
        sorted
    }

    /// Supports sorted ascending by distance from the left end of the beam,
    /// with the same stable full-precision ordering as [`loads_sorted`].
    ///
    /// [`loads_sorted`]: Beam::loads_sorted
    pub fn supports_sorted(&self) -> Vec<&Support> {
        let mut sorted: Vec<&Support> = self.supports.iter().collect();
        sorted.sort_by(|a, b| a.position_m.total_cmp(&b.position_m));
        sorted
    }

    /// Number of point loads acting on this beam
    pub fn point_load_count(&self) -> usize {
        self.loads.iter().filter(|l| l.is_point()).count()
    }

    /// Number of distributed loads acting on this beam
    pub fn distributed_load_count(&self) -> usize {
        self.loads.iter().filter(|l| !l.is_point()).count()
    }

    /// Magnitude of the biggest load acting on this beam, taking the larger
    /// end intensity for distributed loads. Used by rendering layers for
    /// scaling.
    pub fn max_abs_load_n(&self) -> f64 {
        self.loads
            .iter()
            .map(|l| l.force_at_start_n().abs().max(l.force_at_end_n().abs()))
            .fold(0.0, f64::max)
    }
}
