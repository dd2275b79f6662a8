//! Loads acting on a beam: point loads (optionally inclined) and distributed
//! loads (uniform or linearly varying).
//!
//! ## Sign convention
//!
//! - Vertical: a force acting downwards is negative, upwards is positive.
//! - Horizontal: a force acting from right to left is positive.
//!
//! ## Angle convention
//!
//! Angles are given in degrees, measured clockwise from the vertical. Right
//! side angles range from 0 to 180, left side angles from 0 to -179.
//!
//! - +90: load acting horizontally to the left
//! - +45: load acting diagonally from upper right to lower left
//! - +135: same line of action as +45 but from lower right to upper left
//!
//! A negative load at 180 degrees is the same as a positive load at 0.
//! Distributed loads act vertically only; their angle is always zero.

use serde::{Deserialize, Serialize};

/// What kind of load this is, with its kind-specific parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LoadKind {
    /// A force concentrated at a single position
    Point {
        /// Signed magnitude in newtons (+ up, - down along the load's line
        /// of action)
        magnitude_n: f64,
        /// Angle in degrees, clockwise from vertical
        angle_deg: f64,
    },

    /// A force intensity spread over a length; constant when the start and
    /// end intensities are equal, linearly varying otherwise
    Distributed {
        /// Intensity at the start of the load in N/m
        start_n_per_m: f64,
        /// Intensity at the end of the load in N/m
        end_n_per_m: f64,
        /// Length over which the load acts, in metres (> 0)
        length_m: f64,
    },
}

/// A load acting on a [`Beam`](crate::model::Beam).
///
/// Built by the caller and never mutated by the solvers. Loads are totally
/// ordered by position with ties broken by insertion order, which guarantees
/// deterministic left-to-right processing.
///
/// ## Example
///
/// ```rust
/// use beam_core::model::Load;
///
/// // 3 N downward point load 1.5 m from the left end
/// let f1 = Load::point("F1", -3.0, 1.5, 0.0);
/// assert_eq!(f1.length_m(), 0.0);
///
/// // 5 N/m downward uniform load over 4 m starting at the left end
/// let q1 = Load::uniform("q1", -5.0, 0.0, 4.0);
/// assert_eq!(q1.resultant_force_n(), -20.0);
/// assert_eq!(q1.centroid_offset_m(), 2.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Load {
    /// User label (e.g. "F1", "q1")
    pub name: String,

    /// Distance of the load (start, for distributed loads) from the left
    /// end of the beam in metres
    pub position_m: f64,

    /// Point or distributed, with the kind-specific parameters
    pub kind: LoadKind,
}

impl Load {
    /// Create a point load
    pub fn point(name: impl Into<String>, magnitude_n: f64, position_m: f64, angle_deg: f64) -> Self {
        Load {
            name: name.into(),
            position_m,
            kind: LoadKind::Point {
                magnitude_n,
                angle_deg,
            },
        }
    }

    /// Create a uniformly distributed load
    pub fn uniform(
        name: impl Into<String>,
        intensity_n_per_m: f64,
        position_m: f64,
        length_m: f64,
    ) -> Self {
        Load::varying(name, intensity_n_per_m, intensity_n_per_m, position_m, length_m)
    }

    /// Create a linearly varying distributed load
    pub fn varying(
        name: impl Into<String>,
        start_n_per_m: f64,
        end_n_per_m: f64,
        position_m: f64,
        length_m: f64,
    ) -> Self {
        Load {
            name: name.into(),
            position_m,
            kind: LoadKind::Distributed {
                start_n_per_m,
                end_n_per_m,
                length_m,
            },
        }
    }

    pub fn is_point(&self) -> bool {
        matches!(self.kind, LoadKind::Point { .. })
    }

    /// Length over which the load acts; zero for point loads
    pub fn length_m(&self) -> f64 {
        match self.kind {
            LoadKind::Point { .. } => 0.0,
            LoadKind::Distributed { length_m, .. } => length_m,
        }
    }

    /// Position of the far end of the load's extent. Equals `position_m`
    /// for point loads.
    pub fn end_m(&self) -> f64 {
        self.position_m + self.length_m()
    }

    /// Angle in degrees, clockwise from vertical; zero for distributed loads
    pub fn angle_deg(&self) -> f64 {
        match self.kind {
            LoadKind::Point { angle_deg, .. } => angle_deg,
            LoadKind::Distributed { .. } => 0.0,
        }
    }

    /// Magnitude at the start of the load: the signed point magnitude, or
    /// the start intensity in N/m for distributed loads
    pub fn force_at_start_n(&self) -> f64 {
        match self.kind {
            LoadKind::Point { magnitude_n, .. } => magnitude_n,
            LoadKind::Distributed { start_n_per_m, .. } => start_n_per_m,
        }
    }

    /// Magnitude at the end of the load; equals the start magnitude for
    /// point and uniform loads
    pub fn force_at_end_n(&self) -> f64 {
        match self.kind {
            LoadKind::Point { magnitude_n, .. } => magnitude_n,
            LoadKind::Distributed { end_n_per_m, .. } => end_n_per_m,
        }
    }

    /// Resultant force acting at the centroid.
    ///
    /// For distributed loads this is the trapezoid area of the absolute
    /// intensities, negated when either end intensity is negative. For point
    /// loads it is the signed magnitude.
    pub fn resultant_force_n(&self) -> f64 {
        match self.kind {
            LoadKind::Point { magnitude_n, .. } => magnitude_n,
            LoadKind::Distributed {
                start_n_per_m,
                end_n_per_m,
                length_m,
            } => {
                let mut resultant = (start_n_per_m.abs() + end_n_per_m.abs()) * length_m / 2.0;
                if start_n_per_m < 0.0 || end_n_per_m < 0.0 {
                    resultant = -resultant;
                }
                resultant
            }
        }
    }

    /// Centroid of the load, as an offset from its start position.
    ///
    /// Exact for uniform loads (half the length). For linearly varying loads
    /// this uses the trapezoid centroid formula
    /// `L - L(w_end + 2 w_start) / (3 (w_start + w_end))`, which is an
    /// approximation when the intensities differ in sign; a symmetric
    /// couple (w_start = -w_end) falls back to the midpoint. Point loads
    /// return zero.
    pub fn centroid_offset_m(&self) -> f64 {
        match self.kind {
            LoadKind::Point { .. } => 0.0,
            LoadKind::Distributed {
                start_n_per_m,
                end_n_per_m,
                length_m,
            } => {
                let sum = start_n_per_m + end_n_per_m;
                if sum.abs() < f64::EPSILON {
                    return length_m / 2.0;
                }
                length_m - (length_m * (end_n_per_m + 2.0 * start_n_per_m)) / (3.0 * sum)
            }
        }
    }

    /// Vertical component: `magnitude * cos(angle)` for point loads, the
    /// resultant force for distributed loads
    pub fn vertical_component_n(&self) -> f64 {
        match self.kind {
            LoadKind::Point {
                magnitude_n,
                angle_deg,
            } => magnitude_n * angle_deg.to_radians().cos(),
            LoadKind::Distributed { .. } => self.resultant_force_n(),
        }
    }

    /// Horizontal component, positive when acting from right to left:
    /// `-magnitude * sin(angle)` for point loads, zero for distributed
    /// loads
    pub fn horizontal_component_n(&self) -> f64 {
        match self.kind {
            LoadKind::Point {
                magnitude_n,
                angle_deg,
            } => -magnitude_n * angle_deg.to_radians().sin(),
            LoadKind::Distributed { .. } => 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    #[test]
    fn test_point_load_basics() {
        let f = Load::point("F1", -3.0, 1.5, 0.0);
        assert!(f.is_point());
        assert_eq!(f.length_m(), 0.0);
        assert_eq!(f.end_m(), 1.5);
        assert_eq!(f.resultant_force_n(), -3.0);
        assert_eq!(f.vertical_component_n(), -3.0);
        assert_eq!(f.horizontal_component_n(), 0.0);
        assert_eq!(f.centroid_offset_m(), 0.0);
    }

    #[test]
    fn test_angled_point_load_components() {
        // Scenario: -1.5 N at 45 degrees
        let f = Load::point("F1", -1.5, 1.5, 45.0);
        assert_relative_eq!(f.vertical_component_n(), -1.5 * 45f64.to_radians().cos());
        assert_relative_eq!(f.horizontal_component_n(), 1.5 * 45f64.to_radians().sin());
        // ~ -1.061 N vertical, ~ +1.061 N horizontal
        assert_abs_diff_eq!(f.vertical_component_n(), -1.0607, epsilon = 1e-3);
        assert_abs_diff_eq!(f.horizontal_component_n(), 1.0607, epsilon = 1e-3);
    }

    #[test]
    fn test_left_side_angle_flips_horizontal() {
        let right = Load::point("F1", -1.5, 1.5, 45.0);
        let left = Load::point("F2", -1.5, 1.5, -45.0);
        assert_relative_eq!(
            left.horizontal_component_n(),
            -right.horizontal_component_n()
        );
        assert_relative_eq!(left.vertical_component_n(), right.vertical_component_n());
    }

    #[test]
    fn test_uniform_load_resultant_and_centroid() {
        let q = Load::uniform("q1", -5.0, 0.0, 4.0);
        assert_relative_eq!(q.resultant_force_n(), -20.0);
        assert_relative_eq!(q.centroid_offset_m(), 2.0);
        assert_eq!(q.end_m(), 4.0);
    }

    #[test]
    fn test_triangular_load_resultant_and_centroid() {
        // Zero at start, -6 N/m at end over 3 m: resultant is the triangle
        // area, centroid at two thirds of the length
        let q = Load::varying("q1", 0.0, -6.0, 0.0, 3.0);
        assert_relative_eq!(q.resultant_force_n(), -9.0);
        assert_relative_eq!(q.centroid_offset_m(), 2.0);
    }

    #[test]
    fn test_symmetric_couple_centroid_falls_back_to_midpoint() {
        let q = Load::varying("q1", -5.0, 5.0, 0.0, 2.0);
        assert_relative_eq!(q.centroid_offset_m(), 1.0);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let q = Load::varying("q1", -2.0, -6.0, 1.0, 2.0);
        let json = serde_json::to_string(&q).unwrap();
        let roundtrip: Load = serde_json::from_str(&json).unwrap();
        assert_eq!(q, roundtrip);
    }
}
