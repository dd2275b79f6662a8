//! Supports for a simply-supported beam.

use serde::{Deserialize, Serialize};

/// How a support restrains the beam.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SupportKind {
    /// Restrains vertical and horizontal movement. The normal force N(x) is
    /// referenced to zero at the pin.
    Pin,
    /// Restrains vertical movement only.
    Roller,
}

/// A support, positioned by its distance from the left end of the beam.
///
/// Supports are totally ordered by position with ties broken by insertion
/// order; see [`Beam::supports_sorted`](crate::model::Beam::supports_sorted).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Support {
    /// User label (e.g. "A", "Left bearing")
    pub name: String,

    /// Distance from the left end of the beam in metres
    pub position_m: f64,

    /// Pin or roller
    pub kind: SupportKind,
}

impl Support {
    /// Create a new support
    pub fn new(name: impl Into<String>, position_m: f64, kind: SupportKind) -> Self {
        Support {
            name: name.into(),
            position_m,
            kind,
        }
    }

    /// Create a pin support
    pub fn pin(name: impl Into<String>, position_m: f64) -> Self {
        Support::new(name, position_m, SupportKind::Pin)
    }

    /// Create a roller support
    pub fn roller(name: impl Into<String>, position_m: f64) -> Self {
        Support::new(name, position_m, SupportKind::Roller)
    }

    pub fn is_pin(&self) -> bool {
        self.kind == SupportKind::Pin
    }
}
