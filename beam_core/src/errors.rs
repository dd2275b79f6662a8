//! # Error Types
//!
//! Two tiers of errors, matching how the solvers report problems:
//!
//! - [`BeamError`] is fatal. Degenerate geometry (non-positive beam length,
//!   a third support, zero support span, a non-positive section step) is
//!   rejected up front instead of propagating NaN or infinity through the
//!   solvers. The normal-force solver also fails fatally when the beam has
//!   no pin support, so callers cannot mistake "no pin" for "zero normal
//!   force everywhere".
//! - [`BeamCalcError`] is collected. Validation of loads and supports never
//!   short-circuits: one solve reports every offender, each tagged with the
//!   index of the element in the beam's insertion-ordered list.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::BeamCalcError;
//!
//! let error = BeamCalcError::load(0, "load acts 5 m from left end, beam is 4 m long");
//! assert_eq!(error.index(), 0);
//! assert!(error.is_load_error());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, BeamError>;

/// Fatal error type for construction and solver operations.
///
/// Each variant provides specific context about what went wrong. The engine
/// is deterministic and stateless, so none of these are recoverable by
/// retrying: the same input always produces the same error.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// Beam length must be a positive, finite number of metres
    #[error("Beam length must be positive, got {length_m} m")]
    InvalidLength { length_m: f64 },

    /// A simply-supported beam carries exactly two supports
    #[error("Beam already has two supports; statically indeterminate configurations are not supported")]
    TooManySupports,

    /// Both supports at the same position would give a zero support span
    #[error("Supports coincide at x = {x_m} m; support span would be zero")]
    CoincidentSupports { x_m: f64 },

    /// Table step must be a positive, finite number of metres
    #[error("Section length must be positive, got {section_length_m} m")]
    InvalidSectionLength { section_length_m: f64 },

    /// Normal-force analysis references N(x) = 0 at the pin support
    #[error("Normal-force analysis needs a pin support; this beam has none")]
    NoPinSupport,

    /// A diagram solver ran the reaction solver and it reported validation
    /// errors; the collected errors are carried along
    #[error("Reactions could not be solved; {} validation error(s)", errors.len())]
    ReactionsUnsolved { errors: Vec<BeamCalcError> },
}

/// A collected validation finding.
///
/// Carries the index of the offending element in the beam's load or support
/// list (insertion order) and a plain-text description. Accumulated into
/// [`BeamResult`](crate::solvers::reactions::BeamResult); once any of these
/// exist, the reaction fields stay at zero and must not be read.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "origin", content = "details")]
pub enum BeamCalcError {
    /// A load or its extent lies outside the beam length
    #[error("Load #{index}: {description}")]
    Load { index: usize, description: String },

    /// A support lies outside the beam length, or the support count is wrong
    #[error("Support #{index}: {description}")]
    Support { index: usize, description: String },
}

impl BeamCalcError {
    /// Create a load validation error
    pub fn load(index: usize, description: impl Into<String>) -> Self {
        BeamCalcError::Load {
            index,
            description: description.into(),
        }
    }

    /// Create a support validation error
    pub fn support(index: usize, description: impl Into<String>) -> Self {
        BeamCalcError::Support {
            index,
            description: description.into(),
        }
    }

    /// Index of the offending load or support in its insertion-ordered list
    pub fn index(&self) -> usize {
        match self {
            BeamCalcError::Load { index, .. } => *index,
            BeamCalcError::Support { index, .. } => *index,
        }
    }

    /// Plain-text description of the problem
    pub fn description(&self) -> &str {
        match self {
            BeamCalcError::Load { description, .. } => description,
            BeamCalcError::Support { description, .. } => description,
        }
    }

    pub fn is_load_error(&self) -> bool {
        matches!(self, BeamCalcError::Load { .. })
    }

    pub fn is_support_error(&self) -> bool {
        matches!(self, BeamCalcError::Support { .. })
    }
}
