//! # beam_core - Simply-Supported Beam Statics Engine
//!
//! `beam_core` computes support reactions and internal-force diagrams for a
//! single-span, simply-supported beam under point loads (vertical or
//! inclined) and linearly distributed line loads. All inputs and outputs are
//! JSON-serializable, making the engine easy to drive from a UI, a CLI or a
//! service.
//!
//! ## Design Philosophy
//!
//! - **Stateless**: solvers are pure functions over an immutable [`Beam`]
//! - **JSON-First**: all types implement Serialize/Deserialize
//! - **Rich Errors**: structured error types, not just strings
//! - **Collect, don't bail**: input validation reports every offending load
//!   and support in one pass
//!
//! ## Quick Start
//!
//! ```rust
//! use beam_core::{Beam, Load, Support};
//! use beam_core::solvers::{moment, reactions, shear};
//!
//! // 3 m beam, pin left, roller right, 3 N downward at midspan
//! let mut beam = Beam::new(3.0).unwrap();
//! beam.add_support(Support::pin("A", 0.0)).unwrap();
//! beam.add_support(Support::roller("B", 3.0)).unwrap();
//! beam.add_load(Load::point("F1", -3.0, 1.5, 0.0));
//!
//! let result = reactions::solve(&beam);
//! assert!(result.is_solved());
//! assert!((result.left_reaction_n - 1.5).abs() < 1e-9);
//!
//! let q = shear::solve(&beam, "N").unwrap();
//! let m = moment::solve(&q, &beam, "Nm").unwrap();
//! assert_eq!(m.maxima().len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`model`] - Beam geometry, supports and loads
//! - [`solvers`] - Reaction, shear, moment and normal-force solvers
//! - [`table`] - Discretized diagram rows with structural-feature markers
//! - [`errors`] - Structured error types

pub mod errors;
pub mod model;
pub mod solvers;
pub mod table;

// Re-export commonly used types at crate root for convenience
pub use errors::{BeamCalcError, BeamError, CalcResult};
pub use model::{Beam, Load, LoadKind, Support, SupportKind};
pub use solvers::reactions::BeamResult;
pub use table::{StressResultant, StressResultantTable};
