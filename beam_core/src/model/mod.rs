//! Geometry and load model: [`Beam`], [`Support`] and [`Load`] are value
//! types describing the problem. The caller builds them; the solvers read
//! them and never write back.

mod beam;
mod load;
mod support;

pub use beam::Beam;
pub use load::{Load, LoadKind};
pub use support::{Support, SupportKind};
