//! # Solvers
//!
//! The four stages of the beam analysis:
//!
//! - [`reactions`] balances the beam and yields the support reactions
//! - [`shear`] builds the Q(x) diagram from reactions and loads
//! - [`moment`] derives the M(x) diagram from a solved shear table
//! - [`normal`] builds the N(x) diagram from the inclined load components
//!
//! Shear, moment and normal all return a [`crate::table::StressResultantTable`];
//! the reaction solver returns a [`reactions::BeamResult`] that collects
//! validation errors instead of failing on the first one.

pub mod moment;
pub mod normal;
pub mod reactions;
pub mod shear;
