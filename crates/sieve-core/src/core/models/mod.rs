//! # Core Models Module
//!
//! Data structures representing a parsed experimental structure as an
//! ownership tree: a [`structure::Structure`] owns [`structure::Model`]s,
//! which own [`chain::Chain`]s, which own ordered [`residue::Residue`]s.
//!
//! The tree is read-only once built; the [`builder`] assembles it in file
//! order so that residue order within a chain always matches the source.

pub mod atom;
pub mod builder;
pub mod chain;
pub mod residue;
pub mod structure;
