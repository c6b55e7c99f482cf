//! # Workflows Module
//!
//! High-level entry points that tie the `core` and `engine` layers together.
//!
//! - **Extraction Workflow** ([`extract`]) - walks a directory tree of
//!   compressed structure files, filters structures and chains, and streams
//!   accepted sequences to a FASTA file while accumulating run statistics.

pub mod extract;
