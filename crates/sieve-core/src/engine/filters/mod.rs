//! Filter predicates and their shared decision type.
//!
//! [`structure`] decides whole-file rejection before any chain is looked at;
//! [`chain`] applies the per-chain checks in a fixed short-circuit order;
//! [`gaps`] is the backbone-continuity heuristic the chain filter delegates to.

pub mod chain;
pub mod gaps;
pub mod structure;

use std::fmt;

/// Why a structure or chain was excluded from the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    /// Fewer standard residues than the configured minimum.
    TooShort,
    /// At least one residue carries the unknown-identity sentinel name.
    ContainsUnknown,
    /// The backbone continuity check reported a break.
    HasGap,
    /// Declared resolution is above the configured ceiling.
    ResolutionTooLow,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RejectReason::TooShort => "chain too short",
            RejectReason::ContainsUnknown => "contains UNK residues",
            RejectReason::HasGap => "broken backbone",
            RejectReason::ResolutionTooLow => "resolution above ceiling",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of running a filter over one structure or chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterDecision {
    Accept,
    Reject(RejectReason),
}
