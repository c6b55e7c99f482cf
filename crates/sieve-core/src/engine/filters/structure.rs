use super::{FilterDecision, RejectReason};
use crate::core::models::structure::Structure;
use crate::engine::config::FilterConfig;

/// Decides whether a whole structure is processed at all.
///
/// A structure is rejected only when it declares a resolution strictly above
/// the ceiling. Absent resolution metadata always passes; the boundary is
/// `>`, not `>=`.
pub fn evaluate_structure(structure: &Structure, config: &FilterConfig) -> FilterDecision {
    match structure.resolution {
        Some(resolution) if resolution > config.max_resolution => {
            FilterDecision::Reject(RejectReason::ResolutionTooLow)
        }
        _ => FilterDecision::Accept,
    }
}
