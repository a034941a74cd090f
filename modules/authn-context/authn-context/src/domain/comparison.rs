//! Assurance-level comparison policies.
//!
//! Each predicate takes `(current_best, candidate)` and answers whether the
//! candidate level replaces the current best. Applied across a scan they move
//! a watermark in the policy's preferred direction; they are not sort
//! comparators.

use authn_context_sdk::Comparison;

/// Policy predicate over `(current_best, candidate)`.
pub type Predicate = fn(u32, u32) -> bool;

/// Candidate level equals the current level.
#[must_use]
pub fn exact(current: u32, candidate: u32) -> bool {
    candidate == current
}

/// Candidate level is at least the current level.
#[must_use]
pub fn minimum(current: u32, candidate: u32) -> bool {
    candidate >= current
}

/// Candidate level is at most the current level.
#[must_use]
pub fn maximum(current: u32, candidate: u32) -> bool {
    candidate <= current
}

/// Candidate level is strictly above the current level.
#[must_use]
pub fn better(current: u32, candidate: u32) -> bool {
    candidate > current
}

/// Predicate implementing `cmp`.
#[must_use]
pub fn predicate(cmp: Comparison) -> Predicate {
    match cmp {
        Comparison::Exact => exact,
        Comparison::Minimum => minimum,
        Comparison::Maximum => maximum,
        Comparison::Better => better,
    }
}
