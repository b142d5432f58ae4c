//! Bounded rejection sampling shared by the generators.
//!
//! Every draw first checks that enough eligible targets remain, then tries
//! up to [`MAX_REJECTIONS`] cheap rejection draws before enumerating the
//! eligible set explicitly. Both phases consume the caller's RNG, so a fixed
//! seed reproduces the same choices.

use std::collections::HashSet;

use rand::Rng;
use tracing::{debug, trace};

use crate::error::{GraphError, Result};

/// Consecutive rejected draws tolerated before sampling switches to the
/// enumerated eligible set.
pub const MAX_REJECTIONS: usize = 64;

/// Draws a node uniformly from `0..candidates`, skipping `excluded`.
///
/// `required` is the number of targets `node` still needs, counting this
/// draw, and is only used to decide satisfiability.
pub(super) fn draw_uniform<R: Rng + ?Sized>(
    rng: &mut R,
    node: usize,
    candidates: usize,
    excluded: &HashSet<usize>,
    required: usize,
) -> Result<usize> {
    let blocked = excluded.iter().filter(|&&other| other < candidates).count();
    let available = candidates - blocked;
    if available < required || available == 0 {
        return Err(GraphError::Unsatisfiable {
            node,
            required,
            available,
        });
    }
    for attempt in 0..MAX_REJECTIONS {
        let target = rng.gen_range(0..candidates);
        if !excluded.contains(&target) {
            return Ok(target);
        }
        trace!(node, target, attempt, "rejected ineligible target");
        record_resample();
    }
    debug!(node, available, "falling back to enumerated targets");
    record_fallback();
    let eligible: Vec<usize> = (0..candidates)
        .filter(|target| !excluded.contains(target))
        .collect();
    eligible
        .get(rng.gen_range(0..eligible.len()))
        .copied()
        .ok_or(GraphError::Unsatisfiable {
            node,
            required,
            available: 0,
        })
}

/// Picks the node whose cumulative weight first exceeds `draw`.
///
/// `weights` yields `(node, weight)` pairs in a fixed order.
pub(super) fn pick_weighted(
    weights: impl IntoIterator<Item = (usize, usize)>,
    draw: usize,
) -> Option<usize> {
    let mut cumulative = 0_usize;
    for (node, weight) in weights {
        cumulative += weight;
        if draw < cumulative {
            return Some(node);
        }
    }
    None
}

#[cfg(feature = "metrics")]
pub(super) fn record_resample() {
    metrics::counter!("generator_resample_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(super) fn record_resample() {}

#[cfg(feature = "metrics")]
pub(super) fn record_fallback() {
    metrics::counter!("generator_fallback_total").increment(1);
}

#[cfg(not(feature = "metrics"))]
pub(super) fn record_fallback() {}
