//! Random graph generators written against the [`crate::Graph`] contract.
//!
//! Each model has a validated parameter struct that builds an
//! [`crate::EdgeSetGraph`] from an indexed scaffold, and a free function that
//! applies the model to any mutable graph. Randomness is always supplied by
//! the caller, either as an explicit RNG or as a seed.

mod preferential;
mod sampling;
mod small_world;
mod uniform;

pub use self::{
    preferential::{PreferentialParams, attach_preferential},
    sampling::MAX_REJECTIONS,
    small_world::{SmallWorldParams, rewire_ring},
    uniform::{UniformParams, connect_uniform},
};
use crate::error::{GraphError, Result};

/// Seed used when a parameter struct is not given one explicitly.
pub const DEFAULT_SEED: u64 = 0x5EED_CAFE;

fn check_probability(model: &'static str, probability: f64) -> Result<()> {
    if probability.is_finite() && (0.0..=1.0).contains(&probability) {
        Ok(())
    } else {
        Err(GraphError::invalid_shape(
            model,
            format!("probability must lie in [0, 1] (got {probability})"),
        ))
    }
}

/// Re-labels a scaffold shape error with the generator that requested it.
fn renamed(model: &'static str) -> impl Fn(GraphError) -> GraphError {
    move |err| match err {
        GraphError::InvalidShape { reason, .. } => GraphError::InvalidShape {
            shape: model,
            reason,
        },
        other => other,
    }
}
