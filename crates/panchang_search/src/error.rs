//! Error type for panchang searches.

use thiserror::Error;

use crate::lunar_phase_types::{LunarPhase, SearchDirection};

/// Errors from root-finding, moon-phase search and calendar derivation.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// A caller-supplied argument was out of range or non-finite.
    #[error("invalid input: {0}")]
    InvalidInput(&'static str),

    /// A configuration struct failed validation.
    #[error("invalid config: {0}")]
    InvalidConfig(&'static str),

    /// The root-finder exhausted its iteration budget.
    #[error(
        "no convergence after {iterations} iterations \
         (last jd {last_jd:.6}, residual {residual_deg:.6} deg)"
    )]
    NoConvergence {
        /// Last Newton estimate reached.
        last_jd: f64,
        iterations: u32,
        /// Signed angular error at `last_jd`, degrees.
        residual_deg: f64,
    },

    /// A converged root landed on the wrong side of the query even after the retry.
    #[error("{} not found searching {}", phase.name(), direction.name())]
    PhaseNotFound {
        phase: LunarPhase,
        direction: SearchDirection,
    },
}
