//! Two-phase optimizer for the hinge wealth pair.
//!
//! A single call runs the pipeline
//! `DetermineBox -> GridSearch -> Refine -> Finalize`:
//!
//! 1. **DetermineBox** bounds the `(w1, w2)` search space, narrowed and
//!    centered on a warm-start hint when one is available and still valid.
//! 2. **GridSearch** exhaustively samples a uniform lattice over the box and
//!    finds the approximate global optimum. The objective is non-concave in
//!    places, so this phase cannot be skipped.
//! 3. **Refine** polishes the grid argmax with a deterministic Nelder-Mead
//!    descent, using an exterior penalty in place of hard constraints. A
//!    refinement that fails or fails to improve is silently discarded.
//! 4. **Finalize** packages the result; the caller never sees NaN or an
//!    infinity in any field.
//!
//! # Example
//!
//! ```ignore
//! use wealthtax_core::model::EconomicParameters;
//! use wealthtax_core::optimization::{solve, OptimizerConfig};
//!
//! let result = solve(&EconomicParameters::default(), &OptimizerConfig::default(), None)?;
//! println!("optimal pre-tax wealth: {:.4}", result.w1);
//! ```

mod config;
mod grid_search;
mod nelder_mead;
mod result;
mod search_box;

pub use config::OptimizerConfig;
pub use result::{Convergence, OptimizationResult, SolveMethod};
pub use search_box::SearchBox;

use tracing::debug;

use crate::error::{ModelError, SolveError};
use crate::model::{EconomicParameters, WealthPair};

/// Run one full solve. Pure: no cache, no warm-start state — sessions layer
/// those on top (see [`crate::session::Session`]).
///
/// # Errors
/// - [`SolveError::Domain`] when `gamma == 0`;
/// - [`SolveError::SearchExhausted`] when the search box contains no feasible
///   wealth pair.
pub fn solve(
    params: &EconomicParameters,
    config: &OptimizerConfig,
    hint: Option<WealthPair>,
) -> Result<OptimizationResult, SolveError> {
    if params.gamma == 0.0 {
        return Err(ModelError::ZeroRiskAversion.into());
    }

    let bx = search_box::determine_box(params, hint);
    let steps = if bx.warm {
        config.warm_grid_steps
    } else {
        config.grid_steps
    };
    debug!(warm = bx.warm, steps, "starting grid search");

    let grid = grid_search::grid_search(params, &bx, steps)?;
    debug!(
        w1 = grid.pair.w1,
        w2 = grid.pair.w2,
        utility = grid.utility,
        evaluations = grid.evaluations,
        "grid argmax"
    );

    match nelder_mead::refine(params, config, grid.pair, grid.utility) {
        Some(refined) => Ok(OptimizationResult {
            w1: refined.pair.w1,
            w2: refined.pair.w2,
            utility: refined.utility,
            iterations: grid.evaluations + refined.evaluations,
            convergence: Convergence::Converged,
            method: SolveMethod::NelderMead,
            cache_hit: false,
        }),
        // Refinement failures are absorbed; the caller only ever sees a
        // grid-only result.
        None => Ok(OptimizationResult {
            w1: grid.pair.w1,
            w2: grid.pair.w2,
            utility: grid.utility,
            iterations: grid.evaluations,
            convergence: Convergence::GridOnly,
            method: SolveMethod::GridSearch,
            cache_hit: false,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_gamma_is_a_domain_error() {
        let params = EconomicParameters {
            gamma: 0.0,
            ..EconomicParameters::default()
        };
        match solve(&params, &OptimizerConfig::default(), None) {
            Err(SolveError::Domain(ModelError::ZeroRiskAversion)) => {}
            other => panic!("expected domain error, got {other:?}"),
        }
    }

    #[test]
    fn solve_result_has_finite_fields_and_no_cache_flag() {
        let result = solve(
            &EconomicParameters::default(),
            &OptimizerConfig::default(),
            None,
        )
        .unwrap();
        assert!(result.w1.is_finite());
        assert!(result.w2.is_finite());
        assert!(result.utility.is_finite());
        assert!(result.iterations > 0);
        assert!(!result.cache_hit);
    }

    #[test]
    fn warm_hint_shrinks_the_evaluation_budget() {
        let params = EconomicParameters::default();
        let config = OptimizerConfig::default();

        let cold = solve(&params, &config, None).unwrap();
        let warm = solve(&params, &config, Some(cold.pair())).unwrap();

        assert!(warm.iterations < cold.iterations);
        // The warm solve stays in the same neighborhood.
        assert!((warm.w1 - cold.w1).abs() / cold.w1 < 0.25);
    }
}
