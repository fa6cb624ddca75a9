//! Phase 1: exhaustive grid search over the search box.
//!
//! Samples a uniform `(steps + 1) x (steps + 1)` lattice, filters with the
//! cheap constraint predicate, and evaluates the lifetime utility only for
//! the survivors. The argmax is reduced in grid-index order with a strict
//! comparison, so repeated runs (parallel or sequential) are bit-identical.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::SolveError;
use crate::model::{EconomicParameters, WealthPair};
use crate::utility::{check_constraints, lifetime_utility};

use super::search_box::SearchBox;

/// Best point found by the grid phase.
#[derive(Debug, Clone, Copy)]
pub(crate) struct GridBest {
    pub pair: WealthPair,
    pub utility: f64,
    /// Number of utility evaluations performed (constraint-failing samples
    /// are skipped before evaluation)
    pub evaluations: usize,
}

fn evaluate_cell(
    params: &EconomicParameters,
    bx: &SearchBox,
    steps: usize,
    idx: usize,
) -> Option<(WealthPair, f64)> {
    let i = idx / (steps + 1);
    let j = idx % (steps + 1);
    let w1 = bx.w1_min + (bx.w1_max - bx.w1_min) * i as f64 / steps as f64;
    let w2 = bx.w2_min + (bx.w2_max - bx.w2_min) * j as f64 / steps as f64;

    if !check_constraints(w1, w2, params) {
        return None;
    }
    Some((WealthPair { w1, w2 }, lifetime_utility(params, w1, w2)))
}

/// Run the grid phase.
///
/// # Errors
/// [`SolveError::SearchExhausted`] when not a single lattice point passed the
/// constraints, i.e. the box contains no feasible point.
pub(crate) fn grid_search(
    params: &EconomicParameters,
    bx: &SearchBox,
    steps: usize,
) -> Result<GridBest, SolveError> {
    let steps = steps.max(1);
    let total = (steps + 1) * (steps + 1);

    #[cfg(feature = "parallel")]
    let cells: Vec<Option<(WealthPair, f64)>> = (0..total)
        .into_par_iter()
        .map(|idx| evaluate_cell(params, bx, steps, idx))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let cells: Vec<Option<(WealthPair, f64)>> = (0..total)
        .map(|idx| evaluate_cell(params, bx, steps, idx))
        .collect();

    let mut best: Option<(WealthPair, f64)> = None;
    let mut evaluations = 0usize;
    for (pair, utility) in cells.into_iter().flatten() {
        evaluations += 1;
        if best.is_none_or(|(_, u)| utility > u) {
            best = Some((pair, utility));
        }
    }

    match best {
        Some((pair, utility)) => Ok(GridBest {
            pair,
            utility,
            evaluations,
        }),
        None => Err(SolveError::SearchExhausted { searched: *bx }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::optimization::search_box::determine_box;

    #[test]
    fn repeated_runs_are_bit_identical() {
        let params = EconomicParameters::default();
        let bx = determine_box(&params, None);

        let a = grid_search(&params, &bx, 60).unwrap();
        let b = grid_search(&params, &bx, 60).unwrap();

        assert_eq!(a.pair.w1.to_bits(), b.pair.w1.to_bits());
        assert_eq!(a.pair.w2.to_bits(), b.pair.w2.to_bits());
        assert_eq!(a.utility.to_bits(), b.utility.to_bits());
        assert_eq!(a.evaluations, b.evaluations);
    }

    #[test]
    fn best_point_lies_inside_the_box() {
        let params = EconomicParameters::default();
        let bx = determine_box(&params, None);
        let best = grid_search(&params, &bx, 40).unwrap();

        assert!(best.pair.w1 >= bx.w1_min && best.pair.w1 <= bx.w1_max);
        assert!(best.pair.w2 >= bx.w2_min && best.pair.w2 <= bx.w2_max);
        assert!(best.utility.is_finite());
    }

    #[test]
    fn infeasible_box_exhausts_the_search() {
        let params = EconomicParameters::default();
        // Every w1 in this box exceeds the zero-consumption maximum.
        let max_w1 = params.max_w1();
        let bx = SearchBox {
            w1_min: max_w1 * 2.0,
            w1_max: max_w1 * 3.0,
            w2_min: 0.5,
            w2_max: 1.0,
            warm: false,
        };

        match grid_search(&params, &bx, 20) {
            Err(SolveError::SearchExhausted { .. }) => {}
            other => panic!("expected SearchExhausted, got {other:?}"),
        }
    }
}
