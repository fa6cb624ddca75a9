//! Phase 2: local Nelder-Mead refinement of the grid argmax.
//!
//! Standard simplex descent on the *negated* lifetime utility. The problem is
//! constrained, but the simplex itself runs unconstrained: any vertex that
//! violates the constraints (or evaluates non-finite) is charged a large
//! exterior penalty instead, which pushes the simplex back into the feasible
//! region. Fully deterministic: fixed seed geometry, fixed coefficients, no
//! randomness.

use crate::model::{EconomicParameters, WealthPair};
use crate::utility::{check_constraints, lifetime_utility};

use super::config::OptimizerConfig;

/// Standard Nelder-Mead coefficients
const REFLECTION_COEF: f64 = 1.0;
const EXPANSION_COEF: f64 = 2.0;
const CONTRACTION_COEF: f64 = 0.5;
const SHRINK_COEF: f64 = 0.5;

/// Relative size of the initial simplex around the seed.
const SEED_STEP: f64 = 0.05;
/// Absolute floor for the initial step, for seeds near zero.
const SEED_STEP_MIN: f64 = 1e-4;

#[derive(Debug, Clone, Copy)]
struct Vertex {
    w1: f64,
    w2: f64,
    cost: f64,
}

/// Outcome of an accepted refinement.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Refined {
    pub pair: WealthPair,
    pub utility: f64,
    pub evaluations: usize,
    /// Whether the simplex collapsed below tolerance (as opposed to hitting
    /// the iteration cap)
    pub converged: bool,
}

/// Negated utility with the exterior penalty substituted for any
/// constraint-violating or non-finite point.
fn cost(params: &EconomicParameters, penalty: f64, w1: f64, w2: f64) -> f64 {
    if !check_constraints(w1, w2, params) {
        return penalty;
    }
    let u = lifetime_utility(params, w1, w2);
    if u.is_finite() { -u } else { penalty }
}

fn centroid_of_best_two(simplex: &[Vertex; 3]) -> (f64, f64) {
    (
        (simplex[0].w1 + simplex[1].w1) / 2.0,
        (simplex[0].w2 + simplex[1].w2) / 2.0,
    )
}

/// Largest vertex distance from the centroid of the whole simplex.
fn simplex_size(simplex: &[Vertex; 3]) -> f64 {
    let cx = (simplex[0].w1 + simplex[1].w1 + simplex[2].w1) / 3.0;
    let cy = (simplex[0].w2 + simplex[1].w2 + simplex[2].w2) / 3.0;
    simplex
        .iter()
        .map(|v| ((v.w1 - cx).powi(2) + (v.w2 - cy).powi(2)).sqrt())
        .fold(0.0_f64, f64::max)
}

fn sort_ascending(simplex: &mut [Vertex; 3]) {
    simplex.sort_by(|a, b| {
        a.cost
            .partial_cmp(&b.cost)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
}

/// Refine the grid argmax. Returns `None` when refinement failed to produce
/// a feasible strict improvement; the caller then keeps the grid result
/// unchanged (refinement never regresses the solution).
pub(crate) fn refine(
    params: &EconomicParameters,
    config: &OptimizerConfig,
    seed: WealthPair,
    seed_utility: f64,
) -> Option<Refined> {
    let penalty = config.exterior_penalty;
    let mut evaluations = 0usize;
    let mut eval = |w1: f64, w2: f64| {
        evaluations += 1;
        cost(params, penalty, w1, w2)
    };

    let dx = (seed.w1.abs() * SEED_STEP).max(SEED_STEP_MIN);
    let dy = (seed.w2.abs() * SEED_STEP).max(SEED_STEP_MIN);
    let mut simplex = [
        Vertex {
            w1: seed.w1,
            w2: seed.w2,
            cost: eval(seed.w1, seed.w2),
        },
        Vertex {
            w1: seed.w1 + dx,
            w2: seed.w2,
            cost: eval(seed.w1 + dx, seed.w2),
        },
        Vertex {
            w1: seed.w1,
            w2: seed.w2 + dy,
            cost: eval(seed.w1, seed.w2 + dy),
        },
    ];

    let mut converged = false;
    for _ in 0..config.max_refine_iterations {
        sort_ascending(&mut simplex);

        if simplex_size(&simplex) < config.refine_tolerance {
            converged = true;
            break;
        }

        let (cx, cy) = centroid_of_best_two(&simplex);
        let worst = simplex[2];

        // Reflection
        let rx = cx + REFLECTION_COEF * (cx - worst.w1);
        let ry = cy + REFLECTION_COEF * (cy - worst.w2);
        let rc = eval(rx, ry);

        if rc < simplex[0].cost {
            // Reflected point is the new best: try to expand further out.
            let ex = cx + EXPANSION_COEF * (cx - worst.w1);
            let ey = cy + EXPANSION_COEF * (cy - worst.w2);
            let ec = eval(ex, ey);
            simplex[2] = if ec < rc {
                Vertex { w1: ex, w2: ey, cost: ec }
            } else {
                Vertex { w1: rx, w2: ry, cost: rc }
            };
        } else if rc < simplex[1].cost {
            simplex[2] = Vertex { w1: rx, w2: ry, cost: rc };
        } else {
            // Contract toward the better of (reflected, worst).
            let (px, py) = if rc < worst.cost { (rx, ry) } else { (worst.w1, worst.w2) };
            let kx = cx + CONTRACTION_COEF * (px - cx);
            let ky = cy + CONTRACTION_COEF * (py - cy);
            let kc = eval(kx, ky);

            if kc < worst.cost.min(rc) {
                simplex[2] = Vertex { w1: kx, w2: ky, cost: kc };
            } else {
                // Shrink everything toward the best vertex.
                let best = simplex[0];
                for vertex in simplex.iter_mut().skip(1) {
                    let sx = best.w1 + SHRINK_COEF * (vertex.w1 - best.w1);
                    let sy = best.w2 + SHRINK_COEF * (vertex.w2 - best.w2);
                    *vertex = Vertex { w1: sx, w2: sy, cost: eval(sx, sy) };
                }
            }
        }
    }

    sort_ascending(&mut simplex);
    let best = simplex[0];

    // Accept only a feasible, finite, strict improvement over the seed.
    if best.cost >= penalty {
        return None;
    }
    let pair = WealthPair { w1: best.w1, w2: best.w2 };
    if !check_constraints(pair.w1, pair.w2, params) {
        return None;
    }
    let utility = -best.cost;
    if !utility.is_finite() || utility <= seed_utility {
        return None;
    }

    Some(Refined {
        pair,
        utility,
        evaluations,
        converged,
    })
}
