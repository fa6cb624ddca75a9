//! Closed-form utility and feasibility model.
//!
//! Everything in this module is a pure function of its inputs. The solver
//! calls [`check_constraints`] and [`lifetime_utility`] millions of times per
//! session, so infeasible inputs are reported through return values (`None`
//! or a finite penalty), never through errors or non-finite floats.

use crate::error::ModelError;
use crate::model::EconomicParameters;

/// Finite penalty substituted for any infeasible lifetime-utility evaluation
/// so downstream optimizers can keep operating on ordinary floats.
///
/// An extreme scenario (very large `beta`, very long horizons) could in
/// principle push a legitimate utility below this value, which would make the
/// optimizer treat a real feasible point as infeasible. The constant matches
/// the original calibration and is kept as-is.
pub const INFEASIBLE_UTILITY: f64 = -5000.0;

/// Floor applied to the bequest argument before taking fractional powers.
const BEQUEST_EPSILON: f64 = 1e-10;

/// Effective discount rate of the consumption plan:
/// `kappa = (r*(gamma-1) + rho) / gamma`.
///
/// # Errors
/// [`ModelError::ZeroRiskAversion`] when `gamma == 0`.
pub fn kappa(r: f64, rho: f64, gamma: f64) -> Result<f64, ModelError> {
    if gamma == 0.0 {
        return Err(ModelError::ZeroRiskAversion);
    }
    Ok((r * (gamma - 1.0) + rho) / gamma)
}

/// Utility of optimally depleting resources from present value `a` down to a
/// required terminal value `b` over a horizon of `t` years, under CRRA
/// preferences with coefficient `gamma` (log utility at `gamma == 1`).
///
/// Returns `None` when the inputs are infeasible:
/// - `t <= 0` (no horizon to consume over), or `gamma == 0`;
/// - `e^(r*t)*a - b <= 0` (resources cannot cover the terminal requirement);
/// - `e^(r*t) - e^((r-rho)*t/gamma) <= 0` (consumption growth outruns the
///   return on wealth, so no positive consumption plan exists);
/// - any non-finite intermediate (fractional powers of negative bases would
///   be complex and surface as NaN).
pub fn period_utility(t: f64, a: f64, b: f64, r: f64, rho: f64, gamma: f64) -> Option<f64> {
    if t <= 0.0 || gamma == 0.0 {
        return None;
    }

    let growth = (r * t).exp();
    let term1 = growth * a - b;
    let term2 = growth - ((r - rho) * t / gamma).exp();
    if term1 <= 0.0 || term2 <= 0.0 {
        return None;
    }

    let k = (r * (gamma - 1.0) + rho) / gamma;
    let utility = if gamma == 1.0 {
        term1.ln() * (1.0 - (-k * t).exp()) / k - term2.ln()
    } else {
        term1.powf(1.0 - gamma) * (1.0 - (-k * t).exp()) * k.powf(-gamma)
            / ((1.0 - gamma) * term2.powf(1.0 - gamma))
    };

    utility.is_finite().then_some(utility)
}

/// Implied constant-growth initial consumption rate for one period:
/// `c0 = kappa * term1 / term2`. Shares the feasibility conditions of
/// [`period_utility`]; used only by the trajectory generators.
pub fn initial_consumption(t: f64, a: f64, b: f64, r: f64, rho: f64, gamma: f64) -> Option<f64> {
    if t <= 0.0 || gamma == 0.0 {
        return None;
    }

    let growth = (r * t).exp();
    let term1 = growth * a - b;
    let term2 = growth - ((r - rho) * t / gamma).exp();
    if term1 <= 0.0 || term2 <= 0.0 {
        return None;
    }

    let k = (r * (gamma - 1.0) + rho) / gamma;
    let c0 = k * term1 / term2;
    (c0.is_finite() && c0 > 0.0).then_some(c0)
}

/// Total lifetime utility of the hinge pair `(w1, w2)`: period-1 consumption
/// utility, discounted period-2 consumption utility starting from the
/// post-tax wealth `w1*(1-tau)`, plus bequest utility of `w2`.
///
/// Any infeasibility anywhere in the chain yields [`INFEASIBLE_UTILITY`],
/// never NaN or an infinity.
pub fn lifetime_utility(params: &EconomicParameters, w1: f64, w2: f64) -> f64 {
    let Some(u1) = period_utility(params.t1, params.w0, w1, params.r, params.rho, params.gamma)
    else {
        return INFEASIBLE_UTILITY;
    };

    let post_tax = w1 * (1.0 - params.tau);
    let Some(u2) = period_utility(params.t2, post_tax, w2, params.r, params.rho, params.gamma)
    else {
        return INFEASIBLE_UTILITY;
    };

    if w2 <= 0.0 {
        return INFEASIBLE_UTILITY;
    }
    let terminal = w2.max(BEQUEST_EPSILON);
    let bequest = if params.eta == 1.0 {
        params.beta * terminal.ln()
    } else {
        params.beta * terminal.powf(1.0 - params.eta) / (1.0 - params.eta)
    };

    let total = u1 + (-params.rho * params.t1).exp() * u2 + bequest;
    if total.is_finite() {
        total
    } else {
        INFEASIBLE_UTILITY
    }
}

/// Cheap feasibility predicate evaluated before the utility itself:
/// both wealth levels positive, `w1` below the zero-consumption maximum
/// `w0*e^(r*t1)`, and `w2` below the maximum bequest reachable from the
/// post-tax starting wealth.
#[must_use]
pub fn check_constraints(w1: f64, w2: f64, params: &EconomicParameters) -> bool {
    w1 > 0.0
        && w2 > 0.0
        && w1 < params.w0 * (params.r * params.t1).exp()
        && w2 < w1 * (1.0 - params.tau) * (params.r * params.t2).exp()
}
