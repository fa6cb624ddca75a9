//! Closed-form consumption and wealth path generators.
//!
//! These are queried by the rendering collaborator over the solver's
//! finalized `(w1, w2)`, never inside the optimization loop. Both paths
//! follow from the same plan as the utility: consumption grows at
//! `g = (r - rho) / gamma` from the implied initial level `c0`, and wealth
//! evolves as `W(t) = e^(r*t)*A - c0*(e^(r*t) - e^(g*t)) / kappa`.
//!
//! By construction `W(0) == A` exactly, so the first sample of period 2 is
//! exactly the post-tax wealth `w1*(1-tau)`.

use crate::model::{EconomicParameters, TrajectoryPoint, WealthPair};
use crate::utility::initial_consumption;

/// Default number of samples per period.
pub const DEFAULT_STEPS: usize = 100;

/// A full two-period path, with the tax discontinuity between the segments.
///
/// Period-1 samples run over `t in [0, t1]` and end at `w1`; period-2
/// samples run over `t in [t1, t1 + t2]`, start at `w1*(1-tau)` and end
/// at `w2`.
#[derive(Debug, Clone, PartialEq)]
pub struct LifecyclePath {
    pub period1: Vec<TrajectoryPoint>,
    pub period2: Vec<TrajectoryPoint>,
}

/// Wealth path for a single period from present value `a` to terminal value
/// `b` over `horizon` years, sampled at `steps + 1` equally spaced times.
///
/// `None` when the period is infeasible (same conditions as the utility).
pub fn wealth_path(
    horizon: f64,
    a: f64,
    b: f64,
    r: f64,
    rho: f64,
    gamma: f64,
    steps: usize,
) -> Option<Vec<TrajectoryPoint>> {
    let c0 = initial_consumption(horizon, a, b, r, rho, gamma)?;
    let k = (r * (gamma - 1.0) + rho) / gamma;
    let g = (r - rho) / gamma;
    let steps = steps.max(1);

    let points = (0..=steps)
        .map(|i| {
            let t = horizon * i as f64 / steps as f64;
            let value = (r * t).exp() * a - c0 * ((r * t).exp() - (g * t).exp()) / k;
            TrajectoryPoint { t, value }
        })
        .collect();
    Some(points)
}

/// Consumption path for a single period: `c(t) = c0 * e^(g*t)`.
pub fn consumption_path(
    horizon: f64,
    a: f64,
    b: f64,
    r: f64,
    rho: f64,
    gamma: f64,
    steps: usize,
) -> Option<Vec<TrajectoryPoint>> {
    let c0 = initial_consumption(horizon, a, b, r, rho, gamma)?;
    let g = (r - rho) / gamma;
    let steps = steps.max(1);

    let points = (0..=steps)
        .map(|i| {
            let t = horizon * i as f64 / steps as f64;
            TrajectoryPoint {
                t,
                value: c0 * (g * t).exp(),
            }
        })
        .collect();
    Some(points)
}

/// Two-period wealth trajectory over a finalized solution pair.
pub fn wealth_trajectory(
    params: &EconomicParameters,
    pair: WealthPair,
    steps: usize,
) -> Option<LifecyclePath> {
    let period1 = wealth_path(
        params.t1, params.w0, pair.w1, params.r, params.rho, params.gamma, steps,
    )?;
    let post_tax = pair.w1 * (1.0 - params.tau);
    let mut period2 = wealth_path(
        params.t2, post_tax, pair.w2, params.r, params.rho, params.gamma, steps,
    )?;
    for point in &mut period2 {
        point.t += params.t1;
    }
    Some(LifecyclePath { period1, period2 })
}

/// Two-period consumption trajectory over a finalized solution pair.
pub fn consumption_trajectory(
    params: &EconomicParameters,
    pair: WealthPair,
    steps: usize,
) -> Option<LifecyclePath> {
    let period1 = consumption_path(
        params.t1, params.w0, pair.w1, params.r, params.rho, params.gamma, steps,
    )?;
    let post_tax = pair.w1 * (1.0 - params.tau);
    let mut period2 = consumption_path(
        params.t2, post_tax, pair.w2, params.r, params.rho, params.gamma, steps,
    )?;
    for point in &mut period2 {
        point.t += params.t1;
    }
    Some(LifecyclePath { period1, period2 })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wealth_path_starts_exactly_at_present_value() {
        let path = wealth_path(20.0, 1.0, 1.5, 0.06, 0.04, 0.7, 50).unwrap();
        // W(0) = A with no rounding: e^0 == 1 and the c0 term vanishes.
        assert_eq!(path[0].value, 1.0);
        assert_eq!(path[0].t, 0.0);
    }

    #[test]
    fn wealth_path_ends_at_terminal_value() {
        let path = wealth_path(20.0, 1.0, 1.5, 0.06, 0.04, 0.7, 50).unwrap();
        let last = path.last().unwrap();
        assert!((last.value - 1.5).abs() < 1e-9);
        assert!((last.t - 20.0).abs() < 1e-12);
    }

    #[test]
    fn consumption_stays_positive_and_grows_when_r_exceeds_rho() {
        let path = consumption_path(20.0, 1.0, 1.5, 0.06, 0.04, 0.7, 50).unwrap();
        for window in path.windows(2) {
            assert!(window[0].value > 0.0);
            assert!(window[1].value > window[0].value);
        }
    }

    #[test]
    fn infeasible_period_yields_no_path() {
        // Terminal requirement above the zero-consumption maximum.
        let b = (0.06f64 * 20.0).exp() + 1.0;
        assert!(wealth_path(20.0, 1.0, b, 0.06, 0.04, 0.7, 50).is_none());
        assert!(consumption_path(-1.0, 1.0, 0.5, 0.06, 0.04, 0.7, 50).is_none());
    }

    #[test]
    fn period_two_starts_exactly_at_post_tax_wealth() {
        let params = EconomicParameters::default().with_tau(0.3);
        let pair = WealthPair { w1: 1.8, w2: 0.9 };
        let path = wealth_trajectory(&params, pair, 40).unwrap();

        assert_eq!(path.period2[0].value, pair.w1 * (1.0 - params.tau));
        assert_eq!(path.period2[0].t, params.t1);
    }
}
