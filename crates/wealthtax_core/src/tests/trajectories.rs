//! Path generators over finalized solutions
//!
//! These tests verify:
//! - The period-2 wealth path starts exactly at the post-tax wealth
//! - With zero tax the boundary wealth levels coincide
//! - Paths over the solver's own optimum are well defined end to end

use crate::model::EconomicParameters;
use crate::optimization::{OptimizerConfig, solve};
use crate::trajectory::{DEFAULT_STEPS, consumption_trajectory, wealth_trajectory};

#[test]
fn period_two_starts_exactly_at_post_tax_wealth() {
    let params = EconomicParameters::default().with_tau(0.3);
    let result = solve(&params, &OptimizerConfig::default(), None).unwrap();

    let path = wealth_trajectory(&params, result.pair(), DEFAULT_STEPS).unwrap();
    assert_eq!(path.period2[0].value, result.w1 * (1.0 - params.tau));
}

#[test]
fn zero_tax_boundary_wealth_is_continuous() {
    let params = EconomicParameters::default();
    assert_eq!(params.tau, 0.0);
    let result = solve(&params, &OptimizerConfig::default(), None).unwrap();

    let path = wealth_trajectory(&params, result.pair(), DEFAULT_STEPS).unwrap();
    let pre_tax_end = path.period1.last().unwrap().value;
    let post_tax_start = path.period2[0].value;

    // Endpoint of period 1 is w1 up to floating error; start of period 2 is
    // w1 exactly, so the discontinuity collapses when tau = 0.
    assert!((pre_tax_end - post_tax_start).abs() < 1e-9);
}

#[test]
fn trajectories_over_the_optimum_are_complete_and_finite() {
    let params = EconomicParameters::default().with_tau(0.2);
    let result = solve(&params, &OptimizerConfig::default(), None).unwrap();

    let wealth = wealth_trajectory(&params, result.pair(), 50).unwrap();
    let consumption = consumption_trajectory(&params, result.pair(), 50).unwrap();

    assert_eq!(wealth.period1.len(), 51);
    assert_eq!(wealth.period2.len(), 51);
    for point in wealth.period1.iter().chain(&wealth.period2) {
        assert!(point.value.is_finite());
    }
    for point in consumption.period1.iter().chain(&consumption.period2) {
        assert!(point.value > 0.0);
    }

    // Time axes are contiguous across the boundary.
    assert_eq!(wealth.period1.last().unwrap().t, params.t1);
    assert_eq!(wealth.period2[0].t, params.t1);
    let end = wealth.period2.last().unwrap().t;
    assert!((end - (params.t1 + params.t2)).abs() < 1e-9);
}

#[test]
fn wealth_path_ends_at_the_bequest() {
    let params = EconomicParameters::default().with_tau(0.1);
    let result = solve(&params, &OptimizerConfig::default(), None).unwrap();

    let path = wealth_trajectory(&params, result.pair(), 80).unwrap();
    let terminal = path.period2.last().unwrap().value;
    assert!((terminal - result.w2).abs() < 1e-9);
}
