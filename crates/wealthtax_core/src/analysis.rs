//! Tax-effect sensitivity sweep.
//!
//! Re-optimizes the full model once per tax rate and condenses the sweep
//! into one normalized slope per reported quantity. The sweep goes through
//! the session, so successive rates warm-start each other and repeated
//! sweeps hit the cache.

use serde::{Deserialize, Serialize};

use crate::error::SolveError;
use crate::model::EconomicParameters;
use crate::session::Session;

/// Tax rates covered by the sweep.
pub const SWEEP_TAX_RATES: [f64; 6] = [0.0, 0.1, 0.2, 0.3, 0.4, 0.5];

/// One optimized scenario within the sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepRow {
    pub tau: f64,
    /// Optimal wealth just before the tax event (`w1`)
    pub before_tax_wealth: f64,
    /// Wealth carried into period 2 (`w1 * (1 - tau)`)
    pub after_tax_wealth: f64,
    /// Optimal bequest (`w2`)
    pub bequest: f64,
}

/// Normalized sensitivities: mean finite-difference slope across the sweep,
/// divided by 10 — i.e. the effect of a 10-percentage-point tax change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxEffects {
    pub before_tax_wealth: f64,
    pub after_tax_wealth: f64,
    pub bequest: f64,
    /// The per-rate optima the slopes were computed from
    pub rows: Vec<SweepRow>,
}

/// Run the sweep over [`SWEEP_TAX_RATES`] with all other parameters fixed.
///
/// # Errors
/// Propagates the first [`SolveError`] from any rate in the sweep.
pub fn tax_effect_sweep(
    session: &mut Session,
    base: &EconomicParameters,
) -> Result<TaxEffects, SolveError> {
    let mut rows = Vec::with_capacity(SWEEP_TAX_RATES.len());
    for &tau in &SWEEP_TAX_RATES {
        let result = session.find_optimal_wealth(&base.with_tau(tau))?;
        rows.push(SweepRow {
            tau,
            before_tax_wealth: result.w1,
            after_tax_wealth: result.w1 * (1.0 - tau),
            bequest: result.w2,
        });
    }

    Ok(TaxEffects {
        before_tax_wealth: mean_slope(&rows, |row| row.before_tax_wealth),
        after_tax_wealth: mean_slope(&rows, |row| row.after_tax_wealth),
        bequest: mean_slope(&rows, |row| row.bequest),
        rows,
    })
}

fn mean_slope(rows: &[SweepRow], field: impl Fn(&SweepRow) -> f64) -> f64 {
    let slopes: Vec<f64> = rows
        .windows(2)
        .map(|pair| (field(&pair[1]) - field(&pair[0])) / (pair[1].tau - pair[0].tau))
        .collect();
    let mean = slopes.iter().sum::<f64>() / slopes.len() as f64;
    mean / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_slope_of_a_line_recovers_its_gradient() {
        let rows: Vec<SweepRow> = SWEEP_TAX_RATES
            .iter()
            .map(|&tau| SweepRow {
                tau,
                before_tax_wealth: 2.0 - 3.0 * tau,
                after_tax_wealth: 0.0,
                bequest: 0.0,
            })
            .collect();

        let slope = mean_slope(&rows, |row| row.before_tax_wealth);
        // Gradient -3 per unit tau, so -0.3 per 10 percentage points.
        assert!((slope - (-0.3)).abs() < 1e-12);
    }
}
