//! Search box determination, optionally centered on a warm-start hint.

use serde::{Deserialize, Serialize};

use crate::model::{EconomicParameters, WealthPair};
use crate::utility::check_constraints;

/// Cold-start center as fractions of the maximum feasible `w1`.
const COLD_CENTER_W1: f64 = 0.6;
const COLD_CENTER_W2: f64 = 0.5;

/// Relative box half-widths around the center.
const COLD_RADIUS: f64 = 0.4;
const WARM_RADIUS: f64 = 0.2;

/// Keep-away margin from the degenerate edges of the feasible region.
const EDGE_MARGIN: f64 = 0.01;

/// Rectangular region of `(w1, w2)` space that a single solve will explore.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SearchBox {
    pub w1_min: f64,
    pub w1_max: f64,
    pub w2_min: f64,
    pub w2_max: f64,
    /// Whether the box was centered on a warm-start hint
    pub warm: bool,
}

/// Compute the search box for one solve.
///
/// A hint is only honored when the hinted pair still satisfies the
/// constraints under the *current* parameters; the similarity test against
/// the parameters that produced it has already happened in the warm-start
/// tracker. A stale or newly infeasible hint falls back to the cold box.
pub(crate) fn determine_box(
    params: &EconomicParameters,
    hint: Option<WealthPair>,
) -> SearchBox {
    let max_w1 = params.max_w1();

    let (c1, c2, radius, warm) = match hint {
        Some(pair) if check_constraints(pair.w1, pair.w2, params) => {
            (pair.w1, pair.w2, WARM_RADIUS, true)
        }
        _ => (
            COLD_CENTER_W1 * max_w1,
            COLD_CENTER_W2 * max_w1,
            COLD_RADIUS,
            false,
        ),
    };

    SearchBox {
        w1_min: (c1 * (1.0 - radius)).max(EDGE_MARGIN),
        w1_max: (c1 * (1.0 + radius)).min(max_w1 - EDGE_MARGIN),
        w2_min: (c2 * (1.0 - radius)).max(EDGE_MARGIN),
        // The bequest axis gets extra headroom above the center.
        w2_max: (c2 * (1.0 + 2.0 * radius)).min(max_w1 * 3.0),
        warm,
    }
}
