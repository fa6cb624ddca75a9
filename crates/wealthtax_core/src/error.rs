use std::fmt;

use crate::optimization::SearchBox;

/// Errors from the closed-form economic model itself.
///
/// These are structural precondition violations (programming or configuration
/// errors), never something the optimizer produces during a normal search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelError {
    /// `gamma == 0` makes `kappa` undefined
    ZeroRiskAversion,
}

impl fmt::Display for ModelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelError::ZeroRiskAversion => {
                write!(f, "risk aversion coefficient gamma must be nonzero")
            }
        }
    }
}

impl std::error::Error for ModelError {}

/// Errors surfaced by a full solve.
///
/// Infeasible individual wealth pairs never appear here; they are absorbed
/// inside the model as a finite penalty. A refinement failure is also never
/// visible to the caller (the grid result is returned instead).
#[derive(Debug, Clone)]
pub enum SolveError {
    /// No feasible wealth pair anywhere in the computed search box. The
    /// caller may retry with different parameters or report the scenario as
    /// economically infeasible.
    SearchExhausted {
        /// The box that was searched, for diagnostics
        searched: SearchBox,
    },
    /// A structural precondition of the model was violated
    Domain(ModelError),
}

impl fmt::Display for SolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SolveError::SearchExhausted { searched } => {
                write!(
                    f,
                    "no feasible wealth pair in search box w1 in [{:.4}, {:.4}], w2 in [{:.4}, {:.4}]",
                    searched.w1_min, searched.w1_max, searched.w2_min, searched.w2_max
                )
            }
            SolveError::Domain(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for SolveError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SolveError::Domain(e) => Some(e),
            SolveError::SearchExhausted { .. } => None,
        }
    }
}

impl From<ModelError> for SolveError {
    fn from(e: ModelError) -> Self {
        SolveError::Domain(e)
    }
}
