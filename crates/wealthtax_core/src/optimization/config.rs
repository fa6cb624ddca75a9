//! Solver configuration.

use serde::{Deserialize, Serialize};

/// Tuning knobs for the two-phase solver.
///
/// The defaults reproduce the reference behavior: a 101x101 grid on a cold
/// start, 51x51 when a warm-start hint has already narrowed the box, and a
/// tight, heavily capped Nelder-Mead polish.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizerConfig {
    /// Grid steps per axis on a cold start (the grid has `steps + 1`
    /// samples per axis)
    #[serde(default = "default_grid_steps")]
    pub grid_steps: usize,

    /// Grid steps per axis when the search box is centered on a warm-start
    /// hint
    #[serde(default = "default_warm_grid_steps")]
    pub warm_grid_steps: usize,

    /// Simplex-size tolerance that terminates the refinement phase
    #[serde(default = "default_refine_tolerance")]
    pub refine_tolerance: f64,

    /// Iteration cap for the refinement phase
    #[serde(default = "default_max_refine_iterations")]
    pub max_refine_iterations: usize,

    /// Exterior penalty substituted for constraint-violating or non-finite
    /// evaluations during refinement
    #[serde(default = "default_exterior_penalty")]
    pub exterior_penalty: f64,
}

fn default_grid_steps() -> usize {
    100
}

fn default_warm_grid_steps() -> usize {
    50
}

fn default_refine_tolerance() -> f64 {
    1e-12
}

fn default_max_refine_iterations() -> usize {
    1000
}

fn default_exterior_penalty() -> f64 {
    1e10
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            grid_steps: default_grid_steps(),
            warm_grid_steps: default_warm_grid_steps(),
            refine_tolerance: default_refine_tolerance(),
            max_refine_iterations: default_max_refine_iterations(),
            exterior_penalty: default_exterior_penalty(),
        }
    }
}
