//! Integration tests for the lifecycle wealth-tax optimizer
//!
//! Tests are organized by topic:
//! - `solver` - End-to-end optimization properties
//! - `caching` - Session cache and warm-start behavior
//! - `trajectories` - Path generators over finalized solutions

mod trajectories;
