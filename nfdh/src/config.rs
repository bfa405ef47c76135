use serde::{Deserialize, Serialize};

/// Configuration for the benchmark sweep
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SweepConfig {
    /// Width of the strip, shared by all cells of the grid
    pub strip_width: f32,
    /// Rectangle counts forming one axis of the grid
    pub n_values: Vec<usize>,
    /// Target height/width ratios forming the other axis
    pub hw_ratios: Vec<f32>,
    /// Number of randomized trials per cell
    pub iterations: usize,
    /// Seed for the PRNG. If undefined, the sweep will run in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            strip_width: 1000.0,
            n_values: vec![10, 50, 100, 500, 1000],
            hw_ratios: vec![0.25, 0.5, 1.0, 2.0, 4.0],
            iterations: 100,
            prng_seed: Some(0),
        }
    }
}
