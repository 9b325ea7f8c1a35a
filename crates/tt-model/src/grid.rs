//! Uniform time grid generation.

use crate::error::{ModelError, ModelResult};

/// Ordered, uniformly spaced sample times covering [0, t_end] inclusive.
#[derive(Clone, Debug, PartialEq)]
pub struct TimeGrid {
    times_s: Vec<f64>,
}

impl TimeGrid {
    /// Generate `n` evenly spaced samples from 0 to `t_end_s` inclusive.
    pub fn uniform(n: usize, t_end_s: f64) -> ModelResult<Self> {
        if n < 2 {
            return Err(ModelError::InvalidArg {
                what: "time grid needs at least 2 samples",
            });
        }
        if !t_end_s.is_finite() || t_end_s <= 0.0 {
            return Err(ModelError::InvalidArg {
                what: "t_end_s must be positive",
            });
        }

        let mut times_s = Vec::with_capacity(n);
        let delta = t_end_s / (n - 1) as f64;
        for i in 0..n {
            times_s.push(i as f64 * delta);
        }
        // Ensure exact endpoint
        times_s[n - 1] = t_end_s;

        Ok(Self { times_s })
    }

    pub fn len(&self) -> usize {
        self.times_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times_s.is_empty()
    }

    /// Spacing between consecutive samples (seconds).
    pub fn dt_s(&self) -> f64 {
        self.times_s[1] - self.times_s[0]
    }

    pub fn t_end_s(&self) -> f64 {
        self.times_s[self.times_s.len() - 1]
    }

    pub fn times_s(&self) -> &[f64] {
        &self.times_s
    }

    /// Sample times in minutes (for plotting).
    pub fn times_min(&self) -> Vec<f64> {
        self.times_s.iter().map(|t| t / 60.0).collect()
    }
}

impl std::ops::Index<usize> for TimeGrid {
    type Output = f64;

    fn index(&self, i: usize) -> &f64 {
        &self.times_s[i]
    }
}
