//! TransientModel trait for pluggable dynamic systems.

use crate::error::SimResult;

/// Trait for transient (dynamic) system models.
///
/// A TransientModel must implement:
/// - State type (Clone + Debug, for snapshots and failure reporting)
/// - Initial state
/// - RHS (right-hand side) computation: x_dot = f(t, x)
/// - Scalar field arithmetic for integration: add states, scale by scalar
///
/// The tank state is a single temperature, but the seam stays generic so the
/// same integrators handle arbitrary (even nonlinear) forcing and richer
/// state vectors.
pub trait TransientModel {
    /// State type (must be Clone + Debug).
    type State: Clone + std::fmt::Debug;

    /// Return the initial state at t=0.
    fn initial_state(&self) -> Self::State;

    /// Hook called once per grid interval before integration.
    ///
    /// Models with externally imposed inputs latch them here; the value held
    /// stays constant for the whole sub-interval (zero-order hold). Default
    /// is a no-op for autonomous models.
    fn prepare_step(&mut self, _t_start_s: f64, _t_end_s: f64) -> SimResult<()> {
        Ok(())
    }

    /// Compute state derivative dxdt = f(t, x).
    ///
    /// Note: Takes &mut self to allow models to cache per-interval inputs.
    fn rhs(&mut self, t: f64, x: &Self::State) -> SimResult<Self::State>;

    /// Add two states element-wise: result = a + b.
    fn add(&self, a: &Self::State, b: &Self::State) -> Self::State;

    /// Scale a state by a scalar: result = scale * a.
    fn scale(&self, a: &Self::State, scale: f64) -> Self::State;
}
