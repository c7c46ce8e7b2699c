//! The hosting session: one current state, mutated strictly in call order.
//!
//! A session exclusively owns its [`BlochVector`]. Every operation takes
//! `&mut self`, so updates are serialized by the borrow checker; a host that
//! shares a session across threads wraps it in a `Mutex`.
//!
//! The reset epoch is the notification a view layer watches to zero its
//! dependent controls (sliders and the like). It lives on the session, not
//! on the state vector.
//!
//! # Example
//!
//! ```rust
//! use bloch_core::{Axis, BlochSession};
//!
//! let mut session = BlochSession::new();
//! session.apply_gate("H");
//! session.rotate(Axis::Z, 90.0);
//!
//! let snap = session.snapshot();
//! assert!((snap.y - 1.0).abs() < 1e-9);
//! assert!((snap.phi_deg - 90.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::action::Action;
use crate::amplitude::AmplitudePair;
use crate::gate::Gate;
use crate::rotation::{Axis, rotate};
use crate::states::NamedState;
use crate::vector::{BlochVector, normalize};

/// Tunables for a session.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SessionOptions {
    /// Clamp rotation deltas to `[-limit, limit]` degrees before applying.
    /// `None` applies deltas as given.
    #[serde(default)]
    pub clamp_degrees: Option<f64>,
}

/// Read-only view of the session state, as a display layer consumes it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StateSnapshot {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component.
    pub z: f64,
    /// Polar angle in degrees, `[0, 180]`.
    pub theta_deg: f64,
    /// Azimuth in degrees, `[0, 360)`.
    pub phi_deg: f64,
    /// Display radius, always 1.
    pub radius: f64,
    /// Probability of measuring |0⟩.
    pub p0: f64,
    /// Probability of measuring |1⟩.
    pub p1: f64,
    /// Number of resets so far.
    pub reset_epoch: u64,
}

/// A single-qubit session.
#[derive(Debug, Clone, Default)]
pub struct BlochSession {
    state: BlochVector,
    reset_epoch: u64,
    options: SessionOptions,
}

impl BlochSession {
    /// New session at |0⟩.
    pub fn new() -> Self {
        Self::default()
    }

    /// New session at |0⟩ with the given options.
    pub fn with_options(options: SessionOptions) -> Self {
        Self {
            options,
            ..Self::default()
        }
    }

    /// Start from a specific state instead of |0⟩.
    #[must_use]
    pub fn starting_at(mut self, state: BlochVector) -> Self {
        self.state = state;
        self
    }

    /// Current state.
    #[inline]
    pub fn state(&self) -> BlochVector {
        self.state
    }

    /// Number of resets performed.
    #[inline]
    pub fn reset_epoch(&self) -> u64 {
        self.reset_epoch
    }

    /// Session options.
    #[inline]
    pub fn options(&self) -> &SessionOptions {
        &self.options
    }

    /// Current amplitudes, with `alpha` real.
    pub fn amplitudes(&self) -> AmplitudePair {
        AmplitudePair::from_vector(&self.state)
    }

    /// Rotate about `axis` by `degrees`.
    ///
    /// A non-finite delta changes nothing. Returns the delta actually applied.
    pub fn rotate(&mut self, axis: Axis, degrees: f64) -> Option<f64> {
        if !degrees.is_finite() {
            warn!(%axis, degrees, "ignoring non-finite rotation delta");
            return None;
        }

        let applied = match self.options.clamp_degrees {
            Some(limit) if limit.is_finite() && limit >= 0.0 && degrees.abs() > limit => {
                let clamped = degrees.clamp(-limit, limit);
                warn!(%axis, requested = degrees, clamped, "rotation delta clamped");
                clamped
            }
            _ => degrees,
        };

        self.state = rotate(&self.state, axis, applied);
        debug!(%axis, degrees = applied, state = %self.state, "rotate");
        Some(applied)
    }

    /// Apply the gate named by `token`. Unknown tokens leave the state as is
    /// and return `None`.
    pub fn apply_gate(&mut self, token: &str) -> Option<Gate> {
        let gate = Gate::from_token(token);
        match gate {
            Some(g) => {
                self.state = g.apply(&self.state);
                debug!(gate = %g, state = %self.state, "gate");
            }
            None => debug!(token, "unknown gate token, state unchanged"),
        }
        gate
    }

    /// Replace the state with a raw triple, normalized.
    pub fn set_absolute(&mut self, x: f64, y: f64, z: f64) {
        self.state = normalize(x, y, z);
        debug!(x, y, z, state = %self.state, "set absolute");
    }

    /// Replace the state with a named basis state.
    pub fn set_named(&mut self, named: NamedState) {
        self.state = named.vector();
        debug!(%named, state = %self.state, "set named");
    }

    /// Return to |0⟩ and advance the reset epoch.
    pub fn reset(&mut self) {
        self.state = BlochVector::ZERO;
        self.reset_epoch += 1;
        debug!(epoch = self.reset_epoch, "reset");
    }

    /// Dispatch an [`Action`].
    pub fn apply(&mut self, action: &Action) {
        match action {
            Action::Rotate { axis, degrees } => {
                self.rotate(*axis, *degrees);
            }
            Action::Gate { token } => {
                self.apply_gate(token);
            }
            Action::Set { x, y, z } => self.set_absolute(*x, *y, *z),
            Action::Named { state } => self.set_named(*state),
            Action::Reset => self.reset(),
        }
    }

    /// Derived readout, recomputed on every call.
    pub fn snapshot(&self) -> StateSnapshot {
        let [x, y, z] = self.state.components();
        let (p0, p1) = self.amplitudes().probabilities();
        StateSnapshot {
            x,
            y,
            z,
            theta_deg: self.state.polar_degrees(),
            phi_deg: self.state.azimuth_degrees(),
            radius: self.state.radius(),
            p0,
            p1,
            reset_epoch: self.reset_epoch,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-9;

    #[test]
    fn test_starts_at_north_pole() {
        let session = BlochSession::new();
        assert_eq!(session.state(), BlochVector::ZERO);
        assert_eq!(session.reset_epoch(), 0);
    }

    #[test]
    fn test_reset_bumps_epoch() {
        let mut session = BlochSession::new();
        session.apply_gate("X");
        session.reset();
        session.reset();
        assert_eq!(session.state(), BlochVector::ZERO);
        assert_eq!(session.reset_epoch(), 2);
    }

    #[test]
    fn test_non_finite_rotation_is_ignored() {
        let mut session = BlochSession::new().starting_at(BlochVector::new(1.0, 0.0, 0.0));
        assert_eq!(session.rotate(Axis::Z, f64::NAN), None);
        assert_eq!(session.state(), BlochVector::new(1.0, 0.0, 0.0));
        assert_eq!(session.reset_epoch(), 0);
    }

    #[test]
    fn test_clamped_rotation() {
        let mut session = BlochSession::with_options(SessionOptions {
            clamp_degrees: Some(180.0),
        });
        assert_eq!(session.rotate(Axis::Y, 270.0), Some(180.0));
        assert!(session.state().approx_eq(&BlochVector::ONE, TOL));
        assert_eq!(session.rotate(Axis::Y, -90.0), Some(-90.0));
    }

    #[test]
    fn test_unknown_gate_returns_none() {
        let mut session = BlochSession::new();
        assert_eq!(session.apply_gate("Q"), None);
        assert_eq!(session.state(), BlochVector::ZERO);
        assert_eq!(session.apply_gate("h"), Some(Gate::H));
    }

    #[test]
    fn test_set_absolute_normalizes() {
        let mut session = BlochSession::new();
        session.set_absolute(0.0, 0.0, -5.0);
        assert_eq!(session.state(), BlochVector::ONE);
        session.set_absolute(0.0, 0.0, 0.0);
        assert_eq!(session.state(), BlochVector::ZERO);
    }

    #[test]
    fn test_snapshot_readout() {
        let mut session = BlochSession::new();
        session.set_named(NamedState::MinusI);
        let snap = session.snapshot();
        assert!((snap.theta_deg - 90.0).abs() < TOL);
        assert!((snap.phi_deg - 270.0).abs() < TOL);
        assert_eq!(snap.radius, 1.0);
        assert!((snap.p0 - 0.5).abs() < TOL);
    }

    #[test]
    fn test_apply_actions_in_order() {
        let mut session = BlochSession::new();
        let script: Vec<Action> = ["h", "rz 90", "state 1", "reset", "gate x"]
            .iter()
            .map(|line| line.parse().unwrap())
            .collect();
        for action in &script {
            session.apply(action);
        }
        assert!(session.state().approx_eq(&BlochVector::ONE, TOL));
        assert_eq!(session.reset_epoch(), 1);
    }
}
