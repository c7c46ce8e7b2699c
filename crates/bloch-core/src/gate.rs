//! Fixed single-qubit gates.
//!
//! A gate is applied by round-tripping through amplitudes: the vector is
//! converted to `(alpha, beta)`, the gate's 2×2 unitary is applied in closed
//! form, and the result is converted back.
//!
//! | Gate | (alpha′, beta′) |
//! |------|-----------------|
//! | `H` | ((α+β)/√2, (α−β)/√2) |
//! | `X` | (β, α) |
//! | `Y` | (−iβ, iα) |
//! | `Z` | (α, −β) |
//! | `S` | (α, iβ) |
//! | `T` | (α, e^(iπ/4)·β) |
//!
//! Unknown tokens are the identity, never an error.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use crate::amplitude::AmplitudePair;
use crate::vector::BlochVector;

/// Standard single-qubit gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,
}

impl Gate {
    /// Every supported gate.
    pub const ALL: [Gate; 6] = [Gate::H, Gate::X, Gate::Y, Gate::Z, Gate::S, Gate::T];

    /// Get the name of this gate.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Gate::H => "H",
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
            Gate::S => "S",
            Gate::T => "T",
        }
    }

    /// Look up a gate by token. Case-insensitive; surrounding whitespace is
    /// ignored. Returns `None` for anything outside the gate set.
    pub fn from_token(token: &str) -> Option<Gate> {
        match token.trim().to_ascii_uppercase().as_str() {
            "H" => Some(Gate::H),
            "X" => Some(Gate::X),
            "Y" => Some(Gate::Y),
            "Z" => Some(Gate::Z),
            "S" => Some(Gate::S),
            "T" => Some(Gate::T),
            _ => None,
        }
    }

    /// Whether applying the gate twice is the identity.
    pub fn is_self_inverse(&self) -> bool {
        matches!(self, Gate::H | Gate::X | Gate::Y | Gate::Z)
    }

    /// Apply the gate's unitary to an amplitude pair.
    pub fn apply_amplitudes(&self, pair: AmplitudePair) -> AmplitudePair {
        let AmplitudePair { alpha, beta } = pair;
        let i = Complex64::i();
        match self {
            Gate::H => AmplitudePair::new(
                (alpha + beta) * FRAC_1_SQRT_2,
                (alpha - beta) * FRAC_1_SQRT_2,
            ),
            Gate::X => AmplitudePair::new(beta, alpha),
            Gate::Y => AmplitudePair::new(-i * beta, i * alpha),
            Gate::Z => AmplitudePair::new(alpha, -beta),
            Gate::S => AmplitudePair::new(alpha, i * beta),
            Gate::T => AmplitudePair::new(
                alpha,
                Complex64::new(
                    (beta.re - beta.im) * FRAC_1_SQRT_2,
                    (beta.re + beta.im) * FRAC_1_SQRT_2,
                ),
            ),
        }
    }

    /// Apply the gate to a Bloch vector.
    pub fn apply(&self, v: &BlochVector) -> BlochVector {
        let pair = self.apply_amplitudes(AmplitudePair::from_vector(v));
        let out = pair.to_vector();
        tracing::trace!(gate = %self, from = %v, to = %out, "gate applied");
        out
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Apply the gate named by `token` to `v`. Unknown tokens return `v` unchanged.
pub fn apply_gate(v: &BlochVector, token: &str) -> BlochVector {
    match Gate::from_token(token) {
        Some(gate) => gate.apply(v),
        None => {
            tracing::debug!(token, "unrecognised gate token treated as identity");
            *v
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    #[test]
    fn test_from_token() {
        assert_eq!(Gate::from_token("H"), Some(Gate::H));
        assert_eq!(Gate::from_token("t"), Some(Gate::T));
        assert_eq!(Gate::from_token(" s "), Some(Gate::S));
        assert_eq!(Gate::from_token("Q"), None);
        assert_eq!(Gate::from_token(""), None);
        assert_eq!(Gate::from_token("HX"), None);
    }

    #[test]
    fn test_y_components() {
        let pair = AmplitudePair::new(c(0.6, 0.0), c(0.0, 0.8));
        let out = Gate::Y.apply_amplitudes(pair);
        assert_eq!(out.alpha, c(0.8, 0.0));
        assert_eq!(out.beta, c(0.0, 0.6));
        // Same Bloch vector as the (−β.im, β.re), (α.im, −α.re) component form,
        // which differs only by a global phase of −1.
        let flipped = AmplitudePair::new(
            c(-pair.beta.im, pair.beta.re),
            c(pair.alpha.im, -pair.alpha.re),
        );
        assert!(out.to_vector().approx_eq(&flipped.to_vector(), TOL));
    }

    #[test]
    fn test_s_components() {
        let pair = AmplitudePair::new(c(0.6, 0.0), c(0.3, 0.4));
        let out = Gate::S.apply_amplitudes(pair);
        assert_eq!(out.alpha, pair.alpha);
        assert_eq!(out.beta, c(-0.4, 0.3));
    }

    #[test]
    fn test_t_is_quarter_phase() {
        let pair = AmplitudePair::new(c(0.6, 0.0), c(0.8, 0.0));
        let out = Gate::T.apply_amplitudes(pair);
        let expected = c(0.8, 0.0) * Complex64::from_polar(1.0, std::f64::consts::FRAC_PI_4);
        assert!((out.beta - expected).norm() < TOL);
    }

    #[test]
    fn test_hadamard_north_to_plus() {
        let out = Gate::H.apply(&BlochVector::ZERO);
        assert!(out.approx_eq(&BlochVector::new(1.0, 0.0, 0.0), TOL));
    }

    #[test]
    fn test_x_flips_poles() {
        let out = Gate::X.apply(&BlochVector::ZERO);
        assert!(out.approx_eq(&BlochVector::ONE, TOL));
    }

    #[test]
    fn test_s_quarter_turn_about_z() {
        let plus = BlochVector::new(1.0, 0.0, 0.0);
        let out = Gate::S.apply(&plus);
        assert!(out.approx_eq(&BlochVector::new(0.0, 1.0, 0.0), TOL));
    }

    #[test]
    fn test_unknown_token_is_identity() {
        let v = BlochVector::new(0.1, 0.2, 0.3);
        assert_eq!(apply_gate(&v, "Q"), v);
        assert_eq!(apply_gate(&v, "cx"), v);
    }
}
