//! Conversion between Bloch vectors and computational-basis amplitudes.
//!
//! Vector → amplitudes fixes the global phase so that `alpha` is real and
//! non-negative:
//!
//!   alpha = cos(θ/2),   beta = e^(iφ)·sin(θ/2)
//!
//! Amplitudes → vector uses the Pauli expectation values:
//!
//!   x = 2·Re(α*β),   y = 2·Im(α*β),   z = |α|² − |β|²
//!
//! # Example
//!
//! ```rust
//! use bloch_core::amplitude::AmplitudePair;
//! use bloch_core::vector::BlochVector;
//!
//! let plus = BlochVector::new(1.0, 0.0, 0.0);
//! let pair = AmplitudePair::from_vector(&plus);
//! assert!((pair.alpha.re - 1.0 / 2f64.sqrt()).abs() < 1e-12);
//! assert!(pair.to_vector().approx_eq(&plus, 1e-12));
//! ```

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::vector::{BlochVector, half_angle};

/// Complex coefficients `(alpha, beta)` of the |0⟩ and |1⟩ basis states.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AmplitudePair {
    /// Amplitude of |0⟩.
    pub alpha: Complex64,
    /// Amplitude of |1⟩.
    pub beta: Complex64,
}

impl AmplitudePair {
    /// Create a pair from explicit amplitudes. No normalization is applied.
    #[inline]
    pub fn new(alpha: Complex64, beta: Complex64) -> Self {
        Self { alpha, beta }
    }

    /// Amplitudes of the state at `v`, with `alpha` real.
    pub fn from_vector(v: &BlochVector) -> Self {
        let angles = v.angles();
        let (s, c) = half_angle(angles.theta).sin_cos();
        let pair = Self {
            alpha: Complex64::new(c, 0.0),
            beta: Complex64::from_polar(s, angles.phi),
        };
        tracing::trace!(vector = %v, ?pair, "vector -> amplitudes");
        pair
    }

    /// Bloch vector of this state. The result is normalized.
    pub fn to_vector(&self) -> BlochVector {
        let (a, b) = (self.alpha, self.beta);
        let x = 2.0 * (a.re * b.re + a.im * b.im);
        let y = 2.0 * (a.re * b.im - a.im * b.re);
        let z = a.norm_sqr() - b.norm_sqr();
        BlochVector::new(x, y, z)
    }

    /// `|alpha|² + |beta|²`. Equal to 1 for a physical state.
    #[inline]
    pub fn norm_sqr(&self) -> f64 {
        self.alpha.norm_sqr() + self.beta.norm_sqr()
    }

    /// Measurement probabilities `(p0, p1)` in the computational basis.
    pub fn probabilities(&self) -> (f64, f64) {
        let total = self.norm_sqr();
        if total == 0.0 || !total.is_finite() {
            return (1.0, 0.0);
        }
        (self.alpha.norm_sqr() / total, self.beta.norm_sqr() / total)
    }

    /// True if `other` equals `self` times some unit phase, component-wise
    /// within `tol`.
    ///
    /// The phase is taken from the overlap `⟨self|other⟩`.
    pub fn eq_up_to_global_phase(&self, other: &AmplitudePair, tol: f64) -> bool {
        let overlap = self.alpha.conj() * other.alpha + self.beta.conj() * other.beta;
        let magnitude = overlap.norm();
        if magnitude == 0.0 || !magnitude.is_finite() {
            return self.norm_sqr().sqrt() <= tol && other.norm_sqr().sqrt() <= tol;
        }
        let phase = overlap / magnitude;
        (self.alpha * phase - other.alpha).norm() <= tol
            && (self.beta * phase - other.beta).norm() <= tol
    }
}

/// Amplitudes for a Bloch vector. See [`AmplitudePair::from_vector`].
#[inline]
pub fn vector_to_amplitudes(v: &BlochVector) -> AmplitudePair {
    AmplitudePair::from_vector(v)
}

/// Bloch vector for an amplitude pair. See [`AmplitudePair::to_vector`].
#[inline]
pub fn amplitudes_to_vector(pair: &AmplitudePair) -> BlochVector {
    pair.to_vector()
}
