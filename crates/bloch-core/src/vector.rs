//! Bloch vectors and the normalizer.
//!
//! A pure single-qubit state is a point on the unit sphere:
//!
//!   |ψ⟩ = cos(θ/2)|0⟩ + e^(iφ)·sin(θ/2)|1⟩   ↔   (sinθ·cosφ, sinθ·sinφ, cosθ)
//!
//! Every [`BlochVector`] is unit length. The only way to build one is through
//! [`normalize`], which also maps degenerate input onto the north pole.
//!
//! # Example
//!
//! ```rust
//! use bloch_core::vector::{normalize, BlochVector};
//!
//! let v = normalize(3.0, 0.0, 4.0);
//! assert!((v.norm() - 1.0).abs() < 1e-12);
//! assert!((v.x() - 0.6).abs() < 1e-12);
//!
//! // Zero-length input collapses to |0⟩.
//! assert_eq!(normalize(0.0, 0.0, 0.0), BlochVector::ZERO);
//! ```

use serde::{Deserialize, Serialize};
use std::f64::consts::{PI, TAU};
use std::fmt;

/// A unit-length real 3-vector representing a pure single-qubit state.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(from = "RawVector", into = "RawVector")]
pub struct BlochVector {
    x: f64,
    y: f64,
    z: f64,
}

/// Wire form of a Bloch vector. Deserialized values go back through
/// [`normalize`].
#[derive(Clone, Copy, Serialize, Deserialize)]
struct RawVector {
    x: f64,
    y: f64,
    z: f64,
}

impl From<RawVector> for BlochVector {
    fn from(raw: RawVector) -> Self {
        normalize(raw.x, raw.y, raw.z)
    }
}

impl From<BlochVector> for RawVector {
    fn from(v: BlochVector) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
        }
    }
}

/// Spherical coordinates of a Bloch vector, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlochAngles {
    /// Polar angle from +z, θ ∈ [0, π].
    pub theta: f64,
    /// Azimuth in the xy-plane, φ ∈ [0, 2π).
    pub phi: f64,
}

/// Normalize a raw triple onto the unit sphere.
///
/// Non-finite components or a zero-length vector yield [`BlochVector::ZERO`].
/// The triple is pre-scaled by its largest component so that very large or
/// very small finite inputs neither overflow nor underflow the norm.
pub fn normalize(x: f64, y: f64, z: f64) -> BlochVector {
    if !(x.is_finite() && y.is_finite() && z.is_finite()) {
        return BlochVector::ZERO;
    }

    let scale = x.abs().max(y.abs()).max(z.abs());
    if scale == 0.0 {
        return BlochVector::ZERO;
    }

    let (x, y, z) = (x / scale, y / scale, z / scale);
    let norm = (x * x + y * y + z * z).sqrt();
    if !norm.is_finite() || norm == 0.0 {
        return BlochVector::ZERO;
    }

    BlochVector {
        x: x / norm,
        y: y / norm,
        z: z / norm,
    }
}

/// Map an `atan2` result onto `[0, 2π)`.
pub(crate) fn wrap_azimuth(phi: f64) -> f64 {
    let wrapped = if phi < 0.0 { phi + TAU } else { phi };
    // -0.0 and values that round up to exactly 2π both belong at 0.
    if wrapped >= TAU || wrapped == 0.0 {
        0.0
    } else {
        wrapped
    }
}

impl BlochVector {
    /// The north pole `(0, 0, 1)`, i.e. the |0⟩ basis state.
    pub const ZERO: BlochVector = BlochVector {
        x: 0.0,
        y: 0.0,
        z: 1.0,
    };

    /// The south pole `(0, 0, -1)`, i.e. the |1⟩ basis state.
    pub const ONE: BlochVector = BlochVector {
        x: 0.0,
        y: 0.0,
        z: -1.0,
    };

    /// Build a vector from raw components, normalizing them.
    #[inline]
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        normalize(x, y, z)
    }

    /// X component.
    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    /// Y component.
    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    /// Z component. +1 is |0⟩, -1 is |1⟩.
    #[inline]
    pub fn z(&self) -> f64 {
        self.z
    }

    /// Components as `[x, y, z]`.
    #[inline]
    pub fn components(&self) -> [f64; 3] {
        [self.x, self.y, self.z]
    }

    /// Euclidean norm. Always 1 up to rounding.
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Spherical angles, recomputed on every call.
    pub fn angles(&self) -> BlochAngles {
        let theta = self.z.clamp(-1.0, 1.0).acos();
        let phi = wrap_azimuth(self.y.atan2(self.x));
        BlochAngles { theta, phi }
    }

    /// Polar angle in degrees, in `[0, 180]`.
    pub fn polar_degrees(&self) -> f64 {
        self.angles().theta.to_degrees().clamp(0.0, 180.0)
    }

    /// Azimuth in degrees, in `[0, 360)`.
    pub fn azimuth_degrees(&self) -> f64 {
        let deg = self.angles().phi.to_degrees();
        if deg >= 360.0 { 0.0 } else { deg }
    }

    /// Display radius. Pure states always sit on the sphere surface.
    #[inline]
    pub fn radius(&self) -> f64 {
        1.0
    }

    /// True if every component differs from `other` by at most `tol`.
    pub fn approx_eq(&self, other: &BlochVector, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
    }
}

impl Default for BlochVector {
    fn default() -> Self {
        Self::ZERO
    }
}

impl fmt::Display for BlochVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(4);
        write!(
            f,
            "({:.p$}, {:.p$}, {:.p$})",
            self.x,
            self.y,
            self.z,
            p = precision
        )
    }
}

impl BlochAngles {
    /// Point on the sphere for these angles.
    pub fn to_vector(&self) -> BlochVector {
        let (st, ct) = self.theta.sin_cos();
        let (sp, cp) = self.phi.sin_cos();
        normalize(st * cp, st * sp, ct)
    }
}

/// Half-turn helper used by the codec: `θ/2` for a polar angle in `[0, π]`.
#[inline]
pub(crate) fn half_angle(theta: f64) -> f64 {
    theta.clamp(0.0, PI) / 2.0
}
