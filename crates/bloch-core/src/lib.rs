//! `bloch-core`: single-qubit state engine on the Bloch sphere.
//!
//! A pure qubit state is held as a unit 3-vector. The crate provides:
//!
//! - **Normalizer** ([`vector::normalize`]) keeping every state on the unit
//!   sphere, with degenerate input mapped to |0⟩
//! - **Axis rotations** ([`rotation::rotate`]) about x, y and z by signed degrees
//! - **Amplitude codec** ([`amplitude::AmplitudePair`]) between vectors and
//!   `(alpha, beta)` with a fixed global phase
//! - **Gates** ([`gate::Gate`]) H, X, Y, Z, S, T applied through amplitudes
//! - A hosting [`session::BlochSession`] that owns the current state and
//!   dispatches user [`action::Action`]s
//!
//! All geometric operations are total: they never fail on well-shaped input.
//!
//! # Quick start
//!
//! ```rust
//! use bloch_core::{apply_gate, rotate, Axis, BlochVector};
//!
//! // |0⟩ --H--> |+⟩
//! let plus = apply_gate(&BlochVector::ZERO, "H");
//! assert!(plus.approx_eq(&BlochVector::new(1.0, 0.0, 0.0), 1e-12));
//!
//! // Quarter turn about z: |+⟩ -> |+i⟩
//! let plus_i = rotate(&plus, Axis::Z, 90.0);
//! assert!((plus_i.azimuth_degrees() - 90.0).abs() < 1e-9);
//!
//! // Unknown gate tokens are the identity.
//! assert_eq!(apply_gate(&plus_i, "Q"), plus_i);
//! ```

pub mod action;
pub mod amplitude;
pub mod error;
pub mod gate;
pub mod rotation;
pub mod session;
pub mod states;
pub mod vector;

pub use action::Action;
pub use amplitude::{AmplitudePair, amplitudes_to_vector, vector_to_amplitudes};
pub use error::{BlochError, BlochResult};
pub use gate::{Gate, apply_gate};
pub use rotation::{Axis, rotate};
pub use session::{BlochSession, SessionOptions, StateSnapshot};
pub use states::{NamedState, parse_state};
pub use vector::{BlochAngles, BlochVector, normalize};
