//! User-issued actions a presentation layer sends to a session.
//!
//! Actions serialize as tagged objects (`{"action": "rotate", "axis": "x",
//! "degrees": 90.0}`) for scripts, and parse from a compact line syntax for
//! interactive use:
//!
//! ```text
//! rotate x 90      rx 90          # signed degrees about an axis
//! gate h           h              # apply a gate (unknown tokens are no-ops)
//! set 1 0 0                       # absolute state, normalized
//! state +i                        # named state
//! reset                           # back to |0⟩
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BlochError, BlochResult};
use crate::gate::Gate;
use crate::rotation::Axis;
use crate::states::NamedState;

/// A single state-changing request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum Action {
    /// Rotate about an axis by signed degrees.
    Rotate {
        /// Rotation axis.
        axis: Axis,
        /// Signed angle in degrees.
        degrees: f64,
    },
    /// Apply a gate by token.
    Gate {
        /// Gate token; anything outside the gate set is the identity.
        token: String,
    },
    /// Replace the state with a raw triple, normalized.
    Set {
        /// Raw x component.
        x: f64,
        /// Raw y component.
        y: f64,
        /// Raw z component.
        z: f64,
    },
    /// Replace the state with a named basis state.
    Named {
        /// The target state.
        state: NamedState,
    },
    /// Return to |0⟩ and notify dependent controls.
    Reset,
}

fn parse_number(field: &'static str, raw: &str) -> BlochResult<f64> {
    raw.parse().map_err(|_| BlochError::InvalidNumber {
        field,
        value: raw.to_string(),
    })
}

impl FromStr for Action {
    type Err = BlochError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((head, args)) = words.split_first() else {
            return Err(BlochError::InvalidAction(line.to_string()));
        };
        let invalid = || BlochError::InvalidAction(line.trim().to_string());

        match (head.to_ascii_lowercase().as_str(), args) {
            ("rotate" | "rot", [axis, degrees]) => Ok(Action::Rotate {
                axis: axis.parse()?,
                degrees: parse_number("degrees", degrees)?,
            }),
            ("rx", [degrees]) => Ok(Action::Rotate {
                axis: Axis::X,
                degrees: parse_number("degrees", degrees)?,
            }),
            ("ry", [degrees]) => Ok(Action::Rotate {
                axis: Axis::Y,
                degrees: parse_number("degrees", degrees)?,
            }),
            ("rz", [degrees]) => Ok(Action::Rotate {
                axis: Axis::Z,
                degrees: parse_number("degrees", degrees)?,
            }),
            ("gate", [token]) => Ok(Action::Gate {
                token: (*token).to_string(),
            }),
            ("set", [x, y, z]) => Ok(Action::Set {
                x: parse_number("x", x)?,
                y: parse_number("y", y)?,
                z: parse_number("z", z)?,
            }),
            ("state" | "named", [label]) => Ok(Action::Named {
                state: label.parse()?,
            }),
            ("reset", []) => Ok(Action::Reset),
            (_, []) if Gate::from_token(head).is_some() => Ok(Action::Gate {
                token: (*head).to_string(),
            }),
            _ => Err(invalid()),
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Rotate { axis, degrees } => write!(f, "rotate {axis} {degrees}"),
            Action::Gate { token } => write!(f, "gate {token}"),
            Action::Set { x, y, z } => write!(f, "set {x} {y} {z}"),
            Action::Named { state } => write!(f, "state {state}"),
            Action::Reset => f.write_str("reset"),
        }
    }
}
