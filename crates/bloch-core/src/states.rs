//! Named single-qubit basis states.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{BlochError, BlochResult};
use crate::vector::{BlochVector, normalize};

/// The six axis points of the Bloch sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedState {
    /// |0⟩, the north pole.
    #[serde(rename = "0")]
    Zero,
    /// |1⟩, the south pole.
    #[serde(rename = "1")]
    One,
    /// |+⟩ on +x.
    #[serde(rename = "+")]
    Plus,
    /// |-⟩ on -x.
    #[serde(rename = "-")]
    Minus,
    /// |+i⟩ on +y.
    #[serde(rename = "+i")]
    PlusI,
    /// |-i⟩ on -y.
    #[serde(rename = "-i")]
    MinusI,
}

impl NamedState {
    /// All named states, poles first.
    pub const ALL: [NamedState; 6] = [
        NamedState::Zero,
        NamedState::One,
        NamedState::Plus,
        NamedState::Minus,
        NamedState::PlusI,
        NamedState::MinusI,
    ];

    /// Ket label, e.g. `|+i⟩`.
    pub fn label(&self) -> &'static str {
        match self {
            NamedState::Zero => "|0⟩",
            NamedState::One => "|1⟩",
            NamedState::Plus => "|+⟩",
            NamedState::Minus => "|-⟩",
            NamedState::PlusI => "|+i⟩",
            NamedState::MinusI => "|-i⟩",
        }
    }

    /// Point on the sphere.
    pub fn vector(&self) -> BlochVector {
        match self {
            NamedState::Zero => BlochVector::ZERO,
            NamedState::One => BlochVector::ONE,
            NamedState::Plus => BlochVector::new(1.0, 0.0, 0.0),
            NamedState::Minus => BlochVector::new(-1.0, 0.0, 0.0),
            NamedState::PlusI => BlochVector::new(0.0, 1.0, 0.0),
            NamedState::MinusI => BlochVector::new(0.0, -1.0, 0.0),
        }
    }
}

impl fmt::Display for NamedState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for NamedState {
    type Err = BlochError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let bare = trimmed
            .strip_prefix('|')
            .and_then(|rest| rest.strip_suffix('>').or_else(|| rest.strip_suffix('⟩')))
            .unwrap_or(trimmed);

        match bare.to_ascii_lowercase().as_str() {
            "0" | "zero" => Ok(NamedState::Zero),
            "1" | "one" => Ok(NamedState::One),
            "+" | "plus" => Ok(NamedState::Plus),
            "-" | "minus" => Ok(NamedState::Minus),
            "+i" | "plus-i" => Ok(NamedState::PlusI),
            "-i" | "minus-i" => Ok(NamedState::MinusI),
            _ => Err(BlochError::UnknownState(s.to_string())),
        }
    }
}

/// Parse a state request: either a named state (`0`, `+i`, `|->`, ...) or a
/// raw `x,y,z` triple, which is normalized.
pub fn parse_state(spec: &str) -> BlochResult<BlochVector> {
    if let Ok(named) = spec.parse::<NamedState>() {
        return Ok(named.vector());
    }

    let parts: Vec<&str> = spec.split(',').map(str::trim).collect();
    let [x, y, z] = parts.as_slice() else {
        return Err(BlochError::UnknownState(spec.to_string()));
    };
    let component = |field: &'static str, raw: &str| {
        raw.parse::<f64>().map_err(|_| BlochError::InvalidNumber {
            field,
            value: raw.to_string(),
        })
    };
    Ok(normalize(
        component("x", *x)?,
        component("y", *y)?,
        component("z", *z)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_forms() {
        assert_eq!("0".parse::<NamedState>().unwrap(), NamedState::Zero);
        assert_eq!("|1>".parse::<NamedState>().unwrap(), NamedState::One);
        assert_eq!("|+⟩".parse::<NamedState>().unwrap(), NamedState::Plus);
        assert_eq!("minus".parse::<NamedState>().unwrap(), NamedState::Minus);
        assert_eq!("+I".parse::<NamedState>().unwrap(), NamedState::PlusI);
        assert_eq!("|-i>".parse::<NamedState>().unwrap(), NamedState::MinusI);
        assert!("2".parse::<NamedState>().is_err());
        assert!("|+".parse::<NamedState>().is_err());
    }

    #[test]
    fn test_vectors_are_axis_points() {
        for state in NamedState::ALL {
            let v = state.vector();
            let nonzero = v.components().iter().filter(|c| c.abs() > 0.5).count();
            assert_eq!(nonzero, 1, "{state} should lie on a single axis");
        }
    }

    #[test]
    fn test_parse_state_spec() {
        assert_eq!(parse_state("1").unwrap(), BlochVector::ONE);
        assert_eq!(
            parse_state("0, 2, 0").unwrap(),
            BlochVector::new(0.0, 1.0, 0.0)
        );
        assert_eq!(parse_state("0,0,0").unwrap(), BlochVector::ZERO);
        assert!(matches!(
            parse_state("1,a,0"),
            Err(BlochError::InvalidNumber { field: "y", .. })
        ));
        assert!(matches!(
            parse_state("north"),
            Err(BlochError::UnknownState(_))
        ));
    }

    #[test]
    fn test_serde_labels() {
        let json = serde_json::to_string(&NamedState::PlusI).unwrap();
        assert_eq!(json, "\"+i\"");
        let back: NamedState = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(back, NamedState::Minus);
    }
}
