//! Rotations of a Bloch vector about the coordinate axes.
//!
//! Rotations follow the right-handed convention. About different axes they do
//! not commute: `rotate(rotate(v, X, a), Y, b)` equals `R_y(b) · R_x(a) · v`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::BlochError;
use crate::vector::BlochVector;

/// A coordinate axis of the Bloch sphere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    /// The x axis (|+⟩ / |-⟩).
    X,
    /// The y axis (|+i⟩ / |-i⟩).
    Y,
    /// The z axis (|0⟩ / |1⟩).
    Z,
}

impl Axis {
    /// All three axes in x, y, z order.
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Lowercase identifier.
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Axis::X => "x",
            Axis::Y => "y",
            Axis::Z => "z",
        }
    }

    /// Row-major 3×3 rotation matrix for `radians` about this axis.
    pub fn matrix(&self, radians: f64) -> [[f64; 3]; 3] {
        let (s, c) = radians.sin_cos();
        match self {
            Axis::X => [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]],
            Axis::Y => [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]],
            Axis::Z => [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Axis {
    type Err = BlochError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "x" => Ok(Axis::X),
            "y" => Ok(Axis::Y),
            "z" => Ok(Axis::Z),
            _ => Err(BlochError::UnknownAxis(s.to_string())),
        }
    }
}

/// Rotate `v` about `axis` by a signed angle in degrees.
///
/// No range restriction is applied to `degrees`. A non-finite angle leaves
/// the vector unchanged. The result is re-normalized so that long chains of
/// small rotations do not drift off the sphere.
pub fn rotate(v: &BlochVector, axis: Axis, degrees: f64) -> BlochVector {
    if !degrees.is_finite() {
        return *v;
    }

    let (s, c) = degrees.to_radians().sin_cos();
    let [x, y, z] = v.components();

    let rotated = match axis {
        Axis::X => BlochVector::new(x, y * c - z * s, y * s + z * c),
        Axis::Y => BlochVector::new(x * c + z * s, y, -x * s + z * c),
        Axis::Z => BlochVector::new(x * c - y * s, x * s + y * c, z),
    };

    tracing::trace!(%axis, degrees, from = %v, to = %rotated, "rotated");
    rotated
}

/// Multiply a row-major 3×3 matrix by a column vector.
pub fn apply_matrix(m: &[[f64; 3]; 3], v: &BlochVector) -> BlochVector {
    let [x, y, z] = v.components();
    BlochVector::new(
        m[0][0] * x + m[0][1] * y + m[0][2] * z,
        m[1][0] * x + m[1][1] * y + m[1][2] * z,
        m[2][0] * x + m[2][1] * y + m[2][2] * z,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-12;

    #[test]
    fn test_axis_parse() {
        assert_eq!("x".parse::<Axis>().unwrap(), Axis::X);
        assert_eq!(" Y ".parse::<Axis>().unwrap(), Axis::Y);
        assert_eq!("Z".parse::<Axis>().unwrap(), Axis::Z);
        assert_eq!(
            "w".parse::<Axis>(),
            Err(BlochError::UnknownAxis("w".to_string()))
        );
    }

    #[test]
    fn test_quarter_turns_from_north_pole() {
        let v = BlochVector::ZERO;

        // R_x(90°) takes +z to -y.
        let rx = rotate(&v, Axis::X, 90.0);
        assert!(rx.approx_eq(&BlochVector::new(0.0, -1.0, 0.0), TOL));

        // R_y(90°) takes +z to +x.
        let ry = rotate(&v, Axis::Y, 90.0);
        assert!(ry.approx_eq(&BlochVector::new(1.0, 0.0, 0.0), TOL));

        // The z axis is fixed under R_z.
        let rz = rotate(&v, Axis::Z, 90.0);
        assert!(rz.approx_eq(&v, TOL));
    }

    #[test]
    fn test_z_rotation_moves_azimuth() {
        let v = BlochVector::new(1.0, 0.0, 0.0);
        let r = rotate(&v, Axis::Z, 90.0);
        assert!(r.approx_eq(&BlochVector::new(0.0, 1.0, 0.0), TOL));
    }

    #[test]
    fn test_non_finite_angle_is_noop() {
        let v = BlochVector::new(0.3, 0.4, 0.5);
        assert_eq!(rotate(&v, Axis::X, f64::NAN), v);
        assert_eq!(rotate(&v, Axis::Y, f64::INFINITY), v);
        assert_eq!(rotate(&v, Axis::Z, f64::NEG_INFINITY), v);
    }

    #[test]
    fn test_matrix_matches_rotate() {
        let v = BlochVector::new(0.2, -0.7, 0.4);
        for axis in Axis::ALL {
            let via_matrix = apply_matrix(&axis.matrix(37f64.to_radians()), &v);
            assert!(rotate(&v, axis, 37.0).approx_eq(&via_matrix, TOL));
        }
    }
}
