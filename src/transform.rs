//! 2D affine transformations.
//!
//! Homogeneous 3x3 matrices applied to `[x, y, 1]` column vectors. A
//! transform with no matrix is the identity and passes points through
//! untouched.

use crate::error::{Error, Result};
use crate::geometry::Point;

/// Row-major 3x3 homogeneous matrix.
pub type Mat3 = [[f64; 3]; 3];

/// Sense of rotation for [`AffineTransform::rotation`].
///
/// Controls the sign of the off-diagonal sine terms. Angles are in radians;
/// the canvas origin is top-left with `y` growing downward, so
/// counter-clockwise here refers to the conventional mathematical matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RotationDirection {
    /// Negative sine on the lower-left term.
    Clockwise,
    /// Conventional rotation matrix.
    CounterClockwise,
}

/// A composable 2D affine map.
///
/// Constructed from the factory functions below, optionally folded together
/// with [`concatenate`](Self::concatenate), and applied to batches of
/// points. Application produces transformed copies; the inputs are never
/// mutated, so a shape can be transformed repeatedly with the same result.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AffineTransform {
    matrix: Option<Mat3>,
}

impl AffineTransform {
    /// The identity transform (no matrix; points pass through unmodified).
    #[must_use]
    pub const fn identity() -> Self {
        Self { matrix: None }
    }

    /// Wrap an explicit matrix.
    #[must_use]
    pub const fn from_matrix(matrix: Mat3) -> Self {
        Self {
            matrix: Some(matrix),
        }
    }

    /// The wrapped matrix, if any.
    #[must_use]
    pub const fn matrix(&self) -> Option<&Mat3> {
        self.matrix.as_ref()
    }

    /// Translation by `(tx, ty)`.
    #[must_use]
    pub const fn translation(tx: f64, ty: f64) -> Self {
        Self::from_matrix([[1.0, 0.0, tx], [0.0, 1.0, ty], [0.0, 0.0, 1.0]])
    }

    /// Rotation about the origin by `angle` radians in the given direction.
    #[must_use]
    pub fn rotation(angle: f64, direction: RotationDirection) -> Self {
        let (sin, cos) = angle.sin_cos();
        let m = match direction {
            RotationDirection::CounterClockwise => {
                [[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]]
            }
            RotationDirection::Clockwise => {
                [[cos, sin, 0.0], [-sin, cos, 0.0], [0.0, 0.0, 1.0]]
            }
        };
        Self::from_matrix(m)
    }

    /// Non-uniform scaling about the origin.
    #[must_use]
    pub const fn scaling(sx: f64, sy: f64) -> Self {
        Self::from_matrix([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Reflection across the coordinate axes.
    ///
    /// Reflecting across the x axis negates `y`; reflecting across the y
    /// axis negates `x`. Both together reflect through the origin.
    #[must_use]
    pub const fn reflection(across_x_axis: bool, across_y_axis: bool) -> Self {
        let sx = if across_y_axis { -1.0 } else { 1.0 };
        let sy = if across_x_axis { -1.0 } else { 1.0 };
        Self::from_matrix([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Shear by `shx` along x and `shy` along y.
    #[must_use]
    pub const fn shearing(shx: f64, shy: f64) -> Self {
        Self::from_matrix([[1.0, shx, 0.0], [shy, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    /// Fold `other` into this transform: `self = self × other`.
    ///
    /// A receiver with no matrix adopts `other`'s matrix directly. Matrix
    /// multiplication does not commute, so the fold order is part of the
    /// contract.
    pub fn concatenate(&mut self, other: &AffineTransform) {
        self.matrix = match (self.matrix, other.matrix) {
            (None, m) => m,
            (Some(m), None) => Some(m),
            (Some(a), Some(b)) => Some(mat3_product(&a, &b)),
        };
    }

    /// Apply the transform to a batch of points, returning transformed
    /// copies.
    ///
    /// Each point is treated as the homogeneous column `[x, y, 1]ᵀ`; the
    /// first two rows of the product become the new coordinates. An
    /// identity transform returns the input unchanged.
    #[must_use]
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        match &self.matrix {
            None => points.to_vec(),
            Some(m) => points
                .iter()
                .map(|p| {
                    Point::new(
                        m[0][0] * p.x + m[0][1] * p.y + m[0][2],
                        m[1][0] * p.x + m[1][1] * p.y + m[1][2],
                    )
                })
                .collect(),
        }
    }

    /// Apply the transform to a single point.
    #[must_use]
    pub fn apply_point(&self, point: Point) -> Point {
        match &self.matrix {
            None => point,
            Some(m) => Point::new(
                m[0][0] * point.x + m[0][1] * point.y + m[0][2],
                m[1][0] * point.x + m[1][1] * point.y + m[1][2],
            ),
        }
    }
}

/// Fixed 3x3 product used by [`AffineTransform::concatenate`].
fn mat3_product(a: &Mat3, b: &Mat3) -> Mat3 {
    let mut out = [[0.0; 3]; 3];
    for (i, row) in out.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = a[i][0] * b[0][j] + a[i][1] * b[1][j] + a[i][2] * b[2][j];
        }
    }
    out
}

/// General matrix product over arbitrary 2-D arrays.
///
/// Rows of the result pair rows of `m1` with columns of `m2`. Returns
/// [`Error::DimensionMismatch`] when the inner dimensions differ (including
/// an empty operand).
pub fn multiply_matrices(m1: &[Vec<f64>], m2: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let left_cols = m1.first().map_or(0, Vec::len);
    let right_rows = m2.len();
    if left_cols == 0 || left_cols != right_rows {
        return Err(Error::DimensionMismatch {
            left_cols,
            right_rows,
        });
    }
    let right_cols = m2.first().map_or(0, Vec::len);

    let mut result = vec![vec![0.0; right_cols]; m1.len()];
    for (i, row) in m1.iter().enumerate() {
        for j in 0..right_cols {
            let mut acc = 0.0;
            for (k, value) in row.iter().enumerate() {
                acc += value * m2[k][j];
            }
            result[i][j] = acc;
        }
    }
    Ok(result)
}
