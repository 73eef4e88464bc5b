use std::ops::Mul;

use crate::{Offset, Point};

/// Row-major 2x2 matrix `[a, b, c, d]`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix {
    pub matrix: [f32; 4],
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Self = Self {
        matrix: [1.0, 0.0, 0.0, 1.0],
    };

    pub const fn scale(x: f32, y: f32) -> Self {
        Self {
            matrix: [x, 0.0, 0.0, y],
        }
    }

    pub fn rotate(degrees: f32) -> Self {
        let (sin, cos) = degrees.to_radians().sin_cos();

        Self {
            matrix: [cos, -sin, sin, cos],
        }
    }

    pub const fn determinant(self) -> f32 {
        let [a, b, c, d] = self.matrix;
        a * d - b * c
    }

    /// Returns `None` when the matrix is singular.
    pub fn inverse(self) -> Option<Self> {
        let det = self.determinant();

        if det.abs() <= f32::EPSILON {
            return None;
        }

        let [a, b, c, d] = self.matrix;

        Some(Self {
            matrix: [d / det, -b / det, -c / det, a / det],
        })
    }
}

impl Mul for Matrix {
    type Output = Matrix;

    fn mul(self, rhs: Self) -> Self::Output {
        let [a1, b1, c1, d1] = self.matrix;
        let [a2, b2, c2, d2] = rhs.matrix;

        Matrix {
            matrix: [
                a1 * a2 + b1 * c2,
                a1 * b2 + b1 * d2,
                c1 * a2 + d1 * c2,
                c1 * b2 + d1 * d2,
            ],
        }
    }
}

impl Mul<Offset> for Matrix {
    type Output = Offset;

    fn mul(self, rhs: Offset) -> Self::Output {
        let [a, b, c, d] = self.matrix;
        Offset::new(a * rhs.x + b * rhs.y, c * rhs.x + d * rhs.y)
    }
}

/// A 2D affine transform.
///
/// `a * b` applies `b` first, then `a`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Affine {
    pub matrix: Matrix,
    pub offset: Offset,
}

impl Affine {
    pub const IDENTITY: Self = Self {
        matrix: Matrix::IDENTITY,
        offset: Offset::ZERO,
    };

    pub const fn translate(offset: Offset) -> Self {
        Self {
            matrix: Matrix::IDENTITY,
            offset,
        }
    }

    pub const fn scale(x: f32, y: f32) -> Self {
        Self {
            matrix: Matrix::scale(x, y),
            offset: Offset::ZERO,
        }
    }

    pub fn rotate(degrees: f32) -> Self {
        Self {
            matrix: Matrix::rotate(degrees),
            offset: Offset::ZERO,
        }
    }

    /// Scale around `pivot` instead of the origin.
    pub fn scale_around(pivot: Point, x: f32, y: f32) -> Self {
        let pivot = pivot.to_offset();
        Self::translate(pivot) * Self::scale(x, y) * Self::translate(-pivot)
    }

    pub fn inverse(self) -> Option<Self> {
        let matrix = self.matrix.inverse()?;

        Some(Self {
            matrix,
            offset: -(matrix * self.offset),
        })
    }
}

impl Mul for Affine {
    type Output = Affine;

    fn mul(self, rhs: Self) -> Self::Output {
        Affine {
            matrix: self.matrix * rhs.matrix,
            offset: self.matrix * rhs.offset + self.offset,
        }
    }
}

impl Mul<Point> for Affine {
    type Output = Point;

    fn mul(self, rhs: Point) -> Self::Output {
        Point::ORIGIN + self.matrix * rhs.to_offset() + self.offset
    }
}
