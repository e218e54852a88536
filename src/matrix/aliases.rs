//! Type aliases for the small system orders that show up in practice.

use crate::matrix::vector::ColumnVector;
use crate::Matrix;

/// 2×2 matrix (second-order state, e.g. `[θ̇, θ]`).
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

/// A 2-element column vector.
pub type ColumnVector2<T> = ColumnVector<T, 2>;
