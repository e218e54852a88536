use core::ops::{Index, IndexMut};

use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

/// A column vector (N×1 matrix).
///
/// States, controls and measurements are all column vectors, so
/// `Matrix * ColumnVector` reads like the textbook equations:
/// `(M×N) * (N×1) → (M×1)`.
///
/// Supports single-index access `v[i]` in addition to `v[(i, 0)]`.
///
/// ```
/// use linest::ColumnVector;
///
/// let x = ColumnVector::from_column([0.0_f64, 0.1]);
/// assert_eq!(x[1], 0.1);
/// assert_eq!(x[(1, 0)], 0.1);
/// ```
pub type ColumnVector<T, const N: usize> = Matrix<T, N, 1>;

impl<T: Scalar, const N: usize> ColumnVector<T, N> {
    /// Create a column vector from a 1D array.
    #[inline]
    pub fn from_column(data: [T; N]) -> Self {
        Self { data: [data] }
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// `true` for the zero-length vector (the control input of a system
    /// without inputs).
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Copy the elements out into an array.
    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.data[0]
    }

    /// Dot product of two column vectors.
    pub fn dot(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[0][i] * rhs.data[0][i];
        }
        sum
    }

    /// Element iterator.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.data[0].iter()
    }
}

impl<T: FloatScalar, const N: usize> ColumnVector<T, N> {
    /// Euclidean norm.
    pub fn norm(&self) -> T {
        self.dot(self).sqrt()
    }
}

impl<T, const N: usize> Index<usize> for ColumnVector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[0][i]
    }
}

impl<T, const N: usize> IndexMut<usize> for ColumnVector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[0][i]
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for ColumnVector<T, N> {
    fn from(data: [T; N]) -> Self {
        Self::from_column(data)
    }
}
