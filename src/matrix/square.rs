use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self.data[i][i];
        }
        sum
    }

    /// Create a diagonal matrix from an array of diagonal entries.
    ///
    /// ```
    /// use linest::Matrix;
    /// let q: Matrix<f64, 2, 2> = Matrix::from_diag([0.1, 0.2]);
    /// assert_eq!(q[(1, 1)], 0.2);
    /// assert_eq!(q[(0, 1)], 0.0);
    /// ```
    pub fn from_diag(d: [T; N]) -> Self {
        let mut m = Self::zeros();
        for (i, v) in d.into_iter().enumerate() {
            m.data[i][i] = v;
        }
        m
    }
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Symmetry check with an absolute tolerance on `|a_ij - a_ji|`.
    ///
    /// Covariances propagated by a filter are symmetric only up to
    /// rounding.
    pub fn is_symmetric_within(&self, tol: T) -> bool {
        for i in 0..N {
            for j in (i + 1)..N {
                if (self.data[j][i] - self.data[i][j]).abs() > tol {
                    return false;
                }
            }
        }
        true
    }
}
