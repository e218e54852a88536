use crate::linalg::LinalgError;
use crate::matrix::vector::ColumnVector;
use crate::traits::{FloatScalar, MatrixMut, MatrixRef};
use crate::Matrix;

/// Perform LU decomposition with partial pivoting, in place.
///
/// On return, `a` contains both L and U packed together:
/// - Upper triangle (including diagonal): U
/// - Lower triangle (excluding diagonal): L (diagonal of L is implicitly 1)
///
/// `perm` is filled with the row permutation indices.
/// Returns `true` if the number of row swaps was even.
///
/// A pivot is rejected when it is zero, not finite, or no larger than
/// `epsilon · ‖A‖₁` of the input. The threshold scales with the matrix, so a
/// well-conditioned matrix with tiny entries still factors, and a 1×1 matrix
/// fails only on an exact zero.
pub fn lu_in_place<T: FloatScalar>(
    a: &mut impl MatrixMut<T>,
    perm: &mut [usize],
) -> Result<bool, LinalgError> {
    let n = a.nrows();
    assert_eq!(n, a.ncols(), "LU decomposition requires a square matrix");
    assert_eq!(n, perm.len(), "permutation slice length must match matrix size");

    for (i, p) in perm.iter_mut().enumerate() {
        *p = i;
    }

    // ‖A‖₁ before elimination
    let mut scale = T::zero();
    for j in 0..n {
        let mut sum = T::zero();
        for i in 0..n {
            sum = sum + a.get(i, j).abs();
        }
        if sum > scale {
            scale = sum;
        }
    }
    let tol = T::epsilon() * scale;

    let mut even = true;

    for col in 0..n {
        // Partial pivoting: largest magnitude in this column
        let mut max_row = col;
        let mut max_val = a.get(col, col).abs();
        for row in (col + 1)..n {
            let val = a.get(row, col).abs();
            if val > max_val {
                max_val = val;
                max_row = row;
            }
        }

        // Negated so a NaN pivot is rejected too
        if !(max_val > tol && max_val.is_finite()) {
            return Err(LinalgError::Singular);
        }

        if max_row != col {
            perm.swap(col, max_row);
            for j in 0..n {
                let tmp = *a.get(col, j);
                *a.get_mut(col, j) = *a.get(max_row, j);
                *a.get_mut(max_row, j) = tmp;
            }
            even = !even;
        }

        let inv_pivot = T::one() / *a.get(col, col);

        // Scale sub-column: a[col+1:n, col] /= pivot
        for row in (col + 1)..n {
            *a.get_mut(row, col) = *a.get(row, col) * inv_pivot;
        }

        // Rank-1 update: a[col+1:n, j] -= a[col, j] * a[col+1:n, col]
        for j in (col + 1)..n {
            let a_col_j = *a.get(col, j);
            for row in (col + 1)..n {
                *a.get_mut(row, j) = *a.get(row, j) - a_col_j * *a.get(row, col);
            }
        }
    }

    Ok(even)
}

/// Solve Ax = b given the packed LU decomposition and permutation.
///
/// `lu` is the packed L/U matrix from `lu_in_place`.
/// `perm` is the row permutation from `lu_in_place`.
/// `b` (input) and `x` (output) are separate slices of length n.
pub fn lu_solve<T: FloatScalar>(lu: &impl MatrixRef<T>, perm: &[usize], b: &[T], x: &mut [T]) {
    let n = lu.nrows();

    // Forward substitution: Ly = Pb
    for i in 0..n {
        let mut sum = b[perm[i]];
        for j in 0..i {
            sum = sum - *lu.get(i, j) * x[j];
        }
        x[i] = sum;
    }

    // Back substitution: Ux = y
    for i in (0..n).rev() {
        let mut sum = x[i];
        for j in (i + 1)..n {
            sum = sum - *lu.get(i, j) * x[j];
        }
        x[i] = sum / *lu.get(i, i);
    }
}

/// LU decomposition of a fixed-size square matrix.
///
/// Stores the packed L/U factors and permutation vector.
///
/// # Example
///
/// ```
/// use linest::{ColumnVector, Matrix};
///
/// let a = Matrix::new([[2.0_f64, 1.0], [5.0, 3.0]]);
/// let lu = a.lu().unwrap();
///
/// let x = lu.solve(&ColumnVector::from_column([4.0, 11.0]));
/// assert!((x[0] - 1.0).abs() < 1e-12);
/// assert!((x[1] - 2.0).abs() < 1e-12);
/// assert!((lu.det() - 1.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct LuDecomposition<T, const N: usize> {
    lu: Matrix<T, N, N>,
    perm: [usize; N],
    even: bool,
}

impl<T: FloatScalar, const N: usize> LuDecomposition<T, N> {
    /// Decompose a matrix. Returns an error if the matrix is singular.
    pub fn new(a: &Matrix<T, N, N>) -> Result<Self, LinalgError> {
        let mut lu = *a;
        let mut perm = [0usize; N];
        let even = lu_in_place(&mut lu, &mut perm)?;
        Ok(Self { lu, perm, even })
    }

    /// Solve Ax = b for x.
    pub fn solve(&self, b: &ColumnVector<T, N>) -> ColumnVector<T, N> {
        let mut x = [T::zero(); N];
        lu_solve(&self.lu, &self.perm, &b.data[0], &mut x);
        ColumnVector::from_column(x)
    }

    /// Solve AX = B column by column.
    pub fn solve_matrix<const P: usize>(&self, b: &Matrix<T, N, P>) -> Matrix<T, N, P> {
        let mut out = Matrix::<T, N, P>::zeros();
        for j in 0..P {
            lu_solve(&self.lu, &self.perm, &b.data[j], &mut out.data[j]);
        }
        out
    }

    /// Compute the matrix inverse.
    pub fn inverse(&self) -> Matrix<T, N, N> {
        self.solve_matrix(&Matrix::eye())
    }

    /// Compute the determinant.
    pub fn det(&self) -> T {
        let mut d = if self.even { T::one() } else { -T::one() };
        for i in 0..N {
            d = d * self.lu[(i, i)];
        }
        d
    }
}

/// Convenience methods on square matrices.
impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// LU decomposition with partial pivoting.
    pub fn lu(&self) -> Result<LuDecomposition<T, N>, LinalgError> {
        LuDecomposition::new(self)
    }

    /// Solve `Ax = b` for `x` via LU decomposition.
    pub fn solve(&self, b: &ColumnVector<T, N>) -> Result<ColumnVector<T, N>, LinalgError> {
        Ok(self.lu()?.solve(b))
    }

    /// Matrix inverse via LU decomposition.
    ///
    /// ```
    /// use linest::Matrix;
    /// let a = Matrix::new([[4.0_f64, 7.0], [2.0, 6.0]]);
    /// let id = a * a.inverse().unwrap();
    /// assert!((id[(0, 0)] - 1.0).abs() < 1e-12);
    /// assert!(id[(0, 1)].abs() < 1e-12);
    /// ```
    pub fn inverse(&self) -> Result<Self, LinalgError> {
        Ok(self.lu()?.inverse())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_identity<const N: usize>(m: &Matrix<f64, N, N>, tol: f64) {
        for i in 0..N {
            for j in 0..N {
                let expected = if i == j { 1.0 } else { 0.0 };
                assert!(
                    (m[(i, j)] - expected).abs() < tol,
                    "m[({},{})] = {}, expected {}",
                    i,
                    j,
                    m[(i, j)],
                    expected
                );
            }
        }
    }

    #[test]
    fn lu_solve_3x3() {
        let a = Matrix::new([
            [2.0_f64, 1.0, -1.0],
            [-3.0, -1.0, 2.0],
            [-2.0, 1.0, 2.0],
        ]);
        let x = a.solve(&ColumnVector::from_column([8.0, -11.0, -3.0])).unwrap();
        assert!((x[0] - 2.0).abs() < 1e-12);
        assert!((x[1] - 3.0).abs() < 1e-12);
        assert!((x[2] + 1.0).abs() < 1e-12);
    }

    #[test]
    fn lu_inverse_3x3() {
        let a = Matrix::new([
            [1.0_f64, 2.0, 3.0],
            [0.0, 1.0, 4.0],
            [5.0, 6.0, 0.0],
        ]);
        assert_identity(&(a * a.inverse().unwrap()), 1e-10);
    }

    #[test]
    fn inverse_of_small_but_regular_matrix() {
        let a: Matrix<f64, 3, 3> = Matrix::from_diag([1e-6, 1e-6, 1e-6]);
        let inv = a.inverse().unwrap();
        assert!((inv[(0, 0)] - 1e6).abs() < 1e-6);
    }

    #[test]
    fn tiny_entries_are_not_singular() {
        // Every entry is below machine epsilon; the condition number is 4
        let a = Matrix::new([[2e-18_f64, 1e-18], [1e-18, 3e-18]]);
        let scaled = a * 1e18;
        let inv = a.inverse().unwrap();
        assert_identity(&(scaled * inv * 1e-18), 1e-12);
        assert!((a.lu().unwrap().det() - 5e-36).abs() < 1e-48);

        let one: Matrix<f64, 1, 1> = Matrix::new([[2e-18]]);
        assert!((one.inverse().unwrap()[(0, 0)] * 2e-18 - 1.0).abs() < 1e-15);
    }

    #[test]
    fn singular_relative_to_scale() {
        // Second pivot is a rounding residue of order epsilon · ‖A‖₁
        let a = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0 + 1e-15]]);
        assert_eq!(a.lu().unwrap_err(), LinalgError::Singular);

        let nan = Matrix::new([[f64::NAN]]);
        assert_eq!(nan.lu().unwrap_err(), LinalgError::Singular);
    }

    #[test]
    fn lu_det() {
        let a = Matrix::new([
            [6.0_f64, 1.0, 1.0],
            [4.0, -2.0, 5.0],
            [2.0, 8.0, 7.0],
        ]);
        assert!((a.lu().unwrap().det() + 306.0).abs() < 1e-10);
    }

    #[test]
    fn lu_singular() {
        let a = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
        assert_eq!(a.lu().unwrap_err(), LinalgError::Singular);

        let zero: Matrix<f64, 1, 1> = Matrix::zeros();
        assert_eq!(zero.inverse().unwrap_err(), LinalgError::Singular);
    }

    #[test]
    fn solve_matrix_rhs() {
        let a = Matrix::new([[3.0_f64, 2.0], [1.0, 4.0]]);
        let b = Matrix::new([[7.0, 3.0], [9.0, 1.0]]);
        let x = a.lu().unwrap().solve_matrix(&b);
        let r = a * x - b;
        assert!(r.max_abs() < 1e-12);
    }
}
