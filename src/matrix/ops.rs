use core::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::traits::Scalar;
use crate::Matrix;

// ── Element-wise addition / subtraction ─────────────────────────────

macro_rules! elementwise_binop {
    ($Op:ident, $method:ident, $OpAssign:ident, $method_assign:ident, $op:tt) => {
        impl<T: Scalar, const M: usize, const N: usize> $Op for Matrix<T, M, N> {
            type Output = Self;

            fn $method(self, rhs: Self) -> Self {
                let mut out = self;
                out.$method_assign(rhs);
                out
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $OpAssign for Matrix<T, M, N> {
            fn $method_assign(&mut self, rhs: Self) {
                for j in 0..N {
                    for i in 0..M {
                        self.data[j][i] = self.data[j][i] $op rhs.data[j][i];
                    }
                }
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $OpAssign<&Matrix<T, M, N>>
            for Matrix<T, M, N>
        {
            fn $method_assign(&mut self, rhs: &Matrix<T, M, N>) {
                self.$method_assign(*rhs);
            }
        }

        // Matrix is Copy, so &Matrix ops just deref and delegate.
        impl<T: Scalar, const M: usize, const N: usize> $Op<Matrix<T, M, N>>
            for &Matrix<T, M, N>
        {
            type Output = Matrix<T, M, N>;
            fn $method(self, rhs: Matrix<T, M, N>) -> Matrix<T, M, N> {
                (*self).$method(rhs)
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $Op<&Matrix<T, M, N>>
            for Matrix<T, M, N>
        {
            type Output = Matrix<T, M, N>;
            fn $method(self, rhs: &Matrix<T, M, N>) -> Matrix<T, M, N> {
                self.$method(*rhs)
            }
        }

        impl<T: Scalar, const M: usize, const N: usize> $Op<&Matrix<T, M, N>>
            for &Matrix<T, M, N>
        {
            type Output = Matrix<T, M, N>;
            fn $method(self, rhs: &Matrix<T, M, N>) -> Matrix<T, M, N> {
                (*self).$method(*rhs)
            }
        }
    };
}

elementwise_binop!(Add, add, AddAssign, add_assign, +);
elementwise_binop!(Sub, sub, SubAssign, sub_assign, -);

// ── Negation ────────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Neg for Matrix<T, M, N> {
    type Output = Self;

    fn neg(self) -> Self {
        Self::zeros() - self
    }
}

impl<T: Scalar, const M: usize, const N: usize> Neg for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;

    fn neg(self) -> Matrix<T, M, N> {
        (*self).neg()
    }
}

// ── Matrix multiplication: (M×N) * (N×P) → (M×P) ──────────────────

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;

    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        let mut out = Matrix::<T, M, P>::zeros();
        // j-k-i order walks both operands down their contiguous columns
        for j in 0..P {
            for k in 0..N {
                let r = rhs.data[j][k];
                for i in 0..M {
                    out.data[j][i] = out.data[j][i] + self.data[k][i] * r;
                }
            }
        }
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<Matrix<T, N, P>>
    for &Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;
    fn mul(self, rhs: Matrix<T, N, P>) -> Matrix<T, M, P> {
        (*self).mul(rhs)
    }
}

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<&Matrix<T, N, P>>
    for Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;
    fn mul(self, rhs: &Matrix<T, N, P>) -> Matrix<T, M, P> {
        self.mul(*rhs)
    }
}

impl<T: Scalar, const M: usize, const N: usize, const P: usize> Mul<&Matrix<T, N, P>>
    for &Matrix<T, M, N>
{
    type Output = Matrix<T, M, P>;
    fn mul(self, rhs: &Matrix<T, N, P>) -> Matrix<T, M, P> {
        (*self).mul(*rhs)
    }
}

// ── Scalar multiplication ───────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for Matrix<T, M, N> {
    type Output = Self;

    fn mul(self, rhs: T) -> Self {
        let mut out = self;
        out *= rhs;
        out
    }
}

impl<T: Scalar, const M: usize, const N: usize> MulAssign<T> for Matrix<T, M, N> {
    fn mul_assign(&mut self, rhs: T) {
        for col in self.data.iter_mut() {
            for v in col.iter_mut() {
                *v = *v * rhs;
            }
        }
    }
}

impl<T: Scalar, const M: usize, const N: usize> Mul<T> for &Matrix<T, M, N> {
    type Output = Matrix<T, M, N>;
    fn mul(self, rhs: T) -> Matrix<T, M, N> {
        (*self).mul(rhs)
    }
}

// scalar * matrix (concrete impls to avoid orphan rules)
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {
        $(
            impl<const M: usize, const N: usize> Mul<Matrix<$t, M, N>> for $t {
                type Output = Matrix<$t, M, N>;

                fn mul(self, rhs: Matrix<$t, M, N>) -> Matrix<$t, M, N> {
                    rhs * self
                }
            }

            impl<const M: usize, const N: usize> Mul<&Matrix<$t, M, N>> for $t {
                type Output = Matrix<$t, M, N>;

                fn mul(self, rhs: &Matrix<$t, M, N>) -> Matrix<$t, M, N> {
                    *rhs * self
                }
            }
        )*
    };
}

impl_scalar_lhs_mul!(f32, f64);

// ── Transpose ───────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Transpose: (M×N) → (N×M).
    pub fn transpose(&self) -> Matrix<T, N, M> {
        let mut out = Matrix::<T, N, M>::zeros();
        for j in 0..N {
            for i in 0..M {
                out.data[i][j] = self.data[j][i];
            }
        }
        out
    }
}
