use crate::traits::FloatScalar;
use crate::Matrix;

use super::{discretize, DiscreteSystem, SystemError};

/// Continuous-time linear system `ẋ = Ax + Bu + Lw`, `z = Cx + v`.
///
/// - `N` — state dimension
/// - `M` — control input dimension
/// - `P` — process-noise input dimension
/// - `R` — measurement dimension
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuousSystem<T, const N: usize, const M: usize, const P: usize, const R: usize> {
    /// State matrix.
    pub a: Matrix<T, N, N>,
    /// Control input matrix.
    pub b: Matrix<T, N, M>,
    /// Process-noise input matrix.
    pub l: Matrix<T, N, P>,
    /// Observation matrix.
    pub c: Matrix<T, R, N>,
}

impl<T: FloatScalar, const N: usize, const M: usize, const P: usize, const R: usize>
    ContinuousSystem<T, N, M, P, R>
{
    pub fn new(
        a: Matrix<T, N, N>,
        b: Matrix<T, N, M>,
        l: Matrix<T, N, P>,
        c: Matrix<T, R, N>,
    ) -> Self {
        Self { a, b, l, c }
    }

    /// Observation matrix `C`, passed unchanged to the estimator.
    #[inline]
    pub fn output_matrix(&self) -> &Matrix<T, R, N> {
        &self.c
    }

    /// Sample the system with period `t`. See [`discretize`].
    pub fn discretize(&self, t: T) -> Result<DiscreteSystem<T, N, M, P>, SystemError> {
        discretize(&self.a, &self.b, &self.l, t)
    }
}
