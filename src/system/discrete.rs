use crate::traits::FloatScalar;
use crate::{ColumnVector, Matrix};

use super::SystemError;

/// Discrete propagation matrices of a sampled linear system.
///
/// `x[k+1] = Φ x[k] + Γ u[k] + Λ w[k]`. Produced by [`discretize`] and
/// immutable afterwards; estimators copy what they need out of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiscreteSystem<T, const N: usize, const M: usize, const P: usize> {
    phi: Matrix<T, N, N>,
    gamma: Matrix<T, N, M>,
    lambda: Matrix<T, N, P>,
    period: T,
}

impl<T: FloatScalar, const N: usize, const M: usize, const P: usize> DiscreteSystem<T, N, M, P> {
    /// Assemble a discrete system from matrices obtained elsewhere.
    ///
    /// `period` is informational only.
    pub fn from_parts(
        phi: Matrix<T, N, N>,
        gamma: Matrix<T, N, M>,
        lambda: Matrix<T, N, P>,
        period: T,
    ) -> Self {
        Self {
            phi,
            gamma,
            lambda,
            period,
        }
    }

    /// State-transition matrix Φ.
    #[inline]
    pub fn phi(&self) -> &Matrix<T, N, N> {
        &self.phi
    }

    /// Input gain Γ.
    #[inline]
    pub fn gamma(&self) -> &Matrix<T, N, M> {
        &self.gamma
    }

    /// Noise input gain Λ.
    #[inline]
    pub fn lambda(&self) -> &Matrix<T, N, P> {
        &self.lambda
    }

    /// Sample period the matrices were computed for.
    #[inline]
    pub fn period(&self) -> T {
        self.period
    }

    /// Discrete process-noise covariance `Λ Q Λᵀ` for a noise covariance `Q`.
    pub fn process_noise(&self, q: &Matrix<T, P, P>) -> Matrix<T, N, N> {
        self.lambda * *q * self.lambda.transpose()
    }

    /// Noise-free one-step propagation `Φx + Γu`.
    pub fn propagate(&self, x: &ColumnVector<T, N>, u: &ColumnVector<T, M>) -> ColumnVector<T, N> {
        self.phi * *x + self.gamma * *u
    }
}

/// Convert continuous matrices `(A, B, L)` and a sample period `t` into
/// `(Φ, Γ, Λ)`.
///
/// - `Φ = e^{At}`
/// - `Γ = A⁻¹(Φ − I)B`
/// - `Λ = A⁻¹(Φ − I)L`
///
/// A pure function: the same inputs always give the same matrices.
///
/// # Errors
///
/// - [`SystemError::InvalidSamplePeriod`] if `t` is not finite and positive.
/// - [`SystemError::SingularStateMatrix`] if `A` is not invertible.
///
/// ```
/// use linest::system::{discretize, SystemError};
/// use linest::Matrix;
///
/// let a = Matrix::new([[0.0_f64]]);
/// let b = Matrix::new([[0.0]]);
/// let l = Matrix::new([[1.0]]);
/// assert_eq!(discretize(&a, &b, &l, 1.0).unwrap_err(), SystemError::SingularStateMatrix);
/// ```
pub fn discretize<T: FloatScalar, const N: usize, const M: usize, const P: usize>(
    a: &Matrix<T, N, N>,
    b: &Matrix<T, N, M>,
    l: &Matrix<T, N, P>,
    t: T,
) -> Result<DiscreteSystem<T, N, M, P>, SystemError> {
    if !(t.is_finite() && t > T::zero()) {
        return Err(SystemError::InvalidSamplePeriod);
    }

    let a_lu = a.lu().map_err(|_| SystemError::SingularStateMatrix)?;

    let phi = (*a * t).expm()?;
    // A⁻¹(Φ − I), shared by both gains
    let integral = a_lu.solve_matrix(&(phi - Matrix::eye()));

    let gamma = integral * *b;
    let lambda = integral * *l;

    log::debug!(
        "discretized {}-state system: period={:?}, |Φ|₁={:?}",
        N,
        t,
        phi.norm_one()
    );

    Ok(DiscreteSystem {
        phi,
        gamma,
        lambda,
        period: t,
    })
}
