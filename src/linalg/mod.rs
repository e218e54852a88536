//! Dense linear algebra primitives needed by the estimators.
//!
//! - [`LuDecomposition`] — partial-pivoting LU with `solve()`, `inverse()`
//!   and `det()`; convenience methods `a.lu()`, `a.solve(&b)`, `a.inverse()`.
//! - [`Matrix::expm`](crate::Matrix::expm) — matrix exponential by Padé
//!   scaling and squaring.
//!
//! Both are treated as opaque numeric building blocks by
//! [`system`](crate::system) and [`estimate`](crate::estimate).

pub(crate) mod expm;
pub(crate) mod lu;

pub use lu::{lu_in_place, lu_solve, LuDecomposition};

/// Errors from linear algebra operations.
///
/// ```
/// use linest::Matrix;
/// use linest::linalg::LinalgError;
///
/// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.lu().unwrap_err(), LinalgError::Singular);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Matrix is singular or nearly singular: a pivot was zero, not finite,
    /// or no larger than `epsilon · ‖A‖₁`.
    Singular,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}
