//! Continuous-to-discrete conversion of linear time-invariant systems.
//!
//! A continuous model
//!
//! ```text
//! ẋ = A x + B u + L w
//! z = C x + v
//! ```
//!
//! sampled with period `T` under zero-order hold becomes
//!
//! ```text
//! x[k+1] = Φ x[k] + Γ u[k] + Λ w[k]
//! Φ = e^{AT},  Γ = A⁻¹(Φ − I)B,  Λ = A⁻¹(Φ − I)L
//! ```
//!
//! The closed form for Γ and Λ needs `A` to be invertible; a singular `A`
//! is reported as [`SystemError::SingularStateMatrix`].
//!
//! # Example
//!
//! ```
//! use linest::system::ContinuousSystem;
//! use linest::Matrix;
//!
//! // First-order lag ẋ = -x + u + w, measured directly
//! let sys = ContinuousSystem::new(
//!     Matrix::new([[-1.0_f64]]),
//!     Matrix::new([[1.0]]),
//!     Matrix::new([[1.0]]),
//!     Matrix::new([[1.0]]),
//! );
//! let d = sys.discretize(1.0).unwrap();
//! assert!((d.phi()[(0, 0)] - 0.36787944117144233).abs() < 1e-12);
//! assert!((d.gamma()[(0, 0)] - 0.6321205588285577).abs() < 1e-12);
//! ```

mod continuous;
mod discrete;


pub use continuous::ContinuousSystem;
pub use discrete::{discretize, DiscreteSystem};

use crate::linalg::LinalgError;

/// Errors from system discretization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SystemError {
    /// The state matrix `A` is not invertible, so the closed-form input and
    /// noise gains cannot be formed.
    SingularStateMatrix,
    /// The sample period is not a finite positive number.
    InvalidSamplePeriod,
    /// The matrix exponential failed.
    Linalg(LinalgError),
}

impl core::fmt::Display for SystemError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            SystemError::SingularStateMatrix => {
                write!(f, "state matrix A is singular; closed-form discretization needs A⁻¹")
            }
            SystemError::InvalidSamplePeriod => {
                write!(f, "sample period must be finite and positive")
            }
            SystemError::Linalg(e) => write!(f, "matrix exponential failed: {}", e),
        }
    }
}

impl From<LinalgError> for SystemError {
    fn from(e: LinalgError) -> Self {
        SystemError::Linalg(e)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SystemError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SystemError::Linalg(e) => Some(e),
            _ => None,
        }
    }
}
