//! Recursive linear state estimation: Kalman filter and scalar RLS.
//!
//! [`KalmanFilter`] runs the discrete predict/update recursion on a model
//! produced by [`discretize`](crate::system::discretize). [`Rls`] is the same
//! filter instantiated with one state, no inputs and one measurement, used
//! for estimating an unknown constant from noisy readings. Both share a
//! single correction step.
//!
//! The two batch entry points differ in output length:
//!
//! - [`KalmanFilter::run`] returns `N + 1` states, the initial condition first.
//! - [`Rls::run`] and [`estimate_constant`] return `N` estimates, one per
//!   measurement, without the initial value.
//!
//! Both are fixed-size and stack-allocated; the batch runners and
//! [`Trajectory`] need the `alloc` feature.
//!
//! # Kalman filter
//!
//! ```
//! use linest::estimate::{KalmanFilter, NoiseModel};
//! use linest::system::ContinuousSystem;
//! use linest::{ColumnVector, Matrix};
//!
//! let sys = ContinuousSystem::new(
//!     Matrix::new([[-1.0_f64]]),
//!     Matrix::new([[1.0]]),
//!     Matrix::new([[1.0]]),
//!     Matrix::new([[1.0]]),
//! );
//! let d = sys.discretize(0.1).unwrap();
//! let noise = NoiseModel::new(Matrix::new([[0.01]]), Matrix::new([[0.5]]));
//!
//! let kf = KalmanFilter::new(
//!     &d,
//!     *sys.output_matrix(),
//!     &noise,
//!     ColumnVector::from_column([0.0]),
//!     Matrix::new([[1.0]]),
//! );
//!
//! let u = [ColumnVector::from_column([1.0]); 3];
//! let z = [ColumnVector::from_column([0.1]); 3];
//! let traj = kf.run(&u, &z).unwrap();
//! assert_eq!(traj.len(), 4);
//! ```
//!
//! # Scalar RLS
//!
//! ```
//! use linest::estimate::estimate_constant;
//!
//! let est = estimate_constant(&[15.0_f64], 10.0, 1.0, 0.0, 0.1).unwrap();
//! assert_eq!(est.len(), 1);
//! assert!((est[0] - 15.0 / 11.0).abs() < 1e-12);
//! ```

mod kalman;
mod rls;
#[cfg(feature = "alloc")]
mod trajectory;


pub use kalman::{CovarianceUpdate, KalmanFilter, KalmanSettings, NoiseModel};
#[cfg(feature = "alloc")]
pub use rls::estimate_constant;
pub use rls::Rls;
#[cfg(feature = "alloc")]
pub use trajectory::Trajectory;

/// Errors from state estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EstimateError {
    /// Innovation covariance `S = C P⁻ Cᵀ + R` is singular at `step`, so no
    /// gain can be formed.
    SingularInnovation { step: usize },
    /// Scalar gain denominator `C P C + R` is zero at `step`.
    DivisionByZero { step: usize },
    /// Control and measurement sequences have different lengths.
    DimensionMismatch { expected: usize, found: usize },
}

impl core::fmt::Display for EstimateError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EstimateError::SingularInnovation { step } => {
                write!(f, "innovation covariance is singular at step {}", step)
            }
            EstimateError::DivisionByZero { step } => {
                write!(f, "RLS gain denominator is zero at step {}", step)
            }
            EstimateError::DimensionMismatch { expected, found } => write!(
                f,
                "sequence length mismatch: {} controls but {} measurements",
                expected, found
            ),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for EstimateError {}
