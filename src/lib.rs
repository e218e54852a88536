//! # linest
//!
//! Linear state estimation on fixed-size matrices, no-std compatible.
//! Converts continuous-time linear models to discrete form and runs the
//! Kalman recursion over recorded control and measurement sequences.
//!
//! ## Quick start
//!
//! ```
//! use linest::estimate::{KalmanFilter, NoiseModel};
//! use linest::system::ContinuousSystem;
//! use linest::{ColumnVector, Matrix};
//!
//! // Damped pendulum, state [θ̇, θ], both components measured
//! let omega2 = 9.81_f64;
//! let sys = ContinuousSystem::new(
//!     Matrix::new([[-0.2 * omega2.sqrt(), -omega2], [1.0, 0.0]]),
//!     Matrix::new([[1.0], [0.0]]),
//!     Matrix::new([[1.0], [1.0]]),
//!     Matrix::eye(),
//! );
//! let d = sys.discretize(0.01).unwrap();
//!
//! let noise = NoiseModel::new(Matrix::new([[0.1]]), Matrix::from_diag([0.2, 0.2]));
//! let kf = KalmanFilter::new(
//!     &d,
//!     *sys.output_matrix(),
//!     &noise,
//!     ColumnVector::from_column([0.0, 0.1]),
//!     Matrix::from_diag([0.1, 0.1]),
//! );
//!
//! let u = vec![ColumnVector::from_column([1.0]); 100];
//! let z = vec![ColumnVector::from_column([0.0, 0.1]); 100];
//! let traj = kf.run(&u, &z).unwrap();
//! assert_eq!(traj.len(), 101);
//! ```
//!
//! ## Modules
//!
//! - [`matrix`] — Fixed-size `Matrix<T, M, N>` with const-generic dimensions,
//!   column-major `[[T; M]; N]` storage. Arithmetic, transpose, norms and a
//!   tolerance symmetry check. [`ColumnVector<T, N>`] is the `N×1` alias used for
//!   states, controls and measurements.
//!
//! - [`linalg`] — LU decomposition with partial pivoting (`solve()`,
//!   `inverse()`, `det()`) and the matrix exponential `Matrix::expm()`.
//!
//! - [`system`] — Continuous model `(A, B, L, C)` and its zero-order-hold
//!   discretization into `(Φ, Γ, Λ)`.
//!
//! - [`estimate`] — [`KalmanFilter`](estimate::KalmanFilter) with step-wise
//!   and batch interfaces, and the scalar [`Rls`](estimate::Rls) estimator
//!   built on the same correction step.
//!
//! - [`traits`] — Element trait hierarchy:
//!   - [`Scalar`] — all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`] — real floats (`Scalar + Float`), used by everything
//!     numeric
//!   - [`MatrixRef`] / [`MatrixMut`] — generic read/write access for algorithms
//!
//! ## Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade:
//! discretization at `debug`, every filter step at `trace`, aborted runs at
//! `warn`. No logger is installed by the crate.
//!
//! ## Cargo features
//!
//! | Feature   | Default  | Description |
//! |-----------|----------|-------------|
//! | `std`     | yes      | Implies `alloc`. Hardware FPU via system libm, `std::error::Error` impls |
//! | `alloc`   | via std  | Batch runners (`run`, `estimate_constant`) and `Trajectory` |
//! | `libm`    | baseline | Pure-Rust software float fallback |

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(feature = "alloc")]
extern crate alloc;

pub mod estimate;
pub mod linalg;
pub mod matrix;
pub mod system;
pub mod traits;

pub use matrix::aliases::{ColumnVector2, Matrix2, Matrix4};
pub use matrix::vector::ColumnVector;
pub use matrix::Matrix;
pub use traits::{FloatScalar, MatrixMut, MatrixRef, Scalar};
