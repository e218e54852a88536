use crate::matrix::vector::ColumnVector;
use crate::traits::FloatScalar;
use crate::Matrix;

use super::{EstimateError, KalmanFilter};
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Scalar recursive least squares for an unknown constant `x` observed as
/// `z = Cx + v`, `v ~ N(0, R)`.
///
/// ```text
/// K = PC / (CPC + R)
/// x ← x + K(z − Cx)
/// P ← (1 − KC)P
/// ```
///
/// This is a [`KalmanFilter`] with one state, no inputs, one measurement and
/// no time update; only the correction step runs.
///
/// ```
/// use linest::estimate::Rls;
///
/// let mut rls = Rls::new(10.0_f64, 1.0, 0.0, 0.1);
/// let x1 = rls.update(15.0).unwrap();
/// assert!((rls.gain() - 1.0 / 11.0).abs() < 1e-12);
/// assert!((x1 - 1.3636363636).abs() < 1e-9);
/// assert!((rls.covariance() - 0.1 / 11.0).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Rls<T> {
    filter: KalmanFilter<T, 1, 0, 1>,
}

impl<T: FloatScalar> Rls<T> {
    /// Observation gain `c`, measurement variance `r`, initial estimate
    /// `x0` with variance `p0`.
    pub fn new(c: T, r: T, x0: T, p0: T) -> Self {
        Self {
            filter: KalmanFilter::from_parts(
                Matrix::eye(),
                Matrix::zeros(),
                Matrix::zeros(),
                Matrix::new([[c]]),
                Matrix::new([[r]]),
                ColumnVector::from_column([x0]),
                Matrix::new([[p0]]),
            ),
        }
    }

    /// Fold in one measurement and return the new estimate.
    ///
    /// # Errors
    ///
    /// [`EstimateError::DivisionByZero`] if `CPC + R` is exactly zero or not
    /// finite. The estimator is left untouched.
    pub fn update(&mut self, z: T) -> Result<T, EstimateError> {
        self.filter
            .update(&ColumnVector::from_column([z]))
            .map_err(|e| match e {
                EstimateError::SingularInnovation { step } => EstimateError::DivisionByZero { step },
                other => other,
            })?;
        Ok(self.estimate())
    }

    /// Current estimate of the constant.
    #[inline]
    pub fn estimate(&self) -> T {
        self.filter.state()[0]
    }

    /// Current estimate variance.
    #[inline]
    pub fn covariance(&self) -> T {
        self.filter.covariance()[(0, 0)]
    }

    /// Gain used by the last update (zero before the first).
    #[inline]
    pub fn gain(&self) -> T {
        self.filter.gain()[(0, 0)]
    }

    /// Number of measurements folded in.
    #[inline]
    pub fn steps(&self) -> usize {
        self.filter.steps()
    }

    /// Change the measurement variance for subsequent updates.
    pub fn set_measurement_noise(&mut self, r: T) {
        self.filter.set_measurement_noise(Matrix::new([[r]]));
    }

    /// Estimate after each measurement, starting from the current state.
    ///
    /// One value per measurement, without the initial estimate; an empty
    /// input gives an empty output. `self` is not modified.
    #[cfg(feature = "alloc")]
    pub fn run(&self, measurements: &[T]) -> Result<Vec<T>, EstimateError> {
        let mut rls = *self;
        rls.filter
            .set_state(*self.filter.state(), *self.filter.covariance());

        let mut out = Vec::with_capacity(measurements.len());
        for &z in measurements {
            match rls.update(z) {
                Ok(x) => out.push(x),
                Err(e) => {
                    log::warn!("RLS run aborted: {}", e);
                    return Err(e);
                }
            }
        }
        Ok(out)
    }
}

/// Estimate a constant from `measurements` in one call.
///
/// Equivalent to `Rls::new(c, r, x0, p0).run(measurements)`.
#[cfg(feature = "alloc")]
pub fn estimate_constant<T: FloatScalar>(
    measurements: &[T],
    c: T,
    r: T,
    x0: T,
    p0: T,
) -> Result<Vec<T>, EstimateError> {
    Rls::new(c, r, x0, p0).run(measurements)
}
