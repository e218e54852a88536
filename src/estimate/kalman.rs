use crate::matrix::vector::ColumnVector;
use crate::system::DiscreteSystem;
use crate::traits::FloatScalar;
use crate::Matrix;

use super::EstimateError;
#[cfg(feature = "alloc")]
use super::Trajectory;
#[cfg(feature = "alloc")]
use alloc::vec::Vec;

/// Process and measurement noise covariances.
///
/// `Q` is `P×P` (one row per noise input of `L`), `R` is `R×R`. Both are
/// expected to be symmetric positive semi-definite; this is not checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NoiseModel<T, const P: usize, const R: usize> {
    /// Process noise covariance.
    pub q: Matrix<T, P, P>,
    /// Measurement noise covariance.
    pub r: Matrix<T, R, R>,
}

impl<T: FloatScalar, const P: usize, const R: usize> NoiseModel<T, P, R> {
    pub fn new(q: Matrix<T, P, P>, r: Matrix<T, R, R>) -> Self {
        Self { q, r }
    }
}

/// Form of the covariance correction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CovarianceUpdate {
    /// `P = (I − KC) P⁻`.
    #[default]
    Standard,
    /// `P = (I − KC) P⁻ (I − KC)ᵀ + K R Kᵀ`, symmetric by construction.
    Joseph,
}

/// Runtime options for [`KalmanFilter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KalmanSettings {
    /// Covariance correction form (default: [`CovarianceUpdate::Standard`]).
    pub covariance_update: CovarianceUpdate,
    /// Store the covariance after every step in [`KalmanFilter::run`]
    /// (default: false).
    pub record_covariance: bool,
}

impl Default for KalmanSettings {
    fn default() -> Self {
        Self {
            covariance_update: CovarianceUpdate::Standard,
            record_covariance: false,
        }
    }
}

/// Discrete-time linear Kalman filter.
///
/// - `N` — state dimension
/// - `M` — control input dimension
/// - `R` — measurement dimension
///
/// Each step predicts with the discrete model and corrects with one
/// measurement:
///
/// ```text
/// x⁻ = Φx + Γu              P⁻ = ΦPΦᵀ + ΛQΛᵀ
/// S  = CP⁻Cᵀ + R            K  = P⁻CᵀS⁻¹
/// x  = x⁻ + K(z − Cx⁻)      P  = (I − KC)P⁻
/// ```
///
/// The filter owns copies of every matrix it uses, so it is `Copy` and can
/// be sent to another thread.
///
/// # Example
///
/// ```
/// use linest::estimate::{KalmanFilter, NoiseModel};
/// use linest::system::DiscreteSystem;
/// use linest::{ColumnVector, Matrix};
///
/// // Random walk observed directly
/// let d = DiscreteSystem::from_parts(
///     Matrix::new([[1.0_f64]]),
///     Matrix::<f64, 1, 0>::zeros(),
///     Matrix::new([[1.0]]),
///     1.0,
/// );
/// let noise = NoiseModel::new(Matrix::new([[0.1]]), Matrix::new([[1.0]]));
/// let mut kf = KalmanFilter::new(
///     &d,
///     Matrix::new([[1.0]]),
///     &noise,
///     ColumnVector::from_column([0.0]),
///     Matrix::new([[1.0]]),
/// );
///
/// kf.step(&ColumnVector::zeros(), &ColumnVector::from_column([2.0])).unwrap();
/// assert!(kf.state()[0] > 0.0 && kf.state()[0] < 2.0);
/// assert!(kf.covariance()[(0, 0)] < 1.1);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct KalmanFilter<T, const N: usize, const M: usize, const R: usize> {
    phi: Matrix<T, N, N>,
    gamma: Matrix<T, N, M>,
    /// `ΛQΛᵀ`, formed once.
    process_noise: Matrix<T, N, N>,
    c: Matrix<T, R, N>,
    r: Matrix<T, R, R>,
    x: ColumnVector<T, N>,
    p: Matrix<T, N, N>,
    gain: Matrix<T, N, R>,
    steps: usize,
    settings: KalmanSettings,
}

impl<T: FloatScalar, const N: usize, const M: usize, const R: usize> KalmanFilter<T, N, M, R> {
    /// Build a filter from a discretized model, an observation matrix `C`,
    /// noise covariances and the initial estimate `(x0, P0)`.
    pub fn new<const P: usize>(
        system: &DiscreteSystem<T, N, M, P>,
        c: Matrix<T, R, N>,
        noise: &NoiseModel<T, P, R>,
        x0: ColumnVector<T, N>,
        p0: Matrix<T, N, N>,
    ) -> Self {
        Self::from_parts(
            *system.phi(),
            *system.gamma(),
            system.process_noise(&noise.q),
            c,
            noise.r,
            x0,
            p0,
        )
    }

    pub(crate) fn from_parts(
        phi: Matrix<T, N, N>,
        gamma: Matrix<T, N, M>,
        process_noise: Matrix<T, N, N>,
        c: Matrix<T, R, N>,
        r: Matrix<T, R, R>,
        x0: ColumnVector<T, N>,
        p0: Matrix<T, N, N>,
    ) -> Self {
        Self {
            phi,
            gamma,
            process_noise,
            c,
            r,
            x: x0,
            p: p0,
            gain: Matrix::zeros(),
            steps: 0,
            settings: KalmanSettings::default(),
        }
    }

    /// Replace the runtime settings.
    pub fn with_settings(mut self, settings: KalmanSettings) -> Self {
        self.settings = settings;
        self
    }

    #[inline]
    pub fn settings(&self) -> &KalmanSettings {
        &self.settings
    }

    /// Current state estimate.
    #[inline]
    pub fn state(&self) -> &ColumnVector<T, N> {
        &self.x
    }

    /// Current state covariance.
    #[inline]
    pub fn covariance(&self) -> &Matrix<T, N, N> {
        &self.p
    }

    /// Kalman gain of the last successful update (zero before the first).
    #[inline]
    pub fn gain(&self) -> &Matrix<T, N, R> {
        &self.gain
    }

    /// Number of successful updates since construction or the last
    /// [`set_state`](Self::set_state).
    #[inline]
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Re-initialize the estimate and reset the step counter.
    pub fn set_state(&mut self, x: ColumnVector<T, N>, p: Matrix<T, N, N>) {
        self.x = x;
        self.p = p;
        self.steps = 0;
    }

    /// Replace the measurement noise covariance for subsequent updates.
    pub fn set_measurement_noise(&mut self, r: Matrix<T, R, R>) {
        self.r = r;
    }

    /// Time update: `x⁻ = Φx + Γu`, `P⁻ = ΦPΦᵀ + ΛQΛᵀ`.
    pub fn predict(&mut self, u: &ColumnVector<T, M>) {
        self.x = self.phi * self.x + self.gamma * *u;
        self.p = self.phi * self.p * self.phi.transpose() + self.process_noise;
    }

    /// Measurement update with `z`.
    ///
    /// On error the filter is left untouched.
    ///
    /// # Errors
    ///
    /// [`EstimateError::SingularInnovation`] if `S = CPCᵀ + R` cannot be
    /// inverted; `step` is the value of [`steps`](Self::steps).
    pub fn update(&mut self, z: &ColumnVector<T, R>) -> Result<(), EstimateError> {
        let step = self.steps;
        let ct = self.c.transpose();
        let s = self.c * self.p * ct + self.r;
        let s_inv = s
            .inverse()
            .map_err(|_| EstimateError::SingularInnovation { step })?;
        let k = self.p * ct * s_inv;

        let innovation = *z - self.c * self.x;
        self.x = self.x + k * innovation;

        let i_kc = Matrix::<T, N, N>::eye() - k * self.c;
        self.p = match self.settings.covariance_update {
            CovarianceUpdate::Standard => i_kc * self.p,
            CovarianceUpdate::Joseph => {
                i_kc * self.p * i_kc.transpose() + k * self.r * k.transpose()
            }
        };
        self.gain = k;
        self.steps += 1;

        log::trace!(
            "kalman step {}: innovation={:?}, trace(P)={:?}",
            step,
            innovation.to_array(),
            self.p.trace()
        );
        Ok(())
    }

    /// One full recursion: [`predict`](Self::predict) with `u`, then
    /// [`update`](Self::update) with `z`.
    ///
    /// If the update fails the prediction is rolled back as well.
    pub fn step(
        &mut self,
        u: &ColumnVector<T, M>,
        z: &ColumnVector<T, R>,
    ) -> Result<(), EstimateError> {
        let (x, p) = (self.x, self.p);
        self.predict(u);
        if let Err(e) = self.update(z) {
            self.x = x;
            self.p = p;
            return Err(e);
        }
        Ok(())
    }

    /// Filter a whole record, starting from the current estimate.
    ///
    /// Returns `controls.len() + 1` states: the current state, then the
    /// corrected estimate after each step. The filter itself is not
    /// modified, so repeated calls give identical results. Error steps are
    /// indices into the input slices.
    ///
    /// # Errors
    ///
    /// - [`EstimateError::DimensionMismatch`] if the slices differ in
    ///   length, before any step runs.
    /// - [`EstimateError::SingularInnovation`] at the first step whose
    ///   innovation covariance is singular.
    #[cfg(feature = "alloc")]
    pub fn run(
        &self,
        controls: &[ColumnVector<T, M>],
        measurements: &[ColumnVector<T, R>],
    ) -> Result<Trajectory<T, N>, EstimateError> {
        if controls.len() != measurements.len() {
            return Err(EstimateError::DimensionMismatch {
                expected: controls.len(),
                found: measurements.len(),
            });
        }

        let mut filter = *self;
        filter.steps = 0;

        let record = self.settings.record_covariance;
        let mut states = Vec::with_capacity(controls.len() + 1);
        let mut covariances = if record {
            Some(Vec::with_capacity(controls.len() + 1))
        } else {
            None
        };

        states.push(filter.x);
        if let Some(c) = covariances.as_mut() {
            c.push(filter.p);
        }

        for (u, z) in controls.iter().zip(measurements) {
            filter.predict(u);
            if let Err(e) = filter.update(z) {
                log::warn!("kalman run aborted: {}", e);
                return Err(e);
            }
            states.push(filter.x);
            if let Some(c) = covariances.as_mut() {
                c.push(filter.p);
            }
        }

        log::debug!("kalman run finished: {} steps", controls.len());
        Ok(Trajectory::new(states, covariances))
    }
}
