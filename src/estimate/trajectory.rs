use core::ops::Index;

use alloc::vec::Vec;

use crate::matrix::vector::ColumnVector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// State estimates produced by [`KalmanFilter::run`](super::KalmanFilter::run).
///
/// Entry `0` is the initial condition, entry `k` the estimate after the
/// `k`-th measurement. Covariances are present only when
/// [`KalmanSettings::record_covariance`](super::KalmanSettings) was set, and
/// then have the same length as the states.
///
/// ```
/// use linest::estimate::{KalmanFilter, NoiseModel};
/// use linest::system::DiscreteSystem;
/// use linest::{ColumnVector, Matrix};
///
/// let d = DiscreteSystem::from_parts(
///     Matrix::new([[1.0_f64]]),
///     Matrix::<f64, 1, 0>::zeros(),
///     Matrix::new([[1.0]]),
///     1.0,
/// );
/// let noise = NoiseModel::new(Matrix::new([[0.0]]), Matrix::new([[1.0]]));
/// let kf = KalmanFilter::new(
///     &d,
///     Matrix::new([[1.0]]),
///     &noise,
///     ColumnVector::from_column([3.0]),
///     Matrix::new([[1.0]]),
/// );
///
/// let traj = kf.run(&[], &[]).unwrap();
/// assert_eq!(traj.len(), 1);
/// assert_eq!(traj[0][0], 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory<T, const N: usize> {
    states: Vec<ColumnVector<T, N>>,
    covariances: Option<Vec<Matrix<T, N, N>>>,
}

impl<T: FloatScalar, const N: usize> Trajectory<T, N> {
    pub(crate) fn new(
        states: Vec<ColumnVector<T, N>>,
        covariances: Option<Vec<Matrix<T, N, N>>>,
    ) -> Self {
        Self {
            states,
            covariances,
        }
    }

    /// Number of states, including the initial condition.
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Always `false`: a trajectory holds at least its initial condition.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    #[inline]
    pub fn states(&self) -> &[ColumnVector<T, N>] {
        &self.states
    }

    /// Recorded covariances, if enabled.
    #[inline]
    pub fn covariances(&self) -> Option<&[Matrix<T, N, N>]> {
        self.covariances.as_deref()
    }

    /// Initial condition the run started from.
    pub fn initial(&self) -> Option<&ColumnVector<T, N>> {
        self.states.first()
    }

    /// Estimate after the final measurement.
    pub fn last(&self) -> Option<&ColumnVector<T, N>> {
        self.states.last()
    }

    pub fn iter(&self) -> core::slice::Iter<'_, ColumnVector<T, N>> {
        self.states.iter()
    }

    /// Component `i` of every state, as one column of a table.
    ///
    /// # Panics
    ///
    /// If `i >= N`.
    pub fn signal(&self, i: usize) -> Vec<T> {
        assert!(i < N, "state component {} out of range for {} states", i, N);
        self.states.iter().map(|x| x[i]).collect()
    }

    /// Take ownership of the state vectors.
    pub fn into_states(self) -> Vec<ColumnVector<T, N>> {
        self.states
    }
}

impl<T, const N: usize> Index<usize> for Trajectory<T, N> {
    type Output = ColumnVector<T, N>;

    #[inline]
    fn index(&self, k: usize) -> &ColumnVector<T, N> {
        &self.states[k]
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Trajectory<T, N> {
    type Item = &'a ColumnVector<T, N>;
    type IntoIter = core::slice::Iter<'a, ColumnVector<T, N>>;

    fn into_iter(self) -> Self::IntoIter {
        self.states.iter()
    }
}
