//! End-to-end: discretize a damped pendulum, simulate it with noise and
//! check the filter beats the raw measurements.

use linest::estimate::{CovarianceUpdate, KalmanFilter, KalmanSettings, NoiseModel};
use linest::system::ContinuousSystem;
use linest::{ColumnVector, ColumnVector2, Matrix, Matrix2};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

struct Record {
    truth: Vec<ColumnVector2<f64>>,
    controls: Vec<ColumnVector<f64, 1>>,
    measurements: Vec<ColumnVector2<f64>>,
}

fn pendulum() -> ContinuousSystem<f64, 2, 1, 1, 2> {
    let omega = 9.81_f64.sqrt();
    let zeta = 0.1;
    ContinuousSystem::new(
        Matrix::new([[-2.0 * zeta * omega, -omega * omega], [1.0, 0.0]]),
        Matrix::new([[1.0], [0.0]]),
        Matrix::new([[1.0], [1.0]]),
        Matrix::eye(),
    )
}

fn simulate(period: f64, steps: usize, seed: u64) -> Record {
    let sys = pendulum();
    let d = sys.discretize(period).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    let w = Normal::new(0.0, 0.1_f64.sqrt()).unwrap();
    let v = Normal::new(0.0, 0.2_f64.sqrt()).unwrap();

    let mut rec = Record {
        truth: Vec::with_capacity(steps),
        controls: Vec::with_capacity(steps),
        measurements: Vec::with_capacity(steps),
    };
    let mut x = ColumnVector::from_column([0.0, 0.1]);
    for k in 0..steps {
        let t = k as f64 * period;
        let u = ColumnVector::from_column([if (2.0..5.0).contains(&t) { 0.0 } else { 1.0 }]);
        x = d.propagate(&x, &u) + *d.lambda() * ColumnVector::from_column([w.sample(&mut rng)]);
        let z = *sys.output_matrix() * x
            + ColumnVector::from_column([v.sample(&mut rng), v.sample(&mut rng)]);
        rec.truth.push(x);
        rec.controls.push(u);
        rec.measurements.push(z);
    }
    rec
}

fn filter(period: f64) -> KalmanFilter<f64, 2, 1, 2> {
    let sys = pendulum();
    let d = sys.discretize(period).unwrap();
    let noise = NoiseModel::new(Matrix::new([[0.1]]), Matrix::from_diag([0.2, 0.2]));
    KalmanFilter::new(
        &d,
        *sys.output_matrix(),
        &noise,
        ColumnVector::from_column([0.0, 0.1]),
        Matrix::from_diag([0.1, 0.1]),
    )
}

fn rms(errors: impl Iterator<Item = f64>) -> f64 {
    let (sum, n) = errors.fold((0.0, 0usize), |(s, n), e| (s + e * e, n + 1));
    (sum / n as f64).sqrt()
}

#[test]
fn filtered_error_below_measurement_error() {
    let rec = simulate(0.01, 1000, 42);
    let traj = filter(0.01).run(&rec.controls, &rec.measurements).unwrap();
    assert_eq!(traj.len(), 1001);

    for i in 0..2 {
        let meas = rms(rec.truth.iter().zip(&rec.measurements).map(|(x, z)| z[i] - x[i]));
        let est = rms(rec.truth.iter().zip(traj.iter().skip(1)).map(|(x, e)| e[i] - x[i]));
        assert!(
            est < 0.5 * meas,
            "component {}: estimate rms {} vs measurement rms {}",
            i,
            est,
            meas
        );
    }
}

#[test]
fn covariance_settles() {
    let rec = simulate(0.01, 1000, 7);
    let settings = KalmanSettings {
        record_covariance: true,
        ..KalmanSettings::default()
    };
    let traj = filter(0.01)
        .with_settings(settings)
        .run(&rec.controls, &rec.measurements)
        .unwrap();

    let covs = traj.covariances().unwrap();
    let p_end: Matrix2<f64> = covs[covs.len() - 1];
    let p_prev: Matrix2<f64> = covs[covs.len() - 2];
    assert!(p_end.trace() < covs[0].trace());
    assert!((p_end - p_prev).max_abs() < 1e-6);
    assert!(p_end.is_symmetric_within(1e-12));
}

#[test]
fn joseph_form_tracks_the_same() {
    let rec = simulate(0.01, 500, 3);
    let standard = filter(0.01).run(&rec.controls, &rec.measurements).unwrap();
    let joseph = filter(0.01)
        .with_settings(KalmanSettings {
            covariance_update: CovarianceUpdate::Joseph,
            record_covariance: false,
        })
        .run(&rec.controls, &rec.measurements)
        .unwrap();

    for (a, b) in standard.iter().zip(&joseph) {
        assert!((*a - *b).max_abs() < 1e-9);
    }
}

#[test]
fn runs_in_parallel_threads() {
    let kf = filter(0.01);
    let handles: Vec<_> = (0..4)
        .map(|seed| {
            std::thread::spawn(move || {
                let rec = simulate(0.01, 200, seed);
                kf.run(&rec.controls, &rec.measurements).unwrap()
            })
        })
        .collect();

    for (seed, h) in handles.into_iter().enumerate() {
        let traj = h.join().unwrap();
        let rec = simulate(0.01, 200, seed as u64);
        assert_eq!(traj, kf.run(&rec.controls, &rec.measurements).unwrap());
    }
}
