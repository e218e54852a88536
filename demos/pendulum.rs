// Damped pendulum tracked by a Kalman filter.
// Simulates 10 s of the linearized pendulum at 100 Hz with process and
// measurement noise, filters the noisy readings and prints a CSV table:
//   Time,True_theta,True_theta_dot,Meas_theta,Meas_theta_dot,Est_theta,Est_theta_dot
// The input torque is switched off between t = 2 s and t = 5 s.

use linest::estimate::{KalmanFilter, NoiseModel};
use linest::system::ContinuousSystem;
use linest::{ColumnVector, Matrix};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

const G: f64 = 9.81;
const LENGTH: f64 = 1.0;
const MASS: f64 = 1.0;
const ZETA: f64 = 0.1;

const PERIOD: f64 = 0.01;
const DURATION: f64 = 10.0;
const SEED: u64 = 42;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let omega = (G / LENGTH).sqrt();

    // State [θ̇, θ]
    let sys = ContinuousSystem::new(
        Matrix::new([[-2.0 * ZETA * omega, -omega * omega], [1.0, 0.0]]),
        Matrix::new([[1.0 / (MASS * LENGTH * LENGTH)], [0.0]]),
        Matrix::new([[1.0], [1.0]]),
        Matrix::eye(),
    );
    let d = sys.discretize(PERIOD)?;
    eprintln!("Φ =\n{}\nΓ =\n{}\nΛ =\n{}", d.phi(), d.gamma(), d.lambda());

    let q = Matrix::new([[0.1]]);
    let r = Matrix::from_diag([0.2, 0.2]);
    let noise = NoiseModel::new(q, r);

    let x0 = ColumnVector::from_column([0.0, 0.1]);
    let p0 = Matrix::from_diag([0.1, 0.1]);
    let kf = KalmanFilter::new(&d, *sys.output_matrix(), &noise, x0, p0);

    let mut rng = StdRng::seed_from_u64(SEED);
    let w = Normal::new(0.0, q[(0, 0)].sqrt())?;
    let v = Normal::new(0.0, r[(0, 0)].sqrt())?;

    let steps = (DURATION / PERIOD).round() as usize;
    let mut truth = Vec::with_capacity(steps);
    let mut controls = Vec::with_capacity(steps);
    let mut measurements = Vec::with_capacity(steps);

    let mut x = x0;
    for k in 0..steps {
        let t = k as f64 * PERIOD;
        let torque = if (2.0..5.0).contains(&t) { 0.0 } else { 1.0 };
        let u = ColumnVector::from_column([torque]);

        x = d.propagate(&x, &u) + *d.lambda() * ColumnVector::from_column([w.sample(&mut rng)]);
        let z = *sys.output_matrix() * x
            + ColumnVector::from_column([v.sample(&mut rng), v.sample(&mut rng)]);

        truth.push(x);
        controls.push(u);
        measurements.push(z);
    }

    let traj = kf.run(&controls, &measurements)?;

    println!("Time,True_theta,True_theta_dot,Meas_theta,Meas_theta_dot,Est_theta,Est_theta_dot");
    for k in 0..steps {
        let (x, z, e) = (&truth[k], &measurements[k], &traj[k + 1]);
        println!(
            "{:.2},{:.6},{:.6},{:.6},{:.6},{:.6},{:.6}",
            (k + 1) as f64 * PERIOD,
            x[1],
            x[0],
            z[1],
            z[0],
            e[1],
            e[0]
        );
    }
    Ok(())
}
