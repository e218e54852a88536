// Recursive least-squares estimate of a constant.
// A true value of 1.5 is observed through a gain of 10 for 100 steps. The
// sensor variance drops from 1.0 to 0.4 halfway through, and the estimator
// is told so with `set_measurement_noise`. Prints a CSV table:
//   Step,R,Measurement,Estimate,Variance,Gain

use linest::estimate::Rls;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

const TRUE_VALUE: f64 = 1.5;
const C: f64 = 10.0;
const R_INITIAL: f64 = 1.0;
const R_FINAL: f64 = 0.4;
const SWITCH_STEP: usize = 50;

const STEPS: usize = 100;
const SEED: u64 = 42;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut rls = Rls::new(C, R_INITIAL, 0.0, 0.1);
    let mut r = R_INITIAL;
    let mut noise = Normal::new(0.0, r.sqrt())?;

    println!("Step,R,Measurement,Estimate,Variance,Gain");
    for k in 1..=STEPS {
        if k == SWITCH_STEP + 1 {
            r = R_FINAL;
            noise = Normal::new(0.0, r.sqrt())?;
            rls.set_measurement_noise(r);
        }

        let z = C * TRUE_VALUE + noise.sample(&mut rng);
        let x = rls.update(z)?;
        println!(
            "{},{:.1},{:.6},{:.6},{:.6e},{:.6e}",
            k,
            r,
            z,
            x,
            rls.covariance(),
            rls.gain()
        );
    }
    Ok(())
}
