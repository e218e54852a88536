use crate::linalg::LinalgError;
use crate::traits::FloatScalar;
use crate::Matrix;

// Scaling and squaring with Padé approximants, after Higham, "The Scaling
// and Squaring Method for the Matrix Exponential Revisited" (2005).
// Order thresholds on the 1-norm are the double-precision θ_m values.

const THETA_3: f64 = 1.495585217958292e-2;
const THETA_5: f64 = 2.539398330063230e-1;
const THETA_7: f64 = 9.504178996162932e-1;
const THETA_9: f64 = 2.097847961257068;
const THETA_13: f64 = 5.371920351148152;

const PADE_3: [f64; 4] = [120.0, 60.0, 12.0, 1.0];
const PADE_5: [f64; 6] = [30240.0, 15120.0, 3360.0, 420.0, 30.0, 1.0];
const PADE_7: [f64; 8] = [
    17297280.0, 8648640.0, 1995840.0, 277200.0, 25200.0, 1512.0, 56.0, 1.0,
];
const PADE_9: [f64; 10] = [
    17643225600.0,
    8821612800.0,
    2075673600.0,
    302702400.0,
    30270240.0,
    2162160.0,
    110880.0,
    3960.0,
    90.0,
    1.0,
];
const PADE_13: [f64; 14] = [
    64764752532480000.0,
    32382376266240000.0,
    7771770303897600.0,
    1187353796428800.0,
    129060195264000.0,
    10559470521600.0,
    670442572800.0,
    33522128640.0,
    1323241920.0,
    40840800.0,
    960960.0,
    16380.0,
    182.0,
    1.0,
];

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Matrix exponential `e^A`.
    ///
    /// The Padé order (3, 5, 7, 9 or 13) is picked from the 1-norm of `A`;
    /// large matrices are scaled by `2^-s` first and squared back `s` times.
    ///
    /// Fails only if the Padé denominator cannot be factored, which does not
    /// happen for finite input.
    ///
    /// ```
    /// use linest::Matrix;
    ///
    /// let a = Matrix::new([[-1.0_f64]]);
    /// let phi = a.expm().unwrap();
    /// assert!((phi[(0, 0)] - (-1.0_f64).exp()).abs() < 1e-15);
    /// ```
    pub fn expm(&self) -> Result<Self, LinalgError> {
        let norm = self.norm_one();

        let (u, v, squarings) = if norm < T::lit(THETA_3) {
            let (u, v) = pade_low(self, &PADE_3);
            (u, v, 0)
        } else if norm < T::lit(THETA_5) {
            let (u, v) = pade_low(self, &PADE_5);
            (u, v, 0)
        } else if norm < T::lit(THETA_7) {
            let (u, v) = pade_low(self, &PADE_7);
            (u, v, 0)
        } else if norm < T::lit(THETA_9) {
            let (u, v) = pade_low(self, &PADE_9);
            (u, v, 0)
        } else {
            let s = (norm / T::lit(THETA_13)).log2().ceil().max(T::zero());
            let squarings = s.to_i32().unwrap_or(0);
            let scaled = *self * T::lit(2.0).powi(-squarings);
            let (u, v) = pade_13(&scaled);
            (u, v, squarings)
        };

        // r = (V - U)^-1 (V + U)
        let mut r = (v - u).lu()?.solve_matrix(&(v + u));

        for _ in 0..squarings {
            r = r * r;
        }
        Ok(r)
    }
}

/// Padé approximant of order 3, 5, 7 or 9 from its coefficient table.
///
/// Returns `(U, V)` with `U = A Σ b[2k+1] A^{2k}` and `V = Σ b[2k] A^{2k}`.
fn pade_low<T: FloatScalar, const N: usize, const K: usize>(
    a: &Matrix<T, N, N>,
    b: &[f64; K],
) -> (Matrix<T, N, N>, Matrix<T, N, N>) {
    let a2 = *a * *a;
    let mut power: Matrix<T, N, N> = Matrix::eye();
    let mut odd = Matrix::zeros();
    let mut even = Matrix::zeros();
    for k in 0..K / 2 {
        odd += power * T::lit(b[2 * k + 1]);
        even += power * T::lit(b[2 * k]);
        power = power * a2;
    }
    (*a * odd, even)
}

fn pade_13<T: FloatScalar, const N: usize>(
    a: &Matrix<T, N, N>,
) -> (Matrix<T, N, N>, Matrix<T, N, N>) {
    let b = |i: usize| T::lit(PADE_13[i]);
    let id: Matrix<T, N, N> = Matrix::eye();

    let a2 = *a * *a;
    let a4 = a2 * a2;
    let a6 = a4 * a2;

    let inner_u = a6 * b(13) + a4 * b(11) + a2 * b(9);
    let u = *a * (a6 * inner_u + a6 * b(7) + a4 * b(5) + a2 * b(3) + id * b(1));

    let inner_v = a6 * b(12) + a4 * b(10) + a2 * b(8);
    let v = a6 * inner_v + a6 * b(6) + a4 * b(4) + a2 * b(2) + id * b(0);
    (u, v)
}

#[cfg(test)]
mod tests {
    use crate::Matrix;

    fn assert_rel<const N: usize>(actual: &Matrix<f64, N, N>, expected: &Matrix<f64, N, N>, tol: f64) {
        for i in 0..N {
            for j in 0..N {
                let e = expected[(i, j)];
                let a = actual[(i, j)];
                assert!(
                    (a - e).abs() <= tol * e.abs().max(1.0),
                    "expm[({},{})] = {}, expected {}",
                    i,
                    j,
                    a,
                    e
                );
            }
        }
    }

    #[test]
    fn expm_zero_is_identity() {
        let z: Matrix<f64, 3, 3> = Matrix::zeros();
        assert_eq!(z.expm().unwrap(), Matrix::eye());
    }

    #[test]
    fn expm_pade3() {
        #[rustfmt::skip]
        let a = Matrix::new([
            [0.000043000000000, 0.009912000000000],
            [0.000012000000000, 0.000000100000000],
        ]);
        #[rustfmt::skip]
        let expected = Matrix::new([
            [1.000043060398221, 0.009912213803161],
            [0.000012000258842, 1.000000159472862],
        ]);
        assert_rel(&a.expm().unwrap(), &expected, 1e-14);
    }

    #[test]
    fn expm_pade5() {
        #[rustfmt::skip]
        let a = Matrix::new([
            [0.08, 0.01, 0.06],
            [0.03, 0.05, 0.07],
            [0.04, 0.09, 0.02],
        ]);
        #[rustfmt::skip]
        let expected = Matrix::new([
            [1.084756909028977, 0.013528665649584, 0.063548668049722],
            [0.033536666609639, 1.054744907588895, 0.073552668529749],
            [0.043540667089667, 0.093560669489804, 1.024732906148813],
        ]);
        assert_rel(&a.expm().unwrap(), &expected, 1e-14);
    }

    #[test]
    fn expm_pade7() {
        #[rustfmt::skip]
        let a = Matrix::new([
            [0.547215529963803, 0.149294005559057],
            [0.138624442828679, 0.257508254123736],
        ]);
        #[rustfmt::skip]
        let expected = Matrix::new([
            [1.744737713624294, 0.224801146083571],
            [0.208735330707944, 1.308507689560578],
        ]);
        assert_rel(&a.expm().unwrap(), &expected, 1e-14);
    }

    #[test]
    fn expm_pade9() {
        #[rustfmt::skip]
        let a = Matrix::new([
            [0.190779228546504, 0.093436302277189, 0.323156505055632],
            [0.382758394074501, 0.244882197894116, 0.354682415429036],
            [0.397599950568532, 0.222793100355450, 0.377343340991180],
        ]);
        #[rustfmt::skip]
        let expected = Matrix::new([
            [1.326135792780767, 0.169570426358187, 0.470509231126333],
            [0.591507815457227, 1.363243020404054, 0.587777264977557],
            [0.608716349482150, 0.342042663730710, 1.613934583308134],
        ]);
        assert_rel(&a.expm().unwrap(), &expected, 1e-14);
    }

    #[test]
    fn expm_pade13_scaling() {
        #[rustfmt::skip]
        let a = Matrix::new([
            [14.198665467081877, 16.491708248734184, 22.611872828354858,  1.618503559998214],
            [10.549785211889903, 27.515809914894302, 11.413375409260700, 15.923926590269181],
            [24.924858836888724,  8.575170564611206, 17.034649221756634, 23.375016903060335],
            [17.557922734581727, 22.716006873321639,  2.275628686891908, 28.020320526875491],
        ]);
        #[rustfmt::skip]
        let expected = Matrix::new([
            [0.810104285109246, 1.002536192025060, 0.649717791161234, 0.858227260926821],
            [0.966444748779387, 1.196013718299542, 0.775105574675043, 1.023854884893233],
            [1.072383921402965, 1.327117647337523, 0.860070642135657, 1.136087208085210],
            [1.020955411589432, 1.263472826124129, 0.818824078683328, 1.081603668222360],
        ]) * 1e28;
        assert_rel(&a.expm().unwrap(), &expected, 1e-12);
    }

    #[test]
    fn expm_diagonal_matches_scalar_exp() {
        let a: Matrix<f64, 2, 2> = Matrix::from_diag([-3.0, 0.5]);
        let e = a.expm().unwrap();
        assert!((e[(0, 0)] - (-3.0_f64).exp()).abs() < 1e-14);
        assert!((e[(1, 1)] - 0.5_f64.exp()).abs() < 1e-14);
        assert_eq!(e[(0, 1)], 0.0);
    }

    #[test]
    fn expm_rotation_generator() {
        // exp([[0, -θ], [θ, 0]]) is a rotation by θ
        let theta = 1.2_f64;
        let a = Matrix::new([[0.0, -theta], [theta, 0.0]]);
        let e = a.expm().unwrap();
        let expected = Matrix::new([[theta.cos(), -theta.sin()], [theta.sin(), theta.cos()]]);
        assert_rel(&e, &expected, 1e-14);
    }
}
