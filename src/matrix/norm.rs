use crate::traits::FloatScalar;
use crate::Matrix;

impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// One norm (maximum absolute column sum).
    ///
    /// Drives the Padé order and scaling choice in [`expm`](Matrix::expm).
    pub fn norm_one(&self) -> T {
        let mut max = T::zero();
        for col in self.data.iter() {
            let col_sum = col.iter().fold(T::zero(), |acc, v| acc + v.abs());
            if col_sum > max {
                max = col_sum;
            }
        }
        max
    }

    /// Largest absolute element.
    pub fn max_abs(&self) -> T {
        let mut max = T::zero();
        for col in self.data.iter() {
            for v in col.iter() {
                if v.abs() > max {
                    max = v.abs();
                }
            }
        }
        max
    }
}

#[cfg(test)]
mod tests {
    use crate::Matrix;

    #[test]
    fn norms() {
        let m = Matrix::new([[1.0_f64, -7.0], [-2.0, -3.0]]);
        assert_eq!(m.norm_one(), 10.0);
        assert_eq!(m.max_abs(), 7.0);
    }
}
