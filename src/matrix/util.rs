use core::fmt::{self, Write as _};

use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use linest::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(f: impl Fn(usize, usize) -> T) -> Self
    where
        T: Copy + Default,
    {
        let mut data = [[T::default(); M]; N];
        for (j, col) in data.iter_mut().enumerate() {
            for (i, v) in col.iter_mut().enumerate() {
                *v = f(i, j);
            }
        }
        Self { data }
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Widest entry per column, for alignment
        let mut widths = [0usize; N];
        for (j, w) in widths.iter_mut().enumerate() {
            for i in 0..M {
                *w = (*w).max(WriteCounting::count(|wc| write!(wc, "{}", self.data[j][i])));
            }
        }

        for i in 0..M {
            write!(f, "│")?;
            for (j, w) in widths.iter().enumerate() {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self.data[j][i], width = *w)?;
            }
            write!(f, "│")?;
            if i + 1 < M {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn_fills_by_position() {
        let m: Matrix<f64, 2, 2> = Matrix::from_fn(|i, j| (i * 2 + j) as f64);
        assert_eq!(m, Matrix::new([[0.0, 1.0], [2.0, 3.0]]));
    }

    #[cfg(feature = "std")]
    #[test]
    fn display_aligns_columns() {
        let m = Matrix::new([[1.0, 20.0], [300.0, 4.0]]);
        let s = format!("{}", m);
        assert_eq!(s, "│  1  20│\n│300   4│");
    }
}
