use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by everything that needs `abs`, `exp`, ordered comparisons or
/// a machine epsilon: decompositions, the matrix exponential, norms and
/// all estimators.
pub trait FloatScalar: Scalar + Float {
    /// Convert an `f64` constant into `Self`.
    ///
    /// Used for algorithm coefficients (Padé tables, tolerances). Lossy for
    /// `f32`; yields NaN only if the type cannot represent finite floats.
    #[inline]
    fn lit(v: f64) -> Self {
        <Self as num_traits::NumCast>::from(v).unwrap_or_else(Self::nan)
    }
}

impl<T: Scalar + Float> FloatScalar for T {}

/// Read-only access to a matrix-like type.
///
/// Lets in-place algorithms such as LU operate on anything that exposes
/// element access.
pub trait MatrixRef<T> {
    fn nrows(&self) -> usize;
    fn ncols(&self) -> usize;
    fn get(&self, row: usize, col: usize) -> &T;
}

/// Mutable access to a matrix-like type.
pub trait MatrixMut<T>: MatrixRef<T> {
    fn get_mut(&mut self, row: usize, col: usize) -> &mut T;
}
