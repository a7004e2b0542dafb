//! Vector primitives over caller-owned buffers
//!
//! Free functions on plain slices; nothing here owns storage beyond the
//! results it hands back.

use mdarray::Tensor;

use crate::precision::Precision;

/// Compute the 2-norm (Euclidean norm) of a vector
pub fn norm_2<T: Precision>(x: &[T]) -> T {
    let mut sum = T::zero();
    for &val in x {
        sum = sum + val * val;
    }
    Precision::sqrt(sum)
}

/// Elementwise `a + s * b`
pub fn scaled_add<T: Precision>(a: &[T], b: &[T], s: T) -> Vec<T> {
    a.iter().zip(b.iter()).map(|(&ai, &bi)| ai + s * bi).collect()
}

/// Divide every element of `x` by `d` in place
///
/// `d == 0` yields infinities or NaN per IEEE semantics, not an error.
pub fn divide_in_place<T: Precision>(x: &mut [T], d: T) {
    for val in x.iter_mut() {
        *val = *val / d;
    }
}

/// Copy column `c` of a matrix into a fresh vector
///
/// `c` must be below the column count; an out-of-range index panics.
pub fn column<T: Precision>(m: &Tensor<T, (usize, usize)>, c: usize) -> Vec<T> {
    let (rows, _) = *m.shape();
    (0..rows).map(|i| m[[i, c]]).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_norm_2() {
        let v = [3.0, 4.0, 0.0];
        assert_abs_diff_eq!(norm_2(&v), 5.0, epsilon = 1e-12);
        assert_abs_diff_eq!(norm_2::<f64>(&[]), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_scaled_add() {
        let a = [1.0, 2.0, 3.0];
        let b = [10.0, 20.0, 30.0];
        let c = scaled_add(&a, &b, 0.5);
        assert_abs_diff_eq!(c[0], 6.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c[1], 12.0, epsilon = 1e-12);
        assert_abs_diff_eq!(c[2], 18.0, epsilon = 1e-12);
    }

    #[test]
    fn test_divide_in_place() {
        let mut x = [2.0, 4.0, 6.0];
        divide_in_place(&mut x, 2.0);
        assert_abs_diff_eq!(x[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(x[2], 3.0, epsilon = 1e-12);
    }

    #[test]
    fn test_divide_by_zero_is_ieee() {
        let mut x = [1.0, -1.0, 0.0];
        divide_in_place(&mut x, 0.0);
        assert!(x[0].is_infinite() && x[0] > 0.0);
        assert!(x[1].is_infinite() && x[1] < 0.0);
        assert!(x[2].is_nan());
    }

    #[test]
    fn test_column() {
        let m = Tensor::from_fn((3, 2), |idx| (idx[0] * 2 + idx[1]) as f64);
        let col = column(&m, 1);
        assert_eq!(col.len(), 3);
        assert_abs_diff_eq!(col[0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(col[1], 3.0, epsilon = 1e-12);
        assert_abs_diff_eq!(col[2], 5.0, epsilon = 1e-12);
    }
}
