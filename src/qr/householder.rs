//! Householder reflector construction

use mdarray::Tensor;

use crate::precision::Precision;

/// Build the Householder reflection matrix `I - 2vv^T` for a vector `v`
///
/// The result is orthogonal when `v` has unit norm; the caller normalizes,
/// this builder does not.
pub fn reflection<T: Precision>(v: &[T]) -> Tensor<T, (usize, usize)> {
    let n = v.len();
    let two = T::one() + T::one();

    let mut h = Tensor::from_fn((n, n), |idx| -(two * v[idx[0]] * v[idx[1]]));
    for i in 0..n {
        h[[i, i]] = h[[i, i]] + T::one();
    }
    h
}
