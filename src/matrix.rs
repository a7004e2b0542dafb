//! Dense matrix construction and algebra
//!
//! Matrices are `Tensor<T, (usize, usize)>` values: an explicit
//! `(rows, cols)` shape over one contiguous row-major allocation. Every
//! operation here writes into a freshly allocated result owned by the
//! caller; inputs are only borrowed.

use mdarray::Tensor;

use crate::error::QrError;
use crate::precision::Precision;

/// Allocate a zero-filled `rows x cols` matrix
pub fn zeros<T: Precision>(rows: usize, cols: usize) -> Tensor<T, (usize, usize)> {
    Tensor::from_elem((rows, cols), T::zero())
}

/// The `n x n` identity matrix
pub fn identity<T: Precision>(n: usize) -> Tensor<T, (usize, usize)> {
    Tensor::from_fn((n, n), |idx| if idx[0] == idx[1] { T::one() } else { T::zero() })
}

/// Build a matrix from a flat row-major slice of `rows * cols` entries
///
/// # Errors
/// Returns `QrError::Input` when the slice length does not match the
/// requested shape; a short slice is never silently zero-padded.
pub fn from_row_major<T: Precision>(
    rows: usize,
    cols: usize,
    data: &[T],
) -> Result<Tensor<T, (usize, usize)>, QrError> {
    if data.len() != rows * cols {
        return Err(QrError::Input(format!(
            "expected {} entries for a {}x{} matrix, got {}",
            rows * cols,
            rows,
            cols,
            data.len()
        )));
    }
    Ok(Tensor::from_fn((rows, cols), |idx| data[idx[0] * cols + idx[1]]))
}

/// Matrix product `x * y`
///
/// Plain triple-loop accumulation over the shared dimension, in row-major
/// order. The summation order is part of the contract: repeated products of
/// the same operands are bit-identical, which regression tests rely on.
///
/// # Errors
/// Returns `QrError::ShapeMismatch` unless `x.cols == y.rows`.
pub fn multiply<T: Precision>(
    x: &Tensor<T, (usize, usize)>,
    y: &Tensor<T, (usize, usize)>,
) -> Result<Tensor<T, (usize, usize)>, QrError> {
    let (xm, xn) = *x.shape();
    let (ym, yn) = *y.shape();
    if xn != ym {
        return Err(QrError::ShapeMismatch {
            left_rows: xm,
            left_cols: xn,
            right_rows: ym,
            right_cols: yn,
        });
    }

    let mut r = zeros(xm, yn);
    for i in 0..xm {
        for j in 0..yn {
            let mut sum = T::zero();
            for k in 0..xn {
                sum = sum + x[[i, k]] * y[[k, j]];
            }
            r[[i, j]] = sum;
        }
    }
    Ok(r)
}

/// The `d`-th minor of `x`: identity block for indices below `d`, the
/// trailing submatrix of `x` for indices at or above `d`, zero elsewhere
///
/// This isolates the trailing sub-problem at each elimination step. Not the
/// determinant-minor sense. `d` must satisfy `d <= min(rows, cols)`;
/// violating the precondition panics on the out-of-range index.
pub fn minor<T: Precision>(x: &Tensor<T, (usize, usize)>, d: usize) -> Tensor<T, (usize, usize)> {
    let (m, n) = *x.shape();
    let mut out = zeros(m, n);
    for i in 0..d {
        out[[i, i]] = T::one();
    }
    for i in d..m {
        for j in d..n {
            out[[i, j]] = x[[i, j]];
        }
    }
    out
}

/// Transpose a square matrix in place
///
/// # Errors
/// Returns `QrError::NotSquare` for rectangular input.
pub fn transpose_in_place<T: Precision>(m: &mut Tensor<T, (usize, usize)>) -> Result<(), QrError> {
    let (rows, cols) = *m.shape();
    if rows != cols {
        return Err(QrError::NotSquare { rows, cols });
    }
    for i in 0..rows {
        for j in 0..i {
            let t = m[[i, j]];
            m[[i, j]] = m[[j, i]];
            m[[j, i]] = t;
        }
    }
    Ok(())
}

/// Compute the Frobenius norm of a matrix
pub fn norm_frobenius<T: Precision>(mat: &Tensor<T, (usize, usize)>) -> T {
    let (m, n) = *mat.shape();
    let mut sum = T::zero();
    for i in 0..m {
        for j in 0..n {
            let val = mat[[i, j]];
            sum = sum + val * val;
        }
    }
    Precision::sqrt(sum)
}
