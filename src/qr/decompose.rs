//! Householder QR driver

use mdarray::Tensor;

use crate::error::QrError;
use crate::matrix;
use crate::precision::Precision;
use crate::qr::householder;
use crate::vector;

/// Result of a QR decomposition: A = Q * R
///
/// `q` is orthogonal (M x M), `r` is upper triangular (M x N). Both are
/// fresh values owned by the caller; the input matrix is untouched.
#[derive(Debug, Clone)]
pub struct QrDecomposition<T: Precision> {
    /// Orthogonal factor, M x M
    pub q: Tensor<T, (usize, usize)>,
    /// Upper-triangular factor, M x N
    pub r: Tensor<T, (usize, usize)>,
}

/// Decompose a rectangular M x N matrix into Q * R via Householder
/// reflections
///
/// One reflector per elimination step, `min(N, M - 1)` steps in total. Each
/// step takes the minor of the working matrix at `k`, reflects column `k`
/// onto a multiple of `e_k`, and folds the reflector into the accumulated
/// product. The sign of the reflection target is chosen opposite to the
/// pivot entry of the original matrix, which keeps the reflector's leading
/// component away from zero when forming `x + alpha * e_k`.
///
/// The reflectors are composed in index order, `Q_acc = Q_k * Q_acc`, so the
/// accumulated product converges to Q^T; `R = Q_acc * A` and Q is the final
/// transpose. Small residuals (e.g. `-0.000`) below R's diagonal are
/// expected; no tolerance-based zeroing is performed.
///
/// # Errors
/// Shape errors from the internal algebra are propagated, though every
/// product formed here is conformant by construction.
pub fn decompose<T: Precision>(
    a: &Tensor<T, (usize, usize)>,
) -> Result<QrDecomposition<T>, QrError> {
    let (m, n) = *a.shape();

    // Single-row (or empty) input admits no reflector at all: Q degrades to
    // the identity and R to a copy of A.
    let steps = if m == 0 { 0 } else { n.min(m - 1) };
    if steps == 0 {
        return Ok(QrDecomposition {
            q: matrix::identity(m),
            r: a.clone(),
        });
    }

    let mut reflectors: Vec<Tensor<T, (usize, usize)>> = Vec::with_capacity(steps);
    let mut z = a.clone();

    for k in 0..steps {
        let zm = matrix::minor(&z, k);

        let x = vector::column(&zm, k);
        let mut alpha = vector::norm_2(&x);
        if a[[k, k]] > T::zero() {
            alpha = -alpha;
        }

        let e: Vec<T> = (0..m)
            .map(|i| if i == k { T::one() } else { T::zero() })
            .collect();
        let mut e = vector::scaled_add(&x, &e, alpha);
        let scale = vector::norm_2(&e);
        vector::divide_in_place(&mut e, scale);

        let qk = householder::reflection(&e);
        z = matrix::multiply(&qk, &zm)?;
        reflectors.push(qk);
    }

    // Fold the reflectors in index order; the product accumulates Q^T.
    let mut q_acc = matrix::identity(m);
    for qk in &reflectors {
        q_acc = matrix::multiply(qk, &q_acc)?;
    }

    let r = matrix::multiply(&q_acc, a)?;
    matrix::transpose_in_place(&mut q_acc)?;

    Ok(QrDecomposition { q: q_acc, r })
}
