//! # householder-qr: QR decomposition via Householder reflections
//!
//! Computes the factorization A = Q * R of a real rectangular M x N matrix,
//! where Q is orthogonal (M x M) and R is upper triangular (M x N). The
//! elimination is driven by successive Householder reflections I - 2vv^T,
//! one per column, composed into Q.
//!
//! Matrices are stored as contiguous row-major `mdarray` tensors.

pub mod error;
pub mod io;
pub mod matrix;
pub mod precision;
pub mod qr;
pub mod vector;

pub use error::QrError;
pub use matrix::{from_row_major, identity, minor, multiply, norm_frobenius, transpose_in_place, zeros};
pub use precision::Precision;
pub use qr::{QrDecomposition, decompose, reflection};
pub use vector::{column, divide_in_place, norm_2, scaled_add};

// Re-export mdarray types
pub use mdarray::{DTensor, Tensor};

// Type aliases for convenience
pub type Matrix = Tensor<f64, (usize, usize)>;
pub type Vector = Vec<f64>;
