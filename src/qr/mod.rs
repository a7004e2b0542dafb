//! Householder QR decomposition

pub mod decompose;
pub mod householder;

pub use decompose::{QrDecomposition, decompose};
pub use householder::reflection;
