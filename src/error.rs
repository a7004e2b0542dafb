//! Error types for matrix construction and decomposition

/// Error type for the decomposition and its matrix algebra
#[derive(Debug, thiserror::Error)]
pub enum QrError {
    #[error("shape mismatch: cannot multiply {left_rows}x{left_cols} by {right_rows}x{right_cols}")]
    ShapeMismatch {
        left_rows: usize,
        left_cols: usize,
        right_rows: usize,
        right_cols: usize,
    },

    #[error("matrix is not square: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("invalid matrix input: {0}")]
    Input(String),
}
