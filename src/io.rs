//! Text input and fixed-width rendering for matrices
//!
//! Collaborator layer around the numerical core: parses the
//! whitespace-separated matrix format (two integers M and N, then M*N
//! doubles in row-major order) and renders matrices as fixed-width decimal
//! rows.

use std::io::Write;

use crate::Matrix;
use crate::error::QrError;
use crate::matrix;

/// Parse a matrix from whitespace-separated text
///
/// The first two tokens are the row and column counts, followed by exactly
/// `rows * cols` doubles in row-major order.
///
/// # Errors
/// Returns `QrError::Input` for missing dimensions, malformed tokens, or a
/// truncated entry list; truncation is never papered over with zeros.
pub fn parse_matrix(text: &str) -> Result<Matrix, QrError> {
    let mut tokens = text.split_whitespace();

    let rows = parse_dim(tokens.next(), "row count")?;
    let cols = parse_dim(tokens.next(), "column count")?;

    let total = rows * cols;
    let mut data = Vec::with_capacity(total);
    for i in 0..total {
        let tok = tokens.next().ok_or_else(|| {
            QrError::Input(format!("truncated input: expected {} entries, got {}", total, i))
        })?;
        let value: f64 = tok
            .parse()
            .map_err(|_| QrError::Input(format!("invalid entry '{}' at position {}", tok, i)))?;
        data.push(value);
    }

    matrix::from_row_major(rows, cols, &data)
}

fn parse_dim(token: Option<&str>, what: &str) -> Result<usize, QrError> {
    let tok = token.ok_or_else(|| QrError::Input(format!("missing {}", what)))?;
    tok.parse()
        .map_err(|_| QrError::Input(format!("invalid {} '{}'", what, tok)))
}

/// Render a matrix as fixed-width decimal rows
pub fn write_matrix<W: Write>(out: &mut W, m: &Matrix) -> std::io::Result<()> {
    let (rows, cols) = *m.shape();
    for i in 0..rows {
        for j in 0..cols {
            write!(out, " {:8.3}", m[[i, j]])?;
        }
        writeln!(out)?;
    }
    writeln!(out)
}
