//! Command-line QR decomposition
//!
//! Reads an M x N matrix from a whitespace-separated text file (two
//! integers M and N on the first line, then M*N doubles in row-major
//! order), decomposes it, and prints Q, R, and the verification product
//! Q * R.
//!
//! Usage:
//!   qr [matrix-file]     (defaults to ./A.txt)

use std::env;
use std::fs;
use std::io::Write;
use std::process;

use householder_qr::io::{parse_matrix, write_matrix};
use householder_qr::matrix::multiply;
use householder_qr::qr::decompose;

fn main() {
    let path = env::args().nth(1).unwrap_or_else(|| String::from("A.txt"));
    if let Err(err) = run(&path) {
        eprintln!("qr: {}", err);
        process::exit(1);
    }
}

fn run(path: &str) -> Result<(), Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let a = parse_matrix(&text)?;

    let qr = decompose(&a)?;
    let product = multiply(&qr.q, &qr.r)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    writeln!(out, "Q")?;
    write_matrix(&mut out, &qr.q)?;
    writeln!(out, "R")?;
    write_matrix(&mut out, &qr.r)?;
    writeln!(out, "Q * R")?;
    write_matrix(&mut out, &product)?;

    Ok(())
}
