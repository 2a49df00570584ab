// Shared test helpers: independent O(N^2) DFT reference, used by unit
// tests across modules to check codelets/engine stages against a
// textbook definition rather than against each other.
#![cfg(test)]

use alloc::vec;
use alloc::vec::Vec;
use core::f64::consts::PI;
use num_complex::Complex;

pub fn naive_dft(x: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = x.len();
    let mut out = vec![Complex::new(0.0, 0.0); n];
    for k in 0..n {
        let mut sum = Complex::new(0.0, 0.0);
        for (i, &xi) in x.iter().enumerate() {
            let angle = -2.0 * PI * (k as f64) * (i as f64) / (n as f64);
            sum += xi * Complex::new(angle.cos(), angle.sin());
        }
        out[k] = sum;
    }
    out
}

pub fn assert_close(a: Complex<f64>, b: Complex<f64>, tol: f64) {
    assert!(
        (a - b).norm() < tol,
        "mismatch: got {a:?}, expected {b:?} (tol {tol})"
    );
}

pub fn assert_slice_close(a: &[Complex<f64>], b: &[Complex<f64>], tol: f64) {
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(b.iter()) {
        assert_close(*x, *y, tol);
    }
}
