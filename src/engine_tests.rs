use super::*;
use crate::test_util::{assert_slice_close, naive_dft};
use crate::twiddle::precompute_complex_twiddles;
use alloc::vec;
use alloc::vec::Vec;

fn run_radix2(x: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = x.len();
    let mut a = x.to_vec();
    let mut b = vec![Complex::new(0.0, 0.0); n];
    let mut tw = vec![Complex::new(0.0, 0.0); n];
    precompute_complex_twiddles(&mut tw, n);
    let in_b = stockham_radix2(&mut a, &mut b, &tw, n);
    if in_b { b } else { a }
}

fn run_radix4(x: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let n = x.len();
    let mut a = x.to_vec();
    let mut b = vec![Complex::new(0.0, 0.0); n];
    let mut tw = vec![Complex::new(0.0, 0.0); n];
    precompute_complex_twiddles(&mut tw, n);
    let in_b = stockham_radix4(&mut a, &mut b, &tw, n);
    if in_b { b } else { a }
}

#[test]
fn radix2_matches_naive_dft_for_several_sizes() {
    for &n in &[4usize, 8, 16, 32, 64, 256] {
        let x: Vec<Complex<f64>> = (0..n)
            .map(|i| Complex::new((i as f64 + 1.0).sin(), (i as f64 * 0.7).cos()))
            .collect();
        let expected = naive_dft(&x);
        let got = run_radix2(&x);
        assert_slice_close(&got, &expected, 1e-9);
    }
}

#[test]
fn radix4_matches_naive_dft_for_several_sizes() {
    for &n in &[4usize, 16, 64, 256] {
        let x: Vec<Complex<f64>> = (0..n)
            .map(|i| Complex::new((i as f64 + 1.0).sin(), (i as f64 * 0.7).cos()))
            .collect();
        let expected = naive_dft(&x);
        let got = run_radix4(&x);
        assert_slice_close(&got, &expected, 1e-9);
    }
}

#[test]
fn radix2_and_radix4_agree_on_power_of_four_sizes() {
    for &n in &[16usize, 64] {
        let x: Vec<Complex<f64>> = (0..n).map(|i| Complex::new(i as f64, -(i as f64))).collect();
        let a = run_radix2(&x);
        let b = run_radix4(&x);
        assert_slice_close(&a, &b, 1e-9);
    }
}

#[test]
fn stage_write_coverage_radix2() {
    // Symbolic check: for every stage of every supported size, the set of
    // write indices {m, m+n/2} over all (j,k) equals {0..n}.
    for &n in &[4usize, 8, 16, 32, 64, 128, 256, 1024] {
        let stages = crate::common::log2_usize(n);
        let mut r = n / 2;
        let mut l = 1usize;
        for _ in 0..stages {
            let mut seen = vec![false; n];
            for j in 0..l {
                for k in 0..r {
                    let m = j * r + k;
                    assert!(!seen[m], "duplicate write at {m} (n={n}, r={r}, l={l})");
                    seen[m] = true;
                    let m2 = m + r * l;
                    assert!(!seen[m2], "duplicate write at {m2} (n={n}, r={r}, l={l})");
                    seen[m2] = true;
                }
            }
            assert!(seen.iter().all(|&s| s), "hole in write coverage (n={n}, r={r}, l={l})");
            r >>= 1;
            l <<= 1;
        }
    }
}

#[test]
fn stage_write_coverage_radix4() {
    for &n in &[4usize, 16, 64, 256, 1024] {
        let stages = crate::common::log2_usize(n) / 2;
        let mut r = n / 4;
        let mut l = 1usize;
        for _ in 0..stages {
            let mut seen = vec![false; n];
            for j in 0..l {
                for k in 0..r {
                    let m = j * r + k;
                    let quarter = r * l;
                    for offset in [0, quarter, 2 * quarter, 3 * quarter] {
                        let idx = m + offset;
                        assert!(!seen[idx], "duplicate write at {idx} (n={n}, r={r}, l={l})");
                        seen[idx] = true;
                    }
                }
            }
            assert!(seen.iter().all(|&s| s), "hole in write coverage (n={n}, r={r}, l={l})");
            r >>= 2;
            l <<= 2;
        }
    }
}
