use super::*;
use crate::twiddle::precompute_rfft_twiddles;
use alloc::vec;
use alloc::vec::Vec;

fn rotations(n: usize) -> Vec<Complex<f64>> {
    let half = n / 2;
    let mut rot = vec![Complex::new(0.0, 0.0); half];
    precompute_rfft_twiddles(&mut rot, n);
    rot
}

/// Same loop `rfft_forward`'s generic path runs, reimplemented standalone
/// so these tests don't just compare the unrolled path against itself.
fn generic_forward_post(buf: &mut [Complex<f64>], rotations: &[Complex<f64>], half: usize) {
    let z0 = buf[0];
    let one_half = 0.5;
    let mut k = 1usize;
    while k <= half / 2 {
        let j = half - k;
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        if j != k {
            let wj = rotations[j];
            let diff_j = zj - zk.conj();
            let sum_j = (zj + zk.conj()) * one_half;
            buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
        }
        k += 1;
    }
    buf[0] = Complex::new(z0.re + z0.im, 0.0);
    buf[half] = Complex::new(z0.re - z0.im, 0.0);
}

fn generic_inverse_pre(buf: &mut [Complex<f64>], rotations: &[Complex<f64>], half: usize) {
    let x0 = buf[0];
    let xhalf = buf[half];
    let one_half = 0.5;
    let mut k = 1usize;
    while k <= half / 2 {
        let j = half - k;
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        buf[k] = sum_k + mul_j(wk * diff_k) * one_half;
        if j != k {
            let wj = rotations[j].conj();
            let diff_j = xj - xk.conj();
            let sum_j = (xj + xk.conj()) * one_half;
            buf[j] = sum_j + mul_j(wj * diff_j) * one_half;
        }
        k += 1;
    }
    buf[0] = Complex::new((x0.re + xhalf.re) * one_half, (x0.re - xhalf.re) * one_half);
}

fn input(half: usize) -> Vec<Complex<f64>> {
    let mut v: Vec<Complex<f64>> =
        (0..half).map(|i| Complex::new((i as f64 * 0.19).sin(), (i as f64 * 0.71).cos())).collect();
    v.push(Complex::new(0.0, 0.0));
    v
}

#[test]
fn forward_post_64_matches_generic_loop() {
    let half = 32;
    let rot = rotations(64);
    let x = input(half);
    let mut a = x.clone();
    let mut b = x;
    rfft_forward_post_64(&mut a, &rot);
    generic_forward_post(&mut b, &rot, half);
    for (got, expected) in a.iter().zip(b.iter()) {
        assert!((got - expected).norm() < 1e-12, "got {got:?}, expected {expected:?}");
    }
}

#[test]
fn forward_post_128_matches_generic_loop() {
    let half = 64;
    let rot = rotations(128);
    let x = input(half);
    let mut a = x.clone();
    let mut b = x;
    rfft_forward_post_128(&mut a, &rot);
    generic_forward_post(&mut b, &rot, half);
    for (got, expected) in a.iter().zip(b.iter()) {
        assert!((got - expected).norm() < 1e-12, "got {got:?}, expected {expected:?}");
    }
}

#[test]
fn inverse_pre_64_matches_generic_loop() {
    let half = 32;
    let rot = rotations(64);
    let x = input(half);
    let mut a = x.clone();
    let mut b = x;
    rfft_inverse_pre_64(&mut a, &rot);
    generic_inverse_pre(&mut b, &rot, half);
    for (got, expected) in a.iter().zip(b.iter()) {
        assert!((got - expected).norm() < 1e-12, "got {got:?}, expected {expected:?}");
    }
}

#[test]
fn inverse_pre_128_matches_generic_loop() {
    let half = 64;
    let rot = rotations(128);
    let x = input(half);
    let mut a = x.clone();
    let mut b = x;
    rfft_inverse_pre_128(&mut a, &rot);
    generic_inverse_pre(&mut b, &rot, half);
    for (got, expected) in a.iter().zip(b.iter()) {
        assert!((got - expected).norm() < 1e-12, "got {got:?}, expected {expected:?}");
    }
}

#[test]
fn forward_then_inverse_round_trips_for_64_and_128() {
    for &half in &[32usize, 64] {
        let n = half * 2;
        let rot = rotations(n);
        let original = input(half);
        let mut buf = original.clone();
        if n == 64 {
            rfft_forward_post_64(&mut buf, &rot);
            rfft_inverse_pre_64(&mut buf, &rot);
        } else {
            rfft_forward_post_128(&mut buf, &rot);
            rfft_inverse_pre_128(&mut buf, &rot);
        }
        for (got, expected) in buf.iter().zip(original.iter()) {
            assert!((got - expected).norm() < 1e-9, "got {got:?}, expected {expected:?}");
        }
    }
}
