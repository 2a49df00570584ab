use super::*;
use crate::test_util::{assert_slice_close, naive_dft};
use crate::twiddle::precompute_complex_twiddles;
use alloc::vec;
use alloc::vec::Vec;

fn run(n: usize) {
    let x: Vec<Complex<f64>> = (0..n)
        .map(|i| Complex::new((i as f64 * 0.17).sin(), (i as f64 * 0.41).cos()))
        .collect();
    let expected = naive_dft(&x);
    let mut buf = x.clone();
    let mut scratch = vec![Complex::new(0.0, 0.0); n];
    let mut tw = vec![Complex::new(0.0, 0.0); n];
    precompute_complex_twiddles(&mut tw, n);
    dispatch_forward(&mut buf, &mut scratch, &tw);
    assert_slice_close(&buf, &expected, 1e-8);
}

#[test]
fn dispatch_covers_hand_flattened_codelet_sizes_and_the_generic_fallback_just_above_them() {
    // 4/8/16 take the hand-flattened codelet path; 32/64/128 fall
    // through to `run_generic` (see `dispatch.rs`'s module comment).
    for &n in &[4usize, 8, 16, 32, 64, 128] {
        run(n);
    }
}

#[test]
fn dispatch_falls_back_to_generic_engine_for_larger_sizes() {
    for &n in &[256usize, 512, 1024, 2048, 4096] {
        run(n);
    }
}

#[test]
fn dispatch_handles_non_power_of_four_generic_sizes() {
    for &n in &[512usize, 2048] {
        run(n);
    }
}
