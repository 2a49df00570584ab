// End-to-end property tests run against the public `Fft<T>` surface
// rather than against individual engine/codelet internals -- these pin
// down the transform-level invariants a caller actually depends on:
// Parseval, linearity, the shift theorem, conjugate symmetry on real
// input, and the literal impulse/DC/Nyquist/single-tone scenarios.

use crate::{Complex, Fft};
use alloc::vec::Vec;
use core::f64::consts::PI;

fn random_like(n: usize, seed: u64) -> Vec<Complex<f64>> {
    // Small deterministic LCG -- no external RNG dependency needed for a
    // handful of property tests with a fixed size.
    let mut state = seed;
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let re = ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0;
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        let im = ((state >> 11) as f64 / (1u64 << 53) as f64) * 2.0 - 1.0;
        out.push(Complex::new(re, im));
    }
    out
}

fn forward(n: usize, x: &[Complex<f64>]) -> Vec<Complex<f64>> {
    let mut fft = Fft::<f64>::create(n).unwrap();
    fft.precompute_twiddles(n).unwrap();
    fft.sample_buffer_mut()[..n].copy_from_slice(x);
    fft.fft(n).unwrap();
    fft.sample_buffer_mut()[..n].to_vec()
}

#[test]
fn parseval_identity_holds() {
    for &n in &[8usize, 16, 64, 256] {
        let x = random_like(n, 0x1234_5678_9abc_def0 ^ n as u64);
        let time_energy: f64 = x.iter().map(|c| c.norm_sqr()).sum();
        let freq_energy: f64 = forward(n, &x).iter().map(|c| c.norm_sqr()).sum::<f64>() / n as f64;
        let rel_err = (time_energy - freq_energy).abs() / time_energy.max(1.0);
        assert!(rel_err < 1e-9, "n={n}: time={time_energy}, freq/n={freq_energy}");
    }
}

#[test]
fn linearity_holds() {
    for &n in &[8usize, 32, 128] {
        let x = random_like(n, 0xdead_beef ^ n as u64);
        let y = random_like(n, 0xfeed_face ^ n as u64);
        let (a, b) = (2.5f64, -1.75f64);

        let combined: Vec<Complex<f64>> =
            x.iter().zip(y.iter()).map(|(&xi, &yi)| xi * a + yi * b).collect();

        let lhs = forward(n, &combined);
        let (fx, fy) = (forward(n, &x), forward(n, &y));
        let rhs: Vec<Complex<f64>> = fx.iter().zip(fy.iter()).map(|(&fxi, &fyi)| fxi * a + fyi * b).collect();

        for (l, r) in lhs.iter().zip(rhs.iter()) {
            assert!((l - r).norm() < 1e-8, "n={n}: {l:?} vs {r:?}");
        }
    }
}

#[test]
fn shift_theorem_holds() {
    for &n in &[8usize, 16, 64] {
        let x = random_like(n, 0x0bad_f00d ^ n as u64);
        let m = n / 3 + 1;
        let shifted: Vec<Complex<f64>> = (0..n).map(|i| x[(i + n - m % n) % n]).collect();

        let fx = forward(n, &x);
        let f_shifted = forward(n, &shifted);

        for k in 0..n {
            let angle = -2.0 * PI * (k as f64) * (m as f64) / (n as f64);
            let factor = Complex::new(angle.cos(), angle.sin());
            let expected = fx[k] * factor;
            assert!(
                (f_shifted[k] - expected).norm() < 1e-8,
                "n={n}, k={k}: got {:?}, expected {:?}",
                f_shifted[k],
                expected
            );
        }
    }
}

#[test]
fn conjugate_symmetry_on_real_input() {
    for &n in &[8usize, 16, 64] {
        let x: Vec<Complex<f64>> =
            random_like(n, 0x5eed ^ n as u64).iter().map(|c| Complex::new(c.re, 0.0)).collect();
        let spectrum = forward(n, &x);

        assert!(spectrum[0].im.abs() < 1e-9, "n={n}: DC bin not real");
        assert!(spectrum[n / 2].im.abs() < 1e-9, "n={n}: Nyquist bin not real");
        for k in 1..n / 2 {
            let a = spectrum[k];
            let b = spectrum[n - k].conj();
            assert!((a - b).norm() < 1e-8, "n={n}, k={k}: {a:?} vs conj {b:?}");
        }
    }
}

#[test]
fn impulse_response_is_flat_n8() {
    let n = 8;
    let mut x = vec![Complex::new(0.0, 0.0); n];
    x[0] = Complex::new(1.0, 0.0);
    let got = forward(n, &x);
    for v in got {
        assert!((v - Complex::new(1.0, 0.0)).norm() < 1e-9);
    }
}

#[test]
fn dc_input_is_single_spike_n8() {
    let n = 8;
    let x = vec![Complex::new(1.0, 0.0); n];
    let got = forward(n, &x);
    assert!((got[0] - Complex::new(n as f64, 0.0)).norm() < 1e-9);
    for &v in &got[1..] {
        assert!(v.norm() < 1e-9);
    }
}

#[test]
fn nyquist_alternating_input_n8() {
    let n = 8;
    let x: Vec<Complex<f64>> = (0..n).map(|i| Complex::new(if i % 2 == 0 { 1.0 } else { -1.0 }, 0.0)).collect();
    let got = forward(n, &x);
    assert!((got[n / 2] - Complex::new(n as f64, 0.0)).norm() < 1e-9);
    for (k, &v) in got.iter().enumerate() {
        if k != n / 2 {
            assert!(v.norm() < 1e-9, "k={k}: {v:?}");
        }
    }
}

#[test]
fn single_tone_n16() {
    let n = 16;
    let x: Vec<Complex<f64>> =
        (0..n).map(|i| Complex::new((2.0 * PI * 3.0 * i as f64 / n as f64).cos(), 0.0)).collect();
    let got = forward(n, &x);
    for (k, &v) in got.iter().enumerate() {
        let expected = if k == 3 || k == 13 { Complex::new(n as f64 / 2.0, 0.0) } else { Complex::new(0.0, 0.0) };
        assert!((v - expected).norm() < 1e-9, "k={k}: got {v:?}, expected {expected:?}");
    }
}

#[test]
fn random_round_trip_n1024() {
    let n = 1024;
    let x = random_like(n, 0x1357_9bdf_2468_ace0);

    let mut fft = Fft::<f64>::create(n).unwrap();
    fft.precompute_twiddles(n).unwrap();
    fft.sample_buffer_mut()[..n].copy_from_slice(&x);
    fft.fft(n).unwrap();
    fft.ifft(n).unwrap();

    let got = &fft.sample_buffer_mut()[..n];
    let max_err = got
        .iter()
        .zip(x.iter())
        .map(|(a, b)| (a - b).norm())
        .fold(0.0f64, f64::max);
    assert!(max_err <= 1e-8, "max abs error {max_err}");
}

#[test]
fn rfft_matches_packed_complex_fft_n64() {
    let n = 64;
    let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.31).sin()).collect();

    let mut rf = Fft::<f32>::create(n).unwrap();
    rf.precompute_twiddles(n / 2).unwrap();
    rf.precompute_rfft_twiddles(n).unwrap();
    for (i, &v) in x.iter().enumerate() {
        rf.real_buffer_mut()[i] = v as f32;
    }
    rf.rfft(n).unwrap();
    let rfft_bins = rf.sample_buffer_mut()[..n / 2 + 1].to_vec();

    let complex_x: Vec<Complex<f64>> = x.iter().map(|&v| Complex::new(v, 0.0)).collect();
    let full = forward(n, &complex_x);

    for k in 0..=n / 2 {
        let a = rfft_bins[k];
        let b = full[k];
        let diff = ((a.re as f64) - b.re).hypot((a.im as f64) - b.im);
        assert!(diff < 1e-3, "k={k}: rfft {a:?} vs fft {b:?}");
    }
}
