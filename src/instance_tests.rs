use super::*;
use crate::test_util::{assert_slice_close, naive_dft};

#[test]
fn create_rejects_non_power_of_two_and_out_of_range() {
    assert_eq!(
        Fft::<f64>::create(100),
        Err(FftError::InvalidConfiguration { requested: 100, min: 4, max: 4096 })
    );
    assert!(Fft::<f64>::create(2).is_err());
    assert!(Fft::<f64>::create(8192).is_err());
    assert!(Fft::<f64>::create(256).is_ok());
}

#[test]
fn transform_before_precompute_is_rejected() {
    let mut fft = Fft::<f64>::create(64).unwrap();
    let err = fft.fft(64).unwrap_err();
    assert_eq!(err, FftError::NotPrecomputed { n: 64 });
}

#[test]
fn precompute_for_wrong_size_does_not_satisfy_a_different_size() {
    let mut fft = Fft::<f64>::create(64).unwrap();
    fft.precompute_twiddles(32).unwrap();
    let err = fft.fft(64).unwrap_err();
    assert_eq!(err, FftError::NotPrecomputed { n: 64 });
    // but 32 itself now works
    assert!(fft.fft(32).is_ok());
}

#[test]
fn precompute_rejects_sizes_outside_instance_bound() {
    let mut fft = Fft::<f64>::create(64).unwrap();
    assert!(fft.precompute_twiddles(128).is_err());
    assert!(fft.precompute_twiddles(3).is_err());
}

#[test]
fn fft_round_trips_through_ifft_for_every_supported_size() {
    for &n in &[4usize, 8, 16, 32, 64, 128, 256, 1024, 4096] {
        let mut fft = Fft::<f64>::create(n).unwrap();
        fft.precompute_twiddles(n).unwrap();

        let x: Vec<Complex<f64>> =
            (0..n).map(|i| Complex::new((i as f64 * 0.13).sin(), (i as f64 * 0.29).cos())).collect();
        fft.sample_buffer_mut()[..n].copy_from_slice(&x);

        fft.fft(n).unwrap();
        fft.ifft(n).unwrap();

        assert_slice_close(&fft.sample_buffer_mut()[..n], &x, 1e-7);
    }
}

#[test]
fn fft_matches_naive_dft() {
    let n = 32;
    let mut fft = Fft::<f64>::create(n).unwrap();
    fft.precompute_twiddles(n).unwrap();
    let x: Vec<Complex<f64>> = (0..n).map(|i| Complex::new(i as f64, -(i as f64) * 0.5)).collect();
    fft.sample_buffer_mut()[..n].copy_from_slice(&x);
    fft.fft(n).unwrap();
    let expected = naive_dft(&x);
    assert_slice_close(&fft.sample_buffer_mut()[..n], &expected, 1e-8);
}

#[test]
fn rfft_requires_both_the_half_size_complex_twiddles_and_the_rotation_table() {
    let mut fft = Fft::<f32>::create(64).unwrap();
    assert_eq!(fft.rfft(64).unwrap_err(), FftError::NotPrecomputed { n: 64 });

    fft.precompute_twiddles(32).unwrap();
    assert_eq!(fft.rfft(64).unwrap_err(), FftError::NotPrecomputed { n: 64 });

    fft.precompute_rfft_twiddles(64).unwrap();
    assert!(fft.rfft(64).is_ok());
}

#[test]
fn rfft_rejects_sizes_where_n_over_2_is_not_a_power_of_two() {
    let mut fft = Fft::<f32>::create(64).unwrap();
    // 12 is not a power of two at all, but even a pow2 n whose half isn't a
    // power of two (not reachable for pow2 n, included for completeness of
    // the validator) should still be rejected -- exercised via `n` itself
    // being rejected for not being a power of two.
    assert!(fft.rfft(12).is_err());
    assert!(fft.rfft(4).is_err()); // below MIN_RFFT_N
}

#[test]
fn rfft_round_trips_through_irfft() {
    for &n in &[8usize, 16, 32, 64, 128, 256, 1024] {
        let mut fft = Fft::<f64>::create(n).unwrap();
        fft.precompute_twiddles(n / 2).unwrap();
        fft.precompute_rfft_twiddles(n).unwrap();

        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.19).sin()).collect();
        fft.real_buffer_mut()[..n].copy_from_slice(&x);

        fft.rfft(n).unwrap();
        fft.irfft(n).unwrap();

        let got = &fft.real_buffer_mut()[..n];
        for (a, b) in got.iter().zip(x.iter()) {
            assert!((a - b).abs() < 1e-7, "got {a}, expected {b}");
        }
    }
}

#[test]
fn rfft_dc_and_nyquist_bins_are_real() {
    let n = 64;
    let mut fft = Fft::<f64>::create(n).unwrap();
    fft.precompute_twiddles(n / 2).unwrap();
    fft.precompute_rfft_twiddles(n).unwrap();
    let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.07).cos()).collect();
    fft.real_buffer_mut()[..n].copy_from_slice(&x);
    fft.rfft(n).unwrap();
    let bins = &fft.sample_buffer_mut()[..n / 2 + 1];
    assert!(bins[0].im.abs() < 1e-9);
    assert!(bins[n / 2].im.abs() < 1e-9);
}

#[test]
fn real_buffer_and_sample_buffer_share_storage() {
    let mut fft = Fft::<f32>::create(16).unwrap();
    fft.real_buffer_mut()[0] = 7.0;
    fft.real_buffer_mut()[1] = -3.0;
    assert_eq!(fft.sample_buffer_mut()[0], Complex::new(7.0f32, -3.0));
}
