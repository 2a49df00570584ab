// Real-FFT pack/unpack. An N-point real transform is computed by
// reinterpreting the N reals as N/2 complex samples, running the
// existing complex engine on that half-size problem, and applying a
// post- (forward) or pre- (inverse) processing pass that untangles the
// packed even/odd spectra. This is the classic "two reals per complex"
// trick -- the same structure found in Numerical-Recipes-style realft
// routines and in most production rfft implementations -- rather than a
// dedicated real-input Stockham variant.
//
// The buffer passed in must have room for `n/2 + 1` complex entries (the
// Nyquist bin does not fit in the `n/2` slots the packed input occupies);
// the instance's sample buffer is sized generously enough for this to
// always hold (see instance.rs).

use crate::dispatch::dispatch_forward;
use crate::inverse::dispatch_inverse;
use crate::rfft_unrolled::{
    rfft_forward_post_64, rfft_forward_post_128, rfft_inverse_pre_64, rfft_inverse_pre_128,
};
use crate::simd::{mul_j, mul_neg_j};
use num_complex::Complex;
use num_traits::Float;

/// `half_twiddles` is the standard complex twiddle table for size `n/2`
/// (drives the inner complex FFT). `rotations` is the rfft rotation
/// table for size `n`, i.e. `n/2` entries equal to W_N^k for k in
/// [0, n/2). `buf` holds the packed input on entry and `n/2+1` complex
/// bins on exit.
pub fn rfft_forward<T: Float>(
    buf: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
    half_twiddles: &[Complex<T>],
    rotations: &[Complex<T>],
    n: usize,
) {
    let half = n / 2;
    debug_assert!(buf.len() > half);
    debug_assert!(half_twiddles.len() >= half);
    debug_assert!(rotations.len() >= half);

    dispatch_forward(&mut buf[..half], scratch, half_twiddles);

    match n {
        64 => rfft_forward_post_64(&mut buf[..half + 1], rotations),
        128 => rfft_forward_post_128(&mut buf[..half + 1], rotations),
        _ => {
            let z0 = buf[0];
            let one_half = T::from(0.5).unwrap();

            let mut k = 1usize;
            while k <= half / 2 {
                let j = half - k;
                let zk = buf[k];
                let zj = buf[j];

                let wk = rotations[k];
                let diff_k = zk - zj.conj();
                let sum_k = (zk + zj.conj()) * one_half;
                let xk = sum_k + mul_neg_j(wk * diff_k) * one_half;
                buf[k] = xk;

                if j != k {
                    let wj = rotations[j];
                    let diff_j = zj - zk.conj();
                    let sum_j = (zj + zk.conj()) * one_half;
                    let xj = sum_j + mul_neg_j(wj * diff_j) * one_half;
                    buf[j] = xj;
                }
                k += 1;
            }

            buf[0] = Complex::new(z0.re + z0.im, T::zero());
            buf[half] = Complex::new(z0.re - z0.im, T::zero());
        }
    }
}

/// Inverse of [`rfft_forward`]. `buf` holds `n/2+1` complex bins on entry
/// and `n/2` packed real pairs (i.e. `n` reals) on exit.
pub fn rfft_inverse<T: Float>(
    buf: &mut [Complex<T>],
    scratch: &mut [Complex<T>],
    half_twiddles: &[Complex<T>],
    rotations: &[Complex<T>],
    n: usize,
) {
    let half = n / 2;
    debug_assert!(buf.len() > half);
    debug_assert!(half_twiddles.len() >= half);
    debug_assert!(rotations.len() >= half);

    match n {
        64 => rfft_inverse_pre_64(&mut buf[..half + 1], rotations),
        128 => rfft_inverse_pre_128(&mut buf[..half + 1], rotations),
        _ => {
            let x0 = buf[0];
            let xhalf = buf[half];
            let one_half = T::from(0.5).unwrap();

            let mut k = 1usize;
            while k <= half / 2 {
                let j = half - k;
                let xk = buf[k];
                let xj = buf[j];

                let wk = rotations[k].conj();
                let diff_k = xk - xj.conj();
                let sum_k = (xk + xj.conj()) * one_half;
                let zk = sum_k + mul_j(wk * diff_k) * one_half;
                buf[k] = zk;

                if j != k {
                    let wj = rotations[j].conj();
                    let diff_j = xj - xk.conj();
                    let sum_j = (xj + xk.conj()) * one_half;
                    let zj = sum_j + mul_j(wj * diff_j) * one_half;
                    buf[j] = zj;
                }
                k += 1;
            }

            buf[0] = Complex::new((x0.re + xhalf.re) * one_half, (x0.re - xhalf.re) * one_half);
        }
    }

    dispatch_inverse(&mut buf[..half], scratch, half_twiddles);
}

#[cfg(test)]
#[path = "rfft_tests.rs"]
mod tests;
