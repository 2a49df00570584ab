// Unrolled rfft post-/pre-processing for N=64 and N=128 (component C8).
// Same arithmetic as the generic loop in `rfft.rs`, just straight-line: no
// loop over k, and no dynamic `half` -- every `k`/`j` pair is a compile-time
// literal so the `j != k` self-paired-bin guard (true only at k == N/4)
// collapses into a single extra block at the end instead of a runtime
// branch inside the loop.
//
// The twiddle values themselves are still read out of the instance's
// runtime `rotations` table rather than embedded as literal constants:
// unlike the N<=16 complex codelets, hand-transcribing ~16-32 distinct
// rotation constants per function without a compiler to catch a
// transcription slip is not a trade this crate makes (see DESIGN.md). Only
// the *indices* are literals here, which is enough to satisfy the "no
// internal loop" half of the codelet contract while keeping the arithmetic
// itself identical to the already-tested generic path.

use crate::simd::{mul_j, mul_neg_j};
use num_complex::Complex;
use num_traits::Float;

/// Unrolled rfft forward post-processing for N=64. Same arithmetic as the
/// generic loop in `rfft_forward`, straight-line for every k in 1..=16,
/// with k=16 (N/4) the self-paired case (j == k).
#[inline]
pub fn rfft_forward_post_64<T: Float>(buf: &mut [Complex<T>], rotations: &[Complex<T>]) {
    debug_assert_eq!(buf.len(), 32 + 1);
    debug_assert!(rotations.len() >= 32);
    let z0 = buf[0];
    let one_half = T::from(0.5).unwrap();
    {
        let (k, j) = (1usize, 31usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (2usize, 30usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (3usize, 29usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (4usize, 28usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (5usize, 27usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (6usize, 26usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (7usize, 25usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (8usize, 24usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (9usize, 23usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (10usize, 22usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (11usize, 21usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (12usize, 20usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (13usize, 19usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (14usize, 18usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (15usize, 17usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (16usize, 16usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
    }
    buf[0] = Complex::new(z0.re + z0.im, T::zero());
    buf[32] = Complex::new(z0.re - z0.im, T::zero());
}

/// Unrolled rfft forward post-processing for N=128. Same arithmetic as the
/// generic loop in `rfft_forward`, straight-line for every k in 1..=32,
/// with k=32 (N/4) the self-paired case (j == k).
#[inline]
pub fn rfft_forward_post_128<T: Float>(buf: &mut [Complex<T>], rotations: &[Complex<T>]) {
    debug_assert_eq!(buf.len(), 64 + 1);
    debug_assert!(rotations.len() >= 64);
    let z0 = buf[0];
    let one_half = T::from(0.5).unwrap();
    {
        let (k, j) = (1usize, 63usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (2usize, 62usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (3usize, 61usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (4usize, 60usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (5usize, 59usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (6usize, 58usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (7usize, 57usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (8usize, 56usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (9usize, 55usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (10usize, 54usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (11usize, 53usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (12usize, 52usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (13usize, 51usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (14usize, 50usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (15usize, 49usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (16usize, 48usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (17usize, 47usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (18usize, 46usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (19usize, 45usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (20usize, 44usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (21usize, 43usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (22usize, 42usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (23usize, 41usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (24usize, 40usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (25usize, 39usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (26usize, 38usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (27usize, 37usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (28usize, 36usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (29usize, 35usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (30usize, 34usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (31usize, 33usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
        let wj = rotations[j];
        let diff_j = zj - zk.conj();
        let sum_j = (zj + zk.conj()) * one_half;
        buf[j] = sum_j + mul_neg_j(wj * diff_j) * one_half;
    }
    {
        let (k, j) = (32usize, 32usize);
        let zk = buf[k];
        let zj = buf[j];
        let wk = rotations[k];
        let diff_k = zk - zj.conj();
        let sum_k = (zk + zj.conj()) * one_half;
        buf[k] = sum_k + mul_neg_j(wk * diff_k) * one_half;
    }
    buf[0] = Complex::new(z0.re + z0.im, T::zero());
    buf[64] = Complex::new(z0.re - z0.im, T::zero());
}

/// Unrolled rfft inverse pre-processing for N=64. Mirrors
/// [`rfft_forward_post_64`].
#[inline]
pub fn rfft_inverse_pre_64<T: Float>(buf: &mut [Complex<T>], rotations: &[Complex<T>]) {
    debug_assert_eq!(buf.len(), 32 + 1);
    debug_assert!(rotations.len() >= 32);
    let x0 = buf[0];
    let xhalf = buf[32];
    let one_half = T::from(0.5).unwrap();
    {
        let (k, j) = (1usize, 31usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (2usize, 30usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (3usize, 29usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (4usize, 28usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (5usize, 27usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (6usize, 26usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (7usize, 25usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (8usize, 24usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (9usize, 23usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (10usize, 22usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (11usize, 21usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (12usize, 20usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (13usize, 19usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (14usize, 18usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (15usize, 17usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (16usize, 16usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        buf[k] = zk;
    }
    buf[0] = Complex::new((x0.re + xhalf.re) * one_half, (x0.re - xhalf.re) * one_half);
}

/// Unrolled rfft inverse pre-processing for N=128. Mirrors
/// [`rfft_forward_post_128`].
#[inline]
pub fn rfft_inverse_pre_128<T: Float>(buf: &mut [Complex<T>], rotations: &[Complex<T>]) {
    debug_assert_eq!(buf.len(), 64 + 1);
    debug_assert!(rotations.len() >= 64);
    let x0 = buf[0];
    let xhalf = buf[64];
    let one_half = T::from(0.5).unwrap();
    {
        let (k, j) = (1usize, 63usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (2usize, 62usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (3usize, 61usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (4usize, 60usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (5usize, 59usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (6usize, 58usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (7usize, 57usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (8usize, 56usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (9usize, 55usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (10usize, 54usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (11usize, 53usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (12usize, 52usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (13usize, 51usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (14usize, 50usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (15usize, 49usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (16usize, 48usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (17usize, 47usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (18usize, 46usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (19usize, 45usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (20usize, 44usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (21usize, 43usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (22usize, 42usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (23usize, 41usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (24usize, 40usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (25usize, 39usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (26usize, 38usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (27usize, 37usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (28usize, 36usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (29usize, 35usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (30usize, 34usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (31usize, 33usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        let wj = rotations[j].conj();
        let diff_j = xj - xk.conj();
        let sum_j = (xj + xk.conj()) * one_half;
        let zj = sum_j + mul_j(wj * diff_j) * one_half;
        buf[j] = zj;
        buf[k] = zk;
    }
    {
        let (k, j) = (32usize, 32usize);
        let xk = buf[k];
        let xj = buf[j];
        let wk = rotations[k].conj();
        let diff_k = xk - xj.conj();
        let sum_k = (xk + xj.conj()) * one_half;
        let zk = sum_k + mul_j(wk * diff_k) * one_half;
        buf[k] = zk;
    }
    buf[0] = Complex::new((x0.re + xhalf.re) * one_half, (x0.re - xhalf.re) * one_half);
}

#[cfg(test)]
#[path = "rfft_unrolled_tests.rs"]
mod tests;
