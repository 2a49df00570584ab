// src/engine.rs
//
// The mixed-radix Stockham transform engine. Self-sorting — no
// bit-reversal permutation — at the cost of ping-ponging between two
// full-size buffers across stages.
//
// Stage contract (radix-2): stage has radius `r` and group count
// `l = n/(2r)`. It reads pairs (src[j*2r+k], src[j*2r+k+r]) for
// j in [0, l), k in [0, r), and writes (dst[m], dst[m+n/2]) where
// m = j*r+k.
//
// Twiddle indexing: the butterfly at group j, in-group position k uses
// the twiddle table entry k*l — NOT a constant per group, and not `j`
// alone. This is the self-sorting generalisation of the textbook radix-2
// decimation-in-frequency recursion, verified here by hand-expanding N=4,
// N=8 and N=16 against the direct O(N^2) DFT (see `engine_tests.rs`).
//
// The r=1 / r=2 / r>=4 split called for by a mixed-radix stage loop is
// represented structurally by three named call sites in `dispatch.rs`
// that all bottom out in the same per-stage loop below — the arithmetic
// identity is one stage formula; the loop trip counts differ (r=1 and r=2
// become tight, fully-unrolled-by-the-compiler special cases via k in
// 0..1 / 0..2).

use crate::simd::mul_neg_j;
use num_complex::Complex;
use num_traits::Float;

/// One radix-2 Stockham stage: `src` and `dst` are disjoint length-`n`
/// (or longer) buffers; `twiddles` must hold at least `n/2` entries.
#[inline]
fn stage_radix2<T: Float>(
    src: &[Complex<T>],
    dst: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    r: usize,
    l: usize,
) {
    let half = r * l;
    for j in 0..l {
        for k in 0..r {
            let idx_a = j * 2 * r + k;
            let idx_b = idx_a + r;
            let a = src[idx_a];
            let b = src[idx_b];
            let w = twiddles[k * l];
            let m = j * r + k;
            dst[m] = a + b;
            dst[m + half] = (a - b) * w;
        }
    }
}

/// Run `stages` radix-2 Stockham stages (not necessarily all `log2(n)` of
/// them) over `a`/`b`, starting with data in `a`. Returns `true` if the
/// result ended up in `b`. Used both by [`stockham_radix2`] (the full
/// transform) and by the N=32/64/128 composed codelets, which run only
/// the leading "combine" stages here before handing each resulting
/// size-16 block to the hand-unrolled `codelet_16`.
pub(crate) fn stockham_radix2_stages<T: Float>(
    a: &mut [Complex<T>],
    b: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    n: usize,
    stages: u32,
) -> bool {
    debug_assert!(crate::common::is_pow2(n));
    let mut r = n / 2;
    let mut l = 1usize;
    for s in 0..stages {
        if s % 2 == 0 {
            stage_radix2(&a[..n], &mut b[..n], twiddles, r, l);
        } else {
            stage_radix2(&b[..n], &mut a[..n], twiddles, r, l);
        }
        r >>= 1;
        l <<= 1;
    }
    stages % 2 == 1
}

/// Run the full radix-2 Stockham transform of size `n` (n a power of two)
/// over `a`/`b` (both length >= n), starting with data in `a`. Returns
/// `true` if the result ended up in `b`, `false` if it ended up in `a`.
pub fn stockham_radix2<T: Float>(
    a: &mut [Complex<T>],
    b: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    n: usize,
) -> bool {
    stockham_radix2_stages(a, b, twiddles, n, crate::common::log2_usize(n))
}

/// One radix-4 Stockham stage. `twiddles` must hold at least `3*n/4`
/// entries (only the first `n` of the instance's full twiddle table are
/// ever touched, since the largest index used is `< 3n/4`).
#[inline]
fn stage_radix4<T: Float>(
    src: &[Complex<T>],
    dst: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    r: usize,
    l: usize,
) {
    let quarter = r * l;
    for j in 0..l {
        for k in 0..r {
            let base = j * 4 * r + k;
            let a0 = src[base];
            let a1 = src[base + r];
            let a2 = src[base + 2 * r];
            let a3 = src[base + 3 * r];

            let t0 = a0 + a2;
            let t1 = a0 - a2;
            let t2 = a1 + a3;
            let t3 = a1 - a3;

            let s0 = t0 + t2;
            let s2 = t0 - t2;
            let rot = mul_neg_j(t3);
            let s1 = t1 + rot;
            let s3 = t1 - rot;

            let idx = k * l;
            let w1 = twiddles[idx];
            let w2 = twiddles[idx * 2];
            let w3 = twiddles[idx * 3];

            let m = j * r + k;
            dst[m] = s0;
            dst[m + quarter] = s1 * w1;
            dst[m + 2 * quarter] = s2 * w2;
            dst[m + 3 * quarter] = s3 * w3;
        }
    }
}

/// Run the full radix-4 Stockham transform of size `n` (n a power of
/// four) over `a`/`b`. Returns `true` if the result ended up in `b`.
pub fn stockham_radix4<T: Float>(
    a: &mut [Complex<T>],
    b: &mut [Complex<T>],
    twiddles: &[Complex<T>],
    n: usize,
) -> bool {
    debug_assert!(crate::common::is_pow2(n));
    let log2n = crate::common::log2_usize(n);
    debug_assert!(log2n % 2 == 0, "stockham_radix4 requires n a power of four");
    let stages = log2n / 2;
    let mut r = n / 4;
    let mut l = 1usize;
    for s in 0..stages {
        if s % 2 == 0 {
            stage_radix4(&a[..n], &mut b[..n], twiddles, r, l);
        } else {
            stage_radix4(&b[..n], &mut a[..n], twiddles, r, l);
        }
        r >>= 2;
        l <<= 2;
    }
    stages % 2 == 1
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
