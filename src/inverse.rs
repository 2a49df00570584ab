// Inverse complex transform. The general path is the textbook
// conjugate-fft-conjugate-scale identity, ifft(x) = (1/N) * conj(fft(conj(x))),
// built entirely on top of the forward dispatcher so the inverse never
// needs its own twiddle table or its own codelets. N=4 gets a direct
// specialization since its single stage has no nontrivial twiddles
// either way -- +j in place of -j plus the 1/4 scale is cheaper than two
// extra conjugate passes over four elements.

use crate::dispatch::dispatch_forward;
use crate::simd::mul_j;
use num_complex::Complex;
use num_traits::Float;

#[inline]
fn ifft_4<T: Float>(x: &mut [Complex<T>]) {
    debug_assert_eq!(x.len(), 4);
    let (x0, x1, x2, x3) = (x[0], x[1], x[2], x[3]);

    let t0 = x0 + x2;
    let t1 = x0 - x2;
    let t2 = x1 + x3;
    let t3 = x1 - x3;
    let rot = mul_j(t3);

    let quarter = T::from(0.25).unwrap();
    x[0] = (t0 + t2) * quarter;
    x[1] = (t1 + rot) * quarter;
    x[2] = (t0 - t2) * quarter;
    x[3] = (t1 - rot) * quarter;
}

/// Applies the inverse complex transform in place, scaled by 1/N.
pub fn dispatch_inverse<T: Float>(x: &mut [Complex<T>], scratch: &mut [Complex<T>], twiddles: &[Complex<T>]) {
    let n = x.len();
    if n == 4 {
        ifft_4(x);
        return;
    }
    for v in x.iter_mut() {
        *v = v.conj();
    }
    dispatch_forward(x, scratch, twiddles);
    let scale = T::one() / T::from(n).unwrap();
    for v in x.iter_mut() {
        *v = v.conj() * scale;
    }
}

#[cfg(test)]
#[path = "inverse_tests.rs"]
mod tests;
