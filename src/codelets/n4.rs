// N=4 radix-4 butterfly. No twiddles: the single Stockham stage for N=4
// has group count l=1, radius r=1, so every twiddle entry used is W_4^0
// = 1. Multiplication by +-j is a lane swap + sign flip (`mul_j` /
// `mul_neg_j`), never a real multiply.
//
//   y0 = x0+x1+x2+x3
//   y1 = (x0-x2) - j(x1-x3)
//   y2 = x0-x1+x2-x3
//   y3 = (x0-x2) + j(x1-x3)

use crate::simd::mul_neg_j;
use num_complex::Complex;
use num_traits::Float;

#[inline]
pub fn codelet_4<T: Float>(x: &mut [Complex<T>]) {
    debug_assert_eq!(x.len(), 4);
    let (x0, x1, x2, x3) = (x[0], x[1], x[2], x[3]);

    let t0 = x0 + x2;
    let t1 = x0 - x2;
    let t2 = x1 + x3;
    let t3 = x1 - x3;
    let rot = mul_neg_j(t3);

    x[0] = t0 + t2;
    x[1] = t1 + rot;
    x[2] = t0 - t2;
    x[3] = t1 - rot;
}
