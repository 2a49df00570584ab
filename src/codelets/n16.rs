// N=16 codelet: two radix-4 Stockham stages (r=4,l=1) -> (r=1,l=4),
// hand-unrolled by substituting these constant loop bounds into the
// (tested) generic radix-4 stage formula from `engine.rs`. All six
// distinct non-trivial twiddles (W16^1, W16^2, W16^3, W16^4, W16^6,
// W16^9 -- the values the k=1,2,3 butterflies of stage 1 need) are
// literal constants; the final stage (r=1) is always twiddle-free, as
// it is for every radix-4 Stockham transform. W16^4 = -j and
// W16^2 = W8^1 = conj-free real==imag magnitude are applied via lane
// swap + sign flip rather than a complex multiply where exact.

use crate::simd::mul_neg_j;
use num_complex::Complex;
use num_traits::Float;

#[inline]
fn w16_1<T: Float>() -> Complex<T> {
    Complex::new(T::from(0.9238795325112867f64).unwrap(), T::from(-0.3826834323650898f64).unwrap())
}

#[inline]
fn w16_2<T: Float>() -> Complex<T> {
    // = W8^1
    Complex::new(T::from(0.7071067811865476f64).unwrap(), T::from(-0.7071067811865475f64).unwrap())
}

#[inline]
fn w16_3<T: Float>() -> Complex<T> {
    Complex::new(T::from(0.38268343236508984f64).unwrap(), T::from(-0.9238795325112867f64).unwrap())
}

#[inline]
fn w16_6<T: Float>() -> Complex<T> {
    // = W8^3
    Complex::new(T::from(-0.7071067811865475f64).unwrap(), T::from(-0.7071067811865476f64).unwrap())
}

#[inline]
fn w16_9<T: Float>() -> Complex<T> {
    Complex::new(T::from(-0.9238795325112868f64).unwrap(), T::from(0.38268343236508967f64).unwrap())
}

#[inline]
pub fn codelet_16<T: Float>(x: &mut [Complex<T>]) {
    debug_assert_eq!(x.len(), 16);
    let (w1, w2, w3, w6, w9) = (w16_1::<T>(), w16_2::<T>(), w16_3::<T>(), w16_6::<T>(), w16_9::<T>());

    // Stage 1 (r=4, l=1): four independent radix-4 butterflies, one per
    // k in 0..4, each drawing from x[k], x[k+4], x[k+8], x[k+12].
    let (y0, y4, y8, y12) = {
        let (a0, a1, a2, a3) = (x[0], x[4], x[8], x[12]);
        let t0 = a0 + a2;
        let t1 = a0 - a2;
        let t2 = a1 + a3;
        let t3 = a1 - a3;
        let rot = mul_neg_j(t3);
        (t0 + t2, t1 + rot, t0 - t2, t1 - rot)
    };
    let (y1, y5, y9, y13) = {
        let (a0, a1, a2, a3) = (x[1], x[5], x[9], x[13]);
        let t0 = a0 + a2;
        let t1 = a0 - a2;
        let t2 = a1 + a3;
        let t3 = a1 - a3;
        let rot = mul_neg_j(t3);
        (t0 + t2, (t1 + rot) * w1, (t0 - t2) * w2, (t1 - rot) * w3)
    };
    let (y2, y6, y10, y14) = {
        let (a0, a1, a2, a3) = (x[2], x[6], x[10], x[14]);
        let t0 = a0 + a2;
        let t1 = a0 - a2;
        let t2 = a1 + a3;
        let t3 = a1 - a3;
        let rot = mul_neg_j(t3);
        (t0 + t2, (t1 + rot) * w2, mul_neg_j(t0 - t2), (t1 - rot) * w6)
    };
    let (y3, y7, y11, y15) = {
        let (a0, a1, a2, a3) = (x[3], x[7], x[11], x[15]);
        let t0 = a0 + a2;
        let t1 = a0 - a2;
        let t2 = a1 + a3;
        let t3 = a1 - a3;
        let rot = mul_neg_j(t3);
        (t0 + t2, (t1 + rot) * w3, (t0 - t2) * w6, (t1 - rot) * w9)
    };

    // Stage 2 (r=1, l=4) -- always trivial twiddle.
    {
        let (a0, a1, a2, a3) = (y0, y1, y2, y3);
        let t0 = a0 + a2;
        let t1 = a0 - a2;
        let t2 = a1 + a3;
        let t3 = a1 - a3;
        let rot = mul_neg_j(t3);
        x[0] = t0 + t2;
        x[4] = t1 + rot;
        x[8] = t0 - t2;
        x[12] = t1 - rot;
    }
    {
        let (a0, a1, a2, a3) = (y4, y5, y6, y7);
        let t0 = a0 + a2;
        let t1 = a0 - a2;
        let t2 = a1 + a3;
        let t3 = a1 - a3;
        let rot = mul_neg_j(t3);
        x[1] = t0 + t2;
        x[5] = t1 + rot;
        x[9] = t0 - t2;
        x[13] = t1 - rot;
    }
    {
        let (a0, a1, a2, a3) = (y8, y9, y10, y11);
        let t0 = a0 + a2;
        let t1 = a0 - a2;
        let t2 = a1 + a3;
        let t3 = a1 - a3;
        let rot = mul_neg_j(t3);
        x[2] = t0 + t2;
        x[6] = t1 + rot;
        x[10] = t0 - t2;
        x[14] = t1 - rot;
    }
    {
        let (a0, a1, a2, a3) = (y12, y13, y14, y15);
        let t0 = a0 + a2;
        let t1 = a0 - a2;
        let t2 = a1 + a3;
        let t3 = a1 - a3;
        let rot = mul_neg_j(t3);
        x[3] = t0 + t2;
        x[7] = t1 + rot;
        x[11] = t0 - t2;
        x[15] = t1 - rot;
    }
}
