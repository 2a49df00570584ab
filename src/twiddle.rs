// src/twiddle.rs
//
// Twiddle table precompute. Generic over the instance's floating
// precision; angles are always evaluated in f64 for accuracy (~1e-10 per
// entry) and cast down to T at the end, so an f32 instance gets the same
// quality of twiddles a hand-written f32 trig call would not guarantee.

use core::f64::consts::PI;
use num_complex::Complex;
use num_traits::Float;

#[cfg(feature = "std")]
fn sin_cos_f64(angle: f64) -> (f64, f64) {
    (angle.sin(), angle.cos())
}

#[cfg(not(feature = "std"))]
fn sin_cos_f64(angle: f64) -> (f64, f64) {
    (libm::sin(angle), libm::cos(angle))
}

fn cast<T: Float>(x: f64) -> T {
    T::from(x).unwrap_or_else(T::zero)
}

/// Fill `twiddles[0..n)` with W_N^k = (cos(-2*pi*k/n), sin(-2*pi*k/n)).
///
/// `twiddles` may be longer than `n`; only the first `n` entries are
/// written. Entry 0 is exactly (1, 0).
pub fn precompute_complex_twiddles<T: Float>(twiddles: &mut [Complex<T>], n: usize) {
    debug_assert!(twiddles.len() >= n);
    twiddles[0] = Complex::new(T::one(), T::zero());
    for k in 1..n {
        let angle = -2.0 * PI * (k as f64) / (n as f64);
        let (sin, cos) = sin_cos_f64(angle);
        twiddles[k] = Complex::new(cast(cos), cast(sin));
    }
}

/// Fill `rotations[0..n/2)` with (cos(-pi*k/(n/2)), sin(-pi*k/(n/2))) for
/// k in [0, n/2) — the rfft post-processing rotation table for a size-`n`
/// real transform. Numerically identical to `precompute_complex_twiddles`
/// of the same `n`, kept as a separate entry point because the rfft
/// rotation table is a separate, independently-sized array owned by the
/// instance.
pub fn precompute_rfft_twiddles<T: Float>(rotations: &mut [Complex<T>], n: usize) {
    let half = n / 2;
    debug_assert!(rotations.len() >= half);
    rotations[0] = Complex::new(T::one(), T::zero());
    for k in 1..half {
        let angle = -PI * (k as f64) / (half as f64);
        let (sin, cos) = sin_cos_f64(angle);
        rotations[k] = Complex::new(cast(cos), cast(sin));
    }
}

#[cfg(test)]
#[path = "twiddle_tests.rs"]
mod tests;
