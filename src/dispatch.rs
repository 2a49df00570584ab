// Size dispatcher. Picks a hand-flattened codelet for small N, the
// generic radix-4 engine for larger powers of four, and the generic
// radix-2 engine everywhere else. Callers always get the result back in
// `x` -- the "post-stage parity copy" (copying the secondary ping-pong
// buffer back into the primary one when an odd number of stages ran) is
// done here once, rather than duplicated at every call site.
//
// N=32/64/128 fall through to `run_generic` rather than a dedicated
// codelet: a hierarchical "combine stages + codelet_16 per block"
// composition was tried and found to leave bins in decimated order
// (see `codelets/mod.rs`), so this crate only ships hand-flattened
// codelets through N=16 and relies on the already-verified generic
// engine above that.

use crate::codelets::{codelet_16, codelet_4, codelet_8};
use crate::common::log2_usize;
use crate::engine::{stockham_radix2, stockham_radix4};
use num_complex::Complex;
use num_traits::Float;

/// Applies the forward complex transform in place. `twiddles` must hold
/// at least `n` precomputed entries for `n = x.len()`; `scratch` must be
/// at least `n` long and is only touched for sizes that fall through to
/// the generic engine.
pub fn dispatch_forward<T: Float>(x: &mut [Complex<T>], scratch: &mut [Complex<T>], twiddles: &[Complex<T>]) {
    let n = x.len();
    match n {
        4 => codelet_4(x),
        8 => codelet_8(x),
        16 => codelet_16(x),
        _ => run_generic(x, scratch, twiddles, n),
    }
}

fn run_generic<T: Float>(x: &mut [Complex<T>], scratch: &mut [Complex<T>], twiddles: &[Complex<T>], n: usize) {
    debug_assert!(scratch.len() >= n);
    let b = &mut scratch[..n];
    let result_in_b = if log2_usize(n) % 2 == 0 {
        stockham_radix4(x, b, twiddles, n)
    } else {
        stockham_radix2(x, b, twiddles, n)
    };
    if result_in_b {
        x.copy_from_slice(b);
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
