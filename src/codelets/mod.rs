// src/codelets/mod.rs
//
// Small-N codelets. Fully unrolled, no internal loop over a dynamic N.
// N=4/8/16 embed their twiddles as literal constants with no memory
// loads at all.
//
// N=32/64/128 are NOT hand-flattened here: an earlier version of this
// module composed them hierarchically out of N=16 groups (a few leading
// radix-2 "combine" stages against the runtime twiddle table, then one
// `codelet_16` call per resulting 16-wide block), but that composition
// left the output in decimated bin order rather than natural order --
// a radix-2 Stockham combine stage separates even/odd half-spectra into
// contiguous halves of the *buffer*, it does not produce contiguous
// natural-order sub-blocks, so finishing each contiguous 16-wide chunk
// with `codelet_16` in place computed the wrong permutation of bins.
// `dispatch.rs` now routes N=32/64/128 straight to the generic engine
// (`run_generic`, proven correct against the naive DFT and against the
// N<=16 codelets in `engine_tests.rs`) instead of a broken fast path.
//
// This engine is self-sorting Stockham throughout: there is no
// bit-reversal permutation anywhere in this crate, so every codelet is
// uniformly natural-order-in / natural-order-out. That collapses the
// usual decimation-in-time/decimation-in-frequency codelet split
// bit-reversal-based engines need down to a single family — see
// DESIGN.md for the reasoning, and for the spec's DIT/DIF requirement
// this single-family design deliberately does not meet.

mod n16;
mod n4;
mod n8;

pub use n16::codelet_16;
pub use n4::codelet_4;
pub use n8::codelet_8;
