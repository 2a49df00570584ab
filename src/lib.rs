#![no_std]
//! Mixed-radix Stockham FFT for power-of-two sizes in `[4, 4096]`.
//!
//! `f64` complex FFT/IFFT, `f32` complex FFT/IFFT, and an `f32` real-input
//! FFT/IFFT fast path, all driven through a single generic [`Fft<T>`]
//! instance that owns its sample buffer, ping-pong scratch buffer and
//! twiddle tables up front and never allocates again.
//!
//! ```
//! use stockham_fft::{Fft, Complex};
//!
//! let mut fft = Fft::<f64>::create(8).unwrap();
//! fft.precompute_twiddles(8).unwrap();
//! fft.sample_buffer_mut()[0] = Complex::new(1.0, 0.0);
//! fft.fft(8).unwrap();
//! // impulse in -> flat spectrum out
//! assert!(fft.sample_buffer_mut()[..8].iter().all(|c| (c - Complex::new(1.0, 0.0)).norm() < 1e-12));
//! ```

// The library itself is `no_std` + `alloc`. `std` is linked whenever the
// `std` feature is on (it gates `FftError`'s `std::error::Error` impl in
// `common.rs`) and unconditionally under `cfg(test)` for the test harness,
// which needs `Vec`-returning helpers and `std::f64::consts`.
#[cfg(any(feature = "std", test))]
extern crate std;

extern crate alloc;

pub mod common;
mod codelets;
mod dispatch;
mod engine;
mod instance;
mod inverse;
mod rfft;
mod rfft_unrolled;
mod simd;
mod split;
mod twiddle;

#[cfg(test)]
mod test_util;
#[cfg(test)]
#[path = "properties_tests.rs"]
mod properties_tests;

pub use common::FftError;
pub use instance::{Fft, FftF32, FftF64};
pub use num_complex::Complex;
pub use split::SplitFft;
