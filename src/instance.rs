// The external interface. A single generic `Fft<T>` instance owns every
// buffer the library needs -- primary sample buffer, secondary ping-pong
// buffer, complex twiddle table and rfft rotation table -- as four
// disjoint, independently sized `Vec`s, allocated once at construction to
// a `max_n` and never reallocated afterwards.
//
// `FftF32`/`FftF64` are "one type per precision" aliases; the generic core
// beneath them is monomorphised per precision by the compiler rather than
// hand-duplicated per module.

use crate::common::{is_pow2, FftError, MAX_N, MIN_N, MIN_RFFT_N};
use crate::dispatch::dispatch_forward;
use crate::inverse::dispatch_inverse;
use crate::rfft::{rfft_forward, rfft_inverse};
use crate::twiddle::{precompute_complex_twiddles, precompute_rfft_twiddles};
use alloc::vec::Vec;
use num_complex::Complex;
use num_traits::Float;

/// A generic-over-`T` FFT instance. Allocates its sample buffer, ping-pong
/// scratch buffer and both twiddle tables once, in [`Fft::create`]; every
/// `precompute_*`/transform call afterwards only ever writes into
/// already-owned storage.
pub struct Fft<T> {
    max_n: usize,
    primary: Vec<Complex<T>>,
    secondary: Vec<Complex<T>>,
    twiddles: Vec<Complex<T>>,
    rfft_rotations: Vec<Complex<T>>,
    twiddle_n: Option<usize>,
    rfft_n: Option<usize>,
}

/// f64 complex FFT / IFFT instance.
pub type FftF64 = Fft<f64>;
/// f32 complex FFT / IFFT instance (also drives the real-FFT fast path).
pub type FftF32 = Fft<f32>;

impl<T: Float> Fft<T> {
    /// Allocates an instance supporting sizes up to `max_n`. `max_n` must be
    /// a power of two in `[4, 4096]`.
    pub fn create(max_n: usize) -> Result<Self, FftError> {
        if !is_pow2(max_n) || max_n < MIN_N || max_n > MAX_N {
            return Err(FftError::InvalidConfiguration { requested: max_n, min: MIN_N, max: MAX_N });
        }
        let zero = Complex::new(T::zero(), T::zero());
        Ok(Self {
            max_n,
            primary: zeros(zero, max_n),
            secondary: zeros(zero, max_n),
            twiddles: zeros(zero, max_n),
            rfft_rotations: zeros(zero, max_n / 2),
            twiddle_n: None,
            rfft_n: None,
        })
    }

    /// The largest `N` this instance supports.
    pub fn max_n(&self) -> usize {
        self.max_n
    }

    /// Fills the complex twiddle table for size `n`. Must be called before
    /// `fft`/`ifft` for that `n`, and before `rfft`/`irfft` of size `2*n`
    /// (the real-FFT pack/unpack layer drives an `n/2`-point complex
    /// transform internally).
    pub fn precompute_twiddles(&mut self, n: usize) -> Result<(), FftError> {
        self.validate_complex_size(n)?;
        precompute_complex_twiddles(&mut self.twiddles[..n], n);
        self.twiddle_n = Some(n);
        Ok(())
    }

    /// Fills the rfft rotation table for size `n`. Additionally required,
    /// on top of `precompute_twiddles(n / 2)`, before `rfft(n)`/`irfft(n)`.
    pub fn precompute_rfft_twiddles(&mut self, n: usize) -> Result<(), FftError> {
        self.validate_rfft_size(n)?;
        precompute_rfft_twiddles(&mut self.rfft_rotations[..n / 2], n);
        self.rfft_n = Some(n);
        Ok(())
    }

    /// Mutable access to the primary sample buffer, as `max_n` complex
    /// samples (`2 * max_n` scalars). Write a size-`n` input into the first
    /// `n` entries before calling `fft(n)`/`ifft(n)`.
    pub fn sample_buffer_mut(&mut self) -> &mut [Complex<T>] {
        &mut self.primary
    }

    /// Mutable access to the primary sample buffer reinterpreted as
    /// `max_n` real scalars -- the first half (by byte count) of the same
    /// storage `sample_buffer_mut` exposes. Write a size-`n` real input
    /// into the first `n` entries before calling `rfft(n)`; read a size-`n`
    /// real output back from there after `irfft(n)`.
    ///
    /// Safety: `Complex<T>` is `#[repr(C)]` with two adjacent `T` fields
    /// (`num-complex`'s documented layout), so reinterpreting the first
    /// `max_n / 2` complex entries as `max_n` scalars is a sound,
    /// alignment-preserving cast -- the standard "reinterpret the real
    /// array as a complex array" trick real-FFT pack/unpack routines rely
    /// on (used here in the other direction, complex storage read back as
    /// scalars).
    pub fn real_buffer_mut(&mut self) -> &mut [T] {
        let ptr = self.primary.as_mut_ptr() as *mut T;
        unsafe { core::slice::from_raw_parts_mut(ptr, self.max_n) }
    }

    /// Forward complex FFT of size `n`, in place over `sample_buffer_mut()`.
    pub fn fft(&mut self, n: usize) -> Result<(), FftError> {
        self.validate_complex_size(n)?;
        self.require_twiddles(n)?;
        let (buf, scratch, tw) = self.complex_slices(n);
        dispatch_forward(buf, scratch, tw);
        Ok(())
    }

    /// Inverse complex FFT of size `n` (includes the `1/n` scale), in place
    /// over `sample_buffer_mut()`.
    pub fn ifft(&mut self, n: usize) -> Result<(), FftError> {
        self.validate_complex_size(n)?;
        self.require_twiddles(n)?;
        let (buf, scratch, tw) = self.complex_slices(n);
        dispatch_inverse(buf, scratch, tw);
        Ok(())
    }

    /// Forward real FFT of size `n`: reads `n` reals from
    /// `real_buffer_mut()`, writes `n/2 + 1` complex bins over the same
    /// storage (readable via `sample_buffer_mut()[..n/2 + 1]`).
    pub fn rfft(&mut self, n: usize) -> Result<(), FftError> {
        self.validate_rfft_size(n)?;
        self.require_rfft_twiddles(n)?;
        let half = n / 2;
        let (buf, scratch, tw, rot) = self.rfft_slices(n);
        rfft_forward(&mut buf[..half + 1], scratch, tw, rot, n);
        Ok(())
    }

    /// Inverse real FFT of size `n`: reads `n/2 + 1` complex bins from
    /// `sample_buffer_mut()`, writes `n` reals over the same storage
    /// (readable via `real_buffer_mut()[..n]`).
    pub fn irfft(&mut self, n: usize) -> Result<(), FftError> {
        self.validate_rfft_size(n)?;
        self.require_rfft_twiddles(n)?;
        let half = n / 2;
        let (buf, scratch, tw, rot) = self.rfft_slices(n);
        rfft_inverse(&mut buf[..half + 1], scratch, tw, rot, n);
        Ok(())
    }

    fn complex_slices(&mut self, n: usize) -> (&mut [Complex<T>], &mut [Complex<T>], &[Complex<T>]) {
        (&mut self.primary[..n], &mut self.secondary[..n], &self.twiddles[..n])
    }

    fn rfft_slices(
        &mut self,
        n: usize,
    ) -> (&mut [Complex<T>], &mut [Complex<T>], &[Complex<T>], &[Complex<T>]) {
        let half = n / 2;
        (
            &mut self.primary[..half + 1],
            &mut self.secondary[..half],
            &self.twiddles[..half],
            &self.rfft_rotations[..half],
        )
    }

    fn validate_complex_size(&self, n: usize) -> Result<(), FftError> {
        if !is_pow2(n) || n < MIN_N || n > self.max_n {
            return Err(FftError::InvalidSize { n, min: MIN_N, max: self.max_n });
        }
        Ok(())
    }

    fn validate_rfft_size(&self, n: usize) -> Result<(), FftError> {
        if !is_pow2(n) || n < MIN_RFFT_N || n > self.max_n || !is_pow2(n / 2) || n / 2 < MIN_N {
            return Err(FftError::InvalidSize { n, min: MIN_RFFT_N, max: self.max_n });
        }
        Ok(())
    }

    fn require_twiddles(&self, n: usize) -> Result<(), FftError> {
        if self.twiddle_n != Some(n) {
            return Err(FftError::NotPrecomputed { n });
        }
        Ok(())
    }

    fn require_rfft_twiddles(&self, n: usize) -> Result<(), FftError> {
        if self.twiddle_n != Some(n / 2) || self.rfft_n != Some(n) {
            return Err(FftError::NotPrecomputed { n });
        }
        Ok(())
    }
}

fn zeros<T: Clone>(value: T, len: usize) -> Vec<T> {
    let mut v = Vec::new();
    v.resize(len, value);
    v
}

#[cfg(test)]
#[path = "instance_tests.rs"]
mod tests;
