//! In-place mixed-radix Cooley-Tukey FFT.
//!
//! Computes the discrete Fourier transform of buffers whose length is an exact power of a
//! caller-chosen radix `R`. Radix 2, 4 and 8 use closed-form butterflies, every other radix
//! falls back to a direct R-point DFT per butterfly.
//!
//! The transform runs in two steps: [`transform`] leaves the result in digit-reversed order
//! and [`reorder`] restores natural order. [`RadixFft`] bundles both and keeps the twiddle
//! factors between calls.
//!
//! ```
//! use radix_fft::{Complex64, Direction, reorder, transform};
//!
//! let mut data: Vec<Complex64> = (1..=8).map(|x| Complex64::from_real(x as f64)).collect();
//! transform(&mut data, 2, Direction::Forward).unwrap();
//! reorder(&mut data, 2).unwrap();
//! assert!((data[0].re - 36.0).abs() < 1e-12);
//! ```
#![cfg_attr(feature = "no_std", no_std)]

extern crate alloc;

mod complex;
mod error;
mod fft;
mod float;

pub use complex::{Complex, Complex32, Complex64};
pub use error::FftError;
pub use fft::*;
pub use float::Float;
