//! Fixed design [Chebyshev type I](https://en.wikipedia.org/wiki/Chebyshev_filter) lowpass filter.
//!
//! Design parameters: order 4, cutoff 5.0, sample rate 100.0 (same unit), i.e
//! the cutoff is at 5% of the sample rate regardless of the actual rate of
//! the stream.
//!
//! # Examples
//! ## Impulse response
//!
//! The filter is deterministic, so two fresh instances produce identical
//! impulse responses that decay towards zero.
//!
//! ```
//! use cheby1_lowpass::cheby1::Cheby1Lowpass;
//!
//! let mut first = Cheby1Lowpass::new();
//! let mut second = Cheby1Lowpass::new();
//! for i in 0..1000 {
//!     let x = if i == 0 { 1.0 } else { 0.0 };
//!     let y = first.filter(x);
//!     assert_eq!(y.to_bits(), second.filter(x).to_bits());
//!     if i > 500 {
//!         assert!(y.abs() < 1e-10);
//!     }
//! }
//! ```

mod cheby1_lowpass;
mod coefficients;

pub use cheby1_lowpass::Cheby1Lowpass;
