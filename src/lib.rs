//! A fixed coefficient, 4th order [Chebyshev type I](https://en.wikipedia.org/wiki/Chebyshev_filter)
//! lowpass filter with a cutoff at 5% of the sample rate.
//!
//! Features
//! * Sample by sample processing with a [direct form I](https://en.wikipedia.org/wiki/Digital_biquad_filter#Direct_form_1)
//! recurrence over circular input/output histories.
//! * No allocations, suitable for real time use. `no_std` compatible.
//! * Output matching the reference implementation bit for bit: double precision
//! coefficients applied to single precision history.
//!
//! # Examples
//!
//! ```
//! use cheby1_lowpass::Cheby1Lowpass;
//!
//! let mut filter = Cheby1Lowpass::new();
//! // A unit step settles at unity gain.
//! let mut output = 0.0;
//! for _ in 0..500 {
//!     output = filter.filter(1.0);
//! }
//! assert!((output - 1.0).abs() < 1e-4);
//! ```
//!
//! The [`common`] module contains the level and frequency response
//! utilities used to verify the filter.

#![cfg_attr(not(test), no_std)]

pub mod cheby1;
pub mod common;

pub use cheby1::Cheby1Lowpass;
