//! Measurement utilities used to verify filter behavior.

mod f32_array_ext;
mod fft;
mod response;

pub use f32_array_ext::{level_to_db, F32ArrayExt};
pub use fft::{real_fft, Complex32};
pub use response::{bin_frequency, impulse_response, power_response};
