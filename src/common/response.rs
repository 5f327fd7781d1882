//! Frequency response probing of per-sample processors.

use super::fft::real_fft;

/// Feeds a unit impulse to a per-sample processor and writes the
/// first `result.len()` output samples to `result`.
pub fn impulse_response<F>(mut process: F, result: &mut [f32])
where
    F: FnMut(f32) -> f32,
{
    for (index, value) in result.iter_mut().enumerate() {
        *value = process(if index == 0 { 1.0 } else { 0.0 });
    }
}

/// Computes the power response |H(k)|² from an impulse response.
///
/// `impulse_response` is transformed in place and must have a length
/// supported by [`real_fft`]. `result` must hold `fft_size / 2 + 1`
/// values, where `result[k]` is the power at [`bin_frequency`]`(k, ...)`,
/// from DC up to and including Nyquist. Powers are returned instead of
/// magnitudes to avoid the approximate `no_std` square root.
pub fn power_response(impulse_response: &mut [f32], result: &mut [f32]) {
    let fft_size = impulse_response.len();
    if result.len() != fft_size / 2 + 1 {
        panic!(
            "Got power response buffer of length {}, expected {}.",
            result.len(),
            fft_size / 2 + 1
        )
    }

    let spectrum = real_fft(impulse_response);
    result[0] = spectrum[0].re * spectrum[0].re;
    result[fft_size / 2] = spectrum[0].im * spectrum[0].im;
    for (index, value) in spectrum.iter().enumerate().skip(1) {
        result[index] = value.norm_sqr();
    }
}

/// Returns the frequency of an FFT bin, in the unit of `sample_rate`.
pub fn bin_frequency(bin: usize, fft_size: usize, sample_rate: f32) -> f32 {
    (bin as f32) * sample_rate / (fft_size as f32)
}
