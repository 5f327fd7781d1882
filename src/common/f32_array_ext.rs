//! `[f32]` signal level extensions.

use micromath::F32Ext;

/// Converts a linear level to dB relative to 1, i.e a level of 1 is 0 dB.
///
/// Uses the approximate `log10` of the `micromath` crate. The result is
/// exact for powers of two and can be off by about 1 dB in between,
/// e.g a level of 0.1 gives roughly -21 dB.
pub fn level_to_db(level: f32) -> f32 {
    20. * F32Ext::log10(level)
}

/// `[f32]` signal level extensions.
///
/// Levels are computed with the approximate math functions of the
/// `micromath` crate, so they are suitable for comparing signals against
/// each other or against coarse thresholds, not for exact measurement.
pub trait F32ArrayExt {
    /// Returns the maximum absolute value, or 0 for an empty slice.
    fn peak_level(&self) -> f32;
    /// Returns the peak level in dB relative to 1.
    fn peak_level_db(&self) -> f32;
    /// Returns the [root mean square](https://en.wikipedia.org/wiki/Root_mean_square)
    /// level, or 0 for an empty slice.
    fn rms_level(&self) -> f32;
    /// Returns the RMS level in dB relative to 1.
    fn rms_level_db(&self) -> f32;
}

impl F32ArrayExt for [f32] {
    fn peak_level(&self) -> f32 {
        self.iter().fold(0.0_f32, |max, sample| max.max(sample.abs()))
    }

    fn peak_level_db(&self) -> f32 {
        level_to_db(self.peak_level())
    }

    fn rms_level(&self) -> f32 {
        if self.is_empty() {
            return 0.0;
        }
        let sum_sq: f32 = self.iter().map(|sample| sample * sample).sum();
        F32Ext::sqrt(sum_sq / (self.len() as f32))
    }

    fn rms_level_db(&self) -> f32 {
        level_to_db(self.rms_level())
    }
}
