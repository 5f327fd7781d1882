use super::coefficients::{A, B, CUTOFF_FREQ, ORDER, SAMPLE_FREQ};

/// Length of the input and output histories.
const SIZE: usize = ORDER + 1;

/// A 4th order Chebyshev type I lowpass filter with a cutoff at 5% of the sample rate.
///
/// Evaluates the direct form I recurrence
///
/// `y(n) = b0 x(n) + sum over i in 1..=4 of (bi x(n - i) - ai y(n - i))`
///
/// using circular buffers of the most recent inputs and outputs, so no
/// samples are shifted or copied per call. Coefficients are `f64`, the
/// history and the processed samples are `f32`.
///
/// A fresh instance has all zero history, so the first few outputs contain
/// a start up transient. Non finite input is not rejected. A `NaN` fed to
/// the filter reaches the output history and, through the feedback terms,
/// every subsequent output. Create a new instance to recover.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cheby1Lowpass {
    /// Most recent inputs. `x[n]` is the newest.
    x: [f32; SIZE],
    /// Most recent outputs. `y[n]` is the newest.
    y: [f32; SIZE],
    /// Write position in `x` and `y`.
    n: usize,
}

impl Cheby1Lowpass {
    /// The filter order.
    pub const ORDER: usize = ORDER;
    /// The cutoff frequency the coefficients were designed for, in the same unit as `SAMPLE_FREQ`.
    pub const CUTOFF_FREQ: f64 = CUTOFF_FREQ;
    /// The sample rate the coefficients were designed for.
    pub const SAMPLE_FREQ: f64 = SAMPLE_FREQ;

    pub fn new() -> Self {
        log::debug!(
            "Creating cheby1 lowpass (order {}, cutoff {}, sample freq {})",
            ORDER,
            CUTOFF_FREQ,
            SAMPLE_FREQ
        );
        Cheby1Lowpass {
            x: [0.0; SIZE],
            y: [0.0; SIZE],
            n: 0,
        }
    }

    /// Filters the next sample of the stream and returns the corresponding
    /// output sample. Must be called exactly once per input sample, in order.
    pub fn filter(&mut self, sample: f32) -> f32 {
        let n = self.n;
        self.x[n] = sample;

        // The output is rounded to f32 after the first term and after
        // each tap, with every sum formed in f64.
        let mut y = (B[0] * f64::from(self.x[n])) as f32;
        for i in 1..SIZE {
            let k = (n + SIZE - i) % SIZE;
            y = (f64::from(y) + (B[i] * f64::from(self.x[k]) - A[i] * f64::from(self.y[k])))
                as f32;
        }
        self.y[n] = y;

        self.n = (n + 1) % SIZE;
        y
    }
}

impl Default for Cheby1Lowpass {
    fn default() -> Self {
        Cheby1Lowpass::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::F32ArrayExt;
    use core::f32::consts::PI;
    use rand::{rngs::StdRng, Rng, SeedableRng};

    fn filter_all(input: &[f32]) -> Vec<f32> {
        let mut filter = Cheby1Lowpass::new();
        input.iter().map(|x| filter.filter(*x)).collect()
    }

    fn noise(seed: u64, sample_count: usize) -> Vec<f32> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..sample_count).map(|_| rng.gen_range(-1.0..=1.0)).collect()
    }

    fn sine(freq: f32, sample_count: usize) -> Vec<f32> {
        let sample_rate = Cheby1Lowpass::SAMPLE_FREQ as f32;
        (0..sample_count)
            .map(|i| (2.0 * PI * freq * (i as f32) / sample_rate).sin())
            .collect()
    }

    #[test]
    fn test_impulse_response_reference() {
        // Reference output, computed by evaluating the recurrence with
        // f64 coefficients and rounding to f32 after every term.
        let expected_bits: [u32; 7] = [
            0x39da6b00, // 0.000416599204407 rounded to f32
            0x3b440c2d, // 0.0029914484
            0x3c2a7cd7, // 0.0104057407
            0x3cc55df5, // 0.0240926538
            0x3d3024d2, // 0.0430038646
            0x3d83ef11, // 0.0644208267
            0x3dae72e0, // 0.0851800442
        ];

        let mut filter = Cheby1Lowpass::new();
        assert_eq!(filter.filter(1.0), 0.000416599204407_f64 as f32);
        let mut filter = Cheby1Lowpass::new();
        for (i, bits) in expected_bits.iter().enumerate() {
            let x = if i == 0 { 1.0 } else { 0.0 };
            let y = filter.filter(x);
            assert_eq!(y.to_bits(), *bits, "Unexpected output at index {}: {}", i, y);
        }
    }

    #[test]
    fn test_zero_input() {
        let mut filter = Cheby1Lowpass::new();
        for _ in 0..1000 {
            assert_eq!(filter.filter(0.0), 0.0);
        }
    }

    #[test]
    fn test_impulse_response_decays() {
        let mut impulse = vec![0.0; 1000];
        impulse[0] = 1.0;
        let response = filter_all(&impulse);
        assert!(response[..100].peak_level() > 0.1);
        assert!(response[300..].peak_level() < 1e-15);
    }

    #[test]
    fn test_identical_instances() {
        let input = noise(1, 1000);
        let first = filter_all(&input);
        let second = filter_all(&input);
        for (a, b) in first.iter().zip(second.iter()) {
            assert_eq!(a.to_bits(), b.to_bits());
        }
    }

    #[test]
    fn test_unity_dc_gain() {
        let mut filter = Cheby1Lowpass::default();
        for i in 0..1000 {
            let y = filter.filter(1.0);
            if i > 200 {
                assert!((y - 1.0).abs() < 1e-4);
            }
        }
    }

    #[test]
    fn test_linearity() {
        let k = 0.75;
        let x1 = noise(2, 2000);
        let x2 = noise(3, 2000);
        let combined: Vec<f32> = x1.iter().zip(x2.iter()).map(|(a, b)| k * a + b).collect();

        let y1 = filter_all(&x1);
        let y2 = filter_all(&x2);
        let y_combined = filter_all(&combined);
        for i in 0..combined.len() {
            let superposition = k * y1[i] + y2[i];
            assert!((superposition - y_combined[i]).abs() < 1e-4);
        }
    }

    #[test]
    fn test_causality() {
        let input = noise(4, 500);
        let full = filter_all(&input);
        for t in [1, 2, 5, 17, 250, 499].iter() {
            let truncated = filter_all(&input[..*t]);
            assert_eq!(&full[..*t], &truncated[..]);
        }
    }

    #[test]
    fn test_state_isolation() {
        let input_a = noise(5, 500);
        let input_b = sine(2.0, 500);
        let expected_a = filter_all(&input_a);
        let expected_b = filter_all(&input_b);

        // Interleaving calls on two instances must not affect either stream.
        let mut filter_a = Cheby1Lowpass::new();
        let mut filter_b = Cheby1Lowpass::new();
        for i in 0..500 {
            assert_eq!(filter_a.filter(input_a[i]), expected_a[i]);
            assert_eq!(filter_b.filter(input_b[i]), expected_b[i]);
        }
    }

    #[test]
    fn test_clone_forks_history() {
        let input = noise(6, 300);
        let mut filter = Cheby1Lowpass::new();
        for x in input[..100].iter() {
            filter.filter(*x);
        }
        let mut fork = filter;
        for x in input[100..].iter() {
            assert_eq!(filter.filter(*x), fork.filter(*x));
        }
        fork.filter(1.0);
        assert_ne!(filter, fork);
    }

    #[test]
    fn test_write_index_wraps() {
        let mut filter = Cheby1Lowpass::new();
        for i in 0..(3 * SIZE) {
            assert_eq!(filter.n, i % SIZE);
            filter.filter(0.5);
        }
        assert_eq!(filter.n, 0);
        assert_eq!(filter.x, [0.5; SIZE]);
    }

    #[test]
    fn test_passband_and_stopband() {
        let sample_count = 1000;
        let settled = 500;

        // 1 Hz is well inside the passband.
        let pass_input = sine(1.0, sample_count);
        let pass = filter_all(&pass_input);
        let input_rms = pass_input[settled..].rms_level();
        assert!((pass[settled..].rms_level() - input_rms).abs() < 0.01);
        assert!(pass[settled..].peak_level() > 0.99);

        // 20 Hz is attenuated by roughly 53 dB.
        let stop = filter_all(&sine(20.0, sample_count));
        assert!(stop[settled..].peak_level() < 0.01);
        assert!(stop[settled..].rms_level_db() < -40.0);
    }

    #[test]
    fn test_nan_poisons_history() {
        let mut filter = Cheby1Lowpass::new();
        for x in noise(7, 50) {
            assert!(filter.filter(x).is_finite());
        }
        assert!(filter.filter(f32::NAN).is_nan());
        for _ in 0..(4 * SIZE) {
            assert!(filter.filter(0.0).is_nan());
        }

        // A fresh instance is the way to recover.
        filter = Cheby1Lowpass::new();
        assert_eq!(filter.filter(0.0), 0.0);
    }

    #[test]
    fn test_design_parameters() {
        assert_eq!(Cheby1Lowpass::ORDER, 4);
        assert_eq!(Cheby1Lowpass::CUTOFF_FREQ, 5.0);
        assert_eq!(Cheby1Lowpass::SAMPLE_FREQ, 100.0);
        assert_eq!(A[0], 1.0);
        assert_eq!(B.len(), SIZE);
    }
}
