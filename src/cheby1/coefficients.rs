/*
 * This file is autogenerated. Please do not modify directly as changes may be
 * overwritten.
 */

// Cheby1 lowpass filter
// order: 4
// cutoff freq: 5.0
// sample freq: 100.0
pub(crate) const ORDER: usize = 4;
pub(crate) const CUTOFF_FREQ: f64 = 5.0;
pub(crate) const SAMPLE_FREQ: f64 = 100.0;

/// Feed forward (numerator) coefficients.
pub(crate) const B: [f64; ORDER + 1] = [
    0.000416599204407,
    0.00166639681763,
    0.00249959522644,
    0.00166639681763,
    0.000416599204407,
];

/// Feedback (denominator) coefficients. `A[0]` is not applied.
pub(crate) const A: [f64; ORDER + 1] = [
    1.0,
    -3.18063854887,
    3.86119434899,
    -2.11215535511,
    0.438265142262,
];
