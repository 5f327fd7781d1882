use core::convert::TryInto;

pub use microfft::Complex32;

// Dispatches on the buffer length to the `microfft` real transform of
// that size. The length check makes the array conversion infallible.
macro_rules! rfft_by_length {
    ($buffer:ident, $($size:literal => $transform:ident),+ $(,)?) => {
        match $buffer.len() {
            $($size => microfft::real::$transform($buffer.try_into().unwrap()),)+
            fft_size => panic!("Unsupported fft size {}", fft_size),
        }
    };
}

/// Performs an in-place real FFT of a buffer with a power of two length
/// between 8 and 4096.
///
/// Returns the first half of the spectrum. As packed by `microfft`, the
/// real valued Nyquist bin is stored in the imaginary part of bin 0.
pub fn real_fft(buffer: &mut [f32]) -> &mut [Complex32] {
    rfft_by_length!(
        buffer,
        8 => rfft_8,
        16 => rfft_16,
        32 => rfft_32,
        64 => rfft_64,
        128 => rfft_128,
        256 => rfft_256,
        512 => rfft_512,
        1024 => rfft_1024,
        2048 => rfft_2048,
        4096 => rfft_4096,
    )
}
