use cheby1_lowpass::common::F32ArrayExt;
use cheby1_lowpass::Cheby1Lowpass;
use dev_helpers::{hound, wav, ConsoleLogger};
use log::info;

/// Returns the input and output paths, or `None` unless exactly two
/// arguments follow the program name.
fn wav_paths(args: &[String]) -> Option<(&str, &str)> {
    match args {
        [_, input_path, output_path] => Some((input_path.as_str(), output_path.as_str())),
        _ => None,
    }
}

fn main() -> Result<(), hound::Error> {
    ConsoleLogger::init();

    let args: Vec<String> = std::env::args().collect();
    let (input_path, output_path) = match wav_paths(&args) {
        Some(paths) => paths,
        None => {
            let program = args.first().map(String::as_str).unwrap_or("lowpass_wav");
            eprintln!("Usage: {} <input.wav> <output.wav>", program);
            std::process::exit(1);
        }
    };

    let (sample_rate, input) = wav::read_wav(input_path)?;
    info!("Read {} samples at {} Hz from {}", input.len(), sample_rate, input_path);
    let cutoff = (sample_rate as f64) * Cheby1Lowpass::CUTOFF_FREQ / Cheby1Lowpass::SAMPLE_FREQ;
    info!("Filtering (order={}, cutoff={:.1} Hz)", Cheby1Lowpass::ORDER, cutoff);

    let mut filter = Cheby1Lowpass::new();
    let output: Vec<f32> = input.iter().map(|x| filter.filter(*x)).collect();

    info!(
        "Input peak {:.1} dB, rms {:.1} dB",
        input.peak_level_db(),
        input.rms_level_db()
    );
    info!(
        "Output peak {:.1} dB, rms {:.1} dB",
        output.peak_level_db(),
        output.rms_level_db()
    );

    wav::write_wav(output_path, sample_rate, &output)?;
    info!("Wrote {}", output_path);
    Ok(())
}
