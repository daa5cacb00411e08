//! Magnitude-weighted average frequency

use super::fft::{FFT_SIZE, HOP_SIZE, Stft, bin_frequencies};

/// Result of the weighted frequency pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct WeightedFrequency {
    /// Mean of the per-frame weighted frequencies (Hz), 0.0 if no frame had energy
    pub(crate) mean_hz: f64,
    pub(crate) frames_used: usize,
    pub(crate) frames_total: usize,
}

/// Convert a decibel offset to a linear amplitude ratio
pub(crate) fn db_to_amplitude_ratio(db: f64) -> f64 {
    10f64.powf(db / 20.0)
}

/// Compute the average over all STFT frames of `Σ f·a / Σ a`.
///
/// Frames whose magnitudes sum to zero are skipped. With `floor_db`, bins
/// more than that many dB below the loudest bin of the whole signal count as
/// zero, which requires an extra pass to find the peak.
pub(crate) fn weighted_average_frequency(
    samples: &[f32],
    sample_rate: u32,
    floor_db: Option<f64>,
) -> WeightedFrequency {
    let frequencies = bin_frequencies(sample_rate, FFT_SIZE);
    let mut stft = Stft::new(FFT_SIZE, HOP_SIZE);

    let threshold = match floor_db {
        Some(db) => {
            let mut peak = 0.0f64;
            stft.for_each_frame(samples, |_, mags| {
                peak = mags.iter().copied().fold(peak, f64::max);
            });
            peak * db_to_amplitude_ratio(-db.abs())
        }
        None => 0.0,
    };

    let mut sum_hz = 0.0f64;
    let mut frames_used = 0usize;
    let mut frames_total = 0usize;

    stft.for_each_frame(samples, |_, mags| {
        frames_total += 1;

        let (weighted, total) = frequencies
            .iter()
            .zip(mags)
            .filter(|&(_, &a)| a >= threshold)
            .fold((0.0f64, 0.0f64), |(w, t), (&f, &a)| (w + f * a, t + a));

        if total > 0.0 {
            sum_hz += weighted / total;
            frames_used += 1;
        }
    });

    let mean_hz = if frames_used > 0 {
        sum_hz / frames_used as f64
    } else {
        0.0
    };

    WeightedFrequency {
        mean_hz,
        frames_used,
        frames_total,
    }
}
