//! Short-time Fourier transform framing

use std::sync::Arc;

use rustfft::num_complex::Complex;
use rustfft::{Fft, FftPlanner};

pub(crate) const FFT_SIZE: usize = 2048;
pub(crate) const HOP_SIZE: usize = 512;

/// Create a periodic Hann window of the given size
pub(crate) fn create_hann_window(size: usize) -> Vec<f32> {
    let pi2 = 2.0 * std::f32::consts::PI;
    (0..size)
        .map(|i| 0.5 * (1.0 - (pi2 * i as f32 / size as f32).cos()))
        .collect()
}

/// Center frequency of each non-negative FFT bin (0..=fft_size/2)
pub(crate) fn bin_frequencies(sample_rate: u32, fft_size: usize) -> Vec<f64> {
    let freq_per_bin = sample_rate as f64 / fft_size as f64;
    (0..=fft_size / 2).map(|k| k as f64 * freq_per_bin).collect()
}

/// Number of centered frames for a signal of `num_samples`.
/// The signal is padded by half a window on each side.
pub(crate) fn frame_count(num_samples: usize, hop: usize) -> usize {
    if num_samples == 0 {
        0
    } else {
        1 + num_samples / hop
    }
}

/// Magnitude STFT over centered, zero-padded frames
pub(crate) struct Stft {
    fft: Arc<dyn Fft<f32>>,
    window: Vec<f32>,
    hop: usize,
    buffer: Vec<Complex<f32>>,
    magnitudes: Vec<f64>,
}

impl Stft {
    pub(crate) fn new(fft_size: usize, hop: usize) -> Self {
        let mut planner = FftPlanner::new();
        Self {
            fft: planner.plan_fft_forward(fft_size),
            window: create_hann_window(fft_size),
            hop,
            buffer: vec![Complex::new(0.0, 0.0); fft_size],
            magnitudes: vec![0.0; fft_size / 2 + 1],
        }
    }

    /// Call `on_frame` with the magnitude spectrum of every frame, in order
    pub(crate) fn for_each_frame<F>(&mut self, samples: &[f32], mut on_frame: F)
    where
        F: FnMut(usize, &[f64]),
    {
        let fft_size = self.window.len();
        let half = (fft_size / 2) as isize;

        for frame_idx in 0..frame_count(samples.len(), self.hop) {
            let start = (frame_idx * self.hop) as isize - half;

            for (j, slot) in self.buffer.iter_mut().enumerate() {
                let idx = start + j as isize;
                let sample = if idx >= 0 && (idx as usize) < samples.len() {
                    samples[idx as usize]
                } else {
                    0.0
                };
                *slot = Complex::new(sample * self.window[j], 0.0);
            }

            self.fft.process(&mut self.buffer);

            for (mag, c) in self.magnitudes.iter_mut().zip(&self.buffer) {
                *mag = c.norm() as f64;
            }

            on_frame(frame_idx, &self.magnitudes);
        }
    }
}
