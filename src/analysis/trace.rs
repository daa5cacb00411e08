//! Amplitude-over-time trace for a fixed window of a file

use crate::audio::AudioData;
use crate::error::AudioError;

pub(crate) const TRACE_START_SECS: f64 = 3.0;
pub(crate) const TRACE_DURATION_SECS: f64 = 1.0;

/// Upper bound on points handed to the chart renderer
pub(crate) const MAX_CHART_POINTS: usize = 4000;

/// Amplitude samples paired with their timestamps (seconds)
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct AmplitudeTrace {
    pub(crate) times: Vec<f64>,
    pub(crate) amplitudes: Vec<f32>,
}

impl AmplitudeTrace {
    pub(crate) fn len(&self) -> usize {
        self.times.len()
    }

    /// `[t, amplitude]` pairs for a value-axis line chart
    pub(crate) fn points(&self) -> Vec<Vec<f64>> {
        self.times
            .iter()
            .zip(&self.amplitudes)
            .map(|(&t, &a)| vec![t, a as f64])
            .collect()
    }
}

/// `n` evenly spaced values from `start` to `end`, both inclusive
pub(crate) fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut values: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            values[n - 1] = end;
            values
        }
    }
}

/// Cut `[start_secs, start_secs + duration_secs)` out of `audio` and attach a time axis
pub(crate) fn amplitude_trace(
    audio: &AudioData,
    start_secs: f64,
    duration_secs: f64,
) -> Result<AmplitudeTrace, AudioError> {
    let slice = audio.slice_secs(start_secs, duration_secs)?;
    Ok(AmplitudeTrace {
        times: linspace(start_secs, start_secs + duration_secs, slice.len()),
        amplitudes: slice.to_vec(),
    })
}

/// Reduce a trace to at most `max_points` using per-bucket min/max.
/// The first and last points are always kept so the time span is unchanged.
pub(crate) fn decimate(trace: &AmplitudeTrace, max_points: usize) -> AmplitudeTrace {
    let len = trace.len();
    if len <= max_points || max_points < 4 {
        return trace.clone();
    }

    // Two points per bucket, plus room for the forced endpoints
    let buckets = (max_points - 2) / 2;
    let bucket_size = len.div_ceil(buckets);

    let mut indices = Vec::with_capacity(max_points);
    indices.push(0);

    for bucket_start in (0..len).step_by(bucket_size) {
        let bucket_end = (bucket_start + bucket_size).min(len);
        let (mut lo, mut hi) = (bucket_start, bucket_start);
        for i in bucket_start..bucket_end {
            if trace.amplitudes[i] < trace.amplitudes[lo] {
                lo = i;
            }
            if trace.amplitudes[i] > trace.amplitudes[hi] {
                hi = i;
            }
        }
        let (first, second) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        for idx in [first, second] {
            if indices.last() != Some(&idx) {
                indices.push(idx);
            }
        }
    }

    if indices.last() != Some(&(len - 1)) {
        indices.push(len - 1);
    }

    AmplitudeTrace {
        times: indices.iter().map(|&i| trace.times[i]).collect(),
        amplitudes: indices.iter().map(|&i| trace.amplitudes[i]).collect(),
    }
}
