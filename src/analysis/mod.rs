//! Frequency-domain and time-domain statistics

mod fft;
mod frequency;
mod trace;

pub(crate) use fft::{FFT_SIZE, HOP_SIZE};
pub(crate) use frequency::{WeightedFrequency, weighted_average_frequency};
pub(crate) use trace::{
    MAX_CHART_POINTS, TRACE_DURATION_SECS, TRACE_START_SECS, amplitude_trace, decimate,
};
