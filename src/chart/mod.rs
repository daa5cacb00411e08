//! Chart rendering for amplitude traces

mod colors;
mod trace;

pub(crate) use trace::render_trace_chart;

/// Chart dimensions (2x for Retina quality)
pub(super) const CHART_WIDTH: u32 = 2400;
pub(super) const CHART_HEIGHT: u32 = 1600;

/// Data for a single amplitude trace chart
pub(crate) struct TraceChartData {
    pub(crate) filename: String,
    /// `[time, amplitude]` pairs
    pub(crate) points: Vec<Vec<f64>>,
    pub(crate) start_secs: f64,
    pub(crate) end_secs: f64,
}

/// Format a time window for titles (e.g., 3.0, 4.0 -> "3-4 s")
pub(super) fn format_window(start_secs: f64, end_secs: f64) -> String {
    fn trim(secs: f64) -> String {
        if secs == secs.floor() {
            format!("{}", secs as i64)
        } else {
            format!("{:.1}", secs)
        }
    }
    format!("{}-{} s", trim(start_secs), trim(end_secs))
}
