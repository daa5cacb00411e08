//! Color definitions for charts

/// Common colors
pub(super) const COLOR_BACKGROUND: &str = "#000000"; // Black
pub(super) const COLOR_TEXT: &str = "#FFFFFF"; // White
pub(super) const COLOR_GRID: &str = "#333333"; // Dark gray grid lines
pub(super) const COLOR_WATERMARK: &str = "#808080"; // Gray

/// Amplitude trace colors
pub(super) const TRACE_LINE: &str = "#00F9FF"; // Cyan
pub(super) const TRACE_FILL: &str = "#FF00E6"; // Magenta
