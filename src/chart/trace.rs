//! Amplitude-over-time line chart with filled area

use std::path::Path;

use charming::{
    Chart, ImageRenderer,
    component::{Axis, Grid, Title},
    element::{AreaStyle, AxisLabel, AxisType, Color, LineStyle, SplitLine, Symbol, TextStyle},
    renderer::ImageFormat,
    series::Line,
};

use super::colors::{
    COLOR_BACKGROUND, COLOR_GRID, COLOR_TEXT, COLOR_WATERMARK, TRACE_FILL, TRACE_LINE,
};
use super::{CHART_HEIGHT, CHART_WIDTH, TraceChartData, format_window};
use crate::error::ChartError;

/// Render amplitude vs. time to a PNG at `output_path`
pub(crate) fn render_trace_chart(
    data: &TraceChartData,
    output_path: &Path,
) -> Result<(), ChartError> {
    if data.points.is_empty() {
        return Err(ChartError("No data to render".to_string()));
    }

    let output_path = output_path
        .to_str()
        .ok_or_else(|| ChartError(format!("Non UTF-8 path: {}", output_path.display())))?;

    let title = format!(
        "Amplitude over Time ({})",
        format_window(data.start_secs, data.end_secs)
    );

    let chart = Chart::new()
        .background_color(Color::Value(COLOR_BACKGROUND.to_string()))
        .title(
            Title::new()
                .text(title)
                .subtext(format!("File: {}", data.filename))
                .left("center")
                .top("2%")
                .text_style(TextStyle::new().color(COLOR_TEXT).font_size(32))
                .subtext_style(TextStyle::new().color(COLOR_TEXT).font_size(22)),
        )
        .title(
            Title::new()
                .text("mp3scope")
                .right("3%")
                .bottom("2%")
                .text_style(TextStyle::new().color(COLOR_WATERMARK).font_size(20)),
        )
        .grid(
            Grid::new()
                .left("6%")
                .right("4%")
                .bottom("10%")
                .top("14%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Time (s)")
                .min(data.start_secs)
                .max(data.end_secs)
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(22))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(18))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Amplitude")
                .name_text_style(TextStyle::new().color(COLOR_TEXT).font_size(22))
                .axis_label(AxisLabel::new().color(COLOR_TEXT).font_size(18))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().width(0.5).color(COLOR_GRID)),
                ),
        )
        .series(
            Line::new()
                .name("Amplitude")
                .data(data.points.clone())
                .symbol(Symbol::None)
                .line_style(LineStyle::new().width(1).color(TRACE_LINE))
                .area_style(AreaStyle::new().color(TRACE_FILL).opacity(0.3)),
        );

    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, &chart, output_path)
        .map_err(|e| ChartError(e.to_string()))?;

    Ok(())
}
