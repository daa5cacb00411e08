//! Amplitude-trace batch

use std::path::Path;

use crate::analysis::{
    MAX_CHART_POINTS, TRACE_DURATION_SECS, TRACE_START_SECS, amplitude_trace, decimate,
};
use crate::audio::load_audio;
use crate::chart::{self, TraceChartData};
use crate::error::{BatchError, TraceError};
use crate::output::{get_display_name, print_done, print_error, print_file_error, print_summary};
use crate::report::{TRACE_SUMMARY_NAME, TraceRecord, TraceSummary, trace_image_path};

use super::list_mp3_files;

/// Plot the 3-4 s amplitude trace of one file into `output_dir`
pub(crate) fn plot_file(path: &Path, output_dir: &Path) -> Result<TraceRecord, TraceError> {
    let display_name = get_display_name(path);

    let audio = load_audio(path)?;
    let trace = amplitude_trace(&audio, TRACE_START_SECS, TRACE_DURATION_SECS)?;
    let reduced = decimate(&trace, MAX_CHART_POINTS);

    log::debug!(
        "{}: {} samples in window, {} plotted",
        display_name,
        trace.len(),
        reduced.len()
    );

    let image_path = trace_image_path(path, output_dir);
    let chart_data = TraceChartData {
        filename: display_name.clone(),
        points: reduced.points(),
        start_secs: TRACE_START_SECS,
        end_secs: TRACE_START_SECS + TRACE_DURATION_SECS,
    };
    chart::render_trace_chart(&chart_data, &image_path)?;

    Ok(TraceRecord {
        file_name: display_name,
        image_path,
    })
}

/// Run the amplitude-trace batch. Images and the summary go to `output_dir`,
/// or next to the inputs when it is `None`.
pub fn run_trace(folder: &Path, output_dir: Option<&Path>) {
    if let Err(e) = trace_batch(folder, output_dir.unwrap_or(folder)) {
        print_error(&e.to_string());
    }
}

fn trace_batch(folder: &Path, output_dir: &Path) -> Result<(), BatchError> {
    let files = list_mp3_files(folder)?;
    log::info!("Found {} MP3 files in {}", files.len(), folder.display());

    std::fs::create_dir_all(output_dir).map_err(|source| BatchError::Output {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let summary_path = output_dir.join(TRACE_SUMMARY_NAME);
    let output_err = |source| BatchError::Output {
        path: summary_path.clone(),
        source,
    };

    let mut summary = TraceSummary::create(&summary_path).map_err(output_err)?;
    let mut succeeded = 0;

    for path in &files {
        let display_name = get_display_name(path);

        match plot_file(path, output_dir) {
            Ok(record) => {
                summary.record(&record).map_err(output_err)?;
                println!(
                    "Plotted: {} -> {}",
                    display_name,
                    record.image_path.display()
                );
                succeeded += 1;
            }
            Err(e) => print_file_error(&display_name, &e),
        }
    }

    summary.finish().map_err(output_err)?;

    print_done(&summary_path);
    print_summary(files.len(), succeeded);
    Ok(())
}
