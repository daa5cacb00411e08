//! Weighted-average-frequency batch

use std::path::Path;

use crate::analysis::{FFT_SIZE, HOP_SIZE, WeightedFrequency, weighted_average_frequency};
use crate::audio::load_audio;
use crate::error::{AudioError, BatchError};
use crate::output::{
    get_display_name, print_done, print_error, print_file_error, print_summary, print_warning,
};
use crate::report::{FREQUENCY_REPORT_NAME, FrequencyReport};

use super::list_mp3_files;

/// Folder scanned when none is given on the command line
pub const DEFAULT_CENTROID_FOLDER: &str = "./素材/视频素材";

/// Load a file and compute its weighted average frequency
pub(crate) fn analyze_frequency(
    path: &Path,
    floor_db: Option<f64>,
) -> Result<WeightedFrequency, AudioError> {
    let audio = load_audio(path)?;
    let result = weighted_average_frequency(&audio.samples, audio.sample_rate, floor_db);

    log::debug!(
        "{} ({} ch): {} of {} frames weighted (n_fft {}, hop {}, {:.2} Hz/bin)",
        path.display(),
        audio.channels,
        result.frames_used,
        result.frames_total,
        FFT_SIZE,
        HOP_SIZE,
        audio.sample_rate as f64 / FFT_SIZE as f64
    );

    Ok(result)
}

/// Run the weighted-frequency batch over every MP3 in `folder`
pub fn run_centroid(folder: &Path, floor_db: Option<f64>) {
    if let Err(e) = centroid_batch(folder, floor_db) {
        print_error(&e.to_string());
    }
}

fn centroid_batch(folder: &Path, floor_db: Option<f64>) -> Result<(), BatchError> {
    let files = list_mp3_files(folder)?;
    log::info!("Found {} MP3 files in {}", files.len(), folder.display());

    let output_path = folder.join(FREQUENCY_REPORT_NAME);
    let output_err = |source| BatchError::Output {
        path: output_path.clone(),
        source,
    };

    let mut report = FrequencyReport::create(&output_path).map_err(output_err)?;
    let mut succeeded = 0;

    for path in &files {
        let display_name = get_display_name(path);

        match analyze_frequency(path, floor_db) {
            Ok(result) => {
                if result.frames_used == 0 {
                    print_warning(&format!(
                        "{} has no audible frames; weighted frequency is 0",
                        display_name
                    ));
                }
                report
                    .row(&display_name, result.mean_hz)
                    .map_err(output_err)?;
                println!(
                    "Analyzed: {} - average frequency: {:.2} Hz",
                    display_name, result.mean_hz
                );
                succeeded += 1;
            }
            Err(e) => print_file_error(&display_name, &e),
        }
    }

    report.finish().map_err(output_err)?;

    print_done(&output_path);
    print_summary(files.len(), succeeded);
    Ok(())
}

