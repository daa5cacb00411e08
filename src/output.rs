use std::path::Path;

use colored::*;

pub(crate) fn print_error(msg: &str) {
    eprintln!("{}: {}", "error".red().bold(), msg);
}

pub(crate) fn print_warning(msg: &str) {
    eprintln!("{}: {}", "warning".yellow().bold(), msg);
}

/// One stderr line per failed file
pub(crate) fn print_file_error(display_name: &str, err: &dyn std::error::Error) {
    print_error(&format!("failed to process {}: {}", display_name, err));
}

pub(crate) fn get_display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub(crate) fn print_done(output_path: &Path) {
    println!();
    println!(
        "{} Results saved to: {}",
        "Done.".green().bold(),
        output_path.display()
    );
}

/// Final batch line: total files seen and how many succeeded
pub(crate) fn print_summary(total: usize, succeeded: usize) {
    let failed = total - succeeded;
    let failed_text = format!("{} failed", failed);
    println!(
        "Processed {} MP3 file{} ({} ok, {})",
        total,
        if total == 1 { "" } else { "s" },
        succeeded,
        if failed > 0 {
            failed_text.red()
        } else {
            failed_text.normal()
        }
    );
}
