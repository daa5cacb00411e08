mod analysis;
mod audio;
mod chart;
mod error;
mod mode;
mod output;
mod report;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use mode::{DEFAULT_CENTROID_FOLDER, run_centroid, run_trace};
use output::print_error;

#[derive(Parser)]
#[command(
    name = "mp3scope",
    version,
    about = "Batch MP3 analyzer: 3-4 s amplitude traces and weighted average frequency",
    after_help = "Examples:
  mp3scope trace ./clips                       Plot 3-4 s amplitude of every MP3 in ./clips
  mp3scope trace ./clips --out-dir ./plots     Write images and summary to ./plots
  mp3scope centroid ./clips                    Weighted average frequency table
  mp3scope centroid ./clips --floor-db 80      Ignore bins 80 dB below the file's peak
  mp3scope -v centroid                         Scan ./素材/视频素材 with info logging"
)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// Plot amplitude vs. time for the 3-4 s window of each MP3
    Trace {
        /// Folder containing MP3 files (not searched recursively)
        folder: PathBuf,

        /// Folder for images and the summary file (default: input folder)
        #[arg(short, long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Compute the magnitude-weighted average frequency of each MP3
    Centroid {
        /// Folder containing MP3 files (not searched recursively)
        #[arg(default_value = DEFAULT_CENTROID_FOLDER)]
        folder: PathBuf,

        /// Treat spectrum bins this many dB below the file's loudest bin as silent
        #[arg(long, value_name = "DB")]
        floor_db: Option<f64>,
    },
}

/// Default log filter: `-v` raises only this crate, dependencies stay at `warn`
fn log_filter(verbose: u8) -> String {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    format!("warn,{}={}", env!("CARGO_PKG_NAME"), level)
}

fn init_logger(verbose: u8) {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_filter(verbose)))
        .format_timestamp_millis()
        .init();
}

fn main() {
    let args = Args::parse();

    // Handle --no-color
    if args.no_color {
        colored::control::set_override(false);
    }

    init_logger(args.verbose);

    match args.command {
        Command::Trace { folder, out_dir } => {
            run_trace(&folder, out_dir.as_deref());
        }
        Command::Centroid { folder, floor_db } => {
            if let Some(db) = floor_db
                && !(db.is_finite() && db > 0.0)
            {
                print_error("--floor-db must be a positive number of decibels");
                return;
            }
            run_centroid(&folder, floor_db);
        }
    }
}
