//! Error types

use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading or slicing a single audio file
#[derive(Debug, Error)]
pub(crate) enum AudioError {
    #[error("error opening file: {0}")]
    Open(#[from] std::io::Error),

    #[error("unsupported format: {0}")]
    Unsupported(symphonia::core::errors::Error),

    #[error("no audio track found")]
    NoTrack,

    #[error("unknown sample rate")]
    UnknownSampleRate,

    #[error("failed to create decoder: {0}")]
    Decoder(symphonia::core::errors::Error),

    #[error("error reading packet: {0}")]
    Packet(symphonia::core::errors::Error),

    #[error("audio too short: need {needed:.2}s, file has {actual:.2}s")]
    TooShort { needed: f64, actual: f64 },
}

/// Chart rendering failure
#[derive(Debug, Error)]
#[error("failed to save chart: {0}")]
pub(crate) struct ChartError(pub(crate) String);

/// Per-file failure of the amplitude-trace job
#[derive(Debug, Error)]
pub(crate) enum TraceError {
    #[error(transparent)]
    Audio(#[from] AudioError),

    #[error(transparent)]
    Chart(#[from] ChartError),
}

/// Folder-level conditions that end a batch early
#[derive(Debug, Error)]
pub(crate) enum BatchError {
    #[error("folder '{}' does not exist", .0.display())]
    FolderNotFound(PathBuf),

    #[error("'{}' is not a folder", .0.display())]
    NotADirectory(PathBuf),

    #[error("no MP3 files found in folder '{}'", .0.display())]
    NoMp3Files(PathBuf),

    #[error("cannot read folder '{}': {source}", path.display())]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("cannot write '{}': {source}", path.display())]
    Output {
        path: PathBuf,
        source: std::io::Error,
    },
}
