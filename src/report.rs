//! Summary files written once per batch

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Summary file name for the amplitude-trace batch
pub(crate) const TRACE_SUMMARY_NAME: &str = "音频分析结果.txt";

/// Result file name for the weighted-frequency batch
pub(crate) const FREQUENCY_REPORT_NAME: &str = "音频频率分析结果.txt";

/// Suffix appended to the input file stem for trace images
pub(crate) const TRACE_IMAGE_SUFFIX: &str = "_3-4秒幅值随时间变化图.png";

/// Output image path for `input` inside `output_dir`
pub(crate) fn trace_image_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy())
        .unwrap_or_default();
    output_dir.join(format!("{}{}", stem, TRACE_IMAGE_SUFFIX))
}

/// One successfully plotted file
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct TraceRecord {
    pub(crate) file_name: String,
    pub(crate) image_path: PathBuf,
}

/// Writer for the plain-text trace summary
pub(crate) struct TraceSummary<W: Write> {
    writer: W,
}

impl TraceSummary<BufWriter<File>> {
    pub(crate) fn create(path: &Path) -> io::Result<Self> {
        Self::new(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> TraceSummary<W> {
    pub(crate) fn new(mut writer: W) -> io::Result<Self> {
        writeln!(writer, "音频文件分析结果")?;
        writeln!(writer, "{}", "=".repeat(50))?;
        writeln!(writer)?;
        Ok(Self { writer })
    }

    pub(crate) fn record(&mut self, record: &TraceRecord) -> io::Result<()> {
        let image_name = record
            .image_path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_default();
        writeln!(self.writer, "文件: {}", record.file_name)?;
        writeln!(self.writer, "图像路径: {}", image_name)?;
        writeln!(self.writer, "{}", "-".repeat(50))
    }

    pub(crate) fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}

/// Writer for the tab-separated weighted-frequency table
pub(crate) struct FrequencyReport<W: Write> {
    writer: W,
}

impl FrequencyReport<BufWriter<File>> {
    pub(crate) fn create(path: &Path) -> io::Result<Self> {
        Self::new(BufWriter::new(File::create(path)?))
    }
}

impl<W: Write> FrequencyReport<W> {
    pub(crate) fn new(mut writer: W) -> io::Result<Self> {
        writeln!(writer, "音频文件名称\t加权平均频率(Hz)")?;
        writeln!(writer, "{}", "-".repeat(40))?;
        Ok(Self { writer })
    }

    pub(crate) fn row(&mut self, file_name: &str, mean_hz: f64) -> io::Result<()> {
        writeln!(self.writer, "{}\t{:.2}", file_name, mean_hz)
    }

    pub(crate) fn finish(mut self) -> io::Result<W> {
        self.writer.flush()?;
        Ok(self.writer)
    }
}
