use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::pipeline::StatsLabel;

/// One stats line: `n:<frame> <label>:<score>` with the score at 2 decimals.
pub fn format_stats_line(frame_index: usize, score: f64, label: StatsLabel) -> String {
    format!("n:{frame_index} {label}:{score:.2}")
}

/// Writes per-frame stats lines to a file or stdout.
pub struct StatsWriter {
    writer: Box<dyn Write + Send>,
    label: StatsLabel,
    lines_written: usize,
}

impl StatsWriter {
    /// Open `path` for writing; `-` selects stdout.
    pub fn create(path: &Path, label: StatsLabel) -> Result<Self> {
        let writer: Box<dyn Write + Send> = if path.as_os_str() == "-" {
            Box::new(io::stdout())
        } else {
            Box::new(BufWriter::new(File::create(path)?))
        };
        Ok(Self::new(writer, label))
    }

    pub fn new(writer: Box<dyn Write + Send>, label: StatsLabel) -> Self {
        if label == StatsLabel::Vif {
            info!("Stats lines carry the legacy 'vif' label; the value is the ADM score");
        }
        Self {
            writer,
            label,
            lines_written: 0,
        }
    }

    pub fn write_frame(&mut self, frame_index: usize, score: f64) -> Result<()> {
        writeln!(self.writer, "{}", format_stats_line(frame_index, score, self.label))?;
        self.lines_written += 1;
        Ok(())
    }

    pub fn lines_written(&self) -> usize {
        self.lines_written
    }

    /// Flush and close.
    pub fn finalize(mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}
