//! CSV export of per-generation statistics.
//!
//! [`CsvStatsWriter`] is an external collaborator of the engine: it consumes
//! the statistics records the run emits and never touches evolutionary
//! state. Wire it into the engine's per-generation callback to stream rows
//! to a file or any other writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::evolution::GenerationStats;

/// Writes generation statistics as CSV: a header followed by one row per
/// record.
#[derive(Debug)]
pub struct CsvStatsWriter<W: Write> {
    out: W,
    header_written: bool,
}

impl CsvStatsWriter<BufWriter<File>> {
    /// Creates a writer appending to a freshly created file at `path`.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> CsvStatsWriter<W> {
    /// Wraps any writer.
    pub fn new(out: W) -> Self {
        Self {
            out,
            header_written: false,
        }
    }

    /// Writes one record, emitting the header first if needed.
    pub fn write_record(&mut self, stats: &GenerationStats) -> Result<()> {
        if !self.header_written {
            writeln!(self.out, "generation,min,max,mean,std_dev")?;
            self.header_written = true;
        }
        writeln!(
            self.out,
            "{},{},{},{},{}",
            stats.generation, stats.min, stats.max, stats.mean, stats.std_dev
        )?;
        Ok(())
    }

    /// Flushes the underlying writer.
    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    /// Returns the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}
