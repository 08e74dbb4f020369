use std::io::Write;
use std::path::Path;

use anyhow::Context;

use crate::encode::record::Record;
use crate::encode::sink::{RecordSink, SinkConfig};
use crate::foundation::error::{BedframeError, BedframeResult};

/// Sink that serializes records as text lines into any writer.
///
/// One record per line, flushed once in `end`. This streams the track out as
/// it is produced instead of accumulating one unbounded output string.
pub struct BedSink<W: Write> {
    writer: W,
    started: bool,
}

impl BedSink<std::io::BufWriter<std::fs::File>> {
    /// Create a buffered file sink at `path`, creating parent directories.
    pub fn create(path: impl AsRef<Path>) -> BedframeResult<Self> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        let file = std::fs::File::create(path)
            .with_context(|| format!("create track output '{}'", path.display()))?;
        Ok(Self::new(std::io::BufWriter::new(file)))
    }
}

impl<W: Write> BedSink<W> {
    /// Wrap an existing writer.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            started: false,
        }
    }

    /// Unwrap the inner writer (for in-memory buffers in tests).
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write + Send> RecordSink for BedSink<W> {
    fn begin(&mut self, _cfg: SinkConfig) -> BedframeResult<()> {
        self.started = true;
        Ok(())
    }

    fn push_record(&mut self, record: &Record) -> BedframeResult<()> {
        if !self.started {
            return Err(BedframeError::encode("bed sink not started"));
        }
        writeln!(self.writer, "{record}").context("write track record")?;
        Ok(())
    }

    fn end(&mut self) -> BedframeResult<()> {
        if !self.started {
            return Err(BedframeError::encode("bed sink not started"));
        }
        self.writer.flush().context("flush track output")?;
        self.started = false;
        Ok(())
    }
}

/// Ensure the parent directory of `path` exists.
pub fn ensure_parent_dir(path: &Path) -> BedframeResult<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create output directory '{}'", parent.display()))?;
    }
    Ok(())
}
