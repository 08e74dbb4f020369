use crate::encode::record::{Record, TrackProfile};

use crate::foundation::error::BedframeResult;

/// Configuration provided to a [`RecordSink`] at the start of an emission.
#[derive(Debug, Clone)]
pub struct SinkConfig {
    /// Output constants shared by every record.
    pub track: TrackProfile,
    /// Configured horizontal resolution in coordinate units.
    pub hori_res: u32,
    /// Number of frames that will be emitted after the alignment record.
    pub frames_total: u64,
}

/// Sink contract for consuming track records in emission order.
///
/// Ordering contract: `push_record` is called in final output order — the
/// alignment record first, then each frame's records with frame ordinals
/// ascending and rows bottom-to-top within a frame.
pub trait RecordSink: Send {
    /// Called once before any records are pushed.
    fn begin(&mut self, cfg: SinkConfig) -> BedframeResult<()>;
    /// Push one record in emission order.
    fn push_record(&mut self, record: &Record) -> BedframeResult<()>;
    /// Called once after the last record is pushed.
    fn end(&mut self) -> BedframeResult<()>;
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    cfg: Option<SinkConfig>,
    records: Vec<Record>,
}

impl InMemorySink {
    /// Create a new in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the configuration captured in `begin`, if any.
    pub fn config(&self) -> Option<SinkConfig> {
        self.cfg.clone()
    }

    /// Borrow the captured records.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Serialize the captured records, one line per record.
    pub fn lines(&self) -> Vec<String> {
        self.records.iter().map(|r| r.to_string()).collect()
    }
}

impl RecordSink for InMemorySink {
    fn begin(&mut self, cfg: SinkConfig) -> BedframeResult<()> {
        self.cfg = Some(cfg);
        self.records.clear();
        Ok(())
    }

    fn push_record(&mut self, record: &Record) -> BedframeResult<()> {
        self.records.push(record.clone());
        Ok(())
    }

    fn end(&mut self) -> BedframeResult<()> {
        Ok(())
    }
}
