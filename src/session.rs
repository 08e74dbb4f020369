use std::path::Path;

use anyhow::Context;
use rayon::prelude::*;

use crate::assemble::{alignment_record, frame_records};
use crate::encode::record::{Record, TrackProfile};
use crate::encode::sink::{RecordSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::{BedframeError, BedframeResult};
use crate::prepare::decode::{PrepareOpts, prepare_frame};
use crate::prepare::grid::PixelGrid;
use crate::prepare::sequence::ImageSequence;
use crate::project::Project;
use crate::timeline::ScrollTimeline;

/// Options controlling `EncodeSession` sequence encoding behavior.
#[derive(Clone, Debug)]
pub struct EncodeSessionOpts {
    /// Enable frame-level parallelism (rayon) for frame preparation.
    pub parallel: bool,
    /// Number of frames prepared per batch in parallel mode.
    pub chunk_size: usize,
    /// Override the number of rayon worker threads. `None` uses rayon defaults.
    pub threads: Option<usize>,
}

impl Default for EncodeSessionOpts {
    fn default() -> Self {
        Self {
            parallel: false,
            chunk_size: 64,
            threads: None,
        }
    }
}

/// Sequence encode statistics.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EncodeStats {
    /// Frames encoded.
    pub frames_total: u64,
    /// Records pushed into the sink, alignment record included.
    pub records_emitted: u64,
}

/// Session-oriented encoder for a validated [`Project`].
///
/// A session front-loads geometry computation, then provides per-frame
/// encoding and ordered streaming of a whole image sequence into a sink.
pub struct EncodeSession {
    profile: TrackProfile,
    timeline: ScrollTimeline,
    prepare: PrepareOpts,
    opts: EncodeSessionOpts,
}

impl EncodeSession {
    /// Construct a session from a project.
    pub fn new(project: &Project, opts: EncodeSessionOpts) -> BedframeResult<Self> {
        project.validate()?;
        let timeline = ScrollTimeline::new(project.hori_res)?;
        Ok(Self {
            profile: project.track.clone(),
            timeline,
            prepare: project.prepare_opts(),
            opts,
        })
    }

    /// The session's scroll geometry.
    pub fn timeline(&self) -> ScrollTimeline {
        self.timeline
    }

    /// The session's output constants.
    pub fn profile(&self) -> &TrackProfile {
        &self.profile
    }

    /// Assemble the records for one already-prepared frame grid.
    pub fn encode_frame(&self, frame: FrameIndex, grid: &PixelGrid) -> Vec<Record> {
        frame_records(&self.profile, self.timeline, frame, grid)
    }

    /// Prepare one encoded frame image and assemble its records.
    #[tracing::instrument(skip_all, fields(frame = frame.0))]
    pub fn encode_frame_bytes(
        &self,
        frame: FrameIndex,
        bytes: &[u8],
    ) -> BedframeResult<Vec<Record>> {
        let grid = prepare_frame(bytes, &self.prepare)?;
        Ok(self.encode_frame(frame, &grid))
    }

    /// Encode a whole image sequence into `sink`.
    ///
    /// The sink receives records in final output order: the alignment record,
    /// then each frame's rows bottom-to-top with frame ordinals ascending.
    /// In parallel mode frames are prepared in batches, and each batch's
    /// results are collected in ordinal order before emission, so the output
    /// is byte-identical to the sequential path.
    #[tracing::instrument(skip_all, fields(frames = seq.len()))]
    pub fn encode_sequence(
        &self,
        seq: &ImageSequence,
        sink: &mut dyn RecordSink,
    ) -> BedframeResult<EncodeStats> {
        sink.begin(SinkConfig {
            track: self.profile.clone(),
            hori_res: self.timeline.hori_res(),
            frames_total: seq.len() as u64,
        })?;

        let mut stats = EncodeStats {
            frames_total: seq.len() as u64,
            records_emitted: 0,
        };

        let alignment = alignment_record(&self.profile, self.timeline);
        sink.push_record(&alignment)?;
        stats.records_emitted += 1;

        if self.opts.parallel {
            self.encode_frames_parallel(seq, sink, &mut stats)?;
        } else {
            for (i, path) in seq.paths().iter().enumerate() {
                let records = self.encode_path(FrameIndex(i as u64), path)?;
                for record in &records {
                    sink.push_record(record)?;
                }
                stats.records_emitted += records.len() as u64;
            }
        }

        sink.end()?;
        Ok(stats)
    }

    fn encode_frames_parallel(
        &self,
        seq: &ImageSequence,
        sink: &mut dyn RecordSink,
        stats: &mut EncodeStats,
    ) -> BedframeResult<()> {
        let pool = match self.opts.threads {
            Some(threads) => Some(
                rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| {
                        BedframeError::encode(format!("failed to build worker pool: {e}"))
                    })?,
            ),
            None => None,
        };

        let chunk_size = self.opts.chunk_size.max(1);
        for (chunk_idx, chunk) in seq.paths().chunks(chunk_size).enumerate() {
            let base = (chunk_idx * chunk_size) as u64;
            let job = || {
                chunk
                    .par_iter()
                    .enumerate()
                    .map(|(i, path)| self.encode_path(FrameIndex(base + i as u64), path))
                    .collect::<BedframeResult<Vec<_>>>()
            };
            let encoded = match pool.as_ref() {
                Some(pool) => pool.install(job),
                None => job(),
            }?;

            for records in &encoded {
                for record in records {
                    sink.push_record(record)?;
                }
                stats.records_emitted += records.len() as u64;
            }
        }
        Ok(())
    }

    fn encode_path(&self, frame: FrameIndex, path: &Path) -> BedframeResult<Vec<Record>> {
        let bytes = std::fs::read(path)
            .with_context(|| format!("read frame image '{}'", path.display()))?;
        self.encode_frame_bytes(frame, &bytes)
    }
}
