//! Bedframe turns a binarized video-frame sequence into a genome-browser
//! annotation track.
//!
//! Each frame becomes a stack of BED12-style records whose block lists
//! run-length-encode the frame's pixel rows; frame windows advance along one
//! shared coordinate axis at constant velocity with deliberate overlap, so a
//! coordinate viewer scrolling the axis plays the video.
//!
//! # Pipeline overview
//!
//! 1. **Prepare**: image bytes -> [`PixelGrid`] (grayscale, rescale, row
//!    merge, threshold)
//! 2. **Map**: frame ordinal -> [`CoordinateWindow`] via [`ScrollTimeline`]
//! 3. **Encode**: boolean row -> sentinel-bracketed block list
//!    ([`encode_row`])
//! 4. **Assemble**: grid + window -> per-row [`Record`]s, bottom row first
//! 5. **Emit**: records stream in output order into a [`RecordSink`]
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-default**: mapping and encoding are pure and stable
//!   for a given input; the parallel path reorders at the sink boundary and
//!   produces byte-identical output.
//! - **Floor arithmetic is load-bearing**: scroll geometry is derived with
//!   truncating f64 division, and the truncated values define the coordinate
//!   layout; any rounding change shifts every window.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assemble;
mod encode;
mod foundation;
mod prepare;
mod project;
mod session;
mod timeline;

pub use assemble::{alignment_record, frame_records};
pub use encode::bed::BedSink;
pub use encode::blocks::encode_row;
pub use encode::record::{Block, Record, TrackProfile};
pub use encode::sink::{InMemorySink, RecordSink, SinkConfig};
pub use foundation::core::FrameIndex;
pub use foundation::error::{BedframeError, BedframeResult};
pub use prepare::decode::{PrepareOpts, prepare_frame};
pub use prepare::grid::PixelGrid;
pub use prepare::sequence::ImageSequence;
pub use project::Project;
pub use session::{EncodeSession, EncodeSessionOpts, EncodeStats};
pub use timeline::{CoordinateWindow, ScrollTimeline};
