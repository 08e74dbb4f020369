//! Per-frame record assembly: one record per grid row, bottom row first.

use crate::encode::blocks::encode_row;
use crate::encode::record::{Block, Record, TrackProfile};
use crate::foundation::core::FrameIndex;
use crate::prepare::grid::PixelGrid;
use crate::timeline::ScrollTimeline;

/// Assemble the records for one frame.
///
/// Every record shares the frame's coordinate window; rows are emitted in
/// reverse so the visually top row of the image is pushed last and draws
/// above the others in stacked track renderers.
pub fn frame_records(
    profile: &TrackProfile,
    timeline: ScrollTimeline,
    frame: FrameIndex,
    grid: &PixelGrid,
) -> Vec<Record> {
    let window = timeline.window(frame);
    grid.rows()
        .rev()
        .map(|row| Record::new(profile, window, encode_row(row, timeline.hori_res())))
        .collect()
}

/// The single static alignment record spanning `[0, full_length)`.
///
/// Emitted once before any frame's rows; it occupies reserved timeline slot 0
/// and gives the viewer a fixed visual reference unaffected by scrolling.
pub fn alignment_record(profile: &TrackProfile, timeline: ScrollTimeline) -> Record {
    let window = timeline.alignment_window();
    let blocks = vec![Block {
        start: 0,
        size: window.len(),
    }];
    Record::new(profile, window, blocks)
}
