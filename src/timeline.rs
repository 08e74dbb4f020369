use crate::foundation::core::FrameIndex;
use crate::foundation::error::{BedframeError, BedframeResult};

/// Half-open `[start, end)` interval assigned to a frame on the shared
/// one-dimensional coordinate axis used for scrolling.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CoordinateWindow {
    /// First coordinate covered by the window.
    pub start: u64,
    /// One past the last coordinate covered by the window.
    pub end: u64,
}

impl CoordinateWindow {
    /// Window length in coordinate units.
    pub fn len(self) -> u64 {
        self.end - self.start
    }

    /// `true` when the window covers no coordinates.
    pub fn is_empty(self) -> bool {
        self.end == self.start
    }
}

/// Constant-velocity scroll geometry for a fixed horizontal resolution.
///
/// Each frame is laid out `scroll_length` coordinates after the previous one,
/// and `scroll_length` is strictly smaller than the frame width, so
/// consecutive windows overlap. That overlap is what turns a sequence of
/// static intervals into continuous scrolling motion on one shared axis.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScrollTimeline {
    hori_res: u32,
    full_length: u64,
    buffer_length: u64,
    scroll_length: u64,
}

impl ScrollTimeline {
    /// Build the scroll geometry for `hori_res` coordinate units per frame.
    ///
    /// All derived lengths use f64 division truncated toward zero. The
    /// truncation is load-bearing: the floored values define the window
    /// positions, so any rounding change shifts the whole layout.
    pub fn new(hori_res: u32) -> BedframeResult<Self> {
        if hori_res == 0 {
            return Err(BedframeError::validation("hori_res must be > 0"));
        }

        // Frame width plus a 5% buffer on each side.
        let full_length = (f64::from(hori_res) / 0.9) as u64;
        let buffer_length = (full_length as f64 * 0.05) as u64;
        let scroll_length = (full_length as f64 * 0.95) as u64;

        if scroll_length == 0 {
            return Err(BedframeError::validation(
                "hori_res is too small to produce a non-zero scroll step",
            ));
        }

        Ok(Self {
            hori_res,
            full_length,
            buffer_length,
            scroll_length,
        })
    }

    /// Configured frame width in coordinate units.
    pub fn hori_res(self) -> u32 {
        self.hori_res
    }

    /// Frame width plus both buffers; also the span of the alignment marker.
    pub fn full_length(self) -> u64 {
        self.full_length
    }

    /// Length of the left (or right) buffer.
    pub fn buffer_length(self) -> u64 {
        self.buffer_length
    }

    /// Per-frame advance of the window start, in coordinate units.
    pub fn scroll_length(self) -> u64 {
        self.scroll_length
    }

    /// Coordinate window for a 0-based actual-image ordinal.
    ///
    /// The `+ 2` skips the two reserved leading timeline slots (alignment
    /// marker and blank spacer); the window is widened by one coordinate of
    /// padding on each side.
    pub fn window(self, frame: FrameIndex) -> CoordinateWindow {
        let start = self.scroll_length * (frame.0 + 2) + self.buffer_length - 1;
        CoordinateWindow {
            start,
            end: start + u64::from(self.hori_res) + 2,
        }
    }

    /// Window of the static alignment marker occupying timeline slot 0.
    pub fn alignment_window(self) -> CoordinateWindow {
        CoordinateWindow {
            start: 0,
            end: self.full_length,
        }
    }
}
