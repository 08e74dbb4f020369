use anyhow::Context;

use crate::foundation::error::{BedframeError, BedframeResult};
use crate::prepare::grid::PixelGrid;

/// Frame preparation parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PrepareOpts {
    /// Target horizontal resolution every frame is rescaled to.
    pub hori_res: u32,
    /// Number of consecutive pixel rows collapsed into one averaged row.
    pub merge_rows: u32,
    /// Foreground cutoff as a fraction of full brightness: a cell is
    /// foreground (dark) when `mean / 255 <= threshold`.
    pub threshold: f32,
}

impl PrepareOpts {
    /// Options for `hori_res` with the default row merge (9) and cutoff (0.5).
    pub fn new(hori_res: u32) -> Self {
        Self {
            hori_res,
            merge_rows: 9,
            threshold: 0.5,
        }
    }
}

/// Decode one encoded frame image and binarize it into a [`PixelGrid`].
///
/// The image is converted to 8-bit grayscale, rescaled to
/// `hori_res x (hori_res * height / width)` with bilinear filtering, collapsed
/// row-group by row-group into per-column means, and thresholded. A trailing
/// row group shorter than `merge_rows` is averaged over the rows it has.
pub fn prepare_frame(bytes: &[u8], opts: &PrepareOpts) -> BedframeResult<PixelGrid> {
    if opts.hori_res == 0 {
        return Err(BedframeError::validation("hori_res must be > 0"));
    }
    if opts.merge_rows == 0 {
        return Err(BedframeError::validation("merge_rows must be > 0"));
    }

    let luma = image::load_from_memory(bytes)
        .context("decode frame image")?
        .to_luma8();
    let (w, h) = luma.dimensions();
    if w == 0 || h == 0 {
        return Err(BedframeError::prepare("frame image has a zero dimension"));
    }

    let target_h = ((u64::from(opts.hori_res) * u64::from(h)) / u64::from(w)).max(1) as u32;
    let resized = image::imageops::resize(
        &luma,
        opts.hori_res,
        target_h,
        image::imageops::FilterType::Triangle,
    );

    binarize(&resized, opts.merge_rows, opts.threshold)
}

/// Collapse row groups into per-column means and threshold them.
fn binarize(img: &image::GrayImage, merge_rows: u32, threshold: f32) -> BedframeResult<PixelGrid> {
    let width = img.width() as usize;
    let raw = img.as_raw();

    let bands = (img.height() as usize).div_ceil(merge_rows as usize);
    let mut data = Vec::with_capacity(bands * width);
    for band in raw.chunks(width * merge_rows as usize) {
        let rows = band.len() / width;
        for col in 0..width {
            let sum: u32 = (0..rows).map(|r| u32::from(band[r * width + col])).sum();
            let mean = f64::from(sum) / rows as f64;
            data.push(mean / 255.0 <= f64::from(threshold));
        }
    }

    PixelGrid::new(img.width(), data)
}

#[cfg(test)]
#[path = "../../tests/unit/prepare/decode.rs"]
mod tests;
