use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::foundation::core::FrameIndex;
use crate::foundation::error::{BedframeError, BedframeResult};

/// Ordered list of frame image paths discovered on disk.
///
/// Frames are ordered by file name; zero-padded frame numbering sorts
/// lexicographically, so the on-disk naming defines the playback order.
#[derive(Clone, Debug)]
pub struct ImageSequence {
    paths: Vec<PathBuf>,
}

impl ImageSequence {
    /// Collect every image file directly inside `dir`, sorted by file name.
    pub fn from_dir(dir: impl AsRef<Path>) -> BedframeResult<Self> {
        let dir = dir.as_ref();
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("read frame directory '{}'", dir.display()))?;

        let mut paths = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("read frame directory '{}'", dir.display()))?;
            let path = entry.path();
            if path.is_file() && is_image_path(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        if paths.is_empty() {
            return Err(BedframeError::validation(format!(
                "no frame images found in '{}'",
                dir.display()
            )));
        }
        Ok(Self { paths })
    }

    /// Number of frames in the sequence.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// `true` when the sequence holds no frames (unreachable via `from_dir`).
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// All frame paths in playback order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// Path of the frame at `frame`, if within the sequence.
    pub fn get(&self, frame: FrameIndex) -> Option<&PathBuf> {
        self.paths.get(frame.0 as usize)
    }
}

fn is_image_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| image::ImageFormat::from_extension(ext).is_some())
}
