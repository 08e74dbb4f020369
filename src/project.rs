use std::path::{Path, PathBuf};

use anyhow::Context;

use crate::encode::record::TrackProfile;
use crate::foundation::error::{BedframeError, BedframeResult};
use crate::prepare::decode::PrepareOpts;

/// A complete encode job description.
///
/// A project is a pure data model loaded from JSON; encoding it is performed
/// by [`crate::EncodeSession`].
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Project {
    /// Directory holding the frame image sequence.
    pub frames_dir: PathBuf,
    /// Target horizontal resolution in coordinate units; a positive
    /// multiple of 9 so the derived scroll geometry stays exact.
    pub hori_res: u32,
    /// Number of consecutive pixel rows collapsed into one track row.
    #[serde(default = "default_merge_rows")]
    pub merge_rows: u32,
    /// Foreground cutoff as a fraction of full brightness.
    #[serde(default = "default_threshold")]
    pub threshold: f32,
    /// Output constants shared by every record.
    #[serde(default)]
    pub track: TrackProfile,
}

fn default_merge_rows() -> u32 {
    9
}

fn default_threshold() -> f32 {
    0.5
}

impl Project {
    /// Load and parse a project JSON file. Call [`Project::validate`] before
    /// encoding.
    pub fn from_path(path: impl AsRef<Path>) -> BedframeResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read project file '{}'", path.display()))?;
        let project: Self = serde_json::from_str(&text)
            .with_context(|| format!("parse project file '{}'", path.display()))?;
        Ok(project)
    }

    /// Validate field-level constraints.
    pub fn validate(&self) -> BedframeResult<()> {
        if self.hori_res == 0 || !self.hori_res.is_multiple_of(9) {
            return Err(BedframeError::validation(
                "hori_res must be a positive multiple of 9",
            ));
        }
        if self.merge_rows == 0 {
            return Err(BedframeError::validation("merge_rows must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(BedframeError::validation(
                "threshold must be within [0, 1]",
            ));
        }
        Ok(())
    }

    /// Frame preparation parameters derived from this project.
    pub fn prepare_opts(&self) -> PrepareOpts {
        PrepareOpts {
            hori_res: self.hori_res,
            merge_rows: self.merge_rows,
            threshold: self.threshold,
        }
    }
}
