use crate::timeline::CoordinateWindow;

/// Named output constants shared by every emitted record.
///
/// `chr22` is an arbitrary placeholder coordinate space chosen only because
/// it is long enough to hold the full scroll, not a statement about biology.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct TrackProfile {
    /// Chromosome label every record is placed on.
    #[serde(default = "default_chrom")]
    pub chrom: String,
    /// Record name column.
    #[serde(default = "default_name")]
    pub name: String,
    /// Record score column.
    #[serde(default = "default_score")]
    pub score: u16,
    /// Record strand column.
    #[serde(default = "default_strand")]
    pub strand: String,
    /// Record itemRgb column.
    #[serde(default = "default_item_rgb")]
    pub item_rgb: String,
}

fn default_chrom() -> String {
    "chr22".to_owned()
}

fn default_name() -> String {
    "bad_apple".to_owned()
}

fn default_score() -> u16 {
    1000
}

fn default_strand() -> String {
    ".".to_owned()
}

fn default_item_rgb() -> String {
    "0".to_owned()
}

impl Default for TrackProfile {
    fn default() -> Self {
        Self {
            chrom: default_chrom(),
            name: default_name(),
            score: default_score(),
            strand: default_strand(),
            item_rgb: default_item_rgb(),
        }
    }
}

/// Contiguous run of foreground cells within one row, in the padded row
/// coordinate space (offset 0 is the left padding cell).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Block {
    /// Offset of the run relative to the record start.
    pub start: u64,
    /// Run length; at least 1.
    pub size: u64,
}

/// One line of the output track: one pixel row of one frame as a
/// block-structured interval.
///
/// Records are derived, never mutated, and immediately serialized; none
/// persists beyond its emission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Record {
    /// Chromosome label.
    pub chrom: String,
    /// Interval start (inclusive).
    pub chrom_start: u64,
    /// Interval end (exclusive).
    pub chrom_end: u64,
    /// Record name.
    pub name: String,
    /// Record score.
    pub score: u16,
    /// Record strand.
    pub strand: String,
    /// Thick-drawing start; equals `chrom_start` here.
    pub thick_start: u64,
    /// Thick-drawing end; equals `chrom_end` here.
    pub thick_end: u64,
    /// itemRgb placeholder column.
    pub item_rgb: String,
    /// Ordered block list; starts strictly increasing, ranges disjoint.
    pub blocks: Vec<Block>,
}

impl Record {
    /// Build a record covering `window` with the given block list.
    pub fn new(profile: &TrackProfile, window: CoordinateWindow, blocks: Vec<Block>) -> Self {
        Self {
            chrom: profile.chrom.clone(),
            chrom_start: window.start,
            chrom_end: window.end,
            name: profile.name.clone(),
            score: profile.score,
            strand: profile.strand.clone(),
            thick_start: window.start,
            thick_end: window.end,
            item_rgb: profile.item_rgb.clone(),
            blocks,
        }
    }

    /// Number of blocks in the record.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

impl std::fmt::Display for Record {
    /// One space-delimited track line:
    /// `chrom chromStart chromEnd name score strand thickStart thickEnd
    /// itemRgb blockCount blockSizes blockStarts`.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sizes = join_commas(self.blocks.iter().map(|b| b.size));
        let starts = join_commas(self.blocks.iter().map(|b| b.start));
        write!(
            f,
            "{} {} {} {} {} {} {} {} {} {} {} {}",
            self.chrom,
            self.chrom_start,
            self.chrom_end,
            self.name,
            self.score,
            self.strand,
            self.thick_start,
            self.thick_end,
            self.item_rgb,
            self.block_count(),
            sizes,
            starts,
        )
    }
}

fn join_commas(values: impl Iterator<Item = u64>) -> String {
    let mut out = String::new();
    for (i, v) in values.enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&v.to_string());
    }
    out
}
