/// 0-based ordinal of an actual video frame.
///
/// Ordinals count real images only: the track timeline additionally reserves
/// two leading slots (a static alignment marker and a blank spacer) that are
/// accounted for by the coordinate mapper, not by this type.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct FrameIndex(pub u64);

impl std::fmt::Display for FrameIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}
