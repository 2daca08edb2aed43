//! Stateless compositors that paint source surfaces onto a destination.
//!
//! Every family walks its sources strictly in the order given; the order decides who wins
//! an overlapping cell:
//!
//! - [`merge::render`]: occupancy-respecting, first source wins (submit nearest first).
//! - [`merge::render_over`]: unconditional overwrite, last source wins (submit farthest first).
//! - [`blend::blend`]: "over" alpha blending using opacity as coverage (submit farthest first).

pub mod blend;
pub mod merge;

use crate::surface::pixel::PixelSurface;

/// Which compositor a caller (typically a [`crate::render::pipeline::Pipeline`]) uses.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum MergePolicy {
    /// First writer wins; opacity read as a boolean.
    #[default]
    Occupancy,
    /// Last writer wins; opacity read as a boolean.
    Overwrite,
    /// Alpha "over" blending; opacity read as coverage.
    Blend,
}

impl MergePolicy {
    /// `true` when the first source in the list ends up on top.
    pub fn first_wins(self) -> bool {
        matches!(self, Self::Occupancy)
    }
}

/// Composite `sources` onto `dst` with the given policy, in list order.
pub fn composite<'a>(
    policy: MergePolicy,
    sources: impl IntoIterator<Item = &'a PixelSurface>,
    dst: &mut PixelSurface,
) {
    match policy {
        MergePolicy::Occupancy => merge::render(sources, dst),
        MergePolicy::Overwrite => merge::render_over(sources, dst),
        MergePolicy::Blend => blend::blend(sources, dst),
    }
}

/// Overlap of one axis of a translated source with the destination.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ClipSpan {
    pub(crate) src_start: usize,
    pub(crate) dst_start: usize,
    pub(crate) len: usize,
}

/// Clamp the start and the end of a source run of `src_len` cells at `offset` against a
/// destination of `dst_len` cells. `None` when nothing is visible.
pub(crate) fn clip_axis(offset: i32, src_len: u32, dst_len: u32) -> Option<ClipSpan> {
    let offset = i64::from(offset);
    let start = offset.max(0);
    let end = (offset + i64::from(src_len)).min(i64::from(dst_len));
    if start >= end {
        return None;
    }
    Some(ClipSpan {
        src_start: (start - offset) as usize,
        dst_start: start as usize,
        len: (end - start) as usize,
    })
}

/// Visible column and row spans of `src` placed at `offset` over `dst`.
pub(crate) fn clip_rect(
    src: &PixelSurface,
    offset: (i32, i32),
    dst: &PixelSurface,
) -> Option<(ClipSpan, ClipSpan)> {
    let cols = clip_axis(offset.0, src.width(), dst.width())?;
    let rows = clip_axis(offset.1, src.height(), dst.height())?;
    Some((cols, rows))
}

#[cfg(test)]
#[path = "../../tests/unit/composite/clip.rs"]
mod tests;
