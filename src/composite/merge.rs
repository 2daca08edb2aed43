//! Occupancy and overwrite merges.
//!
//! A claimed cell is marked with full opacity (`OPAQUE`, 255) rather than a bare `1`. Any
//! nonzero opacity still reads as occupied, and merged surfaces stay valid blend input.

use crate::composite::clip_rect;
use crate::foundation::error::{CellfxError, CellfxResult};
use crate::surface::pixel::{OPAQUE, PixelSurface, TRANSPARENT};

/// Occupancy-respecting merge of `sources` onto `dst`, honoring each source's `x, y`.
///
/// A destination cell that is already occupied is never written again, so the first
/// source in the list to claim a cell wins. Pass sources nearest first.
pub fn render<'a>(sources: impl IntoIterator<Item = &'a PixelSurface>, dst: &mut PixelSurface) {
    for src in sources {
        merge_surface(src, dst, (src.x, src.y), false);
    }
}

/// Single-source form of [`render`].
pub fn render_surface(src: &PixelSurface, dst: &mut PixelSurface) {
    merge_surface(src, dst, (src.x, src.y), false);
}

/// Unconditional merge: every occupied source cell overwrites the destination, so the last
/// source in the list wins. Pass sources farthest first.
pub fn render_over<'a>(
    sources: impl IntoIterator<Item = &'a PixelSurface>,
    dst: &mut PixelSurface,
) {
    for src in sources {
        merge_surface(src, dst, (src.x, src.y), true);
    }
}

/// Single-source form of [`render_over`].
pub fn render_surface_over(src: &PixelSurface, dst: &mut PixelSurface) {
    merge_surface(src, dst, (src.x, src.y), true);
}

/// Occupancy merge for stacks of layers sharing the destination's exact size
/// (background, border, title...). Source positions are ignored.
pub fn render_composite<'a>(
    sources: impl IntoIterator<Item = &'a PixelSurface>,
    dst: &mut PixelSurface,
) -> CellfxResult<()> {
    for src in sources {
        if src.size() != dst.size() {
            return Err(CellfxError::size_mismatch(format!(
                "render_composite expects {}x{} layers, got {}x{}",
                dst.width(),
                dst.height(),
                src.width(),
                src.height()
            )));
        }
        merge_surface(src, dst, (0, 0), false);
    }
    Ok(())
}

fn merge_surface(src: &PixelSurface, dst: &mut PixelSurface, offset: (i32, i32), overwrite: bool) {
    let Some((cols, rows)) = clip_rect(src, offset, dst) else {
        return;
    };
    let sw = src.width() as usize;
    let dw = dst.width() as usize;
    let (s_colors, s_opacity, s_glyphs) = (src.colors(), src.opacities(), src.glyphs());
    let (d_colors, d_opacity, d_glyphs) = dst.maps_mut();

    for r in 0..rows.len {
        let s_base = (rows.src_start + r) * sw + cols.src_start;
        let d_base = (rows.dst_start + r) * dw + cols.dst_start;
        for c in 0..cols.len {
            let si = s_base + c;
            let di = d_base + c;
            if s_opacity[si] == TRANSPARENT {
                continue;
            }
            if !overwrite && d_opacity[di] != TRANSPARENT {
                continue;
            }
            d_colors[di] = s_colors[si];
            d_glyphs[di] = s_glyphs[si];
            d_opacity[di] = OPAQUE;
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/merge.rs"]
mod tests;
