use crate::composite::clip_rect;
use crate::foundation::core::Rgb8;
use crate::foundation::math::mul_div255_floor;
use crate::surface::pixel::{PixelSurface, TRANSPARENT};

/// Glyphs survive blending only from sources covering at least half the cell.
const GLYPH_COVERAGE_MIN: u8 = 128;

/// `(src * alpha + dst * (255 - alpha)) / 255`, rounded down.
pub fn blend_channel(src: u8, dst: u8, alpha: u8) -> u8 {
    let a = u32::from(alpha);
    ((u32::from(src) * a + u32::from(dst) * (255 - a)) / 255) as u8
}

/// Per-channel [`blend_channel`].
pub fn blend_rgb(src: Rgb8, dst: Rgb8, alpha: u8) -> Rgb8 {
    Rgb8::new(
        blend_channel(src.r, dst.r, alpha),
        blend_channel(src.g, dst.g, alpha),
        blend_channel(src.b, dst.b, alpha),
    )
}

/// Coverage left after painting `src_a` over `dst_a`.
pub fn blend_coverage(src_a: u8, dst_a: u8) -> u8 {
    src_a.saturating_add(mul_div255_floor(dst_a, 255 - src_a))
}

/// Alpha-blend `sources` over `dst` in list order, reading opacity as coverage.
pub fn blend<'a>(sources: impl IntoIterator<Item = &'a PixelSurface>, dst: &mut PixelSurface) {
    for src in sources {
        blend_surface(src, dst);
    }
}

/// Alpha-blend one source over `dst`, honoring its `x, y`.
pub fn blend_surface(src: &PixelSurface, dst: &mut PixelSurface) {
    let Some((cols, rows)) = clip_rect(src, (src.x, src.y), dst) else {
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
            let a = s_opacity[si];
            if a == TRANSPARENT {
                continue;
            }
            d_colors[di] = blend_rgb(s_colors[si], d_colors[di], a);
            d_opacity[di] = blend_coverage(a, d_opacity[di]);
            if a >= GLYPH_COVERAGE_MIN && s_glyphs[si].is_some() {
                d_glyphs[di] = s_glyphs[si];
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/composite/blend.rs"]
mod tests;
