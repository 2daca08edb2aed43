use crate::effects::effect::{RenderEffect, blit_centered};
use crate::foundation::core::{FrameIndex, Rgb8};
use crate::foundation::error::{CellfxError, CellfxResult};
use crate::foundation::math::f32_to_u8;
use crate::surface::pixel::{PixelSurface, alloc_filled};

/// Largest accepted blur radius.
pub const MAX_BLUR_RADIUS: u32 = 64;

/// Separable box blur of color and opacity.
///
/// Taps are clamped to the surface and averaged over the in-bounds count, so uniform
/// regions are unchanged. Colors are weighted by opacity; glyphs pass through.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Blur {
    pub radius: u32,
}

impl Blur {
    pub fn new(radius: u32) -> Self {
        Self { radius }
    }
}

impl RenderEffect for Blur {
    fn name(&self) -> &'static str {
        "blur"
    }

    fn validate(&self, _input: &PixelSurface) -> CellfxResult<()> {
        if self.radius == 0 || self.radius > MAX_BLUR_RADIUS {
            return Err(CellfxError::invalid_blur_radius(format!(
                "blur radius must be in 1..={MAX_BLUR_RADIUS}, got {}",
                self.radius
            )));
        }
        Ok(())
    }

    fn run(
        &self,
        input: &PixelSurface,
        output: &mut PixelSurface,
        _frame: FrameIndex,
    ) -> CellfxResult<()> {
        let rect = blit_centered(input, output)?;
        if input.is_empty() {
            return Ok(());
        }
        let (w, h) = input.size();

        // Premultiplied `[r*a, g*a, b*a, a]` per cell.
        let mut src = alloc_filled(input.len(), [0.0f32; 4])?;
        for (px, (c, &a)) in src
            .iter_mut()
            .zip(input.colors().iter().zip(input.opacities()))
        {
            let a = f32::from(a);
            *px = [f32::from(c.r) * a, f32::from(c.g) * a, f32::from(c.b) * a, a];
        }
        let mut tmp = alloc_filled(input.len(), [0.0f32; 4])?;

        horizontal_pass(&src, &mut tmp, w, h, self.radius);
        vertical_pass(&tmp, &mut src, w, h, self.radius);

        let ow = output.width() as usize;
        let (colors, opacities, _) = output.maps_mut();
        for row in 0..h as usize {
            for col in 0..w as usize {
                let [r, g, b, a] = src[row * w as usize + col];
                let di = (rect.y as usize + row) * ow + rect.x as usize + col;
                opacities[di] = f32_to_u8(a);
                if a > 0.0 {
                    colors[di] = Rgb8::new(f32_to_u8(r / a), f32_to_u8(g / a), f32_to_u8(b / a));
                }
            }
        }
        Ok(())
    }
}

fn horizontal_pass(src: &[[f32; 4]], dst: &mut [[f32; 4]], width: u32, height: u32, radius: u32) {
    let w = i64::from(width);
    let r = i64::from(radius);
    for y in 0..i64::from(height) {
        let base = (y * w) as usize;
        for x in 0..w {
            let lo = (x - r).max(0);
            let hi = (x + r).min(w - 1);
            let mut acc = [0.0f32; 4];
            for sx in lo..=hi {
                let px = src[base + sx as usize];
                for c in 0..4 {
                    acc[c] += px[c];
                }
            }
            let n = (hi - lo + 1) as f32;
            dst[base + x as usize] = acc.map(|v| v / n);
        }
    }
}

fn vertical_pass(src: &[[f32; 4]], dst: &mut [[f32; 4]], width: u32, height: u32, radius: u32) {
    let w = i64::from(width);
    let h = i64::from(height);
    let r = i64::from(radius);
    for y in 0..h {
        let lo = (y - r).max(0);
        let hi = (y + r).min(h - 1);
        let n = (hi - lo + 1) as f32;
        for x in 0..w {
            let mut acc = [0.0f32; 4];
            for sy in lo..=hi {
                let px = src[(sy * w + x) as usize];
                for c in 0..4 {
                    acc[c] += px[c];
                }
            }
            dst[(y * w + x) as usize] = acc.map(|v| v / n);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/blur.rs"]
mod tests;
