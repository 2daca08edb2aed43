use crate::effects::effect::{RenderEffect, blit_centered};
use crate::foundation::core::{FrameIndex, Rgb8};
use crate::foundation::error::{CellfxError, CellfxResult};
use crate::foundation::math::{lerp_f32, lerp_u8};
use crate::surface::pixel::PixelSurface;

/// Linear color fade toward `color` over `duration` frames.
///
/// At amount `a` every cell becomes `c + (color - c) * a`; opacity and glyphs are kept.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Fade {
    pub alpha_start: f32,
    pub alpha_end: f32,
    pub duration: u64,
    #[serde(default)]
    pub color: Rgb8,
}

impl Fade {
    /// Fade toward black.
    pub fn new(alpha_start: f32, alpha_end: f32, duration: u64) -> Self {
        Self {
            alpha_start,
            alpha_end,
            duration,
            color: Rgb8::BLACK,
        }
    }

    pub fn with_color(mut self, color: Rgb8) -> Self {
        self.color = color;
        self
    }

    /// Fade amount at `frame`; holds at `alpha_end` past the duration.
    pub fn amount_at(&self, frame: FrameIndex) -> f32 {
        lerp_f32(self.alpha_start, self.alpha_end, frame.progress(self.duration))
    }
}

impl RenderEffect for Fade {
    fn name(&self) -> &'static str {
        "fade"
    }

    fn validate(&self, _input: &PixelSurface) -> CellfxResult<()> {
        if self.duration == 0 {
            return Err(CellfxError::invalid_duration("fade duration must be > 0"));
        }
        for (label, v) in [("alpha_start", self.alpha_start), ("alpha_end", self.alpha_end)] {
            if !v.is_finite() || !(0.0..=1.0).contains(&v) {
                return Err(CellfxError::invalid_alpha_range(format!(
                    "fade {label} must be in [0, 1], got {v}"
                )));
            }
        }
        Ok(())
    }

    fn run(
        &self,
        input: &PixelSurface,
        output: &mut PixelSurface,
        frame: FrameIndex,
    ) -> CellfxResult<()> {
        let rect = blit_centered(input, output)?;
        let a = self.amount_at(frame);
        let target = self.color;
        let ow = output.width() as usize;
        let colors = output.colors_mut();
        for row in 0..rect.h as usize {
            let base = (rect.y as usize + row) * ow + rect.x as usize;
            for c in &mut colors[base..base + rect.w as usize] {
                *c = Rgb8::new(
                    lerp_u8(c.r, target.r, a),
                    lerp_u8(c.g, target.g, a),
                    lerp_u8(c.b, target.b, a),
                );
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/fade.rs"]
mod tests;
